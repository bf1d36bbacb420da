//! Phoneme inventory shared by both scripts.
//!
//! 36 phonemes: 24 consonants, 6 monophthongs (including the schwa `X`)
//! and 6 diphthongs. Every phoneme carries its IPA aliases and, depending on
//! its class, consonant or vowel features. Feature lookups are total:
//! vowels report `PoA::Undefined`/`MoA::Undefined` and rank above every
//! consonant on both sonority scales.

use once_cell::sync::Lazy;
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use crate::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Phoneme {
    K,
    Kh,
    G,
    Gh,
    Ng,
    C,
    Z,
    Zh,
    T,
    Th,
    D,
    Dh,
    N,
    P,
    Ph,
    B,
    Bh,
    M,
    J,
    R,
    W,
    L,
    S,
    H,
    I,
    E,
    A,
    /// Schwa, the inherent vowel.
    X,
    U,
    O,
    Ai,
    Xi,
    Ui,
    Oi,
    Au,
    Xu,
}

/// Place of articulation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PoA {
    Bilabial,
    Alveolar,
    Palatal,
    Velar,
    Glottal,
    Undefined,
}

/// Manner of articulation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MoA {
    Nasal,
    Plosive,
    Fricative,
    Approximant,
    TapFlap,
    Trill,
    LateralFricative,
    LateralApproximant,
    LateralTapFlap,
    Undefined,
}

/// Sonority classes after Sievers (1876), ordered by relative loudness.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Sievers {
    PhoneS = 0,
    Obstruent = 1,
    Nasal = 2,
    Liquid = 3,
    Glide = 4,
    Vowel = 5,
}

/// Sonority classes after Parker (2002), ordered by acoustic intensity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Parker {
    VclStop = 0,
    VclFricative = 1,
    VcdStop = 2,
    VcdFricative = 3,
    PhoneH = 4,
    Nasal = 5,
    Trill = 6,
    Flap = 7,
    Lateral = 8,
    Rhotic = 9,
    Glide = 10,
    Vowel = 11,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VowelTongue {
    Front,
    Central,
    Back,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VowelMouth {
    Close,
    Mid,
    Open,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VowelLips {
    Rounded,
    Unrounded,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConsonantFeatures {
    pub sievers: Sievers,
    pub parker: Parker,
    pub place: PoA,
    pub manner: MoA,
    pub voiced: bool,
}

impl ConsonantFeatures {
    /// Reported for every non-consonant.
    pub const UNDEFINED: ConsonantFeatures = ConsonantFeatures {
        sievers: Sievers::Vowel,
        parker: Parker::Vowel,
        place: PoA::Undefined,
        manner: MoA::Undefined,
        voiced: false,
    };

    const fn new(sievers: Sievers, parker: Parker, place: PoA, manner: MoA, voiced: bool) -> Self {
        Self {
            sievers,
            parker,
            place,
            manner,
            voiced,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VowelFeatures {
    pub tongue: VowelTongue,
    pub mouth: VowelMouth,
    pub lips: VowelLips,
}

impl Phoneme {
    pub const CONSONANTS: [Phoneme; 24] = [
        Phoneme::K,
        Phoneme::Kh,
        Phoneme::G,
        Phoneme::Gh,
        Phoneme::Ng,
        Phoneme::C,
        Phoneme::Z,
        Phoneme::Zh,
        Phoneme::T,
        Phoneme::Th,
        Phoneme::D,
        Phoneme::Dh,
        Phoneme::N,
        Phoneme::P,
        Phoneme::Ph,
        Phoneme::B,
        Phoneme::Bh,
        Phoneme::M,
        Phoneme::J,
        Phoneme::R,
        Phoneme::W,
        Phoneme::L,
        Phoneme::S,
        Phoneme::H,
    ];

    pub const MONOPHTHONGS: [Phoneme; 6] = [
        Phoneme::I,
        Phoneme::E,
        Phoneme::A,
        Phoneme::X,
        Phoneme::U,
        Phoneme::O,
    ];

    pub const DIPHTHONGS: [Phoneme; 6] = [
        Phoneme::Ai,
        Phoneme::Xi,
        Phoneme::Ui,
        Phoneme::Oi,
        Phoneme::Au,
        Phoneme::Xu,
    ];

    /// All 36 phonemes, consonants first.
    pub fn all() -> impl Iterator<Item = Phoneme> {
        Self::CONSONANTS
            .into_iter()
            .chain(Self::MONOPHTHONGS)
            .chain(Self::DIPHTHONGS)
    }

    pub fn is_consonant(self) -> bool {
        self <= Phoneme::H
    }

    pub fn is_monophthong(self) -> bool {
        Self::MONOPHTHONGS.contains(&self)
    }

    pub fn is_diphthong(self) -> bool {
        Self::DIPHTHONGS.contains(&self)
    }

    /// Monophthongs and diphthongs.
    pub fn is_vowel(self) -> bool {
        !self.is_consonant()
    }

    /// Upper-case symbolic name, e.g. `KH`.
    pub fn name(self) -> &'static str {
        match self {
            Phoneme::K => "K",
            Phoneme::Kh => "KH",
            Phoneme::G => "G",
            Phoneme::Gh => "GH",
            Phoneme::Ng => "NG",
            Phoneme::C => "C",
            Phoneme::Z => "Z",
            Phoneme::Zh => "ZH",
            Phoneme::T => "T",
            Phoneme::Th => "TH",
            Phoneme::D => "D",
            Phoneme::Dh => "DH",
            Phoneme::N => "N",
            Phoneme::P => "P",
            Phoneme::Ph => "PH",
            Phoneme::B => "B",
            Phoneme::Bh => "BH",
            Phoneme::M => "M",
            Phoneme::J => "J",
            Phoneme::R => "R",
            Phoneme::W => "W",
            Phoneme::L => "L",
            Phoneme::S => "S",
            Phoneme::H => "H",
            Phoneme::I => "I",
            Phoneme::E => "E",
            Phoneme::A => "A",
            Phoneme::X => "X",
            Phoneme::U => "U",
            Phoneme::O => "O",
            Phoneme::Ai => "AI",
            Phoneme::Xi => "XI",
            Phoneme::Ui => "UI",
            Phoneme::Oi => "OI",
            Phoneme::Au => "AU",
            Phoneme::Xu => "XU",
        }
    }

    /// IPA realizations, primary first.
    pub fn ipa_aliases(self) -> &'static [&'static str] {
        match self {
            Phoneme::K => &["k"],
            Phoneme::Kh => &["kʰ"],
            Phoneme::G => &["g"],
            Phoneme::Gh => &["gʰ"],
            Phoneme::Ng => &["ŋ"],
            Phoneme::C => &["c", "tʃ"],
            Phoneme::Z => &["ɟ", "ʒ", "dʒ"],
            Phoneme::Zh => &["ɟʰ", "dʒʰ"],
            Phoneme::T => &["t"],
            Phoneme::Th => &["tʰ", "θ"],
            Phoneme::D => &["d"],
            Phoneme::Dh => &["dʰ", "ð"],
            Phoneme::N => &["n"],
            Phoneme::P => &["p"],
            Phoneme::Ph => &["pʰ", "f"],
            Phoneme::B => &["b"],
            Phoneme::Bh => &["bʰ", "v"],
            Phoneme::M => &["m"],
            Phoneme::J => &["j"],
            Phoneme::R => &["r"],
            Phoneme::W => &["w"],
            Phoneme::L => &["l"],
            Phoneme::S => &["s", "ʃ"],
            Phoneme::H => &["h"],
            Phoneme::I => &["i"],
            Phoneme::E => &["e", "æ", "ɛ"],
            Phoneme::A => &["a"],
            Phoneme::X => &["ɘ", "ʌ"],
            Phoneme::U => &["u", "ʊ"],
            Phoneme::O => &["o", "ɔ"],
            Phoneme::Ai => &["ai"],
            Phoneme::Xi => &["ɘi"],
            Phoneme::Ui => &["ui"],
            Phoneme::Oi => &["oi"],
            Phoneme::Au => &["au"],
            Phoneme::Xu => &["ɘu"],
        }
    }

    pub fn primary_ipa(self) -> &'static str {
        self.ipa_aliases()[0]
    }

    pub fn consonant_features(self) -> ConsonantFeatures {
        use MoA::*;
        use PoA::*;
        let obstruent = Sievers::Obstruent;
        match self {
            Phoneme::K | Phoneme::Kh => {
                ConsonantFeatures::new(obstruent, Parker::VclStop, Velar, Plosive, false)
            }
            Phoneme::G | Phoneme::Gh => {
                ConsonantFeatures::new(obstruent, Parker::VcdStop, Velar, Plosive, true)
            }
            Phoneme::Ng => ConsonantFeatures::new(Sievers::Nasal, Parker::Nasal, Velar, Nasal, true),
            Phoneme::C => {
                ConsonantFeatures::new(obstruent, Parker::VclStop, Palatal, Plosive, false)
            }
            Phoneme::Z | Phoneme::Zh => {
                ConsonantFeatures::new(obstruent, Parker::VcdStop, Palatal, Plosive, true)
            }
            Phoneme::T | Phoneme::Th => {
                ConsonantFeatures::new(obstruent, Parker::VclStop, Alveolar, Plosive, false)
            }
            Phoneme::D | Phoneme::Dh => {
                ConsonantFeatures::new(obstruent, Parker::VcdStop, Alveolar, Plosive, true)
            }
            Phoneme::N => {
                ConsonantFeatures::new(Sievers::Nasal, Parker::Nasal, Alveolar, Nasal, true)
            }
            Phoneme::P | Phoneme::Ph => {
                ConsonantFeatures::new(obstruent, Parker::VclStop, Bilabial, Plosive, false)
            }
            Phoneme::B | Phoneme::Bh => {
                ConsonantFeatures::new(obstruent, Parker::VcdStop, Bilabial, Plosive, true)
            }
            Phoneme::M => {
                ConsonantFeatures::new(Sievers::Nasal, Parker::Nasal, Bilabial, Nasal, true)
            }
            Phoneme::J => {
                ConsonantFeatures::new(Sievers::Glide, Parker::Glide, Palatal, Approximant, true)
            }
            Phoneme::R => {
                ConsonantFeatures::new(Sievers::Liquid, Parker::Rhotic, Alveolar, Approximant, true)
            }
            Phoneme::W => {
                ConsonantFeatures::new(Sievers::Glide, Parker::Glide, Bilabial, Approximant, true)
            }
            Phoneme::L => ConsonantFeatures::new(
                Sievers::Liquid,
                Parker::Lateral,
                Alveolar,
                LateralApproximant,
                true,
            ),
            Phoneme::S => {
                ConsonantFeatures::new(Sievers::PhoneS, Parker::VclStop, Alveolar, Fricative, false)
            }
            Phoneme::H => {
                ConsonantFeatures::new(obstruent, Parker::PhoneH, Glottal, Fricative, false)
            }
            _ => ConsonantFeatures::UNDEFINED,
        }
    }

    /// Tongue, mouth and lip features. Only monophthongs have them.
    pub fn vowel_features(self) -> Option<VowelFeatures> {
        use VowelLips::*;
        use VowelMouth::*;
        use VowelTongue::*;
        let (tongue, mouth, lips) = match self {
            Phoneme::I => (Front, Close, Unrounded),
            Phoneme::E => (Front, Mid, Unrounded),
            Phoneme::X => (Central, Mid, Unrounded),
            Phoneme::U => (Central, Close, Rounded),
            Phoneme::O => (Back, Mid, Rounded),
            Phoneme::A => (Back, Open, Unrounded),
            _ => return None,
        };
        Some(VowelFeatures {
            tongue,
            mouth,
            lips,
        })
    }

    pub fn sievers(self) -> Sievers {
        self.consonant_features().sievers
    }

    pub fn parker(self) -> Parker {
        self.consonant_features().parker
    }

    pub fn place(self) -> PoA {
        self.consonant_features().place
    }

    pub fn manner(self) -> MoA {
        self.consonant_features().manner
    }

    pub fn is_voiced(self) -> bool {
        self.consonant_features().voiced
    }

    pub fn is_nasal(self) -> bool {
        self.manner() == MoA::Nasal
    }

    pub fn is_plosive(self) -> bool {
        self.manner() == MoA::Plosive
    }

    pub fn is_glide(self) -> bool {
        self.sievers() == Sievers::Glide
    }

    pub fn is_liquid(self) -> bool {
        self.sievers() == Sievers::Liquid
    }
}

impl fmt::Display for Phoneme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Phoneme {
    type Err = Error;

    /// Parse a symbolic name such as `kh` or `XI`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Phoneme::all()
            .find(|p| p.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| Error::UnknownPhoneme(s.to_string()))
    }
}

static IPA_TO_PHONEME: Lazy<HashMap<&'static str, Phoneme>> = Lazy::new(|| {
    let mut m = HashMap::new();
    for p in Phoneme::all() {
        for ipa in p.ipa_aliases() {
            m.insert(*ipa, p);
        }
    }
    m
});

/// Resolve any IPA alias to its phoneme.
pub fn ipa_to_phoneme(ipa: &str) -> Option<Phoneme> {
    IPA_TO_PHONEME.get(ipa).copied()
}

pub fn phoneme_to_ipa(phoneme: Phoneme) -> &'static str {
    phoneme.primary_ipa()
}

fn lookup(symbol: &str) -> Option<Phoneme> {
    ipa_to_phoneme(symbol).or_else(|| symbol.parse().ok())
}

/// Sievers sonority rank of a phoneme name or IPA symbol.
///
/// Vowels rank 5, unknown symbols -1.
pub fn sievers_rank(symbol: &str) -> i8 {
    lookup(symbol).map_or(-1, |p| p.sievers() as i8)
}

/// Parker sonority rank of a phoneme name or IPA symbol.
///
/// Vowels rank 11, unknown symbols -1.
pub fn parker_rank(symbol: &str) -> i8 {
    lookup(symbol).map_or(-1, |p| p.parker() as i8)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inventory_sizes() {
        assert_eq!(Phoneme::all().count(), 36);
        assert_eq!(Phoneme::all().filter(|p| p.is_consonant()).count(), 24);
        assert_eq!(Phoneme::all().filter(|p| p.is_vowel()).count(), 12);
        assert!(Phoneme::all().all(|p| p.is_vowel() == (p.is_monophthong() || p.is_diphthong())));
    }

    #[test]
    fn vowels_report_undefined_articulation() {
        assert_eq!(Phoneme::A.place(), PoA::Undefined);
        assert_eq!(Phoneme::Ai.manner(), MoA::Undefined);
        assert!(!Phoneme::X.is_voiced());
        assert!(Phoneme::Ai.vowel_features().is_none());
        assert_eq!(
            Phoneme::U.vowel_features().map(|f| f.lips),
            Some(VowelLips::Rounded)
        );
    }

    #[test]
    fn names_round_trip_through_parse() {
        for p in Phoneme::all() {
            assert_eq!(p.name().parse::<Phoneme>().ok(), Some(p));
        }
        assert_eq!("kh".parse::<Phoneme>().ok(), Some(Phoneme::Kh));
        assert!("Q".parse::<Phoneme>().is_err());
    }

    #[test]
    fn ipa_aliases_resolve_to_their_phoneme() {
        assert_eq!(ipa_to_phoneme("tʃ"), Some(Phoneme::C));
        assert_eq!(ipa_to_phoneme("ʌ"), Some(Phoneme::X));
        assert_eq!(ipa_to_phoneme("f"), Some(Phoneme::Ph));
        assert_eq!(ipa_to_phoneme("q"), None);
        assert_eq!(phoneme_to_ipa(Phoneme::Z), "ɟ");
    }

    #[test]
    fn sonority_ranks() {
        assert_eq!(sievers_rank("S"), 0);
        assert_eq!(sievers_rank("k"), 1);
        assert_eq!(sievers_rank("ŋ"), 2);
        assert_eq!(sievers_rank("L"), 3);
        assert_eq!(sievers_rank("j"), 4);
        assert_eq!(sievers_rank("ai"), 5);
        assert_eq!(parker_rank("a"), 11);
        assert_eq!(parker_rank("r"), 9);
        assert_eq!(parker_rank("h"), 4);
        assert_eq!(sievers_rank("?"), -1);
        assert_eq!(parker_rank(""), -1);
    }
}
