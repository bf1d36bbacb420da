//! Bengali alphabet inventory.
//!
//! Named code points for the Bengali block plus the derived character
//! classes used by the cleaner, the phoneme convertor and the syllabifier.
//! Membership tests are range checks or lookups into sets built once.

use once_cell::sync::Lazy;
use std::collections::HashSet;

// Signs
pub const CANDRABINDU: char = '\u{0981}';
pub const ANUSVARA: char = '\u{0982}';
pub const VISARGA: char = '\u{0983}';

// Independent vowels
pub const A: char = '\u{0985}';
pub const AA: char = '\u{0986}';
pub const I: char = '\u{0987}';
pub const II: char = '\u{0988}';
pub const U: char = '\u{0989}';
pub const UU: char = '\u{098A}';
pub const R_VOCALIC: char = '\u{098B}';
pub const E: char = '\u{098F}';
pub const AI: char = '\u{0990}';
pub const O: char = '\u{0993}';
pub const AU: char = '\u{0994}';

// Consonants
pub const KA: char = '\u{0995}';
pub const KHA: char = '\u{0996}';
pub const GA: char = '\u{0997}';
pub const GHA: char = '\u{0998}';
pub const NGA: char = '\u{0999}';
pub const CA: char = '\u{099A}';
pub const CHA: char = '\u{099B}';
pub const JA: char = '\u{099C}';
pub const JHA: char = '\u{099D}';
pub const NYA: char = '\u{099E}';
pub const TTA: char = '\u{099F}';
pub const TTHA: char = '\u{09A0}';
pub const DDA: char = '\u{09A1}';
pub const DDHA: char = '\u{09A2}';
pub const NNA: char = '\u{09A3}';
pub const TA: char = '\u{09A4}';
pub const THA: char = '\u{09A5}';
pub const DA: char = '\u{09A6}';
pub const DHA: char = '\u{09A7}';
pub const NA: char = '\u{09A8}';
pub const PA: char = '\u{09AA}';
pub const PHA: char = '\u{09AB}';
pub const BA: char = '\u{09AC}';
pub const BHA: char = '\u{09AD}';
pub const MA: char = '\u{09AE}';
pub const YA: char = '\u{09AF}';
pub const RA: char = '\u{09B0}';
pub const LA: char = '\u{09B2}';
pub const SHA: char = '\u{09B6}';
pub const SSA: char = '\u{09B7}';
pub const SA: char = '\u{09B8}';
pub const HA: char = '\u{09B9}';

pub const NUKTA: char = '\u{09BC}';
pub const AVAGRAHA: char = '\u{09BD}';

// Dependent vowel signs
pub const SIGN_AA: char = '\u{09BE}';
pub const SIGN_I: char = '\u{09BF}';
pub const SIGN_II: char = '\u{09C0}';
pub const SIGN_U: char = '\u{09C1}';
pub const SIGN_UU: char = '\u{09C2}';
pub const SIGN_R_VOCALIC: char = '\u{09C3}';
pub const SIGN_E: char = '\u{09C7}';
pub const SIGN_AI: char = '\u{09C8}';
pub const SIGN_O: char = '\u{09CB}';
pub const SIGN_AU: char = '\u{09CC}';

pub const VIRAMA: char = '\u{09CD}';
pub const KHANDA_TA: char = '\u{09CE}';
pub const AU_LENGTH_MARK: char = '\u{09D7}';

// Nukta letters
pub const RRA: char = '\u{09DC}';
pub const RHA: char = '\u{09DD}';
pub const YYA: char = '\u{09DF}';

pub const DIGIT_ZERO: char = '\u{09E6}';
pub const DIGIT_NINE: char = '\u{09EF}';

/// Ra with middle diagonal, the Assamese wa.
pub const WA: char = '\u{09F1}';

pub const FIRST_CHAR: char = CANDRABINDU;
pub const LAST_CHAR: char = WA;

// Independent diphthongs (written with full vowel letters)
pub const INITIAL_AI: [&str; 4] = [
    "\u{0986}\u{0987}",
    "\u{0986}\u{0988}",
    "\u{0986}\u{09AF}",
    "\u{0986}\u{09DF}",
];
pub const INITIAL_XI: [&str; 1] = ["\u{0990}"];
pub const INITIAL_OI: [&str; 4] = [
    "\u{0993}\u{0987}",
    "\u{0993}\u{0988}",
    "\u{0993}\u{09AF}",
    "\u{0993}\u{09DF}",
];
pub const INITIAL_UI: [&str; 8] = [
    "\u{0989}\u{0987}",
    "\u{098A}\u{0987}",
    "\u{0989}\u{0988}",
    "\u{098A}\u{0988}",
    "\u{0989}\u{09AF}",
    "\u{098A}\u{09AF}",
    "\u{0989}\u{09DF}",
    "\u{098A}\u{09DF}",
];
pub const INITIAL_AU: [&str; 3] = ["\u{0986}\u{0989}", "\u{0986}\u{098A}", "\u{0986}\u{0993}"];
pub const INITIAL_XU: [&str; 1] = ["\u{0994}"];

// Dependent diphthongs (starting with a vowel sign)
pub const FINAL_AI: [&str; 4] = [
    "\u{09BE}\u{0987}",
    "\u{09BE}\u{0988}",
    "\u{09BE}\u{09AF}",
    "\u{09BE}\u{09DF}",
];
pub const FINAL_XI: [&str; 1] = ["\u{09C8}"];
pub const FINAL_OI: [&str; 4] = [
    "\u{09CB}\u{0987}",
    "\u{09CB}\u{0988}",
    "\u{09CB}\u{09AF}",
    "\u{09CB}\u{09DF}",
];
pub const FINAL_UI: [&str; 8] = [
    "\u{09C1}\u{0987}",
    "\u{09C2}\u{0987}",
    "\u{09C1}\u{0988}",
    "\u{09C2}\u{0988}",
    "\u{09C1}\u{09AF}",
    "\u{09C2}\u{09AF}",
    "\u{09C1}\u{09DF}",
    "\u{09C2}\u{09DF}",
];
pub const FINAL_AU: [&str; 3] = ["\u{09BE}\u{0989}", "\u{09BE}\u{098A}", "\u{09BE}\u{0993}"];
pub const FINAL_XU: [&str; 1] = ["\u{09CC}"];

static INITIAL_DIPHTHONGS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    INITIAL_AI
        .iter()
        .chain(INITIAL_XI.iter())
        .chain(INITIAL_OI.iter())
        .chain(INITIAL_UI.iter())
        .chain(INITIAL_AU.iter())
        .chain(INITIAL_XU.iter())
        .copied()
        .collect()
});

static FINAL_DIPHTHONGS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    FINAL_AI
        .iter()
        .chain(FINAL_XI.iter())
        .chain(FINAL_OI.iter())
        .chain(FINAL_UI.iter())
        .chain(FINAL_AU.iter())
        .chain(FINAL_XU.iter())
        .copied()
        .collect()
});

/// Whether `c` is a Bengali character the transliterator accepts.
///
/// Unassigned code points inside the range and the vocalic l/rr letters and
/// signs are rejected.
pub fn is_char(c: char) -> bool {
    (FIRST_CHAR..=LAST_CHAR).contains(&c) && !is_unassigned(c) && !is_unsupported(c)
}

fn is_unassigned(c: char) -> bool {
    matches!(
        c,
        '\u{0984}'
            | '\u{098D}'..='\u{098E}'
            | '\u{0991}'..='\u{0992}'
            | '\u{09A9}'
            | '\u{09B1}'
            | '\u{09B3}'..='\u{09B5}'
            | '\u{09BA}'..='\u{09BB}'
            | '\u{09C5}'..='\u{09C6}'
            | '\u{09C9}'..='\u{09CA}'
            | '\u{09CF}'..='\u{09D6}'
            | '\u{09D8}'..='\u{09DB}'
            | '\u{09DE}'
            | '\u{09E4}'..='\u{09E5}'
    )
}

/// Vocalic l and rr, letters and signs.
fn is_unsupported(c: char) -> bool {
    matches!(c, '\u{098C}' | '\u{09E0}'..='\u{09E3}')
}

pub fn is_digit(c: char) -> bool {
    (DIGIT_ZERO..=DIGIT_NINE).contains(&c)
}

/// Full vowel letters, অ through ঔ.
pub fn is_independent_vowel(c: char) -> bool {
    (A..=AU).contains(&c)
}

pub fn is_independent_consonant(c: char) -> bool {
    (KA..=HA).contains(&c) || matches!(c, RRA | RHA | YYA | WA)
}

/// Vowel signs (matras). Vocalic-r sign is classed as a consonant sign.
pub fn is_dependent_vowel(c: char) -> bool {
    (SIGN_AA..=SIGN_AU).contains(&c) && c != SIGN_R_VOCALIC
}

pub fn is_dependent_consonant(c: char) -> bool {
    matches!(c, SIGN_R_VOCALIC | KHANDA_TA | ANUSVARA)
}

pub fn is_left_vowel(c: char) -> bool {
    matches!(c, SIGN_I | SIGN_E | SIGN_AI)
}

pub fn is_right_vowel(c: char) -> bool {
    matches!(c, SIGN_AA | SIGN_II)
}

pub fn is_bottom_vowel(c: char) -> bool {
    matches!(c, SIGN_U | SIGN_UU)
}

pub fn is_enclosing_vowel(c: char) -> bool {
    matches!(c, SIGN_O | SIGN_AU)
}

pub fn is_punctuation(c: char) -> bool {
    matches!(c, CANDRABINDU | VISARGA | AVAGRAHA)
}

/// Marks that never stand on their own in clean text.
pub fn is_incomplete(c: char) -> bool {
    matches!(c, NUKTA | AU_LENGTH_MARK)
}

pub fn is_independent_diphthong(s: &str) -> bool {
    INITIAL_DIPHTHONGS.contains(s)
}

pub fn is_dependent_diphthong(s: &str) -> bool {
    FINAL_DIPHTHONGS.contains(s)
}

pub fn independent_diphthongs() -> &'static HashSet<&'static str> {
    &INITIAL_DIPHTHONGS
}

pub fn dependent_diphthongs() -> &'static HashSet<&'static str> {
    &FINAL_DIPHTHONGS
}
