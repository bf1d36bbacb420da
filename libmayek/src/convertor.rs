//! Bengali grapheme to phoneme conversion.
//!
//! A cleaned word is segmented left to right into graphemes of one or two
//! characters, each paired with a `Token`. The two sequences always have the
//! same length: `tokens[i]` is the reading of `graphemes[i]`, and the
//! graphemes concatenate back to the word.

use std::fmt;

use libmayek_core::{bengali as bn, Phoneme, PoA, TrieNode};
use once_cell::sync::Lazy;
use phf::phf_map;

/// Longest grapheme the charmap knows, in characters (the two-letter
/// diphthong spellings).
pub const MAX_GRAPHEME_LEN: usize = 2;

/// One unit of the phoneme sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Token {
    Phoneme(Phoneme),
    /// The virama, kept as a structural separator between cluster members.
    Virama,
    /// A Bengali character with no phonemic reading (candrabindu, visarga,
    /// digits). Dropped before spelling.
    Unmapped(char),
}

impl Token {
    pub fn phoneme(self) -> Option<Phoneme> {
        match self {
            Token::Phoneme(p) => Some(p),
            _ => None,
        }
    }

    pub fn is_consonant(self) -> bool {
        self.phoneme().is_some_and(Phoneme::is_consonant)
    }

    /// Monophthong or diphthong.
    pub fn is_vowel(self) -> bool {
        self.phoneme().is_some_and(Phoneme::is_vowel)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Phoneme(p) => f.write_str(p.name()),
            Token::Virama => write!(f, "{}", bn::VIRAMA),
            Token::Unmapped(c) => write!(f, "{c}"),
        }
    }
}

/// Single-character readings. Diphthong spellings are added from the
/// alphabet tables when the charmap is built.
static LETTERS: phf::Map<char, Phoneme> = phf_map! {
    '\u{0995}' => Phoneme::K,
    '\u{0996}' => Phoneme::Kh,
    '\u{0997}' => Phoneme::G,
    '\u{0998}' => Phoneme::Gh,
    '\u{0982}' => Phoneme::Ng,
    '\u{0999}' => Phoneme::Ng,
    '\u{099A}' => Phoneme::C,
    '\u{099C}' => Phoneme::Z,
    '\u{099D}' => Phoneme::Zh,
    '\u{099F}' => Phoneme::T,
    '\u{09A4}' => Phoneme::T,
    '\u{09CE}' => Phoneme::T,
    '\u{09A0}' => Phoneme::Th,
    '\u{09A5}' => Phoneme::Th,
    '\u{09A1}' => Phoneme::D,
    '\u{09A6}' => Phoneme::D,
    '\u{09A2}' => Phoneme::Dh,
    '\u{09A7}' => Phoneme::Dh,
    '\u{099E}' => Phoneme::N,
    '\u{09A3}' => Phoneme::N,
    '\u{09A8}' => Phoneme::N,
    '\u{09AA}' => Phoneme::P,
    '\u{09AB}' => Phoneme::Ph,
    '\u{09AC}' => Phoneme::B,
    '\u{09AD}' => Phoneme::Bh,
    '\u{09AE}' => Phoneme::M,
    '\u{09DF}' => Phoneme::J,
    '\u{09AF}' => Phoneme::J,
    '\u{098B}' => Phoneme::R,
    '\u{09C3}' => Phoneme::R,
    '\u{09DC}' => Phoneme::R,
    '\u{09B0}' => Phoneme::R,
    '\u{09DD}' => Phoneme::R,
    '\u{09F1}' => Phoneme::W,
    '\u{09B2}' => Phoneme::L,
    '\u{099B}' => Phoneme::S,
    '\u{09B7}' => Phoneme::S,
    '\u{09B8}' => Phoneme::S,
    '\u{09B6}' => Phoneme::S,
    '\u{09B9}' => Phoneme::H,
    '\u{0987}' => Phoneme::I,
    '\u{0988}' => Phoneme::I,
    '\u{09BF}' => Phoneme::I,
    '\u{09C0}' => Phoneme::I,
    '\u{098F}' => Phoneme::E,
    '\u{09C7}' => Phoneme::E,
    '\u{0985}' => Phoneme::X,
    '\u{0989}' => Phoneme::U,
    '\u{098A}' => Phoneme::U,
    '\u{09C1}' => Phoneme::U,
    '\u{09C2}' => Phoneme::U,
    '\u{0993}' => Phoneme::O,
    '\u{09CB}' => Phoneme::O,
    '\u{0986}' => Phoneme::A,
    '\u{09BE}' => Phoneme::A,
};

static CHARMAP: Lazy<TrieNode<Phoneme>> = Lazy::new(|| {
    let mut trie = TrieNode::new();
    for (c, p) in LETTERS.entries() {
        trie.insert(c.encode_utf8(&mut [0; 4]), *p);
    }
    let diphthongs: [(Phoneme, &[&str]); 12] = [
        (Phoneme::Ai, &bn::INITIAL_AI),
        (Phoneme::Xi, &bn::INITIAL_XI),
        (Phoneme::Oi, &bn::INITIAL_OI),
        (Phoneme::Ui, &bn::INITIAL_UI),
        (Phoneme::Au, &bn::INITIAL_AU),
        (Phoneme::Xu, &bn::INITIAL_XU),
        (Phoneme::Ai, &bn::FINAL_AI),
        (Phoneme::Xi, &bn::FINAL_XI),
        (Phoneme::Oi, &bn::FINAL_OI),
        (Phoneme::Ui, &bn::FINAL_UI),
        (Phoneme::Au, &bn::FINAL_AU),
        (Phoneme::Xu, &bn::FINAL_XU),
    ];
    for (p, spellings) in diphthongs {
        for s in spellings {
            trie.insert(s, p);
        }
    }
    trie
});

/// Reading of a single character, if it has one.
pub fn phoneme_of(c: char) -> Option<Phoneme> {
    LETTERS.get(&c).copied()
}

/// Parallel token and grapheme sequences for one word or syllable.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Segmentation {
    pub tokens: Vec<Token>,
    pub graphemes: Vec<String>,
}

impl Segmentation {
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    fn push(&mut self, token: Token, grapheme: &[char]) {
        self.tokens.push(token);
        self.graphemes.push(grapheme.iter().collect());
    }
}

#[derive(Debug, Clone, Copy)]
pub struct PhonemeConvertor {
    expand_vocalic_r: bool,
    bophola_as_w: bool,
}

impl Default for PhonemeConvertor {
    fn default() -> Self {
        Self::new(false, true)
    }
}

impl PhonemeConvertor {
    pub fn new(expand_vocalic_r: bool, bophola_as_w: bool) -> Self {
        Self {
            expand_vocalic_r,
            bophola_as_w,
        }
    }

    /// Segment a cleaned word into aligned tokens and graphemes.
    ///
    /// Two-character diphthong spellings win over single characters, except
    /// when the second character is ya/yya and a vowel sign, consonant sign
    /// or virama follows: there the ya belongs to the next syllable.
    pub fn extract_seq(&self, word: &str) -> Segmentation {
        let chars: Vec<char> = word.chars().collect();
        let mut seg = Segmentation::default();
        let mut i = 0;
        while i < chars.len() {
            let c = chars[i];
            if c == bn::VIRAMA {
                seg.push(Token::Virama, &chars[i..=i]);
                i += 1;
                continue;
            }
            let matched = CHARMAP
                .walk_prefixes(&chars, i)
                .into_iter()
                .rev()
                .find(|&(end, _)| !is_semivowel_y(&chars, i, end));
            match matched {
                Some((end, &p)) => {
                    let p = if p == Phoneme::B && self.is_bophola(&seg.tokens) {
                        Phoneme::W
                    } else {
                        p
                    };
                    seg.push(Token::Phoneme(p), &chars[i..end]);
                    i = end;
                }
                None => {
                    seg.push(Token::Unmapped(c), &chars[i..=i]);
                    i += 1;
                }
            }
        }
        seg
    }

    /// Token sequence of a syllable as it will be spelled. Differs from
    /// `extract_seq` only in the optional vocalic-r expansion.
    pub fn extract_phonemes(&self, syllable: &str) -> Vec<Token> {
        let seg = self.extract_seq(syllable);
        if !self.expand_vocalic_r {
            return seg.tokens;
        }
        let mut tokens = Vec::with_capacity(seg.len() + 1);
        for (token, grapheme) in seg.tokens.into_iter().zip(&seg.graphemes) {
            tokens.push(token);
            if is_vocalic_r(grapheme) {
                tokens.push(Token::Phoneme(Phoneme::I));
            }
        }
        tokens
    }

    /// Insert the inherent vowel where a syllable needs it.
    ///
    /// A consonant followed by another consonant gets a schwa; one that is
    /// syllable-final or followed by anything else (vowel, virama) does not.
    /// A syllable made of one consonant always gets one. Afterwards a leading
    /// virama is dropped and only phonemes and viramas are kept.
    pub fn prepare_syllable_phoneme(&self, tokens: &[Token]) -> Vec<Token> {
        let schwa = Token::Phoneme(Phoneme::X);
        let last = tokens.len().saturating_sub(1);
        let mut out = Vec::with_capacity(tokens.len() * 2);
        for (idx, &token) in tokens.iter().enumerate() {
            out.push(token);
            if !token.is_consonant() {
                continue;
            }
            if tokens.len() == 1 || (idx < last && tokens[idx + 1].is_consonant()) {
                out.push(schwa);
            }
        }
        if out.first() == Some(&Token::Virama) {
            out.remove(0);
        }
        out.retain(|t| !matches!(t, Token::Unmapped(_)));
        out
    }

    /// Virama + ba after a non-labial consonant reads as /w/.
    fn is_bophola(&self, tokens: &[Token]) -> bool {
        if !self.bophola_as_w {
            return false;
        }
        match tokens {
            [.., Token::Phoneme(prev), Token::Virama] => {
                prev.is_consonant() && prev.place() != PoA::Bilabial
            }
            _ => false,
        }
    }
}

/// A ya/yya diphthong spelling that is really vowel + consonant.
fn is_semivowel_y(chars: &[char], start: usize, end: usize) -> bool {
    end - start == MAX_GRAPHEME_LEN
        && matches!(chars[end - 1], bn::YA | bn::YYA)
        && chars.get(end).is_some_and(|&next| {
            bn::is_dependent_vowel(next) || bn::is_dependent_consonant(next) || next == bn::VIRAMA
        })
}

fn is_vocalic_r(grapheme: &str) -> bool {
    let mut chars = grapheme.chars();
    matches!(
        (chars.next(), chars.next()),
        (Some(bn::R_VOCALIC | bn::SIGN_R_VOCALIC), None)
    )
}

/// Slice `seq` into runs that start at every tagged offset.
///
/// `tags[i]` marks a boundary before `seq[i]`; offsets past the end and
/// offset 0 are ignored.
pub fn split_by_tags<T: Clone>(seq: &[T], tags: &[bool]) -> Vec<Vec<T>> {
    let mut parts = Vec::new();
    let mut start = 0;
    for idx in 1..seq.len() {
        if tags.get(idx).copied().unwrap_or(false) {
            parts.push(seq[start..idx].to_vec());
            start = idx;
        }
    }
    if start < seq.len() {
        parts.push(seq[start..].to_vec());
    }
    parts
}

/// Join a token sequence for display, the virama shown as itself.
pub fn tokens_to_string(tokens: &[Token], sep: &str) -> String {
    tokens
        .iter()
        .map(Token::to_string)
        .collect::<Vec<_>>()
        .join(sep)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(tokens: &[Token]) -> String {
        tokens_to_string(tokens, ".")
    }

    #[test]
    fn charmap_window_is_bounded() {
        assert_eq!(CHARMAP.depth(), MAX_GRAPHEME_LEN);
    }

    #[test]
    fn extracts_aligned_sequences() {
        let seg = PhonemeConvertor::default().extract_seq("কাজ");
        assert_eq!(names(&seg.tokens), "K.A.Z");
        assert_eq!(seg.graphemes, vec!["ক", "া", "জ"]);
    }

    #[test]
    fn diphthong_takes_two_characters() {
        let seg = PhonemeConvertor::default().extract_seq("ভাই");
        assert_eq!(names(&seg.tokens), "BH.AI");
        assert_eq!(seg.graphemes, vec!["ভ", "াই"]);
    }

    #[test]
    fn ya_before_vowel_sign_is_not_a_diphthong() {
        let seg = PhonemeConvertor::default().extract_seq("\u{09AF}\u{09BE}\u{09DF}");
        assert_eq!(names(&seg.tokens), "J.A.J.A");
        let seg = PhonemeConvertor::default().extract_seq("যায়");
        assert_eq!(names(&seg.tokens), "J.AI");
    }

    #[test]
    fn bophola_after_non_labial() {
        let conv = PhonemeConvertor::default();
        assert_eq!(names(&conv.extract_seq("স্ব").tokens), "S.্.W");
        assert_eq!(names(&conv.extract_seq("ম্ব").tokens), "M.্.B");
        assert_eq!(names(&conv.extract_seq("ব্ব").tokens), "B.্.B");
        let literal = PhonemeConvertor::new(false, false);
        assert_eq!(names(&literal.extract_seq("স্ব").tokens), "S.্.B");
    }

    #[test]
    fn vocalic_r_expansion_is_opt_in() {
        assert_eq!(names(&PhonemeConvertor::default().extract_phonemes("কৃ")), "K.R");
        let conv = PhonemeConvertor::new(true, true);
        assert_eq!(names(&conv.extract_phonemes("কৃ")), "K.R.I");
        assert_eq!(conv.extract_seq("কৃ").len(), 2);
    }

    #[test]
    fn unmapped_characters_pass_through() {
        let seg = PhonemeConvertor::default().extract_seq("কঁ");
        assert_eq!(seg.tokens, vec![Token::Phoneme(Phoneme::K), Token::Unmapped('\u{0981}')]);
    }

    #[test]
    fn schwa_insertion() {
        let conv = PhonemeConvertor::default();
        let prep = |w: &str| names(&conv.prepare_syllable_phoneme(&conv.extract_seq(w).tokens));
        assert_eq!(prep("ক"), "K.X");
        assert_eq!(prep("কা"), "K.A");
        assert_eq!(prep("কলম"), "K.X.L.X.M");
        assert_eq!(prep("ক্ষ"), "K.্.S");
        assert_eq!(prep("কঁ"), "K");
        assert_eq!(prep("ঁ"), "");
    }

    #[test]
    fn split_by_tags_partitions() {
        let seq = vec!['a', 'b', 'c', 'd'];
        let tags = vec![false, false, true, false, true];
        assert_eq!(split_by_tags(&seq, &tags), vec![vec!['a', 'b'], vec!['c', 'd']]);
        assert!(split_by_tags::<char>(&[], &[true]).is_empty());
    }
}
