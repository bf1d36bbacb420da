//! Text cleaning for both scripts.
//!
//! Transcribed Bengali carries recurring keyboard errors: doubled signs,
//! vowel signs typed in two halves, nukta typed after the base letter. The
//! Bengali cleaner repairs these in a fixed order and then drops everything
//! outside the Bengali block. The Meetei Mayek cleaner does the equivalent
//! repairs on transliterated output.

use crate::{bengali as bn, meetei_mayek as mm, Config};
use tracing::trace;
use unicode_normalization::UnicodeNormalization;

/// Adjacent vowel-sign pairs and their intended single sign, applied in order.
const VOWEL_SIGN_FIXES: [(&str, &str); 12] = [
    ("\u{09BF}\u{09C0}", "\u{09C0}"),
    ("\u{09C0}\u{09BF}", "\u{09C0}"),
    ("\u{09C1}\u{09C2}", "\u{09C2}"),
    ("\u{09C2}\u{09C1}", "\u{09C2}"),
    ("\u{0985}\u{09BE}", "\u{0986}"),
    ("\u{0986}\u{09BE}", "\u{0986}"),
    ("\u{09C7}\u{09BE}", "\u{09CB}"),
    ("\u{09C7}\u{09D7}", "\u{09CC}"),
    ("\u{09BE}\u{09C7}", "\u{09CB}"),
    ("\u{09D7}\u{09BE}", "\u{09CC}"),
    ("\u{09CB}\u{09BE}", "\u{09CB}"),
    ("\u{09CB}\u{09D7}", "\u{09CC}"),
];

/// Base letter + nukta, resolved to the dedicated nukta letter.
const NUKTA_LETTERS: [(&str, &str); 3] = [
    ("\u{09A1}\u{09BC}", "\u{09DC}"),
    ("\u{09A2}\u{09BC}", "\u{09DD}"),
    ("\u{09AF}\u{09BC}", "\u{09DF}"),
];

/// Doubled ra-phala and ya-phala.
const DOUBLED_PHALA: [(&str, &str); 2] = [
    ("\u{09CD}\u{09B0}\u{09CD}\u{09B0}", "\u{09CD}\u{09B0}"),
    ("\u{09CD}\u{09AF}\u{09CD}\u{09AF}", "\u{09CD}\u{09AF}"),
];

const DIPHTHONG_FIXES: [(&str, &str); 4] = [
    ("\u{ABE5}\u{ABCF}", "\u{ABE5}\u{ABE2}"),
    ("\u{ABE3}\u{ABCF}", "\u{ABE3}\u{ABE2}"),
    ("\u{ABE8}\u{ABCF}", "\u{ABE8}\u{ABE2}"),
    ("\u{ABE5}\u{ABD1}\u{ABE3}", "\u{ABE5}\u{ABCE}"),
];

#[derive(Debug, Clone, Copy, Default)]
pub struct Cleaner {
    allow_digits: bool,
}

impl Cleaner {
    pub fn new(allow_digits: bool) -> Self {
        Self { allow_digits }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.allow_digits)
    }

    /// Clean a Bengali word.
    ///
    /// Passes are repeated until the word stops changing, so the result is
    /// a fixpoint: cleaning it again returns it unchanged. May return an
    /// empty string.
    pub fn clean_bn(&self, word: &str) -> String {
        let max_passes = 2 * word.chars().count() + 2;
        let mut current = word.to_string();
        for _ in 0..max_passes {
            let next = self.clean_bn_pass(&current);
            if next == current {
                break;
            }
            current = next;
        }
        current
    }

    fn clean_bn_pass(&self, word: &str) -> String {
        let mut s: String = word.nfc().collect();
        s = collapse_repeats(&s, |c| {
            c == bn::NUKTA || c == bn::VIRAMA || bn::is_dependent_vowel(c)
        });
        s = replace_all(s, &VOWEL_SIGN_FIXES);
        s = replace_all(s, &NUKTA_LETTERS);
        s.retain(|c| !bn::is_incomplete(c));
        let s = s.trim_start_matches(bn::VIRAMA);
        let mut s: String = if self.allow_digits {
            s.to_string()
        } else {
            s.chars().filter(|c| !bn::is_digit(*c)).collect()
        };
        s = drop_stray_virama(&s);
        s = replace_all(s, &DOUBLED_PHALA);
        s.chars()
            .filter(|&c| {
                let keep = bn::is_char(c);
                if !keep {
                    trace!(dropped = ?c, "character outside the Bengali block");
                }
                keep
            })
            .collect()
    }

    /// Clean Meetei Mayek text.
    pub fn clean_mm(&self, word: &str) -> String {
        let mut s: String = if self.allow_digits {
            word.to_string()
        } else {
            word.chars().filter(|c| !mm::is_digit(*c)).collect()
        };
        s = collapse_repeats(&s, mm::is_cheitap);
        s = replace_all(s, &DIPHTHONG_FIXES);
        s = fix_nung(&s);
        s = fix_ngou_lonsum(&s);
        s.chars().filter(|&c| mm::is_char(c)).collect()
    }
}

/// Rewrite ngou lonsum to nung wherever no cheitap vowel precedes it.
///
/// Ngou lonsum closes a syllable only after a written vowel sign; after a
/// bare consonant the nasal is written with nung.
pub fn fix_ngou_lonsum(word: &str) -> String {
    let mut out = String::with_capacity(word.len());
    let mut prev: Option<char> = None;
    for c in word.chars() {
        if c == mm::NGOU_LONSUM && !prev.is_some_and(mm::is_cheitap_vowel) {
            out.push(mm::NUNG);
        } else {
            out.push(c);
        }
        prev = Some(c);
    }
    out
}

fn fix_nung(word: &str) -> String {
    let mut out = String::with_capacity(word.len());
    let mut prev: Option<char> = None;
    for c in word.chars() {
        if c == mm::NUNG && prev.is_some_and(mm::is_cheitap_vowel) {
            out.push(mm::NGOU_LONSUM);
        } else {
            out.push(c);
        }
        prev = Some(c);
    }
    out
}

fn collapse_repeats(word: &str, collapsible: impl Fn(char) -> bool) -> String {
    let mut out = String::with_capacity(word.len());
    let mut prev: Option<char> = None;
    for c in word.chars() {
        if prev == Some(c) && collapsible(c) {
            continue;
        }
        out.push(c);
        prev = Some(c);
    }
    out
}

fn replace_all(mut s: String, table: &[(&str, &str)]) -> String {
    for (from, to) in table {
        if s.contains(from) {
            s = s.replace(from, to);
        }
    }
    s
}

/// Remove every virama that touches a vowel or a dependent consonant sign.
fn drop_stray_virama(word: &str) -> String {
    let blocks = |c: Option<&char>| {
        c.is_some_and(|&c| {
            bn::is_dependent_vowel(c) || bn::is_independent_vowel(c) || bn::is_dependent_consonant(c)
        })
    };
    let chars: Vec<char> = word.chars().collect();
    chars
        .iter()
        .enumerate()
        .filter(|&(i, &c)| {
            c != bn::VIRAMA
                || !(blocks(i.checked_sub(1).and_then(|p| chars.get(p))) || blocks(chars.get(i + 1)))
        })
        .map(|(_, &c)| c)
        .collect()
}
