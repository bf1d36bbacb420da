//! Direct charmap transliterators.
//!
//! These map Bengali graphemes straight to Meetei Mayek graphemes with no
//! phonological model. They serve as reference points for the phoneme-based
//! `Transliterator`: `Baseline` is the plain letter-for-letter map,
//! `BaselineExtended` adds cleaning and cluster handling.

use libmayek_core::{Cleaner, Transliterate, TrieNode};
use once_cell::sync::Lazy;
use phf::phf_map;

/// Bengali grapheme to Meetei Mayek text. Longest key wins.
static LETTER_MAP: phf::Map<&'static str, &'static str> = phf_map! {
    // mapum letters
    "\u{0995}" => "\u{ABC0}",
    "\u{099B}" => "\u{ABC1}",
    "\u{09B7}" => "\u{ABC1}",
    "\u{09B8}" => "\u{ABC1}",
    "\u{09B6}" => "\u{ABC1}",
    "\u{09B2}" => "\u{ABC2}",
    "\u{09AE}" => "\u{ABC3}",
    "\u{09AA}" => "\u{ABC4}",
    "\u{099E}" => "\u{ABC5}",
    "\u{09A3}" => "\u{ABC5}",
    "\u{09A8}" => "\u{ABC5}",
    "\u{099A}" => "\u{ABC6}",
    "\u{099F}" => "\u{ABC7}",
    "\u{09A4}" => "\u{ABC7}",
    "\u{09CE}" => "\u{ABC7}",
    "\u{0996}" => "\u{ABC8}",
    "\u{0999}" => "\u{ABC9}",
    "\u{09A0}" => "\u{ABCA}",
    "\u{09A5}" => "\u{ABCA}",
    "\u{09F1}" => "\u{ABCB}",
    "\u{09DF}" => "\u{ABCC}",
    "\u{09AF}" => "\u{ABCC}",
    "\u{09B9}" => "\u{ABCD}",
    "\u{0989}" => "\u{ABCE}",
    "\u{098A}" => "\u{ABCE}",
    "\u{0987}" => "\u{ABCF}",
    "\u{0988}" => "\u{ABCF}",
    "\u{09AB}" => "\u{ABD0}",
    "\u{0985}" => "\u{ABD1}",
    "\u{0997}" => "\u{ABD2}",
    "\u{099D}" => "\u{ABD3}",
    "\u{098B}" => "\u{ABD4}",
    "\u{09C3}" => "\u{ABD4}",
    "\u{09DC}" => "\u{ABD4}",
    "\u{09B0}" => "\u{ABD4}",
    "\u{09DD}" => "\u{ABD4}",
    "\u{09AC}" => "\u{ABD5}",
    "\u{099C}" => "\u{ABD6}",
    "\u{09A1}" => "\u{ABD7}",
    "\u{09A6}" => "\u{ABD7}",
    "\u{0998}" => "\u{ABD8}",
    "\u{09A2}" => "\u{ABD9}",
    "\u{09A7}" => "\u{ABD9}",
    "\u{09AD}" => "\u{ABDA}",
    // vowel letters carried by atiya
    "\u{0986}" => "\u{ABD1}\u{ABE5}",
    "\u{098F}" => "\u{ABD1}\u{ABE6}",
    "\u{0990}" => "\u{ABD1}\u{ABE9}",
    "\u{0993}" => "\u{ABD1}\u{ABE3}",
    "\u{0994}" => "\u{ABD1}\u{ABE7}",
    "\u{0986}\u{0982}" => "\u{ABD1}\u{ABEA}",
    // cheitap
    "\u{09CB}" => "\u{ABE3}",
    "\u{09BF}" => "\u{ABE4}",
    "\u{09C0}" => "\u{ABE4}",
    "\u{09BE}" => "\u{ABE5}",
    "\u{09C7}" => "\u{ABE6}",
    "\u{09CC}" => "\u{ABE7}",
    "\u{09C1}" => "\u{ABE8}",
    "\u{09C2}" => "\u{ABE8}",
    "\u{09C8}" => "\u{ABE9}",
    "\u{0982}" => "\u{ABEA}",
    // digits
    "\u{09E6}" => "\u{ABF0}",
    "\u{09E7}" => "\u{ABF1}",
    "\u{09E8}" => "\u{ABF2}",
    "\u{09E9}" => "\u{ABF3}",
    "\u{09EA}" => "\u{ABF4}",
    "\u{09EB}" => "\u{ABF5}",
    "\u{09EC}" => "\u{ABF6}",
    "\u{09ED}" => "\u{ABF7}",
    "\u{09EE}" => "\u{ABF8}",
    "\u{09EF}" => "\u{ABF9}",
    // consonant + virama written as lonsum
    "\u{0995}\u{09CD}" => "\u{ABDB}",
    "\u{09B2}\u{09CD}" => "\u{ABDC}",
    "\u{09AE}\u{09CD}" => "\u{ABDD}",
    "\u{09AA}\u{09CD}" => "\u{ABDE}",
    "\u{09A3}\u{09CD}" => "\u{ABDF}",
    "\u{09A8}\u{09CD}" => "\u{ABDF}",
    "\u{099F}\u{09CD}" => "\u{ABE0}",
    "\u{09A4}\u{09CD}" => "\u{ABE0}",
    "\u{0999}\u{09CD}" => "\u{ABE1}",
};

/// Virama + second cluster member, written with apun iyek.
static CLUSTER_MAP: phf::Map<&'static str, &'static str> = phf_map! {
    "\u{09CD}\u{09AF}" => "\u{ABED}\u{ABCC}",
    "\u{09CD}\u{09DF}" => "\u{ABED}\u{ABCC}",
    "\u{09CD}\u{09B0}" => "\u{ABED}\u{ABD4}",
    "\u{09CD}\u{09DD}" => "\u{ABED}\u{ABD4}",
    "\u{09CD}\u{09DC}" => "\u{ABED}\u{ABD4}",
    "\u{09CD}\u{09B2}" => "\u{ABED}\u{ABC2}",
    "\u{09CD}\u{09F1}" => "\u{ABED}\u{ABCB}",
};

fn build(map: &phf::Map<&'static str, &'static str>) -> TrieNode<&'static str> {
    let mut trie = TrieNode::new();
    for (k, v) in map.entries() {
        trie.insert(k, *v);
    }
    trie
}

static LETTERS: Lazy<TrieNode<&'static str>> = Lazy::new(|| build(&LETTER_MAP));
static CLUSTERS: Lazy<TrieNode<&'static str>> = Lazy::new(|| build(&CLUSTER_MAP));

/// Replace left to right, longest key first. Unknown characters are copied.
fn replace_longest(text: &str, trie: &TrieNode<&'static str>) -> String {
    let chars: Vec<char> = text.chars().collect();
    let mut out = String::with_capacity(text.len());
    let mut i = 0;
    while i < chars.len() {
        match trie.longest_match(&chars, i) {
            Some((end, to)) => {
                out.push_str(to);
                i = end;
            }
            None => {
                out.push(chars[i]);
                i += 1;
            }
        }
    }
    out
}

/// Letter-for-letter map with no cleaning.
#[derive(Debug, Default, Clone, Copy)]
pub struct Baseline;

impl Transliterate for Baseline {
    fn transliterate(&self, word: &str) -> String {
        replace_longest(word, &LETTERS)
    }
}

/// Cleaned input, cluster joiners, letter map, cleaned output.
#[derive(Debug, Default, Clone, Copy)]
pub struct BaselineExtended {
    cleaner: Cleaner,
}

impl BaselineExtended {
    pub fn new(cleaner: Cleaner) -> Self {
        Self { cleaner }
    }
}

impl Transliterate for BaselineExtended {
    fn transliterate(&self, word: &str) -> String {
        let word = self.cleaner.clean_bn(word);
        let word = replace_longest(&word, &CLUSTERS);
        let word = replace_longest(&word, &LETTERS);
        self.cleaner.clean_mm(&word)
    }
}
