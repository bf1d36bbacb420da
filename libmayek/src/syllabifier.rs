//! Syllable boundary detection.
//!
//! Boundaries are computed as a tag vector over grapheme offsets:
//! `tags[i] == true` means a syllable starts at `graphemes[i]`. The vector
//! has one extra slot for the end of the word, which is always set. Offset 0
//! is never tagged.
//!
//! Two passes run in order and only ever add boundaries:
//! 1. character classes (vowel letters, vowel signs, consonant signs, ha);
//! 2. cluster rules at every virama flanked by two consonants.

use libmayek_core::{bengali as bn, Phoneme};
use tracing::trace;

use crate::convertor::{split_by_tags, Segmentation, Token};

/// Consonants that may follow another consonant inside an onset.
const ONSET_GLIDES: [Phoneme; 3] = [Phoneme::R, Phoneme::J, Phoneme::W];

#[derive(Debug, Default, Clone, Copy)]
pub struct Syllabifier;

impl Syllabifier {
    pub fn new() -> Self {
        Self
    }

    /// Boundary tags for an aligned grapheme/token sequence.
    pub fn get_split_tags(&self, graphemes: &[String], tokens: &[Token]) -> Vec<bool> {
        debug_assert_eq!(graphemes.len(), tokens.len());
        let n = graphemes.len();
        let mut tags = vec![false; n + 1];
        tags[n] = true;
        self.mark_character_classes(graphemes, &mut tags);
        self.mark_clusters(tokens, &mut tags);
        tags
    }

    /// Split a segmented word into syllables, keeping both sequences aligned.
    pub fn syllabify(&self, seg: &Segmentation) -> Vec<Segmentation> {
        let tags = self.get_split_tags(&seg.graphemes, &seg.tokens);
        let tokens = split_by_tags(&seg.tokens, &tags);
        let graphemes = split_by_tags(&seg.graphemes, &tags);
        tokens
            .into_iter()
            .zip(graphemes)
            .map(|(tokens, graphemes)| Segmentation { tokens, graphemes })
            .collect()
    }

    fn mark_character_classes(&self, graphemes: &[String], tags: &mut [bool]) {
        let last = graphemes.len().saturating_sub(1);
        for (idx, g) in graphemes.iter().enumerate() {
            let class = GraphemeClass::of(g);

            if idx > 0 && matches!(class, GraphemeClass::IndependentVowel | GraphemeClass::Ha) {
                tags[idx] = true;
            }

            if idx > 1
                && matches!(
                    class,
                    GraphemeClass::DependentVowel | GraphemeClass::DependentConsonant
                )
                && GraphemeClass::of(&graphemes[idx - 1]) == GraphemeClass::Consonant
                && GraphemeClass::of(&graphemes[idx - 2]) != GraphemeClass::Virama
            {
                tags[idx - 1] = true;
            }

            if class == GraphemeClass::DependentConsonant && idx != last {
                tags[idx + 1] = true;
            }
        }
    }

    fn mark_clusters(&self, tokens: &[Token], tags: &mut [bool]) {
        let vowel_at = |i: Option<usize>| i.and_then(|i| tokens.get(i)).is_some_and(|t| t.is_vowel());
        for idx in 1..tokens.len().saturating_sub(1) {
            if tokens[idx] != Token::Virama {
                continue;
            }
            let (Some(p), Some(q)) = (tokens[idx - 1].phoneme(), tokens[idx + 1].phoneme()) else {
                continue;
            };
            if !p.is_consonant() || !q.is_consonant() {
                continue;
            }
            let vowel_before = vowel_at(idx.checked_sub(2));
            let vowel_after = vowel_at(Some(idx + 2));
            let q_glides = ONSET_GLIDES.contains(&q);

            let boundary = if p == q {
                Some(idx + 1)
            } else if vowel_before && vowel_after && !q_glides {
                Some(idx + 1)
            } else if p.is_nasal() && vowel_before && q.is_plosive() {
                Some(idx + 1)
            } else if p.is_plosive() && (q.is_plosive() || q.is_nasal()) {
                Some(idx + 1)
            } else if p.is_nasal() && q.is_plosive() && vowel_after {
                Some(idx + 1)
            } else if p.is_glide() && q.is_liquid() {
                Some(idx + 1)
            } else if q_glides {
                // s + stop + glide stays together as one onset
                let s_cluster = idx >= 3
                    && tokens[idx - 3] == Token::Phoneme(Phoneme::S)
                    && tokens[idx - 2] == Token::Virama;
                if s_cluster {
                    Some(idx - 3)
                } else {
                    Some(idx - 1)
                }
            } else if vowel_before && q == Phoneme::L {
                Some(idx + 1)
            } else {
                None
            };

            if let Some(at) = boundary.filter(|&at| at > 0) {
                trace!(virama = idx, boundary = at, "cluster boundary");
                tags[at] = true;
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum GraphemeClass {
    /// Vowel letter or independent diphthong spelling.
    IndependentVowel,
    /// Vowel sign or dependent diphthong spelling.
    DependentVowel,
    DependentConsonant,
    Ha,
    Consonant,
    Virama,
    Other,
}

impl GraphemeClass {
    fn of(grapheme: &str) -> Self {
        let mut chars = grapheme.chars();
        let single = match (chars.next(), chars.next()) {
            (Some(c), None) => Some(c),
            _ => None,
        };
        if bn::is_independent_diphthong(grapheme) {
            return GraphemeClass::IndependentVowel;
        }
        if bn::is_dependent_diphthong(grapheme) {
            return GraphemeClass::DependentVowel;
        }
        match single {
            Some(bn::VIRAMA) => GraphemeClass::Virama,
            Some(bn::HA) => GraphemeClass::Ha,
            Some(c) if bn::is_independent_vowel(c) => GraphemeClass::IndependentVowel,
            Some(c) if bn::is_dependent_vowel(c) => GraphemeClass::DependentVowel,
            Some(c) if bn::is_dependent_consonant(c) => GraphemeClass::DependentConsonant,
            Some(c) if bn::is_independent_consonant(c) => GraphemeClass::Consonant,
            _ => GraphemeClass::Other,
        }
    }
}
