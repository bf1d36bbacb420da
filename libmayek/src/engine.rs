//! Transliteration engine
//!
//! Composes the cleaner, phoneme convertor, syllabifier and speller into a
//! per-word `transliterate(word) -> String` API. Every call is independent;
//! the engine holds only configuration and is freely shared across threads.

use std::num::NonZeroUsize;

use libmayek_core::{Cleaner, Error, Transliterate};
use rayon::prelude::*;
use rayon::ThreadPoolBuilder;
use tracing::{debug, error, warn};

use crate::config::MayekConfig;
use crate::convertor::{tokens_to_string, PhonemeConvertor};
use crate::speller::Speller;
use crate::syllabifier::Syllabifier;

/// Every intermediate result for one word.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Transliteration {
    /// The word after cleaning.
    pub cleaned: String,
    /// Bengali text of each syllable.
    pub syllables: Vec<String>,
    /// Raw token sequence of each syllable.
    pub syllable_phonemes: Vec<String>,
    /// Token sequence of each syllable after schwa insertion.
    pub spelled_phonemes: Vec<String>,
    /// Meetei Mayek text of each syllable.
    pub spelled_syllables: Vec<String>,
    /// The transliterated word.
    pub word: String,
}

#[derive(Debug, Clone)]
pub struct Transliterator {
    config: MayekConfig,
    cleaner: Cleaner,
    convertor: PhonemeConvertor,
    syllabifier: Syllabifier,
    speller: Speller,
}

impl Default for Transliterator {
    fn default() -> Self {
        Self::new(MayekConfig::default())
    }
}

impl Transliterator {
    pub fn new(config: MayekConfig) -> Self {
        let convertor = PhonemeConvertor::new(config.expand_vocalic_r, config.bophola_as_w);
        Self {
            cleaner: Cleaner::from_config(config.base()),
            convertor,
            syllabifier: Syllabifier::new(),
            speller: Speller::new(convertor),
            config,
        }
    }

    pub fn config(&self) -> &MayekConfig {
        &self.config
    }

    /// Run the full pipeline and keep every intermediate step.
    ///
    /// An input that cleans to nothing, or keeps only characters with no
    /// phonemic reading, yields an empty `Transliteration`.
    pub fn try_transliterate(&self, word: &str) -> Result<Transliteration, Error> {
        let cleaned = self.cleaner.clean_bn(word);
        if cleaned.is_empty() {
            debug!(word, "nothing left after cleaning");
            return Ok(Transliteration::default());
        }

        let base = self.config.base();
        let seg = self.convertor.extract_seq(&cleaned);
        let parts = self.syllabifier.syllabify(&seg);
        let syllables: Vec<String> = parts.iter().map(|p| p.graphemes.concat()).collect();
        let syllable_phonemes = parts
            .iter()
            .map(|p| tokens_to_string(&p.tokens, &base.phoneme_separator))
            .collect();

        let spelling = self.speller.spell(&syllables, &base.phoneme_separator)?;
        let out = spelling.word();
        if out.is_empty() {
            debug!(word, cleaned = %cleaned, "no spellable phoneme");
            return Ok(Transliteration::default());
        }
        debug!(word, cleaned = %cleaned, syllables = ?syllables, result = %out, "transliterated");

        Ok(Transliteration {
            cleaned,
            syllables,
            syllable_phonemes,
            spelled_phonemes: spelling.phonemes,
            spelled_syllables: spelling.syllables,
            word: out,
        })
    }

    /// Split a word into syllables without spelling it.
    ///
    /// Returns the Bengali text and the token sequence of every syllable.
    pub fn syllabify(&self, word: &str) -> (Vec<String>, Vec<String>) {
        let cleaned = self.cleaner.clean_bn(word);
        let seg = self.convertor.extract_seq(&cleaned);
        let sep = &self.config.base().phoneme_separator;
        self.syllabifier
            .syllabify(&seg)
            .into_iter()
            .map(|p| (p.graphemes.concat(), tokens_to_string(&p.tokens, sep)))
            .unzip()
    }

    /// Transliterate with explicit diagnostic fields.
    ///
    /// With no flags the result is the Meetei Mayek word. Each flag prepends
    /// fields to a separated record: the syllabified source, then the raw
    /// and prepared phonemes per syllable.
    pub fn transliterate_with(
        &self,
        word: &str,
        include_syllabified: bool,
        include_phonemes: bool,
    ) -> String {
        let t = match self.try_transliterate(word) {
            Ok(t) => t,
            Err(e) => {
                error!(word, error = %e, "transliteration failed");
                return String::new();
            }
        };
        if t.cleaned.is_empty() {
            return String::new();
        }
        let base = self.config.base();
        let sep = base.syllable_separator.as_str();
        let mut fields = Vec::with_capacity(4);
        if include_syllabified {
            fields.push(t.syllables.join(sep));
        }
        if include_phonemes {
            fields.push(t.syllable_phonemes.join(sep));
            fields.push(t.spelled_phonemes.join(sep));
        }
        fields.push(t.word);
        fields.join(&base.field_separator)
    }

    /// Transliterate whitespace-separated words on a pool of `workers` threads.
    ///
    /// Output is identical to `transliterate_words`: one line per word, in
    /// input order.
    pub fn transliterate_words_parallel(&self, text: &str, workers: NonZeroUsize) -> String {
        let words: Vec<&str> = text.split_whitespace().collect();
        let run = || {
            words
                .par_iter()
                .map(|w| self.transliterate(w))
                .collect::<Vec<_>>()
        };
        let lines = match ThreadPoolBuilder::new().num_threads(workers.get()).build() {
            Ok(pool) => pool.install(run),
            Err(e) => {
                warn!(error = %e, "failed to build thread pool, using the global pool");
                run()
            }
        };
        lines.join("\n")
    }
}

impl Transliterate for Transliterator {
    /// Transliterate using the diagnostic fields selected in the config.
    fn transliterate(&self, word: &str) -> String {
        self.transliterate_with(
            word,
            self.config.include_syllabified,
            self.config.include_phonemes,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_after_cleaning() {
        let t = Transliterator::default();
        assert_eq!(t.transliterate("abc"), "");
        assert_eq!(t.transliterate_with("123", true, true), "");
        assert_eq!(t.try_transliterate("").unwrap(), Transliteration::default());
    }

    #[test]
    fn signs_without_phonemes_give_empty_record() {
        let t = Transliterator::default();
        for word in ["\u{0981}", "\u{0983}", "\u{0981}\u{0983}"] {
            assert_eq!(t.transliterate_with(word, true, true), "", "{word:?}");
            assert_eq!(t.try_transliterate(word).unwrap(), Transliteration::default());
        }
        assert_eq!(t.transliterate("\u{0995}\u{0981}"), "\u{ABC0}");
    }

    #[test]
    fn parallel_keeps_input_order() {
        let t = Transliterator::default();
        let words = ["কালা", "বাংলা", "ই", "\u{0981}", "প্রা"];
        let text = words.repeat(40).join(" ");
        let out = t.transliterate_words_parallel(&text, NonZeroUsize::new(3).unwrap());
        let lines: Vec<&str> = out.split('\n').collect();
        assert_eq!(lines.len(), 200);
        for (line, word) in lines.iter().zip(words.iter().cycle()) {
            assert_eq!(*line, t.transliterate(word));
        }
    }

    #[test]
    fn detailed_record() {
        let t = Transliterator::default();
        let rec = t.transliterate_with("বাংলা", true, true);
        let fields: Vec<&str> = rec.split('\t').collect();
        assert_eq!(fields.len(), 4);
        assert_eq!(fields[0], "বাং/লা");
        assert_eq!(fields[1], "B.A.NG/L.A");
        assert_eq!(fields[2], "B.A.NG/L.A");
        assert_eq!(fields[3], "\u{ABD5}\u{ABE5}\u{ABE1}\u{ABC2}\u{ABE5}");
    }

    #[test]
    fn config_selects_fields() {
        let cfg = MayekConfig {
            include_syllabified: true,
            ..MayekConfig::default()
        };
        let t = Transliterator::new(cfg);
        assert_eq!(t.transliterate("কালা"), "কা/লা\t\u{ABC0}\u{ABE5}\u{ABC2}\u{ABE5}");
    }

    #[test]
    fn syllabify_only() {
        let (syl, ph) = Transliterator::default().syllabify("কালা");
        assert_eq!(syl, vec!["কা", "লা"]);
        assert_eq!(ph, vec!["K.A", "L.A"]);
    }

    #[test]
    fn parallel_matches_sequential() {
        let t = Transliterator::default();
        let text = "কালা বাংলা আম প্রাণ ই কলম সপ্তা";
        let expected = t.transliterate_words(text);
        for n in 1..=4 {
            let workers = NonZeroUsize::new(n).unwrap();
            assert_eq!(t.transliterate_words_parallel(text, workers), expected);
        }
        assert_eq!(t.transliterate_words_parallel("  ", NonZeroUsize::MIN), "");
    }
}
