//! libmayek-core
//!
//! Script tables, phoneme inventory, text cleaning and configuration shared
//! by the Bengali to Meetei Mayek transliterator (`libmayek`).
//!
//! Public API:
//! - `bengali`, `meetei_mayek` - named code points and character classes
//! - `Phoneme` - the 36-phoneme inventory with articulatory features
//! - `Cleaner` - input repair for Bengali, output repair for Meetei Mayek
//! - `Config` - shared options, loadable from TOML
//! - `Transliterate` - the seam every transliterator implements
use serde::{Deserialize, Serialize};

pub mod bengali;
pub mod meetei_mayek;

pub mod phoneme;
pub use phoneme::{
    ipa_to_phoneme, parker_rank, phoneme_to_ipa, sievers_rank, ConsonantFeatures, MoA, Parker,
    Phoneme, PoA, Sievers, VowelFeatures, VowelLips, VowelMouth, VowelTongue,
};

pub mod cleaner;
pub use cleaner::Cleaner;

pub mod trie;
pub use trie::TrieNode;

pub mod error;
pub use error::Error;

/// Generic configuration shared by every transliterator.
///
/// Options specific to the phonological pipeline live in `MayekConfig` in
/// the `libmayek` crate, which flattens this struct.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    /// Keep digits while cleaning instead of stripping them.
    pub allow_digits: bool,
    /// Joins syllables in diagnostic output.
    pub syllable_separator: String,
    /// Joins the phonemes of one syllable in diagnostic output.
    pub phoneme_separator: String,
    /// Separates the fields of a diagnostic record.
    pub field_separator: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            allow_digits: false,
            syllable_separator: "/".to_string(),
            phoneme_separator: ".".to_string(),
            field_separator: "\t".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load_toml<P: AsRef<std::path::Path>>(path: P) -> Result<Self, Error> {
        let content = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }

    /// Save configuration to a TOML file.
    pub fn save_toml<P: AsRef<std::path::Path>>(&self, path: P) -> Result<(), Error> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Load configuration from TOML string.
    pub fn from_toml_str(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Serialize configuration to TOML string.
    pub fn to_toml_string(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}

/// A word-level transliterator.
///
/// Implementations are pure: the same word always yields the same output,
/// and malformed input yields a (possibly empty) string rather than an error.
pub trait Transliterate {
    fn transliterate(&self, word: &str) -> String;

    /// Transliterate whitespace-separated words, one result per line.
    fn transliterate_words(&self, text: &str) -> String {
        text.split_whitespace()
            .map(|w| self.transliterate(w))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Utility helpers.
pub mod utils {
    /// Normalize input strings (NFC) and trim whitespace.
    pub fn normalize(s: &str) -> String {
        use unicode_normalization::UnicodeNormalization;
        s.nfc().collect::<String>().trim().to_string()
    }
}
