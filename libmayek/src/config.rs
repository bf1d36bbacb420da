/// Transliterator configuration that extends the base `Config` from core.
///
/// This configuration includes:
/// - All generic options from `libmayek_core::Config` (flattened via serde)
/// - Phonological switches for the convertor (vocalic-r, bophola)
/// - Diagnostic fields emitted by `Transliterator::transliterate`
///
/// # Example
///
/// ```rust
/// use libmayek::MayekConfig;
///
/// let config = MayekConfig::from_toml_str("expand_vocalic_r = true\nallow_digits = true").unwrap();
/// assert!(config.expand_vocalic_r);
/// assert!(config.base().allow_digits);
/// ```
use libmayek_core::Error;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct MayekConfig {
    /// Base configuration fields (digits, separators)
    #[serde(flatten)]
    pub base: libmayek_core::Config,

    /// Spell vocalic r as /r/ + /i/ instead of /r/ alone
    pub expand_vocalic_r: bool,

    /// Read virama + ba after a non-labial consonant as /w/
    pub bophola_as_w: bool,

    // Diagnostic record fields
    pub include_syllabified: bool,
    pub include_phonemes: bool,
}

impl Default for MayekConfig {
    fn default() -> Self {
        Self {
            base: libmayek_core::Config::default(),
            expand_vocalic_r: false,
            bophola_as_w: true,
            include_syllabified: false,
            include_phonemes: false,
        }
    }
}

impl MayekConfig {
    /// Convert this config into the base config.
    pub fn into_base(self) -> libmayek_core::Config {
        self.base
    }

    /// Get a reference to the base config
    pub fn base(&self) -> &libmayek_core::Config {
        &self.base
    }

    /// Get a mutable reference to the base config
    pub fn base_mut(&mut self) -> &mut libmayek_core::Config {
        &mut self.base
    }

    pub fn load_toml<P: AsRef<std::path::Path>>(path: P) -> Result<Self, Error> {
        let content = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }

    pub fn save_toml<P: AsRef<std::path::Path>>(&self, path: P) -> Result<(), Error> {
        std::fs::write(path, toml::to_string_pretty(self)?)?;
        Ok(())
    }

    pub fn from_toml_str(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    pub fn to_toml_string(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}
