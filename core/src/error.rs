use thiserror::Error;

/// Errors surfaced by the transliteration crates.
///
/// Malformed input text is never an error: the cleaner filters it. An empty
/// cleaned word is a valid terminal state, not an error either.
#[derive(Debug, Error)]
pub enum Error {
    /// A token reached the speller without a Meetei Mayek letter form.
    /// Indicates the phoneme tables and the letter-form tables disagree.
    #[error("no Meetei Mayek letter form for {token:?} in syllable {syllable:?}")]
    InternalTableGap { token: String, syllable: String },

    #[error("unknown phoneme symbol {0:?}")]
    UnknownPhoneme(String),

    #[error("invalid configuration: {0}")]
    Config(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl From<toml::de::Error> for Error {
    fn from(e: toml::de::Error) -> Self {
        Error::Config(e.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(e: toml::ser::Error) -> Self {
        Error::Config(e.to_string())
    }
}
