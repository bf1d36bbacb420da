//! libmayek crate root
//!
//! This crate provides the Bengali to Meetei Mayek pipeline built on the
//! shared `libmayek-core` tables: a phoneme convertor, a syllabifier, a
//! speller and the `Transliterator` that composes them with the cleaner.
//! Two direct charmap transliterators are included for comparison.
//!
//! Public API exported here:
//! - `Transliterator` and `Transliteration` from `engine`
//! - `PhonemeConvertor`, `Segmentation` and `Token` from `convertor`
//! - `Syllabifier` from `syllabifier`
//! - `Speller` and `Spelling` from `speller`
//! - `Baseline` and `BaselineExtended` from `baseline`

pub mod baseline;
pub mod config;
pub mod convertor;
pub mod engine;
pub mod speller;
pub mod syllabifier;

// Shared types callers need alongside the engine.
pub use libmayek_core::{Cleaner, Config, Error, Phoneme, Transliterate};

pub use baseline::{Baseline, BaselineExtended};
pub use config::MayekConfig;
pub use convertor::{PhonemeConvertor, Segmentation, Token};
pub use engine::{Transliteration, Transliterator};
pub use speller::{letter_forms, LetterForms, Speller, Spelling};
pub use syllabifier::Syllabifier;
