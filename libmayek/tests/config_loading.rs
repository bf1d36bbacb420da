/// Loading `MayekConfig` from TOML and its effect on the engine.
use libmayek::{MayekConfig, Transliterate, Transliterator};

#[test]
fn partial_toml_keeps_defaults() {
    let cfg = MayekConfig::from_toml_str("include_syllabified = true\n").expect("parse");
    assert!(cfg.include_syllabified);
    assert!(!cfg.include_phonemes);
    assert!(cfg.bophola_as_w);
    assert_eq!(cfg.base().syllable_separator, "/");
}

#[test]
fn separators_come_from_config() {
    let toml = r#"
include_syllabified = true
include_phonemes = true
syllable_separator = "|"
phoneme_separator = " "
field_separator = ";"
"#;
    let cfg = MayekConfig::from_toml_str(toml).expect("parse");
    let engine = Transliterator::new(cfg);
    assert_eq!(
        engine.transliterate("কালা"),
        "কা|লা;K A|L A;K A|L A;\u{ABC0}\u{ABE5}\u{ABC2}\u{ABE5}"
    );
}

#[test]
fn load_from_file() {
    let path = std::env::temp_dir().join(format!("libmayek_config_{}.toml", std::process::id()));
    let mut cfg = MayekConfig::default();
    cfg.base_mut().allow_digits = true;
    cfg.expand_vocalic_r = true;
    cfg.save_toml(&path).expect("save");

    let loaded = MayekConfig::load_toml(&path).expect("load");
    let _ = std::fs::remove_file(&path);
    assert_eq!(loaded, cfg);
}

#[test]
fn missing_file_is_an_error() {
    let path = std::env::temp_dir().join("libmayek_config_does_not_exist.toml");
    assert!(MayekConfig::load_toml(path).is_err());
}

#[test]
fn malformed_toml_is_rejected() {
    assert!(MayekConfig::from_toml_str("include_phonemes = \"yes\"").is_err());
}
