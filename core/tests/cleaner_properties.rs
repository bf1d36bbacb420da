/// Cleaning is a fixpoint over noisy keyboard input.
use libmayek_core::{bengali as bn, meetei_mayek as mm, Cleaner};

const NOISY: &[&str] = &[
    "কালা",
    "ক্্ষ",
    "কাা",
    "\u{09CD}\u{09CD}ক",
    "ক\u{09C7}\u{09BE}\u{09BE}",
    "\u{09A1}\u{09BC}\u{09BC}",
    "ক\u{09CD}\u{09B0}\u{09CD}\u{09B0}\u{09CD}\u{09B0}",
    "ক\u{09CD}\u{09BE}\u{09CD}",
    "abc কলম ১২৩",
    "\u{0985}\u{09BE}\u{09BE}",
    "ক\u{09BF}\u{09C0}\u{09BF}",
    "",
];

#[test]
fn clean_bn_is_idempotent() {
    for allow_digits in [false, true] {
        let c = Cleaner::new(allow_digits);
        for word in NOISY {
            let once = c.clean_bn(word);
            assert_eq!(c.clean_bn(&once), once, "{word:?}");
        }
    }
}

#[test]
fn clean_bn_keeps_only_bengali() {
    let c = Cleaner::default();
    for word in NOISY {
        let cleaned = c.clean_bn(word);
        assert!(cleaned.chars().all(bn::is_char), "{word:?}");
        assert!(!cleaned.chars().any(bn::is_digit), "{word:?}");
        assert!(!cleaned.starts_with(bn::VIRAMA), "{word:?}");
    }
}

#[test]
fn clean_mm_is_idempotent() {
    let c = Cleaner::default();
    let samples = [
        "\u{ABC0}\u{ABE5}\u{ABCF}",
        "\u{ABC0}\u{ABE5}\u{ABEA}",
        "\u{ABC0}\u{ABE1}",
        "\u{ABC0}\u{ABE5}\u{ABE5}\u{ABE5}",
        "\u{ABD5}\u{ABE5}\u{ABE1}\u{ABC2}\u{ABE5}",
        "x\u{ABC0}",
    ];
    for word in samples {
        let once = c.clean_mm(word);
        assert_eq!(c.clean_mm(&once), once, "{word:?}");
        assert!(once.chars().all(mm::is_char), "{word:?}");
    }
}
