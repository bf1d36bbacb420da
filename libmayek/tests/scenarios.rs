/// End-to-end scenarios through the public `Transliterator` API.
use libmayek::{Baseline, BaselineExtended, Transliterate, Transliterator};

fn syllables(word: &str) -> Vec<String> {
    Transliterator::default().syllabify(word).0
}

/// Character error rate: edit distance over the longer length.
fn cer(output: &str, expected: &str) -> f64 {
    let a: Vec<char> = output.chars().collect();
    let b: Vec<char> = expected.chars().collect();
    let longest = a.len().max(b.len());
    if longest == 0 {
        return 0.0;
    }
    let mut prev: Vec<usize> = (0..=b.len()).collect();
    for (i, ca) in a.iter().enumerate() {
        let mut cur = vec![i + 1; b.len() + 1];
        for (j, cb) in b.iter().enumerate() {
            let subst = prev[j] + usize::from(ca != cb);
            cur[j + 1] = subst.min(prev[j + 1] + 1).min(cur[j] + 1);
        }
        prev = cur;
    }
    prev[b.len()] as f64 / longest as f64
}

#[test]
fn independent_vowel_is_one_syllable() {
    let engine = Transliterator::default();
    assert_eq!(syllables("ই"), vec!["ই"]);
    let rec = engine.transliterate_with("ই", false, true);
    assert_eq!(rec, "I\tI\t\u{ABCF}");
    assert!(!engine.transliterate("ই").contains('\u{ABED}'));
}

#[test]
fn simple_cv_syllable() {
    let engine = Transliterator::default();
    assert_eq!(engine.transliterate("কা"), "\u{ABC0}\u{ABE5}");
    assert_eq!(engine.transliterate("মি"), "\u{ABC3}\u{ABE4}");
}

#[test]
fn plosive_cluster_is_heterosyllabic() {
    assert_eq!(syllables("পক্কা"), vec!["পক্", "কা"]);
    assert_eq!(syllables("সপ্তা"), vec!["সপ্", "তা"]);
}

#[test]
fn rhotic_onset_stays_together() {
    assert_eq!(syllables("আপ্রা"), vec!["আ", "প্রা"]);
    let engine = Transliterator::default();
    assert_eq!(
        engine.transliterate("প্রা"),
        "\u{ABC4}\u{ABED}\u{ABD4}\u{ABE5}"
    );
}

#[test]
fn known_words() {
    let engine = Transliterator::default();
    assert_eq!(engine.transliterate("বাংলা"), "\u{ABD5}\u{ABE5}\u{ABE1}\u{ABC2}\u{ABE5}");
    assert_eq!(engine.transliterate("কালা"), "\u{ABC0}\u{ABE5}\u{ABC2}\u{ABE5}");
    assert_eq!(engine.transliterate("কং"), "\u{ABC0}\u{ABEA}");
}

#[test]
fn error_rate_against_references() {
    let engine = Transliterator::default();
    let pairs = [
        ("বাংলা", "\u{ABD5}\u{ABE5}\u{ABE1}\u{ABC2}\u{ABE5}"),
        ("কালা", "\u{ABC0}\u{ABE5}\u{ABC2}\u{ABE5}"),
        ("কালা", "\u{ABC0}\u{ABE5}\u{ABC2}"),
        ("আম", ""),
    ];
    for (word, expected) in pairs {
        let out = engine.transliterate(word);
        let rate = cer(&out, expected);
        assert!((0.0..=1.0).contains(&rate), "{word}: {rate}");
        if out == expected {
            assert_eq!(rate, 0.0);
        }
    }
    assert_eq!(cer("", ""), 0.0);
    assert_eq!(cer("ab", "ab"), 0.0);
    assert_eq!(cer("ab", ""), 1.0);
}

#[test]
fn baselines_share_the_interface() {
    let engines: Vec<Box<dyn Transliterate>> = vec![
        Box::new(Baseline),
        Box::new(BaselineExtended::default()),
        Box::new(Transliterator::default()),
    ];
    for engine in &engines {
        assert_eq!(engine.transliterate("কা"), "\u{ABC0}\u{ABE5}");
    }
}
