/// Structural properties of the segmentation, syllabification and spelling
/// stages over a small vocabulary.
use libmayek::{
    Cleaner, PhonemeConvertor, Phoneme, Syllabifier, Token, Transliterate, Transliterator,
};

const WORDS: &[&str] = &[
    "কালা", "বাংলা", "আম", "প্রাণ", "কলম", "সপ্তা", "পক্কা", "আস্ত্রা", "ইংরেজি", "মণিপুর",
    "কৃষ্ণ", "বৈশাখ", "দ্বার", "ঋষি", "যায়", "সহ", "স্কুল", "চন্দ্র",
];

#[test]
fn tokens_and_graphemes_stay_aligned() {
    let cleaner = Cleaner::default();
    let convertor = PhonemeConvertor::default();
    let syllabifier = Syllabifier::new();
    for word in WORDS {
        let seg = convertor.extract_seq(&cleaner.clean_bn(word));
        assert_eq!(seg.tokens.len(), seg.graphemes.len(), "{word}");
        for syl in syllabifier.syllabify(&seg) {
            assert_eq!(syl.tokens.len(), syl.graphemes.len(), "{word}");
            assert!(!syl.is_empty(), "{word}");
        }
    }
}

#[test]
fn syllables_partition_the_cleaned_word() {
    let cleaner = Cleaner::default();
    let convertor = PhonemeConvertor::default();
    let syllabifier = Syllabifier::new();
    for word in WORDS {
        let cleaned = cleaner.clean_bn(word);
        let seg = convertor.extract_seq(&cleaned);
        let joined: String = syllabifier
            .syllabify(&seg)
            .iter()
            .map(|s| s.graphemes.concat())
            .collect();
        assert_eq!(joined, cleaned, "{word}");
    }
}

#[test]
fn split_tags_end_with_word_boundary() {
    let convertor = PhonemeConvertor::default();
    let syllabifier = Syllabifier::new();
    for word in WORDS {
        let seg = convertor.extract_seq(word);
        let tags = syllabifier.get_split_tags(&seg.graphemes, &seg.tokens);
        assert_eq!(tags.len(), seg.len() + 1, "{word}");
        assert_eq!(tags.last(), Some(&true), "{word}");
        assert!(!tags[0], "{word}");
    }
}

#[test]
fn transliteration_is_deterministic() {
    let engine = Transliterator::default();
    for word in WORDS {
        let first = engine.transliterate(word);
        assert_eq!(engine.transliterate(word), first, "{word}");
        assert_eq!(Transliterator::default().transliterate(word), first, "{word}");
    }
}

#[test]
fn surviving_words_are_never_dropped() {
    let engine = Transliterator::default();
    for word in WORDS {
        assert!(!engine.transliterate(word).is_empty(), "{word}");
    }
}

#[test]
fn empty_after_cleaning_gives_empty_output() {
    let engine = Transliterator::default();
    for word in ["", "   ", "hello", "১২৩", "!?", "্"] {
        assert_eq!(engine.transliterate(word), "", "{word:?}");
    }
}

#[test]
fn lone_consonant_gets_schwa() {
    let convertor = PhonemeConvertor::default();
    for p in Phoneme::all().into_iter().filter(|p| p.is_consonant()) {
        let prepared = convertor.prepare_syllable_phoneme(&[Token::Phoneme(p)]);
        assert_eq!(prepared.last(), Some(&Token::Phoneme(Phoneme::X)), "{p}");
    }
}

#[test]
fn output_is_meetei_mayek_only() {
    let engine = Transliterator::default();
    for word in WORDS {
        let out = engine.transliterate(word);
        assert!(
            out.chars().all(libmayek_core::meetei_mayek::is_char),
            "{word} -> {out}"
        );
    }
}

#[test]
fn words_map_to_lines() {
    let engine = Transliterator::default();
    let text = WORDS.join(" ");
    let out = engine.transliterate_words(&text);
    assert_eq!(out.lines().count(), WORDS.len());
    for (line, word) in out.lines().zip(WORDS) {
        assert_eq!(line, engine.transliterate(word));
    }
}
