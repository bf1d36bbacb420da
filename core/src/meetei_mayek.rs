//! Meetei Mayek alphabet inventory.
//!
//! Letters are grouped the way the script's own grammar groups them:
//! mapum (full letters), cheitap (dependent vowel signs and nung) and
//! lonsum (final allomorphs of consonants).

// Mapum letters
pub const KOK: char = '\u{ABC0}';
pub const SAM: char = '\u{ABC1}';
pub const LAI: char = '\u{ABC2}';
pub const MIT: char = '\u{ABC3}';
pub const PA: char = '\u{ABC4}';
pub const NA: char = '\u{ABC5}';
pub const CHIL: char = '\u{ABC6}';
pub const TIL: char = '\u{ABC7}';
pub const KHOU: char = '\u{ABC8}';
pub const NGOU: char = '\u{ABC9}';
pub const THOU: char = '\u{ABCA}';
pub const WAI: char = '\u{ABCB}';
pub const YANG: char = '\u{ABCC}';
pub const HUK: char = '\u{ABCD}';
pub const UN: char = '\u{ABCE}';
pub const I: char = '\u{ABCF}';
pub const PHAM: char = '\u{ABD0}';
pub const ATIYA: char = '\u{ABD1}';
pub const GOK: char = '\u{ABD2}';
pub const JHAM: char = '\u{ABD3}';
pub const RAI: char = '\u{ABD4}';
pub const BA: char = '\u{ABD5}';
pub const JIL: char = '\u{ABD6}';
pub const DIL: char = '\u{ABD7}';
pub const GHOU: char = '\u{ABD8}';
pub const DHOU: char = '\u{ABD9}';
pub const BHAM: char = '\u{ABDA}';

// Lonsum letters
pub const KOK_LONSUM: char = '\u{ABDB}';
pub const LAI_LONSUM: char = '\u{ABDC}';
pub const MIT_LONSUM: char = '\u{ABDD}';
pub const PA_LONSUM: char = '\u{ABDE}';
pub const NA_LONSUM: char = '\u{ABDF}';
pub const TIL_LONSUM: char = '\u{ABE0}';
pub const NGOU_LONSUM: char = '\u{ABE1}';
pub const I_LONSUM: char = '\u{ABE2}';

// Cheitap vowel signs
pub const ONAP: char = '\u{ABE3}';
pub const INAP: char = '\u{ABE4}';
pub const ANAP: char = '\u{ABE5}';
pub const YENAP: char = '\u{ABE6}';
pub const SOUNAP: char = '\u{ABE7}';
pub const UNAP: char = '\u{ABE8}';
pub const CHEINAP: char = '\u{ABE9}';

pub const NUNG: char = '\u{ABEA}';
pub const CHEIKHEI: char = '\u{ABEB}';
pub const LUM_IYEK: char = '\u{ABEC}';
/// Cluster joiner, the counterpart of the Bengali virama.
pub const APUN_IYEK: char = '\u{ABED}';

pub const DIGIT_ZERO: char = '\u{ABF0}';
pub const DIGIT_NINE: char = '\u{ABF9}';

pub const FIRST_CHAR: char = KOK;
pub const LAST_CHAR: char = DIGIT_NINE;

// Independent diphthongs
pub const INITIAL_AI: &str = "\u{ABD1}\u{ABE5}\u{ABE2}";
pub const INITIAL_XI: &str = "\u{ABD1}\u{ABE9}";
pub const INITIAL_OI: &str = "\u{ABD1}\u{ABE3}\u{ABE2}";
pub const INITIAL_UI: &str = "\u{ABCE}\u{ABE2}";
pub const INITIAL_AU: &str = "\u{ABD1}\u{ABE5}\u{ABCE}";
pub const INITIAL_XU: &str = "\u{ABD1}\u{ABE7}";

// Dependent diphthongs
pub const FINAL_AI: &str = "\u{ABE5}\u{ABE2}";
pub const FINAL_XI: &str = "\u{ABE9}";
pub const FINAL_OI: &str = "\u{ABE3}\u{ABE2}";
pub const FINAL_UI: &str = "\u{ABE8}\u{ABE2}";
pub const FINAL_AU: &str = "\u{ABE5}\u{ABCE}";
pub const FINAL_XU: &str = "\u{ABE7}";

pub const INITIAL_DIPHTHONGS: [&str; 6] = [
    INITIAL_AI, INITIAL_XI, INITIAL_OI, INITIAL_UI, INITIAL_AU, INITIAL_XU,
];
pub const FINAL_DIPHTHONGS: [&str; 6] = [
    FINAL_AI, FINAL_XI, FINAL_OI, FINAL_UI, FINAL_AU, FINAL_XU,
];

pub fn is_char(c: char) -> bool {
    (FIRST_CHAR..=LAST_CHAR).contains(&c)
}

pub fn is_digit(c: char) -> bool {
    (DIGIT_ZERO..=DIGIT_NINE).contains(&c)
}

pub fn is_mapum_vowel(c: char) -> bool {
    matches!(c, UN | I | ATIYA)
}

pub fn is_mapum_consonant(c: char) -> bool {
    (KOK..=HUK).contains(&c) || c == PHAM || (GOK..=BHAM).contains(&c)
}

pub fn is_mapum(c: char) -> bool {
    is_mapum_vowel(c) || is_mapum_consonant(c)
}

/// Dependent vowel signs, onap through cheinap.
pub fn is_cheitap_vowel(c: char) -> bool {
    (ONAP..=CHEINAP).contains(&c)
}

pub fn is_cheitap(c: char) -> bool {
    is_cheitap_vowel(c) || c == NUNG
}

pub fn is_lonsum_consonant(c: char) -> bool {
    (KOK_LONSUM..=NGOU_LONSUM).contains(&c)
}

pub fn is_lonsum(c: char) -> bool {
    is_lonsum_consonant(c) || c == I_LONSUM
}

/// Punctuation and prosodic marks.
pub fn is_khudam(c: char) -> bool {
    matches!(c, CHEIKHEI | LUM_IYEK)
}

pub fn is_independent_nucleus(s: &str) -> bool {
    let mut chars = s.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) if is_mapum_vowel(c) => true,
        _ => INITIAL_DIPHTHONGS.contains(&s),
    }
}

pub fn is_dependent_nucleus(s: &str) -> bool {
    let mut chars = s.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) if is_cheitap_vowel(c) => true,
        _ => FINAL_DIPHTHONGS.contains(&s),
    }
}

/// Spell a dependent nucleus the way it is written at the start of a word.
///
/// Inap and unap have their own full letters; the ui diphthong starts with
/// un; everything else is carried by atiya.
pub fn to_independent(dependent: &str) -> String {
    match dependent {
        "\u{ABE4}" => I.to_string(),
        "\u{ABE8}" => UN.to_string(),
        FINAL_UI => INITIAL_UI.to_string(),
        other => format!("{ATIYA}{other}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn letter_classes() {
        assert!(is_mapum_consonant(KOK));
        assert!(is_mapum_consonant(PHAM));
        assert!(is_mapum_consonant(BHAM));
        assert!(!is_mapum_consonant(UN));
        assert!(!is_mapum_consonant(ATIYA));
        assert!(is_lonsum(I_LONSUM));
        assert!(!is_lonsum_consonant(I_LONSUM));
        assert!(is_cheitap(NUNG));
        assert!(!is_cheitap_vowel(NUNG));
    }

    #[test]
    fn independent_spelling_of_dependent_nuclei() {
        for (fin, init) in FINAL_DIPHTHONGS.iter().zip(INITIAL_DIPHTHONGS.iter()) {
            assert_eq!(to_independent(fin), *init);
        }
        assert_eq!(to_independent("\u{ABE4}"), "\u{ABCF}");
        assert_eq!(to_independent("\u{ABE5}"), "\u{ABD1}\u{ABE5}");
    }

    #[test]
    fn nucleus_sets() {
        assert!(is_independent_nucleus("\u{ABD1}"));
        assert!(is_independent_nucleus(INITIAL_AU));
        assert!(!is_independent_nucleus(FINAL_AU));
        assert!(is_dependent_nucleus(FINAL_OI));
        assert!(is_dependent_nucleus("\u{ABE3}"));
    }
}
