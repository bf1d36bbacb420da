//! Meetei Mayek spelling of syllables.
//!
//! Each phoneme has three written forms: the letter used before the nucleus
//! (or as the nucleus when the syllable starts with a vowel), the form used
//! after the nucleus, and the form used after the nucleus when another
//! cluster member follows.

use libmayek_core::{cleaner::fix_ngou_lonsum, meetei_mayek as mm, Error, Phoneme};

use crate::convertor::{tokens_to_string, PhonemeConvertor, Token};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LetterForms {
    pub initial: &'static str,
    pub coda: &'static str,
    pub cluster: &'static str,
}

const fn forms(initial: &'static str, coda: &'static str, cluster: &'static str) -> LetterForms {
    LetterForms {
        initial,
        coda,
        cluster,
    }
}

/// Written forms of a phoneme.
pub fn letter_forms(phoneme: Phoneme) -> LetterForms {
    match phoneme {
        Phoneme::K => forms("\u{ABC0}", "\u{ABDB}", "\u{ABDB}"),
        Phoneme::Kh => forms("\u{ABC8}", "\u{ABC8}", "\u{ABDB}"),
        Phoneme::G => forms("\u{ABD2}", "\u{ABD2}", "\u{ABDB}"),
        Phoneme::Gh => forms("\u{ABD8}", "\u{ABD8}", "\u{ABDB}"),
        Phoneme::Ng => forms("\u{ABC9}", "\u{ABE1}", "\u{ABE1}"),
        Phoneme::C => forms("\u{ABC6}", "\u{ABC6}", "\u{ABC6}"),
        Phoneme::Z => forms("\u{ABD6}", "\u{ABD6}", "\u{ABD6}"),
        Phoneme::Zh => forms("\u{ABD3}", "\u{ABD3}", "\u{ABD6}"),
        Phoneme::T => forms("\u{ABC7}", "\u{ABE0}", "\u{ABE0}"),
        Phoneme::Th => forms("\u{ABCA}", "\u{ABCA}", "\u{ABE0}"),
        Phoneme::D => forms("\u{ABD7}", "\u{ABD7}", "\u{ABE0}"),
        Phoneme::Dh => forms("\u{ABD9}", "\u{ABD9}", "\u{ABE0}"),
        Phoneme::N => forms("\u{ABC5}", "\u{ABDF}", "\u{ABDF}"),
        Phoneme::P => forms("\u{ABC4}", "\u{ABDE}", "\u{ABDE}"),
        Phoneme::Ph => forms("\u{ABD0}", "\u{ABD0}", "\u{ABDE}"),
        Phoneme::B => forms("\u{ABD5}", "\u{ABD5}", "\u{ABDE}"),
        Phoneme::Bh => forms("\u{ABDA}", "\u{ABDA}", "\u{ABDE}"),
        Phoneme::M => forms("\u{ABC3}", "\u{ABDD}", "\u{ABDD}"),
        Phoneme::J => forms("\u{ABCC}", "\u{ABE2}", "\u{ABE2}"),
        Phoneme::R => forms("\u{ABD4}", "\u{ABD4}", "\u{ABD4}"),
        // wai is silent after the nucleus
        Phoneme::W => forms("\u{ABCB}", "", ""),
        Phoneme::L => forms("\u{ABC2}", "\u{ABDC}", "\u{ABDC}"),
        Phoneme::S => forms("\u{ABC1}", "\u{ABC1}", "\u{ABC1}"),
        Phoneme::H => forms("\u{ABCD}", "\u{ABCD}", ""),
        Phoneme::I => forms("\u{ABCF}", "\u{ABE4}", "\u{ABE4}"),
        Phoneme::E => forms("\u{ABD1}\u{ABE6}", "\u{ABE6}", "\u{ABE6}"),
        // the inherent vowel is unwritten after a consonant
        Phoneme::X => forms("\u{ABD1}", "", ""),
        Phoneme::U => forms("\u{ABCE}", "\u{ABE8}", "\u{ABE8}"),
        Phoneme::O => forms("\u{ABD1}\u{ABE3}", "\u{ABE3}", "\u{ABE3}"),
        Phoneme::A => forms("\u{ABD1}\u{ABE5}", "\u{ABE5}", "\u{ABE5}"),
        Phoneme::Ai => forms(mm::INITIAL_AI, mm::FINAL_AI, mm::FINAL_AI),
        Phoneme::Xi => forms(mm::INITIAL_XI, mm::FINAL_XI, mm::FINAL_XI),
        Phoneme::Ui => forms(mm::INITIAL_UI, mm::FINAL_UI, mm::FINAL_UI),
        Phoneme::Oi => forms(mm::INITIAL_OI, mm::FINAL_OI, mm::FINAL_OI),
        Phoneme::Au => forms(mm::INITIAL_AU, mm::FINAL_AU, mm::FINAL_AU),
        Phoneme::Xu => forms(mm::INITIAL_XU, mm::FINAL_XU, mm::FINAL_XU),
    }
}

/// Spelled form of a list of syllables.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Spelling {
    /// Meetei Mayek text of each syllable.
    pub syllables: Vec<String>,
    /// Prepared phoneme sequence of each syllable, for diagnostics.
    pub phonemes: Vec<String>,
}

impl Spelling {
    pub fn word(&self) -> String {
        self.syllables.concat()
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Speller {
    convertor: PhonemeConvertor,
}

impl Speller {
    pub fn new(convertor: PhonemeConvertor) -> Self {
        Self { convertor }
    }

    /// Spell each Bengali syllable independently.
    pub fn spell<S: AsRef<str>>(&self, syllables: &[S], phoneme_sep: &str) -> Result<Spelling, Error> {
        let mut out = Spelling::default();
        for syllable in syllables {
            let syllable = syllable.as_ref();
            let raw = self.convertor.extract_phonemes(syllable);
            let tokens = self.convertor.prepare_syllable_phoneme(&raw);
            out.syllables.push(self.spell_tokens(&tokens, syllable)?);
            out.phonemes.push(tokens_to_string(&tokens, phoneme_sep));
        }
        Ok(out)
    }

    /// Render one prepared syllable.
    ///
    /// The first phoneme takes its initial form. Consonants before the
    /// nucleus take initial forms too; the nucleus and everything after it
    /// take coda forms. A virama becomes apun iyek unless it ends the
    /// syllable.
    pub fn spell_tokens(&self, tokens: &[Token], syllable: &str) -> Result<String, Error> {
        let gap = |t: &Token| Error::InternalTableGap {
            token: t.to_string(),
            syllable: syllable.to_string(),
        };
        let Some((first, rest)) = tokens.split_first() else {
            return Ok(String::new());
        };
        let last = tokens.len() - 1;
        let mut out = String::new();
        let mut nucleus_reached = false;
        match first {
            Token::Phoneme(p) => {
                out.push_str(letter_forms(*p).initial);
                nucleus_reached = p.is_vowel();
            }
            Token::Virama => {}
            Token::Unmapped(_) => return Err(gap(first)),
        }
        for (offset, token) in rest.iter().enumerate() {
            let pos = offset + 1;
            match *token {
                Token::Virama => {
                    if pos != last {
                        out.push(mm::APUN_IYEK);
                    }
                }
                Token::Phoneme(p) if nucleus_reached => {
                    let f = letter_forms(p);
                    let clustered = p.is_consonant()
                        && tokens.get(pos + 1) == Some(&Token::Virama)
                        && pos + 1 != last;
                    out.push_str(if clustered { f.cluster } else { f.coda });
                }
                Token::Phoneme(p) if p.is_consonant() => {
                    out.push_str(letter_forms(p).initial);
                }
                Token::Phoneme(p) => {
                    nucleus_reached = true;
                    out.push_str(letter_forms(p).coda);
                }
                Token::Unmapped(_) => return Err(gap(token)),
            }
        }
        Ok(fix_ngou_lonsum(&out))
    }
}
