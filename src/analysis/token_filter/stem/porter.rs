//! Porter stemming algorithm implementation.
//!
//! The Porter stemmer rewrites English words through five ordered steps:
//! 1. Plurals, -ed/-ing suffixes and a terminal -y
//! 2. Double suffixes (-ational → -ate, -tional → -tion, ...)
//! 3. -icate → -ic, -ative → "", ...
//! 4. Remove -al, -ance, -ence, ... when the stem is long enough
//! 5. Remove a final -e and reduce -ll
//!
//! # Examples
//!
//! ```
//! use lexbayes::analysis::token_filter::stem::Stemmer;
//! use lexbayes::analysis::token_filter::stem::porter::PorterStemmer;
//!
//! let stemmer = PorterStemmer::new();
//!
//! assert_eq!(stemmer.stem("running"), "run");
//! assert_eq!(stemmer.stem("flies"), "fli");
//! assert_eq!(stemmer.stem("traditional"), "tradit");
//! ```

use crate::analysis::token_filter::stem::Stemmer;

const STEP2_SUFFIXES: &[(&str, &str)] = &[
    ("ational", "ate"),
    ("tional", "tion"),
    ("enci", "ence"),
    ("anci", "ance"),
    ("izer", "ize"),
    ("bli", "ble"),
    ("alli", "al"),
    ("entli", "ent"),
    ("eli", "e"),
    ("ousli", "ous"),
    ("ization", "ize"),
    ("ation", "ate"),
    ("ator", "ate"),
    ("alism", "al"),
    ("iveness", "ive"),
    ("fulness", "ful"),
    ("ousness", "ous"),
    ("aliti", "al"),
    ("iviti", "ive"),
    ("biliti", "ble"),
    ("logi", "log"),
];

const STEP3_SUFFIXES: &[(&str, &str)] = &[
    ("icate", "ic"),
    ("ative", ""),
    ("alize", "al"),
    ("iciti", "ic"),
    ("ical", "ic"),
    ("ful", ""),
    ("ness", ""),
];

const STEP4_SUFFIXES: &[&str] = &[
    "al", "ance", "ence", "er", "ic", "able", "ible", "ant", "ement", "ment", "ent", "ion", "ou",
    "ism", "ate", "iti", "ous", "ive", "ize",
];

/// Porter stemming algorithm for English.
///
/// Words are lowercased first. Words of two letters or fewer, and words
/// containing non-ASCII characters, are returned lowercased but otherwise
/// unchanged.
#[derive(Debug, Clone, Default)]
pub struct PorterStemmer;

impl PorterStemmer {
    /// Create a new Porter stemmer.
    pub fn new() -> Self {
        PorterStemmer
    }
}

impl Stemmer for PorterStemmer {
    fn stem(&self, word: &str) -> String {
        let word = word.to_lowercase();
        if word.len() <= 2 || !word.is_ascii() {
            return word;
        }

        let mut buf = Word::new(word.into_bytes());
        buf.step1ab();
        buf.step1c();
        buf.step2();
        buf.step3();
        buf.step4();
        buf.step5();
        buf.into_string()
    }

    fn name(&self) -> &'static str {
        "porter"
    }
}

/// ASCII working buffer for a word being stemmed.
struct Word {
    b: Vec<u8>,
}

impl Word {
    fn new(b: Vec<u8>) -> Self {
        Word { b }
    }

    fn into_string(self) -> String {
        // only ASCII bytes ever enter the buffer
        String::from_utf8(self.b).unwrap_or_default()
    }

    fn len(&self) -> usize {
        self.b.len()
    }

    fn is_consonant(&self, i: usize) -> bool {
        match self.b[i] {
            b'a' | b'e' | b'i' | b'o' | b'u' => false,
            b'y' => i == 0 || !self.is_consonant(i - 1),
            _ => true,
        }
    }

    /// Number of vowel-consonant sequences in the first `len` letters.
    fn measure(&self, len: usize) -> usize {
        let mut n = 0;
        let mut i = 0;
        while i < len && self.is_consonant(i) {
            i += 1;
        }
        loop {
            while i < len && !self.is_consonant(i) {
                i += 1;
            }
            if i >= len {
                return n;
            }
            n += 1;
            while i < len && self.is_consonant(i) {
                i += 1;
            }
            if i >= len {
                return n;
            }
        }
    }

    fn has_vowel(&self, len: usize) -> bool {
        (0..len).any(|i| !self.is_consonant(i))
    }

    fn ends_double_consonant(&self, len: usize) -> bool {
        len >= 2 && self.b[len - 1] == self.b[len - 2] && self.is_consonant(len - 1)
    }

    /// consonant-vowel-consonant ending where the last letter is not w, x or y
    fn ends_cvc(&self, len: usize) -> bool {
        len >= 3
            && self.is_consonant(len - 3)
            && !self.is_consonant(len - 2)
            && self.is_consonant(len - 1)
            && !matches!(self.b[len - 1], b'w' | b'x' | b'y')
    }

    fn ends(&self, suffix: &str) -> bool {
        self.b.ends_with(suffix.as_bytes())
    }

    fn replace_suffix(&mut self, suffix: &str, replacement: &str) {
        let stem_len = self.len() - suffix.len();
        self.b.truncate(stem_len);
        self.b.extend_from_slice(replacement.as_bytes());
    }

    /// Replace the first matching suffix of `rules` when its stem has a
    /// measure above zero. Only the first match is ever considered.
    fn apply_rules(&mut self, rules: &[(&str, &str)]) {
        if let Some((suffix, replacement)) = rules.iter().find(|(s, _)| self.ends(s)) {
            if self.measure(self.len() - suffix.len()) > 0 {
                self.replace_suffix(suffix, replacement);
            }
        }
    }

    fn step1ab(&mut self) {
        if self.ends("sses") || self.ends("ies") {
            self.b.truncate(self.len() - 2);
        } else if !self.ends("ss") && self.ends("s") {
            self.b.pop();
        }

        if self.ends("eed") {
            if self.measure(self.len() - 3) > 0 {
                self.b.pop();
            }
            return;
        }

        let suffix = if self.ends("ed") {
            "ed"
        } else if self.ends("ing") {
            "ing"
        } else {
            return;
        };
        let stem_len = self.len() - suffix.len();
        if !self.has_vowel(stem_len) {
            return;
        }
        self.b.truncate(stem_len);

        if self.ends("at") || self.ends("bl") || self.ends("iz") {
            self.b.push(b'e');
        } else if self.ends_double_consonant(self.len()) {
            if !matches!(self.b[self.len() - 1], b'l' | b's' | b'z') {
                self.b.pop();
            }
        } else if self.measure(self.len()) == 1 && self.ends_cvc(self.len()) {
            self.b.push(b'e');
        }
    }

    fn step1c(&mut self) {
        if self.ends("y") && self.has_vowel(self.len() - 1) {
            let last = self.len() - 1;
            self.b[last] = b'i';
        }
    }

    fn step2(&mut self) {
        self.apply_rules(STEP2_SUFFIXES);
    }

    fn step3(&mut self) {
        self.apply_rules(STEP3_SUFFIXES);
    }

    fn step4(&mut self) {
        let matched = STEP4_SUFFIXES.iter().find(|suffix| {
            self.ends(suffix)
                && (**suffix != "ion"
                    || matches!(self.b.get(self.len().wrapping_sub(4)), Some(b's' | b't')))
        });

        if let Some(suffix) = matched {
            let stem_len = self.len() - suffix.len();
            if self.measure(stem_len) > 1 {
                self.b.truncate(stem_len);
            }
        }
    }

    fn step5(&mut self) {
        if self.ends("e") {
            let stem_len = self.len() - 1;
            let m = self.measure(stem_len);
            if m > 1 || (m == 1 && !self.ends_cvc(stem_len)) {
                self.b.pop();
            }
        }

        if self.ends("ll") && self.measure(self.len()) > 1 {
            self.b.pop();
        }
    }
}
