//! Insertion-ordered vocabulary of stems.

use ahash::{AHashMap, AHashSet};

/// Distinct stems in first-seen order. Only ever grows, so an index handed
/// out once keeps pointing at the same stem.
#[derive(Debug, Clone, Default)]
pub struct Vocabulary {
    stems: Vec<String>,
    index: AHashMap<String, usize>,
}

impl Vocabulary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `stem` if it is new and return its index either way.
    pub fn insert(&mut self, stem: &str) -> usize {
        if let Some(&idx) = self.index.get(stem) {
            return idx;
        }
        let idx = self.stems.len();
        self.stems.push(stem.to_string());
        self.index.insert(stem.to_string(), idx);
        idx
    }

    /// Add every stem of a document, ignoring ones already present.
    pub fn extend<'a, I>(&mut self, stems: I)
    where
        I: IntoIterator<Item = &'a String>,
    {
        for stem in stems {
            self.insert(stem);
        }
    }

    pub fn index_of(&self, stem: &str) -> Option<usize> {
        self.index.get(stem).copied()
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.stems.get(index).map(String::as_str)
    }

    pub fn contains(&self, stem: &str) -> bool {
        self.index.contains_key(stem)
    }

    pub fn len(&self) -> usize {
        self.stems.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stems.is_empty()
    }

    /// Stems in enumeration order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.stems.iter().map(String::as_str)
    }

    /// Presence vector of `stems` over the vocabulary as it stands now:
    /// position `i` is 1 iff stem `i` occurs in `stems`.
    pub fn presence_vector(&self, stems: &[String]) -> Vec<u8> {
        let present: AHashSet<&str> = stems.iter().map(String::as_str).collect();
        self.stems
            .iter()
            .map(|stem| u8::from(present.contains(stem.as_str())))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stems(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn test_insertion_order_and_duplicates() {
        let mut vocabulary = Vocabulary::new();
        vocabulary.extend(&stems(&["i", "love", "cat"]));
        vocabulary.extend(&stems(&["i", "love", "dog", "dog"]));

        let enumerated: Vec<&str> = vocabulary.iter().collect();
        assert_eq!(enumerated, vec!["i", "love", "cat", "dog"]);
        assert_eq!(vocabulary.index_of("dog"), Some(3));
        assert_eq!(vocabulary.get(1), Some("love"));
        assert_eq!(vocabulary.insert("cat"), 2);
        assert_eq!(vocabulary.len(), 4);
    }

    #[test]
    fn test_presence_vector() {
        let mut vocabulary = Vocabulary::new();
        vocabulary.extend(&stems(&["i", "love", "cat", "dog"]));

        assert_eq!(
            vocabulary.presence_vector(&stems(&["dog", "i", "dog", "parrot"])),
            vec![1, 0, 0, 1]
        );
        assert_eq!(vocabulary.presence_vector(&[]), vec![0, 0, 0, 0]);
    }

    #[test]
    fn test_presence_vector_tracks_growth() {
        let mut vocabulary = Vocabulary::new();
        vocabulary.extend(&stems(&["cat"]));
        let before = vocabulary.presence_vector(&stems(&["cat", "dog"]));

        vocabulary.insert("dog");
        let after = vocabulary.presence_vector(&stems(&["cat", "dog"]));

        assert_eq!(before, vec![1]);
        assert_eq!(after, vec![1, 1]);
    }

    #[test]
    fn test_empty_vocabulary() {
        let vocabulary = Vocabulary::new();
        assert!(vocabulary.is_empty());
        assert!(!vocabulary.contains("cat"));
        assert!(vocabulary.presence_vector(&stems(&["cat"])).is_empty());
    }
}
