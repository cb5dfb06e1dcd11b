//! Phrase-level view over the pronunciation store.
//!
//! A [`Phrase`] tokenizes free text, resolves every token through a
//! [`PronunciationStore`] and answers questions about the phrase as a whole
//! (syllable count) or about its last word (rhyme keys and rhymes).
//!
//! # Example
//! ```
//! use rhymekit::{Phrase, PronunciationStore};
//!
//! let store = PronunciationStore::default();
//! let phrase = Phrase::with_store("to be or not to beer", &store).unwrap();
//! assert_eq!(phrase.syllables(), 6);
//! assert!(phrase.flat_rhymes().unwrap().contains(&"here"));
//! ```

use crate::error::Result;
use crate::store::{self, PronunciationStore};
use crate::Pronunciation;
use once_cell::unsync::OnceCell;
use std::sync::Arc;

/// Rhyming words for one rhyme key of the last word.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RhymeGroup {
    pub rhyme_key: String,
    /// Lowercase words, in dictionary order.
    pub words: Vec<String>,
}

/// A tokenized phrase with per-token pronunciations.
#[derive(Debug)]
pub struct Phrase<'s> {
    store: &'s PronunciationStore,
    tokens: Vec<String>,
    /// One non-empty list per token.
    pronunciations: Vec<Vec<Arc<Pronunciation>>>,
    rhymes: OnceCell<Vec<RhymeGroup>>,
}

impl Phrase<'static> {
    /// Resolve `text` against the process-wide [`store::default_store`].
    pub fn new(text: &str) -> Result<Self> {
        Phrase::with_store(text, store::default_store())
    }
}

impl<'s> Phrase<'s> {
    /// Resolve `text` against `store`.
    pub fn with_store(text: &str, store: &'s PronunciationStore) -> Result<Self> {
        let tokens = tokenize(text);
        let pronunciations = tokens.iter().map(|token| store.get_pronunciations(token)).collect::<Result<Vec<_>>>()?;
        Ok(Phrase { store, tokens, pronunciations, rhymes: OnceCell::new() })
    }

    /// Uppercase tokens as looked up in the dictionary.
    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    pub fn pronunciations(&self) -> &[Vec<Arc<Pronunciation>>] {
        &self.pronunciations
    }

    /// Total syllables, using the first pronunciation of every token.
    pub fn syllables(&self) -> u32 {
        self.pronunciations.iter().filter_map(|p| p.first()).map(|p| p.num_syllables()).sum()
    }

    /// Rhyme keys of the last word, one per dictionary pronunciation.
    pub fn rhyme_keys(&self) -> Vec<&str> {
        let mut keys: Vec<&str> = Vec::new();
        for key in self.last_pronunciations().iter().filter_map(|p| p.rhyme_key()) {
            if !keys.contains(&key) {
                keys.push(key);
            }
        }
        keys
    }

    pub fn rhyme_key(&self) -> Option<&str> {
        self.rhyme_keys().into_iter().next()
    }

    /// Whether the last word is in the dictionary. Check this before asking
    /// for rhymes: words outside the dictionary never have any.
    pub fn is_dictionary_word(&self) -> bool {
        self.last_pronunciations().first().is_some_and(|p| p.is_dictionary_backed())
    }

    /// The last word, lowercase.
    pub fn last_word(&self) -> Option<String> {
        self.last_pronunciations().first().map(|p| p.word().to_lowercase())
    }

    /// Rhymes of the last word grouped by rhyme key. Computed on first call.
    pub fn rhymes(&self) -> Result<&[RhymeGroup]> {
        self.rhymes.get_or_try_init(|| self.load_rhymes()).map(Vec::as_slice)
    }

    /// All rhymes of the last word in rhyme-key order.
    pub fn flat_rhymes(&self) -> Result<Vec<&str>> {
        Ok(self.rhymes()?.iter().flat_map(|group| group.words.iter().map(String::as_str)).collect())
    }

    fn last_pronunciations(&self) -> &[Arc<Pronunciation>] {
        self.pronunciations.last().map(Vec::as_slice).unwrap_or(&[])
    }

    fn load_rhymes(&self) -> Result<Vec<RhymeGroup>> {
        if !self.is_dictionary_word() {
            return Ok(Vec::new());
        }

        let mut groups: Vec<RhymeGroup> = Vec::new();
        for pronunciation in self.last_pronunciations() {
            let Some(rhyme_key) = pronunciation.rhyme_key() else { continue };
            if groups.iter().any(|g| g.rhyme_key == rhyme_key) {
                continue;
            }
            let words = self.store.get_rhymes(pronunciation)?.iter().map(|p| p.word().to_lowercase()).collect();
            groups.push(RhymeGroup { rhyme_key: rhyme_key.to_string(), words });
        }
        Ok(groups)
    }
}

/// Uppercase, keep letters, apostrophes and whitespace, split on whitespace.
fn tokenize(text: &str) -> Vec<String> {
    let upper = text.to_uppercase();
    regex!(r"[^A-Z'\s]+").replace_all(&upper, "").split_whitespace().map(str::to_string).collect()
}
