use std::fmt;

/// One phonetic reading of a word.
///
/// Records loaded from the dictionary carry a pronunciation id and a rhyme
/// key; records synthesized for unknown words carry neither, and their
/// syllable count is a spelling-based estimate.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Pronunciation {
    word: String,
    pronunciation_id: Option<String>,
    num_syllables: u32,
    rhyme_key: Option<String>,
}

impl Pronunciation {
    /// Build a dictionary-backed record from a pronunciation id such as
    /// `READ(2)`. The word is the id with its variant suffix removed.
    pub(crate) fn from_dictionary(pronunciation_id: &str, rhyme_key: &str, num_syllables: u32) -> Self {
        Pronunciation {
            word: word_from_pronunciation_id(pronunciation_id).to_string(),
            pronunciation_id: Some(pronunciation_id.to_string()),
            num_syllables,
            rhyme_key: Some(rhyme_key.to_string()),
        }
    }

    /// Build a heuristic record for a word missing from the dictionary.
    pub(crate) fn synthesized(word: impl Into<String>, num_syllables: u32) -> Self {
        Pronunciation { word: word.into(), pronunciation_id: None, num_syllables: num_syllables.max(1), rhyme_key: None }
    }

    pub fn word(&self) -> &str {
        &self.word
    }

    pub fn pronunciation_id(&self) -> Option<&str> {
        self.pronunciation_id.as_deref()
    }

    pub fn num_syllables(&self) -> u32 {
        self.num_syllables
    }

    pub fn rhyme_key(&self) -> Option<&str> {
        self.rhyme_key.as_deref()
    }

    /// Whether this record came from the dictionary (and so has an
    /// authoritative syllable count and a rhyme group).
    pub fn is_dictionary_backed(&self) -> bool {
        self.pronunciation_id.is_some()
    }
}

impl fmt::Display for Pronunciation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.word)
    }
}

/// Strip a parenthesized variant suffix: `READ(2)` -> `READ`.
pub(crate) fn word_from_pronunciation_id(pronunciation_id: &str) -> &str {
    match pronunciation_id.find('(') {
        Some(idx) => &pronunciation_id[..idx],
        None => pronunciation_id,
    }
}
