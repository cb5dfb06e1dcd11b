//! Pronunciation dictionary store.
//!
//! The store owns the indices built from the three dictionary files and
//! answers the two queries everything else is built on:
//!
//! ```text
//! get_pronunciations("read")
//!   ├─ multi-pronunciation word?  -> [READ(1), READ(2)]
//!   ├─ single dictionary entry?   -> [SEED]
//!   └─ otherwise                  -> [synthesized, heuristic syllables]
//!
//! get_rhymes(READ(1))
//!   └─ group for rhyme key IY1-D, minus READ(1) itself
//! ```
//!
//! ## Loading
//!
//! Indices are built lazily on the first query (or an explicit
//! [`PronunciationStore::load`]) and published through a `OnceCell`, so
//! concurrent first callers run a single build and never see a partial index.
//! A failed build publishes nothing; the next call retries.
//!
//! ## Modules
//!
//! - `loader.rs`: line parsing and format validation.
//! - `index.rs`: the three maps and reference resolution.

#[path = "store/index.rs"]
mod index;
#[path = "store/loader.rs"]
mod loader;
#[cfg(test)]
#[path = "store/tests.rs"]
mod tests;

use crate::config::{self, DictionaryPaths};
use crate::error::Result;
use crate::{Pronunciation, syllables};
use index::Indices;
use log::trace;
use loader::Source;
use once_cell::sync::{Lazy, OnceCell};
use std::io::BufRead;
use std::sync::Arc;

static DEFAULT_STORE: Lazy<PronunciationStore> = Lazy::new(|| PronunciationStore::new(DictionaryPaths::from_env()));

/// Read-only pronunciation dictionary with lazy, one-time loading.
#[derive(Debug)]
pub struct PronunciationStore {
    paths: DictionaryPaths,
    indices: OnceCell<Indices>,
}

impl PronunciationStore {
    /// Create a store that will read `paths` on first use.
    pub fn new(paths: DictionaryPaths) -> Self {
        PronunciationStore { paths, indices: OnceCell::new() }
    }

    /// Create a store using [`DictionaryPaths::from_env`].
    pub fn from_env() -> Self {
        Self::new(DictionaryPaths::from_env())
    }

    /// Build a store eagerly from three in-memory line sources in the
    /// dictionary file formats.
    pub fn from_readers<W, M, R>(words: W, multiples: M, rhymes: R) -> Result<Self>
    where
        W: BufRead,
        M: BufRead,
        R: BufRead,
    {
        let indices = Indices::from_sources(
            Source::new(config::WORDS_FILE, words),
            Source::new(config::MULTIPLES_FILE, multiples),
            Source::new(config::RHYMES_FILE, rhymes),
        )?;
        Ok(PronunciationStore { paths: DictionaryPaths::default(), indices: OnceCell::with_value(indices) })
    }

    /// Load the dictionary if it is not loaded yet. Repeated calls are no-ops.
    pub fn load(&self) -> Result<()> {
        self.indices().map(|_| ())
    }

    pub fn is_loaded(&self) -> bool {
        self.indices.get().is_some()
    }

    /// Number of dictionary pronunciations. Loads on first use.
    pub fn len(&self) -> Result<usize> {
        Ok(self.indices()?.len())
    }

    pub fn is_empty(&self) -> Result<bool> {
        Ok(self.len()? == 0)
    }

    /// Look up one dictionary record by its exact pronunciation id
    /// (for example `READ(2)`).
    pub fn get_pronunciation_by_id(&self, pronunciation_id: &str) -> Result<Option<Arc<Pronunciation>>> {
        Ok(self.indices()?.by_id(&pronunciation_id.to_uppercase()).cloned())
    }

    /// All pronunciations of `word`, in dictionary order. Never empty: words
    /// the dictionary does not know get one synthesized record whose syllable
    /// count comes from [`syllables::estimate`].
    pub fn get_pronunciations(&self, word: &str) -> Result<Vec<Arc<Pronunciation>>> {
        let indices = self.indices()?;
        let key = normalize(word);

        if let Some(records) = indices.multiples(&key) {
            return Ok(records.to_vec());
        }

        if let Some(record) = indices.by_id(&key) {
            return Ok(vec![Arc::clone(record)]);
        }

        let num_syllables = syllables::estimate(&key.to_lowercase());
        trace!("{key} not in dictionary; estimated {num_syllables} syllable(s)");
        Ok(vec![Arc::new(Pronunciation::synthesized(key, num_syllables))])
    }

    /// Pronunciations sharing the rhyme key of `pronunciation`, in file order,
    /// excluding `pronunciation` itself. Empty for records without a rhyme
    /// key.
    pub fn get_rhymes(&self, pronunciation: &Pronunciation) -> Result<Vec<Arc<Pronunciation>>> {
        let Some(rhyme_key) = pronunciation.rhyme_key() else {
            return Ok(Vec::new());
        };

        let group = self.indices()?.rhyme_group(rhyme_key);
        Ok(group.iter().filter(|&candidate| **candidate != *pronunciation).cloned().collect())
    }

    fn indices(&self) -> Result<&Indices> {
        self.indices.get_or_try_init(|| Indices::load(&self.paths))
    }
}

impl Default for PronunciationStore {
    fn default() -> Self {
        Self::new(DictionaryPaths::default())
    }
}

/// The process-wide store, configured from the environment on first access.
pub fn default_store() -> &'static PronunciationStore {
    &DEFAULT_STORE
}

/// [`PronunciationStore::get_pronunciations`] on the [`default_store`].
pub fn get_pronunciations(word: &str) -> Result<Vec<Arc<Pronunciation>>> {
    DEFAULT_STORE.get_pronunciations(word)
}

/// [`PronunciationStore::get_rhymes`] on the [`default_store`].
pub fn get_rhymes(pronunciation: &Pronunciation) -> Result<Vec<Arc<Pronunciation>>> {
    DEFAULT_STORE.get_rhymes(pronunciation)
}

/// Dictionary entries are uppercase.
fn normalize(word: &str) -> String {
    word.trim().to_uppercase()
}
