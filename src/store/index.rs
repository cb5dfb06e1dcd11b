//! The three in-memory indices.
//!
//! ```text
//! by_pronunciation_id   "READ(2)" -> Arc<Pronunciation>        (owner)
//! by_word_multi         "READ"    -> [Arc, Arc]                 (shared)
//! by_rhyme_key          "EH1-D"   -> [Arc, Arc, ...]            (shared)
//! ```
//!
//! Every record reachable from the two grouped maps is the same `Arc` held by
//! `by_pronunciation_id`. The grouped maps are resolved strictly after the
//! primary list is complete; ids that do not resolve, and ids repeated on
//! one line, are dropped with a warning.

use super::loader::{self, GroupEntry, Source, WordEntry};
use crate::Pronunciation;
use crate::config::DictionaryPaths;
use crate::error::Result;
use log::{debug, warn};
use std::collections::HashMap;
use std::io::BufRead;
use std::sync::Arc;

#[derive(Debug, Default)]
pub(crate) struct Indices {
    by_pronunciation_id: HashMap<String, Arc<Pronunciation>>,
    by_word_multi: HashMap<String, Vec<Arc<Pronunciation>>>,
    by_rhyme_key: HashMap<String, Vec<Arc<Pronunciation>>>,
}

impl Indices {
    /// Read the three files named by `paths`, primary list first.
    pub(crate) fn load(paths: &DictionaryPaths) -> Result<Self> {
        debug!(
            "loading pronunciation dictionary words={} multiples={} rhymes={}",
            paths.words.display(),
            paths.multiples.display(),
            paths.rhymes.display()
        );
        let words = loader::read_words(loader::open(&paths.words)?)?;
        let multiples = loader::read_groups(loader::open(&paths.multiples)?)?;
        let rhymes = loader::read_groups(loader::open(&paths.rhymes)?)?;
        Ok(Self::build(words, multiples, rhymes))
    }

    pub(crate) fn from_sources<W, M, R>(words: Source<W>, multiples: Source<M>, rhymes: Source<R>) -> Result<Self>
    where
        W: BufRead,
        M: BufRead,
        R: BufRead,
    {
        let words = loader::read_words(words)?;
        let multiples = loader::read_groups(multiples)?;
        let rhymes = loader::read_groups(rhymes)?;
        Ok(Self::build(words, multiples, rhymes))
    }

    fn build(words: Vec<WordEntry>, multiples: Vec<GroupEntry>, rhymes: Vec<GroupEntry>) -> Self {
        let mut indices = Indices::default();

        for entry in words {
            let record = Pronunciation::from_dictionary(&entry.pronunciation_id, &entry.rhyme_key, entry.num_syllables);
            indices.by_pronunciation_id.insert(entry.pronunciation_id, Arc::new(record));
        }

        for GroupEntry { key, ids } in multiples {
            let resolved = indices.resolve_all("multiples", &key, &ids);
            if resolved.is_empty() {
                warn!("word {key} lists no known pronunciations; skipping");
                continue;
            }
            indices.by_word_multi.insert(key.to_uppercase(), resolved);
        }

        for GroupEntry { key, ids } in rhymes {
            let resolved = indices.resolve_all("rhymes", &key, &ids);
            indices.by_rhyme_key.insert(key, resolved);
        }

        debug!(
            "loaded {} pronunciations, {} multi-pronunciation words, {} rhyme groups",
            indices.by_pronunciation_id.len(),
            indices.by_word_multi.len(),
            indices.by_rhyme_key.len()
        );

        indices
    }

    /// Resolve `ids` in order. Unknown ids and repeats are dropped, so every
    /// group holds each record at most once.
    fn resolve_all(&self, list: &str, key: &str, ids: &[String]) -> Vec<Arc<Pronunciation>> {
        let mut resolved: Vec<Arc<Pronunciation>> = Vec::with_capacity(ids.len());
        for id in ids {
            let Some(record) = self.by_pronunciation_id.get(id) else {
                warn!("{list}: {key} references unknown pronunciation id {id}; dropping");
                continue;
            };
            if resolved.iter().any(|seen| Arc::ptr_eq(seen, record)) {
                warn!("{list}: {key} lists pronunciation id {id} more than once; keeping the first");
                continue;
            }
            resolved.push(Arc::clone(record));
        }
        resolved
    }

    pub(crate) fn by_id(&self, pronunciation_id: &str) -> Option<&Arc<Pronunciation>> {
        self.by_pronunciation_id.get(pronunciation_id)
    }

    pub(crate) fn multiples(&self, word: &str) -> Option<&[Arc<Pronunciation>]> {
        self.by_word_multi.get(word).map(Vec::as_slice)
    }

    pub(crate) fn rhyme_group(&self, rhyme_key: &str) -> &[Arc<Pronunciation>] {
        self.by_rhyme_key.get(rhyme_key).map(Vec::as_slice).unwrap_or(&[])
    }

    pub(crate) fn len(&self) -> usize {
        self.by_pronunciation_id.len()
    }
}
