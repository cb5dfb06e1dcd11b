//! Syllable counts and rhymes for short English phrases.
//!
//! The core is a read-only pronunciation dictionary loaded from three
//! line-oriented files (see [`DictionaryPaths`]):
//!
//! ```text
//! words.txt     READ(2) EH1-D 1          one line per pronunciation
//! multiple.txt  READ READ(1) READ(2)     words with several readings
//! rhymes.txt    EH1-D BED READ(2) RED    pronunciations per rhyme key
//! ```
//!
//! Words missing from the dictionary still get a syllable count from a
//! spelling heuristic ([`syllables::estimate`]) but never have rhymes.
//!
//! ```
//! use rhymekit::{PronunciationStore, get_pronunciations, get_rhymes};
//!
//! let store = PronunciationStore::default();
//! let read = store.get_pronunciations("read").unwrap();
//! assert_eq!(read.len(), 2);
//!
//! let rhymes = store.get_rhymes(&read[0]).unwrap();
//! assert!(rhymes.iter().any(|p| p.word() == "SEED"));
//!
//! // The same queries against the process-wide store.
//! # if rhymekit::DictionaryPaths::from_env() == rhymekit::DictionaryPaths::default() {
//! let bed = get_pronunciations("bed").unwrap();
//! let rhymes = get_rhymes(&bed[0]).unwrap();
//! assert!(rhymes.iter().any(|p| p.word() == "RED"));
//! # }
//! ```

#[macro_use]
mod macros;
mod config;
mod error;
mod phrase;
mod pronunciation;
mod store;
pub mod syllables;

pub use config::{
    DATA_DIR_ENV, DictionaryPaths, MULTIPLES_FILE, MULTIPLES_PATH_ENV, RHYMES_FILE, RHYMES_PATH_ENV, WORDS_FILE,
    WORDS_PATH_ENV,
};
pub use error::{DictionaryError, Result};
pub use phrase::{Phrase, RhymeGroup};
pub use pronunciation::Pronunciation;
pub use store::{PronunciationStore, default_store, get_pronunciations, get_rhymes};
