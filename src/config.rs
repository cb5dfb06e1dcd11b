//! Dictionary file locations.
//!
//! The three files default to the `data/` directory shipped with the crate.
//! Each can be overridden through the environment or set explicitly:
//!
//! | variable                  | file                       |
//! |---------------------------|----------------------------|
//! | `RHYMEKIT_DATA_DIR`       | directory for all defaults |
//! | `RHYMEKIT_WORDS_PATH`     | primary word list          |
//! | `RHYMEKIT_MULTIPLES_PATH` | multiple pronunciations    |
//! | `RHYMEKIT_RHYMES_PATH`    | rhyme groups               |

use std::path::{Path, PathBuf};

pub const WORDS_FILE: &str = "words.txt";
pub const MULTIPLES_FILE: &str = "multiple.txt";
pub const RHYMES_FILE: &str = "rhymes.txt";

pub const DATA_DIR_ENV: &str = "RHYMEKIT_DATA_DIR";
pub const WORDS_PATH_ENV: &str = "RHYMEKIT_WORDS_PATH";
pub const MULTIPLES_PATH_ENV: &str = "RHYMEKIT_MULTIPLES_PATH";
pub const RHYMES_PATH_ENV: &str = "RHYMEKIT_RHYMES_PATH";

/// Paths of the three dictionary files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DictionaryPaths {
    /// `PRONUNCIATION_ID RHYME_KEY SYLLABLE_COUNT` per line.
    pub words: PathBuf,
    /// `WORD ID1 ID2 ...` per line.
    pub multiples: PathBuf,
    /// `RHYME_KEY ID1 ID2 ...` per line.
    pub rhymes: PathBuf,
}

impl DictionaryPaths {
    /// All three files inside `dir`, using the standard file names.
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        let dir = dir.as_ref();
        Self { words: dir.join(WORDS_FILE), multiples: dir.join(MULTIPLES_FILE), rhymes: dir.join(RHYMES_FILE) }
    }

    /// Defaults, with any `RHYMEKIT_*` environment overrides applied.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var_os(key).map(PathBuf::from))
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<PathBuf>) -> Self {
        let base = lookup(DATA_DIR_ENV).map(Self::in_dir).unwrap_or_default();
        Self {
            words: lookup(WORDS_PATH_ENV).unwrap_or(base.words),
            multiples: lookup(MULTIPLES_PATH_ENV).unwrap_or(base.multiples),
            rhymes: lookup(RHYMES_PATH_ENV).unwrap_or(base.rhymes),
        }
    }

    pub fn with_words(mut self, path: impl Into<PathBuf>) -> Self {
        self.words = path.into();
        self
    }

    pub fn with_multiples(mut self, path: impl Into<PathBuf>) -> Self {
        self.multiples = path.into();
        self
    }

    pub fn with_rhymes(mut self, path: impl Into<PathBuf>) -> Self {
        self.rhymes = path.into();
        self
    }
}

impl Default for DictionaryPaths {
    fn default() -> Self {
        Self::in_dir(Path::new(env!("CARGO_MANIFEST_DIR")).join("data"))
    }
}
