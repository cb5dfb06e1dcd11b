//! Line parsing for the three dictionary files.
//!
//! All three formats are whitespace-separated fields, one record per line:
//!
//! ```text
//! words     READ(2) EH1-D 1          id, rhyme key, syllable count
//! multiples READ READ(1) READ(2)     word, ids...
//! rhymes    EH1-D BED READ(2) RED    rhyme key, ids...
//! ```
//!
//! Blank lines are skipped. Any other line with the wrong shape is a
//! `DictionaryError::Format` naming the source and the 1-based line number.
//! Nothing here resolves ids; that happens in `index.rs` once the primary
//! list is complete.

use crate::error::{DictionaryError, Result};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// A named line-oriented source. `name` is what error messages report.
pub(crate) struct Source<R> {
    pub name: String,
    pub reader: R,
}

impl<R: BufRead> Source<R> {
    pub(crate) fn new(name: impl Into<String>, reader: R) -> Self {
        Source { name: name.into(), reader }
    }
}

/// Open a dictionary file for reading.
pub(crate) fn open(path: &Path) -> Result<Source<BufReader<File>>> {
    let file = File::open(path).map_err(|err| DictionaryError::file_access(path, err))?;
    Ok(Source::new(path.display().to_string(), BufReader::new(file)))
}

/// One row of the primary word list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct WordEntry {
    pub pronunciation_id: String,
    pub rhyme_key: String,
    pub num_syllables: u32,
}

/// One row of the multiples or rhymes list: a key and the ids it lists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct GroupEntry {
    pub key: String,
    pub ids: Vec<String>,
}

pub(crate) fn read_words<R: BufRead>(source: Source<R>) -> Result<Vec<WordEntry>> {
    let name = source.name.clone();
    let mut entries = Vec::new();

    for_each_record(source, |line_no, fields| {
        let [pronunciation_id, rhyme_key, count] = fields[..] else {
            return Err(DictionaryError::format(
                name.as_str(),
                line_no,
                format!("expected 3 fields, found {}", fields.len()),
            ));
        };

        let num_syllables = match count.parse::<u32>() {
            Ok(n) if n > 0 => n,
            _ => {
                return Err(DictionaryError::format(
                    name.as_str(),
                    line_no,
                    format!("invalid syllable count '{count}'"),
                ));
            }
        };

        entries.push(WordEntry {
            pronunciation_id: pronunciation_id.to_string(),
            rhyme_key: rhyme_key.to_string(),
            num_syllables,
        });
        Ok(())
    })?;

    Ok(entries)
}

pub(crate) fn read_groups<R: BufRead>(source: Source<R>) -> Result<Vec<GroupEntry>> {
    let name = source.name.clone();
    let mut entries = Vec::new();

    for_each_record(source, |line_no, fields| {
        let Some((key, ids)) = fields.split_first().filter(|(_, ids)| !ids.is_empty()) else {
            return Err(DictionaryError::format(
                name.as_str(),
                line_no,
                format!("expected a key and at least one id, found {} field(s)", fields.len()),
            ));
        };

        entries.push(GroupEntry { key: key.to_string(), ids: ids.iter().map(|id| id.to_string()).collect() });
        Ok(())
    })?;

    Ok(entries)
}

fn for_each_record<R, F>(source: Source<R>, mut handle: F) -> Result<()>
where
    R: BufRead,
    F: FnMut(usize, Vec<&str>) -> Result<()>,
{
    for (idx, line) in source.reader.lines().enumerate() {
        let line = line.map_err(|err| DictionaryError::file_access(&source.name, err))?;
        let fields: Vec<&str> = line.split_whitespace().collect();
        if fields.is_empty() {
            continue;
        }
        handle(idx + 1, fields)?;
    }
    Ok(())
}
