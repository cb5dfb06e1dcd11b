use super::*;
use crate::DictionaryError;
use std::fs;

const WORDS: &str = "\
READ(1) K-EED 1
READ(2) K-ED 1
SEED(1) K-EED 1
BEAD(1) K-EED 1
BED K-ED 1
LONE OW1-N 1
POETRY OW1-AH0-T-R-IY0 3
";

const MULTIPLES: &str = "\
READ READ(1) READ(2)
";

const RHYMES: &str = "\
K-EED READ(1) SEED(1) BEAD(1)
K-ED READ(2) BED
OW1-N LONE
OW1-AH0-T-R-IY0 POETRY
";

fn fixture_store() -> PronunciationStore {
    PronunciationStore::from_readers(WORDS.as_bytes(), MULTIPLES.as_bytes(), RHYMES.as_bytes()).unwrap()
}

fn ids(records: &[Arc<Pronunciation>]) -> Vec<&str> {
    records.iter().map(|p| p.pronunciation_id().unwrap_or("<none>")).collect()
}

fn write_fixture(dir: &std::path::Path, words: &str, multiples: &str, rhymes: &str) -> DictionaryPaths {
    fs::write(dir.join("words.txt"), words).unwrap();
    fs::write(dir.join("multiple.txt"), multiples).unwrap();
    fs::write(dir.join("rhymes.txt"), rhymes).unwrap();
    DictionaryPaths::in_dir(dir)
}

#[test]
fn multi_pronunciation_word_returns_all_in_file_order() {
    let store = fixture_store();
    let read = store.get_pronunciations("read").unwrap();

    assert_eq!(ids(&read), vec!["READ(1)", "READ(2)"]);
    assert_eq!(read[0].rhyme_key(), Some("K-EED"));
    assert_eq!(read[1].rhyme_key(), Some("K-ED"));
    assert!(read.iter().all(|p| p.is_dictionary_backed()));
    assert!(read.iter().all(|p| p.word() == "READ"));
}

#[test]
fn single_pronunciation_word_is_found_by_bare_id() {
    let store = fixture_store();
    let poetry = store.get_pronunciations("poetry").unwrap();

    assert_eq!(ids(&poetry), vec!["POETRY"]);
    assert_eq!(poetry[0].num_syllables(), 3);
}

#[test]
fn variant_only_word_without_multiples_entry_is_unknown() {
    // SEED only exists as SEED(1) and is not listed in the multiples file.
    let store = fixture_store();
    let seed = store.get_pronunciations("seed").unwrap();

    assert_eq!(seed.len(), 1);
    assert!(!seed[0].is_dictionary_backed());
}

#[test]
fn unknown_word_gets_one_heuristic_record() {
    let store = fixture_store();
    for word in ["glorpflex", "Quixotic", "mcdonald"] {
        let records = store.get_pronunciations(word).unwrap();
        assert_eq!(records.len(), 1, "word: {word}");
        let p = &records[0];
        assert_eq!(p.pronunciation_id(), None);
        assert_eq!(p.rhyme_key(), None);
        assert_eq!(p.num_syllables(), syllables::estimate(&word.to_lowercase()));
    }
}

#[test]
fn unknown_word_has_no_rhymes() {
    let store = fixture_store();
    let glorp = store.get_pronunciations("glorpflex").unwrap();
    assert!(store.get_rhymes(&glorp[0]).unwrap().is_empty());
}

#[test]
fn unknown_word_records_are_not_cached() {
    let store = fixture_store();
    let a = store.get_pronunciations("glorpflex").unwrap();
    let b = store.get_pronunciations("glorpflex").unwrap();
    assert_eq!(a, b);
    assert!(!Arc::ptr_eq(&a[0], &b[0]));
}

#[test]
fn lookup_is_case_insensitive() {
    let store = fixture_store();
    let expected = store.get_pronunciations("READ").unwrap();
    for word in ["read", "Read", "rEaD", "  read  "] {
        assert_eq!(store.get_pronunciations(word).unwrap(), expected, "word: {word:?}");
    }
}

#[test]
fn rhymes_exclude_the_query_itself() {
    let store = fixture_store();
    let seed = store.get_pronunciation_by_id("SEED(1)").unwrap().unwrap();
    let rhymes = store.get_rhymes(&seed).unwrap();

    assert_eq!(ids(&rhymes), vec!["READ(1)", "BEAD(1)"]);
}

#[test]
fn self_exclusion_holds_for_every_group() {
    let store = fixture_store();
    for id in ["READ(1)", "READ(2)", "SEED(1)", "BEAD(1)", "BED", "LONE", "POETRY"] {
        let p = store.get_pronunciation_by_id(id).unwrap().unwrap();
        let rhymes = store.get_rhymes(&p).unwrap();
        assert!(rhymes.iter().all(|r| **r != *p), "id: {id}");
    }
}

#[test]
fn singleton_group_yields_no_rhymes() {
    let store = fixture_store();
    let lone = store.get_pronunciations("lone").unwrap();
    assert!(store.get_rhymes(&lone[0]).unwrap().is_empty());
}

#[test]
fn rhyme_queries_do_not_mutate_groups() {
    let store = fixture_store();
    let read = store.get_pronunciation_by_id("READ(1)").unwrap().unwrap();
    let seed = store.get_pronunciation_by_id("SEED(1)").unwrap().unwrap();

    assert_eq!(ids(&store.get_rhymes(&read).unwrap()), vec!["SEED(1)", "BEAD(1)"]);
    assert_eq!(ids(&store.get_rhymes(&seed).unwrap()), vec!["READ(1)", "BEAD(1)"]);
    assert_eq!(ids(&store.get_rhymes(&read).unwrap()), vec!["SEED(1)", "BEAD(1)"]);
}

#[test]
fn indices_share_records() {
    let store = fixture_store();
    let by_id = store.get_pronunciation_by_id("READ(2)").unwrap().unwrap();
    let by_word = store.get_pronunciations("read").unwrap();
    let bed = store.get_pronunciations("bed").unwrap();
    let rhymes_of_bed = store.get_rhymes(&bed[0]).unwrap();

    assert!(Arc::ptr_eq(&by_id, &by_word[1]));
    assert!(Arc::ptr_eq(&by_id, &rhymes_of_bed[0]));
}

#[test]
fn unresolved_references_are_dropped() {
    let store = PronunciationStore::from_readers(
        WORDS.as_bytes(),
        "READ READ(1) READ(9) READ(2)\nGHOST GHOST(1) GHOST(2)\n".as_bytes(),
        "K-EED READ(1) MISSING SEED(1)\n".as_bytes(),
    )
    .unwrap();

    assert_eq!(ids(&store.get_pronunciations("read").unwrap()), vec!["READ(1)", "READ(2)"]);

    let ghost = store.get_pronunciations("ghost").unwrap();
    assert_eq!(ghost.len(), 1);
    assert!(!ghost[0].is_dictionary_backed());

    let read = store.get_pronunciation_by_id("READ(1)").unwrap().unwrap();
    assert_eq!(ids(&store.get_rhymes(&read).unwrap()), vec!["SEED(1)"]);
}

#[test]
fn rhyme_key_missing_from_rhyme_file_yields_empty() {
    let store = PronunciationStore::from_readers(WORDS.as_bytes(), "".as_bytes(), "".as_bytes()).unwrap();
    let bed = store.get_pronunciations("bed").unwrap();
    assert!(bed[0].is_dictionary_backed());
    assert!(store.get_rhymes(&bed[0]).unwrap().is_empty());
}

#[test]
fn loads_lazily_from_files_once() {
    let dir = tempfile::tempdir().unwrap();
    let paths = write_fixture(dir.path(), WORDS, MULTIPLES, RHYMES);
    let store = PronunciationStore::new(paths);

    assert!(!store.is_loaded());
    let first = store.get_pronunciations("read").unwrap();
    assert!(store.is_loaded());

    // Changing the files after load has no effect.
    fs::write(dir.path().join("words.txt"), "").unwrap();
    store.load().unwrap();
    store.load().unwrap();
    assert_eq!(store.get_pronunciations("read").unwrap(), first);
    assert_eq!(store.len().unwrap(), 7);
}

#[test]
fn missing_file_is_a_file_access_error() {
    let dir = tempfile::tempdir().unwrap();
    let paths = write_fixture(dir.path(), WORDS, MULTIPLES, RHYMES);
    fs::remove_file(&paths.rhymes).unwrap();
    let store = PronunciationStore::new(paths.clone());

    match store.get_pronunciations("read").unwrap_err() {
        DictionaryError::FileAccess { path, .. } => assert_eq!(path, paths.rhymes),
        other => panic!("unexpected error: {other:?}"),
    }
    assert!(!store.is_loaded());
}

#[test]
fn malformed_line_fails_load_and_leaves_store_unloaded() {
    let dir = tempfile::tempdir().unwrap();
    let paths = write_fixture(dir.path(), WORDS, MULTIPLES, "K-EED READ(1)\nK-ED\n");
    let store = PronunciationStore::new(paths.clone());

    match store.load().unwrap_err() {
        DictionaryError::Format { file, line, .. } => {
            assert_eq!(file, paths.rhymes.display().to_string());
            assert_eq!(line, 2);
        }
        other => panic!("unexpected error: {other:?}"),
    }
    assert!(!store.is_loaded());

    // Fixing the file lets the next call succeed.
    fs::write(&paths.rhymes, RHYMES).unwrap();
    store.load().unwrap();
    assert!(store.is_loaded());
}

#[test]
fn bundled_dictionary_loads() {
    let store = PronunciationStore::default();
    let read = store.get_pronunciations("read").unwrap();
    assert_eq!(ids(&read), vec!["READ(1)", "READ(2)"]);

    let beer = store.get_pronunciations("beer").unwrap();
    let rhymes = store.get_rhymes(&beer[0]).unwrap();
    let words: Vec<&str> = rhymes.iter().map(|p| p.word()).collect();
    assert_eq!(words, vec!["ADHERE", "APPEAR", "HERE", "NEAR"]);
}

#[test]
fn repeated_ids_on_one_line_are_kept_once() {
    let store = PronunciationStore::from_readers(
        WORDS.as_bytes(),
        "READ READ(1) READ(2) READ(1)\n".as_bytes(),
        "K-EED READ(1) SEED(1) SEED(1) BEAD(1)\n".as_bytes(),
    )
    .unwrap();

    assert_eq!(ids(&store.get_pronunciations("read").unwrap()), vec!["READ(1)", "READ(2)"]);

    let read = store.get_pronunciation_by_id("READ(1)").unwrap().unwrap();
    assert_eq!(ids(&store.get_rhymes(&read).unwrap()), vec!["SEED(1)", "BEAD(1)"]);
}

#[test]
fn store_is_send_and_sync() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<PronunciationStore>();
    assert_send_sync::<Pronunciation>();
}

#[test]
fn concurrent_first_callers_share_one_load() {
    let dir = tempfile::tempdir().unwrap();
    let paths = write_fixture(dir.path(), WORDS, MULTIPLES, RHYMES);
    let store = PronunciationStore::new(paths);
    assert!(!store.is_loaded());

    let results: Vec<Vec<Arc<Pronunciation>>> = std::thread::scope(|scope| {
        let handles: Vec<_> = (0..16).map(|_| scope.spawn(|| store.get_pronunciations("read").unwrap())).collect();
        handles.into_iter().map(|handle| handle.join().unwrap()).collect()
    });

    assert!(store.is_loaded());
    let first = &results[0];
    assert_eq!(ids(first), vec!["READ(1)", "READ(2)"]);
    for records in &results {
        assert_eq!(records.len(), first.len());
        assert!(records.iter().zip(first).all(|(a, b)| Arc::ptr_eq(a, b)));
    }
}

#[test]
fn default_store_serves_free_functions() {
    if DictionaryPaths::from_env() != DictionaryPaths::default() {
        // RHYMEKIT_* overrides point the default store elsewhere.
        return;
    }

    let read = get_pronunciations("Read").unwrap();
    assert_eq!(ids(&read), vec!["READ(1)", "READ(2)"]);
    assert!(default_store().is_loaded());

    let rhymes = get_rhymes(&read[1]).unwrap();
    let words: Vec<&str> = rhymes.iter().map(|p| p.word()).collect();
    assert_eq!(words, vec!["BED", "INSTEAD", "RED", "SAID"]);

    let again = default_store().get_pronunciations("read").unwrap();
    assert!(Arc::ptr_eq(&read[0], &again[0]));

    let glorp = get_pronunciations("glorpflex").unwrap();
    assert!(get_rhymes(&glorp[0]).unwrap().is_empty());
}
