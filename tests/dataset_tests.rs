// SPDX-License-Identifier: PMPL-1.0-or-later

//! Record store invariants and dataset file loading.

use qa_hub::dataset;
use std::io::Write;

#[test]
fn bundled_deck_loads_and_is_nonempty() {
    let deck = dataset::load_builtin().expect("bundled dataset should load");
    assert!(
        deck.len() >= 10,
        "bundled deck should carry a usable number of cards, got {}",
        deck.len()
    );
}

#[test]
fn bundled_deck_ids_are_unique_and_stable() {
    let deck = dataset::load_builtin().expect("load");
    let mut ids: Vec<u32> = deck.iter().map(|r| r.id).collect();
    let original = ids.clone();
    ids.sort_unstable();
    ids.dedup();
    assert_eq!(ids.len(), original.len(), "ids must be unique");
}

#[test]
fn bundled_deck_has_full_translations() {
    let deck = dataset::load_builtin().expect("load");
    for record in &deck {
        assert!(
            !record.english_question.trim().is_empty(),
            "record {}: English question missing",
            record.id
        );
        assert!(
            !record.arabic_question.trim().is_empty(),
            "record {}: Arabic question missing",
            record.id
        );
        assert!(
            !record.amharic_question.trim().is_empty(),
            "record {}: Amharic question missing",
            record.id
        );
        assert!(
            !record.amharic_question_pronunciation.trim().is_empty(),
            "record {}: question pronunciation guide missing",
            record.id
        );
        assert!(
            !record.amharic_answer_pronunciation.trim().is_empty(),
            "record {}: answer pronunciation guide missing",
            record.id
        );
    }
}

#[test]
fn load_without_path_uses_bundled_deck() {
    let bundled = dataset::load_builtin().expect("load builtin");
    let loaded = dataset::load(None).expect("load default");
    assert_eq!(loaded, bundled);
}

#[test]
fn load_from_user_file() {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    write!(
        file,
        r#"[{{"id":1,"englishQuestion":"Q","arabicQuestion":"س","amharicQuestion":"ጥ",
             "englishAnswer":"A","arabicAnswer":"ج","amharicAnswer":"መ"}}]"#
    )
    .expect("write");

    let deck = dataset::load(Some(file.path())).expect("load user file");
    assert_eq!(deck.len(), 1);
    assert_eq!(deck[0].id, 1);
    assert_eq!(deck[0].amharic_question_pronunciation, "");
}

#[test]
fn malformed_user_file_is_an_error() {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    write!(file, "not json at all").expect("write");

    let err = dataset::load(Some(file.path())).expect_err("should fail to parse");
    assert!(err.to_string().contains("failed to parse dataset"));
}

#[test]
fn duplicate_ids_in_user_file_are_an_error() {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    write!(
        file,
        r#"[{{"id":5,"englishQuestion":"Q","arabicQuestion":"س","amharicQuestion":"ጥ",
             "englishAnswer":"A","arabicAnswer":"ج","amharicAnswer":"መ"}},
            {{"id":5,"englishQuestion":"Q2","arabicQuestion":"س","amharicQuestion":"ጥ",
             "englishAnswer":"A2","arabicAnswer":"ج","amharicAnswer":"መ"}}]"#
    )
    .expect("write");

    let err = dataset::load(Some(file.path())).expect_err("duplicate ids should fail");
    assert!(err.to_string().contains("duplicate record id 5"));
}

#[test]
fn missing_user_file_is_an_error() {
    let err = dataset::load(Some(std::path::Path::new("/nonexistent/deck.json")))
        .expect_err("missing file should fail");
    assert!(err.to_string().contains("failed to read dataset"));
}
