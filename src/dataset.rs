// SPDX-License-Identifier: PMPL-1.0-or-later

//! Record store: loading and validating the QA dataset.
//!
//! The dataset is an ordered JSON array of records (see
//! [`crate::types::QaRecord`] for the wire format). A copy ships inside
//! the binary so the app is self-contained; `--data PATH` substitutes a
//! user file with the same format at startup. Records are loaded once
//! and never mutated afterwards.

use crate::types::QaRecord;
use anyhow::{anyhow, Context, Result};
use std::fs;
use std::path::Path;

/// The dataset bundled into the binary at compile time.
pub const BUILTIN_DATASET: &str = include_str!("../data/qa_data.json");

/// Load the record store: the file at `path` if given, the bundled
/// dataset otherwise.
pub fn load(path: Option<&Path>) -> Result<Vec<QaRecord>> {
    match path {
        Some(path) => load_from_path(path),
        None => load_builtin(),
    }
}

/// Parse and validate the bundled dataset.
pub fn load_builtin() -> Result<Vec<QaRecord>> {
    let records: Vec<QaRecord> =
        serde_json::from_str(BUILTIN_DATASET).context("bundled dataset is malformed")?;
    validate(&records)?;
    Ok(records)
}

/// Parse and validate a user-supplied dataset file.
pub fn load_from_path(path: &Path) -> Result<Vec<QaRecord>> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("failed to read dataset: {}", path.display()))?;
    let records: Vec<QaRecord> = serde_json::from_str(&content)
        .with_context(|| format!("failed to parse dataset: {}", path.display()))?;
    validate(&records)?;
    Ok(records)
}

/// Load-time invariants: ids unique, English question text present.
///
/// Other localized fields may legitimately be empty — an empty string
/// simply never matches a non-empty query.
fn validate(records: &[QaRecord]) -> Result<()> {
    let mut seen = std::collections::HashSet::new();
    for record in records {
        if !seen.insert(record.id) {
            return Err(anyhow!("duplicate record id {}", record.id));
        }
        if record.english_question.trim().is_empty() {
            return Err(anyhow!("record {} has an empty English question", record.id));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_dataset_loads() {
        let records = load_builtin().expect("bundled dataset should parse");
        assert!(!records.is_empty());
    }

    #[test]
    fn duplicate_ids_rejected() {
        let json = r#"[
            {"id":1,"englishQuestion":"a","arabicQuestion":"b","amharicQuestion":"c",
             "englishAnswer":"d","arabicAnswer":"e","amharicAnswer":"f"},
            {"id":1,"englishQuestion":"g","arabicQuestion":"h","amharicQuestion":"i",
             "englishAnswer":"j","arabicAnswer":"k","amharicAnswer":"l"}
        ]"#;
        let records: Vec<QaRecord> = serde_json::from_str(json).expect("parse");
        let err = validate(&records).expect_err("duplicate id should fail");
        assert!(err.to_string().contains("duplicate record id 1"));
    }

    #[test]
    fn empty_english_question_rejected() {
        let json = r#"[
            {"id":3,"englishQuestion":"  ","arabicQuestion":"b","amharicQuestion":"c",
             "englishAnswer":"d","arabicAnswer":"e","amharicAnswer":"f"}
        ]"#;
        let records: Vec<QaRecord> = serde_json::from_str(json).expect("parse");
        assert!(validate(&records).is_err());
    }

    #[test]
    fn pronunciation_fields_default_to_empty() {
        let json = r#"[
            {"id":4,"englishQuestion":"a","arabicQuestion":"b","amharicQuestion":"c",
             "englishAnswer":"d","arabicAnswer":"e","amharicAnswer":"f"}
        ]"#;
        let records: Vec<QaRecord> = serde_json::from_str(json).expect("parse");
        assert_eq!(records[0].amharic_question_pronunciation, "");
        assert_eq!(records[0].amharic_answer_pronunciation, "");
    }
}
