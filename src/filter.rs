// SPDX-License-Identifier: PMPL-1.0-or-later

//! Free-text filtering over QA records.
//!
//! Pure function of its inputs: no caching, no side effects, no failure
//! modes. The filtered view is recomputed by the page controllers on
//! every language or query change.

use crate::i18n::Lang;
use crate::types::QaRecord;

/// Selects the ordered subsequence of `records` whose localized question
/// or answer contains the trimmed `query`, case-insensitively.
///
/// An empty or whitespace-only query means "no filter" and returns all
/// records unchanged in original order. Result order always preserves
/// input order; there is no ranking. Empty localized fields never match
/// a non-empty query and are treated as legitimate content.
pub fn filter<'a>(records: &'a [QaRecord], query: &str, lang: Lang) -> Vec<&'a QaRecord> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return records.iter().collect();
    }

    records
        .iter()
        .filter(|record| matches(record, &needle, lang))
        .collect()
}

/// Substring test of an already-trimmed, already-lowercased needle against
/// one record's localized question and answer.
pub fn matches(record: &QaRecord, needle: &str, lang: Lang) -> bool {
    record.question(lang).to_lowercase().contains(needle)
        || record.answer(lang).to_lowercase().contains(needle)
}
