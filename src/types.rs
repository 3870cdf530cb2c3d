// SPDX-License-Identifier: PMPL-1.0-or-later

//! Core type definitions for qa-hub
//!
//! The record model mirrors the bundled JSON dataset: one entry per
//! question/answer pair, translated into English, Arabic and Amharic,
//! with Arabic-script pronunciation guides for the Amharic text.

use crate::i18n::Lang;
use serde::{Deserialize, Serialize};

/// One question/answer pair with all three translations.
///
/// Records are immutable: loaded once at startup, never mutated or
/// deleted during a session. Field names serialize as camelCase to stay
/// wire-compatible with the original `qa_data.json` format.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QaRecord {
    /// Unique, stable identifier.
    pub id: u32,
    pub english_question: String,
    pub arabic_question: String,
    pub amharic_question: String,
    pub english_answer: String,
    pub arabic_answer: String,
    pub amharic_answer: String,
    /// Arabic-script phonetic guide for the Amharic question. May be empty.
    #[serde(default)]
    pub amharic_question_pronunciation: String,
    /// Arabic-script phonetic guide for the Amharic answer. May be empty.
    #[serde(default)]
    pub amharic_answer_pronunciation: String,
}

/// Pronunciation guides for one card, borrowed from its record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pronunciation<'a> {
    pub question: &'a str,
    pub answer: &'a str,
}

impl QaRecord {
    /// Question text for the given display language.
    pub fn question(&self, lang: Lang) -> &str {
        match lang {
            Lang::En => &self.english_question,
            Lang::Ar => &self.arabic_question,
            Lang::Am => &self.amharic_question,
        }
    }

    /// Answer text for the given display language.
    pub fn answer(&self, lang: Lang) -> &str {
        match lang {
            Lang::En => &self.english_answer,
            Lang::Ar => &self.arabic_answer,
            Lang::Am => &self.amharic_answer,
        }
    }

    /// Pronunciation guides, present only when displaying Amharic and the
    /// record carries at least one non-empty guide.
    pub fn pronunciation(&self, lang: Lang) -> Option<Pronunciation<'_>> {
        if lang != Lang::Am {
            return None;
        }
        if self.amharic_question_pronunciation.is_empty()
            && self.amharic_answer_pronunciation.is_empty()
        {
            return None;
        }
        Some(Pronunciation {
            question: &self.amharic_question_pronunciation,
            answer: &self.amharic_answer_pronunciation,
        })
    }
}

/// Session display state owned by the page controller (TUI or GUI).
///
/// Invariants: `lang` is always one of the three supported codes by
/// construction; `query` is never absent — the empty string means
/// "no filter". The filtered view is recomputed from this state on
/// every change, never cached.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayState {
    pub lang: Lang,
    pub query: String,
}

impl DisplayState {
    pub fn new(lang: Lang, query: impl Into<String>) -> Self {
        Self {
            lang,
            query: query.into(),
        }
    }

    /// Switch to the next supported language in display order.
    /// Leaves the query untouched; callers re-run the filter.
    pub fn cycle_lang(&mut self) {
        let order = Lang::all();
        let idx = order.iter().position(|l| *l == self.lang).unwrap_or(0);
        self.lang = order[(idx + 1) % order.len()];
    }
}

impl Default for DisplayState {
    fn default() -> Self {
        Self {
            lang: Lang::default(),
            query: String::new(),
        }
    }
}
