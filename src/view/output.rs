// SPDX-License-Identifier: PMPL-1.0-or-later

//! Serialization helpers for exported card sets

use crate::i18n::{results_line, t, Lang};
use crate::types::QaRecord;
use crate::view::card::CardView;
use anyhow::Result;
use clap::ValueEnum;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    Json,
    Yaml,
    Markdown,
}

impl ExportFormat {
    pub fn parse(value: &str) -> Option<Self> {
        match value.to_ascii_lowercase().as_str() {
            "json" => Some(ExportFormat::Json),
            "yaml" | "yml" => Some(ExportFormat::Yaml),
            "markdown" | "md" => Some(ExportFormat::Markdown),
            _ => None,
        }
    }

    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Json => "json",
            ExportFormat::Yaml => "yaml",
            ExportFormat::Markdown => "md",
        }
    }

    /// Serialize a result set. JSON and YAML emit the full records with
    /// every translation; Markdown is a readable study-sheet projection
    /// under the given display language.
    pub fn serialize(&self, records: &[&QaRecord], lang: Lang) -> Result<String> {
        match self {
            ExportFormat::Json => Ok(serde_json::to_string_pretty(records)?),
            ExportFormat::Yaml => Ok(serde_yaml::to_string(records)?),
            ExportFormat::Markdown => Ok(format_cards_as_markdown(records, lang)),
        }
    }
}

fn format_cards_as_markdown(records: &[&QaRecord], lang: Lang) -> String {
    let mut lines = Vec::new();
    lines.push(format!("# {}", t(lang, "app.title")));
    lines.push(String::new());
    lines.push(results_line(lang, records.len()));
    lines.push(String::new());

    for record in records {
        let card = CardView::new(record, lang);
        lines.push(format!("## {}", card.headline()));
        lines.push(String::new());
        if let Some(p) = card.pronunciation() {
            if !p.question.is_empty() {
                lines.push(format!("*{}: {}*", card.pronunciation_label(), p.question));
                lines.push(String::new());
            }
        }
        lines.push(format!("**{}:** {}", card.answer_label(), card.answer()));
        if let Some(p) = card.pronunciation() {
            if !p.answer.is_empty() {
                lines.push(String::new());
                lines.push(format!("*{}: {}*", card.pronunciation_label(), p.answer));
            }
        }
        lines.push(String::new());
    }

    lines.join("\n")
}
