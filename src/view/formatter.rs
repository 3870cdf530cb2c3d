// SPDX-License-Identifier: PMPL-1.0-or-later

//! Console card rendering for the one-shot commands

use crate::i18n::{results_line, t, Lang};
use crate::types::QaRecord;
use crate::view::card::CardView;
use anyhow::Result;
use colored::*;
use std::fs;
use std::path::Path;

pub struct CardFormatter {
    lang: Lang,
}

impl CardFormatter {
    pub fn new(lang: Lang) -> Self {
        Self { lang }
    }

    /// Print a result set: localized header, count line, then each card
    /// fully expanded. Renders the localized "no results" message when
    /// the set is empty.
    pub fn print_results(&self, records: &[&QaRecord]) {
        println!("\n{}", t(self.lang, "app.title").bold().cyan());
        println!("{}", results_line(self.lang, records.len()).dimmed());
        println!();

        if records.is_empty() {
            println!("{}", t(self.lang, "results.none").yellow());
            return;
        }

        for record in records {
            self.print_card(record);
            println!();
        }
    }

    /// Print a single card with every localized section.
    pub fn print_card(&self, record: &QaRecord) {
        let card = CardView::new(record, self.lang);

        println!(
            "{} {}",
            format!("#{}", card.id()).dimmed(),
            card.question_label().bold().cyan()
        );
        println!("  {}", card.question().bold());
        if let Some(p) = card.pronunciation() {
            if !p.question.is_empty() {
                println!(
                    "  {} {}",
                    card.pronunciation_label().dimmed(),
                    p.question.italic().dimmed()
                );
            }
        }

        println!("  {}", card.answer_label().bold().cyan());
        println!("  {}", card.answer());
        if let Some(p) = card.pronunciation() {
            if !p.answer.is_empty() {
                println!(
                    "  {} {}",
                    card.pronunciation_label().dimmed(),
                    p.answer.italic().dimmed()
                );
            }
        }
    }

    /// Save a result set as pretty JSON.
    pub fn save<P: AsRef<Path>>(&self, records: &[&QaRecord], path: P) -> Result<()> {
        let json = serde_json::to_string_pretty(records)?;
        fs::write(path.as_ref(), json)?;
        println!("Results saved to: {}", path.as_ref().display());
        Ok(())
    }
}
