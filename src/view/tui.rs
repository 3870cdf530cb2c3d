// SPDX-License-Identifier: PMPL-1.0-or-later

//! Lightweight terminal UI for browsing the card deck

use crate::filter::filter;
use crate::i18n::{results_line, t};
use crate::types::{DisplayState, QaRecord};
use crate::view::card::CardView;
use crate::view::clipboard;
use anyhow::Result;
use colored::*;
use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEvent, KeyModifiers},
    execute,
    terminal::{self, ClearType},
};
use std::collections::HashMap;
use std::io::{stdout, Write};
use std::time::Duration;

/// Interactive card browser. Owns the display state (active language and
/// query) and one expand flag per visible card, keyed by record id.
pub struct Browser {
    records: Vec<QaRecord>,
    state: DisplayState,
    selected: usize,
    expanded: HashMap<u32, bool>,
    toast: Option<&'static str>,
}

impl Browser {
    pub fn run(records: Vec<QaRecord>, state: DisplayState) -> Result<()> {
        let mut browser = Self {
            records,
            state,
            selected: 0,
            expanded: HashMap::new(),
            toast: None,
        };
        terminal::enable_raw_mode()?;
        let result = browser.run_inner();
        let _ = execute!(stdout(), cursor::Show);
        terminal::disable_raw_mode()?;
        result
    }

    fn run_inner(&mut self) -> Result<()> {
        let mut stdout = stdout();
        execute!(
            stdout,
            terminal::Clear(ClearType::All),
            cursor::MoveTo(0, 0),
            cursor::Hide
        )?;

        loop {
            let visible = filter(&self.records, &self.state.query, self.state.lang);
            // Cards that left the result set lose their flag, so they
            // come back collapsed — expansion never leaks across
            // unrelated result sets.
            self.expanded
                .retain(|id, _| visible.iter().any(|r| r.id == *id));
            self.selected = self.selected.min(visible.len().saturating_sub(1));

            self.render(&mut stdout, &visible)?;

            if event::poll(Duration::from_millis(200))? {
                if let Event::Key(KeyEvent {
                    code, modifiers, ..
                }) = event::read()?
                {
                    self.toast = None;
                    match code {
                        KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => break,
                        KeyCode::Char('q') if modifiers.contains(KeyModifiers::CONTROL) => {
                            if let Some(record) = visible.get(self.selected) {
                                clipboard::copy(&mut stdout, record.question(self.state.lang))?;
                                self.toast = Some(t(self.state.lang, "toast.question_copied"));
                            }
                        }
                        KeyCode::Char('a') if modifiers.contains(KeyModifiers::CONTROL) => {
                            if let Some(record) = visible.get(self.selected) {
                                clipboard::copy(&mut stdout, record.answer(self.state.lang))?;
                                self.toast = Some(t(self.state.lang, "toast.answer_copied"));
                            }
                        }
                        KeyCode::Tab => {
                            self.state.cycle_lang();
                        }
                        KeyCode::Up => {
                            self.selected = self.selected.saturating_sub(1);
                        }
                        KeyCode::Down => {
                            self.selected += 1;
                        }
                        KeyCode::Enter => {
                            if let Some(record) = visible.get(self.selected) {
                                let flag = self.expanded.entry(record.id).or_insert(false);
                                *flag = !*flag;
                            }
                        }
                        KeyCode::Backspace => {
                            self.state.query.pop();
                        }
                        KeyCode::Esc => {
                            if self.state.query.is_empty() {
                                break;
                            }
                            self.state.query.clear();
                        }
                        KeyCode::Char(c) if !modifiers.contains(KeyModifiers::CONTROL) => {
                            self.state.query.push(c);
                        }
                        _ => {}
                    }
                }
            }
        }

        Ok(())
    }

    fn render(&self, stdout: &mut impl Write, visible: &[&QaRecord]) -> Result<()> {
        let lang = self.state.lang;
        execute!(
            stdout,
            terminal::Clear(ClearType::All),
            cursor::MoveTo(0, 0)
        )?;

        writeln!(
            stdout,
            "{} {}\r",
            t(lang, "app.title").bold().cyan(),
            lang.native_name().dimmed()
        )?;
        writeln!(stdout, "{}\r", t(lang, "hero.title").dimmed())?;
        writeln!(stdout)?;

        let query_display = if self.state.query.is_empty() {
            t(lang, "search.placeholder").dimmed().to_string()
        } else {
            self.state.query.clone()
        };
        writeln!(
            stdout,
            "{} {}\r",
            format!("{}:", t(lang, "search.label")).bold(),
            query_display
        )?;
        writeln!(stdout, "{}\r", results_line(lang, visible.len()).dimmed())?;
        writeln!(stdout)?;

        if visible.is_empty() {
            writeln!(stdout, "{}\r", t(lang, "results.none").yellow())?;
            writeln!(stdout)?;
        }

        for (idx, record) in visible.iter().enumerate() {
            let card = CardView::new(record, lang);
            let indicator = if idx == self.selected {
                "➤".green()
            } else {
                " ".normal()
            };
            let marker = if self.is_expanded(record.id) {
                "▼"
            } else {
                "▶"
            };
            writeln!(
                stdout,
                "{} {} {}\r",
                indicator,
                marker.dimmed(),
                card.headline().bold()
            )?;

            if self.is_expanded(record.id) {
                if let Some(p) = card.pronunciation() {
                    if !p.question.is_empty() {
                        writeln!(
                            stdout,
                            "    {} {}\r",
                            card.pronunciation_label().dimmed(),
                            p.question.italic().dimmed()
                        )?;
                    }
                }
                writeln!(
                    stdout,
                    "    {} {}\r",
                    format!("{}:", card.answer_label()).cyan(),
                    card.answer()
                )?;
                if let Some(p) = card.pronunciation() {
                    if !p.answer.is_empty() {
                        writeln!(
                            stdout,
                            "    {} {}\r",
                            card.pronunciation_label().dimmed(),
                            p.answer.italic().dimmed()
                        )?;
                    }
                }
            }
        }
        writeln!(stdout)?;

        if let Some(toast) = self.toast {
            writeln!(stdout, "{}\r", toast.green())?;
        }
        writeln!(
            stdout,
            "{}\r",
            "Controls: [Up/Down] Select, [Enter] Expand, [Tab] Language, [Ctrl+Q/Ctrl+A] Copy, [Esc] Clear/Quit"
                .dimmed()
        )?;
        stdout.flush()?;
        Ok(())
    }

    fn is_expanded(&self, id: u32) -> bool {
        self.expanded.get(&id).copied().unwrap_or(false)
    }
}
