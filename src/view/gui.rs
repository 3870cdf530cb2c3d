// SPDX-License-Identifier: PMPL-1.0-or-later

//! Minimal desktop window for browsing the card deck.

use crate::filter::filter;
use crate::i18n::{results_line, t, Lang};
use crate::types::{DisplayState, QaRecord};
use crate::view::card::CardView;
use anyhow::{anyhow, Result};
use eframe::{egui, App, Frame, NativeOptions};

pub struct BrowserGui {
    records: Vec<QaRecord>,
    state: DisplayState,
    toast: Option<String>,
}

impl BrowserGui {
    pub fn run(records: Vec<QaRecord>, state: DisplayState) -> Result<()> {
        let options = NativeOptions::default();
        let title = t(state.lang, "app.title");
        let app = Self {
            records,
            state,
            toast: None,
        };
        // TODO: bundle an Ethiopic/Arabic-capable font; egui's default
        // font has no coverage for those scripts.
        eframe::run_native(title, options, Box::new(|_cc| Box::new(app)))
            .map_err(|err| anyhow!("failed to launch browser window: {err}"))?;
        Ok(())
    }
}

impl App for BrowserGui {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut Frame) {
        let lang = self.state.lang;
        let mut pending_toast: Option<&'static str> = None;

        egui::TopBottomPanel::top("header").show(ctx, |ui| {
            ui.heading(t(lang, "app.title"));
            ui.horizontal(|ui| {
                for candidate in Lang::all() {
                    ui.selectable_value(&mut self.state.lang, *candidate, candidate.native_name());
                }
                ui.separator();
                ui.label(t(lang, "search.label"));
                ui.add(
                    egui::TextEdit::singleline(&mut self.state.query)
                        .hint_text(t(lang, "search.placeholder")),
                );
            });
        });

        egui::TopBottomPanel::bottom("footer").show(ctx, |ui| {
            if let Some(toast) = &self.toast {
                ui.label(egui::RichText::new(toast).strong());
            }
            ui.label(t(lang, "footer.about.body"));
            ui.small(t(lang, "footer.rights"));
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.label(egui::RichText::new(t(lang, "hero.title")).strong());
            ui.label(t(lang, "hero.tagline"));
            ui.separator();

            let visible = filter(&self.records, &self.state.query, lang);
            ui.label(results_line(lang, visible.len()));

            if visible.is_empty() {
                ui.label(t(lang, "results.none"));
                return;
            }

            let body_layout = if lang.is_rtl() {
                egui::Layout::top_down(egui::Align::RIGHT)
            } else {
                egui::Layout::top_down(egui::Align::LEFT)
            };

            egui::ScrollArea::vertical().show(ui, |ui| {
                for record in visible {
                    let card = CardView::new(record, lang);
                    // egui keeps the open/closed state per header id, so
                    // every card owns its own expand flag.
                    egui::CollapsingHeader::new(card.headline())
                        .id_source(card.id())
                        .show(ui, |ui| {
                            ui.with_layout(body_layout, |ui| {
                                if let Some(p) = card.pronunciation() {
                                    if !p.question.is_empty() {
                                        ui.label(
                                            egui::RichText::new(format!(
                                                "{}: {}",
                                                card.pronunciation_label(),
                                                p.question
                                            ))
                                            .italics()
                                            .weak(),
                                        );
                                    }
                                }
                                ui.label(format!(
                                    "{}: {}",
                                    card.answer_label(),
                                    card.answer()
                                ));
                                if let Some(p) = card.pronunciation() {
                                    if !p.answer.is_empty() {
                                        ui.label(
                                            egui::RichText::new(format!(
                                                "{}: {}",
                                                card.pronunciation_label(),
                                                p.answer
                                            ))
                                            .italics()
                                            .weak(),
                                        );
                                    }
                                }
                                ui.horizontal(|ui| {
                                    if ui
                                        .button(format!("⧉ {}", card.question_label()))
                                        .clicked()
                                    {
                                        ui.output_mut(|o| {
                                            o.copied_text = card.question().to_string()
                                        });
                                        pending_toast =
                                            Some(t(lang, "toast.question_copied"));
                                    }
                                    if ui
                                        .button(format!("⧉ {}", card.answer_label()))
                                        .clicked()
                                    {
                                        ui.output_mut(|o| {
                                            o.copied_text = card.answer().to_string()
                                        });
                                        pending_toast = Some(t(lang, "toast.answer_copied"));
                                    }
                                });
                            });
                        });
                }
            });
        });

        if let Some(toast) = pending_toast {
            self.toast = Some(toast.to_string());
        }
    }
}
