// SPDX-License-Identifier: PMPL-1.0-or-later

//! Localized card projection.
//!
//! A [`CardView`] pairs one record with the active display language and
//! answers every question a frontend has about it: localized question,
//! answer, pronunciation guides, and chrome labels. The expand/collapse
//! flag itself is owned by each frontend, one per rendered card — the
//! TUI keys flags by record id, the GUI leans on egui's per-widget
//! collapsing state. No two cards ever share a flag.

use crate::i18n::{t, Lang};
use crate::types::{Pronunciation, QaRecord};

#[derive(Debug, Clone, Copy)]
pub struct CardView<'a> {
    record: &'a QaRecord,
    lang: Lang,
}

impl<'a> CardView<'a> {
    pub fn new(record: &'a QaRecord, lang: Lang) -> Self {
        Self { record, lang }
    }

    pub fn id(&self) -> u32 {
        self.record.id
    }

    pub fn question(&self) -> &'a str {
        self.record.question(self.lang)
    }

    pub fn answer(&self) -> &'a str {
        self.record.answer(self.lang)
    }

    /// Pronunciation guides; `None` unless the active language is Amharic.
    pub fn pronunciation(&self) -> Option<Pronunciation<'a>> {
        self.record.pronunciation(self.lang)
    }

    // Chrome labels follow the active language, including the
    // pronunciation label.

    pub fn question_label(&self) -> &'static str {
        t(self.lang, "card.question")
    }

    pub fn answer_label(&self) -> &'static str {
        t(self.lang, "card.answer")
    }

    pub fn pronunciation_label(&self) -> &'static str {
        t(self.lang, "card.pronunciation")
    }

    /// One-line form used for collapsed cards: `#id question`.
    pub fn headline(&self) -> String {
        format!("#{} {}", self.record.id, self.question())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record() -> QaRecord {
        QaRecord {
            id: 9,
            english_question: "Where does coffee originally come from?".into(),
            arabic_question: "من أين أصل القهوة؟".into(),
            amharic_question: "ቡና መጀመሪያ ከየት መጣ?".into(),
            english_answer: "From Ethiopia.".into(),
            arabic_answer: "من إثيوبيا.".into(),
            amharic_answer: "ከኢትዮጵያ ነው።".into(),
            amharic_question_pronunciation: "بُونا مَجَمَريا كَيَت مَطا؟".into(),
            amharic_answer_pronunciation: "كَإيتيوبيا ناو".into(),
        }
    }

    #[test]
    fn headline_carries_id_and_localized_question() {
        let r = record();
        let card = CardView::new(&r, Lang::Ar);
        assert_eq!(card.headline(), "#9 من أين أصل القهوة؟");
    }

    #[test]
    fn labels_follow_active_language() {
        let r = record();
        assert_eq!(CardView::new(&r, Lang::En).answer_label(), "Answer");
        assert_eq!(CardView::new(&r, Lang::Am).answer_label(), "መልስ");
        // The pronunciation label must track the active language even
        // though the guides themselves are Arabic-script.
        assert_eq!(
            CardView::new(&r, Lang::Am).pronunciation_label(),
            "አጠራር"
        );
    }

    #[test]
    fn pronunciation_shown_only_under_amharic() {
        let r = record();
        assert!(CardView::new(&r, Lang::En).pronunciation().is_none());
        assert!(CardView::new(&r, Lang::Am).pronunciation().is_some());
    }
}
