// SPDX-License-Identifier: PMPL-1.0-or-later

//! Translation catalog for qa-hub.
//!
//! Embeds all user-facing chrome strings for the three display languages
//! as a compile-time static table. Lookup is O(n) on the key list per
//! language, which is fine for the ~25 keys we have — this runs once per
//! rendered frame or printed card, not in a hot loop.
//!
//! Note these catalogs cover the page chrome only (titles, labels,
//! placeholders, toasts). The question/answer content itself lives in the
//! dataset records, which carry their own translations per field.
//!
//! ## Adding a new language
//!
//! 1. Add a variant to [`Lang`]
//! 2. Add a `Lang::Xx => "xx"` arm to `Lang::code()`
//! 3. Add a `"xx" => Some(Lang::Xx)` arm to `Lang::from_code()`
//! 4. Create a `const XX: &[(&str, &str)]` table below
//! 5. Add `Lang::Xx => XX` to the match in `catalog_for()`
//!
//! ## Adding a new key
//!
//! 1. Add the English entry to `EN`
//! 2. Add translations to AR and AM (missing keys fall back to English)

use serde::{Deserialize, Serialize};

/// Supported display languages.
///
/// Each variant maps to an ISO 639-1 two-letter code. The enum is used by
/// the CLI `--lang` flag, the TUI language cycler, and the GUI language
/// switcher. The three states form a trivial machine: each is reachable
/// from any other in a single selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Lang {
    En,
    Ar,
    Am,
}

impl Lang {
    /// ISO 639-1 two-letter code for this language.
    pub fn code(&self) -> &'static str {
        match self {
            Lang::En => "en",
            Lang::Ar => "ar",
            Lang::Am => "am",
        }
    }

    /// Parse an ISO 639-1 code into a supported language.
    ///
    /// Returns `None` for unsupported codes. Case-sensitive (codes must be
    /// lowercase per ISO 639-1).
    pub fn from_code(code: &str) -> Option<Lang> {
        match code {
            "en" => Some(Lang::En),
            "ar" => Some(Lang::Ar),
            "am" => Some(Lang::Am),
            _ => None,
        }
    }

    /// All supported languages, in display order. The first entry is the
    /// initial state of every page controller.
    pub fn all() -> &'static [Lang] {
        &[Lang::En, Lang::Ar, Lang::Am]
    }

    /// The language name written in its own script, as shown on the
    /// language switcher.
    pub fn native_name(&self) -> &'static str {
        match self {
            Lang::En => "English",
            Lang::Ar => "العربية",
            Lang::Am => "አማርኛ",
        }
    }

    /// Whether this language is written right-to-left.
    pub fn is_rtl(&self) -> bool {
        matches!(self, Lang::Ar)
    }
}

impl Default for Lang {
    fn default() -> Self {
        Lang::En
    }
}

impl std::fmt::Display for Lang {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

// ─── Translation Lookup ─────────────────────────────────────────────

/// Look up a translation key in the specified language.
///
/// Falls back to English if the key is not found in the requested language.
/// Returns `""` for keys missing in English too (programming error, not a
/// runtime condition for valid lookups) — never panics.
///
/// # Examples
///
/// ```
/// use qa_hub::i18n::{t, Lang};
/// assert_eq!(t(Lang::En, "card.question"), "Question");
/// assert_eq!(t(Lang::Ar, "card.question"), "السؤال");
/// assert_eq!(t(Lang::Am, "card.question"), "ጥያቄ");
/// ```
pub fn t(lang: Lang, key: &str) -> &'static str {
    if let Some(value) = lookup(catalog_for(lang), key) {
        return value;
    }
    if lang != Lang::En {
        if let Some(value) = lookup(EN, key) {
            return value;
        }
    }
    ""
}

/// Non-static variant: returns the translation or the key itself if missing.
/// Useful when you need something displayable no matter what.
pub fn t_or_key<'a>(lang: Lang, key: &'a str) -> &'a str {
    let result = t(lang, key);
    if result.is_empty() {
        key
    } else {
        result
    }
}

fn lookup(catalog: &'static [(&'static str, &'static str)], key: &str) -> Option<&'static str> {
    for &(k, v) in catalog {
        if k == key {
            return Some(v);
        }
    }
    None
}

fn catalog_for(lang: Lang) -> &'static [(&'static str, &'static str)] {
    match lang {
        Lang::En => EN,
        Lang::Ar => AR,
        Lang::Am => AM,
    }
}

// ─── English (source language — all keys defined here) ──────────────

const EN: &[(&str, &str)] = &[
    // Header
    ("app.title", "QA Hub"),
    ("search.label", "Search"),
    ("search.placeholder", "Search questions..."),
    // Hero
    ("hero.title", "Learn Languages with Ease"),
    (
        "hero.tagline",
        "Explore questions and answers in English, Arabic, and Amharic. Perfect for language learners of all levels.",
    ),
    // Results
    ("results.count_one", "Showing 1 question"),
    ("results.count", "Showing {n} questions"),
    ("results.none", "No questions found. Try a different search."),
    // Card labels
    ("card.question", "Question"),
    ("card.answer", "Answer"),
    ("card.pronunciation", "Pronunciation"),
    // Copy toasts
    ("toast.question_copied", "Question copied!"),
    ("toast.answer_copied", "Answer copied!"),
    // Language listing
    ("langs.title", "Supported languages"),
    ("langs.current", "active"),
    // Footer
    ("footer.about.title", "About"),
    (
        "footer.about.body",
        "A multilingual Q&A platform to help you learn English, Arabic, and Amharic with ease.",
    ),
    ("footer.rights", "QA Hub. All rights reserved."),
];

// ─── Arabic ─────────────────────────────────────────────────────────

const AR: &[(&str, &str)] = &[
    ("app.title", "منصة الأسئلة"),
    ("search.label", "بحث"),
    ("search.placeholder", "ابحث عن أسئلة..."),
    ("hero.title", "تعلم اللغات بسهولة"),
    (
        "hero.tagline",
        "استكشف الأسئلة والأجوبة باللغة الإنجليزية والعربية والأمهرية. مثالي لمتعلمي اللغات من جميع المستويات.",
    ),
    ("results.count_one", "عرض سؤال واحد"),
    ("results.count", "عرض {n} سؤال"),
    ("results.none", "لم يتم العثور على أسئلة. حاول بحثاً مختلفاً."),
    ("card.question", "السؤال"),
    ("card.answer", "الإجابة"),
    ("card.pronunciation", "النطق"),
    ("toast.question_copied", "تم نسخ السؤال!"),
    ("toast.answer_copied", "تم نسخ الإجابة!"),
    ("langs.title", "اللغات المدعومة"),
    ("langs.current", "نشطة"),
    ("footer.about.title", "عن الموقع"),
    (
        "footer.about.body",
        "منصة أسئلة وأجوبة متعددة اللغات لمساعدتك على تعلم الإنجليزية والعربية والأمهرية بسهولة.",
    ),
    ("footer.rights", "منصة الأسئلة. جميع الحقوق محفوظة."),
];

// ─── Amharic ────────────────────────────────────────────────────────

const AM: &[(&str, &str)] = &[
    ("app.title", "ጥያቄ ማእከል"),
    ("search.label", "ፍለጋ"),
    ("search.placeholder", "ጥያቄዎችን ይፈልጉ..."),
    ("hero.title", "ቋንቋዎችን በቀላሉ ይማሩ"),
    (
        "hero.tagline",
        "በእንግሊዝኛ፣ በአረብኛ እና በአማርኛ ጥያቄዎችን እና መልሶችን ይዳሳሱ። ለሁሉም ደረጃ ተማሪዎች ተስማሚ።",
    ),
    ("results.count_one", "1 ጥያቄ ያሳያል"),
    ("results.count", "{n} ጥያቄ ያሳያል"),
    ("results.none", "ጥያቄ አልተገኘም። የተለየ ፍለጋ ይሞክሩ።"),
    ("card.question", "ጥያቄ"),
    ("card.answer", "መልስ"),
    ("card.pronunciation", "አጠራር"),
    ("toast.question_copied", "ጥያቄ ተቀድቷል!"),
    ("toast.answer_copied", "መልስ ተቀድቷል!"),
    ("langs.title", "የሚደገፉ ቋንቋዎች"),
    ("langs.current", "ንቁ"),
    ("footer.about.title", "ስለ ድረ-ገጽ"),
    (
        "footer.about.body",
        "ብዙ ቋንቋዊ የጥያቄ እና መልስ መድረክ፣ እንግሊዝኛ፣ አረብኛ እና አማርኛ በቀላሉ ለመማር።",
    ),
    ("footer.rights", "ጥያቄ ማእከል። ሁሉም መብቶች የተጠበቁ ናቸው።"),
];

/// Localized "Showing N question(s)" line. English pluralizes; Arabic and
/// Amharic use the same form for every count, matching the original copy.
pub fn results_line(lang: Lang, count: usize) -> String {
    if count == 1 {
        t(lang, "results.count_one").to_string()
    } else {
        t(lang, "results.count").replace("{n}", &count.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn english_keys_all_resolve() {
        for &(key, _) in EN {
            let result = t(Lang::En, key);
            assert!(!result.is_empty(), "EN key '{}' should resolve", key);
        }
    }

    #[test]
    fn card_labels_localized_per_language() {
        // The pronunciation label in particular must follow the active
        // language rather than always rendering the Arabic form.
        assert_eq!(t(Lang::En, "card.pronunciation"), "Pronunciation");
        assert_eq!(t(Lang::Ar, "card.pronunciation"), "النطق");
        assert_eq!(t(Lang::Am, "card.pronunciation"), "አጠራር");
    }

    #[test]
    fn fallback_to_english() {
        let en_val = t(Lang::En, "app.title");
        for lang in Lang::all() {
            let val = t(*lang, "app.title");
            assert!(!val.is_empty(), "{:?} should have app.title", lang);
            if *lang == Lang::En {
                assert_eq!(val, en_val);
            }
        }
    }

    #[test]
    fn unknown_key_returns_empty() {
        assert_eq!(t(Lang::En, "nonexistent.key"), "");
    }

    #[test]
    fn t_or_key_returns_key_for_missing() {
        assert_eq!(t_or_key(Lang::En, "nonexistent.key"), "nonexistent.key");
    }

    #[test]
    fn lang_roundtrip() {
        for lang in Lang::all() {
            let code = lang.code();
            let parsed = Lang::from_code(code).expect("should parse");
            assert_eq!(*lang, parsed);
        }
    }

    #[test]
    fn unsupported_codes_rejected() {
        assert_eq!(Lang::from_code("fr"), None);
        assert_eq!(Lang::from_code("EN"), None);
        assert_eq!(Lang::from_code(""), None);
    }

    #[test]
    fn all_catalogs_same_key_count_as_english() {
        let en_count = EN.len();
        assert_eq!(AR.len(), en_count, "AR catalog key count mismatch");
        assert_eq!(AM.len(), en_count, "AM catalog key count mismatch");
    }

    #[test]
    fn results_line_pluralizes_english_only() {
        assert_eq!(results_line(Lang::En, 1), "Showing 1 question");
        assert_eq!(results_line(Lang::En, 4), "Showing 4 questions");
        assert_eq!(results_line(Lang::Ar, 4), "عرض 4 سؤال");
        assert_eq!(results_line(Lang::Am, 2), "2 ጥያቄ ያሳያል");
    }

    #[test]
    fn only_arabic_is_rtl() {
        assert!(Lang::Ar.is_rtl());
        assert!(!Lang::En.is_rtl());
        assert!(!Lang::Am.is_rtl());
    }
}
