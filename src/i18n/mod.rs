// SPDX-License-Identifier: PMPL-1.0-or-later

//! Internationalisation module for qa-hub.
//!
//! Provides a data-driven translation system with ISO 639-1 language code
//! validation. The catalogs cover the page chrome (titles, labels, search
//! placeholder, toasts, footer); question/answer content carries its own
//! translations inside each dataset record.
//!
//! ## Supported languages
//!
//! | Code | Language | Native name |
//! |------|----------|-------------|
//! | en   | English  | English     |
//! | ar   | Arabic   | العربية     |
//! | am   | Amharic  | አማርኛ        |
//!
//! ## Design
//!
//! Translation keys use dotted namespaces: `"card.question"`,
//! `"results.none"`, `"toast.answer_copied"`. Lookups fall back to English
//! when a key is missing in the requested language; a key missing in
//! English too yields the key itself via [`t_or_key`] (fail-open, never
//! panics).
//!
//! The catalog is embedded at compile time as static data — no file I/O,
//! no async, no allocator pressure during translation lookups.

mod catalog;
mod iso639;

pub use catalog::{results_line, t, t_or_key, Lang};
pub use iso639::{is_valid_iso639_1, language_name, native_name};
