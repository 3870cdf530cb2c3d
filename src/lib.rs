// SPDX-License-Identifier: PMPL-1.0-or-later

//! QA Hub — Multilingual Question & Answer Browser.
//!
//! A thin, synchronous browsing layer over a fixed deck of QA records,
//! each translated into English, Arabic and Amharic, with Arabic-script
//! pronunciation guides for the Amharic text.
//!
//! CORE PIECES:
//! 1. **Dataset**: the bundled (or user-supplied) record store, loaded
//!    once and validated at startup.
//! 2. **Filter**: a pure, order-preserving, case-insensitive substring
//!    filter over the localized question/answer fields.
//! 3. **I18n**: embedded translation catalogs for the page chrome in all
//!    three display languages.
//! 4. **View**: card projection plus the console, terminal-UI, desktop
//!    and export frontends.

pub mod dataset;
pub mod filter;
pub mod i18n;
pub mod storage;
pub mod types;
pub mod view;
