// SPDX-License-Identifier: PMPL-1.0-or-later

//! Persistent storage helpers for exported card sets

use crate::i18n::Lang;
use crate::types::QaRecord;
use crate::view::ExportFormat;
use anyhow::Result;
use chrono::Utc;
use std::fs;
use std::path::{Path, PathBuf};

/// Write one file per requested format into `directory` (default
/// `exports/`), with a shared timestamp in each filename. Returns the
/// paths written.
pub fn persist_exports(
    records: &[&QaRecord],
    lang: Lang,
    directory: Option<&Path>,
    formats: &[ExportFormat],
) -> Result<Vec<PathBuf>> {
    let mut stored = Vec::new();
    let timestamp = Utc::now().format("%Y%m%d%H%M%S").to_string();

    let base_dir = directory
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from("exports"));
    fs::create_dir_all(&base_dir)?;
    for format in formats {
        let file_name = format!("qa-hub-{}.{}", timestamp, format.extension());
        let path = base_dir.join(&file_name);
        let content = format.serialize(records, lang)?;
        fs::write(&path, content)?;
        stored.push(path);
    }

    Ok(stored)
}
