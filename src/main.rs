// SPDX-License-Identifier: PMPL-1.0-or-later

//! qa-hub: Multilingual question-and-answer browser
//!
//! Browse, search and export a fixed deck of QA cards translated into
//! English, Arabic and Amharic, from the terminal or a desktop window.

use anyhow::{anyhow, Result};
use clap::{Parser, Subcommand};
use colored::*;
use std::path::PathBuf;

use qa_hub::dataset;
use qa_hub::filter::filter;
use qa_hub::i18n::{self, Lang};
use qa_hub::storage;
use qa_hub::types::DisplayState;
use qa_hub::view::gui::BrowserGui;
use qa_hub::view::tui::Browser;
use qa_hub::view::{CardFormatter, ExportFormat};

#[derive(Parser)]
#[command(name = "qa-hub")]
#[command(version = "1.0.0")]
#[command(about = "Multilingual English/Arabic/Amharic question-and-answer browser")]
#[command(long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Browse the card deck interactively
    Browse {
        /// Display language
        #[arg(short, long, value_enum, default_value = "en")]
        lang: LangArg,

        /// Initial search query
        #[arg(short, long)]
        query: Option<String>,

        /// Alternative dataset file (JSON, same format as the bundled deck)
        #[arg(short, long)]
        data: Option<PathBuf>,

        /// Open a desktop window instead of the terminal UI
        #[arg(long)]
        gui: bool,
    },

    /// Print the cards matching a free-text query
    Search {
        /// Query text (case-insensitive substring)
        #[arg(value_name = "QUERY")]
        query: String,

        /// Display language
        #[arg(short, long, value_enum, default_value = "en")]
        lang: LangArg,

        /// Alternative dataset file (JSON)
        #[arg(short, long)]
        data: Option<PathBuf>,

        /// Also save the matching records to a JSON file
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Print every card in the deck
    List {
        /// Display language
        #[arg(short, long, value_enum, default_value = "en")]
        lang: LangArg,

        /// Alternative dataset file (JSON)
        #[arg(short, long)]
        data: Option<PathBuf>,
    },

    /// Print a single card by id
    Show {
        /// Record id
        #[arg(value_name = "ID")]
        id: u32,

        /// Display language
        #[arg(short, long, value_enum, default_value = "en")]
        lang: LangArg,

        /// Alternative dataset file (JSON)
        #[arg(short, long)]
        data: Option<PathBuf>,
    },

    /// Export the (optionally filtered) deck to JSON/YAML/Markdown
    Export {
        /// Filter the deck before exporting
        #[arg(short, long)]
        query: Option<String>,

        /// Display language for Markdown chrome and filtering
        #[arg(short, long, value_enum, default_value = "en")]
        lang: LangArg,

        /// Alternative dataset file (JSON)
        #[arg(short, long)]
        data: Option<PathBuf>,

        /// Output file; with no path, timestamped files land in --dir
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Export formats
        #[arg(short, long, value_enum, value_delimiter = ',', default_value = "json")]
        formats: Vec<ExportFormat>,

        /// Directory for timestamped exports (default: exports/)
        #[arg(long)]
        dir: Option<PathBuf>,
    },

    /// List the supported display languages
    Langs {
        /// Display language for the listing chrome
        #[arg(short, long, value_enum, default_value = "en")]
        lang: LangArg,
    },
}

// CLI argument types
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
enum LangArg {
    En,
    Ar,
    Am,
}

impl From<LangArg> for Lang {
    fn from(arg: LangArg) -> Self {
        match arg {
            LangArg::En => Lang::En,
            LangArg::Ar => Lang::Ar,
            LangArg::Am => Lang::Am,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Browse {
            lang,
            query,
            data,
            gui,
        } => {
            let records = dataset::load(data.as_deref())?;
            let state = DisplayState::new(lang.into(), query.unwrap_or_default());
            if gui {
                BrowserGui::run(records, state)?;
            } else {
                Browser::run(records, state)?;
            }
        }

        Commands::Search {
            query,
            lang,
            data,
            output,
        } => {
            let lang: Lang = lang.into();
            let records = dataset::load(data.as_deref())?;
            let visible = filter(&records, &query, lang);

            let formatter = CardFormatter::new(lang);
            formatter.print_results(&visible);

            if let Some(output_path) = output {
                formatter.save(&visible, &output_path)?;
            }
        }

        Commands::List { lang, data } => {
            let lang: Lang = lang.into();
            let records = dataset::load(data.as_deref())?;
            let visible = filter(&records, "", lang);
            CardFormatter::new(lang).print_results(&visible);
        }

        Commands::Show { id, lang, data } => {
            let lang: Lang = lang.into();
            let records = dataset::load(data.as_deref())?;
            let record = records
                .iter()
                .find(|r| r.id == id)
                .ok_or_else(|| anyhow!("no card with id {}", id))?;
            CardFormatter::new(lang).print_card(record);
        }

        Commands::Export {
            query,
            lang,
            data,
            output,
            formats,
            dir,
        } => {
            let lang: Lang = lang.into();
            let records = dataset::load(data.as_deref())?;
            let visible = filter(&records, query.as_deref().unwrap_or(""), lang);

            if let Some(output_path) = output {
                // An explicit path takes a single format; the first one
                // requested wins.
                let format = formats.first().copied().unwrap_or(ExportFormat::Json);
                let content = format.serialize(&visible, lang)?;
                std::fs::write(&output_path, content)?;
                println!("Export saved to: {}", output_path.display());
            } else {
                let stored = storage::persist_exports(&visible, lang, dir.as_deref(), &formats)?;
                for path in stored {
                    println!("Export saved to: {}", path.display());
                }
            }
        }

        Commands::Langs { lang } => {
            let lang: Lang = lang.into();
            println!("\n{}", i18n::t(lang, "langs.title").bold().cyan());
            for candidate in Lang::all() {
                let code = candidate.code();
                let name = i18n::language_name(code).unwrap_or("?");
                let mut line = format!(
                    "  {}  {:<10} {}",
                    code,
                    name,
                    candidate.native_name()
                );
                if *candidate == lang {
                    line.push_str(&format!("  [{}]", i18n::t(lang, "langs.current")));
                }
                println!("{}", line);
            }
            println!();
            println!("{}", i18n::t(lang, "footer.about.body"));
            println!("{}", i18n::t(lang, "footer.rights").dimmed());
        }
    }

    Ok(())
}
