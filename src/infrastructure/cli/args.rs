//! 命令行参数

use clap::Parser;
use std::path::PathBuf;

/// Access the Holy Bible in your terminal.
#[derive(Parser, Debug, Clone, Default)]
#[command(name = "bible", version)]
#[command(after_help = "Examples:\n  bible --book Gen --reference 1:1-2\n  bible --b=Gen --v=1:1-2 -n")]
pub struct Args {
    /// Book (Example: "Gen")
    #[arg(short = 'b', long = "book", visible_alias = "b")]
    pub book: Option<String>,

    /// Verse(s) (Examples: "1:10-11", "5", "3:16"). "0" selects the whole book
    #[arg(short = 'v', long = "reference", visible_aliases = ["v", "verses"])]
    pub reference: Option<String>,

    /// Translation (Example: "kjv-en")
    #[arg(short = 't', long = "translation", visible_alias = "t")]
    pub translation: Option<String>,

    /// List supported translations
    #[arg(long = "list-translations", visible_alias = "lt")]
    pub list_translations: bool,

    /// List all books in the translation
    #[arg(long = "list-books", visible_alias = "lb")]
    pub list_books: bool,

    /// Include chapter:verse before each verse
    #[arg(short = 'n', long = "numbers")]
    pub show_numbers: bool,

    /// Path to a configuration file
    #[arg(short = 'c', long = "config")]
    pub config: Option<PathBuf>,
}
