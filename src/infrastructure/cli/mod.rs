//! CLI - 命令行入口适配器

mod args;
mod render;
mod runner;

pub use args::Args;
pub use render::{render_books, render_passage, render_translations};
pub use runner::{CliRunner, EMPTY_PASSAGE_MESSAGE};
