//! Query Handlers 实现

mod translation_handlers;
mod verse_handlers;

pub use translation_handlers::*;
pub use verse_handlers::*;
