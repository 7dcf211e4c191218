//! Domain Layer - 领域层
//!
//! - Reference Context: 经文引用解析与选择范围
//! - Markup: 经文文本清理

pub mod reference;

mod markup;

pub use markup::strip_markup;
pub use reference::{parse_reference, Reference, ReferenceError, ReferencePart, VerseSelection};
