//! Reference Context - 经文引用
//!
//! 职责:
//! - 解析 `chapter[:start[-end]]` 形式的引用
//! - 将引用转换为经文选择范围

mod errors;
mod parser;
mod value_objects;

pub use errors::{ReferenceError, ReferencePart};
pub use parser::parse_reference;
pub use value_objects::{Reference, VerseSelection};
