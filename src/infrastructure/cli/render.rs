//! 输出渲染

use crate::application::{PassageResponse, TranslationInfo};

/// 书卷列表，逗号分隔，单行
pub fn render_books(books: &[String]) -> String {
    format!("{}\n", books.join(", "))
}

/// 译本列表，每行 `Name (id)`
pub fn render_translations(translations: &[TranslationInfo]) -> String {
    translations
        .iter()
        .map(|t| format!("{} ({})\n", t.name, t.id))
        .collect()
}

/// 经文，每节一行
pub fn render_passage(passage: &PassageResponse, show_numbers: bool) -> String {
    let mut output = String::new();
    for verse in &passage.verses {
        if show_numbers {
            output.push_str(&format!("{}:{} ", verse.chapter, verse.number));
        }
        output.push_str(&verse.text);
        output.push('\n');
    }
    output
}
