//! 经文标记清理
//!
//! 数据库中的经文带有 `<verse ...>` 之类的内联标签，输出前需要去掉。

/// 去除内联标签、换行以及开头的空格
///
/// - `\n` 一律丢弃（标签内外都一样）
/// - `<` 与 `>` 之间的内容连同尖括号一起丢弃
/// - 在输出任何字符之前遇到的空格被丢弃
pub fn strip_markup(text: &str) -> String {
    let mut output = String::with_capacity(text.len());
    let mut in_tag = false;
    let mut started = false;

    for ch in text.chars() {
        match ch {
            '\n' => {}
            '<' => in_tag = true,
            '>' => in_tag = false,
            _ if in_tag => {}
            ' ' if !started => {}
            _ => {
                output.push(ch);
                started = true;
            }
        }
    }

    output
}
