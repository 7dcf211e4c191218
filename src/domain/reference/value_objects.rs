//! Reference Context - Value Objects

use std::fmt;

/// 已解析的经文引用
///
/// - `chapter == 0` 表示整卷书
/// - `start == 0` 表示未指定起始节
/// - `end == 0` 表示没有上界（单节或开放区间）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Reference {
    pub chapter: u32,
    pub start: u32,
    pub end: u32,
}

impl Reference {
    pub fn new(chapter: u32, start: u32, end: u32) -> Self {
        Self {
            chapter,
            start,
            end,
        }
    }

    /// 整卷书
    pub fn whole_book() -> Self {
        Self::new(0, 1, 0)
    }

    pub fn is_whole_book(&self) -> bool {
        self.chapter == 0
    }

    /// 将引用转换为选择范围
    ///
    /// 只给出起始节而没有结束节时，选择整章而不是单节。
    pub fn selection(&self) -> VerseSelection {
        if self.chapter == 0 {
            VerseSelection::Book
        } else if self.start == 0 || self.end == 0 {
            VerseSelection::Chapter(self.chapter)
        } else {
            VerseSelection::Range {
                chapter: self.chapter,
                start: self.start,
                end: self.end,
            }
        }
    }
}

impl Default for Reference {
    fn default() -> Self {
        Self::whole_book()
    }
}

/// 以最短的等价形式输出（`5`、`3:16`、`1:10-11`）
impl fmt::Display for Reference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.end != 0 {
            write!(f, "{}:{}-{}", self.chapter, self.start, self.end)
        } else if self.start != 1 {
            write!(f, "{}:{}", self.chapter, self.start)
        } else {
            write!(f, "{}", self.chapter)
        }
    }
}

/// 经文选择范围
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VerseSelection {
    /// 整卷书，所有章节
    Book,
    /// 指定章的所有经文
    Chapter(u32),
    /// 指定章内 `[start, end]` 闭区间
    Range { chapter: u32, start: u32, end: u32 },
}

impl VerseSelection {
    /// 判断某一节经文是否落在选择范围内
    pub fn contains(&self, chapter: u32, number: u32) -> bool {
        match *self {
            VerseSelection::Book => true,
            VerseSelection::Chapter(c) => chapter == c,
            VerseSelection::Range {
                chapter: c,
                start,
                end,
            } => chapter == c && (start..=end).contains(&number),
        }
    }
}
