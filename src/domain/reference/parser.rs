//! 引用解析器
//!
//! 将 `chapter[:start[-end]]` 解析为 [`Reference`]。
//! 扫描阶段只负责切分，数字校验在扫描结束后统一进行。

use super::{Reference, ReferenceError, ReferencePart};

/// 解析阶段
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Stage {
    Chapter,
    Start,
    End,
}

impl Stage {
    /// 遇到 `:`
    fn on_colon(self) -> Result<Stage, ReferenceError> {
        match self {
            Stage::Chapter => Ok(Stage::Start),
            Stage::Start | Stage::End => Err(ReferenceError::DuplicateColon),
        }
    }

    /// 遇到 `-`
    fn on_dash(self) -> Result<Stage, ReferenceError> {
        match self {
            Stage::Start => Ok(Stage::End),
            Stage::Chapter => Err(ReferenceError::EndBeforeStart),
            Stage::End => Err(ReferenceError::DuplicateDash),
        }
    }
}

/// 三个阶段各自的累积缓冲区
#[derive(Debug, Default)]
struct Buffers {
    chapter: String,
    start: String,
    end: String,
}

impl Buffers {
    fn push(&mut self, stage: Stage, ch: char) {
        match stage {
            Stage::Chapter => self.chapter.push(ch),
            Stage::Start => self.start.push(ch),
            Stage::End => self.end.push(ch),
        }
    }
}

/// 解析经文引用
///
/// 规则：
/// - 章节必须存在（`0` 表示整卷书）
/// - 起始节缺省为 1
/// - 结束节缺省为 0（没有上界）
/// - 不做首尾空白裁剪
pub fn parse_reference(input: &str) -> Result<Reference, ReferenceError> {
    let mut stage = Stage::Chapter;
    let mut buffers = Buffers::default();

    for ch in input.chars() {
        match ch {
            ':' => stage = stage.on_colon()?,
            '-' => stage = stage.on_dash()?,
            _ => buffers.push(stage, ch),
        }
    }

    let chapter = parse_number(&buffers.chapter, ReferencePart::Chapter)?;
    let start = if buffers.start.is_empty() {
        1
    } else {
        parse_number(&buffers.start, ReferencePart::Start)?
    };
    let end = if buffers.end.is_empty() {
        0
    } else {
        parse_number(&buffers.end, ReferencePart::End)?
    };

    Ok(Reference::new(chapter, start, end))
}

fn parse_number(buffer: &str, part: ReferencePart) -> Result<u32, ReferenceError> {
    buffer
        .parse::<u32>()
        .map_err(|_| ReferenceError::malformed(part, buffer))
}
