//! 从 LLM 回复中提取 ```json 代码块的内容
//!
//! 回复是不可信的自由文本，这里只做字符串扫描，不依赖 markdown 解析

use std::iter;

/// 代码块起始标记
pub const OPEN_FENCE: &str = "```json";
/// 代码块结束标记
pub const CLOSE_FENCE: &str = "```";

/// 提取第一个 ```json 与其后第一个 ``` 之间的文本（去掉首尾空白）
///
/// 缺少标记时不报错，偏移量按以下规则退化：
/// - 没有起始标记：起点落在第 6 个字符（`OPEN_FENCE` 长度减一）
/// - 没有结束标记：终点落在最后一个字符之前
/// - 终点不在起点之后：返回空串
///
/// 偏移量按字符计算，不会切断多字节字符。
/// 退化结果通常不是合法 JSON，交给表格构建阶段判定失败。
pub fn extract_fenced(text: &str) -> String {
    let start = match text.find(OPEN_FENCE) {
        Some(pos) => pos + OPEN_FENCE.len(),
        None => match char_to_byte(text, OPEN_FENCE.chars().count() - 1) {
            Some(pos) => pos,
            None => return String::new(),
        },
    };

    let end = match text[start..].find(CLOSE_FENCE) {
        Some(pos) => start + pos,
        None => text.char_indices().last().map(|(i, _)| i).unwrap_or(0),
    };

    if end <= start {
        return String::new();
    }
    text[start..end].trim().to_string()
}

/// 第 `n` 个字符的字节偏移，`n` 等于字符数时返回文本长度
fn char_to_byte(text: &str, n: usize) -> Option<usize> {
    text.char_indices()
        .map(|(i, _)| i)
        .chain(iter::once(text.len()))
        .nth(n)
}
