//! 题目 JSON 校验与表格构建
//!
//! 期望格式: `{"1": {"mcq": "...", "options": {"a": "...", ...}, "correct": "a"}, ...}`

use serde_json::{Map, Value};
use tracing::{debug, warn};

use crate::error::{McqError, McqResult};
use crate::models::question::{QuestionRecord, QuestionSet};

/// 构建题目表格
///
/// 解析或格式错误都会被记录到日志，然后统一返回 `None`，
/// 调用方只需要展示一条"无法生成表格"的提示。
///
/// 不检查题目数量是否与请求一致。
pub fn build_table(extracted: &str) -> Option<QuestionSet> {
    match try_build_table(extracted) {
        Ok(records) => {
            debug!("表格构建完成: {} 道题", records.len());
            Some(records)
        }
        Err(e) => {
            warn!("⚠️ 无法构建题目表格: {}", e);
            None
        }
    }
}

/// 构建题目表格，保留具体错误类型
///
/// 遇到第一道格式错误的题目即整体失败。
/// 行顺序与 JSON 文档中的键顺序一致，不按题号排序。
pub fn try_build_table(extracted: &str) -> McqResult<QuestionSet> {
    let document: Value =
        serde_json::from_str(extracted).map_err(|source| McqError::ParseError { source })?;

    let entries = document
        .as_object()
        .ok_or_else(|| McqError::schema("<root>", "顶层不是 JSON 对象"))?;

    entries
        .iter()
        .map(|(key, entry)| parse_entry(key, entry))
        .collect()
}

fn parse_entry(key: &str, entry: &Value) -> McqResult<QuestionRecord> {
    let fields = entry
        .as_object()
        .ok_or_else(|| McqError::schema(key, "题目不是 JSON 对象"))?;

    let mcq = required(key, fields, "mcq")?
        .as_str()
        .ok_or_else(|| McqError::schema(key, "mcq 不是字符串"))?;

    let options = required(key, fields, "options")?
        .as_object()
        .ok_or_else(|| McqError::schema(key, "options 不是 JSON 对象"))?;
    let choices = options
        .iter()
        .map(|(label, text)| (label.clone(), value_text(text)))
        .collect();

    let correct = value_text(required(key, fields, "correct")?);

    Ok(QuestionRecord::new(mcq, choices, correct))
}

fn required<'a>(key: &str, fields: &'a Map<String, Value>, name: &str) -> McqResult<&'a Value> {
    fields
        .get(name)
        .ok_or_else(|| McqError::schema(key, format!("缺少字段 {}", name)))
}

/// 字符串原样返回，其他类型使用 JSON 文本
fn value_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
