use std::path::Path;

use serde_json::{json, Value};
use tracing::info;

use crate::error::{McqError, McqResult};

/// 内置的题目格式说明
///
/// 告诉模型每道题应该包含题干、a-d 四个选项和正确答案
pub fn default_response_schema() -> Value {
    let entry = || {
        json!({
            "mcq": "multiple choice question",
            "options": {
                "a": "choice here",
                "b": "choice here",
                "c": "choice here",
                "d": "choice here"
            },
            "correct": "correct answer"
        })
    };
    json!({
        "1": entry(),
        "2": entry(),
        "3": entry()
    })
}

/// 加载题目格式说明
///
/// # 参数
/// - `path`: JSON 文件路径，为 `None` 时返回内置格式
///
/// # 返回
/// 解析后的 JSON，只要求是合法 JSON，不校验内容
pub async fn load_response_schema(path: Option<&Path>) -> McqResult<Value> {
    let Some(path) = path else {
        return Ok(default_response_schema());
    };

    let path_str = path.display().to_string();
    let content = tokio::fs::read_to_string(path)
        .await
        .map_err(|e| McqError::SchemaResource {
            path: path_str.clone(),
            reason: e.to_string(),
        })?;

    let schema: Value = serde_json::from_str(&content).map_err(|e| McqError::SchemaResource {
        path: path_str.clone(),
        reason: e.to_string(),
    })?;

    info!("已加载题目格式文件: {}", path_str);
    Ok(schema)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_schema_shape() {
        let schema = default_response_schema();
        let entries = schema.as_object().unwrap();
        assert_eq!(entries.len(), 3);
        for entry in entries.values() {
            assert!(entry.get("mcq").is_some());
            assert_eq!(entry["options"].as_object().unwrap().len(), 4);
            assert!(entry.get("correct").is_some());
        }
    }

    #[tokio::test]
    async fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("response.json");
        std::fs::write(&path, r#"{"1": {"mcq": "q", "options": {"a": "x"}, "correct": "a"}}"#).unwrap();

        let schema = load_response_schema(Some(&path)).await.unwrap();
        assert_eq!(schema["1"]["correct"], "a");
    }

    #[tokio::test]
    async fn test_invalid_schema_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("response.json");
        std::fs::write(&path, "{ not json").unwrap();

        let result = load_response_schema(Some(&path)).await;
        assert!(matches!(result, Err(McqError::SchemaResource { .. })));
    }

    #[tokio::test]
    async fn test_none_uses_default() {
        let schema = load_response_schema(None).await.unwrap();
        assert_eq!(schema, default_response_schema());
    }
}
