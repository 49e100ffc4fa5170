//! 出题请求与流水线结果

use std::ops::RangeInclusive;

use serde_json::Value;

use crate::error::{McqError, McqResult};

/// 允许的题目数量范围
pub const QUESTION_COUNT_RANGE: RangeInclusive<usize> = 3..=10;
/// 科目名称最大长度（字符）
pub const MAX_SUBJECT_CHARS: usize = 25;
/// 难度描述最大长度（字符）
pub const MAX_DIFFICULTY_CHARS: usize = 20;

/// 一次出题请求
///
/// 构造后不可修改，每次用户操作创建一个
#[derive(Debug, Clone)]
pub struct GenerationRequest {
    source_text: String,
    question_count: usize,
    subject: String,
    difficulty: String,
    response_schema: Value,
}

impl GenerationRequest {
    /// 创建并校验出题请求
    ///
    /// # 参数
    /// - `source_text`: 出题依据的原文（不能为空）
    /// - `question_count`: 题目数量（3-10）
    /// - `subject`: 科目
    /// - `difficulty`: 难度描述，例如 simple / mid / hard
    /// - `response_schema`: 期望的题目 JSON 格式
    pub fn new(
        source_text: impl Into<String>,
        question_count: usize,
        subject: impl Into<String>,
        difficulty: impl Into<String>,
        response_schema: Value,
    ) -> McqResult<Self> {
        let source_text = source_text.into();
        let subject = subject.into();
        let difficulty = difficulty.into();

        if source_text.trim().is_empty() {
            return Err(McqError::InvalidRequest("原文内容为空".to_string()));
        }
        if !QUESTION_COUNT_RANGE.contains(&question_count) {
            return Err(McqError::InvalidRequest(format!(
                "题目数量 {} 超出范围 [{}, {}]",
                question_count,
                QUESTION_COUNT_RANGE.start(),
                QUESTION_COUNT_RANGE.end()
            )));
        }
        if subject.chars().count() > MAX_SUBJECT_CHARS {
            return Err(McqError::InvalidRequest(format!(
                "科目名称超过 {} 个字符",
                MAX_SUBJECT_CHARS
            )));
        }
        if difficulty.chars().count() > MAX_DIFFICULTY_CHARS {
            return Err(McqError::InvalidRequest(format!(
                "难度描述超过 {} 个字符",
                MAX_DIFFICULTY_CHARS
            )));
        }

        Ok(Self {
            source_text,
            question_count,
            subject,
            difficulty,
            response_schema,
        })
    }

    pub fn source_text(&self) -> &str {
        &self.source_text
    }

    pub fn question_count(&self) -> usize {
        self.question_count
    }

    pub fn subject(&self) -> &str {
        &self.subject
    }

    pub fn difficulty(&self) -> &str {
        &self.difficulty
    }

    pub fn response_schema(&self) -> &Value {
        &self.response_schema
    }

    /// 题目格式的紧凑 JSON 文本，用于填入出题模板
    pub fn response_json(&self) -> String {
        self.response_schema.to_string()
    }
}

/// 流水线输出
///
/// 两个字段都是 LLM 的原始文本，流水线本身不做解析
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PipelineResult {
    /// 第一阶段输出（预期包含 ```json 代码块）
    pub quiz: String,
    /// 第二阶段输出（评审意见）
    pub review: String,
}

impl PipelineResult {
    /// 输出变量名
    pub const OUTPUT_VARIABLES: [&'static str; 2] = ["quiz", "review"];

    /// 按输出变量名取值
    pub fn get(&self, key: &str) -> Option<&str> {
        match key {
            "quiz" => Some(&self.quiz),
            "review" => Some(&self.review),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn request(count: usize, subject: &str) -> McqResult<GenerationRequest> {
        GenerationRequest::new("Some text", count, subject, "simple", json!({}))
    }

    #[test]
    fn test_question_count_bounds() {
        assert!(request(3, "Biology").is_ok());
        assert!(request(10, "Biology").is_ok());
        assert!(matches!(request(2, "Biology"), Err(McqError::InvalidRequest(_))));
        assert!(matches!(request(11, "Biology"), Err(McqError::InvalidRequest(_))));
    }

    #[test]
    fn test_empty_text_rejected() {
        let result = GenerationRequest::new("   \n", 5, "Biology", "simple", json!({}));
        assert!(matches!(result, Err(McqError::InvalidRequest(_))));
    }

    #[test]
    fn test_subject_length_counts_chars() {
        // 25 个多字节字符仍然合法
        let subject = "生".repeat(25);
        assert!(request(5, &subject).is_ok());
        assert!(request(5, &"x".repeat(26)).is_err());
    }

    #[test]
    fn test_response_json_is_compact() {
        let req = GenerationRequest::new(
            "text",
            3,
            "Math",
            "hard",
            json!({"1": {"mcq": "q", "options": {"a": "x"}, "correct": "a"}}),
        )
        .unwrap();
        assert_eq!(
            req.response_json(),
            r#"{"1":{"mcq":"q","options":{"a":"x"},"correct":"a"}}"#
        );
    }

    #[test]
    fn test_pipeline_result_get() {
        let result = PipelineResult {
            quiz: "q".to_string(),
            review: "r".to_string(),
        };
        for key in PipelineResult::OUTPUT_VARIABLES {
            assert!(result.get(key).is_some());
        }
        assert_eq!(result.get("review"), Some("r"));
        assert_eq!(result.get("text"), None);
    }
}
