//! 出题-评审流水线 - 流程层
//!
//! 流程顺序：
//! 1. 渲染出题模板 → LLM → quiz（原始文本）
//! 2. 渲染评审模板（subject + quiz）→ LLM → review（原始文本）
//!
//! 第二阶段拿到的是第一阶段未经处理的原文，评审看到的内容与后续解析的内容一致。

use std::collections::HashMap;

use tracing::{debug, info};

use crate::error::{McqError, McqResult};
use crate::models::request::{GenerationRequest, PipelineResult};
use crate::prompts::{EVALUATION_PROMPT, GENERATION_PROMPT};
use crate::services::LlmBoundary;
use crate::utils::logging::truncate_text;

/// 出题-评审流水线
///
/// - 不持有跨请求的状态，可以被多个调用方共享
/// - 两个阶段严格顺序执行，任一阶段失败则整个请求失败
/// - 不重试
pub struct QuizPipeline<L> {
    llm: L,
}

impl<L: LlmBoundary> QuizPipeline<L> {
    pub fn new(llm: L) -> Self {
        Self { llm }
    }

    pub fn llm(&self) -> &L {
        &self.llm
    }

    /// 运行流水线
    ///
    /// # 返回
    /// `quiz` 与 `review` 两段原始文本
    pub async fn run(&self, request: &GenerationRequest) -> McqResult<PipelineResult> {
        // ========== 阶段 1: 出题 ==========
        let generation_vars = HashMap::from([
            ("text", request.source_text().to_string()),
            ("number", request.question_count().to_string()),
            ("subject", request.subject().to_string()),
            ("tone", request.difficulty().to_string()),
            ("response_json", request.response_json()),
        ]);
        let generation_prompt = GENERATION_PROMPT.render(&generation_vars)?;

        info!(
            "🤖 正在生成 {} 道题 (科目: {}, 难度: {})",
            request.question_count(),
            request.subject(),
            request.difficulty()
        );
        let quiz = self
            .llm
            .invoke(&generation_prompt)
            .await
            .map_err(McqError::generation_failed)?;
        debug!("出题结果: {}", truncate_text(&quiz, 200));

        // ========== 阶段 2: 评审 ==========
        let evaluation_vars = HashMap::from([
            ("subject", request.subject().to_string()),
            ("quiz", quiz.clone()),
        ]);
        let evaluation_prompt = EVALUATION_PROMPT.render(&evaluation_vars)?;

        info!("📝 正在评审生成的题目...");
        let review = self
            .llm
            .invoke(&evaluation_prompt)
            .await
            .map_err(McqError::evaluation_failed)?;
        debug!("评审结果: {}", truncate_text(&review, 200));

        info!("✓ 出题与评审完成");
        Ok(PipelineResult { quiz, review })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::loaders::default_response_schema;
    use anyhow::Result;
    use async_trait::async_trait;
    use std::collections::VecDeque;
    use std::sync::Mutex;

    /// 按顺序返回预设回复，并记录收到的提示词
    pub struct ScriptedLlm {
        replies: Mutex<VecDeque<Result<String>>>,
        pub prompts: Mutex<Vec<String>>,
    }

    impl ScriptedLlm {
        pub fn new(replies: Vec<Result<String>>) -> Self {
            Self {
                replies: Mutex::new(replies.into()),
                prompts: Mutex::new(Vec::new()),
            }
        }

        pub fn prompts(&self) -> Vec<String> {
            self.prompts.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl LlmBoundary for ScriptedLlm {
        async fn invoke(&self, prompt: &str) -> Result<String> {
            self.prompts.lock().unwrap().push(prompt.to_string());
            self.replies
                .lock()
                .unwrap()
                .pop_front()
                .unwrap_or_else(|| Err(anyhow::anyhow!("no scripted reply left")))
        }
    }

    fn request() -> GenerationRequest {
        GenerationRequest::new(
            "Photosynthesis converts light to chemical energy.",
            3,
            "Biology",
            "simple",
            default_response_schema(),
        )
        .unwrap()
    }

    #[tokio::test]
    async fn test_run_returns_raw_outputs() {
        let quiz = "```json\n{\"1\": {\"mcq\": \"q\", \"options\": {\"a\": \"x\"}, \"correct\": \"a\"}}\n```";
        let llm = ScriptedLlm::new(vec![Ok(quiz.to_string()), Ok("Looks fine.".to_string())]);
        let pipeline = QuizPipeline::new(llm);

        let result = pipeline.run(&request()).await.unwrap();

        assert_eq!(result.quiz, quiz);
        assert_eq!(result.review, "Looks fine.");
    }

    #[tokio::test]
    async fn test_stage_two_receives_raw_stage_one_output() {
        let raw = "not even fenced {oops";
        let llm = ScriptedLlm::new(vec![Ok(raw.to_string()), Ok("review".to_string())]);
        let pipeline = QuizPipeline::new(llm);

        pipeline.run(&request()).await.unwrap();

        let prompts = pipeline.llm().prompts();
        assert_eq!(prompts.len(), 2);
        assert!(prompts[0].contains("Photosynthesis converts light to chemical energy."));
        assert!(prompts[0].contains("3 multiple choice questions for Biology students in simple tone"));
        assert!(prompts[0].contains("\"correct\":\"correct answer\""));
        assert!(prompts[1].contains(raw));
        assert!(prompts[1].contains("quiz for Biology students"));
    }

    #[tokio::test]
    async fn test_generation_failure_skips_evaluation() {
        let llm = ScriptedLlm::new(vec![
            Err(anyhow::anyhow!("quota exceeded")),
            Ok("unused".to_string()),
        ]);
        let pipeline = QuizPipeline::new(llm);

        let err = pipeline.run(&request()).await.unwrap_err();

        assert!(matches!(err, McqError::GenerationFailure { .. }));
        assert!(err.to_string().contains("quota exceeded"));
        assert_eq!(pipeline.llm().prompts().len(), 1);
    }

    #[test]
    fn test_evaluation_failure_has_no_partial_result() {
        let llm = ScriptedLlm::new(vec![
            Ok("```json\n{}\n```".to_string()),
            Err(anyhow::anyhow!("timeout")),
        ]);
        let pipeline = QuizPipeline::new(llm);

        let result = tokio_test::block_on(pipeline.run(&request()));

        assert!(matches!(result, Err(McqError::EvaluationFailure { .. })));
        assert_eq!(pipeline.llm().prompts().len(), 2);
    }
}
