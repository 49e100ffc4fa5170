//! 应用编排 - 编排层
//!
//! ## 职责
//!
//! 把一次用户操作串成完整流程：
//!
//! 1. **读取源文件**：.txt / .pdf → 文本
//! 2. **构造请求**：校验题目数量、科目、难度
//! 3. **运行流水线**：出题 → 评审
//! 4. **解析结果**：提取 ```json 代码块 → 构建表格
//! 5. **数量检查**：题目数量与请求不一致时告警（严格模式下失败）
//! 6. **导出**：写 CSV
//!
//! 任何一步失败，整个请求即失败，没有部分成功。

use std::path::PathBuf;

use serde_json::Value;
use tracing::{info, warn};

use crate::config::Config;
use crate::error::{McqError, McqResult};
use crate::models::loaders::{load_response_schema, read_source};
use crate::models::question::{QuestionSet, COLUMN_CHOICES, COLUMN_CORRECT, COLUMN_MCQ};
use crate::models::request::GenerationRequest;
use crate::processing::{build_table, extract_fenced};
use crate::services::{CsvWriter, LlmBoundary, LlmService};
use crate::utils::logging::{log_startup, print_final_stats};
use crate::workflow::QuizPipeline;

/// 一次出题操作的用户输入
#[derive(Debug, Clone)]
pub struct QuizInput {
    pub source_path: PathBuf,
    pub question_count: usize,
    pub subject: String,
    pub difficulty: String,
}

/// 一次出题操作的结果
#[derive(Debug, Clone)]
pub struct QuizOutcome {
    pub records: QuestionSet,
    pub review: String,
    pub csv_path: PathBuf,
}

/// 应用主结构
pub struct App<L = LlmService> {
    config: Config,
    response_schema: Value,
    pipeline: QuizPipeline<L>,
    csv_writer: CsvWriter,
}

impl App<LlmService> {
    /// 初始化应用
    ///
    /// 校验配置、加载题目格式、创建 LLM 服务，进程内只调用一次
    pub async fn initialize(config: Config) -> McqResult<Self> {
        config.validate()?;
        log_startup(&config);

        let response_schema = load_response_schema(config.response_schema_path.as_deref()).await?;
        let llm = LlmService::new(&config);

        Ok(Self::with_llm(config, response_schema, llm))
    }
}

impl<L: LlmBoundary> App<L> {
    /// 使用指定的 LLM 边界创建应用
    pub fn with_llm(config: Config, response_schema: Value, llm: L) -> Self {
        let csv_writer = CsvWriter::with_path(config.output_csv_path.clone());
        Self {
            config,
            response_schema,
            pipeline: QuizPipeline::new(llm),
            csv_writer,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// 运行应用主逻辑：从文件出题
    pub async fn run(&self, input: &QuizInput) -> McqResult<QuizOutcome> {
        let text = read_source(&input.source_path).await?;
        self.generate(text, input).await
    }

    /// 对已读取的文本出题
    pub async fn generate(&self, text: String, input: &QuizInput) -> McqResult<QuizOutcome> {
        let request = GenerationRequest::new(
            text,
            input.question_count,
            input.subject.as_str(),
            input.difficulty.as_str(),
            self.response_schema.clone(),
        )?;

        let result = self.pipeline.run(&request).await?;

        let extracted = extract_fenced(&result.quiz);
        let records = build_table(&extracted).ok_or(McqError::TableUnavailable)?;

        check_question_count(request.question_count(), records.len(), self.config.strict_count)?;

        self.csv_writer.write(&records)?;
        let csv_path = self.csv_writer.output_path().to_path_buf();
        print_final_stats(
            request.question_count(),
            records.len(),
            &csv_path.display().to_string(),
        );

        Ok(QuizOutcome {
            records,
            review: result.review,
            csv_path,
        })
    }
}

/// 检查生成的题目数量
///
/// 数量不一致时记录告警；`strict` 为真时返回错误
pub fn check_question_count(requested: usize, produced: usize, strict: bool) -> McqResult<()> {
    if requested == produced {
        info!("✓ 题目数量符合要求: {}", produced);
        return Ok(());
    }

    warn!("⚠️ 请求 {} 道题，实际生成 {} 道", requested, produced);
    if strict {
        return Err(McqError::QuestionCountMismatch { requested, produced });
    }
    Ok(())
}

/// 把题目渲染成终端表格文本，行号从 1 开始
pub fn render_table(records: &QuestionSet) -> String {
    let mut out = format!("#\t{}\t{}\t{}\n", COLUMN_MCQ, COLUMN_CHOICES, COLUMN_CORRECT);
    for (index, record) in records.iter().enumerate() {
        let [mcq, choices, correct] = record.to_row();
        out.push_str(&format!("{}\t{}\t{}\t{}\n", index + 1, mcq, choices, correct));
    }
    out
}
