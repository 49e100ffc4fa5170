//! # MCQ Generator
//!
//! 从文本或 PDF 出多选题的 Rust 应用程序
//!
//! ## 架构设计
//!
//! ### ① 基础模块
//! - `prompts/` - 出题、评审两个提示词模板，只做占位符替换
//! - `processing/` - 从 LLM 回复中提取 ```json 代码块，校验并转换为题目表格
//! - `models/` - 请求、结果、题目记录，以及源文件 / 题目格式的加载
//!
//! ### ② 业务能力层（Services）
//! - `LlmBoundary` / `LlmService` - 发送提示词，取回原始文本
//! - `CsvWriter` - 导出 CSV
//!
//! ### ③ 流程层（Workflow）
//! - `QuizPipeline` - 出题 → 评审，两次 LLM 调用顺序执行
//!
//! ### ④ 编排层（Orchestration）
//! - `App` - 一次完整的用户操作
//!
//! ## 模块结构

pub mod config;
pub mod error;
pub mod models;
pub mod orchestrator;
pub mod processing;
pub mod prompts;
pub mod services;
pub mod utils;
pub mod workflow;

// 重新导出常用类型
pub use config::Config;
pub use error::{McqError, McqResult};
pub use models::{GenerationRequest, PipelineResult, QuestionRecord, QuestionSet};
pub use orchestrator::{App, QuizInput, QuizOutcome};
pub use processing::{build_table, extract_fenced};
pub use services::{LlmBoundary, LlmService};
pub use workflow::QuizPipeline;
