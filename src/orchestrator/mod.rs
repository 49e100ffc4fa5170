//! 编排层（Orchestration Layer）
//!
//! ## 层次关系
//!
//! ```text
//! orchestrator::App (一次用户操作：读文件 → 出题 → 表格 → CSV)
//!     ↓
//! workflow::QuizPipeline (出题 → 评审)
//!     ↓
//! prompts / services (模板渲染、LLM 调用、CSV 写入)
//!     ↓
//! processing (代码块提取、表格构建)
//! ```
//!
//! 题目数量的检查只放在本层，`processing` 不关心数量。

pub mod app;

pub use app::{check_question_count, render_table, App, QuizInput, QuizOutcome};
