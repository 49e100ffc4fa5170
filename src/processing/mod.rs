//! LLM 输出处理
//!
//! `extractor` 从 markdown 回复中取出 JSON 文本，
//! `table_builder` 把 JSON 校验后转换成题目表格。

pub mod extractor;
pub mod table_builder;

pub use extractor::extract_fenced;
pub use table_builder::{build_table, try_build_table};
