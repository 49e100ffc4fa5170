pub mod csv_writer;
pub mod llm_service;

pub use csv_writer::CsvWriter;
pub use llm_service::{LlmBoundary, LlmService};
