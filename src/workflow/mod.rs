pub mod quiz_pipeline;

pub use quiz_pipeline::QuizPipeline;
