pub mod loaders;
pub mod question;
pub mod request;

pub use loaders::{default_response_schema, load_response_schema, read_source};
pub use question::{QuestionRecord, QuestionSet};
pub use request::{GenerationRequest, PipelineResult};
