pub mod schema_loader;
pub mod source_reader;

pub use schema_loader::{default_response_schema, load_response_schema};
pub use source_reader::{read_source, SourceFormat};
