pub mod loader;
pub mod types;

pub use loader::{load_document, parse_document, resolve_input_path};
pub use types::RawDocument;
