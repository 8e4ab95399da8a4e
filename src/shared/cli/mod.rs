pub mod json_input;
pub mod report;

pub use json_input::{read_json_file, split_documents, write_json_file, JsonInputError};
pub use report::CommandReport;
