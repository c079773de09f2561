pub mod export;
pub mod query;
pub mod submit;
pub mod types;

pub use types::{FileUpload, NewResponse, Response};
