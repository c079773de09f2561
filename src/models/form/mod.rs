pub mod types;
pub mod validate;

pub use types::{FieldKind, FieldSchema, Form, FormData, PublicForm};
