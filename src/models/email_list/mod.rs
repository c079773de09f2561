pub mod import;
pub mod types;

pub use types::{EmailList, EmailListData, Recipient};
