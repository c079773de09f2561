pub mod bearer;
pub mod validate;
