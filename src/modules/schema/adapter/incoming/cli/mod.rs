pub mod create;
pub mod validate;
