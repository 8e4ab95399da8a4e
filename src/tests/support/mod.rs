pub mod fake_store;
pub mod fixtures;
pub mod stubs;
