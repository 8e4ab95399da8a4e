pub mod cleanup;
pub mod orphans;
