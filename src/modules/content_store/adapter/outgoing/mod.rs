pub mod sanity;
