mod icon_source;

pub use icon_source::{IconEntry, IconSource, IconSourceError};
