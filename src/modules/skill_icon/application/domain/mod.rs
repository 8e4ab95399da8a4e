mod icon_file;

pub use icon_file::{icon_id, icon_name, IconFile};
