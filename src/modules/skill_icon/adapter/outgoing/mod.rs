mod fs_icon_source;

pub use fs_icon_source::FsIconSource;
