pub mod import_icons;
