pub mod footer;
pub mod format;
pub mod header;
pub mod help_overlay;
