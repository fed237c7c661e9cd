pub mod api;
pub mod clipboard;
pub mod date_utils;
pub mod logging;
pub mod masks;
pub mod reorder;
pub mod slots;
