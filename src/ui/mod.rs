// UI and formatting module

pub mod formatters;
pub mod menu_tui;

// Re-export commonly used items for cleaner imports
pub use formatters::{format_disk_value, format_gb, format_mb, format_record_value, format_uptime};
pub use menu_tui::{run_menu_app, MenuController, Viewport};
