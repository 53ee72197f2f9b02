pub mod render_settings;
pub mod scan_settings;
pub mod units;
