/// Application states and scan-progress transitions.
pub mod app_state;

/// Plugin, resource and system wiring plus window configuration.
pub mod app_setup;
