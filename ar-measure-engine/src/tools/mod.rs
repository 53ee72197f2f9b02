//! Interactive command surface of the measuring tool.
//!
//! Two inputs exist: taps (left click on a resolved feature point) and
//! discrete commands (mode selection, reset). Commands arrive as events
//! from keyboard shortcuts on native builds or JSON-RPC on wasm, mirroring
//! each other exactly:
//!
//! ```text
//! Keyboard/RPC input
//!   ├─> ModeSelectEvent ─> handle_mode_select_events ─> session.set_mode
//!   └─> ResetSessionEvent ─> handle_reset_events ─> session.reset
//! Left click + HitPoint ─> measure_input_system ─> session.place
//! ```
//!
//! Every successful placement emits placement-tier feedback; every tap that
//! produces a measurement additionally emits completion-tier feedback and a
//! `measurement_updated` notification.

/// Tap handling: hit point to marker placement to measurement.
pub mod measure_tool;

/// Mode selection and reset commands with keyboard/RPC sources.
pub mod tool_manager;
