//! Draggable, stacking floating windows for terminal dashboards.
//!
//! The crate provides a small window-manager layer (registry, stacking,
//! focus trapping, pointer drag with viewport clamping) plus the body
//! components and drivers the demo dashboard is built from.

pub mod components;
pub mod constants;
pub mod drivers;
pub mod error;
pub mod event_loop;
pub mod keybindings;
pub mod state;
pub mod theme;
pub mod tracing_sub;
pub mod ui;
pub mod window;

/// Help content embedded at build time from `assets/help.md`.
pub mod help {
    include!(concat!(env!("OUT_DIR"), "/generated_help.rs"));
}
