//! Shared crate-wide constants.

/// Stacking counter seed. Sits above any z-value the static dashboard
/// content could occupy, so the first window raised already paints over the
/// page.
pub const BASE_STACK_ORDER: u64 = 1000;

/// Default floating window size, in cells, when the caller sets none.
pub const DEFAULT_WINDOW_WIDTH: u16 = 40;
pub const DEFAULT_WINDOW_HEIGHT: u16 = 12;

/// Below this size the chrome cannot paint a border, header, and at least
/// one content row; the content area collapses instead of underflowing.
pub const MIN_WINDOW_WIDTH: u16 = 6;
pub const MIN_WINDOW_HEIGHT: u16 = 4;
