//! Floating-window management: registry bookkeeping, per-window drag and
//! focus state, chrome painting, and event routing across a stack of
//! simultaneously open windows.

pub mod decorator;
pub mod floating;
pub mod registry;
pub mod stack;

use std::fmt;

use ratatui::prelude::Rect;

pub use decorator::HeaderAction;
pub use floating::{FloatingWindow, WindowEvent};
pub use registry::WindowRegistry;
pub use stack::WindowStack;

/// Stable identifier for one open floating window.
///
/// Callers may mint their own values; [`WindowRegistry::allocate_id`] hands
/// out fresh ones for callers that don't care.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct WindowId(u64);

impl WindowId {
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    pub const fn raw(self) -> u64 {
        self.0
    }
}

impl fmt::Display for WindowId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "w{}", self.0)
    }
}

/// Top-left anchor of a window, in viewport cells.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Position {
    pub x: u16,
    pub y: u16,
}

impl Position {
    pub const fn new(x: u16, y: u16) -> Self {
        Self { x, y }
    }
}

/// Rendered extent of a window, in cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Size {
    pub width: u16,
    pub height: u16,
}

impl Size {
    pub const fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

impl From<Rect> for Size {
    fn from(rect: Rect) -> Self {
        Self {
            width: rect.width,
            height: rect.height,
        }
    }
}

/// Pointer-to-top-left offset captured when a drag gesture starts. The
/// pointer always lands inside the window, so both components are
/// non-negative.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DragAnchor {
    pub dx: u16,
    pub dy: u16,
}

pub(crate) fn rect_contains(rect: Rect, x: u16, y: u16) -> bool {
    x >= rect.x
        && x < rect.x.saturating_add(rect.width)
        && y >= rect.y
        && y < rect.y.saturating_add(rect.height)
}
