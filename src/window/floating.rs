//! One draggable, closable, focusable panel.
//!
//! A `FloatingWindow` owns its geometry, gesture state, and body content.
//! Stacking order and focus live in the [`WindowRegistry`]; the window is
//! handed both as render parameters so the two never disagree.
//!
//! [`WindowRegistry`]: super::registry::WindowRegistry

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::prelude::Rect;

use super::decorator;
use super::{DragAnchor, Position, Size, WindowId, rect_contains};
use crate::components::{Component, ComponentContext, EmptyBody};
use crate::constants::{DEFAULT_WINDOW_HEIGHT, DEFAULT_WINDOW_WIDTH};
use crate::ui::UiFrame;

/// What a window did with an event routed to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowEvent {
    Ignored,
    Handled,
    /// The user asked to close this window (close control, Esc, or a body
    /// element). The owner decides whether to actually close it.
    CloseRequested,
}

pub struct FloatingWindow {
    id: WindowId,
    title: String,
    position: Position,
    size: Size,
    dragging: bool,
    drag_anchor: Option<DragAnchor>,
    body: Box<dyn Component>,
}

impl FloatingWindow {
    pub fn new(id: WindowId, title: impl Into<String>, initial_position: Position) -> Self {
        Self {
            id,
            title: title.into(),
            position: initial_position,
            size: Size::new(DEFAULT_WINDOW_WIDTH, DEFAULT_WINDOW_HEIGHT),
            dragging: false,
            drag_anchor: None,
            body: Box::new(EmptyBody),
        }
    }

    pub fn with_size(mut self, size: Size) -> Self {
        self.size = size;
        self
    }

    pub fn with_body(mut self, body: Box<dyn Component>) -> Self {
        self.body = body;
        self
    }

    pub fn id(&self) -> WindowId {
        self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn size(&self) -> Size {
        self.size
    }

    pub fn dragging(&self) -> bool {
        self.dragging
    }

    /// Focus-trap position inside the body, for callers that inspect it.
    pub fn body_focused_slot(&self) -> Option<usize> {
        self.body.focused_slot()
    }

    pub fn body_interactive_count(&self) -> usize {
        self.body.interactive_count()
    }

    pub fn rect(&self) -> Rect {
        Rect {
            x: self.position.x,
            y: self.position.y,
            width: self.size.width,
            height: self.size.height,
        }
    }

    pub fn contains(&self, x: u16, y: u16) -> bool {
        rect_contains(self.rect(), x, y)
    }

    /// Begin a drag gesture with the pointer at `(x, y)`, which the caller
    /// has already verified lies inside the header drag region.
    pub fn begin_drag(&mut self, x: u16, y: u16) {
        self.drag_anchor = Some(DragAnchor {
            dx: x.saturating_sub(self.position.x),
            dy: y.saturating_sub(self.position.y),
        });
        self.dragging = true;
    }

    /// Move the window so its grab point follows the pointer, clamped to the
    /// viewport. A move without an active gesture is ignored.
    pub fn drag_to(&mut self, x: u16, y: u16, viewport: Size) {
        let Some(anchor) = self.drag_anchor else {
            return;
        };
        if !self.dragging {
            return;
        }
        self.position = drag_position(x, y, anchor, viewport, self.size);
    }

    /// End the gesture wherever the pointer was released. No further position
    /// change occurs.
    pub fn end_drag(&mut self) {
        self.dragging = false;
        self.drag_anchor = None;
    }

    /// Called when this window gains focus: input focus moves to the first
    /// interactive element in the body, if there is one.
    pub fn focus_first_slot(&mut self) {
        if self.body.interactive_count() > 0 {
            self.body.set_focused_slot(Some(0));
        } else {
            self.body.set_focused_slot(None);
        }
    }

    /// Cycle input focus through the body's interactive elements, wrapping at
    /// both ends. The element count is re-queried on every call so content
    /// that changed since the last press is picked up. Returns false when the
    /// body has no interactive elements (the key then passes through).
    pub fn cycle_focus(&mut self, forward: bool) -> bool {
        let count = self.body.interactive_count();
        if count == 0 {
            return false;
        }
        let next = match self.body.focused_slot() {
            None => {
                if forward {
                    0
                } else {
                    count - 1
                }
            }
            Some(slot) => {
                if forward {
                    (slot + 1) % count
                } else {
                    (slot + count - 1) % count
                }
            }
        };
        self.body.set_focused_slot(Some(next));
        true
    }

    /// Route a key event to this window while it holds focus.
    pub fn handle_key(&mut self, key: &KeyEvent) -> WindowEvent {
        if key.kind != KeyEventKind::Press {
            return WindowEvent::Ignored;
        }
        match key.code {
            KeyCode::Esc => WindowEvent::CloseRequested,
            KeyCode::Tab => {
                if self.cycle_focus(true) {
                    WindowEvent::Handled
                } else {
                    WindowEvent::Ignored
                }
            }
            KeyCode::BackTab => {
                if self.cycle_focus(false) {
                    WindowEvent::Handled
                } else {
                    WindowEvent::Ignored
                }
            }
            _ => self.forward_to_body(&Event::Key(*key)),
        }
    }

    /// Offer a pointer event that landed inside the window body to the
    /// content component.
    pub fn handle_body_event(&mut self, event: &Event) -> WindowEvent {
        self.forward_to_body(event)
    }

    fn forward_to_body(&mut self, event: &Event) -> WindowEvent {
        let ctx = ComponentContext::new(true);
        let handled = self.body.handle_event(event, &ctx);
        if self.body.take_close_request() {
            WindowEvent::CloseRequested
        } else if handled {
            WindowEvent::Handled
        } else {
            WindowEvent::Ignored
        }
    }

    pub fn render(&mut self, frame: &mut UiFrame<'_>, focused: bool) {
        let rect = self.rect();
        decorator::render_chrome(frame, rect, &self.title, focused, self.dragging);
        let body_area = decorator::content_area(rect);
        if body_area.width == 0 || body_area.height == 0 {
            return;
        }
        let ctx = ComponentContext::new(focused);
        self.body.render(frame, body_area, &ctx);
    }
}

/// Clamp one axis of a candidate position to `[0, viewport - window]`.
/// When the window is larger than the viewport the range collapses to 0, so
/// the window stays pinned to the origin on that axis.
fn clamp_axis(candidate: i32, viewport: u16, window: u16) -> u16 {
    let max = i32::from(viewport.saturating_sub(window));
    candidate.clamp(0, max) as u16
}

/// Position the window so that its grab point sits under the pointer, with
/// each axis clamped independently to keep the window fully inside the
/// viewport.
pub fn drag_position(
    pointer_x: u16,
    pointer_y: u16,
    anchor: DragAnchor,
    viewport: Size,
    window: Size,
) -> Position {
    let candidate_x = i32::from(pointer_x) - i32::from(anchor.dx);
    let candidate_y = i32::from(pointer_y) - i32::from(anchor.dy);
    Position {
        x: clamp_axis(candidate_x, viewport.width, window.width),
        y: clamp_axis(candidate_y, viewport.height, window.height),
    }
}
