//! Page-level controller for a set of floating windows.
//!
//! The stack owns the open [`FloatingWindow`] instances and the
//! [`WindowRegistry`], routes pointer and keyboard events, renders windows in
//! stacking order, and queues close requests for the owner to drain. All
//! mutation happens synchronously inside event handlers on the UI thread.

use crossterm::event::{Event, KeyEventKind, MouseEvent, MouseEventKind};

use super::decorator::HeaderAction;
use super::{FloatingWindow, Size, WindowEvent, WindowId, WindowRegistry, decorator};
use crate::ui::UiFrame;

pub struct WindowStack {
    registry: WindowRegistry,
    windows: Vec<FloatingWindow>,
    /// Active drag gesture, if any. Held only for the gesture's duration and
    /// cleared on every exit path, including the dragged window closing.
    drag: Option<WindowId>,
    close_requests: Vec<WindowId>,
    viewport: Size,
}

impl WindowStack {
    pub fn new() -> Self {
        Self {
            registry: WindowRegistry::new(),
            windows: Vec::new(),
            drag: None,
            close_requests: Vec::new(),
            viewport: Size::new(0, 0),
        }
    }

    pub fn allocate_id(&mut self) -> WindowId {
        self.registry.allocate_id()
    }

    pub fn registry(&self) -> &WindowRegistry {
        &self.registry
    }

    pub fn is_open(&self, id: WindowId) -> bool {
        self.registry.contains(id)
    }

    pub fn window(&self, id: WindowId) -> Option<&FloatingWindow> {
        self.windows.iter().find(|window| window.id() == id)
    }

    pub fn window_mut(&mut self, id: WindowId) -> Option<&mut FloatingWindow> {
        self.windows.iter_mut().find(|window| window.id() == id)
    }

    /// Viewport used for drag clamping. Updated on every render and on
    /// terminal resize events; tests drive it directly.
    pub fn set_viewport(&mut self, viewport: Size) {
        self.viewport = viewport;
    }

    /// Open a window: it joins the registry and immediately becomes topmost
    /// and focused. Opening an id that is already open is a no-op.
    pub fn open(&mut self, window: FloatingWindow) -> WindowId {
        let id = window.id();
        if self.registry.contains(id) {
            tracing::warn!(window = %id, "window already open");
            return id;
        }
        tracing::debug!(window = %id, title = window.title(), "opening window");
        self.windows.push(window);
        self.registry.register(id);
        self.raise(id);
        id
    }

    /// Close a window: it leaves the registry and is discarded. Closing an id
    /// that is not open is a no-op. An in-flight drag on the window is
    /// cancelled.
    pub fn close(&mut self, id: WindowId) {
        if self.drag == Some(id) {
            self.drag = None;
        }
        if let Some(window) = self.window_mut(id) {
            window.end_drag();
        }
        self.registry.deregister(id);
        let before = self.windows.len();
        self.windows.retain(|window| window.id() != id);
        if self.windows.len() != before {
            tracing::debug!(window = %id, "closed window");
        }
    }

    /// Raise `id` to the top and focus it. The window's first interactive
    /// element receives input focus when focus actually moved.
    pub fn raise(&mut self, id: WindowId) {
        if !self.registry.contains(id) {
            return;
        }
        let gained = self.registry.focused_id() != Some(id);
        self.registry.bring_to_front(id);
        if gained && let Some(window) = self.window_mut(id) {
            window.focus_first_slot();
        }
    }

    /// Ids of windows whose close was requested since the last call. The
    /// owner answers by flipping its open flags and calling [`close`].
    ///
    /// [`close`]: Self::close
    pub fn take_close_requests(&mut self) -> Vec<WindowId> {
        std::mem::take(&mut self.close_requests)
    }

    fn request_close(&mut self, id: WindowId) {
        if !self.close_requests.contains(&id) {
            self.close_requests.push(id);
        }
    }

    /// Route an input event. Returns true when a window consumed it; the
    /// page behind the windows handles the rest.
    pub fn handle_event(&mut self, event: &Event) -> bool {
        match event {
            Event::Mouse(mouse) => self.handle_mouse(mouse),
            Event::Key(key) => {
                if key.kind != KeyEventKind::Press {
                    return false;
                }
                let Some(focused) = self.registry.focused_id() else {
                    return false;
                };
                let Some(window) = self.window_mut(focused) else {
                    return false;
                };
                match window.handle_key(key) {
                    WindowEvent::CloseRequested => {
                        self.request_close(focused);
                        true
                    }
                    WindowEvent::Handled => true,
                    WindowEvent::Ignored => false,
                }
            }
            Event::Resize(width, height) => {
                self.viewport = Size::new(*width, *height);
                false
            }
            _ => false,
        }
    }

    fn handle_mouse(&mut self, mouse: &MouseEvent) -> bool {
        match mouse.kind {
            MouseEventKind::Down(_) => self.handle_mouse_down(mouse.column, mouse.row),
            MouseEventKind::Drag(_) => {
                let Some(id) = self.drag else {
                    return false;
                };
                let viewport = self.viewport;
                if let Some(window) = self.window_mut(id) {
                    window.drag_to(mouse.column, mouse.row, viewport);
                }
                true
            }
            MouseEventKind::Up(_) => {
                // a release anywhere on the page ends the gesture, so a drag
                // can never become stuck outside the window bounds
                let Some(id) = self.drag.take() else {
                    return false;
                };
                if let Some(window) = self.window_mut(id) {
                    window.end_drag();
                }
                true
            }
            _ => false,
        }
    }

    fn handle_mouse_down(&mut self, x: u16, y: u16) -> bool {
        let Some(id) = self.hit_test_topmost(x, y) else {
            // no backdrop and no click-outside-to-close: presses beside the
            // windows belong to the page
            return false;
        };
        if self.registry.focused_id() != Some(id) {
            self.raise(id);
        }
        let Some(window) = self.window_mut(id) else {
            return false;
        };
        match decorator::hit_test(window.rect(), x, y) {
            HeaderAction::Close => {
                self.request_close(id);
            }
            HeaderAction::Drag => {
                window.begin_drag(x, y);
                self.drag = Some(id);
            }
            HeaderAction::None => {
                let event = Event::Mouse(MouseEvent {
                    kind: MouseEventKind::Down(crossterm::event::MouseButton::Left),
                    column: x,
                    row: y,
                    modifiers: crossterm::event::KeyModifiers::NONE,
                });
                if window.handle_body_event(&event) == WindowEvent::CloseRequested {
                    self.request_close(id);
                }
            }
        }
        true
    }

    /// Topmost open window containing `(x, y)`; windows below it are
    /// shadowed even where their rectangles overlap.
    fn hit_test_topmost(&self, x: u16, y: u16) -> Option<WindowId> {
        self.registry
            .draw_order()
            .into_iter()
            .rev()
            .find(|&id| self.window(id).is_some_and(|window| window.contains(x, y)))
    }

    /// Render all open windows bottom-to-top so stacking order decides what
    /// paints on top.
    pub fn render(&mut self, frame: &mut UiFrame<'_>) {
        self.viewport = Size::from(frame.area());
        for id in self.registry.draw_order() {
            let focused = self.registry.is_focused(id);
            if let Some(window) = self.window_mut(id) {
                window.render(frame, focused);
            }
        }
    }
}

impl Default for WindowStack {
    fn default() -> Self {
        Self::new()
    }
}
