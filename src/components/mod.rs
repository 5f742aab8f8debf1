use crossterm::event::Event;
use ratatui::layout::Rect;

use crate::ui::UiFrame;

pub mod form;
pub mod markdown;
pub mod notifications;
pub mod task_list;

pub use form::{FormComponent, FormField};
pub use markdown::MarkdownViewComponent;
pub use notifications::{Notification, NotificationKind, NotificationListComponent};
pub use task_list::{TaskItem, TaskListComponent};

/// Context passed to `Component` trait methods describing UI state.
#[derive(Debug, Clone, Copy, Default)]
pub struct ComponentContext {
    focused: bool,
}

impl ComponentContext {
    pub const fn new(focused: bool) -> Self {
        Self { focused }
    }

    /// Whether the enclosing window (or page region) currently has focus.
    pub const fn focused(&self) -> bool {
        self.focused
    }
}

/// A renderable content payload.
///
/// Windows treat their body as opaque except for the interactive-element
/// contract used by the keyboard focus trap: `interactive_count` is
/// re-queried on every Tab press (content may change between presses), and
/// `focused_slot` addresses elements in document order. All defaults describe
/// a purely static body, for which the trap degrades to a no-op.
pub trait Component {
    fn render(&mut self, frame: &mut UiFrame<'_>, area: Rect, ctx: &ComponentContext);

    fn handle_event(&mut self, _event: &Event, _ctx: &ComponentContext) -> bool {
        false
    }

    /// Number of interactive elements currently inside this component.
    fn interactive_count(&self) -> usize {
        0
    }

    fn focused_slot(&self) -> Option<usize> {
        None
    }

    fn set_focused_slot(&mut self, _slot: Option<usize>) {}

    /// True once when an element inside the body asked to close the owning
    /// window (e.g. a Cancel button). Drained by the window after each event.
    fn take_close_request(&mut self) -> bool {
        false
    }
}

/// Body with no content at all; useful as a placeholder and in tests.
#[derive(Debug, Default, Clone, Copy)]
pub struct EmptyBody;

impl Component for EmptyBody {
    fn render(&mut self, _frame: &mut UiFrame<'_>, _area: Rect, _ctx: &ComponentContext) {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    #[test]
    fn default_component_is_inert() {
        let mut body = EmptyBody;
        assert_eq!(body.interactive_count(), 0);
        assert_eq!(body.focused_slot(), None);
        assert!(!body.take_close_request());
        assert!(!body.handle_event(
            &Event::Key(KeyEvent::new(KeyCode::Char('a'), KeyModifiers::NONE)),
            &ComponentContext::default()
        ));
    }
}
