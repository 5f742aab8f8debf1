use crossterm::event::{Event, KeyCode, KeyEventKind, MouseEventKind};
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::components::{Component, ComponentContext};
use crate::theme;
use crate::ui::{UiFrame, safe_set_string};
use crate::window::rect_contains;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Message,
    Success,
    Info,
    Reminder,
}

impl NotificationKind {
    fn bullet_color(self) -> ratatui::style::Color {
        match self {
            NotificationKind::Message => theme::message_fg(),
            NotificationKind::Success => theme::success_fg(),
            NotificationKind::Info => theme::info_fg(),
            NotificationKind::Reminder => theme::reminder_fg(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Notification {
    pub title: String,
    pub time: String,
    pub kind: NotificationKind,
}

impl Notification {
    pub fn new(title: impl Into<String>, time: impl Into<String>, kind: NotificationKind) -> Self {
        Self {
            title: title.into(),
            time: time.into(),
            kind,
        }
    }
}

const MARK_READ_LABEL: &str = "[ Mark All Read ]";

/// Read-only notification rows with a single interactive element: the
/// mark-all-read button, which asks the owning window to close.
#[derive(Debug, Default)]
pub struct NotificationListComponent {
    items: Vec<Notification>,
    focused_slot: Option<usize>,
    close_requested: bool,
    button_rect: Rect,
}

impl NotificationListComponent {
    pub fn new(items: Vec<Notification>) -> Self {
        Self {
            items,
            ..Self::default()
        }
    }

    pub fn items(&self) -> &[Notification] {
        &self.items
    }

    fn activate(&mut self) -> bool {
        self.close_requested = true;
        true
    }
}

impl Component for NotificationListComponent {
    fn render(&mut self, frame: &mut UiFrame<'_>, area: Rect, ctx: &ComponentContext) {
        if area.width == 0 || area.height == 0 {
            return;
        }
        let rows: Vec<Line> = self
            .items
            .iter()
            .map(|item| {
                Line::from(vec![
                    Span::styled(
                        "\u{25cf} ",
                        Style::default().fg(item.kind.bullet_color()),
                    ),
                    Span::raw(item.title.clone()),
                    Span::styled(
                        format!("  {}", item.time),
                        Style::default().fg(theme::hint_fg()),
                    ),
                ])
            })
            .collect();
        let list_area = Rect {
            height: area.height.saturating_sub(2),
            ..area
        };
        frame.render_widget(Paragraph::new(rows), list_area);

        let button_y = area.y + area.height.saturating_sub(1);
        let focused_here = ctx.focused() && self.focused_slot == Some(0);
        let style = if focused_here {
            Style::default()
                .bg(theme::element_focus_bg())
                .fg(theme::element_focus_fg())
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default()
        };
        self.button_rect = Rect {
            x: area.x,
            y: button_y,
            width: (MARK_READ_LABEL.len() as u16).min(area.width),
            height: 1,
        };
        let bounds = frame.area();
        safe_set_string(
            frame.buffer_mut(),
            bounds,
            area.x,
            button_y,
            MARK_READ_LABEL,
            style,
        );
    }

    fn handle_event(&mut self, event: &Event, _ctx: &ComponentContext) -> bool {
        match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                if self.focused_slot == Some(0)
                    && matches!(key.code, KeyCode::Enter | KeyCode::Char(' '))
                {
                    return self.activate();
                }
                false
            }
            Event::Mouse(mouse) if matches!(mouse.kind, MouseEventKind::Down(_)) => {
                if rect_contains(self.button_rect, mouse.column, mouse.row) {
                    self.focused_slot = Some(0);
                    return self.activate();
                }
                false
            }
            _ => false,
        }
    }

    fn interactive_count(&self) -> usize {
        1
    }

    fn focused_slot(&self) -> Option<usize> {
        self.focused_slot
    }

    fn set_focused_slot(&mut self, slot: Option<usize>) {
        self.focused_slot = slot;
    }

    fn take_close_request(&mut self) -> bool {
        std::mem::take(&mut self.close_requested)
    }
}
