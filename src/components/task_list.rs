use crossterm::event::{Event, KeyCode, KeyEventKind, MouseEventKind};
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::widgets::{Block, Borders, List, ListItem};

use crate::components::{Component, ComponentContext};
use crate::theme;
use crate::ui::UiFrame;
use crate::window::rect_contains;

#[derive(Debug, Clone)]
pub struct TaskItem {
    pub title: String,
    pub completed: bool,
}

impl TaskItem {
    pub fn new(title: impl Into<String>, completed: bool) -> Self {
        Self {
            title: title.into(),
            completed,
        }
    }
}

/// Checkbox rows inside a bordered block. Each row is one interactive
/// element; pointer presses toggle rows directly.
pub struct TaskListComponent {
    title: String,
    items: Vec<TaskItem>,
    focused_slot: Option<usize>,
    inner: Rect,
}

impl TaskListComponent {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            items: Vec::new(),
            focused_slot: Some(0),
            inner: Rect::default(),
        }
    }

    pub fn set_items(&mut self, items: Vec<TaskItem>) {
        self.items = items;
        if let Some(slot) = self.focused_slot
            && slot >= self.items.len()
        {
            self.focused_slot = Some(self.items.len().saturating_sub(1));
        }
    }

    pub fn items(&self) -> &[TaskItem] {
        &self.items
    }

    pub fn completed_count(&self) -> usize {
        self.items.iter().filter(|item| item.completed).count()
    }

    pub fn move_selection(&mut self, delta: isize) {
        if self.items.is_empty() {
            return;
        }
        let current = self.focused_slot.unwrap_or(0);
        let next = if delta.is_negative() {
            current.saturating_sub(delta.unsigned_abs())
        } else {
            (current + delta as usize).min(self.items.len() - 1)
        };
        self.focused_slot = Some(next);
    }

    pub fn toggle_selected(&mut self) -> bool {
        let Some(slot) = self.focused_slot else {
            return false;
        };
        self.toggle(slot)
    }

    fn toggle(&mut self, index: usize) -> bool {
        if let Some(item) = self.items.get_mut(index) {
            item.completed = !item.completed;
            return true;
        }
        false
    }
}

impl Component for TaskListComponent {
    fn render(&mut self, frame: &mut UiFrame<'_>, area: Rect, ctx: &ComponentContext) {
        let block = Block::default()
            .borders(Borders::ALL)
            .title(self.title.as_str())
            .border_style(Style::default().fg(theme::card_border()));
        let inner = block.inner(area);
        self.inner = inner;
        frame.render_widget(block, area);
        if inner.width == 0 || inner.height == 0 {
            return;
        }

        let rows: Vec<ListItem> = self
            .items
            .iter()
            .enumerate()
            .take(inner.height as usize)
            .map(|(idx, item)| {
                let marker = if item.completed { "[x]" } else { "[ ]" };
                let mut style = Style::default();
                if item.completed {
                    style = style
                        .fg(theme::done_fg())
                        .add_modifier(Modifier::CROSSED_OUT);
                }
                if ctx.focused() && self.focused_slot == Some(idx) {
                    style = style
                        .bg(theme::element_focus_bg())
                        .fg(theme::element_focus_fg());
                }
                ListItem::new(format!("{marker} {}", item.title)).style(style)
            })
            .collect();
        frame.render_widget(List::new(rows), inner);
    }

    fn handle_event(&mut self, event: &Event, _ctx: &ComponentContext) -> bool {
        match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => match key.code {
                KeyCode::Up => {
                    self.move_selection(-1);
                    true
                }
                KeyCode::Down => {
                    self.move_selection(1);
                    true
                }
                KeyCode::Char(' ') | KeyCode::Enter => self.toggle_selected(),
                _ => false,
            },
            Event::Mouse(mouse) if matches!(mouse.kind, MouseEventKind::Down(_)) => {
                if !rect_contains(self.inner, mouse.column, mouse.row) {
                    return false;
                }
                let idx = usize::from(mouse.row - self.inner.y);
                if idx >= self.items.len() {
                    return false;
                }
                self.focused_slot = Some(idx);
                self.toggle(idx)
            }
            _ => false,
        }
    }

    fn interactive_count(&self) -> usize {
        self.items.len()
    }

    fn focused_slot(&self) -> Option<usize> {
        self.focused_slot
    }

    fn set_focused_slot(&mut self, slot: Option<usize>) {
        self.focused_slot = slot;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyEvent, KeyModifiers};

    fn sample() -> TaskListComponent {
        let mut list = TaskListComponent::new("Task Management");
        list.set_items(vec![
            TaskItem::new("Review project requirements", false),
            TaskItem::new("Design movable window component", true),
            TaskItem::new("Implement drag functionality", true),
        ]);
        list
    }

    #[test]
    fn selection_moves_within_bounds() {
        let mut list = sample();
        list.move_selection(1);
        assert_eq!(list.focused_slot(), Some(1));
        list.move_selection(10);
        assert_eq!(list.focused_slot(), Some(2));
        list.move_selection(-10);
        assert_eq!(list.focused_slot(), Some(0));
    }

    #[test]
    fn toggling_flips_completion() {
        let mut list = sample();
        assert_eq!(list.completed_count(), 2);
        assert!(list.toggle_selected());
        assert_eq!(list.completed_count(), 3);
        let ctx = ComponentContext::new(true);
        assert!(list.handle_event(
            &Event::Key(KeyEvent::new(KeyCode::Char(' '), KeyModifiers::NONE)),
            &ctx,
        ));
        assert_eq!(list.completed_count(), 2);
    }

    #[test]
    fn empty_list_is_inert() {
        let mut list = TaskListComponent::new("empty");
        list.set_items(Vec::new());
        assert!(!list.toggle_selected());
        assert_eq!(list.interactive_count(), 0);
    }
}
