use crossterm::event::{Event, KeyCode, KeyEventKind, KeyModifiers, MouseEventKind};
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};

use crate::components::{Component, ComponentContext};
use crate::theme;
use crate::ui::{UiFrame, safe_set_string};
use crate::window::rect_contains;

/// One labelled form row. Every field is one interactive element for the
/// enclosing window's focus trap.
#[derive(Debug, Clone)]
pub enum FormField {
    Input {
        label: String,
        value: String,
    },
    Checkbox {
        label: String,
        checked: bool,
    },
    Select {
        label: String,
        options: Vec<String>,
        selected: usize,
    },
    Button {
        label: String,
        closes: bool,
    },
}

impl FormField {
    pub fn input(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self::Input {
            label: label.into(),
            value: value.into(),
        }
    }

    pub fn checkbox(label: impl Into<String>, checked: bool) -> Self {
        Self::Checkbox {
            label: label.into(),
            checked,
        }
    }

    pub fn select(label: impl Into<String>, options: Vec<String>, selected: usize) -> Self {
        let selected = selected.min(options.len().saturating_sub(1));
        Self::Select {
            label: label.into(),
            options,
            selected,
        }
    }

    pub fn button(label: impl Into<String>) -> Self {
        Self::Button {
            label: label.into(),
            closes: false,
        }
    }

    /// A button that asks the owning window to close when activated.
    pub fn close_button(label: impl Into<String>) -> Self {
        Self::Button {
            label: label.into(),
            closes: true,
        }
    }

    fn display(&self) -> String {
        match self {
            FormField::Input { label, value } => format!("{label}: {value}_"),
            FormField::Checkbox { label, checked } => {
                let marker = if *checked { "[x]" } else { "[ ]" };
                format!("{marker} {label}")
            }
            FormField::Select {
                label,
                options,
                selected,
            } => {
                let current = options.get(*selected).map(String::as_str).unwrap_or("");
                format!("{label}: < {current} >")
            }
            FormField::Button { label, .. } => format!("[ {label} ]"),
        }
    }
}

/// A column of form rows: text inputs, checkboxes, option selectors, and
/// buttons. Field rows double as the hit-test targets for pointer presses.
#[derive(Debug, Default)]
pub struct FormComponent {
    fields: Vec<FormField>,
    focused_slot: Option<usize>,
    close_requested: bool,
    row_area: Rect,
}

impl FormComponent {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, field: FormField) {
        self.fields.push(field);
    }

    pub fn with_field(mut self, field: FormField) -> Self {
        self.push(field);
        self
    }

    pub fn field(&self, index: usize) -> Option<&FormField> {
        self.fields.get(index)
    }

    pub fn fields(&self) -> &[FormField] {
        &self.fields
    }

    fn activate(&mut self, slot: usize) -> bool {
        match self.fields.get_mut(slot) {
            Some(FormField::Checkbox { checked, .. }) => {
                *checked = !*checked;
                true
            }
            Some(FormField::Select {
                options, selected, ..
            }) => {
                if !options.is_empty() {
                    *selected = (*selected + 1) % options.len();
                }
                true
            }
            Some(FormField::Button { closes, .. }) => {
                if *closes {
                    self.close_requested = true;
                }
                true
            }
            _ => false,
        }
    }

    fn handle_key(&mut self, code: KeyCode) -> bool {
        let Some(slot) = self.focused_slot else {
            return false;
        };
        // text inputs see Char events first so a space types rather than
        // activates
        if let Some(FormField::Input { value, .. }) = self.fields.get_mut(slot) {
            return match code {
                KeyCode::Char(c) => {
                    value.push(c);
                    true
                }
                KeyCode::Backspace => {
                    value.pop();
                    true
                }
                _ => false,
            };
        }
        match code {
            KeyCode::Enter | KeyCode::Char(' ') => self.activate(slot),
            KeyCode::Left => {
                if let Some(FormField::Select { selected, .. }) = self.fields.get_mut(slot) {
                    *selected = selected.saturating_sub(1);
                    true
                } else {
                    false
                }
            }
            KeyCode::Right => {
                if let Some(FormField::Select {
                    options, selected, ..
                }) = self.fields.get_mut(slot)
                {
                    if !options.is_empty() {
                        *selected = (*selected + 1).min(options.len() - 1);
                    }
                    true
                } else {
                    false
                }
            }
            _ => false,
        }
    }
}

impl Component for FormComponent {
    fn render(&mut self, frame: &mut UiFrame<'_>, area: Rect, ctx: &ComponentContext) {
        self.row_area = area;
        let bounds = frame.area();
        let buffer = frame.buffer_mut();
        for (idx, field) in self.fields.iter().enumerate() {
            let y = area.y.saturating_add(idx as u16);
            if y >= area.y.saturating_add(area.height) {
                break;
            }
            let focused_here = ctx.focused() && self.focused_slot == Some(idx);
            let style = if focused_here {
                Style::default()
                    .bg(theme::element_focus_bg())
                    .fg(theme::element_focus_fg())
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            safe_set_string(buffer, bounds, area.x, y, &field.display(), style);
        }
    }

    fn handle_event(&mut self, event: &Event, _ctx: &ComponentContext) -> bool {
        match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                // chorded keys belong to the application, not to text entry
                if key
                    .modifiers
                    .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
                {
                    return false;
                }
                self.handle_key(key.code)
            }
            Event::Mouse(mouse) if matches!(mouse.kind, MouseEventKind::Down(_)) => {
                if !rect_contains(self.row_area, mouse.column, mouse.row) {
                    return false;
                }
                let idx = usize::from(mouse.row - self.row_area.y);
                if idx >= self.fields.len() {
                    return false;
                }
                self.focused_slot = Some(idx);
                self.activate(idx);
                true
            }
            _ => false,
        }
    }

    fn interactive_count(&self) -> usize {
        self.fields.len()
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

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyEvent, KeyModifiers};

    fn key(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn settings_form() -> FormComponent {
        FormComponent::new()
            .with_field(FormField::select(
                "Theme",
                vec!["Light".into(), "Dark".into(), "Auto".into()],
                0,
            ))
            .with_field(FormField::checkbox("Email notifications", true))
            .with_field(FormField::checkbox("Push notifications", false))
            .with_field(FormField::close_button("Cancel"))
            .with_field(FormField::button("Save Changes"))
    }

    #[test]
    fn checkbox_toggles_on_space_and_enter() {
        let mut form = settings_form();
        let ctx = ComponentContext::new(true);
        form.set_focused_slot(Some(1));
        assert!(form.handle_event(&key(KeyCode::Char(' ')), &ctx));
        assert!(matches!(
            form.field(1),
            Some(FormField::Checkbox { checked: false, .. })
        ));
        assert!(form.handle_event(&key(KeyCode::Enter), &ctx));
        assert!(matches!(
            form.field(1),
            Some(FormField::Checkbox { checked: true, .. })
        ));
    }

    #[test]
    fn select_cycles_with_arrows() {
        let mut form = settings_form();
        let ctx = ComponentContext::new(true);
        form.set_focused_slot(Some(0));
        assert!(form.handle_event(&key(KeyCode::Right), &ctx));
        assert!(matches!(
            form.field(0),
            Some(FormField::Select { selected: 1, .. })
        ));
        assert!(form.handle_event(&key(KeyCode::Left), &ctx));
        assert!(matches!(
            form.field(0),
            Some(FormField::Select { selected: 0, .. })
        ));
        // left at the first option stays put
        assert!(form.handle_event(&key(KeyCode::Left), &ctx));
        assert!(matches!(
            form.field(0),
            Some(FormField::Select { selected: 0, .. })
        ));
    }

    #[test]
    fn input_edits_text() {
        let mut form = FormComponent::new().with_field(FormField::input("Email", "a@b"));
        let ctx = ComponentContext::new(true);
        form.set_focused_slot(Some(0));
        assert!(form.handle_event(&key(KeyCode::Char('c')), &ctx));
        assert!(form.handle_event(&key(KeyCode::Backspace), &ctx));
        assert!(matches!(
            form.field(0),
            Some(FormField::Input { value, .. }) if value == "a@b"
        ));
    }

    #[test]
    fn close_button_requests_close_once() {
        let mut form = settings_form();
        let ctx = ComponentContext::new(true);
        form.set_focused_slot(Some(3));
        assert!(form.handle_event(&key(KeyCode::Enter), &ctx));
        assert!(form.take_close_request());
        assert!(!form.take_close_request());
        // the plain button does not request close
        form.set_focused_slot(Some(4));
        assert!(form.handle_event(&key(KeyCode::Enter), &ctx));
        assert!(!form.take_close_request());
    }

    #[test]
    fn nothing_happens_without_a_focused_slot() {
        let mut form = settings_form();
        let ctx = ComponentContext::new(true);
        assert!(!form.handle_event(&key(KeyCode::Enter), &ctx));
    }

    #[test]
    fn interactive_count_tracks_fields_dynamically() {
        let mut form = settings_form();
        assert_eq!(form.interactive_count(), 5);
        form.push(FormField::button("Extra"));
        assert_eq!(form.interactive_count(), 6);
    }
}
