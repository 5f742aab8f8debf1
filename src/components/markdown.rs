use crossterm::event::{Event, KeyCode, KeyEventKind, MouseEventKind};
use pulldown_cmark::{Event as MdEvent, Options, Parser, Tag, TagEnd};
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Wrap};

use crate::components::{Component, ComponentContext};
use crate::theme;
use crate::ui::{UiFrame, safe_set_string};
use crate::window::rect_contains;

/// Static markdown content (headings, emphasis, bullet lists) with an
/// optional dismiss button as its only interactive element.
#[derive(Debug, Default)]
pub struct MarkdownViewComponent {
    lines: Vec<Line<'static>>,
    dismiss_label: Option<String>,
    focused_slot: Option<usize>,
    close_requested: bool,
    button_rect: Rect,
}

impl MarkdownViewComponent {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_bytes(bytes: &[u8]) -> Self {
        let mut view = Self::new();
        if let Ok(raw) = std::str::from_utf8(bytes) {
            view.set_markdown(raw);
        }
        view
    }

    pub fn with_dismiss_button(mut self, label: impl Into<String>) -> Self {
        self.dismiss_label = Some(format!("[ {} ]", label.into()));
        self
    }

    pub fn set_markdown(&mut self, raw: &str) {
        let parser = Parser::new_ext(raw, Options::all());
        let mut lines: Vec<Line<'static>> = Vec::new();
        let mut current: Vec<Span<'static>> = Vec::new();
        let mut bold = false;

        let flush = |lines: &mut Vec<Line<'static>>, current: &mut Vec<Span<'static>>| {
            if !current.is_empty() {
                lines.push(Line::from(std::mem::take(current)));
            }
        };

        for event in parser {
            match event {
                MdEvent::Start(Tag::Heading { .. }) => {
                    flush(&mut lines, &mut current);
                    bold = true;
                }
                MdEvent::End(TagEnd::Heading(_)) => {
                    flush(&mut lines, &mut current);
                    lines.push(Line::default());
                    bold = false;
                }
                MdEvent::Start(Tag::Strong) => bold = true,
                MdEvent::End(TagEnd::Strong) => bold = false,
                MdEvent::Start(Tag::Item) => current.push(Span::raw("- ")),
                MdEvent::End(TagEnd::Item) => flush(&mut lines, &mut current),
                MdEvent::End(TagEnd::Paragraph) => {
                    flush(&mut lines, &mut current);
                    lines.push(Line::default());
                }
                MdEvent::Text(text) | MdEvent::Code(text) => {
                    let style = if bold {
                        Style::default().add_modifier(Modifier::BOLD)
                    } else {
                        Style::default()
                    };
                    current.push(Span::styled(text.to_string(), style));
                }
                MdEvent::SoftBreak | MdEvent::HardBreak => flush(&mut lines, &mut current),
                _ => {}
            }
        }
        flush(&mut lines, &mut current);
        while lines.last().is_some_and(|line| line.spans.is_empty()) {
            lines.pop();
        }
        self.lines = lines;
    }

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    fn activate(&mut self) -> bool {
        if self.dismiss_label.is_some() {
            self.close_requested = true;
            return true;
        }
        false
    }
}

impl Component for MarkdownViewComponent {
    fn render(&mut self, frame: &mut UiFrame<'_>, area: Rect, ctx: &ComponentContext) {
        if area.width == 0 || area.height == 0 {
            return;
        }
        let reserved = if self.dismiss_label.is_some() { 2 } else { 0 };
        let text_area = Rect {
            height: area.height.saturating_sub(reserved),
            ..area
        };
        frame.render_widget(
            Paragraph::new(self.lines.clone()).wrap(Wrap { trim: false }),
            text_area,
        );

        let Some(label) = self.dismiss_label.clone() else {
            self.button_rect = Rect::default();
            return;
        };
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
            width: (label.len() as u16).min(area.width),
            height: 1,
        };
        let bounds = frame.area();
        safe_set_string(frame.buffer_mut(), bounds, area.x, button_y, &label, style);
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
        usize::from(self.dismiss_label.is_some())
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
