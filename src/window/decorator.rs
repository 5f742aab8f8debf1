//! Window chrome: border, header row, close control, and the hit test that
//! maps pointer positions onto header actions.

use ratatui::prelude::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::widgets::{Block, Borders, Clear};

use super::rect_contains;
use crate::constants::{MIN_WINDOW_HEIGHT, MIN_WINDOW_WIDTH};
use crate::theme;
use crate::ui::{UiFrame, safe_set_string};

/// Close control as painted at the right edge of the header row.
const CLOSE_CONTROL: &str = "[x]";

/// What a pointer press on a window's chrome means.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderAction {
    /// Press landed in the header drag region; a drag gesture may start.
    Drag,
    /// Press landed on the close control.
    Close,
    /// Press landed on the window but outside the header (body or border).
    None,
}

/// Header row: the first row inside the top border.
fn header_y(rect: Rect) -> u16 {
    rect.y.saturating_add(1)
}

fn header_span(rect: Rect) -> Rect {
    Rect {
        x: rect.x.saturating_add(1),
        y: header_y(rect),
        width: rect.width.saturating_sub(2),
        height: 1,
    }
}

fn close_rect(rect: Rect) -> Rect {
    let header = header_span(rect);
    let len = CLOSE_CONTROL.len() as u16;
    if header.width < len {
        return Rect::default();
    }
    Rect {
        x: header.x + header.width - len,
        y: header.y,
        width: len,
        height: 1,
    }
}

/// Content area inside border and header. Collapses to zero when the window
/// is below the minimum renderable size.
pub fn content_area(rect: Rect) -> Rect {
    if rect.width < MIN_WINDOW_WIDTH || rect.height < MIN_WINDOW_HEIGHT {
        return Rect::default();
    }
    Rect {
        x: rect.x + 1,
        y: rect.y + 2,
        width: rect.width.saturating_sub(2),
        height: rect.height.saturating_sub(3),
    }
}

/// Classify a pointer press at `(x, y)` against the window at `rect`.
pub fn hit_test(rect: Rect, x: u16, y: u16) -> HeaderAction {
    if !rect_contains(rect, x, y) {
        return HeaderAction::None;
    }
    if rect_contains(close_rect(rect), x, y) {
        return HeaderAction::Close;
    }
    if rect_contains(header_span(rect), x, y) {
        return HeaderAction::Drag;
    }
    HeaderAction::None
}

/// Paint border, header background, title, and close control. Callers render
/// windows bottom-to-top, so higher windows simply overpaint lower ones.
pub fn render_chrome(frame: &mut UiFrame<'_>, rect: Rect, title: &str, focused: bool, dragging: bool) {
    if rect.width == 0 || rect.height == 0 {
        return;
    }
    frame.render_widget(Clear, rect);

    let border_style = if focused {
        Style::default().fg(theme::focused_border())
    } else {
        Style::default().fg(theme::border())
    };
    let block = Block::default().borders(Borders::ALL).border_style(border_style);
    frame.render_widget(block, rect);

    let header = header_span(rect);
    if header.width == 0 {
        return;
    }
    let header_style = if focused {
        Style::default()
            .bg(theme::focused_header_bg())
            .fg(theme::focused_header_fg())
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default()
            .bg(theme::header_bg())
            .fg(theme::header_fg())
    };

    let bounds = frame.area();
    let buffer = frame.buffer_mut();
    for x in header.x..header.x.saturating_add(header.width) {
        if let Some(cell) = buffer.cell_mut((x, header.y)) {
            cell.set_symbol(" ");
            cell.set_style(header_style);
        }
    }

    let label = if dragging {
        format!("{title} *")
    } else if focused {
        format!("{title} \u{2022}")
    } else {
        title.to_string()
    };
    let close = close_rect(rect);
    let title_width = header.width.saturating_sub(close.width.saturating_add(1));
    if title_width > 0 {
        safe_set_string(
            buffer,
            bounds,
            header.x.saturating_add(1),
            header.y,
            &label,
            header_style,
        );
    }
    if close.width > 0 {
        safe_set_string(buffer, bounds, close.x, close.y, CLOSE_CONTROL, header_style);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rect() -> Rect {
        Rect {
            x: 10,
            y: 5,
            width: 30,
            height: 10,
        }
    }

    #[test]
    fn hit_test_header_regions() {
        let r = rect();
        // header drag region sits on row y+1, inside the border
        assert_eq!(hit_test(r, 12, 6), HeaderAction::Drag);
        // rightmost header cells are the close control
        assert_eq!(hit_test(r, 38, 6), HeaderAction::Close);
        assert_eq!(hit_test(r, 36, 6), HeaderAction::Close);
        // body presses are not header actions
        assert_eq!(hit_test(r, 12, 8), HeaderAction::None);
        // outside the window entirely
        assert_eq!(hit_test(r, 9, 6), HeaderAction::None);
        assert_eq!(hit_test(r, 12, 20), HeaderAction::None);
    }

    #[test]
    fn content_area_insets_chrome() {
        let area = content_area(rect());
        assert_eq!(
            area,
            Rect {
                x: 11,
                y: 7,
                width: 28,
                height: 7,
            }
        );
    }

    #[test]
    fn chrome_paints_title_and_close_control() {
        use crate::ui::UiFrame;
        use ratatui::buffer::Buffer;

        let area = Rect {
            x: 0,
            y: 0,
            width: 40,
            height: 12,
        };
        let mut buf = Buffer::empty(area);
        {
            let mut frame = UiFrame::from_parts(area, &mut buf);
            let window = Rect {
                x: 2,
                y: 1,
                width: 30,
                height: 8,
            };
            render_chrome(&mut frame, window, "Settings", true, false);
        }
        // title starts one cell into the header row
        assert!(buf.cell((4, 2)).unwrap().symbol().starts_with('S'));
        // close control sits at the right end of the header
        assert_eq!(buf.cell((28, 2)).unwrap().symbol(), "[");
        assert_eq!(buf.cell((29, 2)).unwrap().symbol(), "x");
        assert_eq!(buf.cell((30, 2)).unwrap().symbol(), "]");
    }

    #[test]
    fn content_area_collapses_below_minimum() {
        let tiny = Rect {
            x: 0,
            y: 0,
            width: 4,
            height: 2,
        };
        assert_eq!(content_area(tiny), Rect::default());
    }
}
