use ratatui::style::Color;

// Centralized theme colors. Kept as small helpers so call sites stay
// uniform and a future palette swap touches one file.

// Window chrome
pub fn focused_header_bg() -> Color {
    Color::Blue
}
pub fn focused_header_fg() -> Color {
    Color::White
}
pub fn header_bg() -> Color {
    Color::DarkGray
}
pub fn header_fg() -> Color {
    Color::White
}
pub fn focused_border() -> Color {
    Color::Blue
}
pub fn border() -> Color {
    Color::DarkGray
}

// Page
pub fn page_title_fg() -> Color {
    Color::White
}
pub fn hint_fg() -> Color {
    Color::DarkGray
}
pub fn card_border() -> Color {
    Color::DarkGray
}

// Status indicators
pub fn success_fg() -> Color {
    Color::Green
}
pub fn pending_fg() -> Color {
    Color::Yellow
}

// Notification kind bullets
pub fn message_fg() -> Color {
    Color::Blue
}
pub fn info_fg() -> Color {
    Color::Yellow
}
pub fn reminder_fg() -> Color {
    Color::Magenta
}

// Interactive elements
pub fn element_focus_bg() -> Color {
    Color::Blue
}
pub fn element_focus_fg() -> Color {
    Color::White
}
pub fn done_fg() -> Color {
    Color::DarkGray
}
