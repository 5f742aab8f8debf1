use std::collections::BTreeMap;
use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use crossterm::event::{Event, KeyEventKind};
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use float_wm::components::{
    Component, ComponentContext, FormComponent, FormField, MarkdownViewComponent, Notification,
    NotificationKind, NotificationListComponent, TaskItem, TaskListComponent,
};
use float_wm::drivers::{ConsoleInputDriver, ConsoleOutputDriver, InputDriver, OutputDriver};
use float_wm::error;
use float_wm::event_loop::{ControlFlow, EventLoop};
use float_wm::help::EMBEDDED_HELP;
use float_wm::keybindings::{Action, KeyBindings};
use float_wm::state::{DashboardState, ModalKind};
use float_wm::theme;
use float_wm::tracing_sub;
use float_wm::ui::UiFrame;
use float_wm::window::{FloatingWindow, Size, WindowId, WindowStack};

#[derive(Parser, Debug)]
#[command(
    name = "float-wm",
    version = env!("CARGO_PKG_VERSION"),
    about = "Dashboard demo hosting draggable, stacking floating windows"
)]
struct Cli {
    /// Target redraw rate.
    #[arg(short = 'f', long = "fps", value_name = "FPS", default_value_t = 60.0)]
    fps: f64,

    /// Append debug logs to this file (FLOAT_WM_LOG is honored too).
    #[arg(long = "log", value_name = "PATH")]
    log: Option<PathBuf>,

    /// Keyboard only; do not capture the mouse.
    #[arg(long = "no-mouse")]
    no_mouse: bool,
}

impl Cli {
    fn poll_interval(&self) -> Duration {
        let fps = self.fps.clamp(1.0, 240.0);
        Duration::from_secs_f64(1.0 / fps)
    }
}

fn main() -> error::Result<()> {
    let cli = Cli::parse();
    match &cli.log {
        Some(path) => tracing_sub::init(Some(path))?,
        None => tracing_sub::init_default()?,
    }

    let mut app = DashboardApp::new();
    let mut output = ConsoleOutputDriver::new()?;
    output.enter()?;
    let mut input = ConsoleInputDriver::new();
    input.set_mouse_capture(!cli.no_mouse)?;

    let result = EventLoop::new(&mut input, cli.poll_interval()).run(|_, event| {
        if let Some(event) = event {
            app.handle_event(&event);
        }
        if app.quit {
            return Ok(ControlFlow::Quit);
        }
        output.draw(|mut frame| app.render(&mut frame))?;
        Ok(ControlFlow::Continue)
    });

    output.exit()?;
    result?;
    Ok(())
}

struct DashboardApp {
    bindings: KeyBindings,
    state: DashboardState,
    stack: WindowStack,
    tasks: TaskListComponent,
    open_windows: BTreeMap<WindowId, ModalKind>,
    quit: bool,
}

impl DashboardApp {
    fn new() -> Self {
        let mut tasks = TaskListComponent::new("Task Management");
        tasks.set_items(vec![
            TaskItem::new("Review project requirements", false),
            TaskItem::new("Design movable window component", true),
            TaskItem::new("Implement drag functionality", true),
            TaskItem::new("Add responsive layout", false),
            TaskItem::new("Write documentation", false),
        ]);
        Self {
            bindings: KeyBindings::default(),
            state: DashboardState::new(),
            stack: WindowStack::new(),
            tasks,
            open_windows: BTreeMap::new(),
            quit: false,
        }
    }

    fn open_modal(&mut self, kind: ModalKind) {
        if self.state.is_open(kind) {
            return;
        }
        self.state.set_open(kind, true);
        let id = self.stack.allocate_id();
        self.stack.open(build_window(id, kind));
        self.open_windows.insert(id, kind);
    }

    fn close_modal(&mut self, kind: ModalKind) {
        if !self.state.is_open(kind) {
            return;
        }
        self.state.set_open(kind, false);
        if let Some(id) = self
            .open_windows
            .iter()
            .find(|(_, open_kind)| **open_kind == kind)
            .map(|(id, _)| *id)
        {
            self.open_windows.remove(&id);
            self.stack.close(id);
        }
    }

    fn drain_close_requests(&mut self) {
        for id in self.stack.take_close_requests() {
            if let Some(kind) = self.open_windows.get(&id).copied() {
                tracing::debug!(window = %id, "owner closing window");
                self.close_modal(kind);
            }
        }
    }

    fn handle_event(&mut self, event: &Event) {
        // quit works even while a window holds the keyboard
        if let Event::Key(key) = event
            && key.kind == KeyEventKind::Press
            && self.bindings.matches(Action::Quit, key)
        {
            self.quit = true;
            return;
        }

        let consumed = self.stack.handle_event(event);
        self.drain_close_requests();
        if consumed {
            return;
        }

        match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                match self.bindings.action_for_key(key) {
                    Some(Action::OpenSettings) => self.open_modal(ModalKind::Settings),
                    Some(Action::OpenProfile) => self.open_modal(ModalKind::Profile),
                    Some(Action::OpenNotifications) => self.open_modal(ModalKind::Notifications),
                    Some(Action::OpenHelp) => self.open_modal(ModalKind::Help),
                    Some(Action::OpenAll) => {
                        // deterministic call order, no batching
                        for kind in ModalKind::ALL {
                            self.open_modal(kind);
                        }
                    }
                    Some(Action::CloseAll) => {
                        for kind in ModalKind::ALL {
                            self.close_modal(kind);
                        }
                    }
                    Some(Action::TaskUp) => self.tasks.move_selection(-1),
                    Some(Action::TaskDown) => self.tasks.move_selection(1),
                    Some(Action::ToggleTask) => {
                        self.tasks.toggle_selected();
                    }
                    _ => {}
                }
            }
            Event::Mouse(_) => {
                // the page stays interactive behind the windows
                let ctx = ComponentContext::new(true);
                self.tasks.handle_event(event, &ctx);
            }
            _ => {}
        }
    }

    fn render(&mut self, frame: &mut UiFrame<'_>) {
        let area = frame.area();
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),
                Constraint::Length(5),
                Constraint::Min(5),
                Constraint::Length(1),
            ])
            .split(area);

        self.render_header(frame, rows[0]);
        self.render_cards(frame, rows[1]);
        let page_focused = self.stack.registry().focused_id().is_none();
        self.tasks
            .render(frame, rows[2], &ComponentContext::new(page_focused));
        self.render_footer(frame, rows[3]);

        self.stack.render(frame);
    }

    fn render_header(&self, frame: &mut UiFrame<'_>, area: Rect) {
        let line = Line::from(vec![
            Span::styled(
                "Project Dashboard",
                Style::default()
                    .fg(theme::page_title_fg())
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!("   open windows: {}", self.state.open_count()),
                Style::default().fg(theme::hint_fg()),
            ),
        ]);
        frame.render_widget(Paragraph::new(line), area);
    }

    fn render_cards(&self, frame: &mut UiFrame<'_>, area: Rect) {
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage(34),
                Constraint::Percentage(33),
                Constraint::Percentage(33),
            ])
            .split(area);

        let total = self.tasks.items().len();
        let completed = self.tasks.completed_count();
        render_card(
            frame,
            columns[0],
            "Project Overview",
            vec![
                Line::from(format!("Total tasks    {total}")),
                Line::from(vec![
                    Span::raw("Completed      "),
                    Span::styled(completed.to_string(), Style::default().fg(theme::success_fg())),
                ]),
                Line::from(vec![
                    Span::raw("Remaining      "),
                    Span::styled(
                        (total - completed).to_string(),
                        Style::default().fg(theme::pending_fg()),
                    ),
                ]),
            ],
        );
        render_card(
            frame,
            columns[1],
            "Quick Actions",
            vec![
                Line::from("s  open settings"),
                Line::from("h  help & support"),
                Line::from("n  view notifications"),
            ],
        );
        let enabled = Style::default().fg(theme::success_fg());
        render_card(
            frame,
            columns[2],
            "System Status",
            vec![
                Line::from(vec![
                    Span::raw("Window stack   "),
                    Span::styled("active", enabled),
                ]),
                Line::from(vec![
                    Span::raw("Drag & drop    "),
                    Span::styled("enabled", enabled),
                ]),
                Line::from(vec![
                    Span::raw("Mouse input    "),
                    Span::styled("ready", enabled),
                ]),
            ],
        );
    }

    fn render_footer(&self, frame: &mut UiFrame<'_>, area: Rect) {
        let hints = [
            "s/p/n/h open",
            "o all",
            "c close all",
            "Esc closes active",
            "Ctrl+Q quit",
        ];
        let line = Line::from(Span::styled(
            hints.join("  \u{2502}  "),
            Style::default().fg(theme::hint_fg()),
        ));
        frame.render_widget(Paragraph::new(line), area);
    }
}

fn render_card(frame: &mut UiFrame<'_>, area: Rect, title: &str, lines: Vec<Line<'_>>) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(title)
        .border_style(Style::default().fg(theme::card_border()));
    let inner = block.inner(area);
    frame.render_widget(block, area);
    if inner.width > 0 && inner.height > 0 {
        frame.render_widget(Paragraph::new(lines), inner);
    }
}

fn build_window(id: WindowId, kind: ModalKind) -> FloatingWindow {
    let base = FloatingWindow::new(id, kind.title(), kind.initial_position());
    match kind {
        ModalKind::Settings => {
            let form = FormComponent::new()
                .with_field(FormField::select(
                    "Theme",
                    vec!["Light".into(), "Dark".into(), "Auto".into()],
                    0,
                ))
                .with_field(FormField::checkbox("Email notifications", true))
                .with_field(FormField::checkbox("Push notifications", false))
                .with_field(FormField::close_button("Cancel"))
                .with_field(FormField::button("Save Changes"));
            base.with_size(Size::new(42, 11)).with_body(Box::new(form))
        }
        ModalKind::Profile => {
            let form = FormComponent::new()
                .with_field(FormField::input("Email", "alex.jensen@example.com"))
                .with_field(FormField::input("Role", "Frontend Developer"))
                .with_field(FormField::input("Department", "Engineering"))
                .with_field(FormField::close_button("Close"))
                .with_field(FormField::button("Update Profile"));
            base.with_size(Size::new(44, 11)).with_body(Box::new(form))
        }
        ModalKind::Notifications => {
            let list = NotificationListComponent::new(vec![
                Notification::new("New message received", "2 minutes ago", NotificationKind::Message),
                Notification::new("Task completed", "5 minutes ago", NotificationKind::Success),
                Notification::new("System update available", "1 hour ago", NotificationKind::Info),
                Notification::new("Meeting reminder", "2 hours ago", NotificationKind::Reminder),
            ]);
            base.with_size(Size::new(46, 11)).with_body(Box::new(list))
        }
        ModalKind::Help => {
            let view =
                MarkdownViewComponent::from_bytes(EMBEDDED_HELP.content).with_dismiss_button("Got it");
            base.with_size(Size::new(52, 18)).with_body(Box::new(view))
        }
    }
}
