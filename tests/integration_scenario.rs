//! End-to-end walk through the two-window interaction sequence: open two
//! windows, click the lower one, drag it, close it with Escape, and verify
//! the survivor is untouched.

use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use float_wm::components::{EmptyBody, FormComponent, FormField};
use float_wm::window::{FloatingWindow, Position, Size, WindowStack};

fn mouse(kind: MouseEventKind, column: u16, row: u16) -> Event {
    Event::Mouse(MouseEvent {
        kind,
        column,
        row,
        modifiers: KeyModifiers::NONE,
    })
}

fn key(code: KeyCode) -> Event {
    Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
}

#[test]
fn click_drag_escape_sequence() {
    let mut stack = WindowStack::new();
    stack.set_viewport(Size::new(400, 200));

    let a = stack.allocate_id();
    stack.open(FloatingWindow::new(a, "A", Position::new(100, 80)).with_size(Size::new(40, 12)));
    let b = stack.allocate_id();
    stack.open(FloatingWindow::new(b, "B", Position::new(320, 120)).with_size(Size::new(40, 12)));

    // B opened last: focused and above A
    assert_eq!(stack.registry().focused_id(), Some(b));
    assert!(stack.registry().stack_order(b) > stack.registry().stack_order(a));
    let b_order = stack.registry().stack_order(b).unwrap();

    // click A's body: A gains focus and a stacking value above B's
    assert!(stack.handle_event(&mouse(
        MouseEventKind::Down(MouseButton::Left),
        105,
        86
    )));
    assert_eq!(stack.registry().focused_id(), Some(a));
    assert!(stack.registry().stack_order(a).unwrap() > b_order);

    // drag A's header by (+50, -30)
    assert!(stack.handle_event(&mouse(
        MouseEventKind::Down(MouseButton::Left),
        110,
        81
    )));
    assert!(stack.window(a).unwrap().dragging());
    assert!(stack.handle_event(&mouse(
        MouseEventKind::Drag(MouseButton::Left),
        160,
        51
    )));
    assert!(stack.handle_event(&mouse(MouseEventKind::Up(MouseButton::Left), 160, 51)));
    assert_eq!(stack.window(a).unwrap().position(), Position::new(150, 50));
    assert!(!stack.window(a).unwrap().dragging());

    // Escape closes only A; B is untouched and stays unfocused
    assert!(stack.handle_event(&key(KeyCode::Esc)));
    let requests = stack.take_close_requests();
    assert_eq!(requests, vec![a]);
    for id in requests {
        stack.close(id);
    }
    assert!(!stack.is_open(a));
    assert!(stack.is_open(b));
    assert_eq!(stack.registry().focused_id(), None);
    assert_eq!(stack.registry().stack_order(b), Some(b_order));
    assert_eq!(stack.window(b).unwrap().position(), Position::new(320, 120));
}

#[test]
fn drag_clamps_to_the_viewport_for_wild_pointers() {
    let mut stack = WindowStack::new();
    stack.set_viewport(Size::new(200, 100));

    let id = stack.allocate_id();
    stack.open(FloatingWindow::new(id, "W", Position::new(50, 40)).with_size(Size::new(40, 12)));

    // grab the header and fling the pointer past the bottom-right corner
    stack.handle_event(&mouse(MouseEventKind::Down(MouseButton::Left), 60, 41));
    stack.handle_event(&mouse(MouseEventKind::Drag(MouseButton::Left), 500, 300));
    assert_eq!(
        stack.window(id).unwrap().position(),
        Position::new(200 - 40, 100 - 12)
    );

    // then past the origin
    stack.handle_event(&mouse(MouseEventKind::Drag(MouseButton::Left), 0, 0));
    assert_eq!(stack.window(id).unwrap().position(), Position::new(0, 0));
    stack.handle_event(&mouse(MouseEventKind::Up(MouseButton::Left), 0, 0));
}

#[test]
fn focus_trap_cycles_within_the_focused_window_only() {
    let mut stack = WindowStack::new();
    stack.set_viewport(Size::new(400, 200));

    let form = FormComponent::new()
        .with_field(FormField::checkbox("first", false))
        .with_field(FormField::checkbox("second", false))
        .with_field(FormField::button("Save"));
    let a = stack.allocate_id();
    stack.open(
        FloatingWindow::new(a, "A", Position::new(0, 0))
            .with_size(Size::new(40, 12))
            .with_body(Box::new(form)),
    );

    // a freshly focused window focuses its first interactive element
    assert_eq!(stack.window(a).unwrap().body_focused_slot(), Some(0));

    // forward wrap: 0 -> 1 -> 2 -> 0
    for expected in [1, 2, 0] {
        assert!(stack.handle_event(&key(KeyCode::Tab)));
        assert_eq!(stack.window(a).unwrap().body_focused_slot(), Some(expected));
    }
    // backward wrap from the first element lands on the last
    assert!(stack.handle_event(&key(KeyCode::BackTab)));
    assert_eq!(stack.window(a).unwrap().body_focused_slot(), Some(2));

    // a window with no interactive elements lets Tab pass through
    let b = stack.allocate_id();
    stack.open(
        FloatingWindow::new(b, "B", Position::new(100, 0))
            .with_size(Size::new(40, 12))
            .with_body(Box::new(EmptyBody)),
    );
    assert_eq!(stack.registry().focused_id(), Some(b));
    assert!(!stack.handle_event(&key(KeyCode::Tab)));
    // and the unfocused window's trap state did not move
    assert_eq!(stack.window(a).unwrap().body_focused_slot(), Some(2));
}
