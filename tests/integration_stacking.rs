use float_wm::window::{FloatingWindow, Position, Size, WindowStack};

fn open_at(stack: &mut WindowStack, x: u16, y: u16) -> float_wm::window::WindowId {
    let id = stack.allocate_id();
    stack.open(FloatingWindow::new(id, "window", Position::new(x, y)).with_size(Size::new(40, 12)));
    id
}

#[test]
fn every_open_lands_topmost_and_focused() {
    let mut stack = WindowStack::new();
    stack.set_viewport(Size::new(400, 200));

    let mut ids = Vec::new();
    for n in 0..4u16 {
        let id = open_at(&mut stack, n * 20, n * 10);
        assert_eq!(stack.registry().topmost(), Some(id));
        assert_eq!(stack.registry().focused_id(), Some(id));
        ids.push(id);
    }

    // rapid open-all assigns stacking order in call order, no batching
    assert_eq!(stack.registry().draw_order(), ids);
    let orders: Vec<u64> = ids
        .iter()
        .map(|&id| stack.registry().stack_order(id).unwrap())
        .collect();
    assert!(orders.windows(2).all(|pair| pair[0] < pair[1]));
}

#[test]
fn focus_stays_exclusive_across_raise_sequences() {
    let mut stack = WindowStack::new();
    stack.set_viewport(Size::new(400, 200));
    let a = open_at(&mut stack, 0, 0);
    let b = open_at(&mut stack, 60, 0);
    let c = open_at(&mut stack, 120, 0);

    for &id in &[a, c, b, b, a, c] {
        stack.raise(id);
        let focused: Vec<_> = [a, b, c]
            .into_iter()
            .filter(|&candidate| stack.registry().is_focused(candidate))
            .collect();
        assert_eq!(focused, vec![id]);
        assert_eq!(stack.registry().topmost(), Some(id));
    }
}

#[test]
fn raising_the_topmost_window_changes_no_ordering() {
    let mut stack = WindowStack::new();
    stack.set_viewport(Size::new(400, 200));
    let a = open_at(&mut stack, 0, 0);
    let b = open_at(&mut stack, 60, 0);

    let before = stack.registry().stack_order(b).unwrap();
    stack.raise(b);
    assert_eq!(stack.registry().draw_order(), vec![a, b]);
    assert!(stack.registry().stack_order(b).unwrap() > before);
}

#[test]
fn closing_removes_from_registry_for_good() {
    let mut stack = WindowStack::new();
    stack.set_viewport(Size::new(400, 200));
    let a = open_at(&mut stack, 0, 0);
    let b = open_at(&mut stack, 60, 0);

    stack.close(b);
    assert!(!stack.is_open(b));
    assert_eq!(stack.registry().len(), 1);
    // the focused window closed; nobody inherits focus
    assert_eq!(stack.registry().focused_id(), None);
    assert!(stack.is_open(a));

    // a stale raise is a no-op
    stack.raise(b);
    assert_eq!(stack.registry().focused_id(), None);
    assert_eq!(stack.registry().topmost(), Some(a));
}
