//! Central bookkeeping for multi-window stacking and focus exclusivity.
//!
//! The registry tracks which windows are open, which one is topmost, and
//! which one (at most) holds focus. It is owned by the page-level controller
//! and mutated only from the UI thread, so no locking is involved.

use super::WindowId;
use crate::constants::BASE_STACK_ORDER;

#[derive(Debug, Clone, Copy)]
struct RegistryEntry {
    id: WindowId,
    stack_order: u64,
    focused: bool,
}

/// Open-window set with a monotonically increasing stacking counter.
///
/// Entries are kept in registration order; [`draw_order`](Self::draw_order)
/// derives the paint order from `stack_order`. The counter is seeded above
/// any z-value used by static page content so a freshly raised window always
/// paints over the page.
#[derive(Debug)]
pub struct WindowRegistry {
    entries: Vec<RegistryEntry>,
    next_stack_order: u64,
    next_generated_id: u64,
}

impl WindowRegistry {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            next_stack_order: BASE_STACK_ORDER,
            next_generated_id: 1,
        }
    }

    /// Mint a fresh id for callers that don't supply their own. Ids are
    /// unique for the registry's lifetime.
    pub fn allocate_id(&mut self) -> WindowId {
        let id = WindowId::new(self.next_generated_id);
        self.next_generated_id += 1;
        id
    }

    /// Add `id` to the open set. Registering an id that is already present is
    /// ignored; the caller violated the uniqueness contract and the existing
    /// entry wins.
    pub fn register(&mut self, id: WindowId) {
        if self.contains(id) {
            tracing::warn!(window = %id, "ignoring duplicate registration");
            return;
        }
        self.entries.push(RegistryEntry {
            id,
            stack_order: self.next_stack_order,
            focused: false,
        });
        tracing::debug!(window = %id, "registered window");
    }

    /// Remove `id` if present. Absent ids are a no-op so double-close is
    /// harmless.
    pub fn deregister(&mut self, id: WindowId) {
        let before = self.entries.len();
        self.entries.retain(|entry| entry.id != id);
        if self.entries.len() != before {
            tracing::debug!(window = %id, "deregistered window");
        }
    }

    /// Raise `id` to the top of the stack and give it focus.
    ///
    /// This is the single synchronization point for the focus-exclusivity
    /// invariant: the raised entry gets a strictly larger stacking value than
    /// any handed out before (even when it was already topmost) and every
    /// other entry is unfocused. Unknown ids are a no-op.
    pub fn bring_to_front(&mut self, id: WindowId) {
        if !self.contains(id) {
            return;
        }
        self.next_stack_order += 1;
        let order = self.next_stack_order;
        for entry in &mut self.entries {
            if entry.id == id {
                entry.stack_order = order;
                entry.focused = true;
            } else {
                entry.focused = false;
            }
        }
        tracing::debug!(window = %id, stack_order = order, "brought window to front");
    }

    pub fn contains(&self, id: WindowId) -> bool {
        self.entries.iter().any(|entry| entry.id == id)
    }

    pub fn stack_order(&self, id: WindowId) -> Option<u64> {
        self.entry(id).map(|entry| entry.stack_order)
    }

    pub fn is_focused(&self, id: WindowId) -> bool {
        self.entry(id).is_some_and(|entry| entry.focused)
    }

    /// The focused window, if any. After the focused window closes no other
    /// window inherits focus; callers must raise one explicitly.
    pub fn focused_id(&self) -> Option<WindowId> {
        self.entries
            .iter()
            .find(|entry| entry.focused)
            .map(|entry| entry.id)
    }

    pub fn topmost(&self) -> Option<WindowId> {
        self.entries
            .iter()
            .max_by_key(|entry| entry.stack_order)
            .map(|entry| entry.id)
    }

    /// Ids sorted bottom-to-top; render in this order, hit-test in reverse.
    pub fn draw_order(&self) -> Vec<WindowId> {
        let mut ordered: Vec<&RegistryEntry> = self.entries.iter().collect();
        ordered.sort_by_key(|entry| entry.stack_order);
        ordered.into_iter().map(|entry| entry.id).collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn entry(&self, id: WindowId) -> Option<&RegistryEntry> {
        self.entries.iter().find(|entry| entry.id == id)
    }
}

impl Default for WindowRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(raw: u64) -> WindowId {
        WindowId::new(raw)
    }

    #[test]
    fn bring_to_front_focuses_exactly_one() {
        let mut reg = WindowRegistry::new();
        for raw in 1..=4 {
            reg.register(id(raw));
            reg.bring_to_front(id(raw));
        }
        // exercise an arbitrary raise sequence
        for raw in [2u64, 4, 1, 3, 3, 2] {
            reg.bring_to_front(id(raw));
            let focused: Vec<_> = (1..=4).filter(|&r| reg.is_focused(id(r))).collect();
            assert_eq!(focused, vec![raw]);
        }
    }

    #[test]
    fn stack_orders_are_strictly_increasing_and_unique() {
        let mut reg = WindowRegistry::new();
        reg.register(id(1));
        reg.register(id(2));
        reg.bring_to_front(id(1));
        let first = reg.stack_order(id(1)).unwrap();
        assert!(first > BASE_STACK_ORDER);
        reg.bring_to_front(id(2));
        let second = reg.stack_order(id(2)).unwrap();
        assert!(second > first);
        assert_ne!(reg.stack_order(id(1)), reg.stack_order(id(2)));
    }

    #[test]
    fn raising_topmost_is_idempotent_in_ordering_but_bumps_value() {
        let mut reg = WindowRegistry::new();
        reg.register(id(1));
        reg.register(id(2));
        reg.bring_to_front(id(1));
        reg.bring_to_front(id(2));
        let before = reg.stack_order(id(2)).unwrap();
        reg.bring_to_front(id(2));
        assert_eq!(reg.topmost(), Some(id(2)));
        assert_eq!(reg.draw_order(), vec![id(1), id(2)]);
        assert!(reg.stack_order(id(2)).unwrap() > before);
    }

    #[test]
    fn deregister_absent_is_noop_and_stale_raise_does_nothing() {
        let mut reg = WindowRegistry::new();
        reg.register(id(1));
        reg.bring_to_front(id(1));
        reg.deregister(id(9));
        assert_eq!(reg.len(), 1);
        reg.deregister(id(1));
        reg.deregister(id(1));
        assert!(reg.is_empty());
        // a raise against the removed id must not resurrect it
        reg.bring_to_front(id(1));
        assert!(reg.is_empty());
        assert_eq!(reg.focused_id(), None);
    }

    #[test]
    fn closing_focused_window_leaves_none_focused() {
        let mut reg = WindowRegistry::new();
        reg.register(id(1));
        reg.register(id(2));
        reg.bring_to_front(id(1));
        reg.bring_to_front(id(2));
        reg.deregister(id(2));
        assert_eq!(reg.focused_id(), None);
        assert!(reg.contains(id(1)));
        assert!(!reg.is_focused(id(1)));
    }

    #[test]
    fn duplicate_registration_keeps_existing_entry() {
        let mut reg = WindowRegistry::new();
        reg.register(id(1));
        reg.bring_to_front(id(1));
        let order = reg.stack_order(id(1)).unwrap();
        reg.register(id(1));
        assert_eq!(reg.len(), 1);
        assert_eq!(reg.stack_order(id(1)), Some(order));
    }

    #[test]
    fn allocate_id_is_unique() {
        let mut reg = WindowRegistry::new();
        let a = reg.allocate_id();
        let b = reg.allocate_id();
        assert_ne!(a, b);
    }

    #[test]
    fn draw_order_follows_raises_not_registration() {
        let mut reg = WindowRegistry::new();
        for raw in 1..=3 {
            reg.register(id(raw));
            reg.bring_to_front(id(raw));
        }
        reg.bring_to_front(id(1));
        assert_eq!(reg.draw_order(), vec![id(2), id(3), id(1)]);
        assert_eq!(reg.topmost(), Some(id(1)));
    }
}
