//! Owner-side dashboard state: which windows the page wants open.
//!
//! The open flags are the owner-controlled side of the window lifecycle:
//! the window core requests closes, the dashboard answers by flipping the
//! flag here and removing the window from the stack.

use crate::window::Position;

/// The four dashboard windows, in deterministic open-all order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ModalKind {
    Settings,
    Profile,
    Notifications,
    Help,
}

impl ModalKind {
    pub const ALL: [ModalKind; 4] = [
        ModalKind::Settings,
        ModalKind::Profile,
        ModalKind::Notifications,
        ModalKind::Help,
    ];

    pub fn title(self) -> &'static str {
        match self {
            ModalKind::Settings => "Settings",
            ModalKind::Profile => "User Profile",
            ModalKind::Notifications => "Notifications",
            ModalKind::Help => "Help & Support",
        }
    }

    /// Seed position before any drag occurs.
    pub fn initial_position(self) -> Position {
        match self {
            ModalKind::Settings => Position::new(6, 3),
            ModalKind::Profile => Position::new(26, 5),
            ModalKind::Notifications => Position::new(14, 8),
            ModalKind::Help => Position::new(34, 4),
        }
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct DashboardState {
    settings_open: bool,
    profile_open: bool,
    notifications_open: bool,
    help_open: bool,
}

impl DashboardState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self, kind: ModalKind) -> bool {
        *self.flag(kind)
    }

    pub fn set_open(&mut self, kind: ModalKind, open: bool) {
        *self.flag_mut(kind) = open;
    }

    pub fn open_all(&mut self) {
        for kind in ModalKind::ALL {
            self.set_open(kind, true);
        }
    }

    pub fn close_all(&mut self) {
        for kind in ModalKind::ALL {
            self.set_open(kind, false);
        }
    }

    pub fn open_count(&self) -> usize {
        ModalKind::ALL
            .into_iter()
            .filter(|&kind| self.is_open(kind))
            .count()
    }

    fn flag(&self, kind: ModalKind) -> &bool {
        match kind {
            ModalKind::Settings => &self.settings_open,
            ModalKind::Profile => &self.profile_open,
            ModalKind::Notifications => &self.notifications_open,
            ModalKind::Help => &self.help_open,
        }
    }

    fn flag_mut(&mut self, kind: ModalKind) -> &mut bool {
        match kind {
            ModalKind::Settings => &mut self.settings_open,
            ModalKind::Profile => &mut self.profile_open,
            ModalKind::Notifications => &mut self.notifications_open,
            ModalKind::Help => &mut self.help_open,
        }
    }
}
