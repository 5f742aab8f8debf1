use std::collections::HashMap;
use std::fmt;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    Quit,
    // Window keys (handled by the focused window; listed for help display)
    CloseWindow,
    FocusNextElement,
    FocusPrevElement,
    // Dashboard
    OpenSettings,
    OpenProfile,
    OpenNotifications,
    OpenHelp,
    OpenAll,
    CloseAll,
    // Page task list
    TaskUp,
    TaskDown,
    ToggleTask,
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Action::Quit => "Quit",
            Action::CloseWindow => "Close active window (Esc)",
            Action::FocusNextElement => "Next element (Tab)",
            Action::FocusPrevElement => "Previous element (Shift-Tab)",
            Action::OpenSettings => "Open settings",
            Action::OpenProfile => "Open profile",
            Action::OpenNotifications => "Open notifications",
            Action::OpenHelp => "Open help",
            Action::OpenAll => "Open all windows",
            Action::CloseAll => "Close all windows",
            Action::TaskUp => "Task up",
            Action::TaskDown => "Task down",
            Action::ToggleTask => "Toggle task",
        };
        write!(f, "{}", s)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyCombo {
    pub code: KeyCode,
    pub mods: KeyModifiers,
}

impl KeyCombo {
    pub fn new(code: KeyCode, mods: KeyModifiers) -> Self {
        Self { code, mods }
    }

    pub fn matches(&self, key: &KeyEvent) -> bool {
        key.code == self.code && key.modifiers == self.mods
    }

    pub fn display(&self) -> String {
        let mut parts = Vec::new();
        if self.mods.contains(KeyModifiers::CONTROL) {
            parts.push("Ctrl".to_string());
        }
        if self.mods.contains(KeyModifiers::SHIFT) {
            parts.push("Shift".to_string());
        }
        if self.mods.contains(KeyModifiers::ALT) {
            parts.push("Alt".to_string());
        }
        let code = match self.code {
            KeyCode::Char(' ') => "Space".to_string(),
            KeyCode::Char(c) => c.to_ascii_uppercase().to_string(),
            KeyCode::Esc => "Esc".to_string(),
            KeyCode::Enter => "Enter".to_string(),
            KeyCode::Tab => "Tab".to_string(),
            KeyCode::BackTab => "Shift-Tab".to_string(),
            KeyCode::Up => "Up".to_string(),
            KeyCode::Down => "Down".to_string(),
            _ => format!("{:?}", self.code),
        };
        parts.push(code);
        parts.join("+")
    }
}

impl fmt::Display for KeyCombo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display())
    }
}

#[derive(Debug, Clone)]
pub struct KeyBindings {
    map: HashMap<Action, Vec<KeyCombo>>,
}

impl KeyBindings {
    pub fn new() -> Self {
        Self {
            map: HashMap::new(),
        }
    }

    pub fn add(&mut self, action: Action, combo: KeyCombo) {
        self.map.entry(action).or_default().push(combo);
    }

    pub fn matches(&self, action: Action, key: &KeyEvent) -> bool {
        self.map
            .get(&action)
            .is_some_and(|list| list.iter().any(|combo| combo.matches(key)))
    }

    pub fn action_for_key(&self, key: &KeyEvent) -> Option<Action> {
        for (action, list) in &self.map {
            if list.iter().any(|combo| combo.matches(key)) {
                return Some(*action);
            }
        }
        None
    }

    /// Display strings for all combos mapped to `action`.
    pub fn combos_for(&self, action: Action) -> Vec<String> {
        self.map
            .get(&action)
            .map(|list| list.iter().map(KeyCombo::display).collect())
            .unwrap_or_default()
    }
}

impl Default for KeyBindings {
    fn default() -> Self {
        use Action::*;
        let mut kb = Self::new();
        kb.add(Quit, KeyCombo::new(KeyCode::Char('q'), KeyModifiers::CONTROL));
        kb.add(CloseWindow, KeyCombo::new(KeyCode::Esc, KeyModifiers::NONE));
        kb.add(
            FocusNextElement,
            KeyCombo::new(KeyCode::Tab, KeyModifiers::NONE),
        );
        kb.add(
            FocusPrevElement,
            KeyCombo::new(KeyCode::BackTab, KeyModifiers::NONE),
        );
        kb.add(
            OpenSettings,
            KeyCombo::new(KeyCode::Char('s'), KeyModifiers::NONE),
        );
        kb.add(
            OpenProfile,
            KeyCombo::new(KeyCode::Char('p'), KeyModifiers::NONE),
        );
        kb.add(
            OpenNotifications,
            KeyCombo::new(KeyCode::Char('n'), KeyModifiers::NONE),
        );
        kb.add(
            OpenHelp,
            KeyCombo::new(KeyCode::Char('h'), KeyModifiers::NONE),
        );
        kb.add(
            OpenAll,
            KeyCombo::new(KeyCode::Char('o'), KeyModifiers::NONE),
        );
        kb.add(
            CloseAll,
            KeyCombo::new(KeyCode::Char('c'), KeyModifiers::NONE),
        );
        kb.add(TaskUp, KeyCombo::new(KeyCode::Up, KeyModifiers::NONE));
        kb.add(TaskDown, KeyCombo::new(KeyCode::Down, KeyModifiers::NONE));
        kb.add(
            ToggleTask,
            KeyCombo::new(KeyCode::Char(' '), KeyModifiers::NONE),
        );
        kb
    }
}
