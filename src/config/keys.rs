//! Keybinding configuration

use ratatui::crossterm::event::{KeyCode, KeyModifiers};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Actions that can be triggered by keybindings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    /// Activate the focused control (the trigger when nothing else is focused)
    Activate,
    /// Dismiss the surface, if the presentation honours Escape
    Dismiss,
    /// Move focus to the next control
    FocusNext,
    /// Move focus to the previous control
    FocusPrev,
    /// Quit application
    Quit,
}

impl Action {
    /// Get the display description for this action
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::Activate => "Activate focused control",
            Self::Dismiss => "Dismiss",
            Self::FocusNext => "Focus next",
            Self::FocusPrev => "Focus previous",
            Self::Quit => "Quit",
        }
    }

    /// All actions in display order
    pub const ALL: &'static [Self] = &[
        Self::Activate,
        Self::Dismiss,
        Self::FocusNext,
        Self::FocusPrev,
        Self::Quit,
    ];
}

/// Keybinding configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct KeyBindings {
    /// Map of key strings to actions (for serialization)
    bindings: HashMap<String, Action>,
}

impl Default for KeyBindings {
    fn default() -> Self {
        let mut bindings = HashMap::new();

        bindings.insert("Enter".to_string(), Action::Activate);
        bindings.insert(" ".to_string(), Action::Activate);
        bindings.insert("Esc".to_string(), Action::Dismiss);
        bindings.insert("Tab".to_string(), Action::FocusNext);
        bindings.insert("BackTab".to_string(), Action::FocusPrev);
        bindings.insert("q".to_string(), Action::Quit);
        bindings.insert("Ctrl+c".to_string(), Action::Quit);

        Self { bindings }
    }
}

impl KeyBindings {
    /// Merge in any missing default keybindings
    ///
    /// This ensures that new keybindings added in updates are available
    /// even if the user has an older saved config.
    pub fn merge_defaults(&mut self) {
        let defaults = Self::default();
        for (key, action) in defaults.bindings {
            self.bindings.entry(key).or_insert(action);
        }
    }

    /// Get the action for a key event
    #[must_use]
    pub fn get_action(&self, code: KeyCode, modifiers: KeyModifiers) -> Option<Action> {
        let key_str = key_to_string(code, modifiers);
        self.bindings.get(&key_str).copied()
    }

    /// Set a keybinding
    pub fn set(&mut self, key: &str, action: Action) {
        self.bindings.insert(key.to_string(), action);
    }

    /// Get all bindings for an action
    #[must_use]
    pub fn keys_for_action(&self, action: Action) -> Vec<String> {
        self.bindings
            .iter()
            .filter_map(|(k, &v)| if v == action { Some(k.clone()) } else { None })
            .collect()
    }

    /// Format key(s) for an action for display (e.g., "Enter/Space")
    #[must_use]
    pub fn format_keys(&self, action: Action) -> String {
        let mut keys = self.keys_for_action(action);
        // Prefer single chars, then alphabetical, so the display is stable
        keys.sort_by(|a, b| {
            let a_simple = a.len() == 1;
            let b_simple = b.len() == 1;
            match (a_simple, b_simple) {
                (true, false) => std::cmp::Ordering::Less,
                (false, true) => std::cmp::Ordering::Greater,
                _ => a.cmp(b),
            }
        });
        keys.iter()
            .map(|k| {
                if k == " " {
                    "Space".to_string()
                } else {
                    k.clone()
                }
            })
            .collect::<Vec<_>>()
            .join("/")
    }

    /// Generate status bar hint text
    #[must_use]
    pub fn status_hints(&self) -> String {
        let hints = [
            (Action::Activate, "open"),
            (Action::Dismiss, "close"),
            (Action::FocusNext, "focus"),
            (Action::Quit, "quit"),
        ];

        hints
            .iter()
            .filter_map(|(action, label)| {
                let key = self.format_keys(*action);
                let key = key.split('/').next().unwrap_or_default().to_string();
                (!key.is_empty()).then(|| format!("[{key}]{label}"))
            })
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Convert a key code and modifiers to a string representation
#[must_use]
pub fn key_to_string(code: KeyCode, modifiers: KeyModifiers) -> String {
    let mut parts = Vec::new();

    if modifiers.contains(KeyModifiers::CONTROL) {
        parts.push("Ctrl".to_string());
    }
    if modifiers.contains(KeyModifiers::ALT) {
        parts.push("Alt".to_string());
    }
    if modifiers.contains(KeyModifiers::SHIFT)
        && !matches!(code, KeyCode::Char(_) | KeyCode::BackTab)
    {
        parts.push("Shift".to_string());
    }

    let key_part = match code {
        KeyCode::Char(c) => c.to_string(),
        KeyCode::Enter => "Enter".to_string(),
        KeyCode::Tab => "Tab".to_string(),
        KeyCode::BackTab => "BackTab".to_string(),
        KeyCode::Esc => "Esc".to_string(),
        KeyCode::Up => "Up".to_string(),
        KeyCode::Down => "Down".to_string(),
        KeyCode::Left => "Left".to_string(),
        KeyCode::Right => "Right".to_string(),
        KeyCode::Home => "Home".to_string(),
        KeyCode::End => "End".to_string(),
        KeyCode::Backspace => "Backspace".to_string(),
        KeyCode::Delete => "Delete".to_string(),
        KeyCode::F(n) => format!("F{n}"),
        _ => return String::new(),
    };

    parts.push(key_part);
    parts.join("+")
}
