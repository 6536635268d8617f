//! Keybinding definitions
//!
//! The table the help dialog is built from. Dispatch lives in the handler;
//! keep the two in step when adding keys.

use crossterm::event::{KeyCode, KeyModifiers};

/// A keybinding definition
#[derive(Debug, Clone)]
pub struct Keybinding {
    pub key: KeyCode,
    pub modifiers: KeyModifiers,
    pub description: &'static str,
    pub context: KeyContext,
}

/// Context in which a keybinding is active
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyContext {
    /// Active in normal mode, whatever has focus
    Global,
    /// Active while the history list has focus
    History,
    /// Active while typing into the form
    Form,
}

impl KeyContext {
    pub fn title(&self) -> &'static str {
        match self {
            Self::Global => "Global Keys",
            Self::History => "History",
            Self::Form => "Entry Form (editing)",
        }
    }
}

impl Keybinding {
    const fn new(key: KeyCode, description: &'static str, context: KeyContext) -> Self {
        Self {
            key,
            modifiers: KeyModifiers::NONE,
            description,
            context,
        }
    }

    /// Human-readable key name, e.g. `Ctrl+c` or `Enter`
    pub fn key_label(&self) -> String {
        let key = match self.key {
            KeyCode::Char(' ') => "Space".to_string(),
            KeyCode::Char(c) => c.to_string(),
            KeyCode::Enter => "Enter".to_string(),
            KeyCode::Esc => "Esc".to_string(),
            KeyCode::Tab => "Tab".to_string(),
            KeyCode::BackTab => "Shift+Tab".to_string(),
            KeyCode::Backspace => "Backspace".to_string(),
            KeyCode::Delete => "Del".to_string(),
            KeyCode::Up => "↑".to_string(),
            KeyCode::Down => "↓".to_string(),
            KeyCode::Left => "←".to_string(),
            KeyCode::Right => "→".to_string(),
            KeyCode::Home => "Home".to_string(),
            KeyCode::End => "End".to_string(),
            other => format!("{:?}", other),
        };

        if self.modifiers.contains(KeyModifiers::CONTROL) {
            format!("Ctrl+{}", key)
        } else {
            key
        }
    }
}

/// All keybindings
pub static KEYBINDINGS: &[Keybinding] = &[
    // Global
    Keybinding::new(KeyCode::Char('q'), "Quit", KeyContext::Global),
    Keybinding {
        key: KeyCode::Char('c'),
        modifiers: KeyModifiers::CONTROL,
        description: "Quit (also while typing)",
        context: KeyContext::Global,
    },
    Keybinding::new(KeyCode::Char('?'), "Show help", KeyContext::Global),
    Keybinding::new(KeyCode::Char('t'), "Toggle dark/light mode", KeyContext::Global),
    Keybinding::new(KeyCode::Char('a'), "Add a transaction", KeyContext::Global),
    Keybinding::new(KeyCode::Tab, "Switch panel focus", KeyContext::Global),
    // History
    Keybinding::new(KeyCode::Char('j'), "Move down", KeyContext::History),
    Keybinding::new(KeyCode::Char('k'), "Move up", KeyContext::History),
    Keybinding::new(KeyCode::Char('g'), "Go to newest", KeyContext::History),
    Keybinding::new(KeyCode::Char('G'), "Go to oldest", KeyContext::History),
    Keybinding::new(KeyCode::Char('d'), "Delete selected transaction", KeyContext::History),
    // Form
    Keybinding::new(KeyCode::Tab, "Next field", KeyContext::Form),
    Keybinding::new(KeyCode::Enter, "Add transaction", KeyContext::Form),
    Keybinding::new(KeyCode::Esc, "Stop editing", KeyContext::Form),
];

/// Bindings for one context, in table order
pub fn bindings_for(context: KeyContext) -> impl Iterator<Item = &'static Keybinding> {
    KEYBINDINGS.iter().filter(move |kb| kb.context == context)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_context_has_bindings() {
        for context in [KeyContext::Global, KeyContext::History, KeyContext::Form] {
            assert!(bindings_for(context).next().is_some(), "{:?}", context);
        }
    }

    #[test]
    fn test_key_labels() {
        let ctrl_c = KEYBINDINGS
            .iter()
            .find(|kb| kb.modifiers.contains(KeyModifiers::CONTROL))
            .unwrap();
        assert_eq!(ctrl_c.key_label(), "Ctrl+c");

        let enter = bindings_for(KeyContext::Form)
            .find(|kb| kb.key == KeyCode::Enter)
            .unwrap();
        assert_eq!(enter.key_label(), "Enter");
    }
}
