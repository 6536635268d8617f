//! Event handler for the TUI
//!
//! Routes keyboard events to the appropriate handlers based on the current
//! application state. An open dialog swallows all input until dismissed.

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use super::app::{ActiveDialog, App, FocusedPanel, InputMode};
use super::event::Event;
use super::views::form;

/// Handle an incoming event
pub fn handle_event(app: &mut App, event: Event) -> Result<()> {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => handle_key_event(app, key),
        Event::Key(_) => Ok(()),
        Event::Tick => {
            app.tick();
            Ok(())
        }
        Event::Mouse(_) | Event::Resize(_, _) => Ok(()),
    }
}

/// Handle a key event
fn handle_key_event(app: &mut App, key: KeyEvent) -> Result<()> {
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        app.quit();
        return Ok(());
    }

    if app.has_dialog() {
        return handle_dialog_key(app, key);
    }

    match app.input_mode {
        InputMode::Normal => handle_normal_key(app, key),
        InputMode::Editing => {
            form::handle_key(app, key);
            Ok(())
        }
    }
}

/// Handle keys in normal mode
fn handle_normal_key(app: &mut App, key: KeyEvent) -> Result<()> {
    // Global keys (work everywhere)
    match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') => {
            app.quit();
            return Ok(());
        }
        KeyCode::Char('?') => {
            app.open_dialog(ActiveDialog::Help);
            return Ok(());
        }
        KeyCode::Char('t') => {
            app.toggle_theme();
            return Ok(());
        }
        KeyCode::Char('a') | KeyCode::Char('i') | KeyCode::Char('n') => {
            app.start_editing();
            return Ok(());
        }
        KeyCode::Tab | KeyCode::BackTab => {
            app.toggle_panel_focus();
            return Ok(());
        }
        _ => {}
    }

    match app.focused_panel {
        FocusedPanel::Form => handle_form_panel_key(app, key),
        FocusedPanel::History => handle_history_key(app, key),
    }

    Ok(())
}

/// Form has focus but nothing is being typed yet
fn handle_form_panel_key(app: &mut App, key: KeyEvent) {
    if key.code == KeyCode::Enter {
        app.start_editing();
    }
}

/// Handle keys when the history list is focused
fn handle_history_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('j') | KeyCode::Down => app.move_down(),
        KeyCode::Char('k') | KeyCode::Up => app.move_up(),
        KeyCode::Char('g') | KeyCode::Home => app.select_first(),
        KeyCode::Char('G') | KeyCode::End => app.select_last(),
        KeyCode::Char('d') | KeyCode::Char('x') | KeyCode::Delete => {
            if !app.delete_selected() {
                tracing::debug!("delete pressed with nothing selected");
            }
        }
        _ => {}
    }
}

/// Handle keys while a dialog is open
fn handle_dialog_key(app: &mut App, key: KeyEvent) -> Result<()> {
    match &app.active_dialog {
        ActiveDialog::Help => app.close_dialog(),
        ActiveDialog::Alert(_) => {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc | KeyCode::Char(' ')) {
                app.close_dialog();
            }
        }
        ActiveDialog::None => {}
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Settings, ThemeMode};

    fn app() -> App {
        App::new(&Settings::default())
    }

    fn key(app: &mut App, code: KeyCode) {
        handle_event(app, Event::Key(KeyEvent::new(code, KeyModifiers::NONE))).unwrap();
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            key(app, KeyCode::Char(c));
        }
    }

    #[test]
    fn test_quit() {
        let mut app = app();
        key(&mut app, KeyCode::Char('q'));
        assert!(app.should_quit);
    }

    #[test]
    fn test_ctrl_c_quits_while_editing() {
        let mut app = app();
        app.start_editing();
        handle_event(
            &mut app,
            Event::Key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
        )
        .unwrap();
        assert!(app.should_quit);
    }

    #[test]
    fn test_q_is_text_while_editing() {
        let mut app = app();
        key(&mut app, KeyCode::Char('a'));
        type_text(&mut app, "qt");

        assert!(!app.should_quit);
        assert_eq!(app.theme(), ThemeMode::Dark);
        assert_eq!(app.form.description.value(), "qt");
    }

    #[test]
    fn test_add_flow() {
        let mut app = app();
        key(&mut app, KeyCode::Char('a'));
        type_text(&mut app, "Freelance");
        key(&mut app, KeyCode::Tab);
        type_text(&mut app, "5000");
        key(&mut app, KeyCode::Enter);

        assert_eq!(app.transactions().len(), 4);
        assert_eq!(app.transactions()[0].text, "Freelance");
        assert_eq!(app.aggregates().balance, 23200.0);
    }

    #[test]
    fn test_alert_blocks_until_dismissed() {
        let mut app = app();
        key(&mut app, KeyCode::Char('a'));
        key(&mut app, KeyCode::Tab);
        type_text(&mut app, "100");
        key(&mut app, KeyCode::Enter);
        assert!(matches!(app.active_dialog, ActiveDialog::Alert(_)));

        // Typing is swallowed while the alert is up
        type_text(&mut app, "zz");
        assert_eq!(app.form.amount.value(), "100");
        assert!(app.has_dialog());

        key(&mut app, KeyCode::Enter);
        assert!(!app.has_dialog());
        assert_eq!(app.transactions().len(), 3);
        assert_eq!(app.input_mode, InputMode::Editing);
    }

    #[test]
    fn test_delete_from_history() {
        let mut app = app();
        key(&mut app, KeyCode::Char('G'));
        key(&mut app, KeyCode::Char('d'));

        assert_eq!(app.transactions().len(), 2);
        assert!(app.transactions().iter().all(|t| t.text != "Movie"));
        assert_eq!(app.aggregates().balance, 18500.0);
    }

    #[test]
    fn test_delete_ignored_when_form_focused() {
        let mut app = app();
        key(&mut app, KeyCode::Tab);
        assert_eq!(app.focused_panel, FocusedPanel::Form);

        key(&mut app, KeyCode::Char('d'));
        assert_eq!(app.transactions().len(), 3);
    }

    #[test]
    fn test_toggle_theme_key() {
        let mut app = app();
        key(&mut app, KeyCode::Char('t'));
        assert_eq!(app.theme(), ThemeMode::Light);
        key(&mut app, KeyCode::Char('t'));
        assert_eq!(app.theme(), ThemeMode::Dark);
    }

    #[test]
    fn test_help_closes_on_any_key() {
        let mut app = app();
        key(&mut app, KeyCode::Char('?'));
        assert_eq!(app.active_dialog, ActiveDialog::Help);

        key(&mut app, KeyCode::Char('q'));
        assert!(!app.has_dialog());
        assert!(!app.should_quit);
    }

    #[test]
    fn test_release_events_ignored() {
        let mut app = app();
        let mut release = KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE);
        release.kind = KeyEventKind::Release;
        handle_event(&mut app, Event::Key(release)).unwrap();
        assert!(!app.should_quit);
    }
}
