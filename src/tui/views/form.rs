//! New-transaction form
//!
//! Two fields, description and amount, with Tab navigation and Enter to
//! submit. The form only checks that both fields are filled in; the amount
//! text goes to the ledger as typed.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::tui::app::{App, FocusedPanel, InputMode};
use crate::tui::theme::Palette;
use crate::tui::widgets::TextInput;

/// Which field is currently focused in the form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormField {
    #[default]
    Description,
    Amount,
}

impl FormField {
    /// The other field; with two fields next and previous coincide
    pub fn other(self) -> Self {
        match self {
            Self::Description => Self::Amount,
            Self::Amount => Self::Description,
        }
    }
}

/// Draft state of the form
#[derive(Debug, Clone)]
pub struct TransactionFormState {
    pub focused_field: FormField,
    pub description: TextInput,
    pub amount: TextInput,
}

impl Default for TransactionFormState {
    fn default() -> Self {
        Self::new()
    }
}

impl TransactionFormState {
    pub fn new() -> Self {
        Self {
            focused_field: FormField::Description,
            description: TextInput::new()
                .label("Description")
                .placeholder("e.g. Rent, Food, Freelance"),
            amount: TextInput::new()
                .label("Amount")
                .placeholder("e.g. -500 or 2000"),
        }
    }

    /// Empty both fields and return to the description
    pub fn clear(&mut self) {
        self.description.clear();
        self.amount.clear();
        self.focused_field = FormField::Description;
    }

    pub fn switch_field(&mut self) {
        self.focused_field = self.focused_field.other();
    }

    pub fn focused_input(&mut self) -> &mut TextInput {
        match self.focused_field {
            FormField::Description => &mut self.description,
            FormField::Amount => &mut self.amount,
        }
    }
}

/// Render the form card
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let palette = app.palette();
    let panel_focused = app.focused_panel == FocusedPanel::Form;
    let editing = panel_focused && app.input_mode == InputMode::Editing;

    let block = Block::default()
        .title(" Add New Transaction ")
        .title_style(palette.title_style())
        .borders(Borders::ALL)
        .border_style(palette.border_style(panel_focused));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Description
            Constraint::Length(1), // Amount
            Constraint::Length(1), // Sign hint
            Constraint::Length(1), // Submit hint
        ])
        .split(inner);

    let form = &app.form;
    render_field(
        frame,
        rows[0],
        &form.description,
        editing && form.focused_field == FormField::Description,
        &palette,
    );
    render_field(
        frame,
        rows[1],
        &form.amount,
        editing && form.focused_field == FormField::Amount,
        &palette,
    );

    frame.render_widget(
        Paragraph::new("use negative for expense, positive for income")
            .style(Style::default().fg(palette.muted)),
        rows[2],
    );

    let hints = if editing {
        Line::from(vec![
            Span::styled("[Enter]", Style::default().fg(palette.income)),
            Span::raw(" Add Transaction  "),
            Span::styled("[Tab]", Style::default().fg(palette.accent)),
            Span::raw(" Next field  "),
            Span::styled("[Esc]", Style::default().fg(palette.expense)),
            Span::raw(" Done"),
        ])
    } else {
        Line::from(vec![
            Span::styled("[a]", Style::default().fg(palette.accent)),
            Span::raw(" Start typing a new transaction"),
        ])
    };
    frame.render_widget(Paragraph::new(hints), rows[3]);
}

/// Render one labeled input, with a block cursor when focused
fn render_field(frame: &mut Frame, area: Rect, input: &TextInput, focused: bool, palette: &Palette) {
    let label_style = if focused {
        Style::default()
            .fg(palette.accent)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(palette.accent)
    };

    let mut spans = vec![Span::styled(format!("{:>12}: ", input.label), label_style)];

    if focused {
        let (before, under, after) = input.split_at_cursor();
        let value_style = Style::default().fg(palette.foreground);

        spans.push(Span::styled(before.to_string(), value_style));
        spans.push(Span::styled(
            under.unwrap_or(' ').to_string(),
            Style::default().fg(palette.background).bg(palette.accent),
        ));
        spans.push(Span::styled(after.to_string(), value_style));
    } else if input.is_empty() {
        spans.push(Span::styled(
            input.placeholder.clone(),
            Style::default()
                .fg(palette.muted)
                .add_modifier(Modifier::ITALIC),
        ));
    } else {
        spans.push(Span::styled(
            input.value().to_string(),
            Style::default().fg(palette.foreground),
        ));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

/// Handle key input while editing the form
/// Returns true if the key was handled, false otherwise
pub fn handle_key(app: &mut App, key: KeyEvent) -> bool {
    match key.code {
        KeyCode::Esc => {
            app.stop_editing();
        }
        KeyCode::Tab | KeyCode::BackTab | KeyCode::Up | KeyCode::Down => {
            app.form.switch_field();
        }
        KeyCode::Enter => {
            app.submit_form();
        }
        KeyCode::Backspace => app.form.focused_input().backspace(),
        KeyCode::Delete => app.form.focused_input().delete(),
        KeyCode::Left => app.form.focused_input().move_left(),
        KeyCode::Right => app.form.focused_input().move_right(),
        KeyCode::Home => app.form.focused_input().move_start(),
        KeyCode::End => app.form.focused_input().move_end(),
        KeyCode::Char(c)
            if !key
                .modifiers
                .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
        {
            app.form.focused_input().insert(c);
        }
        _ => return false,
    }

    true
}
