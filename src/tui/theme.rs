//! Colors for dark and light mode

use ratatui::style::{Color, Modifier, Style};

use crate::config::ThemeMode;

/// The colors every view draws with
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub background: Color,
    pub foreground: Color,
    pub muted: Color,
    pub accent: Color,
    pub income: Color,
    pub expense: Color,
    pub border: Color,
    pub highlight: Color,
}

impl Palette {
    pub fn for_mode(mode: ThemeMode) -> Self {
        match mode {
            ThemeMode::Dark => Self {
                background: Color::Rgb(24, 26, 32),
                foreground: Color::Rgb(230, 230, 235),
                muted: Color::Rgb(140, 145, 155),
                accent: Color::Rgb(64, 169, 255),
                income: Color::Rgb(82, 196, 126),
                expense: Color::Rgb(220, 80, 80),
                border: Color::Rgb(70, 75, 85),
                highlight: Color::Rgb(45, 50, 58),
            },
            ThemeMode::Light => Self {
                background: Color::Rgb(245, 246, 248),
                foreground: Color::Rgb(33, 37, 41),
                muted: Color::Rgb(108, 117, 125),
                accent: Color::Rgb(13, 110, 253),
                income: Color::Rgb(25, 135, 84),
                expense: Color::Rgb(200, 35, 51),
                border: Color::Rgb(200, 204, 210),
                highlight: Color::Rgb(222, 226, 230),
            },
        }
    }

    /// Base style for a whole screen area
    pub fn base(&self) -> Style {
        Style::default().bg(self.background).fg(self.foreground)
    }

    /// Border style, brighter when the panel has focus
    pub fn border_style(&self, focused: bool) -> Style {
        if focused {
            Style::default().fg(self.accent)
        } else {
            Style::default().fg(self.border)
        }
    }

    pub fn title_style(&self) -> Style {
        Style::default()
            .fg(self.accent)
            .add_modifier(Modifier::BOLD)
    }

    /// Color for an amount: expense red, everything else green
    pub fn amount_color(&self, is_expense: bool) -> Color {
        if is_expense {
            self.expense
        } else {
            self.income
        }
    }
}

/// Label of the theme toggle, naming the mode it switches to
pub fn toggle_label(mode: ThemeMode) -> &'static str {
    match mode {
        ThemeMode::Dark => "☀ Light",
        ThemeMode::Light => "☾ Dark",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_modes_differ() {
        let dark = Palette::for_mode(ThemeMode::Dark);
        let light = Palette::for_mode(ThemeMode::Light);
        assert_ne!(dark.background, light.background);
        assert_ne!(dark.foreground, light.foreground);
    }

    #[test]
    fn test_toggle_label_names_other_mode() {
        assert_eq!(toggle_label(ThemeMode::Dark), "☀ Light");
        assert_eq!(toggle_label(ThemeMode::Light), "☾ Dark");
    }

    #[test]
    fn test_amount_color() {
        let palette = Palette::for_mode(ThemeMode::Dark);
        assert_eq!(palette.amount_color(true), palette.expense);
        assert_eq!(palette.amount_color(false), palette.income);
    }
}
