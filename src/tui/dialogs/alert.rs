//! Blocking alert, shown when a submission is rejected

use ratatui::Frame;

use crate::tui::widgets::{error_dialog_area, ErrorDialog, ErrorInfo};

pub fn render(frame: &mut Frame, info: &ErrorInfo, background: ratatui::style::Color) {
    let area = error_dialog_area(frame.area());
    frame.render_widget(ErrorDialog::new(info, background), area);
}
