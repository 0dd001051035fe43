use crate::app::state::*;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let mut parts: Vec<Span> = Vec::new();

    // Focused stepper summary
    parts.push(Span::styled(
        format!(" {} ", state.status_line()),
        Theme::status_bar(),
    ));

    // Transient message
    if let Some(status) = &state.status {
        let style = match status.kind {
            StatusKind::Info => Theme::system_message(),
            StatusKind::Error => Theme::error_message(),
        };
        parts.push(Span::styled(
            format!("| {} ", status.text),
            style.bg(Color::DarkGray),
        ));
    }

    // Bound indicator
    let bound = state.focused_row().and_then(|row| {
        let model = row.control.model();
        if model.is_at_maximum() {
            Some("MAX")
        } else if model.is_at_minimum() {
            Some("MIN")
        } else {
            None
        }
    });
    let indicator = bound.map(|b| format!(" [{}] ", b)).unwrap_or_default();

    // Pad to fill remaining space
    let used: usize = parts.iter().map(|s| s.width()).sum();
    let remaining = (area.width as usize).saturating_sub(used + indicator.len());
    parts.push(Span::styled(" ".repeat(remaining), Theme::status_bar()));
    parts.push(Span::styled(
        indicator,
        Style::default().fg(Color::Cyan).bg(Color::DarkGray),
    ));

    let line = Line::from(parts);
    let paragraph = Paragraph::new(line);
    frame.render_widget(paragraph, area);
}
