use crate::app::state::AppState;
use crate::stepper::format_fixed;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph};
use unicode_width::UnicodeWidthStr;

const MAX_LABEL_WIDTH: u16 = 24;

/// Where one stepper row is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowArea {
    pub label: Rect,
    pub stepper: Rect,
    pub detail: Rect,
}

fn panel_block(state: &AppState) -> Block<'static> {
    Block::default()
        .title(format!(" Steppers ({}) ", state.rows.len()))
        .title_style(Theme::title())
        .borders(Borders::ALL)
        .border_type(Theme::border_type())
        .border_style(Theme::border())
}

fn label_column_width(state: &AppState) -> u16 {
    let widest = state
        .rows
        .iter()
        .map(|r| r.label.width() as u16)
        .max()
        .unwrap_or(0);
    (widest + 2).min(MAX_LABEL_WIDTH)
}

/// Row rectangles inside the stepper panel, clipped to the panel. Shared by
/// rendering and mouse hit-testing so both agree on positions.
pub fn row_areas(state: &AppState, area: Rect) -> Vec<RowArea> {
    let inner = panel_block(state).inner(area);
    let label_w = label_column_width(state).min(inner.width);
    let mut y = inner.y;
    state
        .rows
        .iter()
        .map(|row| {
            let (w, h) = row.control.desired_size();
            let middle = y.saturating_add(h / 2);
            let stepper = Rect::new(inner.x + label_w, y, w, h).intersection(inner);
            let label = Rect::new(inner.x + 1, middle, label_w.saturating_sub(1), 1)
                .intersection(inner);
            let detail_x = stepper.right().saturating_add(1);
            let detail = Rect::new(
                detail_x,
                middle,
                inner.right().saturating_sub(detail_x),
                1,
            )
            .intersection(inner);
            y = y.saturating_add(h);
            RowArea {
                label,
                stepper,
                detail,
            }
        })
        .collect()
}

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    frame.render_widget(panel_block(state), area);

    for (i, (row, areas)) in state.rows.iter().zip(row_areas(state, area)).enumerate() {
        if areas.stepper.is_empty() {
            continue;
        }
        let focused = i == state.focus;
        let label_style = if focused {
            Theme::label_focused()
        } else {
            Theme::label()
        };
        frame.render_widget(Paragraph::new(row.label.as_str()).style(label_style), areas.label);
        frame.render_widget(row.control.view(focused), areas.stepper);

        let model = row.control.model();
        let step = format_fixed(model.step_value(), model.decimal_places());
        let mut detail = vec![Span::styled(format!("step {}", step), Theme::hint())];
        if model.should_show_delete_affordance() {
            detail.push(Span::styled("  delete", Theme::error_message()));
        }
        frame.render_widget(Paragraph::new(Line::from(detail)), areas.detail);
    }
}
