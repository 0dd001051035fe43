mod history;
mod layout;
mod status_bar;
pub mod stepper_list;
pub mod stepper_view;
mod theme;

use crate::app::state::AppState;
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;
use theme::Theme;

pub use layout::{compute_layout, AppLayout};
pub use stepper_view::{StepperHit, StepperLayout, StepperView};

pub fn render(frame: &mut Frame, state: &AppState) {
    let area = frame.area();
    let app_layout = compute_layout(area);

    stepper_list::render(frame, app_layout.stepper_list, state);
    history::render(frame, app_layout.history, state);
    render_help_bar(frame, app_layout.help_bar);
    status_bar::render(frame, app_layout.status_bar, state);
}

const KEY_HELP: [(&str, &str); 6] = [
    ("↑/↓", "focus"),
    ("←/-/_", "decrement"),
    ("→/+/=", "increment"),
    ("Home/End", "min/max"),
    ("s", "save"),
    ("q", "quit"),
];

fn render_help_bar(frame: &mut Frame, area: Rect) {
    let mut spans: Vec<Span> = Vec::new();
    for (key, what) in KEY_HELP {
        spans.push(Span::styled(format!(" {} ", key), Theme::key_hint()));
        spans.push(Span::styled(format!("{} ", what), Theme::hint()));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
