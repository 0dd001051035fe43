use ratatui::layout::{Constraint, Direction, Layout, Rect};

pub struct AppLayout {
    pub stepper_list: Rect,
    pub history: Rect,
    pub help_bar: Rect,
    pub status_bar: Rect,
}

pub fn compute_layout(area: Rect) -> AppLayout {
    // Main vertical split: content | help | status bar
    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(5),    // Main content
            Constraint::Length(1), // Key help
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    let content = main_chunks[0];
    let help_bar = main_chunks[1];
    let status_bar = main_chunks[2];

    // Horizontal: steppers | gap | history
    let h_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .spacing(1)
        .constraints([
            Constraint::Min(30),    // Stepper list
            Constraint::Length(34), // History panel
        ])
        .split(content);

    AppLayout {
        stepper_list: h_chunks[0],
        history: h_chunks[1],
        help_bar,
        status_bar,
    }
}
