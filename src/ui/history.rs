use crate::app::state::AppState;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, List, ListItem};

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let block = Block::default()
        .title(" History ")
        .title_style(Theme::title())
        .borders(Borders::ALL)
        .border_type(Theme::border_type())
        .border_style(Theme::border());

    let visible = block.inner(area).height as usize;

    let items: Vec<ListItem> = if state.history.is_empty() {
        vec![ListItem::new(Span::styled(" No changes yet", Theme::hint()))]
    } else {
        // Newest entries at the bottom, oldest scrolled off the top
        let skip = state.history.len().saturating_sub(visible);
        state
            .history
            .iter()
            .skip(skip)
            .map(|entry| {
                ListItem::new(Line::from(vec![
                    Span::styled(format!(" {} ", entry.timestamp), Theme::timestamp()),
                    Span::styled(format!("{} ", entry.label), Theme::label()),
                    Span::styled(entry.value.as_str(), Theme::value_text()),
                ]))
            })
            .collect()
    };

    frame.render_widget(List::new(items).block(block), area);
}
