use crate::app::action::Action;
use crate::app::event::AppEvent;
use crate::app::state::AppState;
use crate::stepper::ControlEvent;
use crate::ui::{compute_layout, stepper_list};
use crossterm::event::{
    Event as CEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseEvent, MouseEventKind,
};
use ratatui::layout::{Position, Rect};
use std::time::Instant;

pub fn handle_event(state: &mut AppState, event: AppEvent) -> Vec<Action> {
    match event {
        AppEvent::Terminal(cevent) => {
            state.dirty = true;
            handle_terminal(state, cevent)
        }
        AppEvent::Control(ControlEvent::ValueChanged { id, value }) => {
            state.record_change(id, value);
            vec![]
        }
        AppEvent::Tick => handle_tick(state),
    }
}

fn handle_tick(state: &mut AppState) -> Vec<Action> {
    state.expire_status(Instant::now());
    vec![]
}

fn handle_terminal(state: &mut AppState, event: CEvent) -> Vec<Action> {
    match event {
        CEvent::Key(key) => handle_key(state, key),
        CEvent::Mouse(mouse) => {
            handle_mouse(state, mouse);
            vec![]
        }
        CEvent::Resize(width, height) => {
            state.viewport = Rect::new(0, 0, width, height);
            vec![]
        }
        _ => vec![],
    }
}

fn handle_key(state: &mut AppState, key: KeyEvent) -> Vec<Action> {
    if key.kind == KeyEventKind::Release {
        return vec![];
    }

    // Global keybindings
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return vec![Action::Quit];
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => vec![Action::Quit],
        KeyCode::Char('s') => vec![Action::SaveConfig],
        KeyCode::Tab | KeyCode::Down | KeyCode::Char('j') => {
            state.focus_next();
            vec![]
        }
        KeyCode::BackTab | KeyCode::Up | KeyCode::Char('k') => {
            state.focus_prev();
            vec![]
        }
        _ => {
            if let Some(row) = state.focused_row_mut() {
                row.control.handle_key(key);
            }
            vec![]
        }
    }
}

/// Clicking a stepper focuses it; clicking one of its buttons also steps it.
fn handle_mouse(state: &mut AppState, mouse: MouseEvent) {
    if !matches!(mouse.kind, MouseEventKind::Down(_)) {
        return;
    }
    let list_area = compute_layout(state.viewport).stepper_list;
    let pos = Position::new(mouse.column, mouse.row);
    let hit = stepper_list::row_areas(state, list_area)
        .into_iter()
        .enumerate()
        .find(|(_, areas)| areas.stepper.contains(pos) || areas.label.contains(pos));
    let Some((index, areas)) = hit else {
        return;
    };
    state.focus = index;
    state.rows[index].control.handle_mouse(mouse, areas.stepper);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;
    use crossterm::event::MouseButton;
    use tokio::sync::mpsc;

    fn press(code: KeyCode) -> AppEvent {
        AppEvent::Terminal(CEvent::Key(KeyEvent::new(code, KeyModifiers::NONE)))
    }

    fn click(column: u16, row: u16) -> AppEvent {
        AppEvent::Terminal(CEvent::Mouse(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }))
    }

    fn connected_state() -> (AppState, mpsc::UnboundedReceiver<AppEvent>) {
        let (tx, rx) = mpsc::unbounded_channel();
        let mut state = AppState::new(AppConfig::default());
        state.connect(&tx);
        state.viewport = Rect::new(0, 0, 100, 30);
        (state, rx)
    }

    /// Feed events the steppers published back through the handler.
    fn pump(state: &mut AppState, rx: &mut mpsc::UnboundedReceiver<AppEvent>) {
        while let Ok(event) = rx.try_recv() {
            handle_event(state, event);
        }
    }

    #[test]
    fn test_quit_and_save_keys() {
        let mut state = AppState::new(AppConfig::default());
        assert_eq!(handle_event(&mut state, press(KeyCode::Char('q'))), vec![Action::Quit]);
        assert_eq!(handle_event(&mut state, press(KeyCode::Esc)), vec![Action::Quit]);
        assert_eq!(handle_event(&mut state, press(KeyCode::Char('s'))), vec![Action::SaveConfig]);
        let ctrl_c = AppEvent::Terminal(CEvent::Key(KeyEvent::new(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL,
        )));
        assert_eq!(handle_event(&mut state, ctrl_c), vec![Action::Quit]);
    }

    #[test]
    fn test_keys_step_focused_stepper_and_record_history() {
        let (mut state, mut rx) = connected_state();
        handle_event(&mut state, press(KeyCode::Down));
        assert_eq!(state.focus, 1);
        handle_event(&mut state, press(KeyCode::Right));
        handle_event(&mut state, press(KeyCode::Char('+')));
        pump(&mut state, &mut rx);

        assert_eq!(state.rows[1].control.value(), 22.0);
        assert_eq!(state.rows[0].control.value(), 2.0);
        let values: Vec<&str> = state.history.iter().map(|h| h.value.as_str()).collect();
        assert_eq!(values, vec!["21.5", "22.0"]);
        assert!(state.history.iter().all(|h| h.label == "Temperature"));
    }

    #[test]
    fn test_increment_key_at_maximum_adds_no_history() {
        let (mut state, mut rx) = connected_state();
        handle_event(&mut state, press(KeyCode::End));
        handle_event(&mut state, press(KeyCode::Right));
        handle_event(&mut state, press(KeyCode::Char('+')));
        pump(&mut state, &mut rx);
        assert_eq!(state.rows[0].control.value(), 10.0);
        assert_eq!(state.history.len(), 1);
    }

    #[test]
    fn test_mouse_click_focuses_and_steps() {
        let (mut state, mut rx) = connected_state();
        let list_area = compute_layout(state.viewport).stepper_list;
        let areas = stepper_list::row_areas(&state, list_area);
        let inc = state.rows[2].control.layout(areas[2].stepper).increment;

        handle_event(&mut state, click(inc.x, inc.y));
        pump(&mut state, &mut rx);
        assert_eq!(state.focus, 2);
        assert_eq!(state.rows[2].control.value(), 55.0);
        assert_eq!(state.history.back().map(|h| h.label.as_str()), Some("Volume"));
    }

    #[test]
    fn test_click_outside_steppers_is_ignored() {
        let (mut state, _rx) = connected_state();
        handle_event(&mut state, click(99, 29));
        assert_eq!(state.focus, 0);
    }

    #[test]
    fn test_resize_updates_viewport() {
        let mut state = AppState::new(AppConfig::default());
        handle_event(&mut state, AppEvent::Terminal(CEvent::Resize(120, 40)));
        assert_eq!(state.viewport, Rect::new(0, 0, 120, 40));
    }
}
