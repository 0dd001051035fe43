use crate::stepper::ControlEvent;
use crossterm::event::Event as CrosstermEvent;

#[derive(Debug)]
pub enum AppEvent {
    /// Terminal input event
    Terminal(CrosstermEvent),

    /// A stepper published a new value
    Control(ControlEvent),

    /// Tick for UI refresh
    Tick,
}

impl From<ControlEvent> for AppEvent {
    fn from(event: ControlEvent) -> Self {
        AppEvent::Control(event)
    }
}
