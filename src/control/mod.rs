//! Imperative stepper control.
//!
//! `StepperControl` owns a value model and an appearance, translates terminal
//! input into model mutations, and publishes [`ControlEvent`]s through a
//! channel so a host event loop can react to value changes.

use crate::appearance::Appearance;
use crate::stepper::{ChannelDelegate, ControlEvent, StepperId, StepperValueModel};
use crate::ui::stepper_view::{StepperHit, StepperLayout, StepperView};
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Rect;
use tokio::sync::mpsc;

#[derive(Debug)]
pub struct StepperControl {
    id: StepperId,
    model: StepperValueModel,
    appearance: Appearance,
}

impl StepperControl {
    /// A control with default bounds (`0..=100`, step `1`, value `0`).
    pub fn new(id: StepperId) -> Self {
        Self::with_model(id, StepperValueModel::default(), Appearance::default())
    }

    /// Wrap an existing model. The model's delete threshold follows
    /// `appearance.show_delete_image`.
    pub fn with_model(id: StepperId, mut model: StepperValueModel, appearance: Appearance) -> Self {
        model.set_delete_threshold_enabled(appearance.show_delete_image);
        Self {
            id,
            model,
            appearance,
        }
    }

    /// Publish value changes into `tx`. Any host event type that converts from
    /// [`ControlEvent`] works.
    pub fn connect<E>(&mut self, tx: mpsc::UnboundedSender<E>)
    where
        E: From<ControlEvent> + Send + 'static,
    {
        self.model.set_delegate(ChannelDelegate::new(self.id, tx));
    }

    pub fn disconnect(&mut self) {
        self.model.clear_delegate();
    }

    pub fn id(&self) -> StepperId {
        self.id
    }

    pub fn model(&self) -> &StepperValueModel {
        &self.model
    }

    pub fn appearance(&self) -> &Appearance {
        &self.appearance
    }

    pub fn set_appearance(&mut self, appearance: Appearance) {
        self.model
            .set_delete_threshold_enabled(appearance.show_delete_image);
        self.appearance = appearance;
    }

    pub fn minimum_value(&self) -> f64 {
        self.model.minimum_value()
    }

    pub fn set_minimum_value(&mut self, value: f64) {
        self.model.set_minimum_value(value);
    }

    pub fn maximum_value(&self) -> f64 {
        self.model.maximum_value()
    }

    pub fn set_maximum_value(&mut self, value: f64) {
        self.model.set_maximum_value(value);
    }

    pub fn step_value(&self) -> f64 {
        self.model.step_value()
    }

    pub fn set_step_value(&mut self, value: f64) {
        self.model.set_step_value(value);
    }

    pub fn value(&self) -> f64 {
        self.model.value()
    }

    pub fn set_value(&mut self, value: f64) {
        self.model.set_value(value);
    }

    pub fn decimal_places(&self) -> i32 {
        self.model.decimal_places()
    }

    pub fn set_decimal_places(&mut self, places: i32) {
        self.model.set_decimal_places(places);
    }

    pub fn increment(&mut self) {
        self.model.increment();
    }

    pub fn decrement(&mut self) {
        self.model.decrement();
    }

    /// Adopt `new_value` (subject to the model's range check) and publish it
    /// as a value change.
    pub fn value_did_change(&mut self, new_value: f64) {
        self.model.set_value(new_value);
        self.model.notify();
    }

    /// Handle a key press aimed at this control. Returns `true` if consumed.
    /// Keys for a disabled button are ignored, same as clicking it.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        if key.kind == KeyEventKind::Release {
            return false;
        }
        match key.code {
            KeyCode::Char('+') | KeyCode::Char('=') | KeyCode::Right
                if !self.model.is_increment_disabled() =>
            {
                self.increment();
                true
            }
            KeyCode::Char('-') | KeyCode::Char('_') | KeyCode::Left
                if !self.model.is_decrement_disabled() =>
            {
                self.decrement();
                true
            }
            KeyCode::Home => {
                self.jump_to(self.model.minimum_value());
                true
            }
            KeyCode::End => {
                self.jump_to(self.model.maximum_value());
                true
            }
            _ => false,
        }
    }

    fn jump_to(&mut self, target: f64) {
        if self.model.value() != target {
            self.value_did_change(target);
        }
    }

    /// Handle a mouse event given the area the control was rendered into.
    /// Returns `true` if a button was pressed.
    pub fn handle_mouse(&mut self, mouse: MouseEvent, area: Rect) -> bool {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return false;
        }
        match self.layout(area).hit_test(mouse.column, mouse.row) {
            Some(StepperHit::Decrement) if !self.model.is_decrement_disabled() => {
                self.decrement();
                true
            }
            Some(StepperHit::Increment) if !self.model.is_increment_disabled() => {
                self.increment();
                true
            }
            _ => false,
        }
    }

    pub fn layout(&self, area: Rect) -> StepperLayout {
        self.view(false).compute_layout(area)
    }

    pub fn desired_size(&self) -> (u16, u16) {
        self.view(false).desired_size()
    }

    pub fn view(&self, focused: bool) -> StepperView<'_> {
        StepperView::new(&self.model, &self.appearance).focused(focused)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn click(column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    fn connected(model: StepperValueModel) -> (StepperControl, mpsc::UnboundedReceiver<ControlEvent>) {
        let (tx, rx) = mpsc::unbounded_channel();
        let mut control = StepperControl::with_model(1, model, Appearance::default());
        control.connect(tx);
        (control, rx)
    }

    #[test]
    fn test_default_values() {
        let control = StepperControl::new(0);
        assert_eq!(control.minimum_value(), 0.0);
        assert_eq!(control.maximum_value(), 100.0);
        assert_eq!(control.step_value(), 1.0);
        assert_eq!(control.value(), 0.0);
        assert_eq!(control.appearance(), &Appearance::default());
    }

    #[test]
    fn test_updated_values() {
        let mut control = StepperControl::new(0);
        control.set_minimum_value(4.0);
        assert_eq!(control.minimum_value(), 4.0);
        assert_eq!(control.value(), 4.0);
        control.set_maximum_value(60.0);
        assert_eq!(control.maximum_value(), 60.0);
        control.set_value(200.0);
        assert!(control.value() <= 60.0);
        control.set_step_value(2.5);
        assert_eq!(control.step_value(), 2.5);
        control.set_decimal_places(3);
        assert_eq!(control.decimal_places(), 3);
        assert_eq!(control.model().formatted_value(), "4.000");
    }

    #[test]
    fn test_value_did_change_publishes() {
        let (mut control, mut rx) = connected(StepperValueModel::new(0.0, 100.0, 1.0, 2.0));
        control.value_did_change(3.0);
        assert_eq!(control.value(), 3.0);
        assert_eq!(
            rx.try_recv().unwrap(),
            ControlEvent::ValueChanged { id: 1, value: 3.0 }
        );
    }

    #[test]
    fn test_keys_step_and_notify() {
        let (mut control, mut rx) = connected(StepperValueModel::new(0.0, 10.0, 1.0, 5.0));
        assert!(control.handle_key(key(KeyCode::Char('+'))));
        assert!(control.handle_key(key(KeyCode::Right)));
        assert!(control.handle_key(key(KeyCode::Left)));
        assert_eq!(control.value(), 6.0);
        let values: Vec<f64> = std::iter::from_fn(|| rx.try_recv().ok())
            .map(|ControlEvent::ValueChanged { value, .. }| value)
            .collect();
        assert_eq!(values, vec![6.0, 7.0, 6.0]);
        assert!(!control.handle_key(key(KeyCode::Char('q'))));
    }

    #[test]
    fn test_keys_ignore_disabled_button() {
        let (mut control, mut rx) = connected(StepperValueModel::new(0.0, 10.0, 1.0, 10.0));
        assert!(!control.handle_key(key(KeyCode::Char('+'))));
        assert!(!control.handle_key(key(KeyCode::Right)));
        assert_eq!(control.value(), 10.0);
        assert!(rx.try_recv().is_err());

        control.handle_key(key(KeyCode::Home));
        assert!(!control.handle_key(key(KeyCode::Char('_'))));
        assert_eq!(control.value(), 0.0);
        assert_eq!(
            rx.try_recv().unwrap(),
            ControlEvent::ValueChanged { id: 1, value: 0.0 }
        );
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn test_home_and_end_jump_to_bounds() {
        let (mut control, _rx) = connected(StepperValueModel::new(2.0, 10.0, 1.0, 5.0));
        control.handle_key(key(KeyCode::End));
        assert_eq!(control.value(), 10.0);
        control.handle_key(key(KeyCode::Home));
        assert_eq!(control.value(), 2.0);
    }

    #[test]
    fn test_mouse_clicks_on_buttons() {
        let mut control = StepperControl::with_model(
            0,
            StepperValueModel::new(0.0, 10.0, 1.0, 5.0),
            Appearance::default(),
        );
        let (w, h) = control.desired_size();
        let area = Rect::new(10, 4, w, h);
        let layout = control.layout(area);

        assert!(control.handle_mouse(click(layout.increment.x, layout.increment.y), area));
        assert_eq!(control.value(), 6.0);
        assert!(control.handle_mouse(click(layout.decrement.x, layout.decrement.y), area));
        assert!(control.handle_mouse(click(layout.decrement.x, layout.decrement.y), area));
        assert_eq!(control.value(), 4.0);
        assert!(!control.handle_mouse(click(layout.label.x, layout.label.y), area));
        assert!(!control.handle_mouse(click(0, 0), area));
    }

    #[test]
    fn test_mouse_ignores_disabled_button() {
        let mut control = StepperControl::with_model(
            0,
            StepperValueModel::new(0.0, 10.0, 1.0, 10.0),
            Appearance::default(),
        );
        let area = Rect::new(0, 0, 10, 3);
        let layout = control.layout(area);
        assert!(!control.handle_mouse(click(layout.increment.x, layout.increment.y), area));
        assert_eq!(control.value(), 10.0);
    }

    #[test]
    fn test_appearance_controls_delete_threshold() {
        let mut appearance = Appearance::default();
        appearance.show_delete_image = false;
        let mut control = StepperControl::with_model(
            0,
            StepperValueModel::new(0.0, 10.0, 1.0, 1.0),
            appearance,
        );
        assert!(!control.model().should_show_delete_affordance());
        control.set_appearance(Appearance::default());
        assert!(control.model().should_show_delete_affordance());
    }
}
