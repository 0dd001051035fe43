//! Value-change notification.
//!
//! A model notifies its delegate after every `increment`/`decrement` (and after
//! the corrective clamp in `set_minimum_value`). Delegates are plain trait
//! objects, so closures and channel senders both work.

use tokio::sync::mpsc;

/// Identifies a stepper inside a host application.
pub type StepperId = usize;

/// Receives the stepper value after clamping.
pub trait StepperDelegate: Send {
    fn value_did_change(&mut self, new_value: f64);
}

impl<F> StepperDelegate for F
where
    F: FnMut(f64) + Send,
{
    fn value_did_change(&mut self, new_value: f64) {
        self(new_value)
    }
}

/// Events published by a stepper control.
#[derive(Debug, Clone, PartialEq)]
pub enum ControlEvent {
    ValueChanged { id: StepperId, value: f64 },
}

/// Forwards value changes into an unbounded channel as [`ControlEvent`]s.
///
/// The channel item type only needs a `From<ControlEvent>` conversion, so a
/// host can feed stepper events straight into its own event enum.
pub struct ChannelDelegate<E> {
    id: StepperId,
    tx: mpsc::UnboundedSender<E>,
}

impl<E> ChannelDelegate<E> {
    pub fn new(id: StepperId, tx: mpsc::UnboundedSender<E>) -> Self {
        Self { id, tx }
    }
}

impl<E> StepperDelegate for ChannelDelegate<E>
where
    E: From<ControlEvent> + Send,
{
    fn value_did_change(&mut self, new_value: f64) {
        let event = ControlEvent::ValueChanged {
            id: self.id,
            value: new_value,
        };
        if self.tx.send(E::from(event)).is_err() {
            tracing::debug!(id = self.id, "value change dropped, receiver closed");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_closure_delegate() {
        let mut seen = Vec::new();
        {
            let mut delegate = |v: f64| seen.push(v);
            delegate.value_did_change(4.0);
            delegate.value_did_change(5.0);
        }
        assert_eq!(seen, vec![4.0, 5.0]);
    }

    #[test]
    fn test_channel_delegate_forwards_events() {
        let (tx, mut rx) = mpsc::unbounded_channel::<ControlEvent>();
        let mut delegate = ChannelDelegate::new(7, tx);
        delegate.value_did_change(2.5);
        assert_eq!(
            rx.try_recv().unwrap(),
            ControlEvent::ValueChanged { id: 7, value: 2.5 }
        );
    }

    #[test]
    fn test_channel_delegate_closed_receiver() {
        let (tx, rx) = mpsc::unbounded_channel::<ControlEvent>();
        drop(rx);
        let mut delegate = ChannelDelegate::new(0, tx);
        // Must not panic
        delegate.value_did_change(1.0);
    }
}
