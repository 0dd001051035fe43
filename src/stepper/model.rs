use std::fmt;

use super::delegate::StepperDelegate;
use super::format::format_fixed;

pub const DEFAULT_MINIMUM: f64 = 0.0;
pub const DEFAULT_MAXIMUM: f64 = 100.0;
pub const DEFAULT_STEP: f64 = 1.0;

/// Which glyph the stepper should show on a button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StepperIcon {
    Increment,
    Decrement,
    Delete,
}

/// A clamped, steppable numeric value.
///
/// Invalid requests (bounds that would cross, out-of-range `set_value`) are
/// ignored and the model stays in its last valid state. Only stepping clamps;
/// `set_value` rejects instead.
pub struct StepperValueModel {
    minimum_value: f64,
    maximum_value: f64,
    step_value: f64,
    value: f64,
    decimal_places: i32,
    delete_threshold_enabled: bool,
    delegate: Option<Box<dyn StepperDelegate>>,
}

impl StepperValueModel {
    /// Create a model with explicit bounds, step and initial value.
    ///
    /// Bounds with `minimum >= maximum` are discarded in favour of the
    /// defaults. An initial value outside the bounds starts at the minimum.
    pub fn new(minimum_value: f64, maximum_value: f64, step_value: f64, value: f64) -> Self {
        let (minimum_value, maximum_value) = if minimum_value < maximum_value {
            (minimum_value, maximum_value)
        } else {
            tracing::warn!(
                minimum_value,
                maximum_value,
                "invalid stepper bounds, using defaults"
            );
            (DEFAULT_MINIMUM, DEFAULT_MAXIMUM)
        };
        let value = if (minimum_value..=maximum_value).contains(&value) {
            value
        } else {
            minimum_value
        };
        Self {
            minimum_value,
            maximum_value,
            step_value,
            value,
            decimal_places: 0,
            delete_threshold_enabled: true,
            delegate: None,
        }
    }

    pub fn with_decimal_places(mut self, decimal_places: i32) -> Self {
        self.decimal_places = decimal_places;
        self
    }

    pub fn with_delete_threshold(mut self, enabled: bool) -> Self {
        self.delete_threshold_enabled = enabled;
        self
    }

    pub fn with_delegate(mut self, delegate: impl StepperDelegate + 'static) -> Self {
        self.delegate = Some(Box::new(delegate));
        self
    }

    pub fn set_delegate(&mut self, delegate: impl StepperDelegate + 'static) {
        self.delegate = Some(Box::new(delegate));
    }

    pub fn clear_delegate(&mut self) {
        self.delegate = None;
    }

    pub fn minimum_value(&self) -> f64 {
        self.minimum_value
    }

    pub fn maximum_value(&self) -> f64 {
        self.maximum_value
    }

    pub fn step_value(&self) -> f64 {
        self.step_value
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn decimal_places(&self) -> i32 {
        self.decimal_places
    }

    pub fn delete_threshold_enabled(&self) -> bool {
        self.delete_threshold_enabled
    }

    /// Accepts `new_min` only while it stays below the maximum. Raising the
    /// minimum past the current value pulls the value up and notifies.
    pub fn set_minimum_value(&mut self, new_min: f64) {
        if new_min < self.maximum_value {
            self.minimum_value = new_min;
            if self.value < self.minimum_value {
                self.value = self.minimum_value;
                self.notify();
            }
        } else {
            tracing::debug!(new_min, max = self.maximum_value, "minimum rejected");
        }
    }

    /// Accepts `new_max` only while it stays above the minimum. The current
    /// value is not re-clamped until the next step.
    pub fn set_maximum_value(&mut self, new_max: f64) {
        if self.minimum_value < new_max {
            self.maximum_value = new_max;
        } else {
            tracing::debug!(new_max, min = self.minimum_value, "maximum rejected");
        }
    }

    pub fn set_step_value(&mut self, step_value: f64) {
        self.step_value = step_value;
    }

    /// Sets the value if it lies within the bounds, otherwise does nothing.
    /// Never notifies the delegate.
    pub fn set_value(&mut self, new_value: f64) {
        if (self.minimum_value..=self.maximum_value).contains(&new_value) {
            self.value = new_value;
        } else {
            tracing::debug!(
                new_value,
                min = self.minimum_value,
                max = self.maximum_value,
                "value rejected"
            );
        }
    }

    pub fn set_decimal_places(&mut self, decimal_places: i32) {
        self.decimal_places = decimal_places;
    }

    pub fn set_delete_threshold_enabled(&mut self, enabled: bool) {
        self.delete_threshold_enabled = enabled;
    }

    pub fn increment(&mut self) {
        self.step_by(self.step_value);
    }

    pub fn decrement(&mut self) {
        self.step_by(-self.step_value);
    }

    /// A NaN step leaves the value where it was; the delegate still hears
    /// about the attempt.
    fn step_by(&mut self, delta: f64) {
        let next = self.value + delta;
        if next.is_nan() {
            tracing::debug!(delta, "non-numeric step ignored");
        } else {
            self.value = if next > self.maximum_value {
                self.maximum_value
            } else if next < self.minimum_value {
                self.minimum_value
            } else {
                next
            };
        }
        tracing::trace!(value = self.value, "stepped");
        self.notify();
    }

    /// Report the current value to the delegate without mutating anything.
    pub(crate) fn notify(&mut self) {
        let value = self.value;
        if let Some(delegate) = self.delegate.as_mut() {
            delegate.value_did_change(value);
        }
    }

    pub fn is_at_minimum(&self) -> bool {
        self.value <= self.minimum_value
    }

    pub fn is_at_maximum(&self) -> bool {
        self.value >= self.maximum_value
    }

    pub fn is_increment_disabled(&self) -> bool {
        self.is_at_maximum()
    }

    pub fn is_decrement_disabled(&self) -> bool {
        self.is_at_minimum()
    }

    pub fn formatted_value(&self) -> String {
        format_fixed(self.value, self.decimal_places)
    }

    pub fn formatted_maximum(&self) -> String {
        format_fixed(self.maximum_value, self.decimal_places)
    }

    /// True when the decrement button should offer "delete" instead: the
    /// threshold is enabled, the value is within one step of zero and the
    /// range starts at zero.
    pub fn should_show_delete_affordance(&self) -> bool {
        self.delete_threshold_enabled
            && self.value <= self.step_value
            && self.minimum_value == 0.0
    }

    pub fn decrement_icon(&self) -> StepperIcon {
        if self.should_show_delete_affordance() {
            StepperIcon::Delete
        } else {
            StepperIcon::Decrement
        }
    }
}

impl Default for StepperValueModel {
    fn default() -> Self {
        Self::new(DEFAULT_MINIMUM, DEFAULT_MAXIMUM, DEFAULT_STEP, DEFAULT_MINIMUM)
    }
}

impl fmt::Debug for StepperValueModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StepperValueModel")
            .field("minimum_value", &self.minimum_value)
            .field("maximum_value", &self.maximum_value)
            .field("step_value", &self.step_value)
            .field("value", &self.value)
            .field("decimal_places", &self.decimal_places)
            .field("delete_threshold_enabled", &self.delete_threshold_enabled)
            .field("has_delegate", &self.delegate.is_some())
            .finish()
    }
}
