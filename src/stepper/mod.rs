//! Bounded numeric stepper value model.
//!
//! The model clamps a `f64` to an inclusive `[minimum, maximum]` range on every
//! step, formats it with a configurable number of decimal places, and decides
//! whether the decrement button should read as "delete".

pub mod delegate;
pub mod format;
pub mod model;

pub use delegate::{ChannelDelegate, ControlEvent, StepperDelegate, StepperId};
pub use format::format_fixed;
pub use model::{StepperIcon, StepperValueModel};
