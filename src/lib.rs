//! A numeric stepper control for ratatui terminal UIs.
//!
//! The crate is layered:
//! - [`stepper`]: the bounded value model and its change delegate.
//! - [`appearance`] and [`ui::StepperView`]: a declarative view of a model.
//! - [`control::StepperControl`]: an imperative wrapper that handles input
//!   and publishes [`stepper::ControlEvent`]s.
//! - [`app`], [`config`], [`logging`]: the demo application around them.

pub mod app;
pub mod appearance;
pub mod config;
pub mod control;
pub mod error;
pub mod logging;
pub mod stepper;
pub mod ui;

pub use appearance::Appearance;
pub use control::StepperControl;
pub use error::{Result, StepperError};
pub use stepper::{ControlEvent, StepperDelegate, StepperIcon, StepperValueModel};
pub use ui::StepperView;
