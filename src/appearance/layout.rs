use serde::{Deserialize, Serialize};

use super::shape::Shape;

/// Cell padding between the stepper's border and its content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Insets {
    #[serde(default)]
    pub top: u16,
    #[serde(default)]
    pub bottom: u16,
    #[serde(default = "default_horizontal_inset")]
    pub leading: u16,
    #[serde(default = "default_horizontal_inset")]
    pub trailing: u16,
}

impl Insets {
    pub fn new(top: u16, bottom: u16, leading: u16, trailing: u16) -> Self {
        Self {
            top,
            bottom,
            leading,
            trailing,
        }
    }

    pub fn horizontal(&self) -> u16 {
        self.leading.saturating_add(self.trailing)
    }

    pub fn vertical(&self) -> u16 {
        self.top.saturating_add(self.bottom)
    }
}

impl Default for Insets {
    fn default() -> Self {
        Self::new(0, 0, default_horizontal_inset(), default_horizontal_inset())
    }
}

/// Layout properties of a stepper.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Layout {
    #[serde(default)]
    pub content_inset: Insets,
    /// Columns between each button and the label.
    #[serde(default = "default_gap")]
    pub gap: u16,
    #[serde(default)]
    pub shape: Shape,
}

impl Default for Layout {
    fn default() -> Self {
        Self {
            content_inset: Insets::default(),
            gap: default_gap(),
            shape: Shape::default(),
        }
    }
}

fn default_horizontal_inset() -> u16 {
    1
}
fn default_gap() -> u16 {
    1
}
