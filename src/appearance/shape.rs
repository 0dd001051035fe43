use ratatui::widgets::BorderType;
use serde::{Deserialize, Serialize};

/// Border drawn around a stepper.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Shape {
    None,
    Plain,
    #[default]
    Rounded,
    Thick,
    Double,
}

impl Shape {
    /// The ratatui border type, or `None` when no border is drawn.
    pub fn border_type(self) -> Option<BorderType> {
        match self {
            Shape::None => None,
            Shape::Plain => Some(BorderType::Plain),
            Shape::Rounded => Some(BorderType::Rounded),
            Shape::Thick => Some(BorderType::Thick),
            Shape::Double => Some(BorderType::Double),
        }
    }

    /// Cells taken by the border on each side.
    pub fn border_width(self) -> u16 {
        match self {
            Shape::None => 0,
            _ => 1,
        }
    }
}
