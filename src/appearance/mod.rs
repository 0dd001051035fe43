//! Stepper appearance: colours, text style, icons and layout.
//!
//! Every type derives `Serialize`/`Deserialize` so an appearance can be read
//! straight from the `[appearance]` table of the config file. Missing fields
//! fall back to the defaults below.

pub mod layout;
pub mod shape;

use crate::stepper::StepperIcon;
use ratatui::style::{Color, Modifier, Style};
use serde::{Deserialize, Serialize};

pub use layout::{Insets, Layout};
pub use shape::Shape;

/// Resolves the glyph drawn for a stepper button.
pub trait IconProvider {
    fn resolve_icon(&self, kind: StepperIcon) -> &str;
}

/// Colour and emphasis of the value label and button glyphs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextStyle {
    #[serde(default = "default_text_color")]
    pub color: Color,
    #[serde(default)]
    pub bold: bool,
    #[serde(default)]
    pub italic: bool,
}

impl TextStyle {
    pub fn style(&self) -> Style {
        let mut modifiers = Modifier::empty();
        if self.bold {
            modifiers |= Modifier::BOLD;
        }
        if self.italic {
            modifiers |= Modifier::ITALIC;
        }
        Style::default().fg(self.color).add_modifier(modifiers)
    }
}

impl Default for TextStyle {
    fn default() -> Self {
        Self {
            color: default_text_color(),
            bold: false,
            italic: false,
        }
    }
}

/// Button glyphs. Any of them may be replaced with a custom string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Icons {
    #[serde(default = "default_increment_icon")]
    pub increment: String,
    #[serde(default = "default_decrement_icon")]
    pub decrement: String,
    #[serde(default = "default_delete_icon")]
    pub delete: String,
}

impl Default for Icons {
    fn default() -> Self {
        Self {
            increment: default_increment_icon(),
            decrement: default_decrement_icon(),
            delete: default_delete_icon(),
        }
    }
}

impl IconProvider for Icons {
    fn resolve_icon(&self, kind: StepperIcon) -> &str {
        match kind {
            StepperIcon::Increment => &self.increment,
            StepperIcon::Decrement => &self.decrement,
            StepperIcon::Delete => &self.delete,
        }
    }
}

/// Full stepper appearance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Appearance {
    #[serde(default)]
    pub text_style: TextStyle,
    #[serde(default = "default_background_color")]
    pub background_color: Color,
    #[serde(default = "default_border_color")]
    pub border_color: Color,
    #[serde(default = "default_focused_border_color")]
    pub focused_border_color: Color,
    #[serde(default)]
    pub icons: Icons,
    #[serde(default)]
    pub layout: Layout,
    /// Whether the decrement button may turn into a delete button.
    #[serde(default = "default_true")]
    pub show_delete_image: bool,
}

impl Default for Appearance {
    fn default() -> Self {
        Self {
            text_style: TextStyle::default(),
            background_color: default_background_color(),
            border_color: default_border_color(),
            focused_border_color: default_focused_border_color(),
            icons: Icons::default(),
            layout: Layout::default(),
            show_delete_image: true,
        }
    }
}

impl Appearance {
    pub fn border_style(&self, focused: bool) -> Style {
        let color = if focused {
            self.focused_border_color
        } else {
            self.border_color
        };
        Style::default().fg(color)
    }

    pub fn background_style(&self) -> Style {
        Style::default().bg(self.background_color)
    }
}

fn default_true() -> bool {
    true
}
fn default_text_color() -> Color {
    Color::White
}
fn default_background_color() -> Color {
    Color::Reset
}
fn default_border_color() -> Color {
    Color::DarkGray
}
fn default_focused_border_color() -> Color {
    Color::Cyan
}
fn default_increment_icon() -> String {
    "+".to_string()
}
fn default_decrement_icon() -> String {
    "-".to_string()
}
fn default_delete_icon() -> String {
    "x".to_string()
}
