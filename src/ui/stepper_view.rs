//! Declarative stepper view.
//!
//! `StepperView` borrows a model and an appearance and draws
//! `[decrement] [label] [increment]` inside an optional border. It never
//! mutates the model; input handling lives in `StepperControl`.

use crate::appearance::{Appearance, IconProvider};
use crate::stepper::{StepperIcon, StepperValueModel};
use ratatui::prelude::*;
use ratatui::widgets::{Block, Paragraph};
use unicode_width::UnicodeWidthStr;

/// Cell rectangles of a rendered stepper, used for mouse hit-testing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StepperLayout {
    pub decrement: Rect,
    pub label: Rect,
    pub increment: Rect,
}

/// Which part of a stepper a cell belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepperHit {
    Decrement,
    Increment,
}

impl StepperLayout {
    pub fn hit_test(&self, column: u16, row: u16) -> Option<StepperHit> {
        let pos = Position::new(column, row);
        if self.decrement.contains(pos) {
            Some(StepperHit::Decrement)
        } else if self.increment.contains(pos) {
            Some(StepperHit::Increment)
        } else {
            None
        }
    }
}

pub struct StepperView<'a> {
    model: &'a StepperValueModel,
    appearance: &'a Appearance,
    focused: bool,
}

impl<'a> StepperView<'a> {
    pub fn new(model: &'a StepperValueModel, appearance: &'a Appearance) -> Self {
        Self {
            model,
            appearance,
            focused: false,
        }
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    /// Label width: wide enough for both the current and the maximum value,
    /// so the buttons don't shift while stepping.
    pub fn label_width(&self) -> u16 {
        let value = self.model.formatted_value().width();
        let maximum = self.model.formatted_maximum().width();
        value.max(maximum) as u16
    }

    fn icon_width(&self, kind: StepperIcon) -> u16 {
        self.appearance.icons.resolve_icon(kind).width() as u16
    }

    /// The decrement slot fits both the decrement and the delete glyph.
    fn decrement_width(&self) -> u16 {
        self.icon_width(StepperIcon::Decrement)
            .max(self.icon_width(StepperIcon::Delete))
    }

    /// Natural size in cells as `(width, height)`. Saturates at `u16::MAX`.
    pub fn desired_size(&self) -> (u16, u16) {
        let layout = &self.appearance.layout;
        let border = layout.shape.border_width().saturating_mul(2);
        let width = [
            layout.content_inset.horizontal(),
            self.decrement_width(),
            layout.gap.saturating_mul(2),
            self.label_width(),
            self.icon_width(StepperIcon::Increment),
        ]
        .into_iter()
        .fold(border, u16::saturating_add);
        let height = border
            .saturating_add(layout.content_inset.vertical())
            .saturating_add(1);
        (width, height)
    }

    fn content_area(&self, area: Rect) -> Rect {
        let layout = &self.appearance.layout;
        let border = layout.shape.border_width();
        let inset = layout.content_inset;
        let both_borders = border.saturating_mul(2);
        Rect::new(
            area.x.saturating_add(border.saturating_add(inset.leading)),
            area.y.saturating_add(border.saturating_add(inset.top)),
            area.width
                .saturating_sub(both_borders.saturating_add(inset.horizontal())),
            area.height
                .saturating_sub(both_borders.saturating_add(inset.vertical())),
        )
    }

    pub fn compute_layout(&self, area: Rect) -> StepperLayout {
        let content = self.content_area(area);
        if content.is_empty() {
            return StepperLayout::default();
        }
        // Single text row, vertically centred
        let row = Rect::new(
            content.x,
            content.y + (content.height - 1) / 2,
            content.width,
            1,
        );
        let gap = self.appearance.layout.gap;
        let [decrement, _, label, _, increment] = Layout::horizontal([
            Constraint::Length(self.decrement_width()),
            Constraint::Length(gap),
            Constraint::Min(self.label_width()),
            Constraint::Length(gap),
            Constraint::Length(self.icon_width(StepperIcon::Increment)),
        ])
        .areas(row);
        StepperLayout {
            decrement,
            label,
            increment,
        }
    }

    fn block(&self) -> Option<Block<'static>> {
        let border_type = self.appearance.layout.shape.border_type()?;
        Some(
            Block::bordered()
                .border_type(border_type)
                .border_style(self.appearance.border_style(self.focused)),
        )
    }

    fn button_style(&self, disabled: bool) -> Style {
        let style = self.appearance.text_style.style();
        if disabled {
            style.add_modifier(Modifier::DIM)
        } else {
            style
        }
    }
}

impl Widget for StepperView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        buf.set_style(area, self.appearance.background_style());
        if let Some(block) = self.block() {
            block.render(area, buf);
        }

        let layout = self.compute_layout(area);
        let icons = &self.appearance.icons;

        Paragraph::new(icons.resolve_icon(self.model.decrement_icon()))
            .style(self.button_style(self.model.is_decrement_disabled()))
            .alignment(Alignment::Center)
            .render(layout.decrement, buf);

        Paragraph::new(self.model.formatted_value())
            .style(self.appearance.text_style.style())
            .alignment(Alignment::Center)
            .render(layout.label, buf);

        Paragraph::new(icons.resolve_icon(StepperIcon::Increment))
            .style(self.button_style(self.model.is_increment_disabled()))
            .alignment(Alignment::Center)
            .render(layout.increment, buf);
    }
}
