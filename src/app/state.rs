use crate::app::event::AppEvent;
use crate::config::{AppConfig, StepperConfig};
use crate::control::StepperControl;
use crate::stepper::{format_fixed, StepperId};
use chrono::Local;
use ratatui::layout::Rect;
use std::collections::VecDeque;
use std::time::{Duration, Instant};
use tokio::sync::mpsc;

/// How long a status bar message stays visible.
pub const STATUS_TTL: Duration = Duration::from_secs(4);

#[derive(Debug)]
pub struct StepperRow {
    pub label: String,
    pub control: StepperControl,
}

#[derive(Debug, Clone, PartialEq)]
pub struct HistoryEntry {
    pub timestamp: String,
    pub label: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq)]
pub enum StatusKind {
    Info,
    Error,
}

#[derive(Debug, Clone)]
pub struct StatusMessage {
    pub text: String,
    pub kind: StatusKind,
    pub expires_at: Instant,
}

#[derive(Debug)]
pub struct AppState {
    pub config: AppConfig,
    pub rows: Vec<StepperRow>,
    pub focus: usize,
    pub history: VecDeque<HistoryEntry>,
    pub status: Option<StatusMessage>,
    /// Last known terminal size, used for mouse hit-testing.
    pub viewport: Rect,
    pub dirty: bool,
    pub should_quit: bool,
}

impl AppState {
    pub fn new(config: AppConfig) -> Self {
        let rows = config
            .steppers
            .iter()
            .enumerate()
            .map(|(id, stepper)| StepperRow {
                label: stepper.label.clone(),
                control: StepperControl::with_model(
                    id,
                    stepper.build_model(),
                    config.appearance_for(stepper),
                ),
            })
            .collect();
        Self {
            config,
            rows,
            focus: 0,
            history: VecDeque::new(),
            status: None,
            viewport: Rect::default(),
            dirty: true,
            should_quit: false,
        }
    }

    /// Route every stepper's value changes into the app event channel.
    pub fn connect(&mut self, tx: &mpsc::UnboundedSender<AppEvent>) {
        for row in &mut self.rows {
            row.control.connect(tx.clone());
        }
    }

    pub fn focused_row(&self) -> Option<&StepperRow> {
        self.rows.get(self.focus)
    }

    pub fn focused_row_mut(&mut self) -> Option<&mut StepperRow> {
        self.rows.get_mut(self.focus)
    }

    pub fn focus_next(&mut self) {
        if !self.rows.is_empty() {
            self.focus = (self.focus + 1) % self.rows.len();
        }
    }

    pub fn focus_prev(&mut self) {
        if !self.rows.is_empty() {
            self.focus = (self.focus + self.rows.len() - 1) % self.rows.len();
        }
    }

    /// Append a value change to the history panel.
    pub fn record_change(&mut self, id: StepperId, value: f64) {
        let Some(row) = self.rows.get(id) else {
            tracing::warn!(id, "value change for unknown stepper");
            return;
        };
        let entry = HistoryEntry {
            timestamp: Local::now()
                .format(&self.config.ui.timestamp_format)
                .to_string(),
            label: row.label.clone(),
            value: format_fixed(value, row.control.decimal_places()),
        };
        tracing::debug!(label = %entry.label, value = %entry.value, "value changed");
        self.history.push_back(entry);
        while self.history.len() > self.config.ui.history_size {
            self.history.pop_front();
        }
        self.dirty = true;
    }

    pub fn info(&mut self, text: String) {
        self.set_status(text, StatusKind::Info);
    }

    pub fn error(&mut self, text: String) {
        tracing::error!("{}", text);
        self.set_status(text, StatusKind::Error);
    }

    fn set_status(&mut self, text: String, kind: StatusKind) {
        self.status = Some(StatusMessage {
            text,
            kind,
            expires_at: Instant::now() + STATUS_TTL,
        });
        self.dirty = true;
    }

    /// Drop the status message once it has expired.
    pub fn expire_status(&mut self, now: Instant) {
        if self.status.as_ref().is_some_and(|s| now >= s.expires_at) {
            self.status = None;
            self.dirty = true;
        }
    }

    /// The config with every stepper's current bounds and value written back.
    pub fn snapshot_config(&self) -> AppConfig {
        let mut config = self.config.clone();
        config.steppers = self
            .rows
            .iter()
            .zip(&self.config.steppers)
            .map(|(row, original)| {
                let control = &row.control;
                StepperConfig {
                    label: row.label.clone(),
                    minimum_value: control.minimum_value(),
                    maximum_value: control.maximum_value(),
                    step_value: control.step_value(),
                    value: control.value(),
                    decimal_places: control.decimal_places(),
                    appearance: original.appearance.clone(),
                }
            })
            .collect();
        config
    }

    pub fn status_line(&self) -> String {
        let Some(row) = self.focused_row() else {
            return "No steppers configured".to_string();
        };
        let model = row.control.model();
        let places = model.decimal_places();
        format!(
            "{}: {}  [{} .. {}] step {}",
            row.label,
            model.formatted_value(),
            format_fixed(model.minimum_value(), places),
            model.formatted_maximum(),
            format_fixed(model.step_value(), places),
        )
    }
}
