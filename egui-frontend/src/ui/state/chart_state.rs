//! # Chart State Module
//!
//! Holds the summary chart shown in its own window. The data is rebuilt every
//! time the user asks for the summary, so bar colors change between openings.

use shared::ChartSummary;

/// Summary chart window state
#[derive(Debug, Default)]
pub struct ChartState {
    /// Chart currently on screen, if the window is open
    pub summary: Option<ChartSummary>,
}

impl ChartState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn show(&mut self, summary: ChartSummary) {
        self.summary = Some(summary);
    }

    pub fn close(&mut self) {
        self.summary = None;
    }

    pub fn is_open(&self) -> bool {
        self.summary.is_some()
    }
}
