//! "last updated <date>" label, refreshed on a timer by the runner.

use std::time::Duration;

use chrono::{Datelike, Local, NaiveDate};

pub const DEFAULT_INTERVAL: Duration = Duration::from_secs(15 * 60);

/// `Oct 18, 2026`: abbreviated month, unpadded day, full year.
pub fn format_date(date: NaiveDate) -> String {
    format!("{} {}, {}", date.format("%b"), date.day(), date.year())
}

#[derive(Debug, Clone)]
pub struct CommitInfoTicker {
    interval: Duration,
    label: String,
}

impl CommitInfoTicker {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            label: String::new(),
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    /// Stamp today's local date.
    pub fn refresh(&mut self) {
        self.refresh_at(Local::now().date_naive());
    }

    pub fn refresh_at(&mut self, date: NaiveDate) {
        self.label = format!("last updated {}", format_date(date));
    }
}

impl Default for CommitInfoTicker {
    fn default() -> Self {
        Self::new(DEFAULT_INTERVAL)
    }
}
