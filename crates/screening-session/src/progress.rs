use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Answered versus total questions of one instrument.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Progress {
    pub answered: usize,
    pub total: usize,
}

impl Progress {
    pub fn new(answered: usize, total: usize) -> Self {
        Self { answered, total }
    }

    /// Exact percentage in `0.0..=100.0`.
    pub fn percent(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        self.answered as f64 * 100.0 / self.total as f64
    }

    /// Whole percent for display, truncated toward zero.
    pub fn display_percent(&self) -> u8 {
        if self.total == 0 {
            return 0;
        }
        (self.answered * 100 / self.total) as u8
    }

    pub fn is_complete(&self) -> bool {
        self.total > 0 && self.answered == self.total
    }
}
