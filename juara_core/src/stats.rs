use crate::outcome::AttemptOutcome;

/// Running totals for the active session
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionStats {
    pub score: u32,
    pub attempts: u32,
    pub successes: u32,
    /// Highest measured value seen (best power, longest goal)
    pub best: u32,
    measure_total: u64,
    measured: u32,
    /// Seconds left on the session clock, when the mode has one
    pub time_left: Option<u32>,
}

impl SessionStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one attempt into the totals. Score only ever grows.
    pub fn record(&mut self, outcome: &AttemptOutcome) {
        self.score = self.score.saturating_add(outcome.points);
        self.attempts += 1;
        if outcome.is_success() {
            self.successes += 1;
        }
        if let Some(measure) = outcome.measure {
            self.best = self.best.max(measure);
            self.measure_total += u64::from(measure);
            self.measured += 1;
        }
    }

    pub fn failures(&self) -> u32 {
        self.attempts - self.successes
    }

    /// round(successes / attempts * 100), 0 before the first attempt
    pub fn accuracy_percent(&self) -> u32 {
        percent(self.successes, self.attempts)
    }

    /// Rounded mean of the measured values, 0 before the first one
    pub fn average_measure(&self) -> u32 {
        if self.measured == 0 {
            0
        } else {
            (self.measure_total as f64 / f64::from(self.measured)).round() as u32
        }
    }
}

pub fn percent(part: u32, whole: u32) -> u32 {
    if whole == 0 {
        0
    } else {
        (f64::from(part) / f64::from(whole) * 100.0).round() as u32
    }
}
