//! Explicit timers advanced by the simulation step.
//!
//! Each replaces one browser interval/timeout. A timer only moves when its
//! owner calls `update`, so dropping the owner is enough to tear it down.

/// One-shot delay
#[derive(Debug, Clone, Copy, Default)]
pub struct Delay {
    remaining: Option<f32>,
}

impl Delay {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn start(&mut self, secs: f32) {
        self.remaining = Some(secs.max(0.0));
    }

    pub fn cancel(&mut self) {
        self.remaining = None;
    }

    pub fn is_pending(&self) -> bool {
        self.remaining.is_some()
    }

    pub fn remaining(&self) -> f32 {
        self.remaining.unwrap_or(0.0)
    }

    /// Advance; returns true exactly once, on the step the delay elapses
    pub fn update(&mut self, dt: f32) -> bool {
        match self.remaining {
            // Same epsilon as Interval so 40 steps of 0.05 make 2 s
            Some(t) if t - dt <= 1e-4 => {
                self.remaining = None;
                true
            }
            Some(t) => {
                self.remaining = Some(t - dt);
                false
            }
            None => false,
        }
    }
}

/// Repeating timer
#[derive(Debug, Clone, Copy)]
pub struct Interval {
    period: f32,
    acc: f32,
}

impl Interval {
    pub fn new(period: f32) -> Self {
        Self { period, acc: 0.0 }
    }

    pub fn period(&self) -> f32 {
        self.period
    }

    pub fn reset(&mut self) {
        self.acc = 0.0;
    }

    /// Advance; returns how many periods elapsed during `dt`
    pub fn update(&mut self, dt: f32) -> u32 {
        if self.period <= 0.0 {
            return 0;
        }
        self.acc += dt;
        let mut fired = 0;
        // Small epsilon so 20 steps of 0.05 make exactly one second
        while self.acc + 1e-4 >= self.period {
            self.acc -= self.period;
            fired += 1;
        }
        fired
    }
}

/// Result of advancing a [`RoundClock`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ClockStep {
    /// Whole seconds that ticked off during this update
    pub ticks: u32,
    /// Set on the update that reaches zero
    pub expired: bool,
}

/// Whole-second countdown used for session clocks, the pre-play countdown
/// and the penalty pressure timer
#[derive(Debug, Clone, Copy)]
pub struct RoundClock {
    duration: u32,
    remaining: u32,
    second: Interval,
}

impl RoundClock {
    pub fn new(duration: u32) -> Self {
        Self {
            duration,
            remaining: duration,
            second: Interval::new(1.0),
        }
    }

    pub fn duration(&self) -> u32 {
        self.duration
    }

    pub fn remaining(&self) -> u32 {
        self.remaining
    }

    pub fn is_expired(&self) -> bool {
        self.remaining == 0
    }

    /// Fraction of the duration still left, for progress bars
    pub fn fraction_left(&self) -> f32 {
        if self.duration == 0 {
            0.0
        } else {
            self.remaining as f32 / self.duration as f32
        }
    }

    pub fn update(&mut self, dt: f32) -> ClockStep {
        if self.remaining == 0 {
            return ClockStep::default();
        }
        let ticks = self.second.update(dt).min(self.remaining);
        self.remaining -= ticks;
        ClockStep {
            ticks,
            expired: ticks > 0 && self.remaining == 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_delay_fires_once() {
        let mut delay = Delay::new();
        delay.start(0.1);
        assert!(!delay.update(0.05));
        assert!(delay.update(0.05));
        assert!(!delay.update(0.05));
        assert!(!delay.is_pending());
    }

    #[test]
    fn test_delay_cancel() {
        let mut delay = Delay::new();
        delay.start(1.0);
        delay.cancel();
        assert!(!delay.update(2.0));
    }

    #[test]
    fn test_interval_counts_periods() {
        let mut interval = Interval::new(0.05);
        assert_eq!(interval.update(0.05), 1);
        assert_eq!(interval.update(0.12), 2);
        assert_eq!(interval.update(0.02), 0);
    }

    #[test]
    fn test_clock_ticks_whole_seconds() {
        let mut clock = RoundClock::new(3);
        for _ in 0..19 {
            assert_eq!(clock.update(0.05).ticks, 0);
        }
        let step = clock.update(0.05);
        assert_eq!(step.ticks, 1);
        assert!(!step.expired);
        assert_eq!(clock.remaining(), 2);
    }

    #[test]
    fn test_clock_expires_once() {
        let mut clock = RoundClock::new(2);
        let step = clock.update(2.5);
        assert_eq!(step, ClockStep { ticks: 2, expired: true });
        assert_eq!(clock.update(1.0), ClockStep::default());
        assert!(clock.is_expired());
    }

    #[test]
    fn test_zero_clock_is_already_expired() {
        let mut clock = RoundClock::new(0);
        assert!(clock.is_expired());
        assert_eq!(clock.update(1.0), ClockStep::default());
        assert_eq!(clock.fraction_left(), 0.0);
    }
}
