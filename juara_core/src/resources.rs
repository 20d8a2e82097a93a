use glam::Vec2;

use crate::fsm::SessionState;
use crate::outcome::AttemptOutcome;

/// Random number generator
pub struct GameRng(pub rand::rngs::StdRng);

impl GameRng {
    pub fn new(seed: u64) -> Self {
        use rand::SeedableRng;
        Self(rand::rngs::StdRng::seed_from_u64(seed))
    }
}

impl Default for GameRng {
    fn default() -> Self {
        Self::new(12345)
    }
}

/// Something a front end may want to animate or announce
#[derive(Debug, Clone, PartialEq)]
pub enum SessionEvent {
    StateChanged {
        from: SessionState,
        to: SessionState,
    },
    /// Pre-play countdown, seconds left
    CountdownTick(u32),
    /// Session clock, seconds left
    ClockTick(u32),
    /// Penalty pressure timer, seconds left
    PressureTick(u32),
    RoundStarted(u32),
    TargetMoved(Vec2),
    MeterReset,
    Attempt(AttemptOutcome),
    ComputerKick {
        scored: bool,
    },
    MatchDecided {
        player_won: bool,
    },
    Completed,
}

/// Events raised since the last drain
#[derive(Debug, Clone, Default)]
pub struct Events {
    items: Vec<SessionEvent>,
}

impl Events {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, event: SessionEvent) {
        self.items.push(event);
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &SessionEvent> {
        self.items.iter()
    }

    pub fn drain(&mut self) -> Vec<SessionEvent> {
        std::mem::take(&mut self.items)
    }
}
