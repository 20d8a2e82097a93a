//! Generic session driver: owns the FSM, the clocks, the stats and one mode.

use tracing::{debug, info};

use crate::config::{Config, SessionConfig};
use crate::fsm::{SessionAction, SessionFsm, SessionState, TransitionResult};
use crate::modes::{
    AccuracyGame, Evaluation, FreeKickGame, GameMode, MatchResult, ModeKind, ModeSignal,
    PenaltyGame, PowerGame,
};
use crate::outcome::AttemptOutcome;
use crate::rank::{rank_for, Rank};
use crate::resources::{Events, GameRng, SessionEvent};
use crate::stats::SessionStats;
use crate::timer::{Delay, RoundClock};

/// Timers that only exist while a session is running. Dropped as a unit on
/// every exit path.
#[derive(Debug)]
struct SessionTimers {
    countdown: RoundClock,
    clock: Option<RoundClock>,
    hold: Delay,
    hold_secs: f32,
}

/// End-of-session report
#[derive(Debug, Clone, PartialEq)]
pub struct SessionSummary {
    pub mode: ModeKind,
    pub score: u32,
    pub attempts: u32,
    pub successes: u32,
    pub accuracy: u32,
    pub best: u32,
    pub average: u32,
    pub rank: Rank,
    pub match_result: Option<MatchResult>,
}

pub struct Session<M: GameMode> {
    mode: M,
    fsm: SessionFsm,
    stats: SessionStats,
    rng: GameRng,
    events: Events,
    timers: Option<SessionTimers>,
    stepping: SessionConfig,
    elapsed: f32,
}

impl<M: GameMode> Session<M> {
    pub fn new(mode: M, stepping: SessionConfig, seed: u64) -> Self {
        Self {
            mode,
            fsm: SessionFsm::new(),
            stats: SessionStats::new(),
            rng: GameRng::new(seed),
            events: Events::new(),
            timers: None,
            stepping,
            elapsed: 0.0,
        }
    }

    pub fn mode(&self) -> &M {
        &self.mode
    }

    pub fn round(&self) -> &M::Round {
        self.mode.round()
    }

    pub fn state(&self) -> SessionState {
        self.fsm.state()
    }

    /// Clock is running and attempts are being made
    pub fn is_playing(&self) -> bool {
        self.fsm.is_playing()
    }

    pub fn is_complete(&self) -> bool {
        self.fsm.is_complete()
    }

    pub fn stats(&self) -> &SessionStats {
        &self.stats
    }

    /// Seconds simulated since the last start
    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }

    /// Seconds left in the pre-play countdown
    pub fn countdown_left(&self) -> u32 {
        match (&self.timers, self.fsm.state()) {
            (Some(t), SessionState::Countdown) => t.countdown.remaining(),
            _ => 0,
        }
    }

    /// Progress through the current evaluation hold, 0..=1. Front ends use
    /// it to animate the ball in flight.
    pub fn hold_progress(&self) -> f32 {
        match &self.timers {
            Some(t) if t.hold.is_pending() && t.hold_secs > 0.0 => {
                (1.0 - t.hold.remaining() / t.hold_secs).clamp(0.0, 1.0)
            }
            _ => 0.0,
        }
    }

    pub fn drain_events(&mut self) -> Vec<SessionEvent> {
        self.events.drain()
    }

    pub fn summary(&self) -> SessionSummary {
        let kind = self.mode.kind();
        SessionSummary {
            mode: kind,
            score: self.stats.score,
            attempts: self.stats.attempts,
            successes: self.stats.successes,
            accuracy: self.stats.accuracy_percent(),
            best: self.stats.best,
            average: self.stats.average_measure(),
            rank: rank_for(kind, self.stats.score),
            match_result: self.mode.match_result(),
        }
    }

    fn transition(&mut self, action: SessionAction) -> TransitionResult {
        let result = self.fsm.transition(action);
        if result.success {
            self.events.push(SessionEvent::StateChanged {
                from: result.from_state,
                to: result.to_state,
            });
        }
        result
    }

    /// Start a session from `Idle`. Stats are reset; nothing carries over.
    pub fn start(&mut self) -> TransitionResult {
        let result = self.transition(SessionAction::Start);
        if !result.success {
            return result;
        }

        self.stats = SessionStats::new();
        self.elapsed = 0.0;
        self.timers = Some(SessionTimers {
            countdown: RoundClock::new(self.mode.countdown_secs()),
            clock: self.mode.session_secs().map(RoundClock::new),
            hold: Delay::new(),
            hold_secs: 0.0,
        });
        info!(mode = %self.mode.kind(), "session started");

        if self.mode.countdown_secs() == 0 {
            self.begin_play();
        }
        result
    }

    fn begin_play(&mut self) {
        if !self.transition(SessionAction::CountdownDone).success {
            return;
        }
        self.stats.time_left = self.mode.session_secs();
        self.mode.begin(&mut self.rng, &mut self.events);
    }

    /// Leave the session from any non-idle state
    pub fn quit(&mut self) -> TransitionResult {
        let result = self.transition(SessionAction::Quit);
        if result.success {
            self.release();
            debug!(mode = %self.mode.kind(), "session quit");
        }
        result
    }

    /// Throw the current session away and start a fresh one
    pub fn restart(&mut self) -> TransitionResult {
        match self.fsm.state() {
            SessionState::Idle => {}
            SessionState::Complete => {
                self.transition(SessionAction::Restart);
            }
            _ => {
                self.quit();
            }
        }
        self.start()
    }

    fn release(&mut self) {
        self.timers = None;
        self.mode.halt();
    }

    fn complete(&mut self, action: SessionAction) {
        if !self.transition(action).success {
            return;
        }
        self.release();
        self.events.push(SessionEvent::Completed);
        let summary = self.summary();
        info!(
            mode = %summary.mode,
            score = summary.score,
            attempts = summary.attempts,
            rank = summary.rank.label,
            "session complete"
        );
    }

    /// Submit a player action. Returns the outcome if it completed an
    /// attempt; anything outside `Active` is ignored.
    pub fn act(&mut self, action: M::Action) -> Option<AttemptOutcome> {
        if !self.fsm.can_transition(SessionAction::Act) {
            return None;
        }
        let evaluation = self.mode.evaluate(action, &mut self.rng)?;
        self.apply(evaluation);
        Some(evaluation.outcome)
    }

    fn apply(&mut self, evaluation: Evaluation) {
        if !self.transition(SessionAction::Act).success {
            return;
        }
        self.stats.record(&evaluation.outcome);
        self.events.push(SessionEvent::Attempt(evaluation.outcome));

        if evaluation.hold_secs > 0.0 {
            if let Some(timers) = self.timers.as_mut() {
                timers.hold.start(evaluation.hold_secs);
                timers.hold_secs = evaluation.hold_secs;
            }
        } else {
            self.resolve();
        }
    }

    fn resolve(&mut self) {
        if !self.transition(SessionAction::Resolved).success {
            return;
        }
        let signal = self.mode.settle(&mut self.rng, &mut self.events);
        self.handle(signal);
    }

    fn handle(&mut self, signal: ModeSignal) {
        match signal {
            ModeSignal::Continue => {}
            ModeSignal::Resolved(evaluation) => self.apply(evaluation),
            ModeSignal::Finished => self.complete(SessionAction::Finish),
        }
    }

    /// Advance the simulation by `dt` seconds
    pub fn tick(&mut self, dt: f32) {
        // Clamp dt to prevent large jumps
        let clamped_dt = dt.clamp(0.0, self.stepping.max_dt);

        // Fixed micro-steps so timers see the same cadence at any frame rate
        let mut remaining_dt = clamped_dt;
        while remaining_dt > 0.0 {
            let step_dt = remaining_dt.min(self.stepping.fixed_dt);
            remaining_dt -= step_dt;
            self.step(step_dt);
        }
    }

    fn step(&mut self, dt: f32) {
        if self.fsm.is_playing() {
            self.step_play(dt);
        } else if self.fsm.state() == SessionState::Countdown {
            self.step_countdown(dt);
        }
    }

    fn step_countdown(&mut self, dt: f32) {
        let Some(timers) = self.timers.as_mut() else {
            return;
        };
        let step = timers.countdown.update(dt);
        if step.ticks > 0 {
            let left = timers.countdown.remaining();
            self.events.push(SessionEvent::CountdownTick(left));
        }
        if step.expired {
            self.begin_play();
        }
    }

    fn step_play(&mut self, dt: f32) {
        self.elapsed += dt;

        let evaluating = self.fsm.state() == SessionState::Evaluating;
        let Some(timers) = self.timers.as_mut() else {
            return;
        };
        let clock = timers.clock.as_mut().map(|c| (c.update(dt), c.remaining()));
        let hold_fired = evaluating && timers.hold.update(dt);

        if let Some((step, left)) = clock {
            if step.ticks > 0 {
                self.stats.time_left = Some(left);
                self.events.push(SessionEvent::ClockTick(left));
            }
            if step.expired {
                self.complete(SessionAction::TimeUp);
                return;
            }
        }

        match self.fsm.state() {
            SessionState::Active => {
                let signal = self.mode.update(dt, &mut self.rng, &mut self.events);
                self.handle(signal);
            }
            SessionState::Evaluating if hold_fired => self.resolve(),
            _ => {}
        }
    }
}

pub type AccuracySession = Session<AccuracyGame>;
pub type PowerSession = Session<PowerGame>;
pub type FreeKickSession = Session<FreeKickGame>;
pub type PenaltySession = Session<PenaltyGame>;

impl AccuracySession {
    pub fn accuracy(config: &Config, seed: u64) -> Self {
        Session::new(AccuracyGame::new(config.accuracy.clone()), config.session.clone(), seed)
    }
}

impl PowerSession {
    pub fn power(config: &Config, seed: u64) -> Self {
        Session::new(PowerGame::new(config.power.clone()), config.session.clone(), seed)
    }
}

impl FreeKickSession {
    pub fn free_kick(config: &Config, seed: u64) -> Self {
        Session::new(FreeKickGame::new(config.free_kick.clone()), config.session.clone(), seed)
    }
}

impl PenaltySession {
    pub fn penalty(config: &Config, seed: u64) -> Self {
        Session::new(PenaltyGame::new(config.penalty.clone()), config.session.clone(), seed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modes::{AccuracyAction, PowerAction};

    fn run(session: &mut Session<impl GameMode>, secs: f32) {
        let steps = (secs / 0.05).round() as u32;
        for _ in 0..steps {
            session.tick(0.05);
        }
    }

    #[test]
    fn test_accuracy_starts_without_countdown() {
        let mut session = AccuracySession::accuracy(&Config::new(), 1);
        session.start();
        assert_eq!(session.state(), SessionState::Active);
        assert_eq!(session.stats().time_left, Some(60));
    }

    #[test]
    fn test_power_counts_down_first() {
        let mut session = PowerSession::power(&Config::new(), 1);
        session.start();
        assert_eq!(session.state(), SessionState::Countdown);
        assert_eq!(session.countdown_left(), 3);
        assert!(session.act(PowerAction::Kick).is_none());
        run(&mut session, 3.0);
        assert_eq!(session.state(), SessionState::Active);
    }

    #[test]
    fn test_actions_before_start_are_ignored() {
        let mut session = AccuracySession::accuracy(&Config::new(), 1);
        assert!(session.act(AccuracyAction::new(50.0, 50.0)).is_none());
        assert_eq!(session.stats().attempts, 0);
    }

    #[test]
    fn test_accuracy_returns_to_active_after_kick() {
        let mut session = AccuracySession::accuracy(&Config::new(), 1);
        session.start();
        let target = session.round().target;
        let outcome = session.act(AccuracyAction::new(target.x, target.y)).unwrap();
        assert_eq!(outcome.points, 100);
        assert_eq!(session.state(), SessionState::Active);
        assert_eq!(session.stats().score, 100);
    }

    #[test]
    fn test_clock_completes_session() {
        let mut session = AccuracySession::accuracy(&Config::new(), 1);
        session.start();
        run(&mut session, 59.0);
        assert_eq!(session.state(), SessionState::Active);
        assert_eq!(session.stats().time_left, Some(1));
        run(&mut session, 1.0);
        assert!(session.is_complete());
        assert!(!session.is_playing());
        assert!(session.act(AccuracyAction::new(50.0, 50.0)).is_none());
        assert!(session.drain_events().contains(&SessionEvent::Completed));
    }

    #[test]
    fn test_power_holds_then_resumes() {
        let mut session = PowerSession::power(&Config::new(), 1);
        session.start();
        run(&mut session, 3.0);
        session.act(PowerAction::Kick).unwrap();
        assert_eq!(session.state(), SessionState::Evaluating);
        assert!(session.act(PowerAction::Kick).is_none());
        run(&mut session, 2.0);
        assert_eq!(session.state(), SessionState::Active);
        assert_eq!(session.stats().attempts, 1);
    }

    #[test]
    fn test_large_dt_is_clamped() {
        let mut session = AccuracySession::accuracy(&Config::new(), 1);
        session.start();
        session.tick(30.0);
        assert!((session.elapsed() - 0.25).abs() < 1e-4);
    }

    #[test]
    fn test_hold_progress_tracks_flight() {
        let mut session = PowerSession::power(&Config::new(), 1);
        session.start();
        run(&mut session, 3.0);
        assert_eq!(session.hold_progress(), 0.0);
        session.act(PowerAction::Kick);
        run(&mut session, 1.0);
        assert!((session.hold_progress() - 0.5).abs() < 0.01);
    }

    #[test]
    fn test_quit_releases_timers() {
        let mut session = PowerSession::power(&Config::new(), 1);
        session.start();
        run(&mut session, 3.5);
        session.quit();
        assert_eq!(session.state(), SessionState::Idle);
        session.drain_events();
        run(&mut session, 5.0);
        assert!(session.drain_events().is_empty());
    }

    #[test]
    fn test_restart_resets_stats() {
        let mut session = AccuracySession::accuracy(&Config::new(), 1);
        session.start();
        let target = session.round().target;
        session.act(AccuracyAction::new(target.x, target.y));
        run(&mut session, 60.0);
        assert!(session.stats().score > 0);

        let result = session.restart();
        assert!(result.success);
        assert_eq!(session.state(), SessionState::Active);
        assert_eq!(session.stats().score, 0);
        assert_eq!(session.stats().attempts, 0);
    }

    #[test]
    fn test_summary_uses_mode_ranks() {
        let mut session = PowerSession::power(&Config::new(), 1);
        session.start();
        let summary = session.summary();
        assert_eq!(summary.mode, ModeKind::Power);
        assert_eq!(summary.rank.label, "Pemula");
        assert_eq!(summary.match_result, None);
    }
}
