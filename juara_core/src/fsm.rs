//! Session State Machine
//!
//! Shared by every mode: `Idle -> Countdown -> Active <-> Evaluating -> Complete`.

use std::fmt;

use tracing::{debug, warn};

/// Session states
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Idle,
    Countdown,
    Active,
    Evaluating,
    Complete,
}

impl fmt::Display for SessionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

/// Actions that trigger state transitions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionAction {
    Start,
    CountdownDone,
    Act,
    Resolved,
    TimeUp,
    Finish,
    Restart,
    Quit,
}

/// Result of a state transition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransitionResult {
    pub success: bool,
    pub from_state: SessionState,
    pub to_state: SessionState,
    pub action: SessionAction,
}

/// Session finite state machine
#[derive(Debug, Clone)]
pub struct SessionFsm {
    state: SessionState,
}

impl SessionFsm {
    pub fn new() -> Self {
        Self {
            state: SessionState::Idle,
        }
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Check if a transition is valid
    pub fn can_transition(&self, action: SessionAction) -> bool {
        self.next_state(action).is_some()
    }

    /// Attempt a transition
    pub fn transition(&mut self, action: SessionAction) -> TransitionResult {
        let from_state = self.state;

        if let Some(next_state) = self.next_state(action) {
            self.state = next_state;
            debug!(from = %from_state, to = %next_state, ?action, "session transition");
            TransitionResult {
                success: true,
                from_state,
                to_state: next_state,
                action,
            }
        } else {
            warn!(state = %from_state, ?action, "rejected session transition");
            TransitionResult {
                success: false,
                from_state,
                to_state: from_state,
                action,
            }
        }
    }

    /// Get next state for a given action (if valid)
    fn next_state(&self, action: SessionAction) -> Option<SessionState> {
        use SessionAction as A;
        use SessionState as S;

        match (self.state, action) {
            (S::Idle, A::Start) => Some(S::Countdown),

            (S::Countdown, A::CountdownDone) => Some(S::Active),
            (S::Countdown, A::Quit) => Some(S::Idle),

            (S::Active, A::Act) => Some(S::Evaluating),
            (S::Active, A::TimeUp | A::Finish) => Some(S::Complete),
            (S::Active, A::Quit) => Some(S::Idle),

            (S::Evaluating, A::Resolved) => Some(S::Active),
            (S::Evaluating, A::TimeUp | A::Finish) => Some(S::Complete),
            (S::Evaluating, A::Quit) => Some(S::Idle),

            (S::Complete, A::Restart | A::Quit) => Some(S::Idle),

            _ => None,
        }
    }

    /// Clock is running and attempts are being made
    pub fn is_playing(&self) -> bool {
        matches!(self.state, SessionState::Active | SessionState::Evaluating)
    }

    pub fn is_complete(&self) -> bool {
        self.state == SessionState::Complete
    }
}

impl Default for SessionFsm {
    fn default() -> Self {
        Self::new()
    }
}
