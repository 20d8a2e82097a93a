use glam::Vec2;

/// Power-meter scoring tier; each tier is closed at its lower bound
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PowerTier {
    Perfect,
    Great,
    Good,
    Fair,
    Weak,
}

impl PowerTier {
    pub fn from_power(power: u32) -> Self {
        match power {
            95.. => Self::Perfect,
            85..=94 => Self::Great,
            70..=84 => Self::Good,
            50..=69 => Self::Fair,
            _ => Self::Weak,
        }
    }

    pub fn points(self) -> u32 {
        match self {
            Self::Perfect => 500,
            Self::Great => 300,
            Self::Good => 200,
            Self::Fair => 100,
            Self::Weak => 50,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Perfect => "PERFECT!",
            Self::Great => "HEBAT!",
            Self::Good => "BAGUS!",
            Self::Fair => "LUMAYAN",
            Self::Weak => "LEMAH",
        }
    }
}

/// Categorical result of one attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutcomeKind {
    Hit,
    Miss,
    Save,
    Goal,
    WallBlock,
    Strike(PowerTier),
}

impl OutcomeKind {
    /// Counts toward the session's success total
    pub fn is_success(self) -> bool {
        matches!(
            self,
            Self::Hit | Self::Goal | Self::Strike(PowerTier::Perfect)
        )
    }
}

/// Result of evaluating one action against one round
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AttemptOutcome {
    pub kind: OutcomeKind,
    pub points: u32,
    pub label: &'static str,
    /// Captured power or goal distance; feeds best/average metrics
    pub measure: Option<u32>,
    /// Where the ball ended up, when the mode has one
    pub landing: Option<Vec2>,
}

impl AttemptOutcome {
    pub fn new(kind: OutcomeKind, points: u32, label: &'static str) -> Self {
        Self {
            kind,
            points,
            label,
            measure: None,
            landing: None,
        }
    }

    pub fn with_measure(mut self, measure: u32) -> Self {
        self.measure = Some(measure);
        self
    }

    pub fn with_landing(mut self, landing: Vec2) -> Self {
        self.landing = Some(landing);
        self
    }

    pub fn is_success(&self) -> bool {
        self.kind.is_success()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_power_tier_boundaries() {
        assert_eq!(PowerTier::from_power(100), PowerTier::Perfect);
        assert_eq!(PowerTier::from_power(95), PowerTier::Perfect);
        assert_eq!(PowerTier::from_power(94), PowerTier::Great);
        assert_eq!(PowerTier::from_power(85), PowerTier::Great);
        assert_eq!(PowerTier::from_power(84), PowerTier::Good);
        assert_eq!(PowerTier::from_power(70), PowerTier::Good);
        assert_eq!(PowerTier::from_power(69), PowerTier::Fair);
        assert_eq!(PowerTier::from_power(50), PowerTier::Fair);
        assert_eq!(PowerTier::from_power(49), PowerTier::Weak);
        assert_eq!(PowerTier::from_power(0), PowerTier::Weak);
    }

    #[test]
    fn test_exactly_95_awards_500() {
        assert_eq!(PowerTier::from_power(95).points(), 500);
    }

    #[test]
    fn test_success_kinds() {
        assert!(OutcomeKind::Hit.is_success());
        assert!(OutcomeKind::Goal.is_success());
        assert!(OutcomeKind::Strike(PowerTier::Perfect).is_success());
        assert!(!OutcomeKind::Strike(PowerTier::Great).is_success());
        assert!(!OutcomeKind::Save.is_success());
        assert!(!OutcomeKind::WallBlock.is_success());
        assert!(!OutcomeKind::Miss.is_success());
    }
}
