use glam::Vec2;

use crate::params::Params;

/// Axis-aligned region of the field, in percentage units
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Zone {
    pub min: Vec2,
    pub max: Vec2,
}

impl Zone {
    pub const fn new(min: Vec2, max: Vec2) -> Self {
        Self { min, max }
    }

    /// The whole visible field
    pub const FIELD: Zone = Zone::new(
        Vec2::new(Params::FIELD_MIN, Params::FIELD_MIN),
        Vec2::new(Params::FIELD_MAX, Params::FIELD_MAX),
    );

    /// Free-kick goal mouth: where the ball must land to be on target
    pub const FREE_KICK_GOAL: Zone = Zone::new(Vec2::new(20.0, 10.0), Vec2::new(80.0, 60.0));

    /// Penalty goal mouth: clicks are clamped into it
    pub const PENALTY_GOAL: Zone = Zone::new(Vec2::new(20.0, 20.0), Vec2::new(80.0, 70.0));

    pub fn center(&self) -> Vec2 {
        (self.min + self.max) * 0.5
    }

    /// Inclusive on every edge
    pub fn contains(&self, point: Vec2) -> bool {
        point.x >= self.min.x
            && point.x <= self.max.x
            && point.y >= self.min.y
            && point.y <= self.max.y
    }

    pub fn clamp(&self, point: Vec2) -> Vec2 {
        point.clamp(self.min, self.max)
    }
}

/// Keep a point inside the visible field
pub fn clamp_to_field(point: Vec2) -> Vec2 {
    Zone::FIELD.clamp(point)
}

/// Convert a pointer position inside a rendered rectangle into field
/// percentages. Degenerate rectangles map to the field centre.
pub fn field_point_from_pixels(pointer: Vec2, origin: Vec2, size: Vec2) -> Vec2 {
    if size.x <= 0.0 || size.y <= 0.0 {
        return Zone::FIELD.center();
    }
    clamp_to_field((pointer - origin) / size * Params::FIELD_MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zone_contains_edges() {
        let goal = Zone::FREE_KICK_GOAL;
        assert!(goal.contains(Vec2::new(20.0, 10.0)));
        assert!(goal.contains(Vec2::new(80.0, 60.0)));
        assert!(!goal.contains(Vec2::new(80.1, 30.0)));
        assert!(!goal.contains(Vec2::new(50.0, 9.9)));
    }

    #[test]
    fn test_penalty_clamp() {
        let clamped = Zone::PENALTY_GOAL.clamp(Vec2::new(5.0, 95.0));
        assert_eq!(clamped, Vec2::new(20.0, 70.0));
    }

    #[test]
    fn test_pixels_to_field() {
        let p = field_point_from_pixels(
            Vec2::new(150.0, 100.0),
            Vec2::new(100.0, 50.0),
            Vec2::new(200.0, 100.0),
        );
        assert_eq!(p, Vec2::new(25.0, 50.0));
    }

    #[test]
    fn test_pixels_outside_rect_are_clamped() {
        let p = field_point_from_pixels(Vec2::new(-40.0, 900.0), Vec2::ZERO, Vec2::new(400.0, 300.0));
        assert_eq!(p, Vec2::new(0.0, 100.0));
    }

    #[test]
    fn test_degenerate_rect_maps_to_center() {
        let p = field_point_from_pixels(Vec2::new(10.0, 10.0), Vec2::ZERO, Vec2::ZERO);
        assert_eq!(p, Vec2::new(50.0, 50.0));
    }
}
