//! Keyboard and pointer input handling

use glam::Vec2;

use crate::field::field_point_from_pixels;
use crate::modes::{AccuracyAction, FreeKickAction, PenaltyAction, PowerAction};
use crate::params::Params;

/// Handle key down event in power mode
pub fn handle_key_down(key: &str) -> Option<PowerAction> {
    match key {
        " " | "Space" | "Spacebar" => Some(PowerAction::Kick),
        _ => None,
    }
}

/// Nudge the free kick sliders with the arrow keys
pub fn adjust_free_kick(key: &str, current: FreeKickAction) -> FreeKickAction {
    let step = Params::POWER_STEP;
    let angle_step = step as i32;
    match key {
        "ArrowLeft" | "a" | "A" => FreeKickAction::new(current.angle - angle_step, current.power),
        "ArrowRight" | "d" | "D" => FreeKickAction::new(current.angle + angle_step, current.power),
        "ArrowUp" | "w" | "W" => FreeKickAction::new(current.angle, current.power + step),
        "ArrowDown" | "s" | "S" => {
            FreeKickAction::new(current.angle, current.power.saturating_sub(step))
        }
        _ => current,
    }
}

/// A click on the accuracy pitch, in screen pixels
pub fn accuracy_click(pointer: Vec2, origin: Vec2, size: Vec2) -> AccuracyAction {
    let point = field_point_from_pixels(pointer, origin, size);
    AccuracyAction::new(point.x, point.y)
}

/// A click on the penalty goal picks the aim spot
pub fn penalty_aim(pointer: Vec2, origin: Vec2, size: Vec2) -> PenaltyAction {
    PenaltyAction::Aim(field_point_from_pixels(pointer, origin, size))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_space_kicks() {
        assert_eq!(handle_key_down(" "), Some(PowerAction::Kick));
        assert_eq!(handle_key_down("Space"), Some(PowerAction::Kick));
        assert_eq!(handle_key_down("Enter"), None);
    }

    #[test]
    fn test_arrows_move_sliders() {
        let action = FreeKickAction::default();
        let left = adjust_free_kick("ArrowLeft", action);
        assert_eq!(left.angle, -5);
        let up = adjust_free_kick("ArrowUp", action);
        assert_eq!(up.power, 55);
        assert_eq!(adjust_free_kick("x", action), action);
    }

    #[test]
    fn test_sliders_stay_in_range() {
        let action = FreeKickAction::new(30, 100);
        assert_eq!(adjust_free_kick("ArrowRight", action).angle, 30);
        assert_eq!(adjust_free_kick("ArrowUp", action).power, 100);
        let low = FreeKickAction::new(0, 20);
        assert_eq!(adjust_free_kick("ArrowDown", low).power, 20);
    }

    #[test]
    fn test_pointer_maps_to_field() {
        let origin = Vec2::new(100.0, 50.0);
        let size = Vec2::new(400.0, 200.0);
        let action = accuracy_click(Vec2::new(300.0, 150.0), origin, size);
        assert_eq!(action.click, Vec2::new(50.0, 50.0));

        let aim = penalty_aim(Vec2::new(100.0, 50.0), origin, size);
        assert_eq!(aim, PenaltyAction::Aim(Vec2::ZERO));
    }
}
