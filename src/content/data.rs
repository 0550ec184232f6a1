//! Data definition for the locomotion RON file.
//!
//! `LocomotionDef` mirrors the structure of assets/data/locomotion.ron and
//! exists purely for deserialization; at spawn it is converted into the
//! runtime `MovementConfig` component.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LocomotionDef {
    pub move_speed: f32,
    pub jump_force: f32,
    pub ground_check_offset: Option<(f32, f32)>,
    pub ground_check_radius: f32,
    pub dash_speed: f32,
    pub dash_duration: f32,
    pub dash_cooldown: f32,
    pub dash_keeps_vertical_velocity: bool,
    pub wall_check_left_offset: Option<(f32, f32)>,
    pub wall_check_right_offset: Option<(f32, f32)>,
    pub wall_check_radius: f32,
    pub wall_slide_speed: f32,
    pub enable_wall_climb: bool,
    pub wall_climb_speed: f32,
    pub wall_jump_x: f32,
    pub wall_jump_y: f32,
    pub wall_jump_lock_time: f32,
    pub default_gravity_scale: f32,
}

impl Default for LocomotionDef {
    fn default() -> Self {
        Self {
            move_speed: 320.0,
            jump_force: 480.0,
            ground_check_offset: Some((0.0, -26.0)),
            ground_check_radius: 6.0,
            dash_speed: 720.0,
            dash_duration: 0.12,
            dash_cooldown: 0.35,
            dash_keeps_vertical_velocity: false,
            wall_check_left_offset: Some((-14.0, 0.0)),
            wall_check_right_offset: Some((14.0, 0.0)),
            wall_check_radius: 6.0,
            wall_slide_speed: 80.0,
            enable_wall_climb: true,
            wall_climb_speed: 120.0,
            wall_jump_x: 400.0,
            wall_jump_y: 480.0,
            wall_jump_lock_time: 0.15,
            default_gravity_scale: 1.0,
        }
    }
}

impl LocomotionDef {
    /// Check the tunables a broken data file is most likely to get wrong.
    /// All speeds, radii, and durations must be non-negative.
    pub fn validate(&self) -> Result<(), String> {
        let non_negative = [
            ("move_speed", self.move_speed),
            ("jump_force", self.jump_force),
            ("ground_check_radius", self.ground_check_radius),
            ("dash_speed", self.dash_speed),
            ("dash_duration", self.dash_duration),
            ("dash_cooldown", self.dash_cooldown),
            ("wall_check_radius", self.wall_check_radius),
            ("wall_slide_speed", self.wall_slide_speed),
            ("wall_climb_speed", self.wall_climb_speed),
            ("wall_jump_x", self.wall_jump_x),
            ("wall_jump_y", self.wall_jump_y),
            ("wall_jump_lock_time", self.wall_jump_lock_time),
        ];

        for (name, value) in non_negative {
            if value < 0.0 {
                return Err(format!("{} must be non-negative, got {}", name, value));
            }
        }

        Ok(())
    }
}
