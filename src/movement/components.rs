//! Movement domain: components and physics layers for locomotion.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::content::LocomotionDef;

/// Physics layers for collision filtering
#[derive(PhysicsLayer, Clone, Copy, Debug, Default)]
pub enum GameLayer {
    #[default]
    Default,
    /// Ground surfaces (floors, platforms)
    Ground,
    /// Wall surfaces
    Wall,
    /// Player character
    Player,
}

#[derive(Component, Debug)]
pub struct Player;

/// Marker for ground colliders
#[derive(Component, Debug)]
pub struct Ground;

/// Marker for wall colliders
#[derive(Component, Debug)]
pub struct Wall;

/// Per-character locomotion tunables, fixed at spawn.
///
/// Sensor anchors are local offsets from the character origin; an unset
/// anchor disables that sensor (it reports no contact).
#[derive(Component, Debug, Clone)]
pub struct MovementConfig {
    pub move_speed: f32,
    pub jump_force: f32,
    pub ground_check: Option<Vec2>,
    pub ground_check_radius: f32,
    pub dash_speed: f32,
    pub dash_duration: f32,
    pub dash_cooldown: f32,
    /// Preserve vertical velocity during a dash instead of zeroing it.
    pub dash_keeps_vertical_velocity: bool,
    pub wall_check_left: Option<Vec2>,
    pub wall_check_right: Option<Vec2>,
    pub wall_check_radius: f32,
    pub wall_slide_speed: f32,
    pub enable_wall_climb: bool,
    pub wall_climb_speed: f32,
    pub wall_jump_x: f32,
    pub wall_jump_y: f32,
    /// Seconds after a wall jump during which wall sliding cannot re-engage.
    pub wall_jump_lock_time: f32,
    /// Layers the ground/wall sensors test against.
    pub solid_mask: LayerMask,
    pub default_gravity_scale: f32,
}

impl Default for MovementConfig {
    fn default() -> Self {
        Self {
            move_speed: 320.0,
            jump_force: 480.0,
            ground_check: Some(Vec2::new(0.0, -26.0)),
            ground_check_radius: 6.0,
            dash_speed: 720.0,
            dash_duration: 0.12,
            dash_cooldown: 0.35,
            dash_keeps_vertical_velocity: false,
            wall_check_left: Some(Vec2::new(-14.0, 0.0)),
            wall_check_right: Some(Vec2::new(14.0, 0.0)),
            wall_check_radius: 6.0,
            wall_slide_speed: 80.0,
            enable_wall_climb: true,
            wall_climb_speed: 120.0,
            wall_jump_x: 400.0,
            wall_jump_y: 480.0,
            wall_jump_lock_time: 0.15,
            solid_mask: LayerMask::from([GameLayer::Ground, GameLayer::Wall]),
            default_gravity_scale: 1.0,
        }
    }
}

impl MovementConfig {
    /// Build the runtime config from a loaded def. The collision mask is not
    /// data-driven; sensors always test against level solids.
    pub fn from_def(def: &LocomotionDef) -> Self {
        Self {
            move_speed: def.move_speed,
            jump_force: def.jump_force,
            ground_check: def.ground_check_offset.map(Vec2::from),
            ground_check_radius: def.ground_check_radius,
            dash_speed: def.dash_speed,
            dash_duration: def.dash_duration,
            dash_cooldown: def.dash_cooldown,
            dash_keeps_vertical_velocity: def.dash_keeps_vertical_velocity,
            wall_check_left: def.wall_check_left_offset.map(Vec2::from),
            wall_check_right: def.wall_check_right_offset.map(Vec2::from),
            wall_check_radius: def.wall_check_radius,
            wall_slide_speed: def.wall_slide_speed,
            enable_wall_climb: def.enable_wall_climb,
            wall_climb_speed: def.wall_climb_speed,
            wall_jump_x: def.wall_jump_x,
            wall_jump_y: def.wall_jump_y,
            wall_jump_lock_time: def.wall_jump_lock_time,
            solid_mask: LayerMask::from([GameLayer::Ground, GameLayer::Wall]),
            default_gravity_scale: def.default_gravity_scale,
        }
    }
}

/// Edge-triggered input latch.
///
/// The one-shot flags are set by the frame-rate input sampler and cleared by
/// the locomotion step once per physics tick, whether or not they were acted
/// on. Repeated presses before consumption collapse into one.
#[derive(Component, Debug, Default)]
pub struct InputLatch {
    pub axis: Vec2,
    pub jump_pressed: bool,
    pub dash_pressed: bool,
}

impl InputLatch {
    pub fn clear_one_shots(&mut self) {
        self.jump_pressed = false;
        self.dash_pressed = false;
    }
}

/// The active movement mode. Exactly one per physics tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MotionState {
    #[default]
    Normal,
    Dashing,
    WallSliding,
    /// Transient post-wall-jump mode: normal control, but wall sliding is
    /// suppressed until the lock timer runs out.
    WallJumpLocked,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Facing {
    #[default]
    Right,
    Left,
}

impl Facing {
    pub fn sign_x(self) -> f32 {
        match self {
            Facing::Right => 1.0,
            Facing::Left => -1.0,
        }
    }

    pub fn from_sign(sign: f32) -> Self {
        if sign < 0.0 { Facing::Left } else { Facing::Right }
    }
}

/// Which side of the character is touching a wall this tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WallSide {
    #[default]
    None,
    Left,
    Right,
}

impl WallSide {
    pub fn sign_x(self) -> f32 {
        match self {
            WallSide::None => 0.0,
            WallSide::Left => -1.0,
            WallSide::Right => 1.0,
        }
    }
}

#[derive(Component, Debug, Default)]
pub struct MovementState {
    pub motion: MotionState,
    pub facing: Facing,
    /// Sensor results, refreshed each physics tick before the locomotion step.
    pub grounded: bool,
    pub wall_side: WallSide,
    /// Remaining dash burst, decremented by the physics step while dashing.
    pub dash_time_left: f32,
    pub dash_cooldown_left: f32,
    pub wall_jump_lock_left: f32,
}

impl MovementState {
    /// Advance the frame-rate countdown timers. Clamped at zero; zero means
    /// ready.
    pub fn tick_timers(&mut self, dt: f32) {
        if self.dash_cooldown_left > 0.0 {
            self.dash_cooldown_left = (self.dash_cooldown_left - dt).max(0.0);
        }
        if self.wall_jump_lock_left > 0.0 {
            self.wall_jump_lock_left = (self.wall_jump_lock_left - dt).max(0.0);
        }
    }
}
