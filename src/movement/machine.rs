//! Movement domain: the per-tick locomotion state machine.
//!
//! `locomotion_step` is the decision core: it consumes the input latch and
//! the sensor results persisted in `MovementState`, advances the dash timer,
//! and produces the velocity/gravity-scale command for this physics tick.
//! It is deliberately free of ECS plumbing so the branch logic can be tested
//! directly.

use bevy::prelude::*;

use crate::movement::{Facing, InputLatch, MotionState, MovementConfig, MovementState};

/// Velocity and gravity-scale command emitted for one physics tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BodyCommand {
    pub velocity: Vec2,
    pub gravity_scale: f32,
}

/// Run one physics tick of the state machine.
///
/// Branches are exclusive and evaluated in a fixed order: an active dash
/// overrides everything, then wall interaction, then normal movement with
/// jump and dash triggers. Every branch clears the one-shot input flags
/// before returning.
pub(crate) fn locomotion_step(
    config: &MovementConfig,
    state: &mut MovementState,
    latch: &mut InputLatch,
    velocity: Vec2,
    dt: f32,
) -> BodyCommand {
    // Active dash: burst velocity in the facing direction, gravity off.
    if state.motion == MotionState::Dashing {
        state.dash_time_left -= dt;
        let ended = state.dash_time_left <= 0.0;

        let vy = if config.dash_keeps_vertical_velocity {
            velocity.y
        } else {
            0.0
        };
        let cmd = BodyCommand {
            velocity: Vec2::new(state.facing.sign_x() * config.dash_speed, vy),
            gravity_scale: if ended {
                config.default_gravity_scale
            } else {
                0.0
            },
        };

        if ended {
            state.dash_time_left = 0.0;
            state.motion = MotionState::Normal;
            debug!("Dash ended, facing {:?}", state.facing);
        }

        latch.clear_one_shots();
        return cmd;
    }

    // Wall interaction: requires airborne contact, pushing into the wall,
    // no wall-jump lock, and not moving strongly upward.
    let wall_sign = state.wall_side.sign_x();
    let pressing_into_wall = wall_sign != 0.0 && latch.axis.x * wall_sign > 0.1;
    let wall_sliding = !state.grounded
        && wall_sign != 0.0
        && state.wall_jump_lock_left <= 0.0
        && pressing_into_wall
        && velocity.y <= 0.1;

    if wall_sliding {
        // Climbing overrides the capped slide; horizontal drift is zeroed
        // while clinging either way.
        let mut cmd = if config.enable_wall_climb && latch.axis.y > 0.1 {
            BodyCommand {
                velocity: Vec2::new(0.0, config.wall_climb_speed),
                gravity_scale: 0.0,
            }
        } else {
            BodyCommand {
                velocity: Vec2::new(0.0, velocity.y.max(-config.wall_slide_speed)),
                gravity_scale: config.default_gravity_scale,
            }
        };
        state.motion = MotionState::WallSliding;

        if latch.jump_pressed {
            let away = -wall_sign;
            cmd = BodyCommand {
                velocity: Vec2::new(away * config.wall_jump_x, config.wall_jump_y),
                gravity_scale: config.default_gravity_scale,
            };
            state.facing = Facing::from_sign(away);
            state.wall_jump_lock_left = config.wall_jump_lock_time;
            state.motion = MotionState::WallJumpLocked;
            debug!("Wall jump off {:?} wall", state.wall_side);
        }

        latch.clear_one_shots();
        return cmd;
    }

    // Normal movement: direct horizontal velocity control, no smoothing.
    state.motion = if state.wall_jump_lock_left > 0.0 {
        MotionState::WallJumpLocked
    } else {
        MotionState::Normal
    };
    let mut cmd = BodyCommand {
        velocity: Vec2::new(latch.axis.x * config.move_speed, velocity.y),
        gravity_scale: config.default_gravity_scale,
    };

    // Ground jump. Airborne presses without a wall are dropped.
    if latch.jump_pressed && state.grounded {
        cmd.velocity.y = config.jump_force;
    }

    // Dash trigger. Gravity cuts out immediately; the burst velocity itself
    // starts on the next tick's dash branch.
    if latch.dash_pressed && state.dash_cooldown_left <= 0.0 {
        state.motion = MotionState::Dashing;
        state.dash_time_left = config.dash_duration;
        state.dash_cooldown_left = config.dash_cooldown;
        cmd.gravity_scale = 0.0;
        if latch.axis.x.abs() > 0.01 {
            state.facing = Facing::from_sign(latch.axis.x.signum());
        }
        debug!("Dash started, facing {:?}", state.facing);
    }

    // One-shots are consumed whether or not they triggered anything.
    latch.clear_one_shots();
    cmd
}
