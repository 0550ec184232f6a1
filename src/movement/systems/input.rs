//! Movement domain: input sampling for locomotion.

use bevy::prelude::*;

use crate::movement::{Facing, InputLatch, MotionState, MovementState, Player};

/// Sample the keyboard once per frame and latch it for the physics tick.
///
/// Press edges are ORed into the one-shot flags; only the locomotion step
/// clears them, so a press between physics ticks is never dropped.
pub(crate) fn latch_input(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut query: Query<(&mut InputLatch, &mut MovementState), With<Player>>,
) {
    // Horizontal axis
    let mut x = 0.0;
    if keyboard.pressed(KeyCode::KeyA) || keyboard.pressed(KeyCode::ArrowLeft) {
        x -= 1.0;
    }
    if keyboard.pressed(KeyCode::KeyD) || keyboard.pressed(KeyCode::ArrowRight) {
        x += 1.0;
    }

    // Vertical axis (wall climb)
    let mut y = 0.0;
    if keyboard.pressed(KeyCode::KeyS) || keyboard.pressed(KeyCode::ArrowDown) {
        y -= 1.0;
    }
    if keyboard.pressed(KeyCode::KeyW) || keyboard.pressed(KeyCode::ArrowUp) {
        y += 1.0;
    }

    let jump_edge = keyboard.just_pressed(KeyCode::Space) || keyboard.just_pressed(KeyCode::KeyK);
    let dash_edge =
        keyboard.just_pressed(KeyCode::ShiftLeft) || keyboard.just_pressed(KeyCode::KeyJ);

    for (mut latch, mut state) in &mut query {
        latch.axis = Vec2::new(x, y);

        // Facing follows held input, but not mid-dash (the burst direction is
        // fixed at trigger time) and not while wall-jump locked (the kick
        // direction sticks).
        let facing_locked =
            state.motion == MotionState::Dashing || state.wall_jump_lock_left > 0.0;
        if x.abs() > 0.01 && !facing_locked {
            state.facing = Facing::from_sign(x.signum());
        }
        if jump_edge {
            latch.jump_pressed = true;
        }
        if dash_edge {
            latch.dash_pressed = true;
        }
    }
}
