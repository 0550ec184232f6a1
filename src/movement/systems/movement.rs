//! Movement domain: timer advancement and the locomotion tick.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::movement::machine::locomotion_step;
use crate::movement::{InputLatch, MovementConfig, MovementState, Player};

/// Advance the cooldown/lockout timers every frame, so they track wall-clock
/// time rather than the physics tick rate.
pub(crate) fn advance_timers(
    time: Res<Time>,
    mut query: Query<&mut MovementState, With<Player>>,
) {
    let dt = time.delta_secs();

    for mut state in &mut query {
        state.tick_timers(dt);
    }
}

/// Run the state machine once per physics tick and commit its command to the
/// rigid body. Also consumes the one-shot input flags.
pub(crate) fn apply_locomotion(
    time: Res<Time>,
    mut query: Query<
        (
            &MovementConfig,
            &mut MovementState,
            &mut InputLatch,
            &mut LinearVelocity,
            &mut GravityScale,
        ),
        With<Player>,
    >,
) {
    let dt = time.delta_secs();

    for (config, mut state, mut latch, mut velocity, mut gravity) in &mut query {
        let cmd = locomotion_step(config, &mut state, &mut latch, velocity.0, dt);
        velocity.0 = cmd.velocity;
        gravity.0 = cmd.gravity_scale;
    }
}
