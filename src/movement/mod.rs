//! Movement domain: the platformer locomotion controller.
//!
//! Per-frame (`Update`): keyboard sampling into the input latch, countdown
//! timer advancement. Per physics tick (`FixedUpdate`, ahead of the avian
//! physics step): sensor probes, then the locomotion state machine, which
//! commits a velocity/gravity-scale command to the rigid body.

mod bootstrap;
mod components;
#[cfg(feature = "dev-tools")]
mod dev;
mod machine;
mod systems;


pub use components::{
    Facing, GameLayer, Ground, InputLatch, MotionState, MovementConfig, MovementState, Player,
    Wall, WallSide,
};

use bevy::prelude::*;

use systems::{advance_timers, apply_locomotion, latch_input, probe_ground, probe_walls};

pub struct MovementPlugin;

impl Plugin for MovementPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, bootstrap::spawn_player)
            .add_systems(Update, (latch_input, advance_timers))
            .add_systems(
                FixedUpdate,
                (probe_ground, probe_walls, apply_locomotion).chain(),
            );

        #[cfg(feature = "dev-tools")]
        app.add_systems(Update, dev::draw_sensor_gizmos);
    }
}
