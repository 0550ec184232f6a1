//! Movement domain: player spawn from loaded locomotion settings.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::content::LocomotionSettings;
use crate::movement::{GameLayer, InputLatch, MovementConfig, MovementState, Player};

pub(crate) fn spawn_player(mut commands: Commands, settings: Res<LocomotionSettings>) {
    let config = MovementConfig::from_def(&settings.0);
    let default_gravity_scale = config.default_gravity_scale;

    info!(
        "Spawning player: move_speed={}, jump_force={}, dash_speed={}, wall_climb={}",
        config.move_speed, config.jump_force, config.dash_speed, config.enable_wall_climb
    );

    commands.spawn((
        // Identity & movement
        (
            Player,
            config,
            MovementState::default(),
            InputLatch::default(),
        ),
        // Rendering
        Sprite {
            color: Color::srgb(0.9, 0.9, 0.9),
            custom_size: Some(Vec2::new(24.0, 48.0)),
            ..default()
        },
        Transform::from_xyz(0.0, 100.0, 0.0),
        // Physics
        (
            RigidBody::Dynamic,
            Collider::rectangle(24.0, 48.0),
            LockedAxes::ROTATION_LOCKED,
            LinearVelocity::default(),
            GravityScale(default_gravity_scale),
            Friction::new(0.0),
            CollisionLayers::new(GameLayer::Player, [GameLayer::Ground, GameLayer::Wall]),
        ),
    ));
}
