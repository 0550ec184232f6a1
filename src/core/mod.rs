//! Core domain: camera and the demo arena the controller runs in.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::movement::{GameLayer, Ground, Wall};

pub struct CorePlugin;

impl Plugin for CorePlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, (setup_camera, spawn_arena));
    }
}

fn setup_camera(mut commands: Commands) {
    commands.spawn(Camera2d);
}

/// A floor slab flanked by two tall walls, enough to exercise every movement
/// mode by hand.
fn spawn_arena(mut commands: Commands) {
    // Floor
    commands.spawn((
        Ground,
        Sprite {
            color: Color::srgb(0.35, 0.35, 0.4),
            custom_size: Some(Vec2::new(1100.0, 40.0)),
            ..default()
        },
        Transform::from_xyz(0.0, -200.0, 0.0),
        RigidBody::Static,
        Collider::rectangle(1100.0, 40.0),
        CollisionLayers::new(GameLayer::Ground, LayerMask::ALL),
    ));

    // Side walls
    for x in [-550.0, 550.0] {
        commands.spawn((
            Wall,
            Sprite {
                color: Color::srgb(0.3, 0.3, 0.35),
                custom_size: Some(Vec2::new(40.0, 600.0)),
                ..default()
            },
            Transform::from_xyz(x, 80.0, 0.0),
            RigidBody::Static,
            Collider::rectangle(40.0, 600.0),
            CollisionLayers::new(GameLayer::Wall, LayerMask::ALL),
        ));
    }
}
