//! Movement domain: debug-only gizmo drawing for the locomotion sensors.

use bevy::color::palettes::css::{GRAY, LIME, ORANGE};
use bevy::prelude::*;

use crate::movement::{MovementConfig, MovementState, Player, WallSide};

/// Draw the sensor anchors and radii, lit up when they report contact.
/// Purely diagnostic.
pub(crate) fn draw_sensor_gizmos(
    mut gizmos: Gizmos,
    query: Query<(&Transform, &MovementConfig, &MovementState), With<Player>>,
) {
    for (transform, config, state) in &query {
        let origin = transform.translation.truncate();

        if let Some(offset) = config.ground_check {
            let color = if state.grounded { LIME } else { GRAY };
            gizmos.circle_2d(origin + offset, config.ground_check_radius, color);
        }

        if let Some(offset) = config.wall_check_left {
            let color = if state.wall_side == WallSide::Left {
                ORANGE
            } else {
                GRAY
            };
            gizmos.circle_2d(origin + offset, config.wall_check_radius, color);
        }

        if let Some(offset) = config.wall_check_right {
            let color = if state.wall_side == WallSide::Right {
                ORANGE
            } else {
                GRAY
            };
            gizmos.circle_2d(origin + offset, config.wall_check_radius, color);
        }
    }
}
