//! Movement domain: ground and wall sensors.
//!
//! Each sensor is a circle-overlap query at a configured anchor offset,
//! filtered to the character's solid mask. They run at the start of every
//! physics tick, before the locomotion step, so results always reflect the
//! position the tick began with.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::movement::{MovementConfig, MovementState, Player, WallSide};

pub(crate) fn probe_ground(
    spatial_query: SpatialQuery,
    mut query: Query<(&Transform, &MovementConfig, &mut MovementState), With<Player>>,
) {
    for (transform, config, mut state) in &mut query {
        let was_grounded = state.grounded;
        let origin = transform.translation.truncate();

        state.grounded = match config.ground_check {
            Some(offset) => overlaps(
                &spatial_query,
                origin + offset,
                config.ground_check_radius,
                config.solid_mask,
            ),
            // Unset anchor: never grounded, never an error.
            None => false,
        };

        if state.grounded && !was_grounded {
            debug!("Landed");
        } else if !state.grounded && was_grounded {
            debug!("Left ground");
        }
    }
}

pub(crate) fn probe_walls(
    spatial_query: SpatialQuery,
    mut query: Query<(&Transform, &MovementConfig, &mut MovementState), With<Player>>,
) {
    for (transform, config, mut state) in &mut query {
        let origin = transform.translation.truncate();

        let left = config.wall_check_left.is_some_and(|offset| {
            overlaps(
                &spatial_query,
                origin + offset,
                config.wall_check_radius,
                config.solid_mask,
            )
        });
        let right = config.wall_check_right.is_some_and(|offset| {
            overlaps(
                &spatial_query,
                origin + offset,
                config.wall_check_radius,
                config.solid_mask,
            )
        });

        state.wall_side = resolve_wall_side(left, right);
    }
}

/// Collapse the two probes into one contact side. Right wins a double
/// contact; the tie-break is deterministic, not an artifact of probe order.
pub(crate) fn resolve_wall_side(left: bool, right: bool) -> WallSide {
    match (left, right) {
        (_, true) => WallSide::Right,
        (true, false) => WallSide::Left,
        (false, false) => WallSide::None,
    }
}

fn overlaps(spatial_query: &SpatialQuery, position: Vec2, radius: f32, mask: LayerMask) -> bool {
    let filter = SpatialQueryFilter::from_mask(mask);
    !spatial_query
        .shape_intersections(&Collider::circle(radius), position, 0.0, &filter)
        .is_empty()
}
