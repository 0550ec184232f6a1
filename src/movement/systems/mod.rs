//! Movement domain: system modules for locomotion updates.

pub(crate) mod collisions;
pub(crate) mod input;
pub(crate) mod movement;

pub(crate) use collisions::{probe_ground, probe_walls};
pub(crate) use input::latch_input;
pub(crate) use movement::{advance_timers, apply_locomotion};
