//! Content domain: RON-backed locomotion tuning.
//!
//! Tunables live in assets/data/locomotion.ron and are loaded once at boot.
//! A missing or invalid file is never fatal: the compiled defaults are used
//! and a warning is logged.

mod data;
mod loader;

pub use data::LocomotionDef;
pub use loader::{ContentLoadError, load_locomotion_def, parse_locomotion_def};

use bevy::prelude::*;
use std::path::Path;

/// The loaded (or default) locomotion tunables, fixed for the session.
#[derive(Resource, Debug, Default)]
pub struct LocomotionSettings(pub LocomotionDef);

pub struct ContentPlugin;

impl Plugin for ContentPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(PreStartup, load_settings);
    }
}

fn load_settings(mut commands: Commands) {
    let path = Path::new("assets/data/locomotion.ron");

    let def = match load_locomotion_def(path) {
        Ok(def) => {
            info!("Loaded locomotion tuning from {}", path.display());
            def
        }
        Err(e) => {
            warn!("{}; falling back to default tuning", e);
            LocomotionDef::default()
        }
    };

    commands.insert_resource(LocomotionSettings(def));
}
