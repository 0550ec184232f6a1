//! Loader for the locomotion RON file at startup.

use ron::Options;
use std::fs;
use std::path::Path;

use super::data::LocomotionDef;

/// Error type for content loading failures.
#[derive(Debug)]
pub struct ContentLoadError {
    pub file: String,
    pub message: String,
}

impl std::fmt::Display for ContentLoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Failed to load {}: {}", self.file, self.message)
    }
}

/// Create RON options with extensions enabled for more flexible parsing.
fn ron_options() -> Options {
    Options::default().with_default_extension(ron::extensions::Extensions::IMPLICIT_SOME)
}

/// Parse a locomotion def from RON source. Validation runs after parsing so
/// an out-of-range tunable is rejected the same way as a syntax error.
pub fn parse_locomotion_def(source: &str, file: &str) -> Result<LocomotionDef, ContentLoadError> {
    let def: LocomotionDef = ron_options()
        .from_str(source)
        .map_err(|e| ContentLoadError {
            file: file.to_string(),
            message: format!("Parse error: {}", e),
        })?;

    def.validate().map_err(|message| ContentLoadError {
        file: file.to_string(),
        message,
    })?;

    Ok(def)
}

/// Load and validate the locomotion def from a RON file on disk.
pub fn load_locomotion_def(path: &Path) -> Result<LocomotionDef, ContentLoadError> {
    let file_name = path.display().to_string();
    let contents = fs::read_to_string(path).map_err(|e| ContentLoadError {
        file: file_name.clone(),
        message: format!("IO error: {}", e),
    })?;

    parse_locomotion_def(&contents, &file_name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_def_validates() {
        assert!(LocomotionDef::default().validate().is_ok());
    }

    #[test]
    fn test_negative_duration_rejected() {
        let def = LocomotionDef {
            dash_duration: -0.1,
            ..Default::default()
        };
        let err = def.validate().unwrap_err();
        assert!(err.contains("dash_duration"));
    }

    #[test]
    fn test_shipped_data_file_parses() {
        let source = include_str!("../../assets/data/locomotion.ron");
        let def = parse_locomotion_def(source, "locomotion.ron").unwrap();
        assert!(def.move_speed > 0.0);
        assert!(def.ground_check_offset.is_some());
    }

    #[test]
    fn test_parse_error_names_file() {
        let err = parse_locomotion_def("not ron", "broken.ron").unwrap_err();
        assert_eq!(err.file, "broken.ron");
        assert!(err.to_string().contains("broken.ron"));
    }

    #[test]
    fn test_out_of_range_value_rejected_on_parse() {
        let source = "LocomotionDef(
            move_speed: -5.0,
            jump_force: 480.0,
            ground_check_offset: (0.0, -26.0),
            ground_check_radius: 6.0,
            dash_speed: 720.0,
            dash_duration: 0.12,
            dash_cooldown: 0.35,
            dash_keeps_vertical_velocity: false,
            wall_check_left_offset: (-14.0, 0.0),
            wall_check_right_offset: (14.0, 0.0),
            wall_check_radius: 6.0,
            wall_slide_speed: 80.0,
            enable_wall_climb: true,
            wall_climb_speed: 120.0,
            wall_jump_x: 400.0,
            wall_jump_y: 480.0,
            wall_jump_lock_time: 0.15,
            default_gravity_scale: 1.0,
        )";
        let err = parse_locomotion_def(source, "locomotion.ron").unwrap_err();
        assert!(err.message.contains("move_speed"));
    }
}
