//! Host settings
//!
//! Persisted as JSON next to the binary (or wherever `--config` points).

use std::fs;
use std::path::Path;

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::consts::{DEFAULT_BOID_COUNT, DEFAULT_DT, DEFAULT_HALF_SIZE, DEFAULT_SEED};
use crate::error::SettingsError;
use crate::sim::{FlockConfig, FlockState};

/// Everything the host needs to start a run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Boids spawned by `begin`
    pub boid_count: usize,
    /// Seed for direction randomization
    pub seed: u64,
    /// Simulation volume half extents
    pub bounds_half_size: Vec3,
    /// Fixed timestep (seconds)
    pub dt: f32,
    /// Model parameters
    pub flock: FlockConfig,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            boid_count: DEFAULT_BOID_COUNT,
            seed: DEFAULT_SEED,
            bounds_half_size: Vec3::splat(DEFAULT_HALF_SIZE),
            dt: DEFAULT_DT,
            flock: FlockConfig::default(),
        }
    }
}

impl Settings {
    /// Read settings from a JSON file. Missing fields take their defaults.
    pub fn load(path: &Path) -> Result<Self, SettingsError> {
        let json = fs::read_to_string(path).map_err(|source| SettingsError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let settings = serde_json::from_str(&json).map_err(|source| SettingsError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        log::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    /// Read settings if the file exists, defaults otherwise
    pub fn load_or_default(path: &Path) -> Result<Self, SettingsError> {
        if path.exists() {
            Self::load(path)
        } else {
            log::info!("No settings at {}, using defaults", path.display());
            Ok(Self::default())
        }
    }

    pub fn save(&self, path: &Path) -> Result<(), SettingsError> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json).map_err(|source| SettingsError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        log::info!("Settings saved to {}", path.display());
        Ok(())
    }

    /// Build a flock from these settings and start it
    pub fn start(&self) -> FlockState {
        let mut state = FlockState::new(self.seed);
        self.apply_to(&mut state);
        state.begin(self.boid_count, true);
        state
    }

    /// Push configuration and bounds into an existing flock
    pub fn apply_to(&self, state: &mut FlockState) {
        state.set_configuration(self.flock);
        state.set_bounds_half_size(self.bounds_half_size);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_file_uses_defaults() {
        let settings: Settings =
            serde_json::from_str(r#"{ "boid_count": 64, "flock": { "speed": 3.0 } }"#).unwrap();

        assert_eq!(settings.boid_count, 64);
        assert_eq!(settings.flock.speed, 3.0);
        assert_eq!(settings.seed, DEFAULT_SEED);
        assert_eq!(settings.bounds_half_size, Vec3::splat(DEFAULT_HALF_SIZE));
    }

    #[test]
    fn test_save_then_load() {
        let path = std::env::temp_dir()
            .join(format!("flock_sim_settings_{}.json", std::process::id()));
        let mut settings = Settings::default();
        settings.boid_count = 7;
        settings.bounds_half_size = Vec3::new(4.0, 5.0, 6.0);

        settings.save(&path).unwrap();
        let loaded = Settings::load(&path).unwrap();
        let _ = fs::remove_file(&path);

        assert_eq!(loaded, settings);
    }

    #[test]
    fn test_load_missing_file_is_io_error() {
        let path = Path::new("/nonexistent/flock_sim/settings.json");
        assert!(matches!(Settings::load(path), Err(SettingsError::Io { .. })));
        assert!(Settings::load_or_default(path).is_ok());
    }

    #[test]
    fn test_load_garbage_is_parse_error() {
        let path = std::env::temp_dir()
            .join(format!("flock_sim_garbage_{}.json", std::process::id()));
        fs::write(&path, "not json").unwrap();
        let result = Settings::load(&path);
        let _ = fs::remove_file(&path);

        assert!(matches!(result, Err(SettingsError::Parse { .. })));
    }

    #[test]
    fn test_start_applies_settings() {
        let settings = Settings {
            boid_count: 12,
            bounds_half_size: Vec3::splat(9.0),
            ..Default::default()
        };
        let mut state = settings.start();

        assert_eq!(state.len(), 12);
        assert_eq!(state.bounds().half_size, Vec3::splat(9.0));
        assert_eq!(state.configuration().speed, settings.flock.speed);
    }
}
