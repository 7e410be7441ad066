//! Flock Sim - CPU boids simulation core
//!
//! Core modules:
//! - `sim`: Deterministic flocking simulation (agent store, rules, tick, snapshot)
//! - `settings`: Host settings persisted as JSON
//! - `error`: Errors for the fallible host surfaces

pub mod error;
pub mod settings;
pub mod sim;

pub use error::SettingsError;
pub use settings::Settings;
pub use sim::{Boid, Bounds, FlockConfig, FlockState, RuleParams, Snapshot};

/// Simulation constants
pub mod consts {
    /// Default bounding box half extent on every axis
    pub const DEFAULT_HALF_SIZE: f32 = 15.0;
    /// Inward offset applied when a boid is pushed back inside a wall
    pub const BOUNDARY_NUDGE: f32 = 0.1;
    /// Rule contributions with a falloff weight at or below this are dropped
    pub const MIN_RULE_WEIGHT: f32 = 0.01;

    /// Default boid speed (units/s)
    pub const DEFAULT_SPEED: f32 = 5.0;

    /// Host defaults
    pub const DEFAULT_BOID_COUNT: usize = 512;
    pub const DEFAULT_DT: f32 = 1.0 / 60.0;
    pub const DEFAULT_SEED: u64 = 0x5EED_B01D;
}
