//! Deterministic flocking simulation
//!
//! Everything the per-frame update needs lives here. This module must stay pure:
//! - Caller-supplied timestep only
//! - Seeded RNG only
//! - Stable iteration order (store order)
//! - No rendering or platform dependencies

pub mod boid;
pub mod bounds;
pub mod config;
pub mod rules;
pub mod snapshot;
pub mod state;
pub mod store;
pub mod tick;

pub use boid::Boid;
pub use bounds::Bounds;
pub use config::{ConfigIssue, FlockConfig};
pub use rules::{Rule, RuleAccumulator, RuleParams, falloff_weight, rule_contribution};
pub use snapshot::{BoidProperties, BoundsUniform, ModelUniform, Snapshot};
pub use state::FlockState;
pub use store::{BoidStore, random_unit_vector};
pub use tick::tick;
