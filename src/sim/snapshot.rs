//! Read-only projection of the flock for render/compute consumers
//!
//! The records here mirror a flat float layout so they can be uploaded as-is.

use bytemuck::{Pod, Zeroable};
use serde::{Deserialize, Serialize};

use super::boid::Boid;
use super::bounds::Bounds;
use super::config::FlockConfig;
use super::rules::RuleParams;

/// Per-boid record: xyz plus one padding float for each vector
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable, Serialize, Deserialize)]
pub struct BoidProperties {
    pub position: [f32; 4],
    pub direction: [f32; 4],
}

impl From<&Boid> for BoidProperties {
    fn from(boid: &Boid) -> Self {
        Self {
            position: boid.position.extend(0.0).to_array(),
            direction: boid.direction.extend(0.0).to_array(),
        }
    }
}

/// Bounds half-size as xyz plus padding
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable, Serialize, Deserialize)]
pub struct BoundsUniform {
    pub half_size: [f32; 4],
}

impl From<&Bounds> for BoundsUniform {
    fn from(bounds: &Bounds) -> Self {
        Self {
            half_size: bounds.half_size.extend(0.0).to_array(),
        }
    }
}

/// One rule packed into a 16-byte row
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct RuleUniform {
    pub min_distance: f32,
    pub max_distance: f32,
    pub weight: f32,
    _pad: f32,
}

impl From<&RuleParams> for RuleUniform {
    fn from(params: &RuleParams) -> Self {
        Self {
            min_distance: params.min_distance,
            max_distance: params.max_distance,
            weight: params.weight,
            _pad: 0.0,
        }
    }
}

/// Model parameters laid out in 16-byte rows for a constant buffer
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct ModelUniform {
    pub boid_count: f32,
    pub speed: f32,
    _pad: [f32; 2],
    pub separation: RuleUniform,
    pub alignment: RuleUniform,
    pub cohesion: RuleUniform,
}

impl From<&FlockConfig> for ModelUniform {
    fn from(config: &FlockConfig) -> Self {
        Self {
            boid_count: config.boid_count as f32,
            speed: config.speed,
            _pad: [0.0; 2],
            separation: (&config.separation).into(),
            alignment: (&config.alignment).into(),
            cohesion: (&config.cohesion).into(),
        }
    }
}

/// Point-in-time copy of everything a renderer needs
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "SnapshotRecord")]
pub struct Snapshot {
    /// Boids in the store when the snapshot was taken
    pub boid_count: u32,
    /// One entry per boid, in store order
    pub boids: Vec<BoidProperties>,
    pub bounds: BoundsUniform,
    /// Configuration with `boid_count` refreshed
    pub config: FlockConfig,
}

/// Serialized form of a snapshot. `FlockConfig` does not carry its count on
/// the wire, so it is restored from the top-level `boid_count`.
#[derive(Deserialize)]
struct SnapshotRecord {
    boid_count: u32,
    boids: Vec<BoidProperties>,
    bounds: BoundsUniform,
    config: FlockConfig,
}

impl From<SnapshotRecord> for Snapshot {
    fn from(record: SnapshotRecord) -> Self {
        Self {
            boid_count: record.boid_count,
            boids: record.boids,
            bounds: record.bounds,
            config: FlockConfig {
                boid_count: record.boid_count,
                ..record.config
            },
        }
    }
}

impl Snapshot {
    /// Boid records as raw bytes, ready for a storage buffer
    pub fn boid_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.boids)
    }

    pub fn model_uniform(&self) -> ModelUniform {
        (&self.config).into()
    }

    pub fn len(&self) -> usize {
        self.boids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.boids.is_empty()
    }
}
