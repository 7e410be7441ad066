//! A single flock member

use glam::Vec3;
use serde::{Deserialize, Serialize};

/// One boid: where it is and where it is heading.
///
/// `direction` is unit length by convention. The store and the tick keep it
/// normalized, but nothing enforces it on a boid built by hand.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Boid {
    pub position: Vec3,
    pub direction: Vec3,
}

impl Default for Boid {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            direction: Vec3::Y,
        }
    }
}

impl Boid {
    pub fn new(position: Vec3, direction: Vec3) -> Self {
        Self {
            position,
            direction,
        }
    }
}
