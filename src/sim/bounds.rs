//! Axis-aligned simulation volume centered at the origin

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::consts::{BOUNDARY_NUDGE, DEFAULT_HALF_SIZE};

/// Box spanning `-half_size..=half_size` on each axis
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub half_size: Vec3,
}

impl Default for Bounds {
    fn default() -> Self {
        Self {
            half_size: Vec3::splat(DEFAULT_HALF_SIZE),
        }
    }
}

impl Bounds {
    pub fn new(half_size: Vec3) -> Self {
        Self { half_size }
    }

    /// Reflect off any wall the position has crossed.
    ///
    /// Each axis is handled on its own: the direction component flips sign and
    /// the position is pulled `BOUNDARY_NUDGE` back inside the wall.
    pub fn confine(&self, position: &mut Vec3, direction: &mut Vec3) {
        for axis in 0..3 {
            let limit = self.half_size[axis];
            if position[axis] > limit {
                direction[axis] = -direction[axis];
                position[axis] = limit - BOUNDARY_NUDGE;
            } else if position[axis] < -limit {
                direction[axis] = -direction[axis];
                position[axis] = -limit + BOUNDARY_NUDGE;
            }
        }
    }

    /// Whether `position` lies inside the box (walls included)
    pub fn contains(&self, position: Vec3) -> bool {
        position.abs().cmple(self.half_size).all()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_confine_reflects_positive_wall() {
        let bounds = Bounds::default();
        let mut pos = Vec3::new(19.95, 0.0, 0.0);
        let mut dir = Vec3::X;

        bounds.confine(&mut pos, &mut dir);

        assert!((pos.x - 14.9).abs() < 1e-5);
        assert_eq!(dir, Vec3::NEG_X);
    }

    #[test]
    fn test_confine_reflects_negative_wall_per_axis() {
        let bounds = Bounds::new(Vec3::new(10.0, 5.0, 2.0));
        let mut pos = Vec3::new(0.0, -6.0, 3.0);
        let mut dir = Vec3::new(0.2, -0.5, 0.8);

        bounds.confine(&mut pos, &mut dir);

        assert_eq!(pos.x, 0.0);
        assert!((pos.y - -4.9).abs() < 1e-5);
        assert!((pos.z - 1.9).abs() < 1e-5);
        assert_eq!(dir, Vec3::new(0.2, 0.5, -0.8));
    }

    #[test]
    fn test_confine_leaves_inside_untouched() {
        let bounds = Bounds::default();
        let mut pos = Vec3::new(15.0, -15.0, 3.0);
        let mut dir = Vec3::Y;

        bounds.confine(&mut pos, &mut dir);

        assert_eq!(pos, Vec3::new(15.0, -15.0, 3.0));
        assert_eq!(dir, Vec3::Y);
        assert!(bounds.contains(pos));
    }
}
