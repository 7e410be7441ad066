//! Separation, alignment and cohesion
//!
//! All three rules share one shape: a unit direction term scaled by a linear
//! falloff between the rule's min and max distance.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use super::boid::Boid;
use crate::consts::MIN_RULE_WEIGHT;

/// Distance band and strength of one rule
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RuleParams {
    /// Full strength at or below this distance
    pub min_distance: f32,
    /// Neighbors at or beyond this distance are ignored
    pub max_distance: f32,
    /// Multiplier applied to the averaged rule vector
    pub weight: f32,
}

impl RuleParams {
    pub const fn new(min_distance: f32, max_distance: f32, weight: f32) -> Self {
        Self {
            min_distance,
            max_distance,
            weight,
        }
    }

    /// Whether a neighbor at `distance` is counted for this rule
    #[inline]
    pub fn in_range(&self, distance: f32) -> bool {
        distance < self.max_distance
    }
}

/// The three flocking rules
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    /// Steer away from close neighbors
    Separation,
    /// Match neighbors' heading
    Alignment,
    /// Steer toward neighbors
    Cohesion,
}

impl Rule {
    pub const ALL: [Rule; 3] = [Rule::Separation, Rule::Alignment, Rule::Cohesion];

    pub fn as_str(&self) -> &'static str {
        match self {
            Rule::Separation => "separation",
            Rule::Alignment => "alignment",
            Rule::Cohesion => "cohesion",
        }
    }

    /// Unit direction this rule pulls `current` in, given one `other` boid
    fn direction_term(&self, current: &Boid, other: &Boid) -> Vec3 {
        match self {
            Rule::Separation => (current.position - other.position).normalize_or_zero(),
            Rule::Alignment => other.direction.normalize_or_zero(),
            Rule::Cohesion => (other.position - current.position).normalize_or_zero(),
        }
    }
}

/// Linear falloff: 1.0 at or below `min_distance`, 0.0 at `max_distance`.
///
/// When `min_distance == max_distance` the band is a step: 1.0 up to the edge,
/// 0.0 past it. Out-of-order bands are evaluated as-is.
pub fn falloff_weight(params: &RuleParams, distance: f32) -> f32 {
    let excess = distance - params.min_distance;
    if excess <= 0.0 {
        return 1.0;
    }
    let range = params.max_distance - params.min_distance;
    if range == 0.0 {
        return 0.0;
    }
    1.0 - excess / range
}

/// Contribution of `other` to `current` for `rule`, zero when the falloff is negligible
pub fn rule_contribution(
    rule: Rule,
    params: &RuleParams,
    current: &Boid,
    other: &Boid,
    distance: f32,
) -> Vec3 {
    let weight = falloff_weight(params, distance);
    if weight > MIN_RULE_WEIGHT {
        rule.direction_term(current, other) * weight
    } else {
        Vec3::ZERO
    }
}

/// Running sum of one rule's contributions and how many neighbors fed it
#[derive(Debug, Clone, Copy, Default)]
pub struct RuleAccumulator {
    sum: Vec3,
    count: u32,
}

impl RuleAccumulator {
    pub fn add(&mut self, contribution: Vec3) {
        self.sum += contribution;
        self.count += 1;
    }

    pub fn count(&self) -> u32 {
        self.count
    }

    /// Mean contribution, or zero if nothing was counted
    pub fn average(&self) -> Vec3 {
        if self.count > 0 {
            self.sum / self.count as f32
        } else {
            Vec3::ZERO
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SEP: RuleParams = RuleParams::new(1.0, 5.0, 12.0);

    #[test]
    fn test_falloff_full_strength_at_min() {
        assert_eq!(falloff_weight(&SEP, 1.0), 1.0);
        assert_eq!(falloff_weight(&SEP, 0.25), 1.0);
    }

    #[test]
    fn test_falloff_zero_at_max() {
        assert_eq!(falloff_weight(&SEP, 5.0), 0.0);
    }

    #[test]
    fn test_falloff_linear_between() {
        assert!((falloff_weight(&SEP, 3.0) - 0.5).abs() < 1e-6);
        assert!((falloff_weight(&SEP, 4.0) - 0.25).abs() < 1e-6);
    }

    #[test]
    fn test_falloff_degenerate_band_is_step() {
        let step = RuleParams::new(2.0, 2.0, 1.0);
        assert_eq!(falloff_weight(&step, 1.5), 1.0);
        assert_eq!(falloff_weight(&step, 2.0), 1.0);
        assert_eq!(falloff_weight(&step, 2.5), 0.0);
        assert!(falloff_weight(&step, 100.0).is_finite());
    }

    #[test]
    fn test_contribution_directions() {
        let a = Boid::new(Vec3::ZERO, Vec3::Y);
        let b = Boid::new(Vec3::new(2.0, 0.0, 0.0), Vec3::new(0.0, 0.0, 3.0));
        let near = RuleParams::new(5.0, 10.0, 1.0);

        let sep = rule_contribution(Rule::Separation, &near, &a, &b, 2.0);
        let coh = rule_contribution(Rule::Cohesion, &near, &a, &b, 2.0);
        let ali = rule_contribution(Rule::Alignment, &near, &a, &b, 2.0);

        assert_eq!(sep, Vec3::NEG_X);
        assert_eq!(coh, Vec3::X);
        assert_eq!(ali, Vec3::Z);
    }

    #[test]
    fn test_contribution_below_threshold_is_zero() {
        let a = Boid::new(Vec3::ZERO, Vec3::Y);
        let b = Boid::new(Vec3::new(4.99, 0.0, 0.0), Vec3::Y);

        // weight = 1 - 3.99 / 4 = 0.0025
        let sep = rule_contribution(Rule::Separation, &SEP, &a, &b, 4.99);
        assert_eq!(sep, Vec3::ZERO);
    }

    #[test]
    fn test_accumulator_average() {
        let mut acc = RuleAccumulator::default();
        assert_eq!(acc.average(), Vec3::ZERO);

        acc.add(Vec3::X);
        acc.add(Vec3::ZERO);
        assert_eq!(acc.count(), 2);
        assert_eq!(acc.average(), Vec3::new(0.5, 0.0, 0.0));
    }
}
