//! Flocking model parameters

use serde::{Deserialize, Serialize};

use super::rules::{Rule, RuleParams};
use crate::consts::DEFAULT_SPEED;

/// Model parameters read every tick.
///
/// `boid_count` is a cached copy of the store length. It is refreshed when a
/// projection is requested and is never taken from callers.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FlockConfig {
    #[serde(skip)]
    pub boid_count: u32,
    /// Travel speed (units/s)
    pub speed: f32,
    pub separation: RuleParams,
    pub alignment: RuleParams,
    pub cohesion: RuleParams,
}

impl Default for FlockConfig {
    fn default() -> Self {
        Self {
            boid_count: 0,
            speed: DEFAULT_SPEED,
            separation: RuleParams::new(1.0, 5.0, 12.0),
            alignment: RuleParams::new(1.0, 12.0, 4.0),
            cohesion: RuleParams::new(1.0, 12.0, 4.0),
        }
    }
}

/// Something questionable about a configuration. Reported, never corrected.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ConfigIssue {
    /// `min_distance` is greater than `max_distance`
    InvertedBand { rule: Rule },
    /// A distance is negative
    NegativeDistance { rule: Rule },
    /// Speed or a weight is NaN or infinite
    NonFinite { field: &'static str },
}

impl std::fmt::Display for ConfigIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigIssue::InvertedBand { rule } => {
                write!(f, "{} min distance exceeds max distance", rule.as_str())
            }
            ConfigIssue::NegativeDistance { rule } => {
                write!(f, "{} has a negative distance", rule.as_str())
            }
            ConfigIssue::NonFinite { field } => write!(f, "{} is not finite", field),
        }
    }
}

impl FlockConfig {
    pub fn rule(&self, rule: Rule) -> &RuleParams {
        match rule {
            Rule::Separation => &self.separation,
            Rule::Alignment => &self.alignment,
            Rule::Cohesion => &self.cohesion,
        }
    }

    pub fn rule_mut(&mut self, rule: Rule) -> &mut RuleParams {
        match rule {
            Rule::Separation => &mut self.separation,
            Rule::Alignment => &mut self.alignment,
            Rule::Cohesion => &mut self.cohesion,
        }
    }

    /// Largest radius any rule looks at
    pub fn max_neighbor_distance(&self) -> f32 {
        Rule::ALL
            .iter()
            .map(|r| self.rule(*r).max_distance)
            .fold(0.0, f32::max)
    }

    /// List values the tick will accept but that are probably mistakes
    pub fn lint(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();
        if !self.speed.is_finite() {
            issues.push(ConfigIssue::NonFinite { field: "speed" });
        }
        for rule in Rule::ALL {
            let params = self.rule(rule);
            if params.min_distance < 0.0 || params.max_distance < 0.0 {
                issues.push(ConfigIssue::NegativeDistance { rule });
            }
            if params.min_distance > params.max_distance {
                issues.push(ConfigIssue::InvertedBand { rule });
            }
            if !params.weight.is_finite() {
                issues.push(ConfigIssue::NonFinite {
                    field: match rule {
                        Rule::Separation => "separation weight",
                        Rule::Alignment => "alignment weight",
                        Rule::Cohesion => "cohesion weight",
                    },
                });
            }
        }
        issues
    }
}
