//! Per-frame flock update
//!
//! Every boid is evaluated against the previous tick's state. New poses go into
//! a scratch buffer and are committed together once all boids are done.

use glam::Vec3;

use super::boid::Boid;
use super::config::FlockConfig;
use super::rules::{Rule, RuleAccumulator, rule_contribution};
use super::state::FlockState;

/// Advance every boid by `dt` seconds
pub fn tick(state: &mut FlockState, dt: f32) {
    if state.store.is_empty() {
        return;
    }

    let boids = state.store.as_slice();
    let next: Vec<Boid> = boids
        .iter()
        .enumerate()
        .map(|(index, current)| {
            let mut boid = steer(index, current, boids, &state.config, dt);
            state.bounds.confine(&mut boid.position, &mut boid.direction);
            boid
        })
        .collect();

    state.store.commit(&next);
    state.tick_count += 1;
}

/// New heading and position for `current` (not yet confined to bounds)
fn steer(index: usize, current: &Boid, boids: &[Boid], config: &FlockConfig, dt: f32) -> Boid {
    let mut separation = RuleAccumulator::default();
    let mut alignment = RuleAccumulator::default();
    let mut cohesion = RuleAccumulator::default();

    for (other_index, other) in boids.iter().enumerate() {
        if other_index == index {
            continue;
        }
        // Exact float equality: every boid spawns at the origin
        if other.position == current.position {
            continue;
        }

        let distance = current.position.distance(other.position);
        if config.separation.in_range(distance) {
            separation.add(rule_contribution(
                Rule::Separation,
                &config.separation,
                current,
                other,
                distance,
            ));
        }
        if config.alignment.in_range(distance) {
            alignment.add(rule_contribution(
                Rule::Alignment,
                &config.alignment,
                current,
                other,
                distance,
            ));
        }
        if config.cohesion.in_range(distance) {
            cohesion.add(rule_contribution(
                Rule::Cohesion,
                &config.cohesion,
                current,
                other,
                distance,
            ));
        }
    }

    let steering = separation.average() * config.separation.weight * dt
        + alignment.average() * config.alignment.weight * dt
        + cohesion.average() * config.cohesion.weight * dt;

    // Rules that cancel the current heading leave it as it was
    let direction = (current.direction + steering)
        .try_normalize()
        .unwrap_or(current.direction);
    let position = current.position + direction * dt * config.speed;

    Boid::new(position, direction)
}
