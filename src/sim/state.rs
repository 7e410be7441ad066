//! Flock state and the host-facing operations on it
//!
//! The flock owns its boids outright; hosts drive it with `begin`, `tick`,
//! configuration setters and `snapshot`.

use glam::Vec3;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::boid::Boid;
use super::bounds::Bounds;
use super::config::FlockConfig;
use super::snapshot::{BoidProperties, BoundsUniform, Snapshot};
use super::store::BoidStore;

/// Complete simulation state (deterministic for a given seed)
#[derive(Debug, Clone)]
pub struct FlockState {
    pub(super) store: BoidStore,
    pub(super) config: FlockConfig,
    pub(super) bounds: Bounds,
    /// Seed the RNG was last (re)initialized with
    seed: u64,
    /// Direction randomization source, threaded through every registration
    rng: Pcg32,
    /// Ticks completed since the last `begin`
    pub(super) tick_count: u64,
}

impl FlockState {
    /// Empty flock with default configuration and bounds
    pub fn new(seed: u64) -> Self {
        Self::with_config(seed, FlockConfig::default(), Bounds::default())
    }

    pub fn with_config(seed: u64, config: FlockConfig, bounds: Bounds) -> Self {
        let mut state = Self {
            store: BoidStore::new(),
            config: FlockConfig::default(),
            bounds,
            seed,
            rng: Pcg32::seed_from_u64(seed),
            tick_count: 0,
        };
        state.set_configuration(config);
        state
    }

    /// Throw away every boid and spawn `count` fresh ones at the default pose
    pub fn begin(&mut self, count: usize, randomize: bool) {
        self.clear();
        if count == 0 {
            log::info!("Flock reset with no boids");
            return;
        }
        self.register(std::iter::repeat_n(Boid::default(), count), randomize);
        log::info!(
            "Flock started: {} boids (seed {}, randomize {})",
            count,
            self.seed,
            randomize
        );
    }

    /// Add boids after the existing ones
    pub fn register<I>(&mut self, boids: I, randomize: bool)
    where
        I: IntoIterator<Item = Boid>,
    {
        self.store.register(boids, randomize, &mut self.rng);
    }

    /// Drop every boid
    pub fn clear(&mut self) {
        self.store.clear();
        self.tick_count = 0;
    }

    /// Advance every boid by `dt` seconds
    pub fn tick(&mut self, dt: f32) {
        super::tick::tick(self, dt);
    }

    /// Copy out positions, directions, bounds and configuration.
    ///
    /// Refreshes the cached boid count; nothing else changes.
    pub fn snapshot(&mut self) -> Snapshot {
        let config = self.configuration();
        Snapshot {
            boid_count: config.boid_count,
            boids: self.boid_properties(),
            bounds: BoundsUniform::from(&self.bounds),
            config,
        }
    }

    /// Per-boid render records in store order
    pub fn boid_properties(&self) -> Vec<BoidProperties> {
        self.store.iter().map(BoidProperties::from).collect()
    }

    /// Current configuration with the boid count refreshed
    pub fn configuration(&mut self) -> FlockConfig {
        self.config.boid_count = self.store.len() as u32;
        self.config
    }

    /// Replace the configuration, keeping the cached boid count
    pub fn set_configuration(&mut self, config: FlockConfig) {
        let boid_count = self.config.boid_count;
        self.config = FlockConfig {
            boid_count,
            ..config
        };
        for issue in self.config.lint() {
            log::warn!("Flock configuration: {}", issue);
        }
        log::debug!("Flock configuration applied: {:?}", self.config);
    }

    pub fn set_bounds_half_size(&mut self, half_size: Vec3) {
        self.bounds = Bounds::new(half_size);
        log::debug!("Flock bounds half-size set to {}", half_size);
    }

    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    /// Read-only view of the boids. Rewritten wholesale by every tick.
    pub fn boids(&self) -> &[Boid] {
        self.store.as_slice()
    }

    pub fn len(&self) -> usize {
        self.store.len()
    }

    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Restart the direction RNG from `seed`
    pub fn reseed(&mut self, seed: u64) {
        self.seed = seed;
        self.rng = Pcg32::seed_from_u64(seed);
        log::info!("Flock RNG reseeded with {}", seed);
    }

    pub fn tick_count(&self) -> u64 {
        self.tick_count
    }
}
