//! Boid storage owned by the flock
//!
//! Boids are held by value. Registration moves them in, so nothing outside the
//! store can keep a handle that outlives a reset.

use glam::Vec3;
use rand::Rng;

use super::boid::Boid;

/// Draw vectors with `sample` until one can be normalized.
///
/// A draw that lands exactly on the origin has no direction and is thrown away.
pub fn random_unit_vector(mut sample: impl FnMut() -> Vec3) -> Vec3 {
    loop {
        if let Some(direction) = sample().try_normalize() {
            return direction;
        }
    }
}

/// Uniform draw from the cube [-1, 1]^3, normalized.
fn random_direction<R: Rng>(rng: &mut R) -> Vec3 {
    random_unit_vector(|| {
        Vec3::new(
            rng.random_range(-1.0..=1.0),
            rng.random_range(-1.0..=1.0),
            rng.random_range(-1.0..=1.0),
        )
    })
}

/// The ordered list of boids in the simulation
#[derive(Debug, Clone, Default)]
pub struct BoidStore {
    boids: Vec<Boid>,
}

impl BoidStore {
    pub fn new() -> Self {
        Self { boids: Vec::new() }
    }

    /// Append boids in order, optionally replacing each direction with a random unit vector
    pub fn register<I, R>(&mut self, boids: I, randomize_direction: bool, rng: &mut R)
    where
        I: IntoIterator<Item = Boid>,
        R: Rng,
    {
        let boids = boids.into_iter();
        self.boids.reserve(boids.size_hint().0);
        for mut boid in boids {
            if randomize_direction {
                boid.direction = random_direction(rng);
            }
            self.boids.push(boid);
        }
    }

    /// Drop every boid and release the backing allocation
    pub fn clear(&mut self) {
        self.boids.clear();
        self.boids.shrink_to_fit();
    }

    pub fn len(&self) -> usize {
        self.boids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.boids.is_empty()
    }

    pub fn as_slice(&self) -> &[Boid] {
        &self.boids
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Boid> {
        self.boids.iter()
    }

    /// Replace every boid with the next-tick state, index for index.
    ///
    /// `next` must have exactly one entry per stored boid.
    pub(crate) fn commit(&mut self, next: &[Boid]) {
        debug_assert_eq!(next.len(), self.boids.len());
        self.boids.copy_from_slice(next);
    }
}

impl<'a> IntoIterator for &'a BoidStore {
    type Item = &'a Boid;
    type IntoIter = std::slice::Iter<'a, Boid>;

    fn into_iter(self) -> Self::IntoIter {
        self.boids.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn test_register_randomizes_to_unit_vectors() {
        let mut rng = Pcg32::seed_from_u64(7);
        let mut store = BoidStore::new();
        store.register(vec![Boid::default(); 64], true, &mut rng);

        assert_eq!(store.len(), 64);
        for boid in &store {
            assert!((boid.direction.length() - 1.0).abs() < 1e-5);
            assert_eq!(boid.position, Vec3::ZERO);
        }
        // Not all pointing the same way
        assert!(store.iter().any(|b| b.direction != store.as_slice()[0].direction));
    }

    #[test]
    fn test_register_keeps_direction_without_randomize() {
        let mut rng = Pcg32::seed_from_u64(7);
        let mut store = BoidStore::new();
        let boid = Boid::new(Vec3::new(1.0, 2.0, 3.0), Vec3::X);
        store.register([boid], false, &mut rng);

        assert_eq!(store.as_slice(), &[boid]);
    }

    #[test]
    fn test_register_appends_in_order() {
        let mut rng = Pcg32::seed_from_u64(1);
        let mut store = BoidStore::new();
        store.register([Boid::new(Vec3::X, Vec3::Y)], false, &mut rng);
        store.register([Boid::new(Vec3::Z, Vec3::Y)], false, &mut rng);

        assert_eq!(store.as_slice()[0].position, Vec3::X);
        assert_eq!(store.as_slice()[1].position, Vec3::Z);
    }

    #[test]
    fn test_clear_empties_store() {
        let mut rng = Pcg32::seed_from_u64(3);
        let mut store = BoidStore::new();
        store.register(vec![Boid::default(); 10], true, &mut rng);
        store.clear();

        assert!(store.is_empty());
        assert_eq!(store.len(), 0);
    }

    #[test]
    fn test_random_unit_vector_rejects_zero_draw() {
        let mut draws = [Vec3::ZERO, Vec3::ZERO, Vec3::new(0.0, 3.0, 4.0)].into_iter();
        let v = random_unit_vector(|| draws.next().unwrap_or(Vec3::X));

        assert!(v.abs_diff_eq(Vec3::new(0.0, 0.6, 0.8), 1e-6));
        assert!(draws.next().is_none());
    }
}
