//! Particle motion and pairwise link math.
//!
//! A particle is a plain value record; [`Particle::step`] is the only
//! mutation and takes the current bounds explicitly, so the pool is an
//! ordered `Vec` with no behaviour of its own and the whole module runs
//! (and is tested) off-browser.

use rand::Rng;

/// Number of particles in the pool. Fixed; the pool is rebuilt at this size
/// on every viewport resize.
pub const POOL_SIZE: usize = 50;

/// Maximum distance at which two particles are still connected by a line.
pub const LINK_DISTANCE: f64 = 150.0;

/// Line opacity at distance zero; fades linearly to zero at [`LINK_DISTANCE`].
pub const LINK_BASE_ALPHA: f64 = 0.2;

/// Total spread of each velocity component: values land in [-0.25, 0.25).
const VELOCITY_SPREAD: f64 = 0.5;

/// Dot radii land in [RADIUS_MIN, RADIUS_MIN + RADIUS_SPREAD).
const RADIUS_MIN: f64 = 1.0;
const RADIUS_SPREAD: f64 = 2.0;

/// Current drawing-surface extent. Positions are confined to
/// `[0, width] x [0, height]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    /// Surface width in CSS pixels.
    pub width: f64,
    /// Surface height in CSS pixels.
    pub height: f64,
}

/// One moving point of the field.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    /// Horizontal position.
    pub x: f64,
    /// Vertical position.
    pub y: f64,
    /// Horizontal velocity per frame.
    pub vx: f64,
    /// Vertical velocity per frame.
    pub vy: f64,
    /// Dot radius, fixed at spawn.
    pub radius: f64,
}

impl Particle {
    /// Spawn a particle uniformly inside `bounds` with a small random drift.
    pub fn spawn(bounds: &Bounds, rng: &mut impl Rng) -> Self {
        Particle {
            x: rng.gen::<f64>() * bounds.width,
            y: rng.gen::<f64>() * bounds.height,
            vx: (rng.gen::<f64>() - 0.5) * VELOCITY_SPREAD,
            vy: (rng.gen::<f64>() - 0.5) * VELOCITY_SPREAD,
            radius: RADIUS_MIN + rng.gen::<f64>() * RADIUS_SPREAD,
        }
    }

    /// Advance one frame: integrate velocity, reflect at the walls.
    ///
    /// Overshoot is folded back inside the bounds in the same step that the
    /// velocity sign flips, so the position invariant holds after every call
    /// (velocities are tiny relative to any real viewport, so one fold is
    /// always enough).
    pub fn step(&mut self, bounds: &Bounds) {
        self.x += self.vx;
        self.y += self.vy;

        if self.x < 0.0 {
            self.x = -self.x;
            self.vx = -self.vx;
        } else if self.x > bounds.width {
            self.x = 2.0 * bounds.width - self.x;
            self.vx = -self.vx;
        }

        if self.y < 0.0 {
            self.y = -self.y;
            self.vy = -self.vy;
        } else if self.y > bounds.height {
            self.y = 2.0 * bounds.height - self.y;
            self.vy = -self.vy;
        }
    }
}

/// Build a fresh pool of [`POOL_SIZE`] particles for `bounds`.
///
/// Called at startup and on every resize; the old pool is discarded
/// wholesale, no motion state carries over.
pub fn spawn_pool(bounds: &Bounds, rng: &mut impl Rng) -> Vec<Particle> {
    (0..POOL_SIZE).map(|_| Particle::spawn(bounds, rng)).collect()
}

/// Euclidean distance between two particles.
pub fn distance(a: &Particle, b: &Particle) -> f64 {
    let dx = a.x - b.x;
    let dy = a.y - b.y;
    (dx * dx + dy * dy).sqrt()
}

/// Link opacity for a pair at `distance` apart: `0.2 * (1 - d / 150)` under
/// the threshold, `None` (no line at all) at or past it.
pub fn link_alpha(distance: f64) -> Option<f64> {
    if distance < LINK_DISTANCE {
        Some(LINK_BASE_ALPHA * (1.0 - distance / LINK_DISTANCE))
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    const BOUNDS: Bounds = Bounds {
        width: 800.0,
        height: 600.0,
    };

    #[test]
    fn test_pool_size_invariant() {
        let mut rng = SmallRng::seed_from_u64(1);
        assert_eq!(spawn_pool(&BOUNDS, &mut rng).len(), POOL_SIZE);

        // Rebuild at new bounds, as a resize does.
        let resized = Bounds {
            width: 320.0,
            height: 480.0,
        };
        assert_eq!(spawn_pool(&resized, &mut rng).len(), POOL_SIZE);
    }

    #[test]
    fn test_spawn_lands_inside_bounds() {
        let mut rng = SmallRng::seed_from_u64(2);
        for p in spawn_pool(&BOUNDS, &mut rng) {
            assert!((0.0..=BOUNDS.width).contains(&p.x));
            assert!((0.0..=BOUNDS.height).contains(&p.y));
            assert!(p.vx.abs() <= VELOCITY_SPREAD / 2.0);
            assert!(p.vy.abs() <= VELOCITY_SPREAD / 2.0);
            assert!((RADIUS_MIN..RADIUS_MIN + RADIUS_SPREAD).contains(&p.radius));
        }
    }

    #[test]
    fn test_step_confines_positions() {
        let mut rng = SmallRng::seed_from_u64(3);
        let mut pool = spawn_pool(&BOUNDS, &mut rng);
        for _ in 0..10_000 {
            for p in pool.iter_mut() {
                p.step(&BOUNDS);
                assert!((0.0..=BOUNDS.width).contains(&p.x));
                assert!((0.0..=BOUNDS.height).contains(&p.y));
            }
        }
    }

    #[test]
    fn test_wall_contact_flips_velocity() {
        let mut p = Particle {
            x: 0.1,
            y: 300.0,
            vx: -0.25,
            vy: 0.0,
            radius: 1.5,
        };
        p.step(&BOUNDS);
        assert!(p.x >= 0.0);
        assert_eq!(p.vx, 0.25);

        let mut q = Particle {
            x: 799.9,
            y: 0.05,
            vx: 0.25,
            vy: -0.25,
            radius: 1.5,
        };
        q.step(&BOUNDS);
        assert!(q.x <= BOUNDS.width);
        assert!(q.y >= 0.0);
        assert_eq!(q.vx, -0.25);
        assert_eq!(q.vy, 0.25);
    }

    #[test]
    fn test_interior_step_is_plain_integration() {
        let mut p = Particle {
            x: 400.0,
            y: 300.0,
            vx: 0.2,
            vy: -0.1,
            radius: 2.0,
        };
        p.step(&BOUNDS);
        assert_eq!(p.x, 400.2);
        assert_eq!(p.y, 299.9);
        assert_eq!(p.vx, 0.2);
        assert_eq!(p.vy, -0.1);
    }

    #[test]
    fn test_link_alpha_matches_formula() {
        let a = link_alpha(0.0).unwrap();
        assert!((a - 0.2).abs() < 1e-12);

        let half = link_alpha(75.0).unwrap();
        assert!((half - 0.1).abs() < 1e-12);

        let near = link_alpha(149.9).unwrap();
        assert!((near - 0.2 * (1.0 - 149.9 / 150.0)).abs() < 1e-12);
    }

    #[test]
    fn test_link_alpha_cutoff_and_monotonicity() {
        assert!(link_alpha(LINK_DISTANCE).is_none());
        assert!(link_alpha(151.0).is_none());

        let mut previous = f64::INFINITY;
        for d in [0.0, 10.0, 50.0, 100.0, 149.0] {
            let alpha = link_alpha(d).unwrap();
            assert!(alpha < previous);
            previous = alpha;
        }
    }

    #[test]
    fn test_distance_is_euclidean() {
        let a = Particle {
            x: 0.0,
            y: 0.0,
            vx: 0.0,
            vy: 0.0,
            radius: 1.0,
        };
        let b = Particle {
            x: 3.0,
            y: 4.0,
            vx: 0.0,
            vy: 0.0,
            radius: 1.0,
        };
        assert_eq!(distance(&a, &b), 5.0);
        assert_eq!(distance(&b, &a), 5.0);
    }

    #[test]
    fn test_same_seed_same_pool() {
        let mut a = SmallRng::seed_from_u64(42);
        let mut b = SmallRng::seed_from_u64(42);
        assert_eq!(spawn_pool(&BOUNDS, &mut a), spawn_pool(&BOUNDS, &mut b));
    }
}
