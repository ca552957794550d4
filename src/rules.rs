/*
 * Flocking Rules Module
 *
 * Each rule looks at a boid's neighbour set (the boid itself included) and
 * returns a velocity nudge. None of them mutate their inputs:
 * 1. Cohesion: move toward the neighbours' centre of mass
 * 2. Separation: back away from neighbours that are too close
 * 3. Alignment: match the neighbours' average velocity
 */

use crate::boid::Boid;
use crate::error::{FlockError, Result};
use crate::params::FlockConfig;
use crate::vector::Vector2;

// Mean position of a set of boids
pub fn centroid(boids: &[Boid]) -> Result<Vector2> {
    if boids.is_empty() {
        return Err(FlockError::EmptyNeighborSet);
    }
    let total: Vector2 = boids.iter().map(|b| b.position).sum();
    Ok(total / boids.len() as f64)
}

// Mean velocity of a set of boids
pub fn mean_velocity(boids: &[Boid]) -> Result<Vector2> {
    if boids.is_empty() {
        return Err(FlockError::EmptyNeighborSet);
    }
    let total: Vector2 = boids.iter().map(|b| b.velocity).sum();
    Ok(total / boids.len() as f64)
}

/// Pull toward the neighbour centroid, `(centroid - position) / damping`.
///
/// An empty neighbour set produces no adjustment.
pub fn cohesion(neighbours: &[Boid], target: &Boid, damping: f64) -> Vector2 {
    match centroid(neighbours) {
        Ok(centre) => (centre - target.position) / damping,
        Err(_) => Vector2::ZERO,
    }
}

/// Sum of `position - other.position` over every neighbour strictly closer
/// than `threshold`. Not normalised: more crowding means a harder push.
pub fn separation(neighbours: &[Boid], target: &Boid, threshold: f64) -> Vector2 {
    neighbours
        .iter()
        .filter(|other| other.position.distance(target.position) < threshold)
        .map(|other| target.position - other.position)
        .sum()
}

/// Pull toward the neighbour mean velocity, `(mean - velocity) / damping`.
///
/// An empty neighbour set produces no adjustment.
pub fn alignment(neighbours: &[Boid], target: &Boid, damping: f64) -> Vector2 {
    match mean_velocity(neighbours) {
        Ok(mean) => (mean - target.velocity) / damping,
        Err(_) => Vector2::ZERO,
    }
}

/// Sum of the three rule outputs for `target`.
pub fn combined_nudge(neighbours: &[Boid], target: &Boid, config: &FlockConfig) -> Vector2 {
    cohesion(neighbours, target, config.cohesion_damping)
        + separation(neighbours, target, config.proximity_threshold)
        + alignment(neighbours, target, config.alignment_damping)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn boid(px: f64, py: f64, vx: f64, vy: f64) -> Boid {
        Boid::new(Vector2::new(px, py), Vector2::new(vx, vy))
    }

    #[test]
    fn cohesion_is_zero_for_lone_boid() {
        let me = boid(40.0, 60.0, 1.0, 1.0);
        assert_eq!(cohesion(&[me], &me, 100.0), Vector2::ZERO);
    }

    #[test]
    fn cohesion_points_at_centre_of_mass() {
        let me = boid(0.0, 0.0, 0.0, 0.0);
        let other = boid(200.0, 100.0, 0.0, 0.0);
        // centroid (100, 50), damped by 100
        assert_eq!(cohesion(&[me, other], &me, 100.0), Vector2::new(1.0, 0.5));
    }

    #[test]
    fn separation_ignores_distant_neighbours() {
        let me = boid(0.0, 0.0, 0.0, 0.0);
        let far = boid(25.0, 0.0, 0.0, 0.0);
        let farther = boid(0.0, -90.0, 0.0, 0.0);
        assert_eq!(separation(&[me, far, farther], &me, 25.0), Vector2::ZERO);
    }

    #[test]
    fn separation_sums_unscaled_repulsion() {
        let me = boid(0.0, 0.0, 0.0, 0.0);
        let a = boid(10.0, 0.0, 0.0, 0.0);
        let b = boid(0.0, 5.0, 0.0, 0.0);
        assert_eq!(separation(&[me, a, b], &me, 25.0), Vector2::new(-10.0, -5.0));
    }

    #[test]
    fn alignment_matches_mean_velocity() {
        let me = boid(0.0, 0.0, 0.0, 0.0);
        let other = boid(5.0, 5.0, 4.0, -2.0);
        // mean velocity (2, -1), damped by 20
        assert_eq!(alignment(&[me, other], &me, 20.0), Vector2::new(0.1, -0.05));
    }

    #[test]
    fn empty_sets_give_no_adjustment() {
        let me = boid(1.0, 2.0, 3.0, 4.0);
        assert!(matches!(centroid(&[]), Err(FlockError::EmptyNeighborSet)));
        assert!(matches!(mean_velocity(&[]), Err(FlockError::EmptyNeighborSet)));
        assert_eq!(cohesion(&[], &me, 100.0), Vector2::ZERO);
        assert_eq!(alignment(&[], &me, 20.0), Vector2::ZERO);
        assert_eq!(separation(&[], &me, 25.0), Vector2::ZERO);
    }

    #[test]
    fn rules_leave_inputs_untouched() {
        let me = boid(0.0, 0.0, 1.0, 0.0);
        let neighbours = [me, boid(3.0, 4.0, 0.0, 2.0)];
        let before = neighbours;
        let _ = combined_nudge(&neighbours, &me, &FlockConfig::default());
        assert_eq!(neighbours, before);
    }
}
