/*
 * Neighbour Selection Module
 *
 * Finds the k agents closest to a target by brute force: measure the
 * distance to every member of the population, stable-sort ascending and
 * keep the first k. The target is not excluded, so it always ranks first
 * at distance zero (an earlier agent sharing its exact position can take
 * that slot instead, which is indistinguishable by value).
 *
 * Ties keep population order. Cost is O(n log n) per query.
 */

use crate::boid::Boid;
use crate::vector::Vector2;

/// One ranked entry of a neighbour query.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Neighbor {
    /// Slot of the neighbour in the population.
    pub index: usize,
    pub distance: f64,
}

// Rank every agent by distance to `position` and keep the closest `k`
pub fn nearest_indices(position: Vector2, population: &[Boid], k: usize) -> Vec<Neighbor> {
    let mut ranked: Vec<Neighbor> = population
        .iter()
        .enumerate()
        .map(|(index, other)| Neighbor {
            index,
            distance: position.distance(other.position),
        })
        .collect();

    // `sort_by` is stable, which gives the population-order tie-break
    ranked.sort_by(|a, b| a.distance.total_cmp(&b.distance));
    ranked.truncate(k);
    ranked
}

/// Copies of the `k` agents nearest to `target`, closest first.
///
/// When `k` exceeds the population size the whole population is returned.
pub fn nearest_neighbours(target: &Boid, population: &[Boid], k: usize) -> Vec<Boid> {
    nearest_indices(target.position, population, k)
        .into_iter()
        .map(|n| population[n.index])
        .collect()
}
