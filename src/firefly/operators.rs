//! Mutation operators of the firefly search.
//!
//! A candidate is mutated on its flattened sequence (all routes concatenated
//! in vehicle order):
//!
//! 1. [`attract`] pulls it toward the best candidate (beta-step),
//! 2. [`perturb`] applies random pairwise swaps (alpha-step),
//! 3. [`split`] cuts the sequence back into vehicle routes.
//!
//! Each step maps a permutation of point indices to another permutation, so
//! candidates never gain duplicates or lose points.

use rand::Rng;

use crate::distance::DistanceMatrix;
use crate::models::Vehicle;

use super::Firefly;

/// Beta-step: moves `candidate` toward `best`, position by position.
///
/// Every position where the two differ is copied from `best` with
/// probability `beta / 100`. The remaining differing positions become free
/// slots, and the values `best` holds there become donors; each free slot
/// (in order) takes a uniformly chosen unused donor. The result is a
/// permutation of `best`'s values.
///
/// Returns the number of positions that differed.
///
/// # Examples
///
/// ```
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
/// use firefly_routing::firefly::operators::attract;
///
/// let mut rng = StdRng::seed_from_u64(7);
/// let mut candidate = vec![3, 1, 2, 0];
/// let best = vec![0, 1, 2, 3];
/// let differing = attract(&mut candidate, &best, 100, &mut rng);
/// assert_eq!(differing, 2);
/// assert_eq!(candidate, best);
/// ```
pub fn attract<R: Rng>(candidate: &mut [usize], best: &[usize], beta: u32, rng: &mut R) -> usize {
    debug_assert_eq!(candidate.len(), best.len());

    let mut free_slots = Vec::new();
    let mut donors = Vec::new();
    let mut differing = 0;

    for (i, (slot, &target)) in candidate.iter_mut().zip(best).enumerate() {
        if *slot == target {
            continue;
        }
        differing += 1;
        if rng.random_range(0..100) < beta {
            *slot = target;
        } else {
            free_slots.push(i);
            donors.push(target);
        }
    }

    for slot in free_slots {
        let pick = rng.random_range(0..donors.len());
        candidate[slot] = donors.swap_remove(pick);
    }

    differing
}

/// Number of alpha-step swaps: uniform in `[0, point_count * alpha / 100)`,
/// or zero when that range is empty.
pub fn swap_count<R: Rng>(point_count: usize, alpha: u32, rng: &mut R) -> usize {
    let bound = point_count * alpha as usize / 100;
    if bound == 0 {
        0
    } else {
        rng.random_range(0..bound)
    }
}

/// Alpha-step: exchanges `swaps` pairs of positions in `flat`.
///
/// Each end of a swap is picked by choosing a random vehicle, then a random
/// position inside that vehicle's route. Vehicles with zero capacity are
/// never picked. When both ends land on the same position the pair is
/// redrawn, so every counted swap moves two points. Sequences shorter than
/// two are left untouched.
pub fn perturb<R: Rng>(flat: &mut [usize], vehicles: &[Vehicle], swaps: usize, rng: &mut R) {
    if flat.len() < 2 || swaps == 0 {
        return;
    }

    // (offset in flat, capacity) of every vehicle that carries points
    let slots: Vec<(usize, usize)> = vehicles
        .iter()
        .scan(0, |start, v| {
            let offset = *start;
            *start += v.capacity();
            Some((offset, v.capacity()))
        })
        .filter(|&(_, capacity)| capacity > 0)
        .collect();

    let mut pick = || {
        let (offset, capacity) = slots[rng.random_range(0..slots.len())];
        offset + rng.random_range(0..capacity)
    };

    for _ in 0..swaps {
        let (a, b) = loop {
            let a = pick();
            let b = pick();
            if a != b {
                break (a, b);
            }
        };
        flat.swap(a, b);
    }
}

/// Cuts a flattened sequence into one route per vehicle, in vehicle order,
/// each exactly as long as the vehicle's capacity.
///
/// # Examples
///
/// ```
/// use firefly_routing::models::Vehicle;
/// use firefly_routing::firefly::operators::split;
///
/// let vehicles = vec![Vehicle::new(0, 1, 1.0), Vehicle::new(1, 2, 1.0)];
/// assert_eq!(split(&[4, 5, 6], &vehicles), vec![vec![4], vec![5, 6]]);
/// ```
pub fn split(flat: &[usize], vehicles: &[Vehicle]) -> Vec<Vec<usize>> {
    debug_assert_eq!(
        flat.len(),
        vehicles.iter().map(|v| v.capacity()).sum::<usize>()
    );

    let mut rest = flat;
    vehicles
        .iter()
        .map(|vehicle| {
            let (route, tail) = rest.split_at(vehicle.capacity());
            rest = tail;
            route.to_vec()
        })
        .collect()
}

/// Applies the full mutation protocol to `firefly` against the best
/// candidate's flattened sequence, then re-evaluates it.
///
/// Returns the number of alpha-step swaps performed.
pub fn mutate<R: Rng>(
    firefly: &mut Firefly,
    best: &[usize],
    vehicles: &[Vehicle],
    distances: &DistanceMatrix,
    alpha: u32,
    beta: u32,
    rng: &mut R,
) -> usize {
    let mut flat = firefly.flatten();
    attract(&mut flat, best, beta, rng);

    let swaps = swap_count(flat.len(), alpha, rng);
    perturb(&mut flat, vehicles, swaps, rng);

    firefly.resplit(&flat, vehicles, distances);
    debug_assert!(firefly.is_permutation(flat.len()));
    swaps
}
