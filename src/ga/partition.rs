//! Partition-mode GA operators. A chromosome assigns every pool member
//! a bucket id in `[0, ceil(|pool| / teamSize))`.

use fastrand::Rng;

pub type Assignment = Vec<u32>;

pub fn bucket_count(pool_len: usize, team_size: usize) -> u32 {
    pool_len.div_ceil(team_size) as u32
}

pub fn random_assignment(rng: &mut Rng, pool_len: usize, buckets: u32) -> Assignment {
    (0..pool_len).map(|_| rng.u32(0..buckets)).collect()
}

pub fn init_population(
    rng: &mut Rng,
    pool_len: usize,
    buckets: u32,
    population_size: usize,
) -> Vec<Assignment> {
    (0..population_size)
        .map(|_| random_assignment(rng, pool_len, buckets))
        .collect()
}

/// Roulette-wheel sampling over fitness normalized to sum 1. When the
/// total fitness is not positive the wheel is degenerate, so selection
/// falls back to uniform sampling over the population.
pub fn roulette_select(
    rng: &mut Rng,
    population: &[Assignment],
    fitnesses: &[f64],
    count: usize,
) -> Vec<Assignment> {
    let total: f64 = fitnesses.iter().sum();
    let mut selected = Vec::with_capacity(count);

    if total <= 0.0 {
        for _ in 0..count {
            selected.push(population[rng.usize(0..population.len())].clone());
        }
        return selected;
    }

    for _ in 0..count {
        let r = rng.f64();
        let mut acc = 0.0;
        let mut pick = population.len() - 1;
        for (i, f) in fitnesses.iter().enumerate() {
            acc += f / total;
            if r <= acc {
                pick = i;
                break;
            }
        }
        selected.push(population[pick].clone());
    }
    selected
}

/// Classic single-point crossover: swap tails at one cut index,
/// producing two children.
pub fn crossover(rng: &mut Rng, parent1: &[u32], parent2: &[u32]) -> (Assignment, Assignment) {
    let cut = rng.usize(0..parent1.len());
    let mut child1 = Vec::with_capacity(parent1.len());
    let mut child2 = Vec::with_capacity(parent2.len());
    child1.extend_from_slice(&parent1[..cut]);
    child1.extend_from_slice(&parent2[cut..]);
    child2.extend_from_slice(&parent2[..cut]);
    child2.extend_from_slice(&parent1[cut..]);
    (child1, child2)
}

/// Independently reassigns every gene with probability `rate`.
pub fn mutate(rng: &mut Rng, assignment: &mut Assignment, rate: f64, buckets: u32) {
    for gene in assignment.iter_mut() {
        if rng.f64() < rate {
            *gene = rng.u32(0..buckets);
        }
    }
}
