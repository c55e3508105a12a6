//! Recommendation-mode GA operators. Chromosomes are `teamSize-1`
//! distinct indices into the candidate pool (the seed user is never a
//! gene). All operators take the run's seeded rng explicitly.

use fastrand::Rng;
use std::cmp::Ordering;
use std::collections::HashSet;

pub type TeamChromosome = Vec<usize>;

/// Uniform sample without replacement of `slots` candidate indices.
pub fn random_team(rng: &mut Rng, candidate_count: usize, slots: usize) -> TeamChromosome {
    let mut indices: Vec<usize> = (0..candidate_count).collect();
    rng.shuffle(&mut indices);
    indices.truncate(slots);
    indices
}

pub fn init_population(
    rng: &mut Rng,
    candidate_count: usize,
    slots: usize,
    population_size: usize,
) -> Vec<TeamChromosome> {
    (0..population_size)
        .map(|_| random_team(rng, candidate_count, slots))
        .collect()
}

/// Elitist truncation: top half by fitness, descending.
pub fn select_parents(population: &[TeamChromosome], fitnesses: &[f64]) -> Vec<TeamChromosome> {
    let mut order: Vec<usize> = (0..population.len()).collect();
    order.sort_by(|&a, &b| {
        fitnesses[b]
            .partial_cmp(&fitnesses[a])
            .unwrap_or(Ordering::Equal)
    });
    order
        .iter()
        .take((population.len() / 2).max(1))
        .map(|&i| population[i].clone())
        .collect()
}

/// Cut-point crossover with a guaranteed backfill: prefix of parent 1,
/// suffix of parent 2, deduplicated in order of first occurrence, then
/// topped up (union of both parents first, full pool second) until the
/// child has exactly `slots` distinct members.
pub fn crossover(
    rng: &mut Rng,
    parent1: &[usize],
    parent2: &[usize],
    candidate_count: usize,
) -> TeamChromosome {
    let slots = parent1.len();
    let cut = rng.usize(0..slots);

    let mut seen: HashSet<usize> = HashSet::with_capacity(slots * 2);
    let mut child = Vec::with_capacity(slots);
    for &gene in parent1[..cut].iter().chain(parent2[cut..].iter()) {
        if seen.insert(gene) {
            child.push(gene);
        }
    }

    if child.len() < slots {
        let mut union: Vec<usize> = parent1
            .iter()
            .chain(parent2.iter())
            .copied()
            .filter(|g| !seen.contains(g))
            .collect();
        rng.shuffle(&mut union);
        for gene in union {
            if child.len() == slots {
                break;
            }
            if seen.insert(gene) {
                child.push(gene);
            }
        }
    }

    if child.len() < slots {
        let mut rest: Vec<usize> = (0..candidate_count).filter(|g| !seen.contains(g)).collect();
        rng.shuffle(&mut rest);
        for gene in rest {
            if child.len() == slots {
                break;
            }
            child.push(gene);
        }
    }

    child
}

/// With probability `rate`, replaces one random slot with a random
/// candidate, resampling until the team is duplicate-free.
pub fn mutate(rng: &mut Rng, team: &mut TeamChromosome, rate: f64, candidate_count: usize) {
    if rng.f64() >= rate {
        return;
    }
    // Every candidate already on the team: nothing to swap in.
    if candidate_count <= team.len() {
        return;
    }
    let slot = rng.usize(0..team.len());
    loop {
        let replacement = rng.usize(0..candidate_count);
        if !team.contains(&replacement) {
            team[slot] = replacement;
            return;
        }
    }
}
