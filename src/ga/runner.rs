//! The generational loop for both modes: evaluate, select, recombine,
//! mutate, replace, report. Fitness evaluation is the hot path and runs
//! in parallel over the population; everything else is sequential so
//! that a seeded run is fully reproducible.

use crate::config::RunParams;
use crate::error::{TeamForgeError, TfResult};
use crate::fitness::{PartitionScorer, RecommendScorer};
use crate::ga::{partition, recommend};
use crate::pool::{Pool, Profile};
use crate::ranking::{self, PartitionOutcome, RankedTeam};
use rayon::prelude::*;

/// Receives one update per generation. Returning `false` cancels the
/// run cooperatively: the loop stops and the best population seen so
/// far is ranked, never a partial one.
pub trait ProgressCallback: Send + Sync {
    fn on_generation(&self, generation: usize, best_fitness: f64) -> bool;
}

impl<F> ProgressCallback for F
where
    F: Fn(usize, f64) -> bool + Send + Sync,
{
    fn on_generation(&self, generation: usize, best_fitness: f64) -> bool {
        self(generation, best_fitness)
    }
}

/// Callback that reports nowhere and never cancels.
pub struct NoProgress;

impl ProgressCallback for NoProgress {
    fn on_generation(&self, _generation: usize, _best_fitness: f64) -> bool {
        true
    }
}

fn make_rng(seed: Option<u64>) -> fastrand::Rng {
    match seed {
        Some(s) => fastrand::Rng::with_seed(s),
        None => fastrand::Rng::new(),
    }
}

fn best_of(fitnesses: &[f64]) -> f64 {
    fitnesses.iter().copied().fold(f64::NEG_INFINITY, f64::max)
}

/// Runs recommendation mode for one seed profile against a candidate
/// pool and returns up to five ranked, deduplicated teams.
pub fn run_recommendation(
    seed_profile: &Profile,
    pool: &Pool,
    params: &RunParams,
    rng_seed: Option<u64>,
    progress: &dyn ProgressCallback,
) -> TfResult<Vec<RankedTeam>> {
    let candidates = pool.without(&seed_profile.id);
    let slots = params.team_size - 1;

    if candidates.is_empty() {
        return Err(TeamForgeError::EmptyCandidatePool);
    }
    if candidates.len() < slots {
        return Err(TeamForgeError::PoolTooSmall {
            needed: slots,
            available: candidates.len(),
        });
    }

    let scorer = RecommendScorer::new(seed_profile, &candidates);
    let mut rng = make_rng(rng_seed);
    let mut population =
        recommend::init_population(&mut rng, candidates.len(), slots, params.population_size);

    for generation in 0..params.generations {
        let fitnesses: Vec<f64> = population
            .par_iter()
            .map(|team| scorer.team_fitness(team))
            .collect();

        if !progress.on_generation(generation, best_of(&fitnesses)) {
            break;
        }

        let parents = recommend::select_parents(&population, &fitnesses);
        let mut next = parents.clone();
        while next.len() < params.population_size {
            let p1 = &parents[rng.usize(0..parents.len())];
            let p2 = &parents[rng.usize(0..parents.len())];
            let mut child = recommend::crossover(&mut rng, p1, p2, candidates.len());
            recommend::mutate(&mut rng, &mut child, params.mutation_rate, candidates.len());
            next.push(child);
        }
        population = next;
    }

    let fitnesses: Vec<f64> = population
        .par_iter()
        .map(|team| scorer.team_fitness(team))
        .collect();

    Ok(ranking::rank_teams(
        &population,
        &fitnesses,
        &candidates,
        ranking::MAX_RECOMMENDATIONS,
    ))
}

/// Runs partition mode over the whole pool and returns the single best
/// bucket assignment.
pub fn run_partition(
    pool: &Pool,
    params: &RunParams,
    rng_seed: Option<u64>,
    progress: &dyn ProgressCallback,
) -> TfResult<PartitionOutcome> {
    if pool.is_empty() {
        return Err(TeamForgeError::EmptyCandidatePool);
    }
    if pool.len() < params.team_size {
        return Err(TeamForgeError::PoolTooSmall {
            needed: params.team_size,
            available: pool.len(),
        });
    }

    let buckets = partition::bucket_count(pool.len(), params.team_size);
    let scorer = PartitionScorer::new(pool, params.team_size, buckets);
    let mut rng = make_rng(rng_seed);
    let mut population =
        partition::init_population(&mut rng, pool.len(), buckets, params.population_size);

    // Roulette selection gives no survival guarantee, so the best
    // assignment seen across all generations is tracked separately.
    let mut best_seen: Option<(partition::Assignment, f64)> = None;
    let mut track = |population: &[partition::Assignment], fitnesses: &[f64]| {
        for (genes, &f) in population.iter().zip(fitnesses) {
            if best_seen.as_ref().map_or(true, |(_, bf)| f > *bf) {
                best_seen = Some((genes.clone(), f));
            }
        }
    };

    for generation in 0..params.generations {
        let fitnesses: Vec<f64> = population
            .par_iter()
            .map(|genes| scorer.assignment_fitness(genes))
            .collect();
        track(&population, &fitnesses);

        if !progress.on_generation(generation, best_of(&fitnesses)) {
            break;
        }

        let parent_count = (params.population_size / 2).max(1);
        let parents = partition::roulette_select(&mut rng, &population, &fitnesses, parent_count);

        // Offspring are bred pairwise until parents + offspring reach
        // the configured population size.
        let mut next = parents.clone();
        let mut i = 0;
        while next.len() < params.population_size {
            let p1 = &parents[i % parents.len()];
            let p2 = &parents[(i + 1) % parents.len()];
            let (mut c1, mut c2) = partition::crossover(&mut rng, p1, p2);
            partition::mutate(&mut rng, &mut c1, params.mutation_rate, buckets);
            next.push(c1);
            if next.len() < params.population_size {
                partition::mutate(&mut rng, &mut c2, params.mutation_rate, buckets);
                next.push(c2);
            }
            i += 2;
        }
        population = next;
    }

    let fitnesses: Vec<f64> = population
        .par_iter()
        .map(|genes| scorer.assignment_fitness(genes))
        .collect();

    let mut outcome = ranking::best_partition(&population, &fitnesses, pool);
    if let Some((genes, fitness)) = best_seen {
        if fitness > outcome.fitness {
            outcome = ranking::partition_outcome(&genes, fitness, pool);
        }
    }
    Ok(outcome)
}
