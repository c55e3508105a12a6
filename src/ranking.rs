//! Post-processing of the final population into the mode-specific
//! output contracts.

use crate::ga::{Assignment, TeamChromosome};
use crate::pool::{Pool, SkillTiers};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::{BTreeMap, BTreeSet, HashSet};

pub const MAX_RECOMMENDATIONS: usize = 5;
pub const MAX_KEY_SKILLS: usize = 3;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TeamMember {
    pub name: String,
    pub id: String,
    pub interests: Vec<String>,
    pub key_skills: Vec<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RankedTeam {
    pub rank: usize,
    pub fitness: f64,
    pub team_members: Vec<TeamMember>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PartitionOutcome {
    pub buckets: BTreeMap<u32, Vec<String>>,
    pub fitness: f64,
}

pub fn round4(value: f64) -> f64 {
    (value * 10_000.0).round() / 10_000.0
}

/// Up to three headline skills: advanced tier first, then intermediate.
pub fn key_skills(skills: &SkillTiers) -> Vec<String> {
    skills
        .advanced
        .iter()
        .chain(skills.intermediate.iter())
        .take(MAX_KEY_SKILLS)
        .cloned()
        .collect()
}

/// Sorts the final population by fitness descending, drops chromosomes
/// that converged to an already-listed member set, and keeps the top
/// `limit` teams.
pub fn rank_teams(
    population: &[TeamChromosome],
    fitnesses: &[f64],
    candidates: &Pool,
    limit: usize,
) -> Vec<RankedTeam> {
    let mut order: Vec<usize> = (0..population.len()).collect();
    order.sort_by(|&a, &b| {
        fitnesses[b]
            .partial_cmp(&fitnesses[a])
            .unwrap_or(Ordering::Equal)
    });

    let mut seen: HashSet<BTreeSet<usize>> = HashSet::new();
    let mut ranked = Vec::with_capacity(limit);

    for idx in order {
        let key: BTreeSet<usize> = population[idx].iter().copied().collect();
        if !seen.insert(key) {
            continue;
        }

        let team_members = population[idx]
            .iter()
            .map(|&i| {
                let p = candidates.get(i);
                TeamMember {
                    name: p.name.clone(),
                    id: p.id.clone(),
                    interests: p.interests.clone(),
                    key_skills: key_skills(&p.skills),
                }
            })
            .collect();

        ranked.push(RankedTeam {
            rank: ranked.len() + 1,
            fitness: round4(fitnesses[idx]),
            team_members,
        });

        if ranked.len() == limit {
            break;
        }
    }
    ranked
}

/// Exposes one assignment as a bucket-id -> member-ids map (members in
/// pool order).
pub fn partition_outcome(genes: &[u32], fitness: f64, pool: &Pool) -> PartitionOutcome {
    let mut buckets: BTreeMap<u32, Vec<String>> = BTreeMap::new();
    for (idx, &bucket) in genes.iter().enumerate() {
        buckets.entry(bucket).or_default().push(pool.get(idx).id.clone());
    }
    PartitionOutcome { buckets, fitness }
}

/// Picks the single highest-fitness assignment out of a population.
pub fn best_partition(
    population: &[Assignment],
    fitnesses: &[f64],
    pool: &Pool,
) -> PartitionOutcome {
    let best = fitnesses
        .iter()
        .enumerate()
        .max_by(|a, b| a.1.partial_cmp(b.1).unwrap_or(Ordering::Equal))
        .map(|(i, _)| i)
        .unwrap_or(0);
    partition_outcome(&population[best], fitnesses[best], pool)
}
