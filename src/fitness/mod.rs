//! Pure scoring functions over immutable profile snapshots.
//!
//! Per-profile lookups (interest sets, skill-name sets, skill-level maps)
//! are precomputed once per run so the generational loop only does set
//! arithmetic.

use crate::pool::{Pool, Profile};
use std::collections::{BTreeSet, HashMap, HashSet};

/// Skill level scale per tier (beginner, intermediate, advanced).
pub const RECOMMEND_LEVELS: [f64; 3] = [1.0, 2.0, 3.0];
pub const PARTITION_LEVELS: [f64; 3] = [2.0, 3.0, 5.0];

/// Calibration constant: assumed distinct skills per member.
pub const SKILLS_PER_MEMBER: f64 = 5.0;

/// Flat bonus when both profiles know the same skill.
pub const COLLAB_BONUS: f64 = 0.5;

/// Complementarity normalizer per distinct skill.
const LEVEL_SPAN: f64 = 3.0;

const REC_INTEREST_WEIGHT: f64 = 0.6;
const REC_DIVERSITY_WEIGHT: f64 = 0.4;

// Intentionally sum above 1: complementary skill coverage is meant to
// dominate mere interest overlap in partition mode.
const PART_INTEREST_WEIGHT: f64 = 0.4;
const PART_COMPLEMENT_WEIGHT: f64 = 0.7;

/// Penalty per member of deviation from the target bucket size.
pub const BALANCE_PENALTY: f64 = 0.2;

/// Precomputed facts about one profile.
#[derive(Debug, Clone)]
pub struct ProfileFacts {
    pub interests: HashSet<String>,
    pub skill_names: HashSet<String>,
    pub levels: HashMap<String, f64>,
}

impl ProfileFacts {
    pub fn new(profile: &Profile, scale: [f64; 3]) -> Self {
        let interests = profile.interests.iter().cloned().collect();

        // Insertion order beginner -> advanced: a name repeated across
        // tiers resolves to its highest tier.
        let mut levels = HashMap::new();
        let tiers = [
            (&profile.skills.beginner, scale[0]),
            (&profile.skills.intermediate, scale[1]),
            (&profile.skills.advanced, scale[2]),
        ];
        for (names, level) in tiers {
            for name in names {
                levels.insert(name.clone(), level);
            }
        }

        let skill_names = levels.keys().cloned().collect();
        Self {
            interests,
            skill_names,
            levels,
        }
    }
}

/// |a ∩ b| / max(|a|, |b|). Deliberately max-based rather than Jaccard;
/// 0 when either set is empty. Range [0, 1].
pub fn interest_similarity(a: &HashSet<String>, b: &HashSet<String>) -> f64 {
    if a.is_empty() || b.is_empty() {
        return 0.0;
    }
    let overlap = a.intersection(b).count();
    overlap as f64 / a.len().max(b.len()) as f64
}

/// |a ∩ b| / |a ∪ b|; 0 when both sets are empty.
pub fn jaccard(a: &HashSet<String>, b: &HashSet<String>) -> f64 {
    if a.is_empty() && b.is_empty() {
        return 0.0;
    }
    let overlap = a.intersection(b).count();
    let union = a.len() + b.len() - overlap;
    overlap as f64 / union as f64
}

/// Distinct skill names across all tiers of all members, over
/// `|team| * 5`. Can exceed 1 for unusually skill-rich teams.
pub fn skill_diversity(members: &[&ProfileFacts]) -> f64 {
    if members.is_empty() {
        return 0.0;
    }
    let mut names: HashSet<&str> = HashSet::new();
    for m in members {
        names.extend(m.skill_names.iter().map(String::as_str));
    }
    names.len() as f64 / (members.len() as f64 * SKILLS_PER_MEMBER)
}

/// Rewards asymmetric strength (`|levelA - levelB|` per skill) plus a
/// flat bonus where both members know the skill, normalized by
/// `3 * |distinct skills|`. Approximately [0, 1]; 0 when neither
/// profile lists any skill.
pub fn complementarity(a: &ProfileFacts, b: &ProfileFacts) -> f64 {
    // Ordered union so the float accumulation order is stable across
    // runs; identical seeds must give identical fitness values.
    let mut names: BTreeSet<&str> = a.levels.keys().map(String::as_str).collect();
    names.extend(b.levels.keys().map(String::as_str));
    if names.is_empty() {
        return 0.0;
    }

    let mut score = 0.0;
    for name in &names {
        let la = a.levels.get(*name).copied().unwrap_or(0.0);
        let lb = b.levels.get(*name).copied().unwrap_or(0.0);
        score += (la - lb).abs();
        if la > 0.0 && lb > 0.0 {
            score += COLLAB_BONUS;
        }
    }
    score / (LEVEL_SPAN * names.len() as f64)
}

/// Recommendation-mode fitness of candidate teams around a fixed seed.
pub struct RecommendScorer {
    seed: ProfileFacts,
    candidates: Vec<ProfileFacts>,
}

impl RecommendScorer {
    pub fn new(seed: &Profile, pool: &Pool) -> Self {
        Self {
            seed: ProfileFacts::new(seed, RECOMMEND_LEVELS),
            candidates: pool
                .profiles()
                .iter()
                .map(|p| ProfileFacts::new(p, RECOMMEND_LEVELS))
                .collect(),
        }
    }

    /// `0.6 * mean interest similarity(seed, mate) + 0.4 * diversity(seed + mates)`.
    pub fn team_fitness(&self, team: &[usize]) -> f64 {
        if team.is_empty() {
            return 0.0;
        }
        let mean_sim = team
            .iter()
            .map(|&i| interest_similarity(&self.seed.interests, &self.candidates[i].interests))
            .sum::<f64>()
            / team.len() as f64;

        let mut members: Vec<&ProfileFacts> = Vec::with_capacity(team.len() + 1);
        members.push(&self.seed);
        members.extend(team.iter().map(|&i| &self.candidates[i]));

        REC_INTEREST_WEIGHT * mean_sim + REC_DIVERSITY_WEIGHT * skill_diversity(&members)
    }
}

/// Partition-mode fitness over bucket assignment vectors.
pub struct PartitionScorer {
    facts: Vec<ProfileFacts>,
    team_size: usize,
    bucket_count: usize,
}

impl PartitionScorer {
    pub fn new(pool: &Pool, team_size: usize, bucket_count: u32) -> Self {
        Self {
            facts: pool
                .profiles()
                .iter()
                .map(|p| ProfileFacts::new(p, PARTITION_LEVELS))
                .collect(),
            team_size,
            bucket_count: bucket_count as usize,
        }
    }

    /// Mean pairwise `0.4 * interest jaccard + 0.7 * complementarity`,
    /// minus `0.2 * |size - teamSize|` as a balance penalty.
    pub fn bucket_fitness(&self, members: &[usize]) -> f64 {
        let mut pair_total = 0.0;
        let mut pairs = 0u32;
        for i in 0..members.len() {
            for j in (i + 1)..members.len() {
                let a = &self.facts[members[i]];
                let b = &self.facts[members[j]];
                pair_total += PART_INTEREST_WEIGHT * jaccard(&a.interests, &b.interests)
                    + PART_COMPLEMENT_WEIGHT * complementarity(a, b);
                pairs += 1;
            }
        }
        let avg = if pairs > 0 {
            pair_total / pairs as f64
        } else {
            0.0
        };
        avg - BALANCE_PENALTY * (members.len() as f64 - self.team_size as f64).abs()
    }

    /// Mean bucket fitness across non-empty buckets.
    pub fn assignment_fitness(&self, genes: &[u32]) -> f64 {
        let mut buckets: Vec<Vec<usize>> = vec![Vec::new(); self.bucket_count];
        for (idx, &b) in genes.iter().enumerate() {
            buckets[b as usize].push(idx);
        }

        let mut total = 0.0;
        let mut counted = 0u32;
        for members in &buckets {
            if members.is_empty() {
                continue;
            }
            total += self.bucket_fitness(members);
            counted += 1;
        }
        if counted == 0 {
            0.0
        } else {
            total / counted as f64
        }
    }
}
