use rstest::rstest;
use std::collections::HashSet;
use teamforge::fitness::{
    complementarity, interest_similarity, jaccard, skill_diversity, PartitionScorer, ProfileFacts,
    RecommendScorer, PARTITION_LEVELS, RECOMMEND_LEVELS,
};
use teamforge::ga::partition::bucket_count;
use teamforge::pool::{Pool, Profile, SkillTiers};

fn profile(
    id: &str,
    interests: &[&str],
    beginner: &[&str],
    intermediate: &[&str],
    advanced: &[&str],
) -> Profile {
    Profile {
        id: id.to_string(),
        name: format!("User {}", id),
        roll_or_registration_id: format!("R{}", id),
        email: format!("{}@example.com", id),
        phone: None,
        skills: SkillTiers {
            beginner: beginner.iter().map(|s| s.to_string()).collect(),
            intermediate: intermediate.iter().map(|s| s.to_string()).collect(),
            advanced: advanced.iter().map(|s| s.to_string()).collect(),
        },
        interests: interests.iter().map(|s| s.to_string()).collect(),
        visible: true,
    }
}

fn set(items: &[&str]) -> HashSet<String> {
    items.iter().map(|s| s.to_string()).collect()
}

// --- SIMILARITY ---

#[rstest]
#[case(&["rust", "chess"], &["rust", "chess"], 1.0)]
#[case(&["rust", "chess"], &["go", "poker"], 0.0)]
#[case(&[], &[], 0.0)]
#[case(&["rust"], &[], 0.0)]
#[case(&[], &["rust"], 0.0)]
#[case(&["a", "b", "c"], &["a"], 1.0 / 3.0)]
#[case(&["a"], &["a", "b", "c", "d"], 0.25)]
fn test_interest_similarity(#[case] a: &[&str], #[case] b: &[&str], #[case] expected: f64) {
    let result = interest_similarity(&set(a), &set(b));
    assert!(
        (result - expected).abs() < 1e-9,
        "similarity({:?}, {:?}) = {}, expected {}",
        a,
        b,
        result,
        expected
    );
}

#[rstest]
#[case(&["a", "b"], &["a", "b"], 1.0)]
#[case(&["a", "b"], &["c", "d"], 0.0)]
#[case(&[], &[], 0.0)]
#[case(&["a", "b"], &["b", "c"], 1.0 / 3.0)]
#[case(&["a"], &[], 0.0)]
fn test_jaccard(#[case] a: &[&str], #[case] b: &[&str], #[case] expected: f64) {
    let result = jaccard(&set(a), &set(b));
    assert!(
        (result - expected).abs() < 1e-9,
        "jaccard({:?}, {:?}) = {}, expected {}",
        a,
        b,
        result,
        expected
    );
}

// --- DIVERSITY ---

#[test]
fn test_skill_diversity_counts_distinct_names_across_tiers() {
    let a = ProfileFacts::new(
        &profile("a", &[], &["sql"], &["docker"], &["rust"]),
        RECOMMEND_LEVELS,
    );
    let b = ProfileFacts::new(
        &profile("b", &[], &["rust"], &[], &["design"]),
        RECOMMEND_LEVELS,
    );
    // Distinct names: sql, docker, rust, design = 4, team of 2.
    let result = skill_diversity(&[&a, &b]);
    assert!((result - 4.0 / 10.0).abs() < 1e-9, "got {}", result);
}

#[test]
fn test_skill_diversity_can_exceed_one() {
    let many: Vec<String> = (0..12).map(|i| format!("skill{}", i)).collect();
    let many_refs: Vec<&str> = many.iter().map(String::as_str).collect();
    let a = ProfileFacts::new(
        &profile("a", &[], &many_refs, &[], &[]),
        RECOMMEND_LEVELS,
    );
    assert!(skill_diversity(&[&a]) > 1.0);
}

#[test]
fn test_skill_diversity_empty_team() {
    assert_eq!(skill_diversity(&[]), 0.0);
}

// --- COMPLEMENTARITY ---

#[test]
fn test_complementarity_identical_profiles_flat_bonus_baseline() {
    // Identical skills at identical tiers: no level differences, only
    // the 0.5 collaboration bonus per skill. Expected 0.5 * n / (3 * n).
    let p = profile("a", &[], &["sql"], &["docker"], &["rust"]);
    let a = ProfileFacts::new(&p, PARTITION_LEVELS);
    let b = ProfileFacts::new(&p, PARTITION_LEVELS);
    let result = complementarity(&a, &b);
    assert!(
        (result - 0.5 / 3.0).abs() < 1e-6,
        "expected flat-bonus baseline ~0.1667, got {}",
        result
    );
}

#[test]
fn test_complementarity_rewards_asymmetric_strength() {
    // One advanced expert, one novice in the same skill:
    // |5 - 2| + 0.5 bonus over 3 * 1 skill.
    let a = ProfileFacts::new(&profile("a", &[], &[], &[], &["rust"]), PARTITION_LEVELS);
    let b = ProfileFacts::new(&profile("b", &[], &["rust"], &[], &[]), PARTITION_LEVELS);
    let result = complementarity(&a, &b);
    assert!((result - 3.5 / 3.0).abs() < 1e-9, "got {}", result);
}

#[test]
fn test_complementarity_no_skills_is_zero() {
    let a = ProfileFacts::new(&profile("a", &["x"], &[], &[], &[]), PARTITION_LEVELS);
    let b = ProfileFacts::new(&profile("b", &["y"], &[], &[], &[]), PARTITION_LEVELS);
    assert_eq!(complementarity(&a, &b), 0.0);
}

#[test]
fn test_highest_tier_wins_for_duplicated_skill() {
    // "rust" listed as both beginner and advanced: the advanced level
    // must be authoritative.
    let dup = profile("a", &[], &["rust"], &[], &["rust"]);
    let facts = ProfileFacts::new(&dup, PARTITION_LEVELS);
    assert_eq!(facts.levels.get("rust"), Some(&PARTITION_LEVELS[2]));
    assert_eq!(facts.skill_names.len(), 1);
}

// --- RECOMMENDATION FITNESS ---

#[test]
fn test_recommend_fitness_weighted_sum() {
    let seed = profile("seed", &["chess", "rust"], &[], &[], &["rust"]);
    let mate = profile("m1", &["chess", "rust"], &[], &[], &["design"]);
    let pool = Pool::snapshot(vec![mate]);
    let scorer = RecommendScorer::new(&seed, &pool);

    // similarity = 1.0; diversity = 2 distinct skills / (2 * 5) = 0.2
    let fitness = scorer.team_fitness(&[0]);
    assert!((fitness - (0.6 * 1.0 + 0.4 * 0.2)).abs() < 1e-9, "got {}", fitness);
}

#[test]
fn test_recommend_fitness_monotone_in_shared_interests() {
    // Holding skills fixed, more shared interests must not decrease a
    // candidate's contribution.
    let mut last = -1.0;
    for shared in 0..=3 {
        let seed_interests = ["a", "b", "c"];
        let mate_interests: Vec<&str> = seed_interests[..shared]
            .iter()
            .copied()
            .chain(["x", "y", "z"][shared..].iter().copied())
            .collect();
        let seed = profile("seed", &seed_interests, &[], &[], &["rust"]);
        let mate = profile("m1", &mate_interests, &[], &[], &["design"]);
        let pool = Pool::snapshot(vec![mate]);
        let fitness = RecommendScorer::new(&seed, &pool).team_fitness(&[0]);
        assert!(
            fitness >= last,
            "fitness decreased ({} -> {}) at {} shared interests",
            last,
            fitness,
            shared
        );
        last = fitness;
    }
}

// --- PARTITION FITNESS ---

#[test]
fn test_bucket_fitness_balance_penalty() {
    // A singleton bucket has no pairs, so its fitness is exactly the
    // balance penalty: -0.2 * |1 - 3|.
    let pool = Pool::snapshot(vec![
        profile("a", &["x"], &[], &[], &["rust"]),
        profile("b", &["x"], &[], &[], &["go"]),
        profile("c", &["x"], &[], &[], &["sql"]),
    ]);
    let scorer = PartitionScorer::new(&pool, 3, bucket_count(pool.len(), 3));
    let result = scorer.bucket_fitness(&[0]);
    assert!((result - (-0.4)).abs() < 1e-9, "got {}", result);
}

#[test]
fn test_bucket_fitness_full_bucket_has_no_penalty() {
    let pool = Pool::snapshot(vec![
        profile("a", &["x"], &[], &[], &["rust"]),
        profile("b", &["x"], &[], &[], &["go"]),
        profile("c", &["x"], &[], &[], &["sql"]),
    ]);
    let scorer = PartitionScorer::new(&pool, 3, bucket_count(pool.len(), 3));
    let full = scorer.bucket_fitness(&[0, 1, 2]);
    // All pairs share all interests (jaccard 1) and have disjoint
    // advanced skills: every pair contributes a positive score and no
    // penalty applies at exact size.
    assert!(full > 0.0, "got {}", full);
}

#[test]
fn test_assignment_fitness_averages_non_empty_buckets() {
    let pool = Pool::snapshot(vec![
        profile("a", &["x"], &[], &[], &["rust"]),
        profile("b", &["x"], &[], &[], &["go"]),
        profile("c", &["x"], &[], &[], &["sql"]),
    ]);
    let scorer = PartitionScorer::new(&pool, 3, bucket_count(pool.len(), 3));

    // Everyone in bucket 0: one non-empty bucket, mean equals that
    // bucket's fitness.
    let all_together = scorer.assignment_fitness(&[0, 0, 0]);
    assert!((all_together - scorer.bucket_fitness(&[0, 1, 2])).abs() < 1e-9);
}
