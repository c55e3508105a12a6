//! Service entry points. A wrapping request-handling layer maps its
//! calls onto exactly these two functions and serializes their output
//! shapes.

use crate::config::RunParams;
use crate::error::TfResult;
use crate::ga::runner::{self, ProgressCallback};
use crate::pool::{Pool, Profile, ProfileStore};
use crate::ranking::{PartitionOutcome, RankedTeam};

/// Recommendation mode: fetch the candidate snapshot (visible, minus
/// the seed user) once, run the GA, return up to five ranked teams.
pub fn recommend_teams(
    store: &dyn ProfileStore,
    seed_profile: &Profile,
    params: &RunParams,
    rng_seed: Option<u64>,
    progress: &dyn ProgressCallback,
) -> TfResult<Vec<RankedTeam>> {
    let candidates = store.fetch_visible_excluding(&seed_profile.id)?;
    let pool = Pool::snapshot(candidates);
    runner::run_recommendation(seed_profile, &pool, params, rng_seed, progress)
}

/// Partition mode: fetch the full visible snapshot once, run the GA,
/// return the single best bucket assignment.
pub fn partition_pool(
    store: &dyn ProfileStore,
    params: &RunParams,
    rng_seed: Option<u64>,
    progress: &dyn ProgressCallback,
) -> TfResult<PartitionOutcome> {
    let profiles = store.fetch_visible()?;
    let pool = Pool::snapshot(profiles);
    runner::run_partition(&pool, params, rng_seed, progress)
}
