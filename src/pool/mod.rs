pub mod loader;

use crate::error::TfResult;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Skill names grouped by self-reported proficiency tier.
/// A name showing up in more than one tier is tolerated; the highest
/// tier wins wherever a single numeric level is needed.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct SkillTiers {
    #[serde(default)]
    pub beginner: Vec<String>,
    #[serde(default)]
    pub intermediate: Vec<String>,
    #[serde(default)]
    pub advanced: Vec<String>,
}

/// One candidate record, immutable for the duration of a run.
/// Missing `skills`/`interests` deserialize as empty collections.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    pub id: String,
    pub name: String,
    pub roll_or_registration_id: String,
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub skills: SkillTiers,
    #[serde(default)]
    pub interests: Vec<String>,
    #[serde(default = "default_visible")]
    pub visible: bool,
}

fn default_visible() -> bool {
    true
}

/// Collaborator that supplies candidate profiles. The engine fetches
/// once per run and never observes later changes to the source.
pub trait ProfileStore {
    fn fetch_visible(&self) -> TfResult<Vec<Profile>>;
    fn fetch_visible_excluding(&self, id: &str) -> TfResult<Vec<Profile>>;
}

/// Ordered, id-deduplicated, visible-only snapshot of candidates.
#[derive(Debug, Clone)]
pub struct Pool {
    profiles: Vec<Profile>,
}

impl Pool {
    /// Drops invisible profiles and duplicate ids (first occurrence wins).
    pub fn snapshot(profiles: Vec<Profile>) -> Self {
        let mut seen: HashSet<String> = HashSet::new();
        let mut kept = Vec::with_capacity(profiles.len());
        for p in profiles {
            if !p.visible {
                continue;
            }
            if seen.insert(p.id.clone()) {
                kept.push(p);
            }
        }
        Self { profiles: kept }
    }

    /// Snapshot minus one id. Used to guarantee the seed user never
    /// enters a recommendation-mode candidate pool.
    pub fn without(&self, id: &str) -> Self {
        Self {
            profiles: self
                .profiles
                .iter()
                .filter(|p| p.id != id)
                .cloned()
                .collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }

    pub fn get(&self, idx: usize) -> &Profile {
        &self.profiles[idx]
    }

    pub fn profiles(&self) -> &[Profile] {
        &self.profiles
    }

    pub fn contains(&self, id: &str) -> bool {
        self.profiles.iter().any(|p| p.id == id)
    }
}

/// Simple vec-backed store for the CLI and tests.
pub struct InMemoryProfileStore {
    profiles: Vec<Profile>,
}

impl InMemoryProfileStore {
    pub fn new(profiles: Vec<Profile>) -> Self {
        Self { profiles }
    }

    /// Lookup by profile id or roll/registration id.
    pub fn find(&self, key: &str) -> Option<&Profile> {
        self.profiles
            .iter()
            .find(|p| p.id == key || p.roll_or_registration_id == key)
    }
}

impl ProfileStore for InMemoryProfileStore {
    fn fetch_visible(&self) -> TfResult<Vec<Profile>> {
        Ok(self
            .profiles
            .iter()
            .filter(|p| p.visible)
            .cloned()
            .collect())
    }

    fn fetch_visible_excluding(&self, id: &str) -> TfResult<Vec<Profile>> {
        Ok(self
            .profiles
            .iter()
            .filter(|p| p.visible && p.id != id)
            .cloned()
            .collect())
    }
}
