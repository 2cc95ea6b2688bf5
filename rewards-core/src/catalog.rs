//! Reward catalogs supplied as structured data instead of markup attributes.
use crate::reward::{RewardDescriptor, TriggerRegistry};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use thiserror::Error;

const SAMPLE_REWARDS_JSON: &str = include_str!("../data/sample_rewards.json");

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("reward at index {index} has a blank id")]
    BlankId { index: usize },
    #[error("reward id {0:?} appears more than once")]
    DuplicateId(String),
}

/// Ordered list of rewards as the page lists them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RewardCatalog {
    rewards: Vec<RewardDescriptor>,
}

impl RewardCatalog {
    /// Build a catalog, rejecting blank and duplicate ids.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::BlankId`] or [`CatalogError::DuplicateId`].
    pub fn from_rewards(rewards: Vec<RewardDescriptor>) -> Result<Self, CatalogError> {
        check_ids(&rewards)?;
        Ok(Self { rewards })
    }

    /// Parse a JSON array of rewards.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Json`] for malformed input plus the id checks of
    /// [`RewardCatalog::from_rewards`].
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let rewards: Vec<RewardDescriptor> = serde_json::from_str(json)?;
        Self::from_rewards(rewards)
    }

    /// The five rewards seeded into a fresh deployment.
    #[must_use]
    pub fn sample() -> Self {
        Self::from_json(SAMPLE_REWARDS_JSON).unwrap_or_default()
    }

    #[must_use]
    pub fn rewards(&self) -> &[RewardDescriptor] {
        &self.rewards
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.rewards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rewards.is_empty()
    }

    #[must_use]
    pub fn find(&self, id: &str) -> Option<&RewardDescriptor> {
        self.rewards.iter().find(|reward| reward.id == id)
    }

    /// Rewards the viewer can afford at least one unit of.
    pub fn affordable(&self, user_points: i64) -> impl Iterator<Item = &RewardDescriptor> {
        self.rewards
            .iter()
            .filter(move |reward| reward.points <= user_points)
    }

    #[must_use]
    pub fn into_registry(self) -> TriggerRegistry {
        self.rewards.into_iter().collect()
    }
}

fn check_ids(rewards: &[RewardDescriptor]) -> Result<(), CatalogError> {
    let mut seen = BTreeSet::new();
    for (index, reward) in rewards.iter().enumerate() {
        if reward.id.trim().is_empty() {
            return Err(CatalogError::BlankId { index });
        }
        if !seen.insert(reward.id.as_str()) {
            return Err(CatalogError::DuplicateId(reward.id.clone()));
        }
    }
    Ok(())
}
