//! Reward descriptors and the trigger registry that resolves them.
use crate::numbers::parse_int;
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;
use thiserror::Error;

/// One redeemable reward as shown on the page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RewardDescriptor {
    #[serde(deserialize_with = "id_from_string_or_number")]
    pub id: String,
    #[serde(alias = "reward_name")]
    pub name: String,
    /// Cost of a single unit.
    #[serde(alias = "points_required")]
    pub points: i64,
    /// Theme class applied to the modal header.
    #[serde(default)]
    pub color_class: String,
    #[serde(default)]
    pub icon: Option<String>,
}

impl RewardDescriptor {
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        points: i64,
        color_class: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            points,
            color_class: color_class.into(),
            icon: None,
        }
    }

    #[must_use]
    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    /// Check the fields the redeem modal needs.
    ///
    /// # Errors
    ///
    /// Returns the first missing or unusable field.
    pub fn validate(&self) -> Result<(), TriggerError> {
        if self.id.trim().is_empty() {
            return Err(TriggerError::MissingId);
        }
        if self.name.is_empty() {
            return Err(TriggerError::MissingName);
        }
        match self.points {
            0 => Err(TriggerError::ZeroPoints),
            p if p < 0 => Err(TriggerError::NegativePoints(p)),
            _ => Ok(()),
        }
    }
}

/// Database ids are numeric while trigger ids are strings; accept both.
fn id_from_string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawId {
        Text(String),
        Number(u64),
    }

    Ok(match RawId::deserialize(deserializer)? {
        RawId::Text(text) => text,
        RawId::Number(number) => number.to_string(),
    })
}

/// Reasons a trigger click does not open the redeem modal.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TriggerError {
    #[error("trigger has no reward id")]
    MissingId,
    #[error("trigger has no reward name")]
    MissingName,
    #[error("trigger has no reward points")]
    MissingPoints,
    #[error("reward points {raw:?} are not a number")]
    InvalidPoints { raw: String },
    #[error("reward points are zero")]
    ZeroPoints,
    #[error("reward points {0} are negative")]
    NegativePoints(i64),
}

/// Raw data attributes read off a trigger element.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RewardAttributes {
    pub id: Option<String>,
    pub name: Option<String>,
    pub points: Option<String>,
    pub color: Option<String>,
}

impl RewardAttributes {
    /// Parse the attributes into a descriptor.
    ///
    /// A missing color is not an error; the header then keeps only its base class.
    ///
    /// # Errors
    ///
    /// Returns a [`TriggerError`] when id, name or points are absent or unusable.
    pub fn into_descriptor(self) -> Result<RewardDescriptor, TriggerError> {
        let id = self.id.filter(|id| !id.trim().is_empty()).ok_or(TriggerError::MissingId)?;
        let name = self.name.filter(|name| !name.is_empty()).ok_or(TriggerError::MissingName)?;
        let raw_points = self.points.ok_or(TriggerError::MissingPoints)?;
        let points =
            parse_int(&raw_points).ok_or(TriggerError::InvalidPoints { raw: raw_points })?;
        let descriptor = RewardDescriptor::new(id, name, points, self.color.unwrap_or_default());
        descriptor.validate()?;
        Ok(descriptor)
    }
}

/// Typed rewards keyed by id, consulted before attribute parsing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TriggerRegistry {
    rewards: BTreeMap<String, RewardDescriptor>,
}

impl TriggerRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a reward, returning the one it replaced.
    pub fn register(&mut self, reward: RewardDescriptor) -> Option<RewardDescriptor> {
        self.rewards.insert(reward.id.clone(), reward)
    }

    #[must_use]
    pub fn get(&self, id: &str) -> Option<&RewardDescriptor> {
        self.rewards.get(id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.rewards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rewards.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &RewardDescriptor> {
        self.rewards.values()
    }

    /// Resolve a trigger to a reward.
    ///
    /// A registered id wins over whatever the other attributes say; unknown ids
    /// fall back to parsing the attributes.
    ///
    /// # Errors
    ///
    /// Returns a [`TriggerError`] when the resolved reward cannot be redeemed.
    pub fn resolve(&self, attributes: &RewardAttributes) -> Result<RewardDescriptor, TriggerError> {
        if let Some(known) = attributes.id.as_deref().and_then(|id| self.get(id)) {
            known.validate()?;
            return Ok(known.clone());
        }
        attributes.clone().into_descriptor()
    }
}

impl FromIterator<RewardDescriptor> for TriggerRegistry {
    fn from_iter<I: IntoIterator<Item = RewardDescriptor>>(iter: I) -> Self {
        let mut registry = Self::new();
        for reward in iter {
            registry.register(reward);
        }
        registry
    }
}
