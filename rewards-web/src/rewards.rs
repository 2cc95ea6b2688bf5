//! Web-specific conversions around the core redemption logic
//!
//! This module turns host-page JavaScript values into core types and
//! re-exports the core redemption types.

use wasm_bindgen::JsValue;

// Re-export all types from rewards-core
pub use rewards_core::*;

#[derive(Debug, thiserror::Error)]
pub enum WebCatalogError {
    #[error("catalog could not be decoded: {0}")]
    Decode(String),
    #[error(transparent)]
    Catalog(#[from] CatalogError),
}

#[derive(Debug, thiserror::Error)]
pub enum WebConfigError {
    #[error("config could not be decoded: {0}")]
    Decode(String),
    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Coerce whatever the host passed as the balance into whole points.
///
/// Numbers truncate toward zero, strings are read like `parseInt`, and
/// anything else (including `undefined`) is 0.
#[must_use]
pub fn points_from_js(value: &JsValue) -> i64 {
    if let Some(number) = value.as_f64() {
        return points_from_f64(number);
    }
    value
        .as_string()
        .map_or(0, |text| points_from_str(Some(&text)))
}

/// Decode a JavaScript array of reward objects into a validated catalog.
///
/// `undefined` and `null` yield an empty catalog.
///
/// # Errors
///
/// Returns [`WebCatalogError`] when the value is not an array of rewards or the
/// rewards carry blank or duplicate ids.
pub fn catalog_from_js(value: JsValue) -> Result<RewardCatalog, WebCatalogError> {
    if value.is_undefined() || value.is_null() {
        return Ok(RewardCatalog::default());
    }
    let rewards: Vec<RewardDescriptor> = serde_wasm_bindgen::from_value(value)
        .map_err(|err| WebCatalogError::Decode(err.to_string()))?;
    Ok(RewardCatalog::from_rewards(rewards)?)
}

/// Decode host-supplied overrides into a validated [`RewardsConfig`].
///
/// Accepts a JSON string or a plain object; `undefined` and `null` keep the
/// defaults.
///
/// # Errors
///
/// Returns [`WebConfigError`] when the value cannot be decoded or breaks a
/// config invariant.
pub fn config_from_js(value: JsValue) -> Result<RewardsConfig, WebConfigError> {
    if value.is_undefined() || value.is_null() {
        return Ok(RewardsConfig::default());
    }
    if let Some(json) = value.as_string() {
        return Ok(RewardsConfig::from_json(&json)?);
    }
    let config: RewardsConfig = serde_wasm_bindgen::from_value(value)
        .map_err(|err| WebConfigError::Decode(err.to_string()))?;
    config.validate()?;
    Ok(config)
}
