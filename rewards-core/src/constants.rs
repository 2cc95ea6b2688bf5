//! Fixed markup contract and logging keys for the rewards controller.
//!
//! Class names and labels that hosts may want to restyle live in
//! [`crate::config::RewardsConfig`]; the values here are the contract the
//! server-rendered page is built against and only change with the template.

// Trigger attributes -------------------------------------------------------
pub const ATTR_REWARD_ID: &str = "data-reward-id";
pub const ATTR_REWARD_NAME: &str = "data-reward-name";
pub const ATTR_REWARD_POINTS: &str = "data-reward-points";
pub const ATTR_REWARD_COLOR: &str = "data-reward-color";

// Defaults -------------------------------------------------------------------
pub(crate) const DEFAULT_REDEEM_PATH_PREFIX: &str = "/redeem/";
pub(crate) const DEFAULT_POINTS_SUFFIX: &str = " pts";
pub(crate) const DEFAULT_HEADER_BASE_CLASS: &str = "modal-header";
pub(crate) const DEFAULT_ACTIVE_CLASS: &str = "active";
pub(crate) const DEFAULT_TRIGGER_CLASS: &str = "redeem-btn";
pub(crate) const DEFAULT_BADGE_DISPLAY: &str = "flex";
pub(crate) const HIDDEN_DISPLAY: &str = "none";
pub(crate) const ENABLED_OPACITY: &str = "1";
pub(crate) const ENABLED_CURSOR: &str = "pointer";
pub(crate) const DISABLED_OPACITY: &str = "0.5";
pub(crate) const DISABLED_CURSOR: &str = "not-allowed";

// Escape key as reported by `KeyboardEvent.key`.
pub const ESCAPE_KEY: &str = "Escape";

// Logging keys -------------------------------------------------------------
pub(crate) const LOG_INIT_DUPLICATE: &str = "rewards.init.duplicate";
pub(crate) const LOG_TRIGGER_SKIPPED: &str = "rewards.trigger.skipped";
pub(crate) const LOG_MODAL_OPENED: &str = "rewards.modal.opened";
pub(crate) const LOG_MODAL_CLOSED: &str = "rewards.modal.closed";
pub(crate) const LOG_SURFACE_SKIPPED: &str = "rewards.surface.skipped";
pub(crate) const LOG_QUOTE: &str = "rewards.quote";
