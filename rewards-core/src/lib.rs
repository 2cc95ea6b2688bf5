//! Rewards Redemption Core
//!
//! Platform-agnostic logic behind the rewards page: reading reward triggers,
//! stepping the redemption quantity, pricing it against the viewer's balance
//! and driving the redeem and success modals. The browser shell supplies a
//! [`RewardsSurface`] over the DOM; everything else lives here.

pub mod catalog;
pub mod config;
pub mod constants;
pub mod controller;
pub mod modal;
pub mod numbers;
pub mod points;
pub mod quantity;
pub mod reward;
pub mod surface;

// Re-export commonly used types
pub use catalog::{CatalogError, RewardCatalog};
pub use config::{ButtonStyle, ConfigError, RewardsConfig};
pub use controller::{InitError, RewardsController};
pub use modal::{Dismissal, ModalKind, ModalState};
pub use numbers::{parse_int, points_from_f64, points_from_str};
pub use points::{Affordability, PointsQuote, balance_label, cost_label};
pub use quantity::{Quantity, QuantityStep};
pub use reward::{RewardAttributes, RewardDescriptor, TriggerError, TriggerRegistry};
pub use surface::{
    MemoryElement, MemorySurface, RewardsSurface, Slot, StyleProp, SurfaceError, SurfaceResult,
};
