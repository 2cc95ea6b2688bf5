//! Redemption quantity with a floor of one unit.
use crate::numbers::parse_int;
use std::fmt;

/// Number of units being redeemed. Never below one; no upper bound besides `u32::MAX`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Quantity(u32);

/// Direction of a stepper button press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuantityStep {
    Increase,
    Decrease,
}

impl Quantity {
    pub const ONE: Self = Self(1);

    /// Build a quantity, lifting zero to the floor.
    #[must_use]
    pub const fn new(units: u32) -> Self {
        if units == 0 { Self::ONE } else { Self(units) }
    }

    #[must_use]
    pub const fn get(self) -> u32 {
        self.0
    }

    /// Read a quantity from the raw text of the quantity field.
    ///
    /// Missing, unparsable and zero values fall back to one; anything below one
    /// is clamped up to it.
    #[must_use]
    pub fn from_input(raw: Option<&str>) -> Self {
        let parsed = raw.and_then(parse_int).filter(|value| *value != 0).unwrap_or(1);
        let clamped = parsed.clamp(1, i64::from(u32::MAX));
        Self(u32::try_from(clamped).unwrap_or(u32::MAX))
    }

}

impl QuantityStep {
    /// Value the stepper writes back into the quantity field, or `None` when
    /// the press is refused.
    ///
    /// The field's own reading is stepped without clamping (missing, unparsable
    /// and zero read as one), so a stray `-3` becomes `-2`. Pricing still goes
    /// through [`Quantity::from_input`], which lifts that to one unit.
    #[must_use]
    pub fn apply(self, raw: Option<&str>) -> Option<i64> {
        let current = raw.and_then(parse_int).filter(|value| *value != 0).unwrap_or(1);
        match self {
            Self::Increase => Some(current.saturating_add(1)),
            Self::Decrease if current > 1 => Some(current - 1),
            Self::Decrease => None,
        }
    }
}

impl Default for Quantity {
    fn default() -> Self {
        Self::ONE
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
