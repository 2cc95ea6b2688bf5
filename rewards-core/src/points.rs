//! Point cost arithmetic and the affordability state it drives.
use crate::quantity::Quantity;

/// Whether the viewer can still afford the prospective redemption.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Affordability {
    /// Balance stays non-negative: confirm is enabled.
    Ready,
    /// Balance would go negative: confirm is disabled.
    Insufficient,
}

impl Affordability {
    #[must_use]
    pub const fn from_balance(after_points: i64) -> Self {
        if after_points >= 0 {
            Self::Ready
        } else {
            Self::Insufficient
        }
    }

    #[must_use]
    pub const fn is_ready(self) -> bool {
        matches!(self, Self::Ready)
    }
}

/// Totals for one redemption of `quantity` units.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PointsQuote {
    pub quantity: Quantity,
    pub per_unit: i64,
    pub total_required: i64,
    pub after_points: i64,
    pub affordability: Affordability,
}

impl PointsQuote {
    /// Price `quantity` units at `per_unit` against `user_points`.
    ///
    /// Arithmetic saturates instead of wrapping, so absurd markup values still
    /// land in the insufficient state rather than flipping sign.
    #[must_use]
    pub fn compute(user_points: i64, per_unit: i64, quantity: Quantity) -> Self {
        let total_required = per_unit.saturating_mul(i64::from(quantity.get()));
        let after_points = user_points.saturating_sub(total_required);
        Self {
            quantity,
            per_unit,
            total_required,
            after_points,
            affordability: Affordability::from_balance(after_points),
        }
    }

    #[must_use]
    pub const fn is_affordable(&self) -> bool {
        self.affordability.is_ready()
    }
}

/// Label for points being spent, e.g. `-150 pts`.
#[must_use]
pub fn cost_label(points: i64, suffix: &str) -> String {
    format!("-{points}{suffix}")
}

/// Label for a balance, e.g. `50 pts` or `-100 pts`.
#[must_use]
pub fn balance_label(points: i64, suffix: &str) -> String {
    format!("{points}{suffix}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quote_multiplies_and_subtracts() {
        let quote = PointsQuote::compute(500, 150, Quantity::new(3));
        assert_eq!(quote.total_required, 450);
        assert_eq!(quote.after_points, 50);
        assert_eq!(quote.affordability, Affordability::Ready);

        let quote = PointsQuote::compute(500, 150, Quantity::new(4));
        assert_eq!(quote.total_required, 600);
        assert_eq!(quote.after_points, -100);
        assert_eq!(quote.affordability, Affordability::Insufficient);
    }

    #[test]
    fn exact_balance_is_ready() {
        let quote = PointsQuote::compute(300, 100, Quantity::new(3));
        assert_eq!(quote.after_points, 0);
        assert!(quote.is_affordable());
    }

    #[test]
    fn quote_saturates_instead_of_wrapping() {
        let quote = PointsQuote::compute(0, i64::MAX, Quantity::new(4));
        assert_eq!(quote.total_required, i64::MAX);
        assert_eq!(quote.affordability, Affordability::Insufficient);
    }

    #[test]
    fn labels_keep_natural_sign() {
        assert_eq!(cost_label(450, " pts"), "-450 pts");
        assert_eq!(balance_label(50, " pts"), "50 pts");
        assert_eq!(balance_label(-100, " pts"), "-100 pts");
    }
}
