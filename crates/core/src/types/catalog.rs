//! Catalog entry model.

use serde::{Deserialize, Serialize};

use crate::pricing::{compute_bulk_price, undiscounted_bulk_price};

/// Inclusive range of meaningful discount percentages.
pub const DISCOUNT_RANGE: std::ops::RangeInclusive<i32> = 0..=100;

/// A priced catalog item, as read from the record store.
///
/// Values are taken as stored. Nothing here rejects a discount outside
/// [`DISCOUNT_RANGE`] or a non-positive package size; use
/// [`CatalogEntry::is_in_range`] to detect such rows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogEntry {
    /// Discipline name shown on the page.
    pub name: String,
    /// Price of a single unit in whole rubles.
    pub unit_price: i64,
    /// Number of units sold together as a package.
    pub package_size: i64,
    /// Package discount in percent, if any.
    pub discount_percent: Option<i32>,
}

impl CatalogEntry {
    /// The discount to apply; a missing discount means none.
    #[must_use]
    pub fn effective_discount(&self) -> i32 {
        self.discount_percent.unwrap_or(0)
    }

    /// Whether the discount and package size produce a meaningful price.
    #[must_use]
    pub fn is_in_range(&self) -> bool {
        self.package_size >= 1 && DISCOUNT_RANGE.contains(&self.effective_discount())
    }

    /// Compute the package prices for this entry.
    #[must_use]
    pub fn quote(&self) -> WholesaleQuote {
        let discount_percent = self.effective_discount();
        WholesaleQuote {
            unit_price: self.unit_price,
            package_size: self.package_size,
            discount_percent,
            bulk_price: compute_bulk_price(
                self.unit_price,
                self.package_size,
                i64::from(discount_percent),
            ),
            undiscounted_bulk_price: undiscounted_bulk_price(self.unit_price, self.package_size),
        }
    }
}

/// Unit and package prices for one catalog entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WholesaleQuote {
    pub unit_price: i64,
    pub package_size: i64,
    /// Discount that was applied (0 when the entry has none).
    pub discount_percent: i32,
    /// Package price after discount.
    pub bulk_price: i64,
    /// Package price before discount.
    pub undiscounted_bulk_price: i64,
}
