//! Wholesale (package) price calculation.
//!
//! A package of `package_size` units at `unit_price` each costs
//! `unit_price * package_size` before discount. The discount is a whole
//! percentage applied to that total, and only the final result is truncated:
//!
//! ```text
//! bulk = trunc(unit_price * package_size * (100 - discount_percent) / 100)
//! ```
//!
//! Inputs are not range-checked. A discount above 100 yields a negative
//! price and a non-positive package size yields zero or a negative price.

/// Price of a whole package before any discount.
///
/// Saturates at the `i64` bounds instead of overflowing.
#[must_use]
pub const fn undiscounted_bulk_price(unit_price: i64, package_size: i64) -> i64 {
    unit_price.saturating_mul(package_size)
}

/// Price of a whole package after applying `discount_percent`.
///
/// Intermediate products are computed in `i128`; the result saturates at the
/// `i64` bounds.
///
/// ```
/// use eduskills_core::compute_bulk_price;
///
/// assert_eq!(compute_bulk_price(100, 10, 0), 1000);
/// assert_eq!(compute_bulk_price(100, 10, 20), 800);
/// assert_eq!(compute_bulk_price(1500, 10, 10), 13_500);
/// ```
#[must_use]
pub fn compute_bulk_price(unit_price: i64, package_size: i64, discount_percent: i64) -> i64 {
    let gross = i128::from(unit_price) * i128::from(package_size);
    let factor = 100 - i128::from(discount_percent);

    let net = gross.checked_mul(factor).map_or_else(
        || {
            if (gross < 0) == (factor < 0) {
                i128::MAX
            } else {
                i128::MIN
            }
        },
        |product| product / 100,
    );

    i64::try_from(net).unwrap_or(if net < 0 { i64::MIN } else { i64::MAX })
}
