//! Pricing logic for catalog entries.
//!
//! Two pure building blocks, both free of I/O:
//!
//! - [`format`] turns an amount into a display string such as `₽13,500`.
//! - [`wholesale`] turns a unit price, package size and discount into the
//!   price of a whole package.
//!
//! # Example
//!
//! ```
//! use eduskills_core::{compute_bulk_price, format_price, undiscounted_bulk_price};
//!
//! let bulk = compute_bulk_price(1500, 10, 10);
//! assert_eq!(format_price(bulk), "₽13,500");
//! assert_eq!(format_price(undiscounted_bulk_price(1500, 10)), "₽15,000");
//! ```

pub mod format;
pub mod wholesale;

pub use format::{
    CURRENCY_SYMBOL, PriceFormatError, format_decimal, format_price, format_price_str,
    strip_formatting,
};
pub use wholesale::{compute_bulk_price, undiscounted_bulk_price};
