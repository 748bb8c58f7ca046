//! EduSkills Core - Catalog types and pricing logic.
//!
//! This crate provides the pieces shared by every EduSkills component:
//! - `site` - Server-rendered pricing page
//! - `cli` - Command-line tools for migrations, seeding and quotes
//!
//! # Architecture
//!
//! The core crate contains only types and pure functions - no I/O, no database
//! access, no HTTP. Everything here can be called from a request handler, a CLI
//! command or a test without any setup.
//!
//! # Modules
//!
//! - [`types`] - Newtype IDs and the catalog entry model
//! - [`pricing`] - Price formatting and wholesale price calculation

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod pricing;
pub mod types;

pub use pricing::{
    CURRENCY_SYMBOL, PriceFormatError, compute_bulk_price, format_decimal, format_price,
    format_price_str, strip_formatting, undiscounted_bulk_price,
};
pub use types::*;
