//! Core types for EduSkills.
//!
//! This module provides type-safe wrappers for catalog concepts.

pub mod catalog;
pub mod id;

pub use catalog::{CatalogEntry, WholesaleQuote};
pub use id::*;
