//! EduSkills site library.
//!
//! The site's functionality as a library, so the binary, the CLI and the
//! tests share one implementation.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod catalog;
pub mod config;
pub mod db;
pub mod error;
pub mod middleware;
pub mod routes;
pub mod state;
