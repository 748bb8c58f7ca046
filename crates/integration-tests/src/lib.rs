//! Integration tests for the EduSkills site.
//!
//! # Running Tests
//!
//! ```bash
//! # Prepare the database
//! cargo run -p eduskills-cli -- migrate
//! cargo run -p eduskills-cli -- seed
//!
//! # Start the site, then run the ignored tests against it
//! cargo run -p eduskills-site &
//! cargo test -p eduskills-integration-tests -- --ignored
//! ```
//!
//! `SITE_BASE_URL` overrides the default `http://localhost:8000`.

/// Base URL of the running site.
#[must_use]
pub fn site_base_url() -> String {
    std::env::var("SITE_BASE_URL").unwrap_or_else(|_| "http://localhost:8000".to_string())
}
