//! CLI command implementations.

pub mod migrate;
pub mod quote;
pub mod seed;

use secrecy::SecretString;

/// Load the site database URL from `SITE_DATABASE_URL`, falling back to `DATABASE_URL`.
fn database_url() -> Option<SecretString> {
    dotenvy::dotenv().ok();

    std::env::var("SITE_DATABASE_URL")
        .or_else(|_| std::env::var("DATABASE_URL"))
        .ok()
        .map(SecretString::from)
}
