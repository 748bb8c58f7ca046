//! Seed the catalog with subjects from a YAML file.
//!
//! Each record is upserted by ID, so re-running the command after editing the
//! file updates prices in place.
//!
//! ```yaml
//! - id: 3
//!   discipline: Математика
//!   cost: 1500
//!   package_size: 10
//!   discount_percent: 10
//! ```

use std::collections::HashSet;
use std::path::Path;

use eduskills_core::{CatalogEntry, format_price};
use eduskills_site::db::{self, SubjectRecord, SubjectRepository};
use tracing::{error, info, warn};

/// Catalog file bundled with the site, relative to the workspace root.
pub const DEFAULT_SEED_FILE: &str = "crates/site/seed/subjects.yaml";

/// Maximum length of `subjects.discipline`.
const MAX_DISCIPLINE_LEN: usize = 40;

/// Upsert subjects from a YAML file.
///
/// # Errors
///
/// Returns an error if the database URL is missing, the file cannot be read or
/// parsed, a record fails validation, or a database operation fails.
pub async fn subjects(file_path: &str) -> Result<(), Box<dyn std::error::Error>> {
    let database_url = super::database_url().ok_or("SITE_DATABASE_URL not set")?;

    let path = Path::new(file_path);
    if !path.exists() {
        return Err(format!("File not found: {file_path}").into());
    }

    info!(path = %file_path, "Loading subjects from file");

    // Read and validate YAML before connecting to database
    let content = tokio::fs::read_to_string(path).await?;
    let records: Vec<SubjectRecord> = serde_yaml::from_str(&content)?;

    info!(subjects = records.len(), "Parsed catalog file");

    let errors = validate_records(&records);
    if !errors.is_empty() {
        error!("Catalog validation failed:");
        for err in &errors {
            error!("  - {err}");
        }
        return Err(format!("{} validation errors found", errors.len()).into());
    }

    for record in &records {
        if !CatalogEntry::from(record.clone()).is_in_range() {
            warn!(
                id = %record.id,
                package_size = record.package_size,
                discount_percent = ?record.discount_percent,
                "Subject prices will be computed from out-of-range values"
            );
        }
    }

    let pool = db::create_pool(&database_url).await?;
    info!("Connected to database");

    let repo = SubjectRepository::new(&pool);
    for record in &records {
        repo.upsert(record).await?;
        info!(id = %record.id, discipline = %record.discipline, "Subject upserted");
    }

    let catalog = repo.list().await?;
    info!(count = catalog.len(), "Seeding complete, catalog now holds:");
    for line in catalog_summary(&catalog) {
        info!("  {line}");
    }
    Ok(())
}

/// One line per subject with its unit and package prices.
fn catalog_summary(records: &[SubjectRecord]) -> Vec<String> {
    records
        .iter()
        .map(|record| {
            let quote = CatalogEntry::from(record.clone()).quote();
            format!(
                "{} {}: {} x {} = {}",
                record.id,
                record.discipline,
                format_price(quote.unit_price),
                quote.package_size,
                format_price(quote.bulk_price),
            )
        })
        .collect()
}

/// Check records against the table's constraints.
///
/// Returns one message per problem; an empty list means the file is usable.
fn validate_records(records: &[SubjectRecord]) -> Vec<String> {
    let mut errors = Vec::new();
    let mut seen = HashSet::new();

    if records.is_empty() {
        errors.push("catalog file contains no subjects".to_string());
    }

    for record in records {
        let discipline = record.discipline.trim();
        if discipline.is_empty() {
            errors.push(format!("subject {}: discipline is empty", record.id));
        }
        if discipline.chars().count() > MAX_DISCIPLINE_LEN {
            errors.push(format!(
                "subject {}: discipline longer than {MAX_DISCIPLINE_LEN} characters",
                record.id
            ));
        }
        if !seen.insert(record.id) {
            errors.push(format!("subject {}: duplicate id", record.id));
        }
    }

    errors
}
