//! Pricing page assembly.
//!
//! Turns the configured list of subjects into display-ready values: each
//! subject is fetched from a [`CatalogStore`], quoted, and its prices are
//! formatted. The result feeds both the HTML template and the flat JSON
//! mapping served at `/api/pricing`.

use std::future::Future;

use eduskills_core::{CatalogEntry, SubjectId, format_price};
use serde::Serialize;
use serde_json::{Map, Value};

use crate::db::RepositoryError;

/// Read access to catalog entries by ID.
pub trait CatalogStore {
    /// Fetch a single entry.
    ///
    /// Fails with `RepositoryError::NotFound` if no entry has this ID.
    fn get_entry(
        &self,
        id: SubjectId,
    ) -> impl Future<Output = Result<CatalogEntry, RepositoryError>> + Send;
}

/// A subject shown on the pricing page.
///
/// `key` prefixes the subject's template fields (`math_cost`, ...), `id`
/// selects its catalog entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubjectSlot {
    key: String,
    id: SubjectId,
}

impl SubjectSlot {
    /// Create a new slot.
    #[must_use]
    pub fn new(key: impl Into<String>, id: SubjectId) -> Self {
        Self {
            key: key.into(),
            id,
        }
    }

    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    #[must_use]
    pub const fn id(&self) -> SubjectId {
        self.id
    }
}

/// Display values for one subject.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SubjectPricing {
    pub key: String,
    pub name: String,
    /// Formatted unit price.
    pub cost: String,
    /// Formatted package price after discount.
    pub opt_cost: String,
    pub package_size: i64,
    /// Formatted package price before discount.
    pub opt_cost_without_discount: String,
    /// Discount as stored; `None` renders as no discount.
    pub discount_percent: Option<i32>,
}

impl SubjectPricing {
    /// Quote and format a catalog entry.
    #[must_use]
    pub fn from_entry(key: &str, entry: &CatalogEntry) -> Self {
        let quote = entry.quote();
        Self {
            key: key.to_string(),
            name: entry.name.clone(),
            cost: format_price(quote.unit_price),
            opt_cost: format_price(quote.bulk_price),
            package_size: quote.package_size,
            opt_cost_without_discount: format_price(quote.undiscounted_bulk_price),
            discount_percent: entry.discount_percent,
        }
    }

    /// Whether the package is cheaper than buying the units one by one.
    #[must_use]
    pub fn has_discount(&self) -> bool {
        self.discount_percent.is_some_and(|d| d > 0)
    }

    #[must_use]
    pub fn discount(&self) -> i32 {
        self.discount_percent.unwrap_or(0)
    }

    /// Append this subject's `{key}_*` fields to a flat context map.
    pub fn extend_context(&self, context: &mut Map<String, Value>) {
        let key = &self.key;
        context.insert(format!("{key}_name"), Value::from(self.name.clone()));
        context.insert(format!("{key}_cost"), Value::from(self.cost.clone()));
        context.insert(format!("{key}_opt_cost"), Value::from(self.opt_cost.clone()));
        context.insert(
            format!("{key}_package_size"),
            Value::from(self.package_size),
        );
        context.insert(
            format!("{key}_opt_cost_without_discount"),
            Value::from(self.opt_cost_without_discount.clone()),
        );
        context.insert(
            format!("{key}_discount_percent"),
            self.discount_percent.map_or(Value::Null, Value::from),
        );
    }
}

/// Fetch and price every configured subject, in slot order.
///
/// # Errors
///
/// Returns the first `RepositoryError` from the store; a missing subject fails
/// the whole page.
pub async fn assemble_pricing<S>(
    store: &S,
    slots: &[SubjectSlot],
) -> Result<Vec<SubjectPricing>, RepositoryError>
where
    S: CatalogStore + Sync,
{
    let mut subjects = Vec::with_capacity(slots.len());

    for slot in slots {
        let entry = store.get_entry(slot.id()).await?;
        if !entry.is_in_range() {
            tracing::warn!(
                subject = slot.key(),
                id = %slot.id(),
                package_size = entry.package_size,
                discount_percent = ?entry.discount_percent,
                "Catalog entry outside the meaningful range, prices shown as computed"
            );
        }
        subjects.push(SubjectPricing::from_entry(slot.key(), &entry));
    }

    Ok(subjects)
}

/// Flatten priced subjects into the `{subject}_{field}` mapping.
#[must_use]
pub fn pricing_context(subjects: &[SubjectPricing]) -> Map<String, Value> {
    let mut context = Map::new();
    for subject in subjects {
        subject.extend_context(&mut context);
    }
    context
}

#[cfg(test)]
pub(crate) mod tests {
    use std::collections::HashMap;

    use serde_json::json;

    use super::*;

    /// In-memory catalog for tests.
    #[derive(Default)]
    pub struct MemoryCatalog {
        entries: HashMap<SubjectId, CatalogEntry>,
    }

    impl MemoryCatalog {
        pub fn with(mut self, id: i32, name: &str, cost: i64, size: i64, discount: Option<i32>) -> Self {
            self.entries.insert(
                SubjectId::new(id),
                CatalogEntry {
                    name: name.to_string(),
                    unit_price: cost,
                    package_size: size,
                    discount_percent: discount,
                },
            );
            self
        }

        pub fn sample() -> Self {
            Self::default()
                .with(1, "Информатика", 900, 8, None)
                .with(2, "Физика", 1200, 10, Some(5))
                .with(3, "Математика", 1500, 10, Some(10))
        }
    }

    impl CatalogStore for MemoryCatalog {
        async fn get_entry(&self, id: SubjectId) -> Result<CatalogEntry, RepositoryError> {
            self.entries
                .get(&id)
                .cloned()
                .ok_or_else(|| RepositoryError::NotFound(format!("subject {id}")))
        }
    }

    pub fn default_slots() -> Vec<SubjectSlot> {
        vec![
            SubjectSlot::new("info", SubjectId::new(1)),
            SubjectSlot::new("physics", SubjectId::new(2)),
            SubjectSlot::new("math", SubjectId::new(3)),
        ]
    }

    #[test]
    fn test_from_entry_formats_prices() {
        let entry = CatalogEntry {
            name: "Математика".to_string(),
            unit_price: 1500,
            package_size: 10,
            discount_percent: Some(10),
        };

        let pricing = SubjectPricing::from_entry("math", &entry);
        assert_eq!(pricing.cost, "₽1,500");
        assert_eq!(pricing.opt_cost, "₽13,500");
        assert_eq!(pricing.opt_cost_without_discount, "₽15,000");
        assert_eq!(pricing.package_size, 10);
        assert!(pricing.has_discount());
    }

    #[tokio::test]
    async fn test_assemble_pricing_keeps_slot_order() {
        let subjects = assemble_pricing(&MemoryCatalog::sample(), &default_slots())
            .await
            .unwrap_or_else(|e| panic!("all subjects exist: {e}"));

        let keys: Vec<_> = subjects.iter().map(|s| s.key.as_str()).collect();
        assert_eq!(keys, vec!["info", "physics", "math"]);
        assert_eq!(subjects[1].name, "Физика");
        assert_eq!(subjects[1].opt_cost, "₽11,400");
    }

    #[tokio::test]
    async fn test_assemble_pricing_missing_subject_fails() {
        let store = MemoryCatalog::default().with(1, "Информатика", 900, 8, None);
        let result = assemble_pricing(&store, &default_slots()).await;
        assert!(matches!(result, Err(RepositoryError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_assemble_pricing_passes_out_of_range_through() {
        let store = MemoryCatalog::default().with(7, "Химия", 100, 10, Some(150));
        let slots = [SubjectSlot::new("chem", SubjectId::new(7))];

        let subjects = assemble_pricing(&store, &slots)
            .await
            .unwrap_or_else(|e| panic!("subject exists: {e}"));
        assert_eq!(subjects[0].opt_cost, "-₽500");
    }

    #[tokio::test]
    async fn test_pricing_context_fields() {
        let subjects = assemble_pricing(&MemoryCatalog::sample(), &default_slots())
            .await
            .unwrap_or_else(|e| panic!("all subjects exist: {e}"));
        let context = pricing_context(&subjects);

        assert_eq!(context.len(), 18);
        assert_eq!(context["math_name"], json!("Математика"));
        assert_eq!(context["math_cost"], json!("₽1,500"));
        assert_eq!(context["math_opt_cost"], json!("₽13,500"));
        assert_eq!(context["math_package_size"], json!(10));
        assert_eq!(context["math_opt_cost_without_discount"], json!("₽15,000"));
        assert_eq!(context["math_discount_percent"], json!(10));
        assert_eq!(context["info_discount_percent"], Value::Null);
        assert_eq!(context["info_opt_cost"], json!("₽7,200"));
    }
}
