//! Offline price quote.

use eduskills_core::{CatalogEntry, format_price};

/// Print the unit and package prices for the given inputs.
#[allow(clippy::print_stdout)]
pub fn print(cost: i64, package_size: i64, discount: Option<i32>) {
    let entry = CatalogEntry {
        name: String::new(),
        unit_price: cost,
        package_size,
        discount_percent: discount,
    };
    if !entry.is_in_range() {
        tracing::warn!(package_size, ?discount, "Inputs outside the meaningful range");
    }

    print!("{}", render(&entry));
}

/// Render the quote as aligned lines.
fn render(entry: &CatalogEntry) -> String {
    let quote = entry.quote();
    format!(
        "unit price:        {}\n\
         package size:      {}\n\
         discount:          {}%\n\
         package price:     {}\n\
         without discount:  {}\n",
        format_price(quote.unit_price),
        quote.package_size,
        quote.discount_percent,
        format_price(quote.bulk_price),
        format_price(quote.undiscounted_bulk_price),
    )
}
