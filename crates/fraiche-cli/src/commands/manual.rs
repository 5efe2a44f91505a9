use crate::commands::parse_date;
use crate::output;
use chrono::Utc;
use fraiche_core::enrich::{manual_entry, ManualEntry};
use fraiche_core::error::FraicheError;
use fraiche_core::Category;

#[allow(clippy::too_many_arguments)]
pub fn run(
    barcode: String,
    name: String,
    brand: Option<String>,
    category: Option<String>,
    expiry: Option<String>,
    quantity: u32,
    location: Option<String>,
    output_format: &str,
) -> Result<(), FraicheError> {
    let category = match category {
        Some(ref raw) => {
            Some(
                Category::from_label(raw).ok_or_else(|| FraicheError::UnknownCategory {
                    name: raw.clone(),
                    available: Category::ALL.map(|c| c.label()).join(", "),
                })?,
            )
        }
        None => None,
    };

    let expiry_date = expiry.as_deref().map(parse_date).transpose()?;

    let now = Utc::now();
    let record = manual_entry(
        ManualEntry {
            barcode,
            name,
            brand: brand.unwrap_or_default(),
            category,
            expiry_date,
            quantity,
            location: location.unwrap_or_default(),
        },
        now,
    );

    match output_format {
        "json" => output::json::print(&record)?,
        _ => output::table::print_record(&record, now),
    }

    Ok(())
}
