pub mod expiry;
pub mod normalize;
pub mod score;
pub mod status;

use crate::catalog::schema::CatalogProduct;
use crate::model::{Category, Grade, ProductRecord};
use chrono::{DateTime, Utc};

/// Build a normalized product record from a raw catalog document.
///
/// One pass: normalize vocabularies, assess risk, estimate expiry from the
/// category shelf life, then classify freshness against `now`. Every field
/// extraction is total; malformed or missing source data resolves to the
/// documented default, never an error.
pub fn enrich(raw: &CatalogProduct, barcode: &str, now: DateTime<Utc>) -> ProductRecord {
    let allergens = normalize::canonical_allergens(&raw.allergens_tags);
    let category = raw
        .categories_tags
        .first()
        .map(|tag| normalize::canonical_category(normalize::strip_namespace(tag)))
        .unwrap_or_default();
    let assessment = score::assess(raw, &allergens);
    let expiry_date = expiry::estimate(Some(category), now);

    ProductRecord {
        barcode: barcode.to_string(),
        name: raw
            .product_name
            .clone()
            .filter(|n| !n.trim().is_empty())
            .unwrap_or_else(|| "Produit inconnu".to_string()),
        brand: raw.brands.clone().unwrap_or_default(),
        category,
        allergens,
        ingredients: normalize::split_ingredients(raw.ingredients_text.as_deref()),
        nutrition: raw.nutriments.to_facts(),
        nutrition_grade: Grade::parse_loose(raw.nutrition_grades.as_deref()),
        eco_score: Grade::parse_loose(raw.ecoscore_grade.as_deref()),
        safety_score: assessment.score,
        risk_factors: assessment.risk_factors,
        expiry_date,
        quantity: 1,
        location: String::new(),
        status: status::classify(expiry_date, now),
    }
}

/// Caller-provided fields for the manual-entry fallback path.
#[derive(Debug, Clone, Default)]
pub struct ManualEntry {
    pub barcode: String,
    pub name: String,
    pub brand: String,
    pub category: Option<Category>,
    /// Overrides shelf-life estimation when set.
    pub expiry_date: Option<DateTime<Utc>>,
    pub quantity: u32,
    pub location: String,
}

/// Build a record from manual entry, the fallback when a barcode resolves
/// to nothing. No catalog signals are available, so the safety score sits at
/// the neutral midpoint (3) and both grades default to C.
pub fn manual_entry(entry: ManualEntry, now: DateTime<Utc>) -> ProductRecord {
    let expiry_date = entry
        .expiry_date
        .unwrap_or_else(|| expiry::estimate(entry.category, now));

    ProductRecord {
        barcode: entry.barcode,
        name: entry.name,
        brand: entry.brand,
        category: entry.category.unwrap_or_default(),
        allergens: Vec::new(),
        ingredients: Vec::new(),
        nutrition: Default::default(),
        nutrition_grade: Grade::C,
        eco_score: Grade::C,
        safety_score: 3,
        risk_factors: Vec::new(),
        expiry_date,
        quantity: entry.quantity.max(1),
        location: entry.location,
        status: status::classify(expiry_date, now),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::FreshnessStatus;
    use chrono::{Duration, TimeZone};
    use rust_decimal_macros::dec;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_enrich_frozen_product() {
        let raw = CatalogProduct {
            product_name: Some("Petits pois".into()),
            brands: Some("Picard".into()),
            categories_tags: vec!["en:frozen-foods".into()],
            ..Default::default()
        };
        let record = enrich(&raw, "123456", now());

        assert_eq!(record.category, Category::Frozen);
        assert_eq!(record.expiry_date, now() + Duration::days(90));
        assert_eq!(record.status, FreshnessStatus::Fresh);
        assert_eq!(record.quantity, 1);
        assert_eq!(record.location, "");
    }

    #[test]
    fn test_enrich_defaults_for_sparse_document() {
        let record = enrich(&CatalogProduct::default(), "000", now());

        assert_eq!(record.name, "Produit inconnu");
        assert_eq!(record.brand, "");
        assert_eq!(record.category, Category::Grocery);
        assert_eq!(record.nutrition_grade, Grade::C);
        assert_eq!(record.eco_score, Grade::C);
        assert_eq!(record.safety_score, 5);
        assert!(record.allergens.is_empty());
        assert!(record.ingredients.is_empty());
        assert_eq!(record.nutrition.calories, dec!(0));
    }

    #[test]
    fn test_enrich_is_deterministic_for_fixed_now() {
        let raw = CatalogProduct {
            product_name: Some("Yaourt".into()),
            categories_tags: vec!["en:dairy".into()],
            allergens_tags: vec!["en:milk".into()],
            ..Default::default()
        };
        let a = enrich(&raw, "42", now());
        let b = enrich(&raw, "42", now());
        assert_eq!(format!("{a:?}"), format!("{b:?}"));
    }

    #[test]
    fn test_manual_entry_defaults() {
        let record = manual_entry(
            ManualEntry {
                barcode: "999".into(),
                name: "Produit maison".into(),
                ..Default::default()
            },
            now(),
        );

        assert_eq!(record.safety_score, 3);
        assert_eq!(record.nutrition_grade, Grade::C);
        assert_eq!(record.eco_score, Grade::C);
        assert!(record.risk_factors.is_empty());
        // No category: 30-day default shelf life
        assert_eq!(record.expiry_date, now() + Duration::days(30));
        assert_eq!(record.quantity, 1);
    }

    #[test]
    fn test_manual_entry_expiry_overrides_estimation() {
        let expiry = now() + Duration::days(2);
        let record = manual_entry(
            ManualEntry {
                barcode: "999".into(),
                name: "Filet de saumon".into(),
                category: Some(Category::Fish),
                expiry_date: Some(expiry),
                quantity: 2,
                ..Default::default()
            },
            now(),
        );

        assert_eq!(record.expiry_date, expiry);
        assert_eq!(record.status, FreshnessStatus::Warning);
        assert_eq!(record.quantity, 2);
    }
}
