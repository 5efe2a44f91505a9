use crate::enrich::{expiry, status};
use crate::error::FraicheError;
use crate::model::{Category, Grade, NutritionFacts, ProductRecord};
use chrono::{DateTime, Utc};
use serde::Deserialize;
use std::collections::HashMap;

const LOCAL_PRODUCTS_JSON: &str = include_str!("../../../../data/local-products.json");

/// A curated product from the embedded reference table.
///
/// Safety scores and risk factors here are pre-vetted and used verbatim;
/// the scorer never runs on local-table hits.
#[derive(Debug, Clone, Deserialize)]
pub struct LocalProduct {
    pub barcode: String,
    pub name: String,
    pub brand: String,
    pub category: Category,
    #[serde(default)]
    pub allergens: Vec<String>,
    #[serde(default)]
    pub ingredients: Vec<String>,
    #[serde(default)]
    pub nutrition: NutritionFacts,
    #[serde(default)]
    pub nutrition_grade: Grade,
    #[serde(default)]
    pub eco_score: Grade,
    pub safety_score: u8,
    #[serde(default)]
    pub risk_factors: Vec<String>,
}

impl LocalProduct {
    /// Expand the curated entry into a full record: expiry estimated from
    /// the category shelf life, status classified against `now`.
    pub fn to_record(&self, now: DateTime<Utc>) -> ProductRecord {
        let expiry_date = expiry::estimate(Some(self.category), now);
        ProductRecord {
            barcode: self.barcode.clone(),
            name: self.name.clone(),
            brand: self.brand.clone(),
            category: self.category,
            allergens: self.allergens.clone(),
            ingredients: self.ingredients.clone(),
            nutrition: self.nutrition.clone(),
            nutrition_grade: self.nutrition_grade,
            eco_score: self.eco_score,
            safety_score: self.safety_score,
            risk_factors: self.risk_factors.clone(),
            expiry_date,
            quantity: 1,
            location: String::new(),
            status: status::classify(expiry_date, now),
        }
    }
}

/// Immutable curated table, keyed by exact barcode.
#[derive(Debug, Clone)]
pub struct LocalTable {
    products: HashMap<String, LocalProduct>,
}

impl LocalTable {
    /// Parse and validate the embedded table. Failing here means the shipped
    /// data file is broken, which should abort startup rather than silently
    /// degrade every lookup.
    pub fn load() -> Result<LocalTable, FraicheError> {
        let entries: Vec<LocalProduct> = serde_json::from_str(LOCAL_PRODUCTS_JSON)
            .map_err(|e| FraicheError::LocalTable(e.to_string()))?;

        let mut products = HashMap::with_capacity(entries.len());
        for entry in entries {
            if entry.barcode.trim().is_empty() {
                return Err(FraicheError::LocalTable(format!(
                    "product '{}' has an empty barcode",
                    entry.name
                )));
            }
            if !(1..=5).contains(&entry.safety_score) {
                return Err(FraicheError::LocalTable(format!(
                    "product '{}' has safety score {} outside [1, 5]",
                    entry.name, entry.safety_score
                )));
            }
            let barcode = entry.barcode.clone();
            if products.insert(barcode.clone(), entry).is_some() {
                return Err(FraicheError::LocalTable(format!(
                    "duplicate barcode '{barcode}'"
                )));
            }
        }

        Ok(LocalTable { products })
    }

    /// Constant-time exact-match lookup.
    pub fn get(&self, barcode: &str) -> Option<&LocalProduct> {
        self.products.get(barcode)
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// All curated products, sorted by barcode for stable listing.
    pub fn iter_sorted(&self) -> Vec<&LocalProduct> {
        let mut all: Vec<_> = self.products.values().collect();
        all.sort_by(|a, b| a.barcode.cmp(&b.barcode));
        all
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::FreshnessStatus;
    use chrono::{Duration, TimeZone};

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_embedded_table_loads() {
        let table = LocalTable::load().unwrap();
        assert!(!table.is_empty());
    }

    #[test]
    fn test_known_barcode_resolves() {
        let table = LocalTable::load().unwrap();
        let yogurt = table.get("3017620422003").unwrap();
        assert_eq!(yogurt.name, "Yaourt Nature");
        assert_eq!(yogurt.category, Category::Dairy);
        assert_eq!(yogurt.safety_score, 5);
    }

    #[test]
    fn test_unknown_barcode_misses() {
        let table = LocalTable::load().unwrap();
        assert!(table.get("0000000000000").is_none());
    }

    #[test]
    fn test_curated_values_survive_expansion() {
        let table = LocalTable::load().unwrap();
        let cereal = table.get("8712566441174").unwrap().to_record(now());
        // Curated score/risks taken verbatim, not recomputed
        assert_eq!(cereal.safety_score, 2);
        assert_eq!(cereal.risk_factors.len(), 3);
        assert_eq!(cereal.nutrition_grade, Grade::D);
    }

    #[test]
    fn test_expansion_estimates_expiry_from_category() {
        let table = LocalTable::load().unwrap();
        let milk = table.get("3033710074617").unwrap().to_record(now());
        assert_eq!(milk.expiry_date, now() + Duration::days(7));
        assert_eq!(milk.status, FreshnessStatus::Warning);
    }
}
