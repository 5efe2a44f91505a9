//! Wire format of the external product catalog (OpenFoodFacts-style JSON).
//!
//! The upstream data quality is inconsistent: numeric fields arrive as JSON
//! numbers or as strings, and almost everything can be absent. Deserializers
//! here are deliberately lenient; a bad field becomes `None` (and later the
//! documented default) instead of failing the whole document.

use crate::model::NutritionFacts;
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer};

/// Top-level lookup response; `status == 1` with a product means "found".
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CatalogEnvelope {
    #[serde(default)]
    pub status: u8,
    #[serde(default)]
    pub product: Option<CatalogProduct>,
}

impl CatalogEnvelope {
    pub fn into_product(self) -> Option<CatalogProduct> {
        if self.status == 1 {
            self.product
        } else {
            None
        }
    }
}

/// Free-text search response.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchEnvelope {
    #[serde(default)]
    pub products: Vec<CatalogProduct>,
}

/// A raw product document as the catalog returns it.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CatalogProduct {
    /// Barcode, present in search results.
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub product_name: Option<String>,
    #[serde(default)]
    pub brands: Option<String>,
    #[serde(default)]
    pub categories_tags: Vec<String>,
    #[serde(default)]
    pub allergens_tags: Vec<String>,
    #[serde(default)]
    pub additives_tags: Vec<String>,
    #[serde(default)]
    pub ingredients_text: Option<String>,
    #[serde(default)]
    pub nutriments: WireNutriments,
    #[serde(default)]
    pub nutrition_grades: Option<String>,
    #[serde(default)]
    pub ecoscore_grade: Option<String>,
    /// NOVA processing tier, 1..=4.
    #[serde(default, deserialize_with = "lenient_u8")]
    pub nova_group: Option<u8>,
    #[serde(default)]
    pub nutrient_levels: NutrientLevels,
}

/// Source-flagged nutrient levels ("low" / "moderate" / "high").
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NutrientLevels {
    #[serde(default)]
    pub salt: Option<String>,
    #[serde(default)]
    pub sugars: Option<String>,
    #[serde(default)]
    pub fat: Option<String>,
}

/// Per-100 g nutrient amounts with the catalog's key names.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct WireNutriments {
    #[serde(rename = "energy-kcal_100g", default, deserialize_with = "lenient_decimal")]
    pub energy_kcal_100g: Option<Decimal>,
    #[serde(default, deserialize_with = "lenient_decimal")]
    pub proteins_100g: Option<Decimal>,
    #[serde(default, deserialize_with = "lenient_decimal")]
    pub carbohydrates_100g: Option<Decimal>,
    #[serde(default, deserialize_with = "lenient_decimal")]
    pub fat_100g: Option<Decimal>,
    #[serde(default, deserialize_with = "lenient_decimal")]
    pub fiber_100g: Option<Decimal>,
    #[serde(default, deserialize_with = "lenient_decimal")]
    pub sugars_100g: Option<Decimal>,
    #[serde(default, deserialize_with = "lenient_decimal")]
    pub salt_100g: Option<Decimal>,
}

impl WireNutriments {
    /// Collapse to the canonical facts, zero for anything missing.
    pub fn to_facts(&self) -> NutritionFacts {
        NutritionFacts {
            calories: self.energy_kcal_100g.unwrap_or_default(),
            protein: self.proteins_100g.unwrap_or_default(),
            carbs: self.carbohydrates_100g.unwrap_or_default(),
            fat: self.fat_100g.unwrap_or_default(),
            fiber: self.fiber_100g.unwrap_or_default(),
            sugar: self.sugars_100g.unwrap_or_default(),
            salt: self.salt_100g.unwrap_or_default(),
        }
    }
}

/// Accept a JSON number or numeric string; anything else is `None`.
fn lenient_decimal<'de, D>(deserializer: D) -> Result<Option<Decimal>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(match value {
        serde_json::Value::Number(n) => n.as_f64().and_then(Decimal::from_f64_retain),
        serde_json::Value::String(s) => s.trim().parse::<Decimal>().ok(),
        _ => None,
    })
}

/// Accept a JSON number or numeric string; anything else is `None`.
fn lenient_u8<'de, D>(deserializer: D) -> Result<Option<u8>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(match value {
        serde_json::Value::Number(n) => n.as_u64().and_then(|v| u8::try_from(v).ok()),
        serde_json::Value::String(s) => s.trim().parse::<u8>().ok(),
        _ => None,
    })
}
