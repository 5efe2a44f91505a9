use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Canonical product categories. Source catalogs use free-form tags; anything
/// that does not map onto one of these buckets lands in `Grocery`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    #[serde(rename = "Produits laitiers")]
    Dairy,
    #[serde(rename = "Viande")]
    Meat,
    #[serde(rename = "Poisson")]
    Fish,
    #[serde(rename = "Fruits et légumes")]
    Produce,
    #[serde(rename = "Boulangerie")]
    Bakery,
    #[serde(rename = "Conserves")]
    Canned,
    #[serde(rename = "Surgelés")]
    Frozen,
    #[serde(rename = "Petit-déjeuner")]
    Breakfast,
    #[serde(rename = "Boissons")]
    Beverages,
    #[default]
    #[serde(rename = "Épicerie")]
    Grocery,
}

impl Category {
    pub const ALL: [Category; 10] = [
        Category::Dairy,
        Category::Meat,
        Category::Fish,
        Category::Produce,
        Category::Bakery,
        Category::Canned,
        Category::Frozen,
        Category::Breakfast,
        Category::Beverages,
        Category::Grocery,
    ];

    /// Display label, as stored and shown to users.
    pub fn label(&self) -> &'static str {
        match self {
            Category::Dairy => "Produits laitiers",
            Category::Meat => "Viande",
            Category::Fish => "Poisson",
            Category::Produce => "Fruits et légumes",
            Category::Bakery => "Boulangerie",
            Category::Canned => "Conserves",
            Category::Frozen => "Surgelés",
            Category::Breakfast => "Petit-déjeuner",
            Category::Beverages => "Boissons",
            Category::Grocery => "Épicerie",
        }
    }

    /// Match a canonical label, case-insensitively. Returns `None` for
    /// anything that is not one of the ten labels; use
    /// [`crate::enrich::normalize::canonical_category`] for free-form tags.
    pub fn from_label(s: &str) -> Option<Category> {
        let lower = s.trim().to_lowercase();
        Category::ALL
            .into_iter()
            .find(|c| c.label().to_lowercase() == lower)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Letter grade used for both Nutri-Score and Eco-Score. Missing or
/// malformed source values default to `C`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Grade {
    A,
    B,
    #[default]
    C,
    D,
    E,
}

impl Grade {
    /// Parse a grade from whatever the source sent ("b", "B", "b-plus"...).
    /// Only the first character counts; anything unrecognized is `C`.
    pub fn parse_loose(raw: Option<&str>) -> Grade {
        match raw.and_then(|s| s.trim().chars().next()) {
            Some(c) => match c.to_ascii_uppercase() {
                'A' => Grade::A,
                'B' => Grade::B,
                'C' => Grade::C,
                'D' => Grade::D,
                'E' => Grade::E,
                _ => Grade::C,
            },
            None => Grade::C,
        }
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let letter = match self {
            Grade::A => "A",
            Grade::B => "B",
            Grade::C => "C",
            Grade::D => "D",
            Grade::E => "E",
        };
        write!(f, "{letter}")
    }
}

/// Tri-state freshness status. This is a pure function of
/// `(expiry_date, now)` and must be recomputed on every read; it is never a
/// persisted fact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FreshnessStatus {
    Fresh,
    Warning,
    Expired,
}

impl fmt::Display for FreshnessStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FreshnessStatus::Fresh => write!(f, "fresh"),
            FreshnessStatus::Warning => write!(f, "warning"),
            FreshnessStatus::Expired => write!(f, "expired"),
        }
    }
}

/// Nutrient amounts per 100 g. Every field defaults to zero when the source
/// omits it; there is no null state.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NutritionFacts {
    #[serde(default)]
    pub calories: Decimal,
    #[serde(default)]
    pub protein: Decimal,
    #[serde(default)]
    pub carbs: Decimal,
    #[serde(default)]
    pub fat: Decimal,
    #[serde(default)]
    pub fiber: Decimal,
    #[serde(default)]
    pub sugar: Decimal,
    #[serde(default)]
    pub salt: Decimal,
}

/// The canonical normalized product entity, produced once per successful
/// barcode resolution or manual entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductRecord {
    pub barcode: String,
    pub name: String,
    pub brand: String,
    pub category: Category,
    /// Canonical allergen labels only, deduplicated, source order kept.
    pub allergens: Vec<String>,
    /// Source listing order preserved for display.
    pub ingredients: Vec<String>,
    pub nutrition: NutritionFacts,
    pub nutrition_grade: Grade,
    pub eco_score: Grade,
    /// Always within [1, 5].
    pub safety_score: u8,
    pub risk_factors: Vec<String>,
    pub expiry_date: DateTime<Utc>,
    pub quantity: u32,
    pub location: String,
    pub status: FreshnessStatus,
}

impl ProductRecord {
    /// Recompute `status` from the current time. Callers must do this on
    /// every read; the stored value is only as fresh as the last `now`.
    pub fn refresh_status(&mut self, now: DateTime<Utc>) {
        self.status = crate::enrich::status::classify(self.expiry_date, now);
    }

    /// Signed day count until expiry (ceiling), negative once expired.
    pub fn days_until_expiry(&self, now: DateTime<Utc>) -> i64 {
        crate::enrich::status::days_until(self.expiry_date, now)
    }
}
