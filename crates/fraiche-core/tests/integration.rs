//! End-to-end tests for the Resolver pipeline.
//!
//! Uses a MockSource implementing ProductSource so nothing here touches the
//! network; remote behavior (found / not found / failure) is simulated.

use chrono::{DateTime, Duration, TimeZone, Utc};
use fraiche_core::catalog::schema::{CatalogProduct, NutrientLevels};
use fraiche_core::enrich::{manual_entry, ManualEntry};
use fraiche_core::error::FraicheError;
use fraiche_core::{Category, FreshnessStatus, Grade, ProductSource, Resolver};

struct MockSource {
    product: Option<CatalogProduct>,
    fail: bool,
}

impl MockSource {
    fn found(product: CatalogProduct) -> Self {
        Self {
            product: Some(product),
            fail: false,
        }
    }

    fn empty() -> Self {
        Self {
            product: None,
            fail: false,
        }
    }

    fn failing() -> Self {
        Self {
            product: None,
            fail: true,
        }
    }
}

impl ProductSource for MockSource {
    async fn fetch(&self, _barcode: &str) -> Result<Option<CatalogProduct>, FraicheError> {
        if self.fail {
            return Err(FraicheError::Unavailable("simulated network error".into()));
        }
        Ok(self.product.clone())
    }

    async fn search(&self, _query: &str, _page: u32) -> Result<Vec<CatalogProduct>, FraicheError> {
        if self.fail {
            return Err(FraicheError::Unavailable("simulated network error".into()));
        }
        Ok(self.product.clone().into_iter().collect())
    }
}

fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap()
}

// ---------------------------------------------------------------------------
// Test 1: Remote document flows through the whole enrichment pipeline
// ---------------------------------------------------------------------------
#[tokio::test]
async fn remote_product_is_enriched() {
    let raw = CatalogProduct {
        product_name: Some("Céréales croustillantes".into()),
        brands: Some("Générique".into()),
        categories_tags: vec!["en:breakfast-cereals".into()],
        allergens_tags: vec!["en:milk".into(), "en:gluten".into(), "en:unknown-tag".into()],
        additives_tags: (0..12).map(|i| format!("en:e{i}")).collect(),
        nova_group: Some(4),
        nutrient_levels: NutrientLevels {
            salt: Some("high".into()),
            ..Default::default()
        },
        nutrition_grades: Some("d".into()),
        ingredients_text: Some("Riz, Sucre, Sel".into()),
        ..Default::default()
    };

    let resolver = Resolver::new(MockSource::found(raw)).unwrap();
    let record = resolver.resolve("7300400481588", now()).await.unwrap();

    assert_eq!(record.barcode, "7300400481588");
    assert_eq!(record.category, Category::Breakfast);
    // Unknown allergen tag dropped, known ones translated
    assert_eq!(record.allergens, vec!["Lait", "Gluten"]);
    assert_eq!(record.ingredients, vec!["Riz", "Sucre", "Sel"]);
    assert_eq!(record.nutrition_grade, Grade::D);
    assert_eq!(record.eco_score, Grade::C);
    // 5 - additives - nova = 3
    assert_eq!(record.safety_score, 3);
    assert_eq!(
        record.risk_factors,
        vec![
            "Aliment ultra-transformé",
            "Nombreux additifs",
            "Taux de sel élevé"
        ]
    );
    // Breakfast shelf life: 180 days
    assert_eq!(record.expiry_date, now() + Duration::days(180));
    assert_eq!(record.status, FreshnessStatus::Fresh);
}

// ---------------------------------------------------------------------------
// Test 2: Curated local table wins and the remote source is never consulted
// ---------------------------------------------------------------------------
#[tokio::test]
async fn local_table_hit_bypasses_remote() {
    // A failing remote proves resolution never reached it
    let resolver = Resolver::new(MockSource::failing()).unwrap();
    let record = resolver.resolve("3017620422003", now()).await.unwrap();

    assert_eq!(record.name, "Yaourt Nature");
    assert_eq!(record.brand, "Danone");
    // Curated score used verbatim
    assert_eq!(record.safety_score, 5);
    assert_eq!(record.expiry_date, now() + Duration::days(7));
    assert_eq!(record.status, FreshnessStatus::Warning);
}

// ---------------------------------------------------------------------------
// Test 3: Not found and transient failure collapse to the same outcome
// ---------------------------------------------------------------------------
#[tokio::test]
async fn remote_miss_and_failure_both_resolve_to_none() {
    let resolver = Resolver::new(MockSource::empty()).unwrap();
    assert!(resolver.resolve("4000000000000", now()).await.is_none());

    let resolver = Resolver::new(MockSource::failing()).unwrap();
    assert!(resolver.resolve("4000000000000", now()).await.is_none());
}

// ---------------------------------------------------------------------------
// Test 4: The manual-entry fallback path after a failed resolution
// ---------------------------------------------------------------------------
#[tokio::test]
async fn manual_entry_fallback_after_failed_lookup() {
    let resolver = Resolver::new(MockSource::failing()).unwrap();
    let barcode = "4000000000000";
    assert!(resolver.resolve(barcode, now()).await.is_none());

    let record = manual_entry(
        ManualEntry {
            barcode: barcode.into(),
            name: "Produit inconnu".into(),
            ..Default::default()
        },
        now(),
    );
    assert_eq!(record.safety_score, 3);
    assert_eq!(record.nutrition_grade, Grade::C);
    assert_eq!(record.eco_score, Grade::C);
}

// ---------------------------------------------------------------------------
// Test 5: Empty barcode never resolves
// ---------------------------------------------------------------------------
#[tokio::test]
async fn empty_barcode_is_not_found() {
    let resolver = Resolver::new(MockSource::failing()).unwrap();
    assert!(resolver.resolve("", now()).await.is_none());
    assert!(resolver.resolve("   ", now()).await.is_none());
}

// ---------------------------------------------------------------------------
// Test 6: Search results are normalized records; failure yields empty
// ---------------------------------------------------------------------------
#[tokio::test]
async fn search_normalizes_hits() {
    let raw = CatalogProduct {
        code: Some("3560070462926".into()),
        product_name: Some("Pommes".into()),
        categories_tags: vec!["en:fruits".into()],
        ..Default::default()
    };
    let resolver = Resolver::new(MockSource::found(raw)).unwrap();

    let records = resolver.search("pommes", 1, now()).await;
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].barcode, "3560070462926");
    assert_eq!(records[0].category, Category::Produce);

    let resolver = Resolver::new(MockSource::failing()).unwrap();
    assert!(resolver.search("pommes", 1, now()).await.is_empty());
}

// ---------------------------------------------------------------------------
// Test 7: Status is a function of the read time, not of the stored record
// ---------------------------------------------------------------------------
#[tokio::test]
async fn status_recomputed_on_read() {
    let resolver = Resolver::new(MockSource::empty()).unwrap();
    let mut record = resolver.resolve("3033710074617", now()).await.unwrap();
    assert_eq!(record.status, FreshnessStatus::Warning);

    // Re-read two weeks later: same stored expiry, different status
    record.refresh_status(now() + Duration::days(14));
    assert_eq!(record.status, FreshnessStatus::Expired);

    record.refresh_status(now() - Duration::days(30));
    assert_eq!(record.status, FreshnessStatus::Fresh);
}
