use crate::model::Category;
use std::collections::HashMap;
use std::sync::LazyLock;

/// Map raw source allergen tags to canonical French labels.
///
/// Steps per tag:
/// 1. Strip a namespace prefix ("en:milk" -> "milk")
/// 2. Exact, case-sensitive lookup in the allergen table
/// 3. Tags with no mapping are dropped silently
///
/// The result is deduplicated while preserving first-seen order.
pub fn canonical_allergens<S: AsRef<str>>(tags: &[S]) -> Vec<String> {
    let mut labels = Vec::new();
    for tag in tags {
        let key = strip_namespace(tag.as_ref());
        if let Some(label) = ALLERGEN_LABELS.get(key) {
            if !labels.iter().any(|l| l == label) {
                labels.push((*label).to_string());
            }
        }
    }
    labels
}

/// Remove a leading vocabulary namespace such as "en:" or "fr:".
pub fn strip_namespace(tag: &str) -> &str {
    match tag.find(':') {
        Some(idx) => &tag[idx + 1..],
        None => tag,
    }
}

/// Map a raw category tag onto a canonical category.
///
/// Keyword rules are evaluated in a fixed priority order with
/// case-insensitive substring matching; the first hit wins and anything
/// unmatched falls back to the general grocery bucket.
pub fn canonical_category(raw: &str) -> Category {
    let lower = raw.to_lowercase();
    for (keyword, category) in CATEGORY_RULES {
        if lower.contains(keyword) {
            return *category;
        }
    }
    Category::Grocery
}

/// Split a comma-delimited ingredient listing into an ordered sequence.
/// Absent or blank input yields an empty list, never an error.
pub fn split_ingredients(raw: Option<&str>) -> Vec<String> {
    match raw {
        Some(text) if !text.trim().is_empty() => text
            .split(',')
            .map(|part| part.trim().to_string())
            .filter(|part| !part.is_empty())
            .collect(),
        _ => Vec::new(),
    }
}

/// The fixed allergen tag table, for inspection (e.g. `fraiche tables`).
/// Entries are sorted by tag.
pub fn allergen_entries() -> Vec<(&'static str, &'static str)> {
    let mut entries: Vec<_> = ALLERGEN_LABELS.iter().map(|(k, v)| (*k, *v)).collect();
    entries.sort();
    entries
}

// The 14 EU-regulated allergens, keyed by the catalog's English tag names.
static ALLERGEN_LABELS: LazyLock<HashMap<&'static str, &'static str>> = LazyLock::new(|| {
    let mut m = HashMap::new();
    m.insert("milk", "Lait");
    m.insert("eggs", "Œufs");
    m.insert("fish", "Poisson");
    m.insert("crustaceans", "Crustacés");
    m.insert("tree-nuts", "Fruits à coque");
    m.insert("peanuts", "Arachides");
    m.insert("soybeans", "Soja");
    m.insert("gluten", "Gluten");
    m.insert("celery", "Céleri");
    m.insert("mustard", "Moutarde");
    m.insert("sesame-seeds", "Graines de sésame");
    m.insert("sulphur-dioxide-and-sulphites", "Sulfites");
    m.insert("lupin", "Lupin");
    m.insert("molluscs", "Mollusques");
    m
});

/// Keyword rules in priority order; first match wins.
pub const CATEGORY_RULES: &[(&str, Category)] = &[
    ("dairy", Category::Dairy),
    ("meat", Category::Meat),
    ("fish", Category::Fish),
    ("fruits", Category::Produce),
    ("vegetables", Category::Produce),
    ("bread", Category::Bakery),
    ("beverages", Category::Beverages),
    ("breakfast", Category::Breakfast),
    ("cereals", Category::Breakfast),
    ("canned", Category::Canned),
    ("frozen", Category::Frozen),
];
