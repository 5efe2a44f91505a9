use crate::model::Category;
use chrono::{DateTime, Duration, Utc};

/// Shelf life applied when no category is known (bare manual entry).
pub const DEFAULT_SHELF_LIFE_DAYS: i64 = 30;

/// Default shelf life in days for a canonical category.
pub fn shelf_life_days(category: Category) -> i64 {
    match category {
        Category::Dairy => 7,
        Category::Meat => 3,
        Category::Fish => 2,
        Category::Produce => 5,
        Category::Bakery => 3,
        Category::Canned => 365,
        Category::Frozen => 90,
        Category::Breakfast => 180,
        Category::Beverages => 30,
        Category::Grocery => 365,
    }
}

/// Estimate an expiry date from the category's shelf life.
///
/// Only used when the caller supplies no explicit expiry date; manual entry
/// always overrides estimation. Timestamp precision is kept as-is, no day
/// truncation.
pub fn estimate(category: Option<Category>, now: DateTime<Utc>) -> DateTime<Utc> {
    let days = category
        .map(shelf_life_days)
        .unwrap_or(DEFAULT_SHELF_LIFE_DAYS);
    now + Duration::days(days)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_frozen_is_ninety_days() {
        let expiry = estimate(Some(Category::Frozen), now());
        assert_eq!(expiry, now() + Duration::days(90));
    }

    #[test]
    fn test_dairy_is_seven_days() {
        let expiry = estimate(Some(Category::Dairy), now());
        assert_eq!(expiry, now() + Duration::days(7));
    }

    #[test]
    fn test_no_category_defaults_to_thirty_days() {
        let expiry = estimate(None, now());
        assert_eq!(expiry, now() + Duration::days(DEFAULT_SHELF_LIFE_DAYS));
    }

    #[test]
    fn test_every_category_has_a_shelf_life() {
        for category in Category::ALL {
            assert!(shelf_life_days(category) > 0);
        }
    }
}
