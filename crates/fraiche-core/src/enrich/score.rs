use crate::catalog::schema::CatalogProduct;

pub const MIN_SAFETY_SCORE: u8 = 1;
pub const MAX_SAFETY_SCORE: u8 = 5;

/// NOVA processing tiers run 1..=4; tier 4 is ultra-processed.
const NOVA_ULTRA_PROCESSED: u8 = 4;

/// Outcome of the risk evaluation for one product.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SafetyAssessment {
    /// Within [1, 5]; 5 is best.
    pub score: u8,
    /// Qualitative flags in check order; empty when nothing fired.
    pub risk_factors: Vec<String>,
}

/// Compute the safety score and risk factors from catalog signals.
///
/// The score starts at 5 and each deduction below subtracts one point;
/// deductions are independent and cumulative. The result is clamped to
/// [1, 5] so future rule additions cannot push it out of range.
///
/// Curated local-table products skip this entirely; their scores and flags
/// are pre-vetted reference data.
pub fn assess(raw: &CatalogProduct, allergens: &[String]) -> SafetyAssessment {
    let mut score: i32 = MAX_SAFETY_SCORE as i32;

    if raw.additives_tags.len() > 5 {
        score -= 1;
    }
    if matches!(raw.nova_group, Some(tier) if tier > 3) {
        score -= 1;
    }
    if allergens.len() > 3 {
        score -= 1;
    }

    let score = score.clamp(MIN_SAFETY_SCORE as i32, MAX_SAFETY_SCORE as i32) as u8;

    let mut risk_factors = Vec::new();
    if raw.nova_group == Some(NOVA_ULTRA_PROCESSED) {
        risk_factors.push("Aliment ultra-transformé".to_string());
    }
    if raw.additives_tags.len() > 10 {
        risk_factors.push("Nombreux additifs".to_string());
    }
    if raw.nutrient_levels.salt.as_deref() == Some("high") {
        risk_factors.push("Taux de sel élevé".to_string());
    }
    if raw.nutrient_levels.sugars.as_deref() == Some("high") {
        risk_factors.push("Taux de sucre élevé".to_string());
    }
    if raw.nutrient_levels.fat.as_deref() == Some("high") {
        risk_factors.push("Taux de matières grasses élevé".to_string());
    }

    SafetyAssessment {
        score,
        risk_factors,
    }
}
