use chrono::{DateTime, Utc};
use fraiche_core::ProductRecord;

pub fn print_record(record: &ProductRecord, now: DateTime<Utc>) {
    println!("=== {} ===\n", record.name);

    println!("  Barcode:    {}", record.barcode);
    if !record.brand.is_empty() {
        println!("  Brand:      {}", record.brand);
    }
    println!("  Category:   {}", record.category);
    println!(
        "  Grades:     Nutri-Score {} / Eco-Score {}",
        record.nutrition_grade, record.eco_score
    );
    println!("  Safety:     {}/5", record.safety_score);

    let days = record.days_until_expiry(now);
    let expiry = record.expiry_date.format("%Y-%m-%d");
    if days < 0 {
        println!(
            "  Status:     {} (expired {} day(s) ago, {expiry})",
            record.status, -days
        );
    } else {
        println!(
            "  Status:     {} ({days} day(s) remaining, {expiry})",
            record.status
        );
    }

    if !record.allergens.is_empty() {
        println!("  Allergens:  {}", record.allergens.join(", "));
    }
    if !record.ingredients.is_empty() {
        println!("  Ingredients: {}", record.ingredients.join(", "));
    }
    if !record.risk_factors.is_empty() {
        println!("\n  Risk factors:");
        for risk in &record.risk_factors {
            println!("    - {risk}");
        }
    }
    println!();
}

pub fn print_records(records: &[ProductRecord], now: DateTime<Utc>) {
    let max_name = records
        .iter()
        .map(|r| r.name.chars().count())
        .max()
        .unwrap_or(10)
        .min(40);

    for record in records {
        let name: String = record.name.chars().take(40).collect();
        println!(
            "  {:<13}  {:<width$}  {:<18}  {}  {}/5  {}",
            record.barcode,
            name,
            record.category,
            record.nutrition_grade,
            record.safety_score,
            record.status,
            width = max_name
        );
    }
    println!("\n  {} result(s). Status computed at {}.", records.len(), now.format("%Y-%m-%d %H:%M"));
}
