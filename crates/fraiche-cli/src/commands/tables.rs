use fraiche_core::catalog::LocalTable;
use fraiche_core::enrich::{expiry, normalize};
use fraiche_core::error::FraicheError;
use fraiche_core::Category;

pub fn categories() -> Result<(), FraicheError> {
    println!("Canonical categories and default shelf lives:\n");
    for category in Category::ALL {
        println!(
            "  {:<20} {:>4} days",
            category.label(),
            expiry::shelf_life_days(category)
        );
    }
    println!();
    println!("Source category tags are matched by keyword, in priority order:");
    for (keyword, category) in normalize::CATEGORY_RULES {
        println!("  {:<12} -> {}", keyword, category.label());
    }
    println!("\nAnything unmatched falls back to Épicerie.");
    Ok(())
}

pub fn allergens() -> Result<(), FraicheError> {
    println!("Allergen tag mapping (unmapped tags are dropped):\n");
    for (tag, label) in normalize::allergen_entries() {
        println!("  {tag:<30} {label}");
    }
    Ok(())
}

pub fn products() -> Result<(), FraicheError> {
    let table = LocalTable::load()?;
    println!("Curated local products ({} entries):\n", table.len());
    for product in table.iter_sorted() {
        println!(
            "  {:<15} {:<25} {:<12} {} (score {}/5)",
            product.barcode, product.name, product.brand, product.category, product.safety_score
        );
        for risk in &product.risk_factors {
            println!("                  - {risk}");
        }
    }
    Ok(())
}
