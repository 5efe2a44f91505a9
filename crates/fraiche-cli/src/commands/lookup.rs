use crate::output;
use chrono::Utc;
use fraiche_core::error::FraicheError;
use fraiche_core::{OpenFoodFactsClient, Resolver};

pub async fn run(barcode: &str, output_format: &str) -> Result<(), FraicheError> {
    let resolver = Resolver::new(OpenFoodFactsClient::new()?)?;
    let now = Utc::now();

    match resolver.resolve(barcode, now).await {
        Some(record) => match output_format {
            "json" => output::json::print(&record)?,
            _ => output::table::print_record(&record, now),
        },
        None => {
            println!("Product {barcode} was not found in the catalog.");
            println!("Enter it manually with: fraiche manual {barcode} --name <NAME>");
        }
    }

    Ok(())
}
