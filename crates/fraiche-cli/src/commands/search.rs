use crate::output;
use chrono::Utc;
use fraiche_core::error::FraicheError;
use fraiche_core::{OpenFoodFactsClient, Resolver};

pub async fn run(query: &str, page: u32, output_format: &str) -> Result<(), FraicheError> {
    let resolver = Resolver::new(OpenFoodFactsClient::new()?)?;
    let now = Utc::now();

    let records = resolver.search(query, page, now).await;

    if records.is_empty() {
        println!("No products matched '{query}'.");
        return Ok(());
    }

    match output_format {
        "json" => output::json::print(&records)?,
        _ => output::table::print_records(&records, now),
    }

    Ok(())
}
