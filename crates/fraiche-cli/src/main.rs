mod commands;
mod output;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "fraiche",
    version,
    about = "Food product lookup and freshness classification tool"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Look up a product by barcode and print the enriched record
    Lookup {
        /// Product barcode (EAN-13 or similar)
        barcode: String,

        /// Output format: table (default) or json
        #[arg(short, long, default_value = "table")]
        output: String,
    },
    /// Search the product catalog by name or brand
    Search {
        /// Free-text query
        query: String,

        /// Result page (catalog ranking, 20 results per page)
        #[arg(short, long, default_value_t = 1)]
        page: u32,

        /// Output format: table (default) or json
        #[arg(short, long, default_value = "table")]
        output: String,
    },
    /// Build a product record by manual entry (fallback when lookup misses)
    Manual {
        /// Product barcode
        barcode: String,

        /// Product name
        #[arg(long)]
        name: String,

        /// Brand name
        #[arg(long)]
        brand: Option<String>,

        /// Canonical category (see `fraiche tables categories`)
        #[arg(long)]
        category: Option<String>,

        /// Expiry date (YYYY-MM-DD); estimated from category when omitted
        #[arg(long)]
        expiry: Option<String>,

        /// Quantity on hand
        #[arg(long, default_value_t = 1)]
        quantity: u32,

        /// Storage location
        #[arg(long)]
        location: Option<String>,

        /// Output format: table (default) or json
        #[arg(short, long, default_value = "table")]
        output: String,
    },
    /// Classify freshness for an expiry date
    Check {
        /// Expiry date (YYYY-MM-DD)
        expiry: String,
    },
    /// Inspect the built-in lookup tables
    Tables {
        #[command(subcommand)]
        action: TablesAction,
    },
}

#[derive(Subcommand)]
enum TablesAction {
    /// Canonical categories and their default shelf lives
    Categories,
    /// Allergen tag to label mapping
    Allergens,
    /// Curated local product table
    Products,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Lookup { barcode, output } => commands::lookup::run(&barcode, &output).await,
        Commands::Search {
            query,
            page,
            output,
        } => commands::search::run(&query, page, &output).await,
        Commands::Manual {
            barcode,
            name,
            brand,
            category,
            expiry,
            quantity,
            location,
            output,
        } => commands::manual::run(
            barcode, name, brand, category, expiry, quantity, location, &output,
        ),
        Commands::Check { expiry } => commands::check::run(&expiry),
        Commands::Tables { action } => match action {
            TablesAction::Categories => commands::tables::categories(),
            TablesAction::Allergens => commands::tables::allergens(),
            TablesAction::Products => commands::tables::products(),
        },
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
