pub mod catalog;
pub mod enrich;
pub mod error;
pub mod model;

pub use catalog::{OpenFoodFactsClient, ProductSource, Resolver};
pub use enrich::ManualEntry;
pub use error::FraicheError;
pub use model::{Category, FreshnessStatus, Grade, NutritionFacts, ProductRecord};
