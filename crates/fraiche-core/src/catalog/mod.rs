pub mod local;
pub mod remote;
pub mod schema;

pub use local::{LocalProduct, LocalTable};
pub use remote::OpenFoodFactsClient;

use crate::enrich;
use crate::error::FraicheError;
use crate::model::ProductRecord;
use chrono::{DateTime, Utc};
use schema::CatalogProduct;

/// Seam for remote catalog backends; lets tests resolve without a network.
pub trait ProductSource {
    /// Fetch one product document by barcode; `Ok(None)` means not found.
    fn fetch(
        &self,
        barcode: &str,
    ) -> impl std::future::Future<Output = Result<Option<CatalogProduct>, FraicheError>> + Send;

    /// Free-text search, paginated with the catalog's own ranking.
    fn search(
        &self,
        query: &str,
        page: u32,
    ) -> impl std::future::Future<Output = Result<Vec<CatalogProduct>, FraicheError>> + Send;
}

/// Resolves barcodes against the curated local table first, then the remote
/// catalog. Stateless per call; independent scans may resolve concurrently.
#[derive(Debug, Clone)]
pub struct Resolver<S> {
    local: LocalTable,
    remote: S,
}

impl<S: ProductSource> Resolver<S> {
    pub fn new(remote: S) -> Result<Self, FraicheError> {
        Ok(Self {
            local: LocalTable::load()?,
            remote,
        })
    }

    /// Resolve a barcode to a normalized record.
    ///
    /// `None` covers every miss uniformly: empty barcode, absent from both
    /// sources, and remote failure (network, timeout, malformed payload).
    /// The caller's recovery path for all of them is manual entry, so the
    /// distinction is only logged, never surfaced as an error.
    pub async fn resolve(&self, barcode: &str, now: DateTime<Utc>) -> Option<ProductRecord> {
        let barcode = barcode.trim();
        if barcode.is_empty() {
            return None;
        }

        if let Some(curated) = self.local.get(barcode) {
            return Some(curated.to_record(now));
        }

        match self.remote.fetch(barcode).await {
            Ok(Some(raw)) => Some(enrich::enrich(&raw, barcode, now)),
            Ok(None) => None,
            Err(e) => {
                tracing::warn!(barcode, error = %e, "catalog lookup failed, treating as not found");
                None
            }
        }
    }

    /// Search the remote catalog and normalize each hit through the same
    /// enrichment pipeline. Failures collapse to an empty result.
    pub async fn search(&self, query: &str, page: u32, now: DateTime<Utc>) -> Vec<ProductRecord> {
        match self.remote.search(query, page).await {
            Ok(products) => products
                .iter()
                .map(|raw| {
                    let barcode = raw.code.clone().unwrap_or_default();
                    enrich::enrich(raw, &barcode, now)
                })
                .collect(),
            Err(e) => {
                tracing::warn!(query, error = %e, "catalog search failed");
                Vec::new()
            }
        }
    }

    /// The curated table, for inspection.
    pub fn local_table(&self) -> &LocalTable {
        &self.local
    }
}
