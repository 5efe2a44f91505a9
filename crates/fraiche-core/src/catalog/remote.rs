use crate::catalog::schema::{CatalogEnvelope, CatalogProduct, SearchEnvelope};
use crate::catalog::ProductSource;
use crate::error::FraicheError;
use reqwest::Client;
use std::time::Duration;

const DEFAULT_BASE_URL: &str = "https://world.openfoodfacts.org";

/// One attempt per scan, no retries: lookups back an interactive scan
/// action, so failure must surface immediately instead of stalling on
/// backoff. The timeout bounds the wait for the same reason.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(5);

const SEARCH_PAGE_SIZE: u32 = 20;

/// Read-only client for the OpenFoodFacts product catalog.
#[derive(Debug, Clone)]
pub struct OpenFoodFactsClient {
    base_url: String,
    client: Client,
}

impl OpenFoodFactsClient {
    pub fn new() -> Result<Self, FraicheError> {
        Self::with_base_url(DEFAULT_BASE_URL)
    }

    pub fn with_base_url(base_url: impl Into<String>) -> Result<Self, FraicheError> {
        let client = Client::builder().timeout(REQUEST_TIMEOUT).build()?;
        Ok(Self {
            base_url: base_url.into(),
            client,
        })
    }
}

impl ProductSource for OpenFoodFactsClient {
    async fn fetch(&self, barcode: &str) -> Result<Option<CatalogProduct>, FraicheError> {
        let url = format!("{}/api/v0/product/{}.json", self.base_url, barcode);
        let response = self.client.get(&url).send().await?;

        if !response.status().is_success() {
            return Err(FraicheError::Unavailable(format!(
                "HTTP {} from {}",
                response.status(),
                url
            )));
        }

        let envelope: CatalogEnvelope = response.json().await?;
        Ok(envelope.into_product())
    }

    async fn search(&self, query: &str, page: u32) -> Result<Vec<CatalogProduct>, FraicheError> {
        let url = format!("{}/cgi/search.pl", self.base_url);
        let response = self
            .client
            .get(&url)
            .query(&[
                ("search_terms", query.to_string()),
                ("page", page.to_string()),
                ("page_size", SEARCH_PAGE_SIZE.to_string()),
                ("json", "true".to_string()),
            ])
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(FraicheError::Unavailable(format!(
                "HTTP {} from {}",
                response.status(),
                url
            )));
        }

        let envelope: SearchEnvelope = response.json().await?;
        Ok(envelope.products)
    }
}
