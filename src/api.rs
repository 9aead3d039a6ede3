use std::fmt::Display;

use serde::{Deserialize, Serialize};

/// Production catalog host. Tests point the client at a local mock instead.
pub const DEFAULT_BASE_URL: &str = "https://fakestoreapi.com";

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, Default)]
pub struct Product {
    pub id: u32,
    pub title: String,
    pub price: f32,
    pub description: String,
    pub category: String,
    pub image: String,
    pub rating: Rating,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, Default)]
pub struct Rating {
    pub rate: f32,
    pub count: u32,
}

impl Display for Rating {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({} reviews)", self.rate, self.count)
    }
}

/// Why a catalog call produced no product.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("product {0} does not exist")]
    NotFound(u32),
    #[error("network error: {0}")]
    Network(#[source] reqwest::Error),
    #[error("malformed catalog response: {0}")]
    Decode(#[source] reqwest::Error),
}

/// Cheap-to-clone handle over one shared HTTP client, configured against a
/// fixed base URL. Constructed once at the composition root and handed to
/// the screens through context.
#[derive(Clone)]
pub struct CatalogClient {
    http: reqwest::Client,
    base_url: String,
}

impl CatalogClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    /// Fetch the whole catalog.
    pub async fn products(&self) -> Result<Vec<Product>, CatalogError> {
        let url = format!("{}/products", self.base_url);
        let response = self
            .http
            .get(&url)
            .send()
            .await
            .and_then(|res| res.error_for_status())
            .map_err(CatalogError::Network)?;
        response.json().await.map_err(CatalogError::Decode)
    }

    /// Fetch a single product by its catalog id. A 404 from the remote
    /// means the id is not in the catalog.
    pub async fn product(&self, id: u32) -> Result<Product, CatalogError> {
        let url = format!("{}/products/{id}", self.base_url);
        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(CatalogError::Network)?;
        if response.status() == reqwest::StatusCode::NOT_FOUND {
            return Err(CatalogError::NotFound(id));
        }
        let response = response.error_for_status().map_err(CatalogError::Network)?;
        response.json().await.map_err(CatalogError::Decode)
    }
}
