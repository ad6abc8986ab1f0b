use reqwest::StatusCode;
use serde::Serialize;
use thiserror::Error;
use tracing::{debug, warn};

use super::store::{BikeCatalog, CatalogError};

/// Static JSON file the published catalog is served from
pub const DEFAULT_CATALOG_URL: &str =
    "https://raw.githubusercontent.com/gtrujillovdev-cyber/Biked/main/Biked/Data/bikes.json";

#[derive(Error, Debug)]
pub enum FetchError {
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Unexpected HTTP status {0}")]
    Status(StatusCode),

    #[error("Invalid catalog payload: {0}")]
    Payload(#[from] CatalogError),
}

/// Where a catalog came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CatalogOrigin {
    Remote,
    Fallback,
    File,
}

impl std::fmt::Display for CatalogOrigin {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Remote => write!(f, "remote"),
            Self::Fallback => write!(f, "embedded fallback"),
            Self::File => write!(f, "file"),
        }
    }
}

/// A catalog together with its origin
#[derive(Debug, Clone)]
pub struct LoadedCatalog {
    pub catalog: BikeCatalog,
    pub origin: CatalogOrigin,
}

impl LoadedCatalog {
    /// The embedded fallback catalog
    pub fn fallback() -> Result<Self, CatalogError> {
        Ok(Self {
            catalog: BikeCatalog::load_embedded()?,
            origin: CatalogOrigin::Fallback,
        })
    }
}

/// Fetches the published catalog over HTTP
pub struct CatalogClient {
    client: reqwest::Client,
    url: String,
}

impl CatalogClient {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            url: url.into(),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Single GET of the catalog URL.
    ///
    /// # Errors
    ///
    /// Fails on transport errors, any status other than 200, or a body that is
    /// not a valid bike array.
    pub async fn fetch(&self) -> Result<BikeCatalog, FetchError> {
        debug!("Fetching catalog from {}", self.url);
        let response = self.client.get(&self.url).send().await?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(FetchError::Status(status));
        }

        let body = response.text().await?;
        let catalog = BikeCatalog::from_json(&body)?;
        debug!("Fetched {} bikes", catalog.len());
        Ok(catalog)
    }

    /// Fetch the catalog, substituting the embedded fallback on any failure.
    ///
    /// # Errors
    ///
    /// Only fails if the embedded catalog itself cannot be parsed.
    pub async fn fetch_or_fallback(&self) -> Result<LoadedCatalog, CatalogError> {
        match self.fetch().await {
            Ok(catalog) => Ok(LoadedCatalog {
                catalog,
                origin: CatalogOrigin::Remote,
            }),
            Err(e) => {
                warn!(
                    "Failed to fetch catalog from {}: {e}. Falling back to embedded data.",
                    self.url
                );
                LoadedCatalog::fallback()
            }
        }
    }
}

impl Default for CatalogClient {
    fn default() -> Self {
        Self::new(DEFAULT_CATALOG_URL)
    }
}
