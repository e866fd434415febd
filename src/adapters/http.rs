use crate::domain::model::FilmCatalog;
use crate::domain::ports::{ConfigProvider, FilmSource};
use crate::utils::error::{FilmError, Result};
use async_trait::async_trait;
use reqwest::header::AUTHORIZATION;
use reqwest::Client;

/// Fetches the catalog with one authenticated GET. No retries.
pub struct HttpFilmSource<C: ConfigProvider> {
    config: C,
    client: Client,
}

impl<C: ConfigProvider> HttpFilmSource<C> {
    pub fn new(config: C) -> Self {
        Self {
            config,
            client: Client::new(),
        }
    }
}

#[async_trait]
impl<C: ConfigProvider> FilmSource for HttpFilmSource<C> {
    async fn fetch_catalog(&self) -> Result<FilmCatalog> {
        let endpoint = self.config.api_endpoint();

        tracing::debug!("Making API request to: {}", endpoint);
        let response = self
            .client
            .get(endpoint)
            .header(AUTHORIZATION, format!("Bearer {}", self.config.api_token()))
            .send()
            .await?;

        let status = response.status();
        tracing::debug!("API response status: {}", status);

        if !status.is_success() {
            return Err(FilmError::HttpStatusError {
                status: status.as_u16(),
                endpoint: endpoint.to_string(),
            });
        }

        let body = response.bytes().await?;
        let catalog: FilmCatalog = serde_json::from_slice(&body)?;

        tracing::debug!("Decoded {} films ({} bytes)", catalog.len(), body.len());
        Ok(catalog)
    }
}
