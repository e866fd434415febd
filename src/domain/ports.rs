use crate::domain::model::FilmCatalog;
use crate::utils::error::Result;
use async_trait::async_trait;

pub trait ConfigProvider: Send + Sync {
    fn api_endpoint(&self) -> &str;
    fn api_token(&self) -> &str;
}

#[async_trait]
pub trait FilmSource: Send + Sync {
    async fn fetch_catalog(&self) -> Result<FilmCatalog>;
}
