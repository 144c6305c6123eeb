use async_trait::async_trait;

use crate::error::OpenError;

#[async_trait]
pub trait UrlOpener: Send + Sync {
    fn name(&self) -> &str;

    async fn open(&self, url: &str) -> Result<(), OpenError>;
}
