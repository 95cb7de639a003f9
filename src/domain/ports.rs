use crate::core::contact::{ContactSubmission, RelayResponse};
use crate::domain::model::Portfolio;
use crate::utils::error::Result;
use async_trait::async_trait;

pub trait Storage: Send + Sync {
    fn read_file(&self, path: &str) -> impl std::future::Future<Output = Result<Vec<u8>>> + Send;
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn portfolio(&self) -> &Portfolio;
    fn output_path(&self) -> &str;
    fn assets_dir(&self) -> &str;
    fn form_endpoint(&self) -> &str;
}

/// Delivers a contact submission to the third-party form relay.
#[async_trait]
pub trait FormRelay: Send + Sync {
    fn endpoint(&self) -> &str;
    async fn submit(&self, submission: &ContactSubmission) -> Result<RelayResponse>;
}
