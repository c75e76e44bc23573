use async_trait::async_trait;
use cf_api::{CfClient, Method};

/// Platform-side handle for one application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApplicationDescriptor {
    pub guid: String,
    pub name: String,
}

/// Authenticated connection to the platform, supplied by the host.
///
/// The stats fetcher only ever reads through it.
#[async_trait]
pub trait PlatformConnection: Send + Sync {
    /// Resolve a human-readable app name to its descriptor.
    async fn lookup_application(&self, name: &str) -> cf_api::Result<ApplicationDescriptor>;

    /// Issue a request against `path` and return the body in chunks.
    async fn raw_request(&self, method: Method, path: &str) -> cf_api::Result<Vec<String>>;
}

#[async_trait]
impl PlatformConnection for CfClient {
    async fn lookup_application(&self, name: &str) -> cf_api::Result<ApplicationDescriptor> {
        let app = self.find_app_by_name(name).await?;
        Ok(ApplicationDescriptor {
            guid: app.metadata.guid,
            name: app.entity.name,
        })
    }

    async fn raw_request(&self, method: Method, path: &str) -> cf_api::Result<Vec<String>> {
        CfClient::raw_request(self, method, path).await
    }
}
