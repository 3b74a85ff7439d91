use std::time::Duration;

use crate::server::error::{external::ExternalError, Error};

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Client for the external blob store.
///
/// Objects are addressed as `{base_url}/{bucket}/{path}`; the returned URL of
/// a successful put doubles as the public URL persisted on reviews.
#[derive(Clone)]
pub struct Client {
    http: reqwest::Client,
    base_url: String,
    bucket: String,
    api_key: String,
}

impl Client {
    pub fn new(base_url: &str, bucket: &str, api_key: &str) -> Result<Self, Error> {
        let http = reqwest::Client::builder().timeout(REQUEST_TIMEOUT).build()?;

        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            bucket: bucket.to_string(),
            api_key: api_key.to_string(),
        })
    }

    pub fn public_url(&self, path: &str) -> String {
        format!("{}/{}/{}", self.base_url, self.bucket, path)
    }

    /// Store bytes under the bucket path and return the public URL
    pub async fn put(
        &self,
        path: &str,
        bytes: Vec<u8>,
        content_type: &str,
    ) -> Result<String, Error> {
        let url = self.public_url(path);

        self.http
            .put(&url)
            .bearer_auth(&self.api_key)
            .header("content-type", content_type)
            .body(bytes)
            .send()
            .await
            .map_err(|e| ExternalError::StorageUnavailable(e.to_string()))?
            .error_for_status()
            .map_err(|e| ExternalError::StorageUnavailable(e.to_string()))?;

        Ok(url)
    }

    pub async fn delete(&self, url: &str) -> Result<(), Error> {
        self.http
            .delete(url)
            .bearer_auth(&self.api_key)
            .send()
            .await
            .map_err(|e| ExternalError::StorageUnavailable(e.to_string()))?
            .error_for_status()
            .map_err(|e| ExternalError::StorageUnavailable(e.to_string()))?;

        Ok(())
    }
}
