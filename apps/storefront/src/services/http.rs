//! Shared HTTP client for the storefront API.

use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;
use tracing::{debug, warn};
use uuid::Uuid;

use crate::config::ApiSettings;
use crate::error::{ServiceError, ServiceResult};

/// Correlation header attached to every outgoing request.
pub const REQUEST_ID_HEADER: &str = "X-Request-Id";

/// HTTP client bound to one API base URL.
///
/// Implements [`CatalogService`](super::CatalogService),
/// [`FileUploader`](super::FileUploader) and
/// [`UserDirectory`](super::UserDirectory).
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: Client,
    base_url: String,
}

impl ApiClient {
    /// Builds a client with the configured timeout.
    pub fn new(settings: &ApiSettings) -> ServiceResult<Self> {
        let http = Client::builder().timeout(settings.timeout()).build()?;
        Ok(ApiClient {
            http,
            base_url: settings.base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Absolute URL for an API path such as `/products`.
    pub(crate) fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    pub(crate) fn http(&self) -> &Client {
        &self.http
    }

    /// Sends `request` and decodes a JSON body.
    ///
    /// Non-2xx answers become [`ServiceError::Status`]; a body that does not
    /// match `T` becomes [`ServiceError::Decode`].
    pub(crate) async fn send_json<T: DeserializeOwned>(
        &self,
        method: &'static str,
        url: &str,
        request: RequestBuilder,
    ) -> ServiceResult<T> {
        let request_id = Uuid::new_v4();
        debug!(%request_id, method, url, "Sending request");

        let response = request
            .header(REQUEST_ID_HEADER, request_id.to_string())
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            warn!(%request_id, method, url, status = status.as_u16(), "Request rejected");
            return Err(ServiceError::Status {
                method,
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        let body = response.bytes().await?;
        debug!(%request_id, bytes = body.len(), "Response received");

        serde_json::from_slice(&body).map_err(|e| ServiceError::Decode {
            url: url.to_string(),
            reason: e.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_joining_strips_trailing_slash() {
        let settings = ApiSettings {
            base_url: "http://localhost:3000/api/v1/".to_string(),
            timeout_secs: 5,
        };
        let client = ApiClient::new(&settings).unwrap();

        assert_eq!(client.base_url(), "http://localhost:3000/api/v1");
        assert_eq!(client.url("/products"), "http://localhost:3000/api/v1/products");
    }
}
