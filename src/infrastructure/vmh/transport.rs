//! HTTP transport to the VMH record store

use std::time::Duration;

use async_trait::async_trait;

use crate::domain::DomainError;

/// Trait for record store GET requests (for mocking)
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait VmhTransport: Send + Sync {
    /// Issue a GET with the given query parameters and return the parsed
    /// JSON body. Non-2xx statuses and network failures are transport
    /// errors.
    async fn get_json(
        &self,
        url: &str,
        query: &[(String, String)],
    ) -> Result<serde_json::Value, DomainError>;
}

/// Real transport using reqwest
#[derive(Debug, Clone)]
pub struct HttpVmhTransport {
    client: reqwest::Client,
}

impl HttpVmhTransport {
    pub fn new(timeout: Duration) -> Result<Self, DomainError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| DomainError::configuration(format!("Failed to build HTTP client: {e}")))?;

        Ok(Self { client })
    }
}

#[async_trait]
impl VmhTransport for HttpVmhTransport {
    async fn get_json(
        &self,
        url: &str,
        query: &[(String, String)],
    ) -> Result<serde_json::Value, DomainError> {
        let response = self
            .client
            .get(url)
            .query(query)
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await
            .map_err(|e| DomainError::transport(format!("Request failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(DomainError::transport_status(
                status.as_u16(),
                format!("VMH API error: {body}"),
            ));
        }

        response
            .json()
            .await
            .map_err(|e| DomainError::transport(format!("Failed to parse response: {e}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn params(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[tokio::test]
    async fn test_get_json_sends_query_params_and_parses_body() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/_api/microbes/"))
            .and(query_param("reconstruction", "iML1515"))
            .and(query_param("page_size", "50"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "count": 1,
                "results": [{"id": 7, "reconstruction": "iML1515"}]
            })))
            .mount(&server)
            .await;

        let transport = HttpVmhTransport::new(Duration::from_secs(5)).unwrap();
        let body = transport
            .get_json(
                &format!("{}/_api/microbes/", server.uri()),
                &params(&[("reconstruction", "iML1515"), ("page_size", "50")]),
            )
            .await
            .unwrap();

        assert_eq!(body["results"][0]["reconstruction"], "iML1515");
    }

    #[tokio::test]
    async fn test_non_success_status_is_transport_error_with_status() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
            .mount(&server)
            .await;

        let transport = HttpVmhTransport::new(Duration::from_secs(5)).unwrap();
        let error = transport
            .get_json(&server.uri(), &[])
            .await
            .unwrap_err();

        match error {
            DomainError::Transport { status, .. } => assert_eq!(status, Some(500)),
            other => panic!("expected transport error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_connection_failure_is_transport_error() {
        // Nothing is listening here
        let transport = HttpVmhTransport::new(Duration::from_secs(1)).unwrap();
        let error = transport
            .get_json("http://127.0.0.1:1/_api/microbes/", &[])
            .await
            .unwrap_err();

        assert!(matches!(
            error,
            DomainError::Transport { status: None, .. }
        ));
    }
}
