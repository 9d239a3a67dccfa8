//! Generic HTTP request handling
//!
//! Callers build the `RequestBuilder` themselves; this module sends it,
//! logs both sides, and turns transport failures and non-2xx statuses into `CoreError`.

use reqwest::RequestBuilder;
use serde::de::DeserializeOwned;

use crate::error::{CoreError, CoreResult};
use crate::utils::log_sanitizer::truncate_for_log;

/// HTTP tool function set
pub struct HttpUtils;

impl HttpUtils {
    /// Performs an HTTP request and returns the response text
    ///
    /// # Arguments
    /// * `request_builder` - configured request (URL, headers, body)
    /// * `method_name` - request method, for logging
    /// * `url` - request URL, for logging
    ///
    /// # Returns
    /// * `Ok(response_text)` - on any 2xx status
    /// * `Err(CoreError::Network)` - the request could not be sent or the body could not be read
    /// * `Err(CoreError::Status)` - the server answered with a non-2xx status
    pub async fn execute_request(
        request_builder: RequestBuilder,
        method_name: &str,
        url: &str,
    ) -> CoreResult<String> {
        log::debug!("{method_name} {url}");

        let response = request_builder
            .send()
            .await
            .map_err(|e| CoreError::Network(e.to_string()))?;

        let status = response.status();
        let status_code = status.as_u16();
        log::debug!("{method_name} {url} -> {status_code}");

        let response_text = response
            .text()
            .await
            .map_err(|e| CoreError::Network(format!("Failed to read response body: {e}")))?;

        log::debug!("Response Body: {}", truncate_for_log(&response_text));

        if !status.is_success() {
            return Err(CoreError::Status {
                status: status_code,
                body: truncate_for_log(&response_text),
            });
        }

        Ok(response_text)
    }

    /// Parse a JSON response body
    pub fn parse_json<T>(response_text: &str) -> CoreResult<T>
    where
        T: DeserializeOwned,
    {
        serde_json::from_str(response_text).map_err(|e| {
            log::error!("JSON parse failed: {e}");
            log::error!("Raw response: {}", truncate_for_log(response_text));
            CoreError::Parse(e.to_string())
        })
    }

    /// Check that a mutation response is JSON, ignoring its content.
    ///
    /// An empty body (e.g. `204 No Content`) is accepted.
    pub fn expect_json_or_empty(response_text: &str) -> CoreResult<()> {
        if response_text.trim().is_empty() {
            return Ok(());
        }
        Self::parse_json::<serde_json::Value>(response_text).map(|_| ())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn execute_request_returns_body_or_status_error() {
        use wiremock::matchers::{method, path};
        use wiremock::{Mock, MockServer, ResponseTemplate};

        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/ok"))
            .respond_with(ResponseTemplate::new(200).set_body_string("[]"))
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/missing"))
            .respond_with(ResponseTemplate::new(404).set_body_string("nope"))
            .mount(&server)
            .await;

        let client = reqwest::Client::new();
        let ok_url = format!("{}/ok", server.uri());
        let body = HttpUtils::execute_request(client.get(&ok_url), "GET", &ok_url)
            .await
            .unwrap();
        assert_eq!(body, "[]");

        let missing_url = format!("{}/missing", server.uri());
        let err = HttpUtils::execute_request(client.get(&missing_url), "GET", &missing_url)
            .await
            .unwrap_err();
        assert_eq!(
            err,
            CoreError::Status {
                status: 404,
                body: "nope".to_string()
            }
        );
    }

    #[test]
    fn parse_json_reports_parse_error() {
        let result = HttpUtils::parse_json::<Vec<u8>>("<html>oops</html>");
        assert!(matches!(result, Err(CoreError::Parse(_))));
    }

    #[test]
    fn mutation_body_may_be_empty_or_json() {
        assert!(HttpUtils::expect_json_or_empty("").is_ok());
        assert!(HttpUtils::expect_json_or_empty("  \n").is_ok());
        assert!(HttpUtils::expect_json_or_empty(r#"{"message":"ok"}"#).is_ok());
        assert!(HttpUtils::expect_json_or_empty("Internal error").is_err());
    }
}
