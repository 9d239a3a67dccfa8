//! REST implementation of [`StudentApi`]
//!
//! | Operation | Method | Path              | Body     |
//! |-----------|--------|-------------------|----------|
//! | list      | GET    | `{base}`          | -        |
//! | create    | POST   | `{base}`          | `{name}` |
//! | update    | PUT    | `{base}/{id}`     | `{name}` |
//! | delete    | DELETE | `{base}/{id}`     | -        |

use async_trait::async_trait;
use reqwest::Client;

use crate::error::{CoreError, CoreResult};
use crate::http_client::HttpUtils;
use crate::traits::StudentApi;
use crate::types::{Student, StudentId, StudentPayload};

/// Collection endpoint used when nothing else is configured
pub const DEFAULT_API_URL: &str = "http://127.0.0.1:5000/notes";

/// Talks to the collection endpoint over HTTP/JSON
pub struct RestStudentApi {
    client: Client,
    base_url: String,
}

impl RestStudentApi {
    /// Create a client for the given collection URL.
    ///
    /// No timeout is configured: a request lives until the server answers or the connection drops.
    pub fn new(base_url: impl Into<String>) -> CoreResult<Self> {
        let client = Client::builder()
            .build()
            .map_err(|e| CoreError::Network(format!("Failed to build HTTP client: {e}")))?;

        Ok(Self::with_client(client, base_url))
    }

    /// Reuse an existing `reqwest::Client`
    pub fn with_client(client: Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { client, base_url }
    }

    /// The collection URL
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn item_url(&self, id: &StudentId) -> String {
        format!(
            "{}/{}",
            self.base_url,
            urlencoding::encode(&id.to_string())
        )
    }
}

#[async_trait]
impl StudentApi for RestStudentApi {
    async fn list(&self) -> CoreResult<Vec<Student>> {
        let url = &self.base_url;
        let body = HttpUtils::execute_request(self.client.get(url), "GET", url).await?;
        HttpUtils::parse_json(&body)
    }

    async fn create(&self, payload: &StudentPayload) -> CoreResult<()> {
        let url = &self.base_url;
        let request = self.client.post(url).json(payload);
        let body = HttpUtils::execute_request(request, "POST", url).await?;
        HttpUtils::expect_json_or_empty(&body)
    }

    async fn update(&self, id: &StudentId, payload: &StudentPayload) -> CoreResult<()> {
        let url = self.item_url(id);
        let request = self.client.put(&url).json(payload);
        let body = HttpUtils::execute_request(request, "PUT", &url).await?;
        HttpUtils::expect_json_or_empty(&body)
    }

    async fn delete(&self, id: &StudentId) -> CoreResult<()> {
        let url = self.item_url(id);
        let body = HttpUtils::execute_request(self.client.delete(&url), "DELETE", &url).await?;
        HttpUtils::expect_json_or_empty(&body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{body_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    async fn api_for(server: &MockServer) -> RestStudentApi {
        RestStudentApi::new(format!("{}/notes", server.uri())).unwrap()
    }

    #[test]
    fn trailing_slash_is_dropped() {
        let api = RestStudentApi::new("http://localhost:5000/notes/").unwrap();
        assert_eq!(api.base_url(), "http://localhost:5000/notes");
        assert_eq!(
            api.item_url(&StudentId::from(3)),
            "http://localhost:5000/notes/3"
        );
        assert_eq!(
            api.item_url(&StudentId::from("a b")),
            "http://localhost:5000/notes/a%20b"
        );
    }

    #[tokio::test]
    async fn list_parses_collection() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/notes"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                {"id": 1, "name": "Alice", "created_at": "2024-03-01T10:00:00Z"},
                {"id": 2, "name": "bob"}
            ])))
            .expect(1)
            .mount(&server)
            .await;

        let students = api_for(&server).await.list().await.unwrap();

        assert_eq!(students.len(), 2);
        assert_eq!(students[0].name, "Alice");
        assert_eq!(students[1].id, StudentId::Number(2));
    }

    #[tokio::test]
    async fn create_posts_json_name() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/notes"))
            .and(header("content-type", "application/json"))
            .and(body_json(json!({"name": "Carol"})))
            .respond_with(ResponseTemplate::new(201).set_body_json(json!({"id": 3})))
            .expect(1)
            .mount(&server)
            .await;

        api_for(&server)
            .await
            .create(&StudentPayload::new("Carol"))
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn update_puts_to_item_path() {
        let server = MockServer::start().await;
        Mock::given(method("PUT"))
            .and(path("/notes/7"))
            .and(body_json(json!({"name": "Dave"})))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"message": "updated"})))
            .expect(1)
            .mount(&server)
            .await;

        api_for(&server)
            .await
            .update(&StudentId::from(7), &StudentPayload::new("Dave"))
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn delete_accepts_empty_body() {
        let server = MockServer::start().await;
        Mock::given(method("DELETE"))
            .and(path("/notes/7"))
            .respond_with(ResponseTemplate::new(204))
            .expect(1)
            .mount(&server)
            .await;

        api_for(&server)
            .await
            .delete(&StudentId::from(7))
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn server_error_status_is_an_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/notes"))
            .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
            .mount(&server)
            .await;

        let err = api_for(&server)
            .await
            .create(&StudentPayload::new("Eve"))
            .await
            .unwrap_err();

        assert_eq!(
            err,
            CoreError::Status {
                status: 500,
                body: "boom".into()
            }
        );
    }

    #[tokio::test]
    async fn non_json_success_body_is_an_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/notes"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html></html>"))
            .mount(&server)
            .await;

        let err = api_for(&server).await.list().await.unwrap_err();
        assert!(matches!(err, CoreError::Parse(_)));
    }

    #[tokio::test]
    async fn unreachable_server_is_a_network_error() {
        let port = {
            let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
            listener.local_addr().unwrap().port()
        };
        let api = RestStudentApi::new(format!("http://127.0.0.1:{port}/notes")).unwrap();
        let err = api.list().await.unwrap_err();
        assert!(matches!(err, CoreError::Network(_)));
    }
}
