use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;
use tango_types::LookupResult;

use crate::{ImageLookup, LookupError};

#[derive(Clone)]
pub struct HttpImageLookup {
    base_url: String,
    client: reqwest::Client,
}

impl HttpImageLookup {
    pub fn new(base_url: String, timeout: Duration) -> Result<Self, LookupError> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self::with_client(client, base_url))
    }

    pub fn with_client(client: reqwest::Client, base_url: String) -> Self {
        Self { base_url, client }
    }
}

#[derive(Deserialize)]
struct SearchResponse {
    #[serde(default)]
    results: LookupResult,
}

#[async_trait]
impl ImageLookup for HttpImageLookup {
    async fn search(&self, query: &str) -> Result<LookupResult, LookupError> {
        let response = self
            .client
            .get(&self.base_url)
            .query(&[("q", query)])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(LookupError::Status(status.as_u16()));
        }

        let body = response.bytes().await?;
        let parsed: SearchResponse =
            serde_json::from_slice(&body).map_err(|e| LookupError::Decode(e.to_string()))?;

        tracing::debug!(query, count = parsed.results.len(), "lookup finished");
        Ok(parsed.results)
    }

    fn describe(&self) -> String {
        format!("http {}", self.base_url)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use axum::extract::Query;
    use axum::http::StatusCode;
    use axum::routing::get;
    use axum::{Json, Router};
    use serde_json::json;

    use super::*;

    async fn spawn(router: Router) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });
        format!("http://{}", addr)
    }

    async fn irasuto(Query(params): Query<HashMap<String, String>>) -> Json<serde_json::Value> {
        let q = params.get("q").cloned().unwrap_or_default();
        let results: Vec<_> = [
            ("https://img/inu.png", "犬のイラスト"),
            ("https://img/koinu.png", "子犬"),
            ("https://img/neko.png", "猫"),
        ]
        .into_iter()
        .filter(|(_, name)| crate::name_matches(name, &q))
        .map(|(url, name)| json!({ "image_url": url, "name": name }))
        .collect();
        Json(json!({ "results": results }))
    }

    fn lookup(url: String) -> HttpImageLookup {
        HttpImageLookup::new(url, Duration::from_secs(5)).unwrap()
    }

    #[tokio::test]
    async fn test_returns_matches_in_order() {
        let base = spawn(Router::new().route("/search", get(irasuto))).await;

        let results = lookup(format!("{base}/search")).search("犬").await.unwrap();
        let names: Vec<_> = results.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, ["犬のイラスト", "子犬"]);
        assert_eq!(results[0].image_url, "https://img/inu.png");
    }

    #[tokio::test]
    async fn test_no_match_is_empty_not_error() {
        let base = spawn(Router::new().route("/search", get(irasuto))).await;

        let results = lookup(format!("{base}/search")).search("dog").await.unwrap();
        assert!(results.is_empty());
    }

    #[tokio::test]
    async fn test_missing_results_field_is_empty() {
        let base = spawn(Router::new().route("/search", get(|| async { Json(json!({})) }))).await;

        let results = lookup(format!("{base}/search")).search("犬").await.unwrap();
        assert!(results.is_empty());
    }

    #[tokio::test]
    async fn test_error_status() {
        let base = spawn(Router::new().route(
            "/search",
            get(|| async { (StatusCode::INTERNAL_SERVER_ERROR, Json(json!({ "error": "x" }))) }),
        ))
        .await;

        let err = lookup(format!("{base}/search")).search("犬").await.unwrap_err();
        assert!(matches!(err, LookupError::Status(500)));
    }

    #[tokio::test]
    async fn test_malformed_body() {
        let base = spawn(Router::new().route("/search", get(|| async { "nope" }))).await;

        let err = lookup(format!("{base}/search")).search("犬").await.unwrap_err();
        assert!(matches!(err, LookupError::Decode(_)));
    }
}
