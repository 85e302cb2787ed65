pub mod dto;
pub mod endpoints;
pub mod sentiment_api;

pub use endpoints::{Endpoint, HttpMethod};
pub use sentiment_api::SentimentApiClient;

use crate::domain::{
    errors::{AppError, AppResult, NetworkError},
    logging::{LogComponent, get_logger},
};
use gloo_net::http::{Request, RequestBuilder, Response};
use serde::{Serialize, de::DeserializeOwned};

/// Thin JSON transport over `gloo-net`: base URL plus default headers
#[derive(Clone, Debug)]
pub struct ApiClient {
    base_url: String,
    default_headers: Vec<(String, String)>,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            default_headers: vec![
                ("Content-Type".to_string(), "application/json".to_string()),
                ("Accept".to_string(), "application/json".to_string()),
            ],
        }
    }

    pub fn add_header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        let key = key.into();
        self.default_headers.retain(|(k, _)| !k.eq_ignore_ascii_case(&key));
        self.default_headers.push((key, value.into()));
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn headers(&self) -> &[(String, String)] {
        &self.default_headers
    }

    /// `"POST http://host/auth/login"`, the verb taken from the endpoint
    pub fn request_line(&self, endpoint: &Endpoint<'_>) -> String {
        format!("{} {}", endpoint.method(), endpoint.url(&self.base_url))
    }

    fn builder(&self, endpoint: &Endpoint<'_>) -> (String, RequestBuilder) {
        let url = endpoint.url(&self.base_url);
        get_logger().debug(LogComponent::Infrastructure("HTTP"), &format!("🌐 {}", self.request_line(endpoint)));

        let mut request = match endpoint.method() {
            HttpMethod::Get => Request::get(&url),
            HttpMethod::Post => Request::post(&url),
        };
        for (key, value) in &self.default_headers {
            request = request.header(key, value);
        }
        (url, request)
    }

    /// Calls a body-less endpoint and decodes the JSON answer
    pub async fn get_json<T>(&self, endpoint: &Endpoint<'_>) -> AppResult<T>
    where
        T: DeserializeOwned,
    {
        let (url, request) = self.builder(endpoint);
        let response = request
            .send()
            .await
            .map_err(|e| NetworkError::RequestFailed(format!("{:?}", e)))?;

        Self::decode(&url, response).await
    }

    /// Sends `body` as JSON to `endpoint` and decodes the JSON answer
    pub async fn post_json<B, T>(&self, endpoint: &Endpoint<'_>, body: &B) -> AppResult<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let json_body = serde_json::to_string(body).map_err(|e| NetworkError::Serialization(e.to_string()))?;

        let (url, request) = self.builder(endpoint);
        let response = request
            .body(json_body)
            .map_err(|e| NetworkError::RequestFailed(format!("{:?}", e)))?
            .send()
            .await
            .map_err(|e| NetworkError::RequestFailed(format!("{:?}", e)))?;

        Self::decode(&url, response).await
    }

    async fn decode<T: DeserializeOwned>(url: &str, response: Response) -> AppResult<T> {
        let status = response.status();
        if !response.ok() {
            let detail = response
                .json::<dto::ErrorBody>()
                .await
                .ok()
                .and_then(|body| body.message());
            get_logger().error(
                LogComponent::Infrastructure("HTTP"),
                &format!("HTTP error: {} - {} ({})", status, response.status_text(), url),
            );
            return Err(AppError::Api { status, detail });
        }

        let data = response
            .json::<T>()
            .await
            .map_err(|e| NetworkError::Deserialization(format!("{:?}", e)))?;

        get_logger().debug(LogComponent::Infrastructure("HTTP"), &format!("✅ {} {}", status, url));
        Ok(data)
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new(crate::config::config().api_base_url.clone())
    }
}

/// URL helpers
pub struct HttpUtils;

impl HttpUtils {
    pub fn is_success_status(status: u16) -> bool {
        (200..300).contains(&status)
    }

    /// Appends `params` as an encoded query string, keeping their order
    pub fn build_url_with_params(base_url: &str, params: &[(&str, String)]) -> String {
        if params.is_empty() {
            return base_url.to_string();
        }

        let query_string: String = params
            .iter()
            .map(|(key, value)| format!("{}={}", Self::url_encode(key), Self::url_encode(value)))
            .collect::<Vec<_>>()
            .join("&");

        format!("{}?{}", base_url, query_string)
    }

    /// Percent-encodes everything outside the RFC 3986 unreserved set
    pub fn url_encode(input: &str) -> String {
        let mut out = String::with_capacity(input.len());
        for byte in input.bytes() {
            match byte {
                b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => out.push(byte as char),
                _ => out.push_str(&format!("%{:02X}", byte)),
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_building() {
        let url = HttpUtils::build_url_with_params(
            "/social/twitter/search",
            &[("query", "$TSLA lang:en".to_string()), ("max_results", "10".to_string())],
        );
        assert_eq!(url, "/social/twitter/search?query=%24TSLA%20lang%3Aen&max_results=10");
    }

    #[test]
    fn test_url_encoding() {
        assert_eq!(HttpUtils::url_encode("hello world"), "hello%20world");
        assert_eq!(HttpUtils::url_encode("a&b=c"), "a%26b%3Dc");
        assert_eq!(HttpUtils::url_encode("é"), "%C3%A9");
    }

    #[test]
    fn client_defaults_to_json() {
        let client = ApiClient::new("http://localhost:8000/");
        assert_eq!(client.base_url(), "http://localhost:8000");
        assert!(client.headers().iter().any(|(k, v)| k == "Content-Type" && v == "application/json"));
        let client = client.add_header("content-type", "text/plain");
        assert_eq!(client.headers().iter().filter(|(k, _)| k.eq_ignore_ascii_case("content-type")).count(), 1);
    }

    #[test]
    fn request_line_uses_endpoint_verb() {
        let client = ApiClient::new("http://localhost:8000");
        assert_eq!(client.request_line(&Endpoint::Login), "POST http://localhost:8000/auth/login");
        assert_eq!(
            client.request_line(&Endpoint::MarketPrices { symbol: "BTC" }),
            "GET http://localhost:8000/market/prices?symbol=BTC"
        );
    }

    #[test]
    fn success_range() {
        assert!(HttpUtils::is_success_status(204));
        assert!(!HttpUtils::is_success_status(401));
    }
}
