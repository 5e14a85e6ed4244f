//! The HTTP capability the provider is built on.
//!
//! Provider code only ever issues authenticated `GET`s and needs the status and
//! body back, so that is all the trait exposes. Tests substitute it.

use async_trait::async_trait;
use log::debug;
use reqwest::Client;
use std::fmt;
use std::time::Duration;

#[derive(Clone, PartialEq, Eq)]
pub struct HttpRequest {
    pub url: String,
    pub query: Vec<(String, String)>,
    pub username: String,
    pub password: String,
}

impl HttpRequest {
    /// Looks up the first query parameter named `key`.
    pub fn param(&self, key: &str) -> Option<&str> {
        self.query
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }
}

impl fmt::Debug for HttpRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HttpRequest")
            .field("url", &self.url)
            .field("query", &self.query)
            .field("username", &self.username)
            .field("password", &"<REDACTED>")
            .finish()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait HttpTransport: Send + Sync {
    async fn get(&self, request: HttpRequest) -> Result<HttpResponse, reqwest::Error>;
}

pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    pub fn new(timeout: Duration) -> Result<Self, reqwest::Error> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self { client })
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn get(&self, request: HttpRequest) -> Result<HttpResponse, reqwest::Error> {
        debug!("GET {} {:?}", request.url, request.query);
        let response = self
            .client
            .get(&request.url)
            .query(&request.query)
            .basic_auth(&request.username, Some(&request.password))
            .send()
            .await?;

        let status = response.status();
        debug!("GET {} -> {}", request.url, status.as_u16());
        // The body of a failed response only decorates the error.
        let body = if status.is_success() {
            response.text().await?
        } else {
            response.text().await.unwrap_or_default()
        };

        Ok(HttpResponse {
            status: status.as_u16(),
            body,
        })
    }
}
