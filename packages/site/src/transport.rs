use async_trait::async_trait;
use reqwest::Url;
use tracing::{debug, info};

use crate::config::{SiteConfig, SiteMode};
use crate::error::{Result, SiteError};

/// Status and body of an HTTP exchange. Non-2xx statuses are not errors at
/// this level; callers decide what a failure means for them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    pub status: u16,
    pub body: String,
}

impl Reply {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Trait for the HTTP client used by the page controller.
///
/// Futures are not `Send`: in the browser they run on the main thread.
#[async_trait(?Send)]
pub trait Transport {
    /// GET a path, relative to the page or absolute.
    async fn get(&self, path: &str) -> Result<Reply>;

    /// POST a JSON body with `Content-Type: application/json`.
    async fn post_json(&self, url: &str, body: &serde_json::Value) -> Result<Reply>;
}

/// reqwest-backed transport (production).
pub struct HttpTransport {
    client: reqwest::Client,
    base: Url,
}

impl HttpTransport {
    pub fn new(base_url: &str) -> Result<Self> {
        let base = Url::parse(base_url).map_err(|e| SiteError::InvalidUrl {
            url: base_url.to_string(),
            message: e.to_string(),
        })?;
        Ok(Self {
            client: reqwest::Client::new(),
            base,
        })
    }

    pub fn resolve(&self, path: &str) -> Result<Url> {
        self.base.join(path).map_err(|e| SiteError::InvalidUrl {
            url: path.to_string(),
            message: e.to_string(),
        })
    }
}

#[async_trait(?Send)]
impl Transport for HttpTransport {
    async fn get(&self, path: &str) -> Result<Reply> {
        let url = self.resolve(path)?;
        debug!("transport.get: url={url}");
        let response = self.client.get(url).send().await?;
        let status = response.status().as_u16();
        let body = response.text().await?;
        Ok(Reply { status, body })
    }

    async fn post_json(&self, url: &str, body: &serde_json::Value) -> Result<Reply> {
        let url = self.resolve(url)?;
        debug!("transport.post_json: url={url}");
        let response = self
            .client
            .post(url)
            .header(reqwest::header::CONTENT_TYPE, "application/json")
            .json(body)
            .send()
            .await?;
        let status = response.status().as_u16();
        let body = response.text().await?;
        Ok(Reply { status, body })
    }
}

/// Console transport (local development): GETs go through, POSTs are logged
/// and answered with `200 {}` without leaving the machine.
pub struct ConsoleTransport<T> {
    inner: T,
}

impl<T> ConsoleTransport<T> {
    pub fn new(inner: T) -> Self {
        Self { inner }
    }
}

#[async_trait(?Send)]
impl<T: Transport> Transport for ConsoleTransport<T> {
    async fn get(&self, path: &str) -> Result<Reply> {
        self.inner.get(path).await
    }

    async fn post_json(&self, url: &str, body: &serde_json::Value) -> Result<Reply> {
        info!("transport.console: POST {url} (local mode, not sent) body={body}");
        Ok(Reply::new(200, "{}"))
    }
}

/// Pick the transport for the configured mode. `base_url` is the page URL in
/// the browser; fragment paths are resolved against it.
pub fn for_config(config: &SiteConfig, base_url: &str) -> Result<Box<dyn Transport>> {
    let http = HttpTransport::new(base_url)?;
    Ok(match config.mode {
        SiteMode::Local => Box::new(ConsoleTransport::new(http)),
        SiteMode::Production => Box::new(http),
    })
}
