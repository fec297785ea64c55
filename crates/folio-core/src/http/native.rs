//! Native HTTP transport using reqwest

use reqwest::{Client, StatusCode};
use std::time::Duration;
use url::Url;

use super::{HttpError, Transport};
use crate::config::FolioConfig;

pub struct HttpTransport {
    client: Client,
    base: Url,
}

impl HttpTransport {
    pub fn new(base_url: &str, timeout: Duration, user_agent: &str) -> Result<Self, HttpError> {
        let mut base = Url::parse(base_url).map_err(|_| HttpError::InvalidUrl {
            url: base_url.to_string(),
        })?;
        // `Url::join` replaces the last segment unless the base ends in '/'.
        if !base.path().ends_with('/') {
            let path = format!("{}/", base.path());
            base.set_path(&path);
        }

        let client = Client::builder()
            .timeout(timeout)
            .user_agent(user_agent)
            .build()
            .map_err(|e| HttpError::RequestFailed {
                message: e.to_string(),
            })?;

        Ok(Self { client, base })
    }

    pub fn from_config(config: &FolioConfig) -> Result<Self, HttpError> {
        Self::new(
            &config.base_url,
            Duration::from_secs(config.request_timeout_secs),
            &config.user_agent,
        )
    }

    /// Absolute URL for a resource path.
    pub fn url_for(&self, path: &str) -> Result<Url, HttpError> {
        self.base
            .join(path.trim_start_matches('/'))
            .map_err(|_| HttpError::InvalidUrl {
                url: path.to_string(),
            })
    }
}

impl Transport for HttpTransport {
    async fn get(&self, path: &str) -> Result<String, HttpError> {
        let url = self.url_for(path)?;
        tracing::debug!("GET {}", url);

        let response = self.client.get(url).send().await.map_err(|e| {
            if e.is_timeout() {
                HttpError::Timeout
            } else {
                HttpError::RequestFailed {
                    message: e.to_string(),
                }
            }
        })?;

        match response.status() {
            StatusCode::NOT_FOUND => {
                return Err(HttpError::NotFound {
                    path: path.to_string(),
                })
            }
            StatusCode::TOO_MANY_REQUESTS => return Err(HttpError::RateLimited),
            status if !status.is_success() => {
                return Err(HttpError::Status {
                    status: status.as_u16(),
                    path: path.to_string(),
                })
            }
            _ => {}
        }

        response.text().await.map_err(|e| HttpError::RequestFailed {
            message: e.to_string(),
        })
    }
}
