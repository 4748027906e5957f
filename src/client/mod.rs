//! HTTP client for the storage service.
//!
//! Every call returns a [`ClientError`] tagged with where it failed, so callers
//! decide how to surface it instead of the client printing anything itself.

use std::num::NonZeroU32;
use std::time::Duration;

use reqwest::{Response, StatusCode};
use serde::{de::DeserializeOwned, Serialize};
use thiserror::Error;

use crate::api::SuccessResponse;
use crate::errors::ErrorResponse;
use crate::models::{AddRuleRequest, AddSipRequest, DeleteRuleRequest, LastRefresh, Rule, SipData};

/// Why a client operation failed.
#[derive(Debug, Error)]
pub enum ClientError {
    /// The request never produced a usable response.
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),
    /// Input was rejected locally; nothing was sent.
    #[error("{0}")]
    Validation(String),
    /// The service answered with a failure.
    #[error("server error ({status}): {message}")]
    Server { status: StatusCode, message: String },
}

/// Thin typed wrapper over the storage service endpoints.
#[derive(Debug, Clone)]
pub struct SipClient {
    http: reqwest::Client,
    base_url: String,
}

impl SipClient {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, ClientError> {
        let http = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ClientError> {
        let resp = self.http.get(self.url(path)).send().await?;
        let resp = check_status(resp).await?;
        Ok(resp.json().await?)
    }

    async fn post_json<B: Serialize>(
        &self,
        path: &str,
        body: Option<&B>,
    ) -> Result<(), ClientError> {
        let mut request = self.http.post(self.url(path));
        if let Some(body) = body {
            request = request.json(body);
        }
        let resp = check_status(request.send().await?).await?;
        let status = resp.status();
        let ack: SuccessResponse = resp.json().await?;
        if !ack.success {
            return Err(ClientError::Server {
                status,
                message: format!("{} reported failure", path),
            });
        }
        Ok(())
    }

    /// GET /api/sip-data
    pub async fn sip_data(&self) -> Result<SipData, ClientError> {
        self.get_json("/api/sip-data").await
    }

    /// GET /api/rules
    pub async fn rules(&self) -> Result<Vec<Rule>, ClientError> {
        self.get_json("/api/rules").await
    }

    /// GET /api/last-refresh
    pub async fn last_refresh(&self) -> Result<f64, ClientError> {
        let marker: LastRefresh = self.get_json("/api/last-refresh").await?;
        Ok(marker.timestamp)
    }

    /// POST /api/add-sip
    pub async fn add_sip(&self, username: &str, count: NonZeroU32) -> Result<(), ClientError> {
        let body = AddSipRequest {
            username: username.to_string(),
            count,
        };
        self.post_json("/api/add-sip", Some(&body)).await
    }

    /// POST /api/add-rule
    pub async fn add_rule(&self, rule: &str, sip_count: NonZeroU32) -> Result<(), ClientError> {
        let body = AddRuleRequest {
            rule: rule.to_string(),
            sip_count,
        };
        self.post_json("/api/add-rule", Some(&body)).await
    }

    /// POST /api/delete-rule
    pub async fn delete_rule(&self, index: i64) -> Result<(), ClientError> {
        let body = DeleteRuleRequest { index };
        self.post_json("/api/delete-rule", Some(&body)).await
    }

    /// POST /api/reset-data
    pub async fn reset_data(&self) -> Result<(), ClientError> {
        self.post_json::<()>("/api/reset-data", None).await
    }

    /// POST /api/refresh
    pub async fn refresh(&self) -> Result<(), ClientError> {
        self.post_json::<()>("/api/refresh", None).await
    }
}

/// Turn a non-2xx response into a [`ClientError::Server`], keeping the
/// service's error message when the body carries one.
async fn check_status(resp: Response) -> Result<Response, ClientError> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp);
    }

    let text = resp.text().await.unwrap_or_default();
    let message = match serde_json::from_str::<ErrorResponse>(&text) {
        Ok(body) => body.error,
        Err(_) if text.is_empty() => status
            .canonical_reason()
            .unwrap_or("unknown error")
            .to_string(),
        Err(_) => text,
    };
    Err(ClientError::Server { status, message })
}
