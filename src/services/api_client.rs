// ============================================================================
// API CLIENT - HTTP only (stateless)
// ============================================================================
// No business logic here, just requests against the REST backend.
// ============================================================================

use std::future::Future;

use futures::future::{select, Either};
use gloo_net::http::{Request, RequestBuilder, Response};
use gloo_timers::future::TimeoutFuture;
use serde::{de::DeserializeOwned, Serialize};
use web_sys::FormData;

use crate::config::AppConfig;
use crate::services::error::{ApiError, ErrorBody};

#[derive(Clone)]
pub struct ApiClient {
    base_url: String,
    timeout_ms: u32,
}

impl ApiClient {
    pub fn new() -> Self {
        let config = AppConfig::from_env();
        Self {
            base_url: config.backend_url().to_string(),
            timeout_ms: config.network_timeout_ms(),
        }
    }

    pub fn with_base_url(base_url: impl Into<String>, timeout_ms: u32) -> Self {
        Self {
            base_url: base_url.into(),
            timeout_ms,
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn attach_token(builder: RequestBuilder, token: Option<&str>) -> RequestBuilder {
        match token {
            Some(token) => builder.header("Authorization", &format!("Bearer {}", token)),
            None => builder,
        }
    }

    pub async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        token: Option<&str>,
    ) -> Result<T, ApiError> {
        let builder = Self::attach_token(Request::get(&self.url(path)), token);
        let response = self.send(builder.send()).await?;
        Self::parse_json(response).await
    }

    pub async fn post_json<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
        token: Option<&str>,
    ) -> Result<T, ApiError> {
        let builder = Self::attach_token(Request::post(&self.url(path)), token);
        let request = builder
            .json(body)
            .map_err(|e| ApiError::Network(format!("request build error: {}", e)))?;
        let response = self.send(request.send()).await?;
        Self::parse_json(response).await
    }

    /// Multipart upload (document attachments)
    pub async fn post_form<T: DeserializeOwned>(
        &self,
        path: &str,
        form: FormData,
        token: Option<&str>,
    ) -> Result<T, ApiError> {
        let builder = Self::attach_token(Request::post(&self.url(path)), token);
        let request = builder
            .body(form)
            .map_err(|e| ApiError::Network(format!("request build error: {}", e)))?;
        let response = self.send(request.send()).await?;
        Self::parse_json(response).await
    }

    /// Race the request against the configured timeout so a dead backend
    /// surfaces as an error state instead of hanging the view.
    async fn send<F>(&self, request: F) -> Result<Response, ApiError>
    where
        F: Future<Output = Result<Response, gloo_net::Error>>,
    {
        let timeout = TimeoutFuture::new(self.timeout_ms);
        futures::pin_mut!(request);
        futures::pin_mut!(timeout);
        match select(request, timeout).await {
            Either::Left((result, _)) => {
                result.map_err(|e| ApiError::Network(e.to_string()))
            }
            Either::Right((_, _)) => {
                log::warn!("⏱️ Request timed out after {}ms", self.timeout_ms);
                Err(ApiError::Timeout)
            }
        }
    }

    async fn check_status(response: &Response) -> Result<(), ApiError> {
        if response.ok() {
            return Ok(());
        }
        let body_message = response
            .json::<ErrorBody>()
            .await
            .ok()
            .and_then(|body| body.message);
        Err(ApiError::from_status(
            response.status(),
            body_message,
            &response.status_text(),
        ))
    }

    async fn parse_json<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
        Self::check_status(&response).await?;
        response
            .json::<T>()
            .await
            .map_err(|e| ApiError::Parse(e.to_string()))
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}
