//! HTTP plumbing between the client and the API.
//!
//! [`Transport`] is the seam: implementors only move bytes
//! ([`send`](Transport::send)); envelope decoding is shared by the provided
//! methods. [`HttpTransport`] is the reqwest implementation used in
//! production, tests substitute their own.

mod error_map;
mod http;

use async_trait::async_trait;
use reqwest::Method;
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::ApiError;
use crate::types::Response;
use crate::utils::log_sanitizer::truncate_for_log;

pub(crate) use error_map::ErrorContext;
pub use http::HttpTransport;

/// Sends requests to the DNS records API.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Send one request and return the raw response body.
    ///
    /// `path` is relative to the API root and starts with `/`. `body` is
    /// already-serialized JSON. Any HTTP status carrying a JSON envelope
    /// (including 4xx) must be returned as `Ok`, so the API error codes
    /// inside can be mapped.
    async fn send(
        &self,
        method: Method,
        path: &str,
        query: &[(String, String)],
        body: Option<String>,
    ) -> Result<String, ApiError>;

    async fn get<T>(&self, path: &str, query: &[(String, String)]) -> Result<Response<T>, ApiError>
    where
        T: DeserializeOwned + Send,
    {
        let text = self.send(Method::GET, path, query, None).await?;
        parse_json(&text)
    }

    async fn post<T, B>(
        &self,
        path: &str,
        body: &B,
        query: &[(String, String)],
    ) -> Result<Response<T>, ApiError>
    where
        T: DeserializeOwned + Send,
        B: Serialize + Sync + ?Sized,
    {
        let body = to_body(body)?;
        let text = self.send(Method::POST, path, query, Some(body)).await?;
        parse_json(&text)
    }

    async fn patch<T, B>(&self, path: &str, body: &B) -> Result<Response<T>, ApiError>
    where
        T: DeserializeOwned + Send,
        B: Serialize + Sync + ?Sized,
    {
        let body = to_body(body)?;
        let text = self.send(Method::PATCH, path, &[], Some(body)).await?;
        parse_json(&text)
    }

    async fn put<T, B>(&self, path: &str, body: &B) -> Result<Response<T>, ApiError>
    where
        T: DeserializeOwned + Send,
        B: Serialize + Sync + ?Sized,
    {
        let body = to_body(body)?;
        let text = self.send(Method::PUT, path, &[], Some(body)).await?;
        parse_json(&text)
    }

    async fn delete<T>(
        &self,
        path: &str,
        query: &[(String, String)],
    ) -> Result<Response<T>, ApiError>
    where
        T: DeserializeOwned + Send,
    {
        let text = self.send(Method::DELETE, path, query, None).await?;
        parse_json(&text)
    }
}

fn to_body<B: Serialize + ?Sized>(body: &B) -> Result<String, ApiError> {
    let json = serde_json::to_string(body).map_err(|e| ApiError::SerializationError {
        detail: e.to_string(),
    })?;
    log::debug!("Request Body: {}", truncate_for_log(&json));
    Ok(json)
}

/// Decode a response envelope.
pub(crate) fn parse_json<T: DeserializeOwned>(text: &str) -> Result<Response<T>, ApiError> {
    serde_json::from_str(text).map_err(|e| {
        log::error!("JSON parse failed: {e}");
        log::error!("Raw response: {}", truncate_for_log(text));
        ApiError::ParseError {
            detail: e.to_string(),
        }
    })
}
