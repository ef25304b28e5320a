//! `CongressClient`: the pipeline facade behind every resource method.
//!
//! # Design
//! The client is immutable after construction. It owns an `Executor` (which
//! shares its `Transport` through an `Arc`) and the per-call deadline, so
//! cloning is cheap and a single instance can serve many threads. Each call
//! runs Request Builder output through executor, classifier and decoder in
//! that order, inside a `tracing` span tagged with a fresh request id.

use std::sync::Arc;
use std::time::{Duration, Instant};

use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, debug_span};
use uuid::Uuid;

use crate::classify::classify;
use crate::config::ClientConfig;
use crate::decode::{decode_many, decode_one, decode_page, Page};
use crate::error::{ApiResult, ConfigError};
use crate::http::HttpRequest;
use crate::transport::{Executor, Transport, UreqTransport};

/// Synchronous client for the congress.gov v3 API.
#[derive(Debug, Clone)]
pub struct CongressClient {
    executor: Executor,
    call_timeout: Option<Duration>,
}

impl CongressClient {
    /// Client over the default blocking HTTP transport.
    ///
    /// # Errors
    /// Returns an error if `config` fails validation.
    pub fn new(config: ClientConfig) -> Result<Self, ConfigError> {
        Self::with_transport(config, Arc::new(UreqTransport::new()))
    }

    /// Client configured from `CONGRESS_*` environment variables.
    ///
    /// # Errors
    /// Returns an error if configuration cannot be loaded or is invalid.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::new(ClientConfig::load()?)
    }

    /// Client over a caller-supplied transport.
    ///
    /// # Errors
    /// Returns an error if `config` fails validation.
    pub fn with_transport(
        config: ClientConfig,
        transport: Arc<dyn Transport>,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        let executor = Executor::new(
            transport,
            &config.base_url,
            config.api_key.clone(),
            config.retry_policy(),
        )
        .with_attempt_timeout(Some(config.attempt_timeout()));
        Ok(Self {
            executor,
            call_timeout: config.call_timeout(),
        })
    }

    pub fn base_url(&self) -> &str {
        self.executor.base_url()
    }

    /// Run `request` through executor and classifier with an explicit
    /// deadline, returning the parsed JSON document.
    pub fn execute(&self, request: &HttpRequest, deadline: Option<Instant>) -> ApiResult<Value> {
        let span = debug_span!(
            "congress_request",
            request_id = %Uuid::new_v4(),
            path = %request.path,
        );
        let _guard = span.enter();

        debug!(query = %request.query_string(), "executing");
        let outcome = self.executor.execute(request, deadline);
        let result = classify(outcome, &request.path);
        if let Err(err) = &result {
            debug!(error = %err, "request failed");
        }
        result
    }

    /// Fetch one entity from under `key`.
    pub fn fetch_one<T: DeserializeOwned>(&self, request: &HttpRequest, key: &str) -> ApiResult<T> {
        let value = self.execute(request, self.deadline())?;
        decode_one(value, key, &request.path)
    }

    /// Fetch the entity list under `key`; absent means empty.
    pub fn fetch_many<T: DeserializeOwned>(
        &self,
        request: &HttpRequest,
        key: &str,
    ) -> ApiResult<Vec<T>> {
        let value = self.execute(request, self.deadline())?;
        decode_many(value, key, &request.path)
    }

    /// Like [`fetch_many`](Self::fetch_many), also returning the
    /// `pagination` block.
    pub fn fetch_page<T: DeserializeOwned>(
        &self,
        request: &HttpRequest,
        key: &str,
    ) -> ApiResult<Page<T>> {
        let value = self.execute(request, self.deadline())?;
        decode_page(value, key, &request.path)
    }

    fn deadline(&self) -> Option<Instant> {
        self.call_timeout.map(|t| Instant::now() + t)
    }
}
