//! Typed, synchronous client for the congress.gov v3 REST API.
//!
//! # Overview
//! Every call runs the same pipeline:
//!
//! 1. [`request`]: a path template, positional values and optional query
//!    parameters become an [`HttpRequest`]. Invalid input fails here, before
//!    any I/O.
//! 2. [`transport`]: the [`Executor`] attaches the API key, sends the request
//!    through a [`Transport`] and retries transient failures under a
//!    [`RetryPolicy`] and an optional deadline.
//! 3. [`classify`]: the final [`Outcome`] becomes parsed JSON or a typed
//!    [`ApiError`].
//! 4. [`decode`]: the wrapper key is unwrapped into entities from [`types`].
//!
//! [`CongressClient`] wires the stages together and exposes one method per
//! endpoint.
//!
//! # Design
//! - The client is immutable and `Clone + Send + Sync`; retry state lives on
//!   the calling thread's stack.
//! - Entity fields are all `Option`, so partially populated records decode.
//! - No caching, no proactive rate limiting and no auto-paging: each list
//!   method returns exactly the page its `ListOptions` selects.

pub mod classify;
pub mod client;
pub mod config;
pub mod decode;
pub mod error;
pub mod http;
pub mod request;
mod resources;
pub mod retry;
pub mod transport;
pub mod types;

pub use client::CongressClient;
pub use config::ClientConfig;
pub use decode::{Page, Pagination};
pub use error::{ApiError, ApiResult, ConfigError, TransientCause, TransportError};
pub use http::{HttpRequest, HttpResponse, Outcome};
pub use request::{ListOptions, PathTemplate, PathValue, RequestBuilder};
pub use retry::RetryPolicy;
pub use transport::{Executor, Transport, UreqTransport};
