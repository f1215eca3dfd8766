//! Core components for signed object storage access.
//!
//! This crate provides the foundational types and traits for the reqs3 ecosystem.
//! It holds everything that is not specific to one storage service.
//!
//! ## Overview
//!
//! The crate is built around several key concepts:
//!
//! - **Context**: A container that holds implementations for HTTP sending and environment access
//! - **Traits**: Abstract interfaces for the transport collaborator (`HttpSend`) and for
//!   credential readiness (`SigningCredential`)
//! - **Error**: A single error type shared by every reqs3 crate
//!
//! ## Example
//!
//! ```no_run
//! use async_trait::async_trait;
//! use bytes::Bytes;
//! use reqs3_core::{Context, HttpSend, Result};
//!
//! // Plug in your own transport.
//! #[derive(Debug)]
//! struct MyTransport;
//!
//! #[async_trait]
//! impl HttpSend for MyTransport {
//!     async fn http_send(&self, req: http::Request<Bytes>) -> Result<http::Response<Bytes>> {
//!         let _ = req;
//!         Ok(http::Response::new(Bytes::new()))
//!     }
//! }
//!
//! # async fn example() -> Result<()> {
//! let ctx = Context::new().with_http_send(MyTransport);
//!
//! let req = http::Request::get("https://example.com/").body(Bytes::new())?;
//! let resp = ctx.http_send(req).await?;
//! assert!(resp.status().is_success());
//! # Ok(())
//! # }
//! ```
//!
//! ## Utilities
//!
//! The crate also provides utility modules:
//!
//! - [`hash`]: Cryptographic hashing utilities
//! - [`time`]: Time manipulation utilities
//! - [`utils`]: General utilities including data redaction

// Make sure all our public APIs have docs.
#![warn(missing_docs)]

pub mod hash;
pub mod time;
pub mod utils;

mod context;
pub use context::Context;
pub use context::Env;
pub use context::HttpSend;
pub use context::NoopEnv;
pub use context::NoopHttpSend;
pub use context::OsEnv;
pub use context::StaticEnv;

mod api;
pub use api::SigningCredential;

mod error;
pub use error::{Error, ErrorKind, Result};
