//! S3 object access signed with AWS Signature Version 4.
//!
//! This crate signs requests itself and relies on a [`reqs3_core::HttpSend`]
//! for the network. It covers get, put and delete of objects, paginated
//! listing and presigned GET urls.
//!
//! ## Example
//!
//! ```no_run
//! use reqs3_core::{Context, OsEnv, Result};
//! use reqs3_s3::{Client, Config};
//!
//! # async fn example(ctx: Context) -> Result<()> {
//! let ctx = ctx.with_env(OsEnv);
//! let config = Config::default().from_env(&ctx);
//! let client = Client::from_config(ctx, &config);
//!
//! if let Some(objects) = client.list("logs/").await? {
//!     for object in objects {
//!         println!("{} {}", object.key, object.size);
//!     }
//! }
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

mod constants;
pub use constants::SigningProfile;
pub use constants::EMPTY_STRING_SHA256;
pub use constants::S3_V4;

mod credential;
pub use credential::Credentials;

mod config;
pub use config::Config;

pub mod signature;

mod sign_request;
pub use sign_request::RequestSigner;

mod presign;

mod list;
pub use list::parse_list_page;
pub use list::ListPage;
pub use list::ListedObject;

mod client;
pub use client::Client;
