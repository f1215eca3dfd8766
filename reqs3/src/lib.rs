#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]

pub use reqs3_core::*;

#[cfg(feature = "default-context")]
mod context;
#[cfg(feature = "default-context")]
pub use context::{default_client, default_context, DefaultContext};

/// S3 client and the SigV4 pieces it is built from.
pub mod s3 {
    pub use reqs3_s3::*;
}

pub use s3::{Client, Config, Credentials, ListedObject};
