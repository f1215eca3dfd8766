use crate::constants::*;
use crate::Credentials;
use reqs3_core::utils::Redact;
use reqs3_core::Context;
use std::fmt::{Debug, Formatter};

/// Config for the S3 client.
///
/// Every field is optional. Missing credential fields turn into empty
/// strings in [`Credentials`], which makes the client report itself as not
/// ready instead of failing.
#[derive(Clone, Default)]
pub struct Config {
    /// `access_key_id` will be loaded from
    ///
    /// - this field if it's `is_some`
    /// - env value: [`AWS_ACCESS_KEY_ID`]
    pub access_key_id: Option<String>,
    /// `secret_access_key` will be loaded from
    ///
    /// - this field if it's `is_some`
    /// - env value: [`AWS_SECRET_ACCESS_KEY`]
    pub secret_access_key: Option<String>,
    /// `region` will be loaded from:
    ///
    /// - this field if it's `is_some`
    /// - env value: [`AWS_REGION`]
    /// - env value: [`AWS_DEFAULT_REGION`]
    pub region: Option<String>,
    /// `bucket` will be loaded from:
    ///
    /// - this field if it's `is_some`
    /// - env value: [`REQS3_BUCKET`]
    pub bucket: Option<String>,
    /// `endpoint_domain` will be loaded from:
    ///
    /// - this field if it's `is_some`
    /// - env value: [`REQS3_ENDPOINT_DOMAIN`]
    /// - default to `amazonaws.com`
    pub endpoint_domain: Option<String>,
}

impl Debug for Config {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("access_key_id", &Redact::from(&self.access_key_id))
            .field("secret_access_key", &Redact::from(&self.secret_access_key))
            .field("region", &self.region)
            .field("bucket", &self.bucket)
            .field("endpoint_domain", &self.endpoint_domain)
            .finish()
    }
}

impl Config {
    /// Fill unset fields from the environment of `ctx`.
    pub fn from_env(mut self, ctx: &Context) -> Self {
        let envs = ctx.env_vars();

        if self.access_key_id.is_none() {
            self.access_key_id = envs.get(AWS_ACCESS_KEY_ID).cloned();
        }
        if self.secret_access_key.is_none() {
            self.secret_access_key = envs.get(AWS_SECRET_ACCESS_KEY).cloned();
        }
        if self.region.is_none() {
            self.region = envs
                .get(AWS_REGION)
                .or_else(|| envs.get(AWS_DEFAULT_REGION))
                .cloned();
        }
        if self.bucket.is_none() {
            self.bucket = envs.get(REQS3_BUCKET).cloned();
        }
        if self.endpoint_domain.is_none() {
            self.endpoint_domain = envs.get(REQS3_ENDPOINT_DOMAIN).cloned();
        }

        self
    }

    /// Storage domain to build hosts with.
    pub fn endpoint_domain(&self) -> &str {
        self.endpoint_domain
            .as_deref()
            .unwrap_or(S3_V4.storage_domain)
    }
}

impl From<&Config> for Credentials {
    fn from(cfg: &Config) -> Self {
        Credentials::new(
            cfg.access_key_id.as_deref().unwrap_or_default(),
            cfg.secret_access_key.as_deref().unwrap_or_default(),
            cfg.region.as_deref().unwrap_or_default(),
            cfg.bucket.as_deref().unwrap_or_default(),
        )
    }
}
