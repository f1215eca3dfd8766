use async_trait::async_trait;
use bytes::Bytes;
use reqs3_core::{Context, Env, HttpSend, OsEnv, Result};
use reqs3_http_send_reqwest::ReqwestHttpSend;
use reqs3_s3::{Client, Config};
use std::collections::HashMap;

/// DefaultContext sends requests with `reqwest` and reads the process env.
#[derive(Debug, Default, Clone)]
pub struct DefaultContext {
    http: ReqwestHttpSend,
}

impl DefaultContext {
    /// Create a new DefaultContext with a default `reqwest::Client`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new DefaultContext on top of `client`.
    pub fn with_client(client: reqwest::Client) -> Self {
        Self {
            http: ReqwestHttpSend::new(client),
        }
    }
}

#[async_trait]
impl HttpSend for DefaultContext {
    async fn http_send(&self, req: http::Request<Bytes>) -> Result<http::Response<Bytes>> {
        self.http.http_send(req).await
    }
}

impl Env for DefaultContext {
    fn var(&self, key: &str) -> Option<String> {
        OsEnv.var(key)
    }

    fn vars(&self) -> HashMap<String, String> {
        OsEnv.vars()
    }
}

/// Build a [`Context`] wired to [`DefaultContext`].
pub fn default_context() -> Context {
    let ctx = DefaultContext::new();
    Context::new().with_http_send(ctx.clone()).with_env(ctx)
}

/// Build a [`Client`] configured from the process env.
///
/// The client is not ready when any of the access key, secret key, region
/// or bucket is missing.
pub fn default_client() -> Client {
    let ctx = default_context();
    let config = Config::default().from_env(&ctx);
    Client::from_config(ctx, &config)
}
