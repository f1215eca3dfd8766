//! [`HttpSend`] implementation backed by [`reqwest`].

use async_trait::async_trait;
use bytes::Bytes;
use http_body_util::BodyExt;
use reqs3_core::{Error, HttpSend, Result};
use reqwest::{Client, Request};

/// ReqwestHttpSend sends requests through a shared [`reqwest::Client`].
///
/// Timeouts, proxies and TLS settings are configured on the client passed to
/// [`ReqwestHttpSend::new`].
#[derive(Debug, Default, Clone)]
pub struct ReqwestHttpSend {
    client: Client,
}

impl ReqwestHttpSend {
    /// Create a new ReqwestHttpSend with a reqwest::Client.
    pub fn new(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl HttpSend for ReqwestHttpSend {
    async fn http_send(&self, req: http::Request<Bytes>) -> Result<http::Response<Bytes>> {
        let req = Request::try_from(req)
            .map_err(|e| Error::request_invalid("failed to convert request").with_source(e))?;
        let url = req.url().to_string();
        let resp: http::Response<_> = self
            .client
            .execute(req)
            .await
            .map_err(|e| {
                Error::unexpected("failed to send request")
                    .with_source(e)
                    .with_context(format!("url: {url}"))
            })?
            .into();

        let (parts, body) = resp.into_parts();
        let bs = BodyExt::collect(body)
            .await
            .map(|buf| buf.to_bytes())
            .map_err(|e| Error::unexpected("failed to read response body").with_source(e))?;
        Ok(http::Response::from_parts(parts, bs))
    }
}
