use crate::constants::*;
use crate::list::{parse_list_page, ListedObject};
use crate::signature::{canonical_query_string, canonical_uri};
use crate::{Config, Credentials, RequestSigner};
use bytes::Bytes;
use http::{header, HeaderValue, Method, Request, Response, StatusCode};
use log::debug;
use reqs3_core::time::{self, DateTime};
use reqs3_core::{Context, Error, Result, SigningCredential};

/// Client that talks to one S3 bucket.
///
/// Every operation first checks [`Credentials::is_ready`]. A client that is
/// not ready answers `None` without touching the network.
///
/// The client holds no mutable state, so one instance can be shared by many
/// callers. Pages of a listing are always fetched one after another.
#[derive(Debug, Clone)]
pub struct Client {
    ctx: Context,
    signer: RequestSigner,
    time: Option<DateTime>,
}

impl Client {
    /// Create a client for `credentials` on the default storage domain.
    pub fn new(ctx: Context, credentials: Credentials) -> Self {
        Self {
            ctx,
            signer: RequestSigner::new(credentials, S3_V4.storage_domain),
            time: None,
        }
    }

    /// Create a client from a loaded [`Config`].
    pub fn from_config(ctx: Context, config: &Config) -> Self {
        Self {
            ctx,
            signer: RequestSigner::new(Credentials::from(config), config.endpoint_domain()),
            time: None,
        }
    }

    /// Target an S3 compatible provider under `domain` instead of `amazonaws.com`.
    pub fn with_endpoint_domain(mut self, domain: &str) -> Self {
        self.signer = RequestSigner::new(self.signer.credentials().clone(), domain);
        self
    }

    /// Specify the signing time.
    ///
    /// # Note
    ///
    /// We should always take current time to sign requests.
    /// Only use this function for testing.
    #[doc(hidden)]
    pub fn with_time(mut self, time: DateTime) -> Self {
        self.time = Some(time);
        self
    }

    /// Whether the credentials are complete enough to issue requests.
    pub fn is_ready(&self) -> bool {
        self.signer.credentials().is_valid()
    }

    /// Host of the bucket.
    pub fn host(&self) -> String {
        self.signer.host()
    }

    fn now(&self) -> DateTime {
        self.time.unwrap_or_else(time::now)
    }

    /// Fetch the object stored under `key`.
    ///
    /// The response is returned whatever its status.
    pub async fn download(&self, key: &str) -> Result<Option<Response<Bytes>>> {
        if !self.is_ready() {
            return Ok(None);
        }

        let req = self.build_request(Method::GET, key, Bytes::new(), None, &[])?;
        self.ctx.http_send(req).await.map(Some)
    }

    /// Store `body` under `key` with the given content type.
    pub async fn upload(
        &self,
        key: &str,
        body: impl Into<Bytes>,
        content_type: &str,
    ) -> Result<Option<Response<Bytes>>> {
        if !self.is_ready() {
            return Ok(None);
        }

        let req = self.build_request(Method::PUT, key, body.into(), Some(content_type), &[])?;
        self.ctx.http_send(req).await.map(Some)
    }

    /// Store UTF-8 text under `key` as `text/plain`.
    pub async fn upload_text(&self, key: &str, text: &str) -> Result<Option<Response<Bytes>>> {
        self.upload(key, Bytes::copy_from_slice(text.as_bytes()), "text/plain")
            .await
    }

    /// Delete the object stored under `key`.
    pub async fn delete(&self, key: &str) -> Result<Option<Response<Bytes>>> {
        if !self.is_ready() {
            return Ok(None);
        }

        let req = self.build_request(Method::DELETE, key, Bytes::new(), None, &[])?;
        self.ctx.http_send(req).await.map(Some)
    }

    /// List every object whose key starts with `prefix`.
    ///
    /// Pages are followed until the service reports the listing is complete.
    /// Objects keep the order the service returned them in. Any page that
    /// does not answer `200 OK` aborts the whole listing and nothing
    /// collected so far is returned.
    pub async fn list(&self, prefix: &str) -> Result<Option<Vec<ListedObject>>> {
        if !self.is_ready() {
            return Ok(None);
        }

        let mut objects = Vec::new();
        let mut continuation_token: Option<String> = None;
        let mut page = 1;

        loop {
            let mut query = vec![
                (LIST_TYPE.to_string(), S3_V4.list_type.to_string()),
                (PREFIX.to_string(), prefix.to_string()),
            ];
            if let Some(token) = &continuation_token {
                query.push((CONTINUATION_TOKEN.to_string(), token.clone()));
            }

            debug!("listing objects with prefix {prefix:?}, page {page}");
            let req = self.build_request(Method::GET, "", Bytes::new(), None, &query)?;
            let resp = self.ctx.http_send_as_string(req).await?;

            if resp.status() != StatusCode::OK {
                return Err(Error::unexpected_status(resp.status(), resp.body())
                    .with_context(format!("prefix: {prefix}"))
                    .with_context(format!("page: {page}")));
            }

            let list = parse_list_page(resp.body())?;
            objects.extend(list.objects);

            if !list.is_truncated {
                break;
            }
            match list.next_continuation_token {
                Some(token) => continuation_token = Some(token),
                None => {
                    return Err(Error::unexpected(
                        "list objects response is truncated without continuation token",
                    )
                    .with_context(format!("prefix: {prefix}"))
                    .with_context(format!("page: {page}")))
                }
            }
            page += 1;
        }

        Ok(Some(objects))
    }

    /// Build a presigned GET url for `key` valid for `expires_in` seconds.
    pub fn presigned_url(&self, key: &str, expires_in: u64) -> Option<String> {
        if !self.is_ready() {
            return None;
        }

        Some(self.signer.presign(key, expires_in, self.now()))
    }

    fn build_request(
        &self,
        method: Method,
        key: &str,
        body: Bytes,
        content_type: Option<&str>,
        query: &[(String, String)],
    ) -> Result<Request<Bytes>> {
        let headers =
            self.signer
                .sign_headers(&method, key, &body, content_type, query, self.now())?;

        let mut uri = format!("https://{}{}", self.signer.host(), canonical_uri(key));
        if !query.is_empty() {
            uri.push('?');
            uri.push_str(&canonical_query_string(query));
        }

        let mut req = Request::builder().method(method).uri(uri);
        if let Some(ct) = content_type {
            req = req
                .header(header::CONTENT_TYPE, HeaderValue::from_str(ct)?)
                .header(header::CONTENT_LENGTH, body.len());
        }
        let mut req = req.body(body)?;
        req.headers_mut().extend(headers);

        Ok(req)
    }
}
