// Licensed to the Apache Software Foundation (ASF) under one
// or more contributor license agreements.  See the NOTICE file
// distributed with this work for additional information
// regarding copyright ownership.  The ASF licenses this file
// to you under the Apache License, Version 2.0 (the
// "License"); you may not use this file except in compliance
// with the License.  You may obtain a copy of the License at
//
//   http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing,
// software distributed under the License is distributed on an
// "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
// KIND, either express or implied.  See the License for the
// specific language governing permissions and limitations
// under the License.

use crate::constants::{S3_V4, X_AMZ_CONTENT_SHA_256, X_AMZ_DATE};
use crate::signature::{
    canonical_headers, canonical_query_string, canonical_request, canonical_uri, sign,
    signed_headers,
};
use crate::Credentials;
use http::{header, HeaderMap, HeaderValue, Method};
use reqs3_core::hash::hex_sha256;
use reqs3_core::time::{format_iso8601, DateTime};
use reqs3_core::Result;

/// RequestSigner that implement AWS SigV4 for one bucket.
///
/// - [Signature Version 4 signing process](https://docs.aws.amazon.com/general/latest/gr/signature-version-4.html)
///
/// Header based signing lives here, query based signing lives in `presign`.
#[derive(Debug, Clone)]
pub struct RequestSigner {
    credentials: Credentials,
    endpoint_domain: String,
}

/// Everything derived from one request before it is signed.
pub(crate) struct CanonicalParts {
    pub host: String,
    pub amz_date: String,
    pub payload_hash: String,
    pub signed_headers: String,
    pub request: String,
}

impl RequestSigner {
    /// Create a new signer for the bucket described by `credentials`.
    pub fn new(credentials: Credentials, endpoint_domain: &str) -> Self {
        Self {
            credentials,
            endpoint_domain: endpoint_domain.to_string(),
        }
    }

    /// Credentials used by this signer.
    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    /// Virtual hosted style host: `{bucket}.s3.{region}.{domain}`.
    pub fn host(&self) -> String {
        format!(
            "{}.s3.{}.{}",
            self.credentials.bucket(),
            self.credentials.region(),
            self.endpoint_domain
        )
    }

    pub(crate) fn canonicalize(
        &self,
        method: &Method,
        key: &str,
        body: &[u8],
        content_type: Option<&str>,
        query: &[(String, String)],
        now: DateTime,
    ) -> CanonicalParts {
        let host = self.host();
        let amz_date = format_iso8601(now);
        // Bodyless requests hash to SHA256("").
        let payload_hash = hex_sha256(body);

        // Alphabetical by name, content-type only takes part for uploads.
        let mut headers: Vec<(&str, &str)> = Vec::with_capacity(4);
        if let Some(ct) = content_type.filter(|v| !v.is_empty()) {
            headers.push(("content-type", ct));
        }
        headers.push(("host", &host));
        headers.push((X_AMZ_CONTENT_SHA_256, &payload_hash));
        headers.push((X_AMZ_DATE, &amz_date));

        let signed_headers = signed_headers(&headers);
        let request = canonical_request(
            method.as_str(),
            &canonical_uri(key),
            &canonical_query_string(query),
            &canonical_headers(&headers),
            &signed_headers,
            &payload_hash,
        );

        CanonicalParts {
            host,
            amz_date,
            payload_hash,
            signed_headers,
            request,
        }
    }

    /// Build the header set of a direct request.
    ///
    /// The returned map holds `Host`, `x-amz-date`, `x-amz-content-sha256`
    /// and `Authorization`. `content_type` is signed only when it is given
    /// and not empty.
    pub fn sign_headers(
        &self,
        method: &Method,
        key: &str,
        body: &[u8],
        content_type: Option<&str>,
        query: &[(String, String)],
        now: DateTime,
    ) -> Result<HeaderMap> {
        let parts = self.canonicalize(method, key, body, content_type, query, now);

        let (scope, signature) = sign(
            self.credentials.secret_access_key(),
            self.credentials.region(),
            now,
            &parts.request,
        );

        let mut authorization = HeaderValue::from_str(&format!(
            "{} Credential={}/{}, SignedHeaders={}, Signature={}",
            S3_V4.algorithm,
            self.credentials.access_key_id(),
            scope,
            parts.signed_headers,
            signature
        ))?;
        authorization.set_sensitive(true);

        let mut headers = HeaderMap::with_capacity(4);
        headers.insert(header::HOST, HeaderValue::from_str(&parts.host)?);
        headers.insert(X_AMZ_DATE, HeaderValue::from_str(&parts.amz_date)?);
        headers.insert(
            X_AMZ_CONTENT_SHA_256,
            HeaderValue::from_str(&parts.payload_hash)?,
        );
        headers.insert(header::AUTHORIZATION, authorization);

        Ok(headers)
    }
}
