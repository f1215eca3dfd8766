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

//! Pure functions of [Signature Version 4](https://docs.aws.amazon.com/general/latest/gr/signature-version-4.html).
//!
//! Nothing in here performs I/O or reads the clock: the same inputs always
//! produce the same signature.

use crate::constants::S3_V4;
use log::debug;
use percent_encoding::utf8_percent_encode;
use reqs3_core::hash::{hex_hmac_sha256, hex_sha256, hmac_sha256};
use reqs3_core::time::{format_date, format_iso8601, DateTime};

/// Build the canonical request.
///
/// ```shell
/// GET
/// /path/to/object
/// list-type=2&prefix=abc
/// host:bucket.s3.region.amazonaws.com
/// x-amz-content-sha256:e3b0c442...
/// x-amz-date:20220313T072004Z
///
/// host;x-amz-content-sha256;x-amz-date
/// e3b0c442...
/// ```
///
/// `canonical_headers` must already end with a newline, see [`canonical_headers`].
pub fn canonical_request(
    method: &str,
    canonical_uri: &str,
    canonical_query: &str,
    canonical_headers: &str,
    signed_headers: &str,
    payload_hash: &str,
) -> String {
    format!(
        "{method}\n{canonical_uri}\n{canonical_query}\n{canonical_headers}\n{signed_headers}\n{payload_hash}"
    )
}

/// Percent-encode an object key into an absolute path, keeping `/`.
pub fn canonical_uri(key: &str) -> String {
    format!("/{}", utf8_percent_encode(key, S3_V4.path_encode_set))
}

/// Convert query parameters into the canonical query string.
///
/// Names and values are percent-encoded with everything outside
/// `[A-Za-z0-9-._~]` escaped, entries are sorted by name and joined with `&`.
/// No parameters yields an empty string.
///
/// ```shell
/// [(prefix, a b), (list-type, 2)] => "list-type=2&prefix=a%20b"
/// ```
pub fn canonical_query_string(query: &[(String, String)]) -> String {
    let mut query = query.iter().collect::<Vec<_>>();
    // Sort via param name.
    query.sort_by(|(l, _), (r, _)| l.cmp(r));

    query
        .into_iter()
        .map(|(k, v)| {
            format!(
                "{}={}",
                utf8_percent_encode(k, S3_V4.query_encode_set),
                utf8_percent_encode(v, S3_V4.query_encode_set)
            )
        })
        .collect::<Vec<_>>()
        .join("&")
}

/// Convert sorted headers into the canonical headers block.
///
/// Every header becomes a lower-cased `name:value` line terminated by `\n`.
/// Callers pass headers already in alphabetical order.
pub fn canonical_headers(headers: &[(&str, &str)]) -> String {
    let mut s = String::with_capacity(128);
    for (k, v) in headers {
        s.push_str(&k.to_lowercase());
        s.push(':');
        s.push_str(v);
        s.push('\n');
    }
    s
}

/// Join header names with `;`.
pub fn signed_headers(headers: &[(&str, &str)]) -> String {
    headers
        .iter()
        .map(|(k, _)| k.to_lowercase())
        .collect::<Vec<_>>()
        .join(";")
}

/// Scope: "20220313/<region>/s3/aws4_request"
pub fn credential_scope(time: DateTime, region: &str) -> String {
    format!(
        "{}/{}/{}/{}",
        format_date(time),
        region,
        S3_V4.service,
        S3_V4.request_type
    )
}

/// StringToSign:
///
/// ```shell
/// AWS4-HMAC-SHA256
/// 20220313T072004Z
/// 20220313/<region>/s3/aws4_request
/// <hashed_canonical_request>
/// ```
pub fn string_to_sign(time: DateTime, scope: &str, canonical_request: &str) -> String {
    format!(
        "{}\n{}\n{}\n{}",
        S3_V4.algorithm,
        format_iso8601(time),
        scope,
        hex_sha256(canonical_request.as_bytes())
    )
}

/// Derive the signing key through the four step HMAC chain.
pub fn generate_signing_key(secret: &str, time: DateTime, region: &str, service: &str) -> Vec<u8> {
    // Sign secret
    let secret = format!("AWS4{secret}");
    // Sign date
    let sign_date = hmac_sha256(secret.as_bytes(), format_date(time).as_bytes());
    // Sign region
    let sign_region = hmac_sha256(sign_date.as_slice(), region.as_bytes());
    // Sign service
    let sign_service = hmac_sha256(sign_region.as_slice(), service.as_bytes());
    // Sign request
    hmac_sha256(sign_service.as_slice(), S3_V4.request_type.as_bytes())
}

/// Compute the scope and the hex signature of a canonical request.
pub fn sign(
    secret: &str,
    region: &str,
    time: DateTime,
    canonical_request: &str,
) -> (String, String) {
    let scope = credential_scope(time, region);
    debug!("calculated scope: {scope}");

    let string_to_sign = string_to_sign(time, &scope, canonical_request);
    debug!("calculated string to sign: {string_to_sign}");

    let signing_key = generate_signing_key(secret, time, region, S3_V4.service);
    let signature = hex_hmac_sha256(&signing_key, string_to_sign.as_bytes());

    (scope, signature)
}
