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

use percent_encoding::AsciiSet;
use percent_encoding::NON_ALPHANUMERIC;

// Headers used in s3 requests.
pub const X_AMZ_CONTENT_SHA_256: &str = "x-amz-content-sha256";
pub const X_AMZ_DATE: &str = "x-amz-date";

// Query parameters used by presigned urls.
pub const X_AMZ_ALGORITHM: &str = "X-Amz-Algorithm";
pub const X_AMZ_CREDENTIAL: &str = "X-Amz-Credential";
pub const X_AMZ_DATE_QUERY: &str = "X-Amz-Date";
pub const X_AMZ_EXPIRES: &str = "X-Amz-Expires";
pub const X_AMZ_SIGNED_HEADERS: &str = "X-Amz-SignedHeaders";
pub const X_AMZ_CONTENT_SHA_256_QUERY: &str = "X-Amz-Content-Sha256";
pub const X_AMZ_SIGNATURE: &str = "X-Amz-Signature";

// Query parameters used by list objects v2.
pub const LIST_TYPE: &str = "list-type";
pub const PREFIX: &str = "prefix";
pub const CONTINUATION_TOKEN: &str = "continuation-token";

// Env values used to build config.
pub const AWS_ACCESS_KEY_ID: &str = "AWS_ACCESS_KEY_ID";
pub const AWS_SECRET_ACCESS_KEY: &str = "AWS_SECRET_ACCESS_KEY";
pub const AWS_REGION: &str = "AWS_REGION";
pub const AWS_DEFAULT_REGION: &str = "AWS_DEFAULT_REGION";
pub const REQS3_BUCKET: &str = "REQS3_BUCKET";
pub const REQS3_ENDPOINT_DOMAIN: &str = "REQS3_ENDPOINT_DOMAIN";

/// Hex encoded SHA256 of the empty string, the payload hash of every
/// bodyless request.
pub const EMPTY_STRING_SHA256: &str =
    "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855";

/// AsciiSet for [AWS UriEncode](https://docs.aws.amazon.com/AmazonS3/latest/API/sig-v4-header-based-auth.html)
///
/// - URI encode every byte except the unreserved characters: 'A'-'Z', 'a'-'z', '0'-'9', '-', '.', '_', and '~'.
/// - `/` is kept as-is because object keys are used as paths.
pub static AWS_URI_ENCODE_SET: AsciiSet = NON_ALPHANUMERIC
    .remove(b'/')
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

/// AsciiSet for [AWS UriEncode](https://docs.aws.amazon.com/AmazonS3/latest/API/sig-v4-header-based-auth.html)
///
/// But used in query.
pub static AWS_QUERY_ENCODE_SET: AsciiSet = NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

/// The fixed literals of one signing protocol.
///
/// Every signing routine reads its literals from a profile instead of
/// scattered globals. [`S3_V4`] is the only profile in use.
#[derive(Debug)]
pub struct SigningProfile {
    /// Algorithm name, first line of the string to sign.
    pub algorithm: &'static str,
    /// Service name inside the credential scope.
    pub service: &'static str,
    /// Terminator of the credential scope.
    pub request_type: &'static str,
    /// Payload hash used when the body is not part of the signature.
    pub unsigned_payload: &'static str,
    /// Value of the `list-type` query parameter.
    pub list_type: &'static str,
    /// Storage domain used when none is configured.
    pub storage_domain: &'static str,
    /// Characters percent-encoded in query names and values.
    pub query_encode_set: &'static AsciiSet,
    /// Characters percent-encoded in object key paths.
    pub path_encode_set: &'static AsciiSet,
}

/// AWS Signature Version 4 for S3.
pub static S3_V4: SigningProfile = SigningProfile {
    algorithm: "AWS4-HMAC-SHA256",
    service: "s3",
    request_type: "aws4_request",
    unsigned_payload: "UNSIGNED-PAYLOAD",
    list_type: "2",
    storage_domain: "amazonaws.com",
    query_encode_set: &AWS_QUERY_ENCODE_SET,
    path_encode_set: &AWS_URI_ENCODE_SET,
};
