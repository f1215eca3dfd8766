use crate::constants::*;
use crate::signature::{canonical_query_string, canonical_request, canonical_uri, sign};
use crate::RequestSigner;
use reqs3_core::time::{format_date, format_iso8601, DateTime};

impl RequestSigner {
    /// Build a presigned GET url that expires after `expires_in` seconds.
    ///
    /// The signature travels in the query string, so fetching the url needs
    /// no header at all. Only `host` is signed and the payload is always
    /// `UNSIGNED-PAYLOAD`. `expires_in` is passed through as-is.
    pub fn presign(&self, key: &str, expires_in: u64, now: DateTime) -> String {
        let host = self.host();
        let cred = self.credentials();

        let mut query: Vec<(String, String)> = vec![
            (X_AMZ_ALGORITHM.into(), S3_V4.algorithm.into()),
            (
                X_AMZ_CREDENTIAL.into(),
                format!(
                    "{}/{}/{}/{}/{}",
                    cred.access_key_id(),
                    format_date(now),
                    cred.region(),
                    S3_V4.service,
                    S3_V4.request_type
                ),
            ),
            (X_AMZ_DATE_QUERY.into(), format_iso8601(now)),
            (X_AMZ_EXPIRES.into(), expires_in.to_string()),
            (X_AMZ_SIGNED_HEADERS.into(), "host".into()),
            (
                X_AMZ_CONTENT_SHA_256_QUERY.into(),
                S3_V4.unsigned_payload.into(),
            ),
        ];

        let uri = canonical_uri(key);
        let creq = canonical_request(
            "GET",
            &uri,
            &canonical_query_string(&query),
            &format!("host:{host}\n"),
            "host",
            S3_V4.unsigned_payload,
        );

        let (_, signature) = sign(cred.secret_access_key(), cred.region(), now, &creq);
        query.push((X_AMZ_SIGNATURE.into(), signature));

        format!("https://{host}{uri}?{}", canonical_query_string(&query))
    }
}
