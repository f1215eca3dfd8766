use super::client_with;
use crate::mock::{MockHttpSend, MockStore};
use anyhow::Result;
use bytes::Bytes;
use http::{header, Method, StatusCode};
use pretty_assertions::assert_eq;
use reqs3_core::{Context, ErrorKind};
use reqs3_s3::{Client, Credentials, EMPTY_STRING_SHA256};
use test_case::test_case;

#[tokio::test]
async fn test_upload_then_download() -> Result<()> {
    let store = MockStore::new();
    let client = client_with(store.clone());
    let content = Bytes::from_static(b"{\"hello\": \"world\"}");

    let resp = client
        .upload("dir/data file.json", content.clone(), "application/json")
        .await?
        .expect("client must be ready");
    assert_eq!(resp.status(), StatusCode::OK);
    assert!(store.contains("/dir/data%20file.json"));

    let resp = client
        .download("dir/data file.json")
        .await?
        .expect("client must be ready");
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(resp.body(), &content);
    Ok(())
}

#[tokio::test]
async fn test_upload_text_then_delete() -> Result<()> {
    let store = MockStore::new();
    let client = client_with(store.clone());

    client
        .upload_text("hello.txt", "Hello, World!")
        .await?
        .expect("client must be ready");
    let resp = client.download("hello.txt").await?.expect("client must be ready");
    assert_eq!(String::from_utf8(resp.body().to_vec())?, "Hello, World!");

    let resp = client.delete("hello.txt").await?.expect("client must be ready");
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);
    assert!(!store.contains("/hello.txt"));

    // Status codes other than success are handed back untouched.
    let resp = client.download("hello.txt").await?.expect("client must be ready");
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    Ok(())
}

#[tokio::test]
async fn test_upload_headers() -> Result<()> {
    let http = MockHttpSend::new();
    http.push_response(StatusCode::OK, "");

    client_with(http.clone())
        .upload_text("hello.txt", "Hello, World!")
        .await?;

    let requests = http.requests();
    assert_eq!(requests.len(), 1);

    let req = &requests[0];
    assert_eq!(req.method, Method::PUT);
    assert_eq!(
        req.uri.to_string(),
        "https://theBucket.s3.theRegion.amazonaws.com/hello.txt"
    );
    assert_eq!(req.headers[header::CONTENT_TYPE], "text/plain");
    assert_eq!(req.headers[header::CONTENT_LENGTH], "13");
    assert_eq!(req.headers[header::HOST], "theBucket.s3.theRegion.amazonaws.com");
    assert_eq!(req.headers["x-amz-date"], "20251201T121543Z");
    assert_eq!(
        req.headers["x-amz-content-sha256"],
        "dffd6021bb2bd5b0af676290809ec3a53191dd81c7f70a4b28688a362182986f"
    );
    assert_eq!(
        req.headers[header::AUTHORIZATION].to_str()?,
        "AWS4-HMAC-SHA256 Credential=theKey/20251201/theRegion/s3/aws4_request, \
         SignedHeaders=content-type;host;x-amz-content-sha256;x-amz-date, \
         Signature=7ce21183cfab22a37d59c888346f0cbb68c26703505bd710cbbf7384c9844ddf"
    );
    assert_eq!(req.body.as_ref(), b"Hello, World!");
    Ok(())
}

#[test_case(Method::GET; "download")]
#[test_case(Method::DELETE; "delete")]
#[tokio::test]
async fn test_bodyless_requests(method: Method) -> Result<()> {
    let http = MockHttpSend::new();
    http.push_response(StatusCode::OK, "");
    let client = client_with(http.clone());

    if method == Method::GET {
        client.download("file.txt").await?;
    } else {
        client.delete("file.txt").await?;
    }

    let req = &http.requests()[0];
    assert_eq!(req.method, method);
    assert_eq!(req.headers["x-amz-content-sha256"], EMPTY_STRING_SHA256);
    assert!(req.headers.get(header::CONTENT_TYPE).is_none());
    assert!(req.headers[header::AUTHORIZATION]
        .to_str()?
        .contains("SignedHeaders=host;x-amz-content-sha256;x-amz-date,"));
    assert!(req.body.is_empty());
    Ok(())
}

#[test_case("", "theSecret", "theRegion", "theBucket"; "missing_key")]
#[test_case("theKey", "", "theRegion", "theBucket"; "missing_secret")]
#[test_case("theKey", "theSecret", "", "theBucket"; "missing_region")]
#[test_case("theKey", "theSecret", "theRegion", ""; "missing_bucket")]
#[tokio::test]
async fn test_not_ready_makes_no_call(key: &str, secret: &str, region: &str, bucket: &str) -> Result<()> {
    let http = MockHttpSend::new();
    let client = Client::new(
        Context::new().with_http_send(http.clone()),
        Credentials::new(key, secret, region, bucket),
    );

    assert!(!client.is_ready());
    assert!(client.download("file.txt").await?.is_none());
    assert!(client.upload("file.txt", "content", "text/plain").await?.is_none());
    assert!(client.upload_text("file.txt", "content").await?.is_none());
    assert!(client.delete("file.txt").await?.is_none());
    assert!(client.list("").await?.is_none());
    assert!(client.presigned_url("file.txt", 3600).is_none());

    assert!(http.requests().is_empty());
    Ok(())
}

#[tokio::test]
async fn test_transport_error_propagates() {
    let client = Client::new(
        Context::new(),
        Credentials::new("theKey", "theSecret", "theRegion", "theBucket"),
    );

    let err = client
        .download("file.txt")
        .await
        .expect_err("no transport is configured");
    assert_eq!(err.kind(), ErrorKind::Unexpected);
}
