use super::client_with;
use crate::mock::MockHttpSend;
use anyhow::Result;
use http::{header, StatusCode};
use pretty_assertions::assert_eq;
use reqs3_core::ErrorKind;

const FIRST_PAGE: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<ListBucketResult xmlns="http://s3.amazonaws.com/doc/2006-03-01/">
    <Name>theBucket</Name>
    <Prefix>test</Prefix>
    <IsTruncated>true</IsTruncated>
    <NextContinuationToken>token123</NextContinuationToken>
    <Contents>
        <Key>file1.txt</Key>
        <Size>1024</Size>
        <LastModified>2025-12-01T12:16:12.123Z</LastModified>
    </Contents>
    <Contents>
        <Key>file2.txt</Key>
        <Size>2048</Size>
        <LastModified>2025-12-02T13:07:41.456Z</LastModified>
    </Contents>
</ListBucketResult>"#;

const SECOND_PAGE: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<ListBucketResult xmlns="http://s3.amazonaws.com/doc/2006-03-01/">
    <Name>theBucket</Name>
    <Prefix>test</Prefix>
    <IsTruncated>false</IsTruncated>
    <Contents>
        <Key>file3.txt</Key>
        <Size>1750</Size>
        <LastModified>2025-12-02T13:23:11.789Z</LastModified>
    </Contents>
    <Contents>
        <Key>file4.txt</Key>
        <Comment>invalid key</Comment>
    </Contents>
</ListBucketResult>"#;

#[tokio::test]
async fn test_list_follows_continuation_token() -> Result<()> {
    let http = MockHttpSend::new();
    http.push_response(StatusCode::OK, FIRST_PAGE)
        .push_response(StatusCode::OK, SECOND_PAGE);

    let objects = client_with(http.clone())
        .list("test")
        .await?
        .expect("client must be ready");

    let keys = objects.iter().map(|o| o.key.as_str()).collect::<Vec<_>>();
    assert_eq!(keys, vec!["file1.txt", "file2.txt", "file3.txt"]);
    assert_eq!(
        objects.iter().map(|o| o.size).collect::<Vec<_>>(),
        vec![1024, 2048, 1750]
    );

    let requests = http.requests();
    assert_eq!(requests.len(), 2);

    let first = &requests[0];
    assert_eq!(
        first.uri.to_string(),
        "https://theBucket.s3.theRegion.amazonaws.com/?list-type=2&prefix=test"
    );
    assert_eq!(first.query_param("continuation-token"), None);
    assert!(first.headers[header::AUTHORIZATION]
        .to_str()?
        .ends_with("Signature=e876da9283e504d7129feb71cb843281101a1ed306c542cb736ce489680b500c"));

    let second = &requests[1];
    assert_eq!(second.query_param("list-type").as_deref(), Some("2"));
    assert_eq!(second.query_param("prefix").as_deref(), Some("test"));
    assert_eq!(
        second.query_param("continuation-token").as_deref(),
        Some("token123")
    );
    assert!(second.headers[header::AUTHORIZATION]
        .to_str()?
        .ends_with("Signature=0df00c232596c0b667b4453e3e5f35620f49204cc99764c92910aee706cbe34b"));
    Ok(())
}

#[tokio::test]
async fn test_list_single_page() -> Result<()> {
    let http = MockHttpSend::new();
    http.push_response(StatusCode::OK, SECOND_PAGE);

    let objects = client_with(http.clone())
        .list("test")
        .await?
        .expect("client must be ready");

    assert_eq!(objects.len(), 1);
    assert_eq!(objects[0].key, "file3.txt");
    assert_eq!(http.requests().len(), 1);
    Ok(())
}

#[tokio::test]
async fn test_list_aborts_on_error_status() -> Result<()> {
    let http = MockHttpSend::new();
    http.push_response(StatusCode::OK, FIRST_PAGE)
        .push_response(StatusCode::NOT_FOUND, "Access Denied");

    let err = client_with(http.clone())
        .list("test")
        .await
        .expect_err("listing must fail");

    assert_eq!(err.kind(), ErrorKind::UnexpectedStatus);
    assert_eq!(err.status(), Some(StatusCode::NOT_FOUND));
    assert_eq!(
        err.to_string(),
        "S3 response status code 404 with body Access Denied"
    );
    assert_eq!(http.requests().len(), 2);
    Ok(())
}

#[tokio::test]
async fn test_list_fails_on_first_page() -> Result<()> {
    let http = MockHttpSend::new();
    http.push_response(StatusCode::FORBIDDEN, "SignatureDoesNotMatch");

    let err = client_with(http.clone())
        .list("")
        .await
        .expect_err("listing must fail");

    assert_eq!(err.status(), Some(StatusCode::FORBIDDEN));
    assert_eq!(http.requests().len(), 1);
    assert_eq!(http.requests()[0].query_param("prefix").as_deref(), Some(""));
    Ok(())
}

#[tokio::test]
async fn test_list_truncated_without_token() -> Result<()> {
    let http = MockHttpSend::new();
    http.push_response(
        StatusCode::OK,
        "<ListBucketResult><IsTruncated>true</IsTruncated></ListBucketResult>",
    );

    let err = client_with(http.clone())
        .list("test")
        .await
        .expect_err("listing must fail");

    assert_eq!(err.kind(), ErrorKind::Unexpected);
    assert_eq!(http.requests().len(), 1);
    Ok(())
}

#[tokio::test]
async fn test_list_transport_error() {
    // Nothing queued, the transport fails.
    let http = MockHttpSend::new();

    let err = client_with(http)
        .list("test")
        .await
        .expect_err("listing must fail");

    assert_eq!(err.kind(), ErrorKind::Unexpected);
    assert!(err.status().is_none());
}

#[tokio::test]
async fn test_list_keeps_keys_verbatim() -> Result<()> {
    let http = MockHttpSend::new();
    http.push_response(
        StatusCode::OK,
        "<ListBucketResult>\
            <IsTruncated>true</IsTruncated>\
            <NextContinuationToken>a &amp; b</NextContinuationToken>\
            <Contents>\
                <Key>a &amp; b.txt</Key>\
                <Size>3</Size>\
                <LastModified>2025-12-01T12:16:12.123Z</LastModified>\
            </Contents>\
        </ListBucketResult>",
    )
    .push_response(
        StatusCode::OK,
        "<ListBucketResult>\
            <IsTruncated>false</IsTruncated>\
            <Contents>\
                <Key>  padded key.txt </Key>\
                <Size>4</Size>\
                <LastModified>2025-12-01T12:16:12.123Z</LastModified>\
            </Contents>\
        </ListBucketResult>",
    );

    let objects = client_with(http.clone())
        .list("")
        .await?
        .expect("client must be ready");

    let keys = objects.iter().map(|o| o.key.as_str()).collect::<Vec<_>>();
    assert_eq!(keys, vec!["a & b.txt", "  padded key.txt "]);
    assert_eq!(
        http.requests()[1].query_param("continuation-token").as_deref(),
        Some("a%20%26%20b")
    );
    Ok(())
}

#[tokio::test]
async fn test_list_interleaved_page() -> Result<()> {
    let http = MockHttpSend::new();
    http.push_response(
        StatusCode::OK,
        "<ListBucketResult>\
            <Contents>\
                <Key>a</Key><Size>1</Size><LastModified>2025-12-01T12:16:12Z</LastModified>\
            </Contents>\
            <KeyCount>2</KeyCount>\
            <Contents>\
                <Key>b</Key><Size>2</Size><LastModified>2025-12-01T12:16:12Z</LastModified>\
            </Contents>\
            <IsTruncated>false</IsTruncated>\
        </ListBucketResult>",
    );

    let objects = client_with(http.clone())
        .list("test")
        .await?
        .expect("client must be ready");

    let keys = objects.iter().map(|o| o.key.as_str()).collect::<Vec<_>>();
    assert_eq!(keys, vec!["a", "b"]);
    assert_eq!(http.requests().len(), 1);
    Ok(())
}
