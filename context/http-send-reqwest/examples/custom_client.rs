use anyhow::Result;
use bytes::Bytes;
use reqs3_core::Context;
use reqs3_http_send_reqwest::ReqwestHttpSend;
use reqwest::Client;
use std::time::Duration;

#[tokio::main]
async fn main() -> Result<()> {
    // Timeouts belong to the transport, not to the S3 client.
    let client = Client::builder()
        .timeout(Duration::from_secs(30))
        .pool_max_idle_per_host(10)
        .user_agent("reqs3-example/1.0")
        .build()?;

    let ctx = Context::new().with_http_send(ReqwestHttpSend::new(client));

    let test_url = "https://httpbin.org/get";
    println!("Testing HTTP client with GET {test_url}");

    let req = http::Request::builder()
        .method("GET")
        .uri(test_url)
        .body(Bytes::new())?;

    match ctx.http_send_as_string(req).await {
        Ok(resp) => {
            println!("Response status: {}", resp.status());
            println!("{}", resp.body());
        }
        Err(e) => eprintln!("Request failed: {e}"),
    }

    Ok(())
}
