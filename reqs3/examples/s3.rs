use anyhow::Result;
use reqs3::default_client;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let client = default_client();
    if !client.is_ready() {
        eprintln!("set AWS_ACCESS_KEY_ID, AWS_SECRET_ACCESS_KEY, AWS_REGION and REQS3_BUCKET first");
        return Ok(());
    }
    println!("using {}", client.host());

    let resp = client
        .upload_text("reqs3-example/hello.txt", "Hello, World!")
        .await?
        .expect("client is ready");
    println!("upload: {}", resp.status());

    for object in client.list("reqs3-example/").await?.unwrap_or_default() {
        println!("{} {} {}", object.last_modified, object.size, object.key);
    }

    if let Some(url) = client.presigned_url("reqs3-example/hello.txt", 3600) {
        println!("presigned: {url}");
    }

    let resp = client
        .delete("reqs3-example/hello.txt")
        .await?
        .expect("client is ready");
    println!("delete: {}", resp.status());

    Ok(())
}
