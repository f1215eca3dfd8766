mod list;
mod objects;

use chrono::{TimeZone, Utc};
use reqs3_core::{Context, HttpSend};
use reqs3_s3::{Client, Credentials};

/// Client with fixed credentials and signing time on top of `http`.
pub fn client_with(http: impl HttpSend) -> Client {
    let _ = env_logger::builder().is_test(true).try_init();

    Client::new(
        Context::new().with_http_send(http),
        Credentials::new("theKey", "theSecret", "theRegion", "theBucket"),
    )
    .with_time(Utc.with_ymd_and_hms(2025, 12, 1, 12, 15, 43).unwrap())
}
