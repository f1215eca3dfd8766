
use chrono::{TimeZone, Utc};
use reqs3_core::time::DateTime;
use reqs3_s3::{Credentials, RequestSigner};

pub fn test_signer() -> RequestSigner {
    RequestSigner::new(
        Credentials::new("theKey", "theSecret", "theRegion", "theBucket"),
        "amazonaws.com",
    )
}

pub fn test_time(hour: u32, min: u32, sec: u32) -> DateTime {
    Utc.with_ymd_and_hms(2025, 12, 1, hour, min, sec).unwrap()
}
