// src/net.rs
//
// Blocking HTTPS GET for the dataset source. One fetch per process in
// practice (see store.rs); no retry policy — a failure fails the render.

use std::error::Error;
use std::time::Duration;

const TIMEOUT_SECS: u64 = 30;

pub fn http_get(url: &str) -> Result<String, Box<dyn Error>> {
    let client = reqwest::blocking::Client::builder()
        .timeout(Duration::from_secs(TIMEOUT_SECS))
        .user_agent("otis_dash/0.1")
        .build()?;

    let resp = client.get(url).send()?;
    let status = resp.status();
    if !status.is_success() {
        return Err(format!("HTTP error: {} {}", status, url).into());
    }
    Ok(resp.text()?)
}
