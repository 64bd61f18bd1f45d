// src/fetch/mod.rs

use anyhow::{Context, Result};
use reqwest::Client;
use tracing::debug;
use url::Url;

/// GET `url` and return the body as UTF-8 text.
///
/// Single attempt, no timeout. Non-2xx responses are errors.
#[tracing::instrument(level = "info", skip(client))]
pub async fn download_text(client: &Client, url: &str) -> Result<String> {
    let url = Url::parse(url).with_context(|| format!("parsing URL {:?}", url))?;

    let resp = client
        .get(url.clone())
        .send()
        .await
        .with_context(|| format!("GET {}", url))?
        .error_for_status()?;
    let bytes = resp
        .bytes()
        .await
        .with_context(|| format!("reading body from {}", url))?;

    let text = String::from_utf8(bytes.to_vec())
        .with_context(|| format!("decoding body from {} as UTF-8", url))?;
    debug!(bytes = text.len(), "downloaded");
    Ok(text)
}
