use reqwest::Url;

use crate::error::GatewayError;

pub mod otp;
pub mod resources;

/// Append percent-encoded path segments to a service base URL.
fn endpoint(base: &Url, segments: &[&str]) -> Result<Url, GatewayError> {
    let mut url = base.clone();
    url.path_segments_mut()
        .map_err(|()| anyhow::anyhow!("service url {base} cannot carry a path"))?
        .pop_if_empty()
        .extend(segments);
    Ok(url)
}
