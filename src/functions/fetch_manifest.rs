use tracing::{info, instrument};

use crate::structures::{Endpoint, Error, Manifest};

/// Downloads and decodes the manifest from `endpoint`. There is no failover:
/// any failure here ends the run.
#[instrument(skip(client, endpoint), fields(endpoint = %endpoint.base))]
pub(crate) async fn fetch_manifest(client: &reqwest::Client, endpoint: &Endpoint, manifest_name: &str) -> Result<Manifest, Error> {
  let url = endpoint.url_for(manifest_name)?;
  info!("Downloading manifest from {}", url);
  let response = client.get(url.clone()).send().await?;
  if !response.status().is_success() {
    return Err(Error::InvalidStatus(url.to_string(), response.status()));
  }
  let data = response.bytes().await?;
  info!("Decoding manifest of {} bytes", data.len());
  Manifest::decode(data.to_vec())
}
