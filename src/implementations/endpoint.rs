use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, instrument};

use crate::structures::{Endpoint, Error};

impl Endpoint {
  /// Wraps a base url, making sure relative paths resolve beneath it.
  pub fn new(index: usize, mut base: url::Url) -> Self {
    if !base.path().ends_with('/') {
      let path = format!("{}/", base.path());
      base.set_path(&path);
    }
    Self {
      index,
      base: Arc::new(base),
    }
  }

  /// Url of a manifest path on this endpoint. `\` separators are treated as `/`.
  pub fn url_for(&self, path: &str) -> Result<url::Url, Error> {
    let mut url = (*self.base).clone();
    url.path_segments_mut()
      .map_err(|_| Error::InvalidUrl(url::ParseError::RelativeUrlWithCannotBeABaseBase))?
      .pop_if_empty()
      .extend(path.split(|c| c == '/' || c == '\\').filter(|segment| !segment.is_empty()));
    Ok(url)
  }

  /// HEAD request against the base url, only `200 OK` counts as reachable.
  #[instrument(level = "debug", skip(client), fields(endpoint = %self.base))]
  pub(crate) async fn probe(&self, client: &reqwest::Client, timeout: Duration) -> bool {
    match client.head(self.base.as_str()).timeout(timeout).send().await {
      Ok(response) if response.status() == reqwest::StatusCode::OK => true,
      Ok(response) => {
        debug!("{} answered the probe with {}", self.base, response.status());
        false
      },
      Err(e) => {
        debug!("{} did not answer the probe: {}", self.base, e);
        false
      }
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn base_without_trailing_slash_keeps_its_last_segment() {
    let endpoint = Endpoint::new(0, "http://cdn0.example.org/game".parse().unwrap());
    assert_eq!(endpoint.base.as_str(), "http://cdn0.example.org/game/");
    let url = endpoint.url_for("data/a.bin").unwrap();
    assert_eq!(url.as_str(), "http://cdn0.example.org/game/data/a.bin");
  }

  #[test]
  fn backslashes_become_path_segments() {
    let endpoint = Endpoint::new(3, "http://cdn3.example.org/".parse().unwrap());
    let url = endpoint.url_for("Binaries\\Win64\\game.exe").unwrap();
    assert_eq!(url.as_str(), "http://cdn3.example.org/Binaries/Win64/game.exe");
  }

  #[test]
  fn segments_are_percent_encoded() {
    let endpoint = Endpoint::new(0, "http://cdn0.example.org/".parse().unwrap());
    let url = endpoint.url_for("cfg/my file.ini").unwrap();
    assert_eq!(url.as_str(), "http://cdn0.example.org/cfg/my%20file.ini");
  }
}
