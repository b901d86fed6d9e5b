use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::functions::ignore_progress;
use crate::patcher::Patcher;
use crate::structures::{Error, PatcherConfig, Progress, ProgressCallback};
use crate::traits::ConfigValue;

pub const DEFAULT_MANIFEST_NAME: &str = "version.bin";
pub const DEFAULT_PROBE_TIMEOUT: Duration = Duration::from_secs(10);

pub struct PatcherBuilder {
  pub(crate) install_location: Option<PathBuf>,
  pub(crate) endpoints: Vec<String>,
  pub(crate) manifest_name: String,
  pub(crate) worker_count: Option<usize>,
  pub(crate) probe_timeout: Duration,
  pub(crate) user_agent: String,
  pub(crate) progress_callback: Option<ProgressCallback>,
}

impl PatcherBuilder {
  pub fn new() -> Self {
    Self {
      install_location: None,
      endpoints: Vec::new(),
      manifest_name: DEFAULT_MANIFEST_NAME.to_string(),
      worker_count: None,
      probe_timeout: DEFAULT_PROBE_TIMEOUT,
      user_agent: format!("cdn-patcher ({})", env!("CARGO_PKG_VERSION")),
      progress_callback: None,
    }
  }

  /// Reads a JSON configuration file, see `apply_json` for the accepted keys.
  pub fn from_json_file(path: &Path) -> Result<Self, Error> {
    let text = std::fs::read_to_string(path)?;
    let mut builder = Self::new();
    builder.apply_json(&text)?;
    Ok(builder)
  }

  /// Applies `install_directory`, `endpoints`, `manifest_name`, `workers`,
  /// `probe_timeout_secs` and `user_agent` from a JSON object. Absent keys keep their value.
  pub fn apply_json(&mut self, text: &str) -> Result<&mut Self, Error> {
    let parsed = json::parse(text)?;
    if !parsed.is_object() {
      return Err(Error::InvalidConfig("configuration should be a JSON object".to_string()));
    }
    if let Some(install_location) = parsed.optional_string("install_directory")? {
      self.install_location = Some(PathBuf::from(install_location));
    }
    if let Some(endpoints) = parsed.optional_string_list("endpoints")? {
      self.endpoints = endpoints;
    }
    if let Some(manifest_name) = parsed.optional_string("manifest_name")? {
      self.manifest_name = manifest_name;
    }
    if let Some(workers) = parsed.optional_u64("workers")? {
      self.worker_count = Some(workers as usize);
    }
    if let Some(seconds) = parsed.optional_u64("probe_timeout_secs")? {
      self.probe_timeout = Duration::from_secs(seconds);
    }
    if let Some(user_agent) = parsed.optional_string("user_agent")? {
      self.user_agent = user_agent;
    }
    Ok(self)
  }

  pub fn set_install_location(&mut self, install_location: PathBuf) -> &mut Self {
    self.install_location = Some(install_location);
    self
  }

  /// Replaces the candidate endpoints, in preference order
  pub fn set_endpoints(&mut self, endpoints: Vec<String>) -> &mut Self {
    self.endpoints = endpoints;
    self
  }

  pub fn add_endpoint(&mut self, endpoint: String) -> &mut Self {
    self.endpoints.push(endpoint);
    self
  }

  pub fn set_manifest_name(&mut self, manifest_name: String) -> &mut Self {
    self.manifest_name = manifest_name;
    self
  }

  pub fn set_worker_count(&mut self, worker_count: usize) -> &mut Self {
    self.worker_count = Some(worker_count);
    self
  }

  pub fn set_probe_timeout(&mut self, probe_timeout: Duration) -> &mut Self {
    self.probe_timeout = probe_timeout;
    self
  }

  pub fn set_user_agent(&mut self, user_agent: String) -> &mut Self {
    self.user_agent = user_agent;
    self
  }

  pub fn set_progress_callback(&mut self, progress_callback: ProgressCallback) -> &mut Self {
    self.progress_callback = Some(progress_callback);
    self
  }

  pub fn build(&self) -> Result<Patcher, Error> {
    Ok(Patcher {
      config: self.build_config()?,
      progress: Progress::new(),
      progress_callback: self.progress_callback.clone().unwrap_or_else(ignore_progress),
    })
  }

  pub(crate) fn build_config(&self) -> Result<PatcherConfig, Error> {
    if self.endpoints.is_empty() {
      return Err(Error::InvalidConfig("no endpoints configured".to_string()));
    }
    let endpoints = self.endpoints.iter()
      .map(|endpoint| parse_endpoint(endpoint))
      .collect::<Result<Vec<url::Url>, Error>>()?;
    let worker_count = self.worker_count.unwrap_or_else(PatcherConfig::default_worker_count);
    if worker_count == 0 {
      return Err(Error::InvalidConfig("the worker count should be at least 1".to_string()));
    }
    if self.manifest_name.trim_matches('/').is_empty() {
      return Err(Error::InvalidConfig("the manifest name is empty".to_string()));
    }
    let install_directory = match &self.install_location {
      Some(install_location) => install_location.clone(),
      None => std::env::current_dir()?,
    };
    Ok(PatcherConfig {
      install_directory,
      endpoints,
      manifest_name: self.manifest_name.clone(),
      worker_count,
      probe_timeout: self.probe_timeout,
      user_agent: self.user_agent.clone(),
    })
  }
}

impl Default for PatcherBuilder {
  fn default() -> Self {
    Self::new()
  }
}

fn parse_endpoint(endpoint: &str) -> Result<url::Url, Error> {
  let url = endpoint.parse::<url::Url>()?;
  if !matches!(url.scheme(), "http" | "https") || url.cannot_be_a_base() {
    return Err(Error::InvalidConfig(format!("{} is not an http(s) endpoint", endpoint)));
  }
  Ok(url)
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn json_configuration_fills_the_builder() {
    let mut builder = PatcherBuilder::new();
    builder.apply_json(r#"{
      "install_directory": "/opt/game",
      "endpoints": ["https://cdn0.example.org/", "https://cdn1.example.org/patch"],
      "workers": 3,
      "probe_timeout_secs": 2
    }"#).unwrap();
    let config = builder.build_config().unwrap();
    assert_eq!(config.install_directory, PathBuf::from("/opt/game"));
    assert_eq!(config.endpoints.len(), 2);
    assert_eq!(config.worker_count, 3);
    assert_eq!(config.probe_timeout, Duration::from_secs(2));
    assert_eq!(config.manifest_name, DEFAULT_MANIFEST_NAME);
  }

  #[test]
  fn setters_override_json_values() {
    let mut builder = PatcherBuilder::new();
    builder.apply_json(r#"{ "endpoints": ["http://a.example.org/"], "workers": 3 }"#).unwrap();
    builder.set_worker_count(9).add_endpoint("http://b.example.org/".to_string());
    let config = builder.build_config().unwrap();
    assert_eq!(config.worker_count, 9);
    assert_eq!(config.endpoint_candidates().iter().map(|endpoint| endpoint.index).collect::<Vec<_>>(), vec![0, 1]);
  }

  #[test]
  fn invalid_configurations_are_refused() {
    assert!(matches!(PatcherBuilder::new().build_config(), Err(Error::InvalidConfig(_))));

    let mut builder = PatcherBuilder::new();
    builder.add_endpoint("ftp://cdn.example.org/".to_string());
    assert!(matches!(builder.build_config(), Err(Error::InvalidConfig(_))));

    let mut builder = PatcherBuilder::new();
    builder.add_endpoint("http://cdn.example.org/".to_string()).set_worker_count(0);
    assert!(matches!(builder.build_config(), Err(Error::InvalidConfig(_))));

    assert!(matches!(PatcherBuilder::new().apply_json("[1, 2]"), Err(Error::InvalidConfig(_))));
    assert!(matches!(PatcherBuilder::new().apply_json("{ not json"), Err(Error::JsonError(_))));
  }
}
