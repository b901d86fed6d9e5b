use std::path::PathBuf;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct PatcherConfig {
  pub install_directory: PathBuf,
  /// Candidate endpoints in preference order
  pub endpoints: Vec<url::Url>,
  pub manifest_name: String,
  pub worker_count: usize,
  pub probe_timeout: Duration,
  pub user_agent: String,
}
