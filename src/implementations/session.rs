use crate::structures::{Endpoints, Error, PatcherConfig, Session};

impl Session {
  pub(crate) fn new(client: reqwest::Client, endpoints: Endpoints, config: &PatcherConfig) -> Self {
    Self {
      client,
      endpoints,
      worker_count: config.worker_count,
      install_directory: config.install_directory.clone(),
    }
  }

  /// HTTP client shared by every stage of a run
  pub(crate) fn build_client(config: &PatcherConfig) -> Result<reqwest::Client, Error> {
    Ok(reqwest::Client::builder()
      .user_agent(config.user_agent.as_str())
      .build()?)
  }
}
