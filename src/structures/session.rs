use std::path::PathBuf;

use crate::structures::Endpoints;

/// Everything the pipeline needs once the reachable endpoints are known.
/// Immutable for the remainder of the run.
#[derive(Debug, Clone)]
pub struct Session {
  pub client: reqwest::Client,
  pub endpoints: Endpoints,
  pub worker_count: usize,
  pub install_directory: PathBuf,
}
