use crate::structures::{Endpoint, PatcherConfig};

impl PatcherConfig {
  /// Configured endpoints, indexed in preference order
  pub(crate) fn endpoint_candidates(&self) -> Vec<Endpoint> {
    self.endpoints.iter()
      .enumerate()
      .map(|(index, url)| Endpoint::new(index, url.clone()))
      .collect()
  }

  /// One worker per available core
  pub fn default_worker_count() -> usize {
    std::thread::available_parallelism().map(|count| count.get()).unwrap_or(1)
  }
}
