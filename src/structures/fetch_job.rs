use crate::structures::{Endpoint, ManifestEntry};

/// One entry bound to the endpoint of the worker processing it
#[derive(Debug, Clone)]
pub struct FetchJob {
  pub entry: ManifestEntry,
  pub endpoint: Endpoint,
}
