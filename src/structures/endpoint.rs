use std::sync::Arc;

/// One content-delivery mirror.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoint {
  /// Position of this endpoint in the configured candidate list
  pub index: usize,
  /// Base url, always ending in `/`
  pub base: Arc<url::Url>,
}
