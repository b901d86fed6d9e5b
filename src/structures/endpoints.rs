use crate::structures::Endpoint;

/// The reachable subset of the configured endpoints, in configured order.
/// Never empty once constructed through `Endpoints::probe`.
#[derive(Debug, Clone)]
pub struct Endpoints {
  pub(crate) reachable: Vec<Endpoint>,
}
