use std::time::Duration;

use futures::future::join_all;
use tracing::{info, warn};

use crate::structures::{Endpoint, Endpoints, Error};

impl Endpoints {
  /// Probes every candidate concurrently and keeps the ones that answered, in candidate order.
  pub(crate) async fn probe(client: &reqwest::Client, candidates: &[Endpoint], timeout: Duration) -> Result<Self, Error> {
    let results = join_all(candidates.iter().map(|candidate| candidate.probe(client, timeout))).await;
    let mut reachable = Vec::with_capacity(candidates.len());
    for (candidate, is_reachable) in candidates.iter().zip(results) {
      if is_reachable {
        info!("Endpoint {} is online", candidate.base);
        reachable.push(candidate.clone());
      } else {
        warn!("Endpoint {} is offline, excluding it", candidate.base);
      }
    }
    Self::from_reachable(reachable)
  }

  pub(crate) fn from_reachable(reachable: Vec<Endpoint>) -> Result<Self, Error> {
    if reachable.is_empty() {
      return Err(Error::NoReachableEndpoints());
    }
    Ok(Self { reachable })
  }

  /// The endpoint the manifest is fetched from
  pub fn primary(&self) -> &Endpoint {
    &self.reachable[0]
  }

  pub fn len(&self) -> usize {
    self.reachable.len()
  }

  pub fn is_empty(&self) -> bool {
    self.reachable.is_empty()
  }

  pub fn iter(&self) -> impl Iterator<Item = &Endpoint> {
    self.reachable.iter()
  }

  /// Static round-robin binding of a worker to an endpoint. A worker keeps its
  /// endpoint for the whole run, slow endpoints are not rebalanced.
  pub fn endpoint_for_worker(&self, worker_id: usize) -> &Endpoint {
    &self.reachable[worker_id % self.reachable.len()]
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn endpoint(index: usize) -> Endpoint {
    Endpoint::new(index, format!("http://cdn{}.example.org/", index).parse().unwrap())
  }

  #[test]
  fn empty_reachable_list_is_refused() {
    assert!(matches!(Endpoints::from_reachable(vec![]), Err(Error::NoReachableEndpoints())));
  }

  #[test]
  fn workers_are_bound_round_robin() {
    let endpoints = Endpoints::from_reachable(vec![endpoint(0), endpoint(2), endpoint(4)]).unwrap();
    let assigned : Vec<usize> = (0..7).map(|worker| endpoints.endpoint_for_worker(worker).index).collect();
    assert_eq!(assigned, vec![0, 2, 4, 0, 2, 4, 0]);
    assert_eq!(endpoints.primary().index, 0);
  }
}
