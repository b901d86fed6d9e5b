use crate::structures::FailedFetch;

#[derive(Debug, Default)]
pub struct RunReport {
  pub declared: u32,
  pub up_to_date: usize,
  pub protected: usize,
  pub queued: usize,
  pub fetched: usize,
  pub failed: Vec<FailedFetch>,
}
