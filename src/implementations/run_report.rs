use crate::structures::{FetchOutcome, Inventory, RunReport};

impl RunReport {
  pub(crate) fn new(declared: u32, inventory: &Inventory) -> Self {
    Self {
      declared,
      up_to_date: inventory.up_to_date,
      protected: inventory.protected,
      queued: inventory.to_fetch.len(),
      fetched: 0,
      failed: Vec::new(),
    }
  }

  pub(crate) fn record(&mut self, outcome: FetchOutcome) {
    match outcome {
      FetchOutcome::Installed { .. } => self.fetched += 1,
      FetchOutcome::Failed(failed) => self.failed.push(failed),
    }
  }

  /// Every queued file was installed
  pub fn is_complete(&self) -> bool {
    self.failed.is_empty() && self.fetched == self.queued
  }
}

impl std::fmt::Display for RunReport {
  fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
    write!(f, "{} files in manifest: {} up to date, {} protected, {} of {} fetched, {} failed",
      self.declared, self.up_to_date, self.protected, self.fetched, self.queued, self.failed.len())
  }
}
