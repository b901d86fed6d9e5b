use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

use tracing::info;

use crate::structures::{Progress, ProgressEvent};

impl Progress {
  pub fn new() -> Self {
    Self {
      current_action: Arc::new(Mutex::new(String::new())),
      verified_files: Arc::new((AtomicU64::new(0), AtomicU64::new(0))),
      fetched_files: Arc::new((AtomicU64::new(0), AtomicU64::new(0))),
      failed_files: Arc::new(AtomicU64::new(0)),
      downloaded_bytes: Arc::new(AtomicU64::new(0)),
    }
  }

  pub fn get_current_action(&self) -> String {
    match self.current_action.lock() {
      Ok(action) => action.clone(),
      Err(poisoned) => poisoned.into_inner().clone(),
    }
  }

  pub(crate) fn set_current_action(&self, value: &str) {
    info!("Current action: {}", value);
    match self.current_action.lock() {
      Ok(mut action) => *action = value.to_string(),
      Err(poisoned) => *poisoned.into_inner() = value.to_string(),
    }
  }

  /// (verified, total) manifest entries
  pub fn verified_files(&self) -> (u64, u64) {
    (self.verified_files.0.load(Ordering::Relaxed), self.verified_files.1.load(Ordering::Relaxed))
  }

  /// (fetched, queued) files
  pub fn fetched_files(&self) -> (u64, u64) {
    (self.fetched_files.0.load(Ordering::Relaxed), self.fetched_files.1.load(Ordering::Relaxed))
  }

  pub fn failed_files(&self) -> u64 {
    self.failed_files.load(Ordering::Relaxed)
  }

  pub fn downloaded_bytes(&self) -> u64 {
    self.downloaded_bytes.load(Ordering::Relaxed)
  }

  pub(crate) fn set_manifest_size(&self, value: u64) {
    self.verified_files.1.store(value, Ordering::Relaxed);
  }

  pub(crate) fn increment_verified_files(&self) {
    self.verified_files.0.fetch_add(1, Ordering::Relaxed);
  }

  pub(crate) fn set_queued_files(&self, value: u64) {
    self.fetched_files.1.store(value, Ordering::Relaxed);
  }

  pub(crate) fn increment_fetched_files(&self) {
    self.fetched_files.0.fetch_add(1, Ordering::Relaxed);
  }

  pub(crate) fn increment_failed_files(&self) {
    self.failed_files.fetch_add(1, Ordering::Relaxed);
  }

  pub(crate) fn add_downloaded_bytes(&self, amount: u64) {
    self.downloaded_bytes.fetch_add(amount, Ordering::Relaxed);
  }
}

impl Default for Progress {
  fn default() -> Self {
    Self::new()
  }
}

impl ProgressEvent {
  pub fn path(&self) -> &str {
    match self {
      Self::TransferStarted { path, .. } => path,
      Self::TransferProgress { path, .. } => path,
      Self::TransferFinished { path, .. } => path,
    }
  }
}

