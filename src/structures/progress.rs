use std::sync::atomic::AtomicU64;
use std::sync::{Arc, Mutex};

/// Run level counters, cheap to clone and safe to read while a run is in progress.
#[derive(Debug, Clone)]
pub struct Progress {
  pub(crate) current_action: Arc<Mutex<String>>,
  /// Verified .. out of .. manifest entries
  pub(crate) verified_files: Arc<(AtomicU64, AtomicU64)>,
  /// Fetched .. out of .. queued files
  pub(crate) fetched_files: Arc<(AtomicU64, AtomicU64)>,
  pub(crate) failed_files: Arc<AtomicU64>,
  pub(crate) downloaded_bytes: Arc<AtomicU64>,
}

/// Byte level events of a single transfer, rendering them is up to the receiver.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProgressEvent {
  /// `total` is `None` when the server sent no content length
  TransferStarted { path: String, offset: u64, total: Option<u64> },
  TransferProgress { path: String, position: u64 },
  TransferFinished { path: String, success: bool },
}

pub type ProgressCallback = Arc<dyn Fn(ProgressEvent) + Send + Sync>;
