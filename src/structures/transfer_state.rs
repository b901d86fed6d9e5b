/// The attempts a single file may go through.
///
/// `FreshOrResume` escalates to `ForcedFresh`, which escalates to nothing: a
/// file is attempted at most twice per run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Attempt {
  FreshOrResume,
  ForcedFresh,
}

/// Per attempt transfer bookkeeping
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransferState {
  /// Bytes already present in the partial file, 0 when starting fresh
  pub offset: u64,
  pub force_full: bool,
}
