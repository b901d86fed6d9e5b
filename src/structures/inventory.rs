use crate::structures::ManifestEntry;

/// Result of verifying the installation against a manifest
#[derive(Debug, Default)]
pub struct Inventory {
  /// Entries classified `Missing` or `Stale`, in manifest order
  pub to_fetch: Vec<ManifestEntry>,
  pub up_to_date: usize,
  pub protected: usize,
}
