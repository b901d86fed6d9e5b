use std::path::Path;

use tracing::{info, warn};

use crate::functions::set_modified_time;
use crate::structures::{Inventory, LocalFileState, ManifestEntry, Progress};

/// Classifies every entry against the installation. Up to date files get the
/// manifest's modification time, protected files are left alone.
pub(crate) fn verify_inventory(install_directory: &Path, entries: Vec<ManifestEntry>, progress: &Progress) -> Inventory {
  let mut inventory = Inventory::default();
  for entry in entries {
    let local_path = entry.local_path(install_directory);
    let state = LocalFileState::classify(&local_path, &entry.content_hash);
    match state {
      LocalFileState::Missing => info!("Checking {}: missing, need to download", entry.path),
      LocalFileState::Stale => info!("Checking {}: changed, need to download", entry.path),
      LocalFileState::Protected => info!("Checking {}: custom (read-only), skipping", entry.path),
      LocalFileState::UpToDate => {
        // the same path that was just hashed
        if let Err(e) = set_modified_time(&local_path, entry.last_modified) {
          warn!("Could not restore modification time of {}: {}", local_path.display(), e);
        }
        info!("Checking {}: OK", entry.path);
      }
    }
    inventory.record(entry, state);
    progress.increment_verified_files();
  }
  inventory
}
