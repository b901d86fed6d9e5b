use std::fs::Metadata;
use std::path::Path;

use tracing::warn;

use crate::functions::get_hash;
use crate::structures::LocalFileState;

/// Permission bits marking a file as user owned
#[cfg(unix)]
pub(crate) const PROTECTED_MODE: u32 = 0o444;

impl LocalFileState {
  /// Classifies the file at `path` against the digest the manifest expects.
  /// Protected files are never read.
  pub fn classify(path: &Path, expected_hash: &str) -> Self {
    let metadata = match std::fs::metadata(path) {
      Ok(metadata) => metadata,
      Err(_) => return Self::Missing,
    };
    if is_protected(&metadata) {
      return Self::Protected;
    }
    match get_hash(path) {
      Ok(hash) if hash == expected_hash => Self::UpToDate,
      Ok(_) => Self::Stale,
      Err(e) => {
        warn!("Could not hash {}: {}", path.display(), e);
        Self::Stale
      }
    }
  }

  pub fn needs_fetch(&self) -> bool {
    matches!(self, Self::Missing | Self::Stale)
  }
}

#[cfg(unix)]
fn is_protected(metadata: &Metadata) -> bool {
  use std::os::unix::fs::PermissionsExt;
  metadata.is_file() && metadata.permissions().mode() & 0o7777 == PROTECTED_MODE
}

#[cfg(not(unix))]
fn is_protected(metadata: &Metadata) -> bool {
  metadata.is_file() && metadata.permissions().readonly()
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::functions::get_hash;

  #[test]
  fn absent_file_is_missing() {
    let directory = tempfile::tempdir().unwrap();
    assert_eq!(LocalFileState::classify(&directory.path().join("nope.bin"), "00"), LocalFileState::Missing);
  }

  #[test]
  fn matching_digest_is_up_to_date_and_mismatch_is_stale() {
    let directory = tempfile::tempdir().unwrap();
    let path = directory.path().join("a.bin");
    std::fs::write(&path, b"payload").unwrap();
    let hash = get_hash(&path).unwrap();
    assert_eq!(LocalFileState::classify(&path, &hash), LocalFileState::UpToDate);
    assert_eq!(LocalFileState::classify(&path, &hash.to_uppercase()), LocalFileState::Stale);
    assert!(LocalFileState::Stale.needs_fetch());
    assert!(!LocalFileState::UpToDate.needs_fetch());
  }

  #[cfg(unix)]
  #[test]
  fn read_only_file_is_protected_regardless_of_content() {
    use std::os::unix::fs::PermissionsExt;
    let directory = tempfile::tempdir().unwrap();
    let path = directory.path().join("custom.ini");
    std::fs::write(&path, b"mine").unwrap();
    std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o444)).unwrap();
    assert_eq!(LocalFileState::classify(&path, "does-not-match"), LocalFileState::Protected);
    assert!(!LocalFileState::Protected.needs_fetch());

    std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o644)).unwrap();
    assert_eq!(LocalFileState::classify(&path, "does-not-match"), LocalFileState::Stale);
  }
}
