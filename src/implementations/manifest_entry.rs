use std::path::{Path, PathBuf};

use crate::structures::{Error, ManifestEntry};

impl ManifestEntry {
  /// Builds an entry from its raw wire fields, refusing paths that would escape the installation.
  pub(crate) fn from_raw(path: &[u8], content_hash: &[u8], last_modified: i64) -> Result<Self, Error> {
    let path = String::from_utf8(path.to_vec())?;
    let content_hash = String::from_utf8(content_hash.to_vec())?;
    validate_relative(&path)?;
    Ok(Self {
      path,
      content_hash,
      last_modified,
    })
  }

  /// Non-empty path components, `/` and `\` both separate
  pub fn components(&self) -> impl Iterator<Item = &str> {
    split_components(&self.path)
  }

  /// Components joined with `/`. Two entries with the same normalized path
  /// resolve to the same local file.
  pub fn normalized_path(&self) -> String {
    self.components().collect::<Vec<&str>>().join("/")
  }

  /// Location of the final file inside `install_directory`
  pub fn local_path(&self, install_directory: &Path) -> PathBuf {
    let mut local = install_directory.to_path_buf();
    self.components().for_each(|component| local.push(component));
    local
  }

  /// Location of the partial download, doubling as resume checkpoint between runs
  pub fn partial_path(&self, install_directory: &Path) -> PathBuf {
    let mut partial = self.local_path(install_directory).into_os_string();
    partial.push(".tmp");
    PathBuf::from(partial)
  }
}

fn split_components(path: &str) -> impl Iterator<Item = &str> {
  path.split(|c| c == '/' || c == '\\').filter(|component| !component.is_empty())
}

fn validate_relative(path: &str) -> Result<(), Error> {
  if split_components(path).next().is_none() {
    return Err(Error::MalformedManifest(format!("entry has an empty path: {:?}", path)));
  }
  if path.starts_with('/') || path.starts_with('\\') {
    return Err(Error::MalformedManifest(format!("entry path is absolute: {}", path)));
  }
  if split_components(path).any(|component| component == "." || component == "..") {
    return Err(Error::MalformedManifest(format!("entry path has a relative component: {}", path)));
  }
  if split_components(path).next().map(|first| first.ends_with(':')).unwrap_or(false) {
    return Err(Error::MalformedManifest(format!("entry path has a drive prefix: {}", path)));
  }
  Ok(())
}
