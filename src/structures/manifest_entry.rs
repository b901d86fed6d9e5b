/// An expected file of the installation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManifestEntry {
  /// Relative path, unique within one manifest. May use `\` as separator.
  pub path: String,
  /// Lowercase hex encoded BLAKE2b-256 digest of the decompressed content
  pub content_hash: String,
  /// Unix seconds
  pub last_modified: i64,
}
