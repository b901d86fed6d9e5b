/// Classification of a local file against its manifest entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LocalFileState {
  Missing,
  /// Content digest differs from the manifest, or the file could not be read
  Stale,
  /// Marked read-only by the user, never verified nor overwritten
  Protected,
  UpToDate,
}
