use std::collections::HashSet;

use bytes::Buf;
use tracing::debug;

use crate::functions::deobfuscate;
use crate::structures::{Error, Manifest, ManifestEntry};

pub(crate) const HEADER_LENGTH: usize = 16;

/// Smallest encoding of an entry: two empty length prefixed strings and a timestamp
const MIN_ENTRY_LENGTH: usize = 4 + 4 + 8;

impl Manifest {
  /// Decodes a manifest exactly as served by an endpoint.
  pub fn decode(mut data: Vec<u8>) -> Result<Self, Error> {
    deobfuscate(&mut data);
    Self::parse(&data)
  }

  /// Parses an already de-obfuscated manifest.
  pub fn parse(mut buffer: &[u8]) -> Result<Self, Error> {
    if buffer.remaining() < HEADER_LENGTH + 4 {
      return Err(Error::MalformedManifest(format!("{} bytes is too short for the manifest header", buffer.len())));
    }
    let mut header = [0_u8; HEADER_LENGTH];
    buffer.copy_to_slice(&mut header);
    let declared_count = buffer.get_u32_le();

    let capacity = (declared_count as usize).min(buffer.remaining() / MIN_ENTRY_LENGTH);
    let mut entries = Vec::with_capacity(capacity);
    let mut paths = HashSet::with_capacity(capacity);
    for decoded in 0..declared_count {
      let truncated = || Error::TruncatedManifest { declared: declared_count, decoded };
      let path = read_prefixed(&mut buffer).ok_or_else(truncated)?;
      let content_hash = read_prefixed(&mut buffer).ok_or_else(truncated)?;
      if buffer.remaining() < 8 {
        return Err(truncated());
      }
      let last_modified = buffer.get_i64_le();

      let entry = ManifestEntry::from_raw(path, content_hash, last_modified)?;
      if !paths.insert(entry.normalized_path()) {
        return Err(Error::MalformedManifest(format!("path {} is listed twice", entry.path)));
      }
      entries.push(entry);
    }
    if buffer.has_remaining() {
      debug!("Ignoring {} bytes after the last manifest entry", buffer.remaining());
    }

    Ok(Self {
      header,
      declared_count,
      entries,
    })
  }

  pub fn len(&self) -> usize {
    self.entries.len()
  }

  pub fn is_empty(&self) -> bool {
    self.entries.is_empty()
  }

  /// Plain (not obfuscated) wire encoding, used to build fixtures.
  #[cfg(test)]
  pub(crate) fn encode(&self) -> Vec<u8> {
    let mut buffer = Vec::new();
    buffer.extend_from_slice(&self.header);
    buffer.extend_from_slice(&self.declared_count.to_le_bytes());
    for entry in &self.entries {
      buffer.extend_from_slice(&(entry.path.len() as u32).to_le_bytes());
      buffer.extend_from_slice(entry.path.as_bytes());
      buffer.extend_from_slice(&(entry.content_hash.len() as u32).to_le_bytes());
      buffer.extend_from_slice(entry.content_hash.as_bytes());
      buffer.extend_from_slice(&entry.last_modified.to_le_bytes());
    }
    buffer
  }

  #[cfg(test)]
  pub(crate) fn from_entries(entries: Vec<ManifestEntry>) -> Self {
    Self {
      header: [0; HEADER_LENGTH],
      declared_count: entries.len() as u32,
      entries,
    }
  }
}

/// Reads a u32 little-endian length followed by that many bytes.
fn read_prefixed<'a>(buffer: &mut &'a [u8]) -> Option<&'a [u8]> {
  if buffer.len() < 4 {
    return None;
  }
  let length = buffer.get_u32_le() as usize;
  if buffer.len() < length {
    return None;
  }
  let (value, rest) = buffer.split_at(length);
  *buffer = rest;
  Some(value)
}

#[cfg(test)]
mod tests {
  use super::*;

  fn entry(path: &str, content_hash: &str, last_modified: i64) -> ManifestEntry {
    ManifestEntry {
      path: path.to_string(),
      content_hash: content_hash.to_string(),
      last_modified,
    }
  }

  fn sample() -> Manifest {
    Manifest::from_entries(vec![
      entry("data/a.bin", "0f1e2d", 1_600_000_000),
      entry("cfg\\x.ini", "aa55", -1),
    ])
  }

  #[test]
  fn obfuscated_manifest_decodes_to_its_source() {
    let source = sample();
    let mut wire = source.encode();
    deobfuscate(&mut wire);
    let decoded = Manifest::decode(wire).unwrap();
    assert_eq!(decoded.declared_count as usize, decoded.len());
    assert_eq!(decoded, source);
  }

  #[test]
  fn header_bytes_are_carried_but_ignored() {
    let mut source = sample();
    source.header = [0xAB; HEADER_LENGTH];
    let decoded = Manifest::parse(&source.encode()).unwrap();
    assert_eq!(decoded.header, [0xAB; HEADER_LENGTH]);
    assert_eq!(decoded.entries, source.entries);
  }

  #[test]
  fn truncation_anywhere_inside_an_entry_is_reported() {
    let encoded = sample().encode();
    for cut in (HEADER_LENGTH + 4 + 1)..encoded.len() {
      match Manifest::parse(&encoded[..cut]) {
        Err(Error::TruncatedManifest { declared: 2, decoded }) => assert!(decoded < 2),
        other => panic!("cut at {} gave {:?}", cut, other),
      }
    }
  }

  #[test]
  fn declared_count_larger_than_content_is_truncated() {
    let mut source = sample();
    source.declared_count = 3;
    assert!(matches!(Manifest::parse(&source.encode()), Err(Error::TruncatedManifest { declared: 3, decoded: 2 })));
  }

  #[test]
  fn missing_header_is_malformed() {
    assert!(matches!(Manifest::parse(&[0; 10]), Err(Error::MalformedManifest(_))));
  }

  #[test]
  fn duplicate_paths_are_malformed() {
    for duplicate in ["a\\b", "a//b", "a/b/", "a\\/b"] {
      let source = Manifest::from_entries(vec![entry("a/b", "00", 0), entry(duplicate, "11", 0)]);
      assert!(matches!(Manifest::parse(&source.encode()), Err(Error::MalformedManifest(_))), "{}", duplicate);
    }
  }

  #[test]
  fn trailing_bytes_are_ignored() {
    let mut encoded = sample().encode();
    encoded.extend_from_slice(&[1, 2, 3]);
    assert_eq!(Manifest::parse(&encoded).unwrap().len(), 2);
  }
}
