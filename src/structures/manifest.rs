use crate::structures::ManifestEntry;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Manifest {
  /// Reserved, currently unused
  pub header: [u8; 16],
  pub declared_count: u32,
  pub entries: Vec<ManifestEntry>,
}
