use crate::structures::{Inventory, LocalFileState, ManifestEntry};

impl Inventory {
  pub(crate) fn record(&mut self, entry: ManifestEntry, state: LocalFileState) {
    match state {
      LocalFileState::Missing | LocalFileState::Stale => self.to_fetch.push(entry),
      LocalFileState::Protected => self.protected += 1,
      LocalFileState::UpToDate => self.up_to_date += 1,
    }
  }
}
