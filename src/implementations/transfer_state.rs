use crate::structures::{Attempt, TransferState};

impl Attempt {
  /// The attempt that follows a failure of `self`, `None` once escalation is exhausted.
  pub fn escalate(self) -> Option<Attempt> {
    match self {
      Self::FreshOrResume => Some(Self::ForcedFresh),
      Self::ForcedFresh => None,
    }
  }

  pub fn allows_resume(self) -> bool {
    matches!(self, Self::FreshOrResume)
  }

  /// Number of this attempt, starting at 1
  pub fn number(self) -> u8 {
    match self {
      Self::FreshOrResume => 1,
      Self::ForcedFresh => 2,
    }
  }
}

impl TransferState {
  /// `partial_length` is the size of an existing partial file, if there is one.
  pub fn for_attempt(attempt: Attempt, partial_length: Option<u64>) -> Self {
    match (attempt.allows_resume(), partial_length) {
      (true, Some(offset)) => Self { offset, force_full: false },
      (true, None) => Self { offset: 0, force_full: false },
      (false, _) => Self { offset: 0, force_full: true },
    }
  }

  /// A forced full transfer never resumes, whatever its offset
  pub fn is_resuming(&self) -> bool {
    !self.force_full && self.offset > 0
  }

  /// Value of the `Range` header, if the transfer continues a partial file
  pub fn range_header(&self) -> Option<String> {
    if self.is_resuming() {
      Some(format!("bytes={}-", self.offset))
    } else {
      None
    }
  }

  /// Drops the resume offset, used when a server ignores the range request.
  pub fn restart(&mut self) {
    self.offset = 0;
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn escalation_allows_exactly_two_attempts() {
    let mut attempts = vec![];
    let mut attempt = Some(Attempt::FreshOrResume);
    while let Some(current) = attempt {
      attempts.push(current.number());
      attempt = current.escalate();
    }
    assert_eq!(attempts, vec![1, 2]);
  }

  #[test]
  fn only_the_first_attempt_resumes() {
    let first = TransferState::for_attempt(Attempt::FreshOrResume, Some(4096));
    assert_eq!(first, TransferState { offset: 4096, force_full: false });
    assert_eq!(first.range_header().as_deref(), Some("bytes=4096-"));

    let second = TransferState::for_attempt(Attempt::ForcedFresh, Some(4096));
    assert_eq!(second, TransferState { offset: 0, force_full: true });
    assert_eq!(second.range_header(), None);
  }

  #[test]
  fn forced_transfer_ignores_its_offset() {
    let state = TransferState { offset: 512, force_full: true };
    assert!(!state.is_resuming());
    assert_eq!(state.range_header(), None);
  }

  #[test]
  fn empty_partial_file_starts_fresh() {
    let state = TransferState::for_attempt(Attempt::FreshOrResume, Some(0));
    assert!(!state.is_resuming());
    assert_eq!(state.range_header(), None);
  }
}
