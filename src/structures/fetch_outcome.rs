#[derive(Debug)]
pub enum FetchOutcome {
  Installed { path: String, attempts: u8 },
  Failed(FailedFetch),
}

/// A file that was given up on for this run
#[derive(Debug)]
pub struct FailedFetch {
  pub path: String,
  pub url: String,
  pub attempts: u8,
  pub error: String,
}
