use crate::functions::flow;
use crate::structures::{Error, PatcherConfig, Progress, ProgressCallback, RunReport};

/// Reconciles an installation directory against the manifest served by a set of mirrors.
pub struct Patcher {
  pub(crate) config: PatcherConfig,
  pub(crate) progress: Progress,
  pub(crate) progress_callback: ProgressCallback,
}

impl Patcher {
  /// Runs one full reconciliation. Per-file failures are part of the report,
  /// only fatal conditions (no reachable endpoint, no usable manifest) are errors.
  pub async fn run(&self) -> Result<RunReport, Error> {
    flow(&self.config, &self.progress, &self.progress_callback).await
  }

  /// Live counters of the current or last run
  pub fn progress(&self) -> Progress {
    self.progress.clone()
  }

  pub fn config(&self) -> &PatcherConfig {
    &self.config
  }
}
