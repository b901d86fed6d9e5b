use std::path::{Path, PathBuf};

use tracing::{debug, error, instrument, warn};

use crate::functions::{install_partial, transfer_to_partial};
use crate::structures::{Attempt, Error, FailedFetch, FetchJob, FetchOutcome, Progress, ProgressCallback, ProgressEvent, TransferState};

/// Fetches and installs one file, with at most two attempts: the first resumes
/// a partial file when there is one, the second always starts from byte 0.
/// Never returns an error, a file that fails twice is reported as `Failed`.
#[instrument(skip_all, fields(path = %job.entry.path, endpoint = job.endpoint.index))]
pub(crate) async fn fetch_file(client: &reqwest::Client, install_directory: &Path, job: FetchJob, progress: &Progress, callback: &ProgressCallback) -> FetchOutcome {
  let url = match job.endpoint.url_for(&job.entry.path) {
    Ok(url) => url,
    Err(e) => {
      error!("No download url for {}: {}", job.entry.path, e);
      return FetchOutcome::Failed(FailedFetch {
        path: job.entry.path,
        url: job.endpoint.base.to_string(),
        attempts: 0,
        error: e.to_string(),
      });
    }
  };
  let destination = job.entry.local_path(install_directory);
  let partial = job.entry.partial_path(install_directory);

  let mut attempt = Attempt::FreshOrResume;
  loop {
    match try_attempt(client, &url, &job, &partial, &destination, attempt, progress, callback).await {
      Ok(()) => {
        callback(ProgressEvent::TransferFinished { path: job.entry.path.clone(), success: true });
        return FetchOutcome::Installed { path: job.entry.path, attempts: attempt.number() };
      },
      Err(e) => match attempt.escalate() {
        Some(next) => {
          warn!("{} ({}), retrying", e, url);
          attempt = next;
        },
        None => {
          error!("Download for {} failed again, check manually: {}", url, e);
          callback(ProgressEvent::TransferFinished { path: job.entry.path.clone(), success: false });
          return FetchOutcome::Failed(FailedFetch {
            path: job.entry.path,
            url: url.to_string(),
            attempts: attempt.number(),
            error: e.to_string(),
          });
        }
      }
    }
  }
}

#[allow(clippy::too_many_arguments)]
async fn try_attempt(
  client: &reqwest::Client,
  url: &url::Url,
  job: &FetchJob,
  partial: &Path,
  destination: &Path,
  attempt: Attempt,
  progress: &Progress,
  callback: &ProgressCallback,
) -> Result<(), Error> {
  let partial_length = tokio::fs::metadata(partial).await.ok().map(|metadata| metadata.len());
  let mut state = TransferState::for_attempt(attempt, partial_length);
  let received = transfer_to_partial(client, url, partial, &mut state, &job.entry.path, progress, callback).await?;
  debug!("Attempt {} received {} bytes for {}", attempt.number(), received, job.entry.path);

  let partial : PathBuf = partial.to_path_buf();
  let destination : PathBuf = destination.to_path_buf();
  let last_modified = job.entry.last_modified;
  let installed = tokio::task::spawn_blocking(move || install_partial(&partial, &destination, last_modified)).await??;
  debug!("Installed {} ({} bytes)", job.entry.path, installed);
  Ok(())
}
