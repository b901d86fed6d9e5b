use std::path::PathBuf;
use std::sync::Arc;

use futures::future::join_all;
use tokio::sync::Mutex;
use tokio::sync::mpsc::{unbounded_channel, UnboundedReceiver};
use tracing::{debug, error, info};

use crate::functions::fetch_file;
use crate::structures::{Endpoint, FetchJob, FetchOutcome, ManifestEntry, Progress, ProgressCallback, Session};

type Queue = Arc<Mutex<UnboundedReceiver<ManifestEntry>>>;

/// Queues every entry, then lets a bounded pool of workers drain the queue.
/// Returns once every entry has reached a terminal outcome.
pub(crate) async fn dispatch_fetches(session: &Session, entries: Vec<ManifestEntry>, progress: &Progress, callback: &ProgressCallback) -> Vec<FetchOutcome> {
  let queued = entries.len();
  if queued == 0 {
    return Vec::new();
  }

  let (sender, receiver) = unbounded_channel();
  for entry in entries {
    if sender.send(entry).is_err() {
      break;
    }
  }
  drop(sender);
  let queue : Queue = Arc::new(Mutex::new(receiver));

  let worker_count = session.worker_count.min(queued);
  info!("Downloading {} files with {} workers over {} endpoints", queued, worker_count, session.endpoints.len());
  let mut handles = Vec::with_capacity(worker_count);
  for worker_id in 0..worker_count {
    let endpoint = session.endpoints.endpoint_for_worker(worker_id).clone();
    handles.push(tokio::spawn(worker(
      worker_id,
      endpoint,
      queue.clone(),
      session.client.clone(),
      session.install_directory.clone(),
      progress.clone(),
      callback.clone(),
    )));
  }

  let mut outcomes = Vec::with_capacity(queued);
  for result in join_all(handles).await {
    match result {
      Ok(worker_outcomes) => outcomes.extend(worker_outcomes),
      Err(e) => error!("A download worker stopped unexpectedly: {}", e),
    }
  }
  outcomes
}

async fn worker(
  worker_id: usize,
  endpoint: Endpoint,
  queue: Queue,
  client: reqwest::Client,
  install_directory: PathBuf,
  progress: Progress,
  callback: ProgressCallback,
) -> Vec<FetchOutcome> {
  debug!("Worker {} bound to {}", worker_id, endpoint.base);
  let mut outcomes = Vec::new();
  while let Some(entry) = next_entry(&queue).await {
    let job = FetchJob { entry, endpoint: endpoint.clone() };
    let outcome = fetch_file(&client, &install_directory, job, &progress, &callback).await;
    match &outcome {
      FetchOutcome::Installed { .. } => progress.increment_fetched_files(),
      FetchOutcome::Failed(_) => progress.increment_failed_files(),
    }
    outcomes.push(outcome);
  }
  debug!("Worker {} finished after {} files", worker_id, outcomes.len());
  outcomes
}

/// The lock is released before the entry is processed
async fn next_entry(queue: &Queue) -> Option<ManifestEntry> {
  queue.lock().await.recv().await
}
