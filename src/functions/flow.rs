use tracing::info;

use crate::functions::{dispatch_fetches, fetch_manifest, verify_inventory};
use crate::structures::{Endpoints, Error, PatcherConfig, Progress, ProgressCallback, RunReport, Session};

/// Probe endpoints, fetch the manifest, verify the installation and fetch what is missing.
/// Only a run without reachable endpoints or without a usable manifest returns an error.
pub(crate) async fn flow(config: &PatcherConfig, progress: &Progress, callback: &ProgressCallback) -> Result<RunReport, Error> {
  progress.set_current_action("Probing endpoints");
  let client = Session::build_client(config)?;
  let endpoints = Endpoints::probe(&client, &config.endpoint_candidates(), config.probe_timeout).await?;
  info!("{} of {} endpoints are online", endpoints.len(), config.endpoints.len());
  let session = Session::new(client, endpoints, config);

  progress.set_current_action("Downloading manifest");
  let manifest = fetch_manifest(&session.client, session.endpoints.primary(), &config.manifest_name).await?;
  info!("Fetched version information for {} files.", manifest.declared_count);
  progress.set_manifest_size(manifest.declared_count as u64);

  progress.set_current_action("Verifying files");
  let install_directory = session.install_directory.clone();
  let verify_progress = progress.clone();
  let entries = manifest.entries;
  let inventory = tokio::task::spawn_blocking(move || verify_inventory(&install_directory, entries, &verify_progress)).await?;
  info!("Found {} files that need to be updated.", inventory.to_fetch.len());
  progress.set_queued_files(inventory.to_fetch.len() as u64);

  let mut report = RunReport::new(manifest.declared_count, &inventory);
  progress.set_current_action("Downloading files");
  for outcome in dispatch_fetches(&session, inventory.to_fetch, progress, callback).await {
    report.record(outcome);
  }
  progress.set_current_action("Done");
  info!("{}", report);
  Ok(report)
}
