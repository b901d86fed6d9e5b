use std::path::Path;

use futures::StreamExt;
use reqwest::StatusCode;
use tokio::fs::{File, OpenOptions};
use tokio::io::AsyncWriteExt;
use tracing::{info, warn};

use crate::functions::human_readable_bytesize;
use crate::structures::{Error, Progress, ProgressCallback, ProgressEvent, TransferState};

/// Streams `url` into the partial file, appending when `state` resumes.
/// On error the partial file is left as is, it is the checkpoint of a later resume.
pub(crate) async fn transfer_to_partial(
  client: &reqwest::Client,
  url: &url::Url,
  partial_path: &Path,
  state: &mut TransferState,
  label: &str,
  progress: &Progress,
  callback: &ProgressCallback,
) -> Result<u64, Error> {
  if let Some(parent) = partial_path.parent() {
    tokio::fs::create_dir_all(parent).await?;
  }

  let mut request = client.get(url.clone());
  if let Some(range) = state.range_header() {
    info!("Resuming {} from byte position {}.", label, human_readable_bytesize(state.offset));
    request = request.header(reqwest::header::RANGE, range);
  }
  let response = request.send().await?;
  let status = response.status();
  if state.is_resuming() && status == StatusCode::OK {
    warn!("{} ignored the range request, downloading {} from the start", url, label);
    state.restart();
  } else if !status.is_success() {
    return Err(Error::InvalidStatus(url.to_string(), status));
  }

  let mut file = if state.is_resuming() {
    OpenOptions::new().append(true).create(true).open(partial_path).await?
  } else {
    File::create(partial_path).await?
  };

  let total = response.content_length().map(|length| state.offset + length);
  callback(ProgressEvent::TransferStarted { path: label.to_string(), offset: state.offset, total });

  let mut position = state.offset;
  let mut body = response.bytes_stream();
  while let Some(chunk) = body.next().await {
    let chunk = chunk?;
    if chunk.is_empty() {
      continue;
    }
    file.write_all(&chunk).await?;
    position += chunk.len() as u64;
    progress.add_downloaded_bytes(chunk.len() as u64);
    callback(ProgressEvent::TransferProgress { path: label.to_string(), position });
  }
  file.flush().await?;

  if let Some(total) = total {
    if position < total {
      return Err(std::io::Error::new(std::io::ErrorKind::UnexpectedEof, format!("{} ended at byte {} of {}", url, position, total)).into());
    }
  }
  Ok(position)
}
