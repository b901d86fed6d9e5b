use std::sync::Arc;

use crate::structures::{ProgressCallback, ProgressEvent};

/// A progress callback that drops every event
pub fn ignore_progress() -> ProgressCallback {
  Arc::new(|_event: ProgressEvent| {})
}
