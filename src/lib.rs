//Modules
mod functions;
mod implementations;
mod patcher;
mod patcher_builder;
mod structures;
mod traits;

pub use crate::functions::{human_readable_bytesize, ignore_progress};
pub use crate::patcher::Patcher;
pub use crate::patcher_builder::{PatcherBuilder, DEFAULT_MANIFEST_NAME, DEFAULT_PROBE_TIMEOUT};
pub use crate::structures::{
  Attempt, Endpoint, Endpoints, Error, FailedFetch, FetchOutcome, LocalFileState, Manifest, ManifestEntry,
  PatcherConfig, Progress, ProgressCallback, ProgressEvent, RunReport, TransferState,
};
