pub mod error;
pub use error::Error;

pub mod endpoint;
pub use endpoint::Endpoint;

pub mod endpoints;
pub use endpoints::Endpoints;

pub mod manifest_entry;
pub use manifest_entry::ManifestEntry;

pub mod manifest;
pub use manifest::Manifest;

pub mod local_file_state;
pub use local_file_state::LocalFileState;

pub mod inventory;
pub use inventory::Inventory;

pub mod fetch_job;
pub use fetch_job::FetchJob;

pub mod transfer_state;
pub use transfer_state::{Attempt, TransferState};

pub mod fetch_outcome;
pub use fetch_outcome::{FailedFetch, FetchOutcome};

pub mod progress;
pub use progress::{Progress, ProgressCallback, ProgressEvent};

pub mod patcher_config;
pub use patcher_config::PatcherConfig;

pub mod session;
pub use session::Session;

pub mod run_report;
pub use run_report::RunReport;
