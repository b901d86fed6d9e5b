mod endpoint;
mod endpoints;
mod error;
mod inventory;
mod local_file_state;
mod manifest;
mod manifest_entry;
mod patcher_config;
mod progress;
mod run_report;
mod session;
mod transfer_state;
