mod deobfuscate;
mod dispatch_fetches;
mod fetch_file;
mod fetch_manifest;
mod flow;
mod get_hash;
mod human_readable_bytesize;
mod ignore_progress;
mod install_partial;
mod set_modified_time;
mod transfer_to_partial;
mod verify_inventory;

pub(crate) use deobfuscate::deobfuscate as deobfuscate;
pub(crate) use dispatch_fetches::dispatch_fetches as dispatch_fetches;
pub(crate) use fetch_file::fetch_file as fetch_file;
pub(crate) use fetch_manifest::fetch_manifest as fetch_manifest;
pub(crate) use flow::flow as flow;
pub(crate) use get_hash::get_hash as get_hash;
pub use human_readable_bytesize::human_readable_bytesize as human_readable_bytesize;
pub use ignore_progress::ignore_progress as ignore_progress;
pub(crate) use install_partial::install_partial as install_partial;
pub(crate) use set_modified_time::set_modified_time as set_modified_time;
pub(crate) use transfer_to_partial::transfer_to_partial as transfer_to_partial;
pub(crate) use verify_inventory::verify_inventory as verify_inventory;

#[cfg(test)]
pub(crate) use get_hash::hash_bytes as hash_bytes;
