use std::{fs::OpenOptions, io::Read, path::Path};
use blake2::{Blake2b, Digest, digest::consts::U32};
use crate::structures::Error;

type Blake2b256 = Blake2b<U32>;

/// Opens a file and calculates its BLAKE2b-256 hash, lowercase hex encoded
pub(crate) fn get_hash(file_path: &Path) -> Result<String, Error> {
  let mut file = OpenOptions::new().read(true).open(file_path)?;
  let mut hasher = Blake2b256::new();
  let mut buffer = vec![0_u8; 64 * 1024];
  loop {
    let read = file.read(&mut buffer)?;
    if read == 0 {
      break;
    }
    hasher.update(&buffer[..read]);
  }
  Ok(hex::encode(hasher.finalize()))
}

/// Hash of an in-memory buffer, same encoding as `get_hash`
#[cfg(test)]
pub(crate) fn hash_bytes(data: &[u8]) -> String {
  hex::encode(Blake2b256::digest(data))
}
