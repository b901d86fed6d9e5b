use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::functions::set_modified_time;
use crate::structures::Error;

/// Decompresses a finished partial file next to `destination`, moves it into
/// place, removes the partial file and restores the manifest's modification
/// time. Returns the installed size. On failure `destination` is untouched.
pub(crate) fn install_partial(partial_path: &Path, destination: &Path, last_modified: i64) -> Result<u64, Error> {
  let unpacked = unpacked_path(destination);
  let written = match decompress(partial_path, &unpacked) {
    Ok(written) => written,
    Err(e) => {
      let _ = std::fs::remove_file(&unpacked);
      return Err(match e {
        Error::IoError(e) => Error::Decompression(destination.display().to_string(), e),
        e => e,
      });
    }
  };
  std::fs::rename(&unpacked, destination)?;
  std::fs::remove_file(partial_path)?;
  set_modified_time(destination, last_modified)?;
  Ok(written)
}

fn decompress(partial_path: &Path, unpacked: &Path) -> Result<u64, Error> {
  let compressed = BufReader::new(File::open(partial_path)?);
  let mut decoder = snap::read::FrameDecoder::new(compressed);
  let mut output = BufWriter::new(File::create(unpacked)?);
  let written = std::io::copy(&mut decoder, &mut output)?;
  output.flush()?;
  Ok(written)
}

/// `<destination>.unpack`, in the same directory so the final rename stays on one filesystem
fn unpacked_path(destination: &Path) -> PathBuf {
  let mut unpacked = destination.as_os_str().to_os_string();
  unpacked.push(".unpack");
  PathBuf::from(unpacked)
}

#[cfg(test)]
mod tests {
  use super::*;
  use filetime::FileTime;
  use std::io::Read;

  fn compress(data: &[u8]) -> Vec<u8> {
    let mut compressed = Vec::new();
    snap::read::FrameEncoder::new(data).read_to_end(&mut compressed).unwrap();
    compressed
  }

  #[test]
  fn installs_decompressed_content_with_manifest_time() {
    let directory = tempfile::tempdir().unwrap();
    let partial = directory.path().join("a.bin.tmp");
    let destination = directory.path().join("a.bin");
    let data : Vec<u8> = (0..100_000_u32).map(|i| (i % 13) as u8).collect();
    std::fs::write(&partial, compress(&data)).unwrap();

    let written = install_partial(&partial, &destination, 1_000_000_000).unwrap();

    assert_eq!(written, data.len() as u64);
    assert_eq!(std::fs::read(&destination).unwrap(), data);
    assert!(!partial.exists());
    let metadata = std::fs::metadata(&destination).unwrap();
    assert_eq!(FileTime::from_last_modification_time(&metadata).unix_seconds(), 1_000_000_000);
  }

  #[test]
  fn garbage_is_a_decompression_error_and_keeps_the_partial_file() {
    let directory = tempfile::tempdir().unwrap();
    let partial = directory.path().join("b.bin.tmp");
    std::fs::write(&partial, b"definitely not a snappy frame").unwrap();

    let destination = directory.path().join("b.bin");
    std::fs::write(&destination, b"previous version").unwrap();

    let result = install_partial(&partial, &destination, 0);

    assert!(matches!(result, Err(Error::Decompression(_, _))));
    assert!(partial.exists());
    assert_eq!(std::fs::read(&destination).unwrap(), b"previous version");
    assert!(!directory.path().join("b.bin.unpack").exists());
  }

  #[test]
  fn missing_partial_file_fails_the_install() {
    let directory = tempfile::tempdir().unwrap();
    let result = install_partial(&directory.path().join("c.bin.tmp"), &directory.path().join("c.bin"), 0);
    assert!(matches!(result, Err(Error::Decompression(_, _))));
  }
}
