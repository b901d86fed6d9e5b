use std::path::Path;

use filetime::FileTime;

use crate::structures::Error;

/// Sets access and modification time of `path` to `unix_seconds`
pub(crate) fn set_modified_time(path: &Path, unix_seconds: i64) -> Result<(), Error> {
  let time = FileTime::from_unix_time(unix_seconds, 0);
  filetime::set_file_times(path, time, time)?;
  Ok(())
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn modification_time_is_restored() {
    let directory = tempfile::tempdir().unwrap();
    let path = directory.path().join("x");
    std::fs::write(&path, b"x").unwrap();
    set_modified_time(&path, 1_234_567_890).unwrap();
    let metadata = std::fs::metadata(&path).unwrap();
    assert_eq!(FileTime::from_last_modification_time(&metadata).unix_seconds(), 1_234_567_890);
  }
}
