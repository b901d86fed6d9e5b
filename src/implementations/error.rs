use crate::structures::Error;

impl std::error::Error for Error {
  fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
    match self {
      Self::HttpError(error) => Some(error),
      Self::InvalidUrl(error) => Some(error),
      Self::IoError(error) => Some(error),
      Self::NotUtf8(error) => Some(error),
      Self::Decompression(_, error) => Some(error),
      Self::JsonError(error) => Some(error),
      Self::JoinError(error) => Some(error),
      _ => None,
    }
  }
}

impl std::fmt::Display for Error {
  fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
    match self {
      Self::NoReachableEndpoints() => write!(f, "none of the download servers are reachable"),
      Self::InvalidStatus(url, status) => write!(f, "{} answered with status {}", url, status),
      Self::HttpError(error) => write!(f, "http error: {}", error),
      Self::InvalidUrl(error) => write!(f, "invalid url: {}", error),
      Self::IoError(error) => write!(f, "io error: {}", error),
      Self::TruncatedManifest { declared, decoded } => write!(f, "manifest is truncated: declares {} entries, only {} could be read", declared, decoded),
      Self::MalformedManifest(reason) => write!(f, "manifest is malformed: {}", reason),
      Self::NotUtf8(error) => write!(f, "not valid utf-8: {}", error),
      Self::Decompression(path, error) => write!(f, "decompressing {} failed: {}", path, error),
      Self::InvalidConfig(reason) => write!(f, "invalid configuration: {}", reason),
      Self::JsonError(error) => write!(f, "invalid json: {}", error),
      Self::JoinError(error) => write!(f, "task failed: {}", error),
    }
  }
}

impl From<reqwest::Error> for Error {
  #[track_caller]
  #[inline(always)]
  fn from(error: reqwest::Error) -> Self {
    log_error(&error);
    Self::HttpError(error)
  }
}

impl From<url::ParseError> for Error {
  #[track_caller]
  #[inline(always)]
  fn from(error: url::ParseError) -> Self {
    log_error(&error);
    Self::InvalidUrl(error)
  }
}

impl From<std::io::Error> for Error {
  #[track_caller]
  #[inline(always)]
  fn from(error: std::io::Error) -> Self {
    log_error(&error);
    Self::IoError(error)
  }
}

impl From<std::string::FromUtf8Error> for Error {
  #[track_caller]
  #[inline(always)]
  fn from(error: std::string::FromUtf8Error) -> Self {
    log_error(&error);
    Self::NotUtf8(error)
  }
}

impl From<json::Error> for Error {
  #[track_caller]
  #[inline(always)]
  fn from(error: json::Error) -> Self {
    log_error(&error);
    Self::JsonError(error)
  }
}

impl From<tokio::task::JoinError> for Error {
  #[track_caller]
  #[inline(always)]
  fn from(error: tokio::task::JoinError) -> Self {
    log_error(&error);
    Self::JoinError(error)
  }
}

#[track_caller]
fn log_error(error: &(impl std::error::Error + ?Sized)) {
  let location = std::panic::Location::caller();
  tracing::error!("{}:{}: {:?}", location.file(), location.line(), error);
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn display_names_the_counts_of_a_truncated_manifest() {
    let error = Error::TruncatedManifest { declared: 3, decoded: 1 };
    assert_eq!(error.to_string(), "manifest is truncated: declares 3 entries, only 1 could be read");
  }

  #[test]
  fn io_errors_keep_their_source() {
    use std::error::Error as _;
    let error : Error = std::io::Error::new(std::io::ErrorKind::NotFound, "gone").into();
    assert!(matches!(error, Error::IoError(_)));
    assert!(error.source().is_some());
  }
}
