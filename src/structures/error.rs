#[derive(Debug)]
pub enum Error {
  /// None of the configured endpoints answered the reachability probe.
  NoReachableEndpoints(),
  /// A server answered with a status we cannot use, first argument is the url.
  InvalidStatus(String, reqwest::StatusCode),
  HttpError(reqwest::Error),
  InvalidUrl(url::ParseError),
  IoError(std::io::Error),
  /// The manifest ended before all declared entries were read.
  TruncatedManifest { declared: u32, decoded: u32 },
  MalformedManifest(String),
  NotUtf8(std::string::FromUtf8Error),
  /// Decompressing a partial file into its destination failed, first argument is the destination.
  Decompression(String, std::io::Error),
  InvalidConfig(String),
  JsonError(json::Error),
  JoinError(tokio::task::JoinError),
}
