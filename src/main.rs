use std::collections::HashMap;
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::{Arc, Mutex};

use cdn_patcher::{human_readable_bytesize, Error, PatcherBuilder, ProgressEvent};
use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};
use indicatif::{MultiProgress, ProgressBar, ProgressStyle};
use tracing_subscriber::EnvFilter;

fn command() -> Command {
  Command::new("cdn-patcher")
    .version(env!("CARGO_PKG_VERSION"))
    .about("Brings an installation up to date with the manifest served by its mirrors")
    .arg(Arg::new("config")
      .short('c')
      .long("config")
      .value_name("FILE")
      .value_parser(value_parser!(PathBuf))
      .help("JSON configuration file")
    )
    .arg(Arg::new("endpoint")
      .short('e')
      .long("endpoint")
      .value_name("URL")
      .action(ArgAction::Append)
      .help("Mirror to download from, may be given multiple times, in preference order")
    )
    .arg(Arg::new("workers")
      .short('w')
      .long("workers")
      .value_name("N")
      .value_parser(value_parser!(usize))
      .help("Number of parallel downloads, defaults to the number of cores")
    )
    .arg(Arg::new("manifest")
      .short('m')
      .long("manifest")
      .value_name("NAME")
      .help("Name of the manifest on the mirrors")
    )
    .arg(Arg::new("verbose")
      .short('v')
      .long("verbose")
      .action(ArgAction::Count)
      .help("More output, may be repeated")
    )
    .arg(Arg::new("INSTALL_DIR")
      .value_parser(value_parser!(PathBuf))
      .help("The installation to update, defaults to the current directory")
      .index(1)
    )
}

fn init_logging(verbosity: u8) {
  let default = match verbosity {
    0 => "warn,cdn_patcher=info",
    1 => "info,cdn_patcher=debug",
    _ => "debug,cdn_patcher=trace",
  };
  let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
  tracing_subscriber::fmt()
    .with_env_filter(filter)
    .with_writer(std::io::stderr)
    .init();
}

/// Configuration file first, command line arguments override it
fn builder_from(matches: &ArgMatches) -> Result<PatcherBuilder, Error> {
  let mut builder = match matches.get_one::<PathBuf>("config") {
    Some(path) => PatcherBuilder::from_json_file(path)?,
    None => PatcherBuilder::new(),
  };
  if let Some(endpoints) = matches.get_many::<String>("endpoint") {
    builder.set_endpoints(endpoints.cloned().collect());
  }
  if let Some(workers) = matches.get_one::<usize>("workers") {
    builder.set_worker_count(*workers);
  }
  if let Some(manifest) = matches.get_one::<String>("manifest") {
    builder.set_manifest_name(manifest.clone());
  }
  if let Some(install_location) = matches.get_one::<PathBuf>("INSTALL_DIR") {
    builder.set_install_location(install_location.clone());
  }
  Ok(builder)
}

/// One bar per active transfer
struct TransferBars {
  multi: MultiProgress,
  style: ProgressStyle,
  bars: Mutex<HashMap<String, ProgressBar>>,
}

impl TransferBars {
  fn new() -> Self {
    Self {
      multi: MultiProgress::new(),
      style: ProgressStyle::with_template("{msg} > {bytes} / {total_bytes} {eta} @ {bytes_per_sec}")
        .unwrap_or_else(|_| ProgressStyle::default_bar()),
      bars: Mutex::new(HashMap::new()),
    }
  }

  fn handle(&self, event: ProgressEvent) {
    let mut bars = match self.bars.lock() {
      Ok(bars) => bars,
      Err(poisoned) => poisoned.into_inner(),
    };
    match event {
      ProgressEvent::TransferStarted { path, offset, total } => {
        let bar = match total {
          Some(total) => ProgressBar::new(total).with_style(self.style.clone()),
          None => ProgressBar::new_spinner(),
        };
        bar.set_message(path.clone());
        bar.set_position(offset);
        if let Some(previous) = bars.insert(path, self.multi.add(bar)) {
          previous.finish_and_clear();
        }
      },
      ProgressEvent::TransferProgress { path, position } => {
        if let Some(bar) = bars.get(&path) {
          bar.set_position(position);
        }
      },
      ProgressEvent::TransferFinished { path, .. } => {
        if let Some(bar) = bars.remove(&path) {
          bar.finish_and_clear();
        }
      },
    }
  }
}

#[tokio::main]
async fn main() -> ExitCode {
  let matches = command().get_matches();
  init_logging(matches.get_count("verbose"));

  let mut builder = match builder_from(&matches) {
    Ok(builder) => builder,
    Err(e) => {
      eprintln!("Could not read the configuration: {}", e);
      return ExitCode::FAILURE;
    }
  };
  let bars = Arc::new(TransferBars::new());
  let renderer = bars.clone();
  builder.set_progress_callback(Arc::new(move |event: ProgressEvent| renderer.handle(event)));
  let patcher = match builder.build() {
    Ok(patcher) => patcher,
    Err(e) => {
      eprintln!("{}", e);
      return ExitCode::FAILURE;
    }
  };

  match patcher.run().await {
    Ok(report) => {
      for failed in &report.failed {
        eprintln!("Download for {} ({}) failed {} times, check manually: {}", failed.path, failed.url, failed.attempts, failed.error);
      }
      println!("{}", report);
      println!("Downloaded {}.", human_readable_bytesize(patcher.progress().downloaded_bytes()));
      ExitCode::SUCCESS
    },
    Err(Error::NoReachableEndpoints()) => {
      eprintln!("There are no download servers online, try again later.");
      ExitCode::FAILURE
    },
    Err(e) => {
      eprintln!("Could not fetch the version file: {}", e);
      ExitCode::FAILURE
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn command_line_overrides_are_applied() {
    let matches = command().try_get_matches_from([
      "cdn-patcher", "-e", "http://cdn0.example.org/", "--endpoint", "http://cdn1.example.org/", "-w", "2", "-vv", "/opt/game",
    ]).unwrap();
    assert_eq!(matches.get_count("verbose"), 2);
    let builder = builder_from(&matches).unwrap();
    assert_eq!(builder.build().unwrap().config().endpoints.len(), 2);
    assert_eq!(builder.build().unwrap().config().worker_count, 2);
  }

  #[test]
  fn command_definition_is_consistent() {
    command().debug_assert();
  }
}
