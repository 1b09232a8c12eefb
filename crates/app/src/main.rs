use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;

use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use services::{CatalogService, ProgressService};
use storage::Storage;
use ui::{App, UiApp, build_app_context};

#[derive(Debug)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    InvalidPath { flag: &'static str, raw: String },
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::InvalidPath { flag, raw } => write!(f, "invalid {flag} value: {raw}"),
        }
    }
}

impl std::error::Error for ArgsError {}

fn require_value(
    args: &mut impl Iterator<Item = String>,
    flag: &'static str,
) -> Result<String, ArgsError> {
    args.next().ok_or(ArgsError::MissingValue { flag })
}

struct DesktopApp {
    catalog: Arc<CatalogService>,
    progress: Arc<ProgressService>,
}

impl UiApp for DesktopApp {
    fn catalog(&self) -> Arc<CatalogService> {
        Arc::clone(&self.catalog)
    }

    fn progress(&self) -> Arc<ProgressService> {
        Arc::clone(&self.progress)
    }
}

struct Args {
    catalog_path: PathBuf,
    data_dir: PathBuf,
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  cargo run -p app -- [--catalog <path>] [--data-dir <path>]");
    eprintln!();
    eprintln!("Defaults:");
    eprintln!("  --catalog essays.json");
    eprintln!("  --data-dir .");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  ESSAY_TRACKER_CATALOG, ESSAY_TRACKER_DATA_DIR");
}

impl Args {
    fn parse(args: &mut impl Iterator<Item = String>) -> Result<Self, ArgsError> {
        let mut catalog_path = std::env::var("ESSAY_TRACKER_CATALOG")
            .ok()
            .map_or_else(|| PathBuf::from("essays.json"), PathBuf::from);
        let mut data_dir = std::env::var("ESSAY_TRACKER_DATA_DIR")
            .ok()
            .map_or_else(|| PathBuf::from("."), PathBuf::from);

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--catalog" => {
                    let value = require_value(args, "--catalog")?;
                    if value.trim().is_empty() {
                        return Err(ArgsError::InvalidPath {
                            flag: "--catalog",
                            raw: value,
                        });
                    }
                    catalog_path = PathBuf::from(value);
                }
                "--data-dir" => {
                    let value = require_value(args, "--data-dir")?;
                    if value.trim().is_empty() {
                        return Err(ArgsError::InvalidPath {
                            flag: "--data-dir",
                            raw: value,
                        });
                    }
                    data_dir = PathBuf::from(value);
                }
                "--help" | "-h" => {
                    print_usage();
                    std::process::exit(0);
                }
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        Ok(Self {
            catalog_path,
            data_dir,
        })
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut argv = std::env::args().skip(1);
    let parsed = Args::parse(&mut argv).map_err(|e| {
        eprintln!("{e}");
        print_usage();
        e
    })?;

    // Create the data directory in the binary glue so storage stays a plain
    // reader/writer over an existing location.
    std::fs::create_dir_all(&parsed.data_dir)?;
    let storage = Storage::json_file(&parsed.data_dir);

    let app = DesktopApp {
        catalog: Arc::new(CatalogService::new(parsed.catalog_path)),
        progress: Arc::new(ProgressService::new(storage.progress)),
    };

    let context = build_app_context(&(Arc::new(app) as Arc<dyn UiApp>));

    let desktop_cfg = DesktopConfig::new().with_window(
        WindowBuilder::new()
            .with_title("Essay Tracker")
            .with_always_on_top(false),
    );

    LaunchBuilder::desktop()
        .with_cfg(desktop_cfg)
        .with_context(context)
        .launch(App);
    Ok(())
}

fn main() {
    if let Err(err) = run() {
        // At this layer (binary glue), printing once is fine.
        eprintln!("{err}");
        std::process::exit(2);
    }
}
