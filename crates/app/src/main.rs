use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;

use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use services::{AppServices, CanvasConfig, CanvasService, SessionCatalogService};
use storage::Storage;
use tracing_subscriber::EnvFilter;
use ui::{App, DesktopLinkOpener, LinkOpenerRef, UiApp, build_app_context};

#[derive(Debug)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    InvalidSessionsPath { raw: String },
    InvalidApiUrl { raw: String },
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::InvalidSessionsPath { raw } => {
                write!(f, "invalid --sessions value: {raw:?}")
            }
            ArgsError::InvalidApiUrl { raw } => write!(f, "invalid --api-url value: {raw:?}"),
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
    services: AppServices,
    link_opener: LinkOpenerRef,
}

impl UiApp for DesktopApp {
    fn catalog(&self) -> Arc<SessionCatalogService> {
        self.services.catalog()
    }

    fn canvas(&self) -> Arc<CanvasService> {
        self.services.canvas()
    }

    fn link_opener(&self) -> LinkOpenerRef {
        Arc::clone(&self.link_opener)
    }
}

struct Args {
    sessions_path: Option<PathBuf>,
    canvas: CanvasConfig,
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  cargo run -p app -- ui   [--sessions <path>] [--api-url <url>]");
    eprintln!("  cargo run -p app -- list [--sessions <path>]");
    eprintln!();
    eprintln!("Defaults:");
    eprintln!("  --sessions  embedded sample sessions");
    eprintln!("  --api-url   http://localhost:57988");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  REPLAY_SESSIONS_PATH, REPLAY_API_URL, REPLAY_SYSTEM_PROMPT,");
    eprintln!("  REPLAY_TEXT_MODEL, REPLAY_IMAGE_MODEL (provider:model), RUST_LOG");
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    Ui,
    List,
}

impl Command {
    fn from_arg(arg: &str) -> Option<Self> {
        match arg {
            "ui" => Some(Self::Ui),
            "list" => Some(Self::List),
            _ => None,
        }
    }
}

impl Args {
    fn parse(args: &mut impl Iterator<Item = String>) -> Result<Self, ArgsError> {
        let mut sessions_path = std::env::var("REPLAY_SESSIONS_PATH")
            .ok()
            .filter(|value| !value.trim().is_empty())
            .map(PathBuf::from);
        let mut canvas = CanvasConfig::from_env();

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--sessions" => {
                    let value = require_value(args, "--sessions")?;
                    if value.trim().is_empty() {
                        return Err(ArgsError::InvalidSessionsPath { raw: value });
                    }
                    sessions_path = Some(PathBuf::from(value));
                }
                "--api-url" => {
                    let value = require_value(args, "--api-url")?;
                    let trimmed = value.trim();
                    if !(trimmed.starts_with("http://") || trimmed.starts_with("https://")) {
                        return Err(ArgsError::InvalidApiUrl { raw: value });
                    }
                    canvas = canvas.with_base_url(trimmed);
                }
                "--help" | "-h" => {
                    print_usage();
                    std::process::exit(0);
                }
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        Ok(Self {
            sessions_path,
            canvas,
        })
    }

    fn load_storage(&self) -> Result<Storage, storage::StorageError> {
        match &self.sessions_path {
            Some(path) => Storage::from_json_file(path),
            None => Storage::embedded_fixture(),
        }
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init();
}

fn print_catalog(services: &AppServices) {
    let groups = services.catalog().group_by_category();
    if groups.is_empty() {
        println!("no sessions");
        return;
    }
    for group in groups {
        println!("{} ({})", group.category, group.len());
        for session in &group.sessions {
            println!(
                "  {}  score {}/10  {}s  {} steps  {}",
                session.id(),
                session.score(),
                session.duration_secs(),
                session.journey().len(),
                session.journey_preview(),
            );
        }
    }
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut argv: Vec<String> = std::env::args().skip(1).collect();

    // No subcommand launches the UI.
    let cmd = match argv.first().map(String::as_str) {
        None => Command::Ui,
        Some("--help" | "-h") => {
            print_usage();
            return Ok(());
        }
        Some(first) if first.starts_with("--") => Command::Ui,
        Some(first) => Command::from_arg(first).ok_or_else(|| {
            eprintln!("unknown subcommand: {first}");
            print_usage();
            std::io::Error::new(std::io::ErrorKind::InvalidInput, "unknown subcommand")
        })?,
    };

    if !argv.is_empty() && !argv[0].starts_with("--") {
        argv.remove(0);
    }

    let mut iter = argv.into_iter();
    let parsed = Args::parse(&mut iter).map_err(|e| {
        eprintln!("{e}");
        print_usage();
        e
    })?;

    init_tracing();

    let storage = parsed.load_storage()?;
    let services = AppServices::with_http_canvas(&storage, parsed.canvas.clone());

    match cmd {
        Command::Ui => {
            tracing::info!(
                canvas_api = %parsed.canvas.base_url,
                "launching session replay browser"
            );
            let app: Arc<dyn UiApp> = Arc::new(DesktopApp {
                services,
                link_opener: Arc::new(DesktopLinkOpener),
            });
            let context = build_app_context(&app);

            // Some dev setups default to an always-on-top window.
            let desktop_cfg = DesktopConfig::new().with_window(
                WindowBuilder::new()
                    .with_title("Session Replays")
                    .with_always_on_top(false),
            );

            LaunchBuilder::desktop()
                .with_cfg(desktop_cfg)
                .with_context(context)
                .launch(App);
            Ok(())
        }
        Command::List => {
            print_catalog(&services);
            Ok(())
        }
    }
}

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        eprintln!("{err}");
        std::process::exit(2);
    }
}
