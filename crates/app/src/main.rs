use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use server::{AppState, Config};
use services::{DEFAULT_API_URL, OpenTriviaClient, QuestionSource, QuizProxyClient};

mod play;
mod vm;

const DEFAULT_SERVER_URL: &str = "http://localhost:3000";

#[derive(Debug)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    InvalidPort { raw: String },
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::InvalidPort { raw } => write!(f, "invalid --port value: {raw}"),
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

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  cargo run -p app -- serve [--port <port>] [--public-dir <dir>]");
    eprintln!("  cargo run -p app -- play  [--server <url>] [--direct] [--out-dir <dir>]");
    eprintln!();
    eprintln!("Defaults for serve:");
    eprintln!("  --port 3000");
    eprintln!("  --public-dir public");
    eprintln!();
    eprintln!("Defaults for play:");
    eprintln!("  --server http://localhost:3000");
    eprintln!("  --out-dir .");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  PORT, TRIVIA_PUBLIC_DIR, TRIVIA_API_URL, TRIVIA_SERVER_URL");
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    Serve,
    Play,
}

impl Command {
    fn from_arg(arg: &str) -> Option<Self> {
        match arg {
            "serve" => Some(Self::Serve),
            "play" => Some(Self::Play),
            _ => None,
        }
    }
}

struct ServeArgs {
    port: Option<u16>,
    public_dir: Option<PathBuf>,
}

impl ServeArgs {
    fn parse(args: &mut impl Iterator<Item = String>) -> Result<Self, ArgsError> {
        let mut port = None;
        let mut public_dir = None;

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--port" => {
                    let value = require_value(args, "--port")?;
                    let parsed: u16 = value
                        .parse()
                        .map_err(|_| ArgsError::InvalidPort { raw: value.clone() })?;
                    port = Some(parsed);
                }
                "--public-dir" => {
                    let value = require_value(args, "--public-dir")?;
                    public_dir = Some(PathBuf::from(value));
                }
                "--help" | "-h" => {
                    print_usage();
                    std::process::exit(0);
                }
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        Ok(Self { port, public_dir })
    }
}

struct PlayArgs {
    server_url: String,
    direct: bool,
    out_dir: PathBuf,
}

impl PlayArgs {
    fn parse(args: &mut impl Iterator<Item = String>) -> Result<Self, ArgsError> {
        let mut server_url = std::env::var("TRIVIA_SERVER_URL")
            .unwrap_or_else(|_| DEFAULT_SERVER_URL.to_string());
        let mut direct = false;
        let mut out_dir = PathBuf::from(".");

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--server" => {
                    server_url = require_value(args, "--server")?;
                }
                "--direct" => {
                    direct = true;
                }
                "--out-dir" => {
                    let value = require_value(args, "--out-dir")?;
                    out_dir = PathBuf::from(value);
                }
                "--help" | "-h" => {
                    print_usage();
                    std::process::exit(0);
                }
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        Ok(Self {
            server_url,
            direct,
            out_dir,
        })
    }
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut argv: Vec<String> = std::env::args().skip(1).collect();

    // Default behavior: serving when no subcommand is provided.
    let cmd = match argv.first().map(String::as_str) {
        None => Command::Serve,
        Some("--help" | "-h") => {
            print_usage();
            return Ok(());
        }
        Some(first) if first.starts_with("--") => Command::Serve,
        Some(first) => Command::from_arg(first).ok_or_else(|| {
            eprintln!("unknown subcommand: {first}");
            print_usage();
            std::io::Error::new(std::io::ErrorKind::InvalidInput, "unknown subcommand")
        })?,
    };

    if matches!(cmd, Command::Serve | Command::Play)
        && !argv.is_empty()
        && !argv[0].starts_with("--")
    {
        argv.remove(0);
    }

    let mut iter = argv.into_iter();
    match cmd {
        Command::Serve => {
            let args = ServeArgs::parse(&mut iter).map_err(|e| {
                eprintln!("{e}");
                print_usage();
                e
            })?;

            let mut config = Config::load()?;
            if let Some(port) = args.port {
                config.port = port;
            }
            if let Some(public_dir) = args.public_dir {
                config.public_dir = public_dir;
            }

            let state = AppState::new(config);
            server::serve(state).await?;
            Ok(())
        }
        Command::Play => {
            let args = PlayArgs::parse(&mut iter).map_err(|e| {
                eprintln!("{e}");
                print_usage();
                e
            })?;

            // Keep source wiring in the binary glue so the play loop stays pure.
            let source: Arc<dyn QuestionSource> = if args.direct {
                let api_url = std::env::var("TRIVIA_API_URL")
                    .unwrap_or_else(|_| DEFAULT_API_URL.to_string());
                Arc::new(OpenTriviaClient::new(api_url))
            } else {
                Arc::new(QuizProxyClient::new(args.server_url))
            };

            play::run(source, &args.out_dir).await
        }
    }
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    if let Err(err) = run().await {
        // At this layer (binary glue), printing once is fine.
        eprintln!("{err}");
        std::process::exit(2);
    }
}
