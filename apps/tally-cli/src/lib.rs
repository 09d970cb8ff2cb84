//! # Tally CLI
//!
//! Terminal front end for the Tally item list. It plays the part of the
//! page script: it wires input to commands and renders what the store
//! reports back.
//!
//! ## Module Organization
//! ```text
//! tally_cli/
//! ├── lib.rs          ◄─── You are here (startup & command loop)
//! ├── state/
//! │   ├── mod.rs      ◄─── State type exports
//! │   ├── config.rs   ◄─── AppConfig (file, env, defaults)
//! │   └── session.rs  ◄─── Session (store, theme, status)
//! ├── commands/
//! │   ├── items.rs    ◄─── add_item, clear_items, get_items
//! │   └── theme.rs    ◄─── toggle_theme
//! ├── input.rs        ◄─── Line → Command
//! ├── view.rs         ◄─── Session → text
//! ├── currency.rs     ◄─── f64 → "$1,234.50"
//! └── error.rs        ◄─── ApiError, AppError
//! ```
//!
//! ## Startup Sequence
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  1. Parse flags ──────────► --config, --currency, --theme, --empty    │
//! │  2. Initialize logging ───► stderr, RUST_LOG or --verbose             │
//! │  3. Load config ──────────► defaults ◄ file ◄ env ◄ flags             │
//! │  4. Build session ────────► store.initialize(seed), greeting          │
//! │  5. Command loop ─────────► read line, run command, render            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod commands;
pub mod currency;
pub mod error;
pub mod input;
pub mod state;
pub mod view;

use std::io::{self, BufRead, IsTerminal, Write};
use std::path::PathBuf;

use clap::Parser;
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

use crate::currency::CurrencyFormatter;
use crate::error::{ApiError, AppResult};
use crate::input::{parse_line, Command, HELP};
use crate::state::{AppConfig, ConfigError, Session, Theme};

// =============================================================================
// Command Line
// =============================================================================

/// Keep a running tally of priced items.
#[derive(Debug, Clone, Default, Parser)]
#[command(name = "tally", version, about)]
pub struct Cli {
    /// Path to a TOML config file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// ISO 4217 currency code used for display (e.g. USD, EUR)
    #[arg(long, value_name = "CODE")]
    pub currency: Option<String>,

    /// Theme at startup: dark or light
    #[arg(long, value_name = "THEME")]
    pub theme: Option<Theme>,

    /// Start with an empty list instead of the seed items
    #[arg(long)]
    pub empty: bool,

    /// Log debug output to stderr
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Applies flag overrides on top of the loaded configuration.
    pub fn apply(&self, config: &mut AppConfig) {
        if let Some(code) = &self.currency {
            config.currency.code = code.clone();
        }

        if let Some(theme) = self.theme {
            config.theme = theme;
        }

        if self.empty {
            config.seed.clear();
        }
    }
}

// =============================================================================
// Entry Point
// =============================================================================

/// Runs the terminal application on stdin/stdout.
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();

    init_tracing(cli.verbose);
    info!("Starting Tally");

    let config = load_config(&cli, |key| std::env::var(key).ok())?;

    let formatter = config.formatter()?;
    info!(currency = %formatter.code(), theme = %config.theme, seed = config.seed.len(), "Configuration loaded");

    let mut session = Session::new(&config);

    let stdin = io::stdin();
    let prompt = stdin.is_terminal();
    let stdout = io::stdout();
    let mut out = stdout.lock();

    run_session(&mut session, &formatter, stdin.lock(), &mut out, prompt)
}

/// Resolves the startup configuration: defaults, file, environment, then
/// flags. Validation runs once, after the flags are applied.
fn load_config<F>(cli: &Cli, lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let mut config = AppConfig::load_with(cli.config.as_deref(), lookup)?;
    cli.apply(&mut config);
    config.validate()?;
    Ok(config)
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `--verbose` - Debug output for the tally crates only
/// - Default: warnings only, so the view stays readable
///
/// Logs go to stderr; stdout belongs to the view.
fn init_tracing(verbose: bool) {
    let default_filter = if verbose {
        "warn,tally_cli=debug,tally_core=debug"
    } else {
        "warn"
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

// =============================================================================
// Command Loop
// =============================================================================

/// Reads commands from `input` until EOF or `quit`, rendering into `out`.
///
/// ## Render Rules
/// - Startup, successful `add`, `clear`, `list`: full view
/// - Rejected `add`, `theme`, unknown input: status line only
pub fn run_session<R, W>(
    session: &mut Session,
    fmt: &CurrencyFormatter,
    input: R,
    out: &mut W,
    prompt: bool,
) -> AppResult<()>
where
    R: BufRead,
    W: Write,
{
    view::render(out, session, fmt)?;

    let mut lines = input.lines();
    loop {
        if prompt {
            write!(out, "> ")?;
            out.flush()?;
        }

        let Some(line) = lines.next() else {
            debug!("End of input");
            break;
        };
        let line = line?;

        let Some(command) = parse_line(&line) else {
            continue;
        };

        match command {
            Command::Add { name, price } => match commands::add_item(session, &name, &price) {
                Ok(_) => view::render(out, session, fmt)?,
                Err(_) => view::render_status(out, &session.status)?,
            },
            Command::Clear => {
                commands::clear_items(session);
                view::render(out, session, fmt)?;
            }
            Command::ToggleTheme => {
                commands::toggle_theme(session);
                view::render_status(out, &session.status)?;
            }
            Command::List => view::render(out, session, fmt)?,
            Command::Json => {
                let response = commands::get_items(session);
                writeln!(out, "{}", serde_json::to_string_pretty(&response)?)?;
            }
            Command::Help => writeln!(out, "{}", HELP)?,
            Command::Quit => {
                debug!("Quit requested");
                break;
            }
            Command::Unknown(word) => {
                warn!(command = %word, "Unknown command");
                let err = ApiError::unknown_command(&word);
                session.set_status(err.message);
                view::render_status(out, &session.status)?;
            }
        }
    }

    out.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parsing() {
        let cli = Cli::try_parse_from([
            "tally",
            "--currency",
            "EUR",
            "--theme",
            "light",
            "--empty",
        ])
        .unwrap();

        assert_eq!(cli.currency.as_deref(), Some("EUR"));
        assert_eq!(cli.theme, Some(Theme::Light));
        assert!(cli.empty);
        assert!(!cli.verbose);
    }

    #[test]
    fn test_cli_rejects_bad_theme() {
        assert!(Cli::try_parse_from(["tally", "--theme", "neon"]).is_err());
    }

    #[test]
    fn test_cli_apply_overrides_config() {
        let cli = Cli {
            currency: Some("GBP".to_string()),
            theme: Some(Theme::Light),
            empty: true,
            ..Cli::default()
        };

        let mut config = AppConfig::default();
        cli.apply(&mut config);

        assert_eq!(config.currency.code, "GBP");
        assert_eq!(config.theme, Theme::Light);
        assert!(config.seed.is_empty());
    }

    #[test]
    fn test_currency_flag_beats_bad_environment_value() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tally.toml");
        std::fs::write(&path, "").unwrap();

        let env = |key: &str| (key == "TALLY_CURRENCY").then(|| "DOLLARS".to_string());

        let cli = Cli {
            config: Some(path.clone()),
            currency: Some("EUR".to_string()),
            ..Cli::default()
        };
        let config = load_config(&cli, env).unwrap();
        assert_eq!(config.currency.code, "EUR");

        let cli = Cli {
            config: Some(path),
            ..Cli::default()
        };
        assert!(matches!(
            load_config(&cli, env),
            Err(ConfigError::InvalidCurrency(_))
        ));
    }

    #[test]
    fn test_cli_apply_without_flags_is_noop() {
        let mut config = AppConfig::default();
        Cli::default().apply(&mut config);
        assert_eq!(config, AppConfig::default());
    }
}
