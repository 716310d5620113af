//! Deskcalc CLI
//!
//! ## Usage
//!
//! ```bash
//! deskcalc                      # Interactive terminal calculator
//! deskcalc eval "5 + 3 ="       # Replay keystrokes, print the display
//! deskcalc history              # Print saved history, oldest first
//! deskcalc history --clear      # Empty saved history
//! deskcalc config               # Show config path and values
//! deskcalc config --theme dark --window-size 500x700
//! ```

use clap::{Parser, Subcommand};
use deskcalc::config::{ConfigError, ConfigStore, FixedDir, PathProvider, PlatformDirs, Theme};
use deskcalc::driver::{CalculatorDriver, DriverError};
use deskcalc::session::Session;
use std::path::PathBuf;
use std::process::ExitCode;
use thiserror::Error;
use tracing_subscriber::EnvFilter;

type Paths = Box<dyn PathProvider>;

/// Errors surfaced to the user by the CLI
#[derive(Debug, Error)]
enum CliError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Config(#[from] ConfigError),

    #[error("{0}")]
    Eval(#[from] DriverError),

    #[error("failed to save configuration (see log)")]
    Save,
}

type CliResult<T> = Result<T, CliError>;

/// Keypad calculator with a running total and persisted history
#[derive(Parser, Debug)]
#[command(name = "deskcalc", version, about)]
struct Cli {
    /// Directory holding config.json [default: platform config directory]
    #[arg(long, global = true, env = "DESKCALC_CONFIG_DIR")]
    config_dir: Option<PathBuf>,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Subcommand to run (defaults to `tui`)
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run the interactive terminal calculator
    #[cfg(feature = "tui")]
    Tui,

    /// Replay a keystroke string such as "12.5 * 4 =" and print the display
    Eval {
        /// Keys: digits, '.', + - * x / %, '=', 'c' (clear), '<' (backspace)
        keys: String,
    },

    /// Show or manage the saved history
    History {
        /// Remove all saved entries
        #[arg(long, conflicts_with = "export")]
        clear: bool,

        /// Write the history to history.json next to the config
        #[arg(long)]
        export: bool,
    },

    /// Show the configuration file path and its values, after applying
    /// any changes given
    Config {
        /// Set the colour theme (light or dark)
        #[arg(long)]
        theme: Option<Theme>,

        /// Set the preferred window size, e.g. 400x600
        #[arg(long, value_parser = parse_window_size)]
        window_size: Option<(i64, i64)>,
    },
}

fn parse_window_size(s: &str) -> Result<(i64, i64), String> {
    let invalid = || format!("expected WIDTHxHEIGHT with positive numbers, got {s:?}");
    let (width, height) = s.split_once(['x', 'X']).ok_or_else(invalid)?;
    let width: i64 = width.trim().parse().map_err(|_| invalid())?;
    let height: i64 = height.trim().parse().map_err(|_| invalid())?;
    if width <= 0 || height <= 0 {
        return Err(invalid());
    }
    Ok((width, height))
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn default_level(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

fn init_tracing(verbose: u8) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_level(verbose)));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn run(cli: Cli) -> CliResult<()> {
    let paths: Paths = match cli.config_dir {
        Some(dir) => Box::new(FixedDir(dir)),
        None => Box::new(PlatformDirs),
    };
    let store = ConfigStore::new(paths);

    match cli.command {
        #[cfg(feature = "tui")]
        None | Some(Commands::Tui) => tui::run(store),
        #[cfg(not(feature = "tui"))]
        None => run_history(store, false, false),
        Some(Commands::Eval { keys }) => run_eval(store, &keys),
        Some(Commands::History { clear, export }) => run_history(store, clear, export),
        Some(Commands::Config { theme, window_size }) => run_config(store, theme, window_size),
    }
}

fn run_eval(store: ConfigStore<Paths>, keys: &str) -> CliResult<()> {
    let mut session = Session::open(store);
    let result = session.calculator_mut().run_script(keys);
    let display = session.calculator().display().to_string();
    // Entries recorded before a failing key are still kept
    session.close();
    result?;
    println!("{display}");
    Ok(())
}

fn run_history(store: ConfigStore<Paths>, clear: bool, export: bool) -> CliResult<()> {
    let mut session = Session::open(store);

    if clear {
        session.calculator_mut().clear_history();
        if !session.save() {
            return Err(CliError::Save);
        }
        println!("History cleared");
        return Ok(());
    }

    if export {
        let entries = session.calculator().history().entries();
        let path = session.store().export_history(entries)?;
        println!("Exported {} entries to {}", entries.len(), path.display());
        return Ok(());
    }

    let history = session.calculator().history();
    if history.is_empty() {
        println!("No calculations yet");
    } else {
        println!("{}", history.export_formatted());
    }
    Ok(())
}

fn run_config(
    store: ConfigStore<Paths>,
    theme: Option<Theme>,
    window_size: Option<(i64, i64)>,
) -> CliResult<()> {
    let path = store.config_path();
    // A malformed file is reported here rather than replaced by defaults
    let mut config = store.load()?;

    if theme.is_some() || window_size.is_some() {
        let mut session = Session::with_config(store, config);
        if let Some(theme) = theme {
            session.set_theme(theme);
        }
        if let Some((width, height)) = window_size {
            session.set_window_size(width, height);
        }
        if !session.save() {
            return Err(CliError::Save);
        }
        config = session.config().clone();
    }

    match path {
        Ok(path) => println!("Config file: {}", path.display()),
        Err(e) => println!("Config file: <none> ({e})"),
    }
    let json = serde_json::to_string_pretty(&config).map_err(ConfigError::from)?;
    println!("{json}");
    Ok(())
}

#[cfg(feature = "tui")]
mod tui {
    use super::{CliError, CliResult, Paths};
    use crossterm::{
        event::{self, DisableMouseCapture, EnableMouseCapture, Event, MouseButton, MouseEventKind},
        execute,
        terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    };
    use deskcalc::config::ConfigStore;
    use deskcalc::session::Session;
    use deskcalc::tui::{layout, render, CalculatorApp, InputHandler, Tab};
    use ratatui::{backend::CrosstermBackend, layout::Rect, Terminal};
    use std::io::{self, Stdout};

    type CrosstermTerminal = Terminal<CrosstermBackend<Stdout>>;

    /// Runs the interactive calculator and saves the session on exit
    pub fn run(store: ConfigStore<Paths>) -> CliResult<()> {
        let mut app = CalculatorApp::new(Session::open(store));

        let outcome = match setup_terminal() {
            Ok(mut terminal) => {
                let result = run_app(&mut terminal, &mut app);
                // Restore even if the loop failed; the loop error wins
                let restored = restore_terminal(&mut terminal);
                result.and(restored.map_err(CliError::from))
            }
            Err(e) => Err(e.into()),
        };

        finish(app, outcome)
    }

    /// Saves the session whatever happened to the terminal, then reports
    /// `outcome`
    pub fn finish(app: CalculatorApp<Paths>, outcome: CliResult<()>) -> CliResult<()> {
        app.into_session().close();
        outcome
    }

    fn setup_terminal() -> io::Result<CrosstermTerminal> {
        enable_raw_mode()?;
        let terminal = execute!(io::stdout(), EnterAlternateScreen, EnableMouseCapture)
            .and_then(|()| Terminal::new(CrosstermBackend::new(io::stdout())));
        if terminal.is_err() {
            // The setup error is the one reported
            let _ = restore_modes();
        }
        terminal
    }

    /// Leaves raw mode and the alternate screen, attempting every step
    fn restore_modes() -> io::Result<()> {
        let raw = disable_raw_mode();
        let screen = execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture);
        raw.and(screen)
    }

    fn restore_terminal(terminal: &mut CrosstermTerminal) -> io::Result<()> {
        let modes = restore_modes();
        let cursor = terminal.show_cursor();
        modes.and(cursor)
    }

    fn run_app<B: ratatui::backend::Backend>(
        terminal: &mut Terminal<B>,
        app: &mut CalculatorApp<Paths>,
    ) -> CliResult<()> {
        let input_handler = InputHandler::new();

        while !app.should_quit() {
            terminal.draw(|f| render(app, f))?;

            match event::read()? {
                Event::Key(key) => app.handle_action(input_handler.handle_key(key)),
                Event::Mouse(mouse) if mouse.kind == MouseEventKind::Down(MouseButton::Left) => {
                    if app.dialog().is_some() {
                        app.dismiss_dialog();
                        continue;
                    }
                    if app.tab() != Tab::Calculator {
                        continue;
                    }
                    let size = terminal.size()?;
                    let body = layout(Rect::new(0, 0, size.width, size.height)).body;
                    if let Some(idx) = app.keypad().hit_test(body, mouse.column, mouse.row) {
                        app.click(idx);
                    }
                }
                _ => {}
            }
        }

        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn store_in(dir: &TempDir) -> ConfigStore<Paths> {
        let paths: Paths = Box::new(FixedDir(dir.path().to_path_buf()));
        ConfigStore::new(paths)
    }

    fn saved_history(dir: &TempDir) -> Vec<String> {
        store_in(dir).load().unwrap().history
    }

    mod parse_tests {
        use super::*;

        #[test]
        fn test_parse_eval() {
            let cli = Cli::parse_from(["deskcalc", "eval", "5+3="]);
            assert!(matches!(cli.command, Some(Commands::Eval { ref keys }) if keys == "5+3="));
            assert_eq!(cli.verbose, 0);
            assert!(cli.config_dir.is_none());
        }

        #[test]
        fn test_parse_no_command() {
            let cli = Cli::parse_from(["deskcalc"]);
            assert!(cli.command.is_none());
        }

        #[test]
        fn test_parse_global_flags_after_subcommand() {
            let cli = Cli::parse_from(["deskcalc", "history", "--clear", "--config-dir", "cfg", "-vv"]);
            assert_eq!(cli.config_dir, Some(PathBuf::from("cfg")));
            assert_eq!(cli.verbose, 2);
            assert!(matches!(
                cli.command,
                Some(Commands::History { clear: true, export: false })
            ));
        }

        #[test]
        fn test_parse_clear_conflicts_with_export() {
            assert!(Cli::try_parse_from(["deskcalc", "history", "--clear", "--export"]).is_err());
        }

        #[test]
        fn test_parse_config_options() {
            let cli = Cli::parse_from([
                "deskcalc",
                "config",
                "--theme",
                "dark",
                "--window-size",
                "500x700",
            ]);
            assert!(matches!(
                cli.command,
                Some(Commands::Config {
                    theme: Some(Theme::Dark),
                    window_size: Some((500, 700)),
                })
            ));
        }

        #[test]
        fn test_parse_config_rejects_unknown_theme() {
            assert!(Cli::try_parse_from(["deskcalc", "config", "--theme", "blue"]).is_err());
        }

        #[test]
        fn test_parse_window_size() {
            assert_eq!(parse_window_size("400x600"), Ok((400, 600)));
            assert_eq!(parse_window_size("80 X 24"), Ok((80, 24)));
            assert!(parse_window_size("400").is_err());
            assert!(parse_window_size("0x600").is_err());
            assert!(parse_window_size("-1x600").is_err());
            assert!(parse_window_size("axb").is_err());
        }

        #[test]
        fn test_default_level() {
            assert_eq!(default_level(0), "warn");
            assert_eq!(default_level(1), "info");
            assert_eq!(default_level(2), "debug");
            assert_eq!(default_level(3), "trace");
            assert_eq!(default_level(9), "trace");
        }
    }

    mod command_tests {
        use super::*;

        #[test]
        fn test_eval_saves_history() {
            let dir = TempDir::new().unwrap();
            run_eval(store_in(&dir), "5+3=").unwrap();
            assert_eq!(saved_history(&dir), vec!["5 + 3 = 8"]);
        }

        #[test]
        fn test_failed_eval_keeps_earlier_entries() {
            let dir = TempDir::new().unwrap();
            let err = run_eval(store_in(&dir), "5+3=9÷0=").unwrap_err();
            assert!(matches!(err, CliError::Eval(_)));
            assert_eq!(err.to_string(), "Division by zero");
            assert_eq!(saved_history(&dir), vec!["5 + 3 = 8"]);
        }

        #[test]
        fn test_eval_unknown_key() {
            let dir = TempDir::new().unwrap();
            let err = run_eval(store_in(&dir), "5+y").unwrap_err();
            assert!(err.to_string().contains("unknown key 'y'"));
        }

        #[test]
        fn test_history_clear() {
            let dir = TempDir::new().unwrap();
            run_eval(store_in(&dir), "2×2=").unwrap();
            run_history(store_in(&dir), true, false).unwrap();
            assert!(saved_history(&dir).is_empty());
        }

        #[test]
        fn test_history_export() {
            let dir = TempDir::new().unwrap();
            run_eval(store_in(&dir), "6×7=").unwrap();
            run_history(store_in(&dir), false, true).unwrap();
            let text = std::fs::read_to_string(dir.path().join("history.json")).unwrap();
            let exported: Vec<String> = serde_json::from_str(&text).unwrap();
            assert_eq!(exported, vec!["6 × 7 = 42"]);
        }

        #[test]
        fn test_config_sets_preferences_and_keeps_history() {
            let dir = TempDir::new().unwrap();
            run_eval(store_in(&dir), "1+1=").unwrap();
            run_config(store_in(&dir), Some(Theme::Dark), Some((500, 700))).unwrap();

            let config = store_in(&dir).load().unwrap();
            assert_eq!(config.theme, Theme::Dark);
            assert_eq!((config.window_width, config.window_height), (500, 700));
            assert_eq!(config.history, vec!["1 + 1 = 2"]);
        }

        #[test]
        fn test_config_refuses_to_overwrite_malformed_file() {
            let dir = TempDir::new().unwrap();
            std::fs::write(dir.path().join("config.json"), "{ broken").unwrap();
            let err = run_config(store_in(&dir), Some(Theme::Dark), None).unwrap_err();
            assert!(matches!(err, CliError::Config(ConfigError::Parse { .. })));
            let text = std::fs::read_to_string(dir.path().join("config.json")).unwrap();
            assert_eq!(text, "{ broken");
        }

        #[cfg(feature = "tui")]
        #[test]
        fn test_tui_finish_saves_even_when_restore_failed() {
            use deskcalc::core::Input;
            use deskcalc::tui::{CalculatorApp, KeyAction};

            let dir = TempDir::new().unwrap();
            let mut app = CalculatorApp::new(Session::open(store_in(&dir)));
            for c in "9-4=".chars() {
                app.handle_action(KeyAction::Press(Input::from_char(c).unwrap()));
            }

            let restore_failed = std::io::Error::other("restore failed");
            let err = tui::finish(app, Err(CliError::Io(restore_failed))).unwrap_err();
            assert!(err.to_string().contains("restore failed"));
            assert_eq!(saved_history(&dir), vec!["9 - 4 = 5"]);
        }
    }
}
