use std::io::{self, BufRead};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use clap::{Parser, Subcommand};
use notepad::config::{load_config, ConfigWatcher, NotepadConfig};
use notepad::observability::logging;
use notepad::{Notepad, Threshold};

#[derive(Parser)]
#[command(name = "notepad-cli")]
#[command(about = "Route leveled log lines through a configured notepad", long_about = None)]
struct Cli {
    /// TOML configuration file; defaults apply when omitted
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List severity levels, lowest first
    Levels,
    /// Load and validate the configuration, then print the effective settings
    Check,
    /// Emit a single line
    Emit {
        #[arg(short, long, default_value = "info")]
        level: Threshold,

        #[arg(required = true)]
        message: Vec<String>,
    },
    /// Emit every stdin line
    Pipe {
        #[arg(short, long, default_value = "info")]
        level: Threshold,

        /// Re-apply the configuration file whenever it changes
        #[arg(short, long)]
        watch: bool,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    logging::init(logging::DEFAULT_DIRECTIVE)?;
    let cli = Cli::parse();

    match cli.command {
        Commands::Levels => {
            for level in Threshold::ALL {
                println!("{}", level);
            }
        }
        Commands::Check => {
            let config = read_config(cli.config.as_deref())?;
            print!("{}", toml::to_string(&config)?);
        }
        Commands::Emit { level, message } => {
            let notepad = Notepad::from_config(&read_config(cli.config.as_deref())?)?;
            notepad.emit(level, format_args!("{}", message.join(" ")));
        }
        Commands::Pipe { level, watch } => {
            let notepad = Arc::new(Notepad::from_config(&read_config(cli.config.as_deref())?)?);

            // Dropping the watcher stops it; hold it for the whole pipe.
            let _watcher = match (&cli.config, watch) {
                (Some(path), true) => Some(ConfigWatcher::new(path, notepad.clone()).run()?),
                (None, true) => {
                    tracing::warn!("--watch needs --config; continuing without reload");
                    None
                }
                _ => None,
            };

            for line in io::stdin().lock().lines() {
                notepad.emit(level, format_args!("{}", line?));
            }
        }
    }

    Ok(())
}

fn read_config(path: Option<&Path>) -> Result<NotepadConfig, notepad::ConfigError> {
    match path {
        Some(path) => load_config(path),
        None => Ok(NotepadConfig::default()),
    }
}
