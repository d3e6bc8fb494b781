use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use mpd_picker::external::{
    notify_failure, terminal_columns, FzfFinder, MpcPlayback, StdoutFinder,
};
use mpd_picker::mpd::config::{db_file_from_config, find_db_file};
use mpd_picker::picker::{path_from_line, select, SelectAction};
use mpd_picker::{PickerConfig, PickerPipeline};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "mpd-picker")]
#[command(about = "Pick and play tracks from the MPD database with fzf", long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Option<Command>,

    /// Path to mpd.conf (default: search the usual locations)
    #[arg(short = 'c', long, conflicts_with = "database")]
    config: Option<String>,

    /// Path to the MPD database, skipping mpd.conf
    #[arg(short = 'd', long)]
    database: Option<String>,

    /// Terminal width in columns (default: ask stty)
    #[arg(short = 'w', long)]
    width: Option<usize>,

    /// Print the formatted lines instead of starting fzf
    #[arg(long)]
    print: bool,

    /// Verbose logging
    #[arg(short = 'v', long, global = true)]
    verbose: bool,
}

/// Callbacks used by fzf's key bindings
#[derive(Subcommand, Debug)]
enum Command {
    #[command(name = "_play", hide = true)]
    Play {
        #[arg(allow_hyphen_values = true)]
        line: String,
    },

    #[command(name = "_queue", hide = true)]
    Queue {
        #[arg(allow_hyphen_values = true)]
        line: String,
    },
}

fn main() -> Result<()> {
    let args = Args::parse();

    // fzf owns the terminal, so stay quiet unless asked
    let log_level = if args.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    match &args.command {
        Some(Command::Play { line }) => select_line(line, SelectAction::Play),
        Some(Command::Queue { line }) => select_line(line, SelectAction::Queue),
        None => list(&args),
    }
}

/// Handle a line picked in fzf
///
/// Runs hidden behind fzf, so failures are also sent as a notification.
fn select_line(line: &str, action: SelectAction) -> Result<()> {
    let result = path_from_line(line)
        .map_err(anyhow::Error::from)
        .and_then(|path| select(&MpcPlayback::new(), path, action));

    match result {
        Ok(position) => {
            log::info!("{:?} done at queue position {}", action, position);
            Ok(())
        }
        Err(e) => {
            notify_failure(&format!("mpd-picker: {:#}", e));
            Err(e)
        }
    }
}

/// Present the whole library in fzf
fn list(args: &Args) -> Result<()> {
    let db_path = database_path(args)?;

    let columns = match args.width {
        Some(width) => width,
        None => terminal_columns()?,
    };
    let executable = std::env::current_exe().context("Failed to locate own executable")?;
    let config = PickerConfig::new(columns, executable.to_string_lossy());

    if args.print {
        PickerPipeline::new(config, StdoutFinder::new()).pick(&db_path)?;
    } else {
        let finder = FzfFinder::new(&config);
        PickerPipeline::new(config, finder).pick(&db_path)?;
    }

    Ok(())
}

/// Database location from the command line or mpd.conf
fn database_path(args: &Args) -> Result<PathBuf> {
    if let Some(database) = &args.database {
        return Ok(PathBuf::from(shellexpand::tilde(database).as_ref()));
    }

    if let Some(config) = &args.config {
        let config = PathBuf::from(shellexpand::tilde(config).as_ref());
        let home = dirs::home_dir().unwrap_or_else(|| PathBuf::from("/"));
        return db_file_from_config(&config, &home)
            .with_context(|| format!("Failed to read MPD config: {:?}", config));
    }

    Ok(find_db_file()?)
}
