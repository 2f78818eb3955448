// Module-specific lints configuration
#![allow(clippy::uninlined_format_args)]

use anyhow::{Result, anyhow, Context};
use log::{info, debug, LevelFilter, Log, Metadata, Record, Level, SetLoggerError};
use std::path::{Path, PathBuf};
use std::io::Write;
use std::fs::File;
use std::io::BufReader;
use clap::{Parser, ValueEnum, CommandFactory, Subcommand};
use clap_complete::{generate, Shell};

use chat2ass::app_config::{self, Config};
use chat2ass::app_controller::{Controller, FileOutcome};
use chat2ass::ass_writer::CommentStyle;

/// CLI Wrapper for CommentStyle to implement ValueEnum
#[derive(Debug, Clone, ValueEnum)]
enum CliCommentStyle {
    White,
    Blue,
    Red,
}

impl From<CliCommentStyle> for CommentStyle {
    fn from(cli_style: CliCommentStyle) -> Self {
        match cli_style {
            CliCommentStyle::White => CommentStyle::White,
            CliCommentStyle::Blue => CommentStyle::Blue,
            CliCommentStyle::Red => CommentStyle::Red,
        }
    }
}

/// CLI Wrapper for LogLevel to implement ValueEnum
#[derive(Debug, Clone, ValueEnum)]
enum CliLogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<CliLogLevel> for app_config::LogLevel {
    fn from(cli_level: CliLogLevel) -> Self {
        match cli_level {
            CliLogLevel::Error => app_config::LogLevel::Error,
            CliLogLevel::Warn => app_config::LogLevel::Warn,
            CliLogLevel::Info => app_config::LogLevel::Info,
            CliLogLevel::Debug => app_config::LogLevel::Debug,
            CliLogLevel::Trace => app_config::LogLevel::Trace,
        }
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Generate shell completions for chat2ass
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// chat2ass - Convert chat replays to danmaku subtitles
///
/// Reads a chat file exported by TwitchDownloader and writes an ASS subtitle
/// where every comment scrolls across the screen.
#[derive(Parser, Debug)]
#[command(name = "chat2ass")]
#[command(version)]
#[command(about = "Convert chat comments to scrolling ASS subtitles")]
#[command(long_about = "chat2ass converts a TwitchDownloader chat json file into an ASS subtitle file with scrolling (danmaku) comments.

EXAMPLES:
    chat2ass chat.json                          # Writes chat.ass next to the input
    chat2ass chat.json -o out/stream.ass        # Choose the output file
    chat2ass chat.json -s 0:30:0 -e 1:0:0       # Only comments between 30 and 60 minutes
    chat2ass chat.json -b ban.json --style red  # Apply ban rules, red comments
    chat2ass /chats/                            # Convert every .json chat in a folder
    chat2ass completions bash > chat2ass.bash   # Generate bash completions

BAN FILE:
    A json object with four lists of strings:
    {\"remove_words\": [], \"ban_comments\": [], \"ban_users\": [], \"ban_critical\": []}

CONFIGURATION:
    Settings can be stored in chat2ass.json (or the file given with --config-path).
    Command line options override the file.")]
struct CommandLineOptions {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Input chat json file or directory to process
    #[arg(value_name = "INPUT_PATH")]
    input_path: Option<PathBuf>,

    /// Output subtitle file (single file mode only)
    #[arg(short, long)]
    output_file: Option<PathBuf>,

    /// Ban rules file
    #[arg(short, long)]
    ban_file: Option<PathBuf>,

    /// Start time of comments to output (h:m:s)
    #[arg(short, long)]
    start_time: Option<String>,

    /// End time of comments to output (h:m:s, 0:0:0 for no limit)
    #[arg(short, long)]
    end_time: Option<String>,

    /// Comment player's x resolution
    #[arg(short = 'x', long)]
    play_res_x: Option<u32>,

    /// Comment player's y resolution
    #[arg(short = 'y', long)]
    play_res_y: Option<u32>,

    /// Font size of comments
    #[arg(short, long)]
    font_size: Option<u32>,

    /// Time in seconds that comments stay visible
    #[arg(short, long)]
    visible_time: Option<u32>,

    /// Color style of comments
    #[arg(long, value_enum)]
    style: Option<CliCommentStyle>,

    /// Configuration file path
    #[arg(short, long, default_value = "chat2ass.json")]
    config_path: String,

    /// Set logging level
    #[arg(short, long, value_enum)]
    log_level: Option<CliLogLevel>,

    /// Overwrite existing output files
    #[arg(long)]
    force_overwrite: bool,
}

// @struct: Custom logger implementation
struct CustomLogger {
    level: LevelFilter,
}

impl CustomLogger {
    // @creates: New logger with specified level
    fn new(level: LevelFilter) -> Self {
        CustomLogger { level }
    }

    // @initializes: Global logger
    fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
        let logger = Box::new(CustomLogger::new(level));
        log::set_boxed_logger(logger)?;
        log::set_max_level(level);
        Ok(())
    }

    // @returns: ANSI color and label for log level
    fn style_for_level(level: Level) -> (&'static str, &'static str) {
        match level {
            Level::Error => ("1;31", "ERROR"),
            Level::Warn => ("1;33", "WARN "),
            Level::Info => ("1;32", "INFO "),
            Level::Debug => ("1;36", "DEBUG"),
            Level::Trace => ("1;35", "TRACE"),
        }
    }
}

impl Log for CustomLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let now = chrono::Local::now().format("%H:%M:%S.%3f");
            let (color, label) = Self::style_for_level(record.level());

            let mut stderr = std::io::stderr();
            let _ = writeln!(
                stderr,
                "\x1B[{}m{} {} {}\x1B[0m",
                color, now, label, record.args()
            );
        }
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

fn level_filter(level: &app_config::LogLevel) -> LevelFilter {
    match level {
        app_config::LogLevel::Error => LevelFilter::Error,
        app_config::LogLevel::Warn => LevelFilter::Warn,
        app_config::LogLevel::Info => LevelFilter::Info,
        app_config::LogLevel::Debug => LevelFilter::Debug,
        app_config::LogLevel::Trace => LevelFilter::Trace,
    }
}

fn main() -> Result<()> {
    // The level is refined once the config is loaded; the logger itself lets
    // everything through and `log::max_level` does the filtering
    CustomLogger::init(LevelFilter::Trace)?;
    log::set_max_level(LevelFilter::Info);

    let cli = CommandLineOptions::parse();

    if let Some(Commands::Completions { shell }) = &cli.command {
        let mut cmd = CommandLineOptions::command();
        generate(*shell, &mut cmd, "chat2ass", &mut std::io::stdout());
        return Ok(());
    }

    run_convert(cli)
}

// Load the config file if present, then apply command line overrides
fn load_config(options: &CommandLineOptions) -> Result<Config> {
    let config_path = &options.config_path;

    let mut config = if Path::new(config_path).exists() {
        let file = File::open(config_path)
            .context(format!("Failed to open config file: {}", config_path))?;

        let reader = BufReader::new(file);
        serde_json::from_reader(reader)
            .context(format!("Failed to parse config file: {}", config_path))?
    } else {
        debug!("Config file not found at '{}', using defaults.", config_path);
        Config::default()
    };

    if let Some(start_time) = &options.start_time {
        config.start_time = start_time.clone();
    }
    if let Some(end_time) = &options.end_time {
        config.end_time = end_time.clone();
    }
    if let Some(play_res_x) = options.play_res_x {
        config.play_res_x = play_res_x;
    }
    if let Some(play_res_y) = options.play_res_y {
        config.play_res_y = play_res_y;
    }
    if let Some(font_size) = options.font_size {
        config.font_size = font_size;
    }
    if let Some(visible_time) = options.visible_time {
        config.visible_time_secs = visible_time;
    }
    if let Some(style) = &options.style {
        config.style = style.clone().into();
    }
    if let Some(log_level) = &options.log_level {
        config.log_level = log_level.clone().into();
    }

    Ok(config)
}

fn run_convert(options: CommandLineOptions) -> Result<()> {
    let input_path = options.input_path.clone().ok_or_else(|| {
        anyhow!("INPUT_PATH is required when no subcommand is specified")
    })?;

    let config = load_config(&options)?;
    log::set_max_level(level_filter(&config.log_level));

    info!("start_time: {}", config.start_time);
    info!("end_time: {}", config.end_time);

    let controller = Controller::with_config(config)?;
    let ban_file = options.ban_file.as_deref();

    if input_path.is_file() {
        match controller.run(&input_path, options.output_file.clone(), ban_file, options.force_overwrite)? {
            FileOutcome::Converted { stats, .. } => debug!("{}", stats),
            FileOutcome::Skipped(_) => {}
        }
    } else if input_path.is_dir() {
        if options.output_file.is_some() {
            return Err(anyhow!("--output-file cannot be used with a directory input"));
        }
        controller.run_folder(&input_path, ban_file, options.force_overwrite)?;
    } else {
        return Err(anyhow!("File {:?} not found. Confirm the file name.", input_path));
    }

    Ok(())
}
