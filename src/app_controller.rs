use anyhow::{Result, Context};
use log::{error, warn, info, debug};
use std::path::{Path, PathBuf};

use crate::app_config::{Config, Settings};
use crate::ban_rules::BanRuleSet;
use crate::chat_source::ChatLog;
use crate::comment_processor::{self, ProcessingStats};
use crate::file_utils::FileManager;

// @module: Application controller for chat conversion

/// Extension of chat export files picked up in folder mode
pub const CHAT_EXTENSION: &str = "json";

/// Extension of generated subtitle files
pub const SUBTITLE_EXTENSION: &str = "ass";

/// Result of converting a single chat file
#[derive(Debug, Clone, PartialEq)]
pub enum FileOutcome {
    /// The subtitle file was written
    Converted {
        output_file: PathBuf,
        stats: ProcessingStats,
    },
    /// Output already existed and overwrite was not forced
    Skipped(PathBuf),
}

/// Main application controller for chat conversion
pub struct Controller {
    // @field: App configuration
    config: Config,

    // @field: Validated settings derived from the configuration
    settings: Settings,
}

impl Controller {
    // @method: Create a new controller with the given configuration
    pub fn with_config(config: Config) -> Result<Self> {
        let settings = config.validate()
            .context("Configuration validation failed")?;

        debug!(
            "Time range: {}s to {}",
            settings.range.start_seconds,
            if settings.range.is_unbounded() {
                "end of chat".to_string()
            } else {
                format!("{}s", settings.range.end_seconds)
            }
        );

        Ok(Self { config, settings })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Convert a single chat file.
    ///
    /// When `output_file` is `None` the subtitle is written next to the input
    /// with an `.ass` extension.
    pub fn run(
        &self,
        input_file: &Path,
        output_file: Option<PathBuf>,
        ban_file: Option<&Path>,
        force_overwrite: bool,
    ) -> Result<FileOutcome> {
        let rules = BanRuleSet::load(ban_file)
            .context("Failed to load ban rules")?;

        let output_file = output_file.unwrap_or_else(|| Self::default_output_path(input_file));
        self.convert_file(input_file, &output_file, &rules, force_overwrite)
    }

    /// Convert every chat file found below a directory.
    ///
    /// A failing file is logged and does not stop the others. Returns the
    /// number of files written.
    pub fn run_folder(&self, input_dir: &Path, ban_file: Option<&Path>, force_overwrite: bool) -> Result<usize> {
        if !FileManager::dir_exists(input_dir) {
            return Err(anyhow::anyhow!("Input directory does not exist: {:?}", input_dir));
        }

        let rules = BanRuleSet::load(ban_file)
            .context("Failed to load ban rules")?;

        let chat_files = FileManager::find_files(input_dir, CHAT_EXTENSION)?;
        info!("Found {} chat file(s) in {:?}", chat_files.len(), input_dir);

        let mut converted = 0;
        for chat_file in chat_files {
            // The ban file may live in the same folder
            if ban_file.is_some_and(|b| b == chat_file.as_path()) {
                continue;
            }

            let output_file = Self::default_output_path(&chat_file);
            match self.convert_file(&chat_file, &output_file, &rules, force_overwrite) {
                Ok(FileOutcome::Converted { .. }) => converted += 1,
                Ok(FileOutcome::Skipped(_)) => {}
                Err(e) => error!("Error processing file {:?}: {:#}", chat_file, e),
            }
        }

        info!("Finished processing {} files", converted);
        Ok(converted)
    }

    /// Load, convert and write one chat file with already loaded ban rules
    pub fn convert_file(
        &self,
        input_file: &Path,
        output_file: &Path,
        rules: &BanRuleSet,
        force_overwrite: bool,
    ) -> Result<FileOutcome> {
        if output_file.exists() && !force_overwrite {
            warn!("Output file already exists: {:?}. Use --force-overwrite to replace it.", output_file);
            return Ok(FileOutcome::Skipped(output_file.to_path_buf()));
        }

        info!("Converting {:?}", input_file);
        let chat = ChatLog::load(input_file)?;

        let (document, stats) = comment_processor::convert(&chat.comments, rules, &self.settings);

        document.write_to_ass(output_file)?;
        info!("Success: {:?}", output_file);

        Ok(FileOutcome::Converted {
            output_file: output_file.to_path_buf(),
            stats,
        })
    }

    fn default_output_path(input_file: &Path) -> PathBuf {
        let output_dir = input_file.parent().unwrap_or(Path::new("."));
        FileManager::generate_output_path(input_file, output_dir, SUBTITLE_EXTENSION)
    }
}
