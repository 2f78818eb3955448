use serde::{Deserialize, Serialize};

use crate::ass_writer::{CommentStyle, RenderOptions};
use crate::errors::ConfigError;

/// Application configuration module
/// This module handles the application configuration including loading,
/// validating and resolving it into the settings used for one run.
/// Represents the application configuration
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Config {
    /// Start time of comments to output (h:m:s)
    #[serde(default = "default_time")]
    pub start_time: String,

    /// End time of comments to output (h:m:s, 0:0:0 for no limit)
    #[serde(default = "default_time")]
    pub end_time: String,

    /// Comment player's x resolution
    #[serde(default = "default_play_res_x")]
    pub play_res_x: u32,

    /// Comment player's y resolution
    #[serde(default = "default_play_res_y")]
    pub play_res_y: u32,

    /// Font size of comments
    #[serde(default = "default_font_size")]
    pub font_size: u32,

    /// Time in seconds that comments stay visible
    #[serde(default = "default_visible_time_secs")]
    pub visible_time_secs: u32,

    /// Color style of comments
    #[serde(default)]
    pub style: CommentStyle,

    /// Log level
    #[serde(default)]
    pub log_level: LogLevel,
}

/// Log verbosity level
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

/// Inclusive time window in whole seconds. `end_seconds == 0` means unbounded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TimeRange {
    pub start_seconds: u64,
    pub end_seconds: u64,
}

impl TimeRange {
    /// Validate a start/end pair
    pub fn new(start_seconds: u64, end_seconds: u64) -> Result<Self, ConfigError> {
        if end_seconds != 0 && start_seconds == end_seconds {
            return Err(ConfigError::EmptyTimeRange(start_seconds));
        }

        if end_seconds != 0 && start_seconds > end_seconds {
            return Err(ConfigError::StartAfterEnd {
                start: start_seconds,
                end: end_seconds,
            });
        }

        Ok(TimeRange {
            start_seconds,
            end_seconds,
        })
    }

    /// Parse two `h:m:s` strings into a validated range
    pub fn parse(start: &str, end: &str) -> Result<Self, ConfigError> {
        Self::new(parse_hms(start)?, parse_hms(end)?)
    }

    pub fn is_unbounded(&self) -> bool {
        self.end_seconds == 0
    }
}

/// Fully validated settings for one conversion run
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Settings {
    pub range: TimeRange,
    pub render: RenderOptions,
}

/// Parse an `h:m:s` string into seconds.
///
/// Each part must be a non-negative integer; minutes and seconds may not
/// exceed 60.
pub fn parse_hms(value: &str) -> Result<u64, ConfigError> {
    let parts: Vec<&str> = value.trim().split(':').collect();

    if parts.len() != 3 {
        return Err(ConfigError::InvalidTimeFormat(value.to_string()));
    }

    let mut numbers = [0i64; 3];
    for (slot, part) in numbers.iter_mut().zip(&parts) {
        *slot = part
            .trim()
            .parse::<i64>()
            .map_err(|_| ConfigError::InvalidTimeFormat(value.to_string()))?;
    }
    let [hours, minutes, seconds] = numbers;

    if hours < 0 || minutes < 0 || seconds < 0 {
        return Err(ConfigError::TimeComponentOutOfRange {
            value: value.to_string(),
            reason: "values must be positive numbers".to_string(),
        });
    }

    if minutes > 60 || seconds > 60 {
        return Err(ConfigError::TimeComponentOutOfRange {
            value: value.to_string(),
            reason: "minutes and seconds must be 60 or lower".to_string(),
        });
    }

    hours
        .checked_mul(3600)
        .and_then(|total| total.checked_add(minutes * 60 + seconds))
        .map(|total| total as u64)
        .ok_or_else(|| ConfigError::TimeComponentOutOfRange {
            value: value.to_string(),
            reason: "hours value is too large".to_string(),
        })
}

fn default_time() -> String {
    "0:0:0".to_string()
}

fn default_play_res_x() -> u32 {
    854
}

fn default_play_res_y() -> u32 {
    480
}

fn default_font_size() -> u32 {
    36
}

fn default_visible_time_secs() -> u32 {
    7
}

impl Config {
    /// Validate the configuration and resolve it into run settings.
    ///
    /// Nothing is returned unless every value is valid.
    pub fn validate(&self) -> Result<Settings, ConfigError> {
        let dimensions = [
            ("play_res_x", self.play_res_x),
            ("play_res_y", self.play_res_y),
            ("font_size", self.font_size),
            ("visible_time_secs", self.visible_time_secs),
        ];

        for (name, value) in dimensions {
            if value == 0 {
                return Err(ConfigError::InvalidDimension { name, value });
            }
        }

        let range = TimeRange::parse(&self.start_time, &self.end_time)?;

        Ok(Settings {
            range,
            render: RenderOptions {
                play_res_x: self.play_res_x,
                play_res_y: self.play_res_y,
                font_size: self.font_size,
                visible_time_secs: self.visible_time_secs,
                style: self.style,
            },
        })
    }
}

/// Default implementation for Config
impl Default for Config {
    fn default() -> Self {
        Config {
            start_time: default_time(),
            end_time: default_time(),
            play_res_x: default_play_res_x(),
            play_res_y: default_play_res_y(),
            font_size: default_font_size(),
            visible_time_secs: default_visible_time_secs(),
            style: CommentStyle::default(),
            log_level: LogLevel::default(),
        }
    }
}
