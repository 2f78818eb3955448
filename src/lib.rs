/*!
 * # chat2ass - Chat replay to danmaku subtitles
 *
 * A Rust library that turns a chat export (TwitchDownloader JSON) into an
 * ASS subtitle file where every comment scrolls across the video.
 *
 * ## Features
 *
 * - Keep only comments inside a start/end time window
 * - Ban rules: remove words, drop whole comments, drop users
 * - Text cleanup for the ASS format and laughter run collapsing
 * - Lane placement so bursts of comments stack instead of overlapping
 * - Three color styles and configurable canvas, font size and duration
 *
 * ## Architecture
 *
 * The library is organized in these main modules:
 * - `app_config`: Configuration and validation into run settings
 * - `chat_source`: Chat export model and loading
 * - `ban_rules`: Ban rule set validation and matching
 * - `filter`: Time range and ban checks per comment
 * - `normalizer`: Comment text normalization
 * - `lanes`: Vertical lane assignment
 * - `ass_writer`: ASS header and dialogue serialization
 * - `comment_processor`: The pipeline tying the steps together
 * - `file_utils`: File system operations
 * - `app_controller`: Main application controller
 * - `errors`: Custom error types for the application
 *
 * ## License
 *
 * This project is licensed under the MIT License
 */

// Global lints configuration
// These lints will be allowed but not auto-fixed
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::redundant_closure_for_method_calls)]

// Public modules
pub mod app_config;
pub mod app_controller;
pub mod ass_writer;
pub mod ban_rules;
pub mod chat_source;
pub mod comment_processor;
pub mod errors;
pub mod file_utils;
pub mod filter;
pub mod lanes;
pub mod normalizer;

// Re-export main types for easier usage
pub use app_config::{Config, Settings, TimeRange};
pub use ass_writer::{CommentStyle, RenderOptions, RenderedComment, SubtitleDocument};
pub use ban_rules::BanRuleSet;
pub use chat_source::{ChatLog, Comment};
pub use comment_processor::{process_comments, ProcessedComments, ProcessingStats};
pub use filter::should_keep;
pub use normalizer::normalize;
pub use errors::{AppError, ChatError, ConfigError};
