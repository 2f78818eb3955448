use std::fmt;
use std::path::Path;

use anyhow::Result;
use serde::{Deserialize, Serialize};

use crate::file_utils::FileManager;

// @module: ASS (Advanced SubStation Alpha) serialization of danmaku comments

/// Layer used for every comment event
pub const DIALOGUE_LAYER: u32 = 2;

/// Color style applied to every comment of a run
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum CommentStyle {
    // @style: White text (Danmaku2ASS)
    #[default]
    White,
    // @style: Blue text (danmakuBlue)
    Blue,
    // @style: Red text (danmakuRed)
    Red,
}

impl CommentStyle {
    // @returns: Style name as declared in the header
    pub fn style_name(&self) -> &'static str {
        match self {
            Self::White => "Danmaku2ASS",
            Self::Blue => "danmakuBlue",
            Self::Red => "danmakuRed",
        }
    }

    // @returns: Lowercase identifier used in config and CLI
    pub fn to_lowercase_string(&self) -> String {
        match self {
            Self::White => "white".to_string(),
            Self::Blue => "blue".to_string(),
            Self::Red => "red".to_string(),
        }
    }
}

impl fmt::Display for CommentStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_lowercase_string())
    }
}

impl std::str::FromStr for CommentStyle {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "white" | "danmaku2ass" => Ok(Self::White),
            "blue" | "danmakublue" => Ok(Self::Blue),
            "red" | "danmakured" => Ok(Self::Red),
            _ => Err(anyhow::anyhow!("Invalid comment style: {}", s)),
        }
    }
}

/// A comment that survived filtering, ready to be rendered
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedComment {
    /// Seconds since the configured start time
    pub display_time_seconds: f64,

    /// Normalized text, never empty
    pub text: String,

    /// Vertical position of the lane, in pixels from the top
    pub row: u32,
}

/// Parameters of the rendered canvas
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderOptions {
    pub play_res_x: u32,
    pub play_res_y: u32,
    pub font_size: u32,
    pub visible_time_secs: u32,
    pub style: CommentStyle,
}

/// Format seconds as an ASS timestamp (`H:MM:SS.00`).
///
/// Sub-second precision is not tracked; the fraction is truncated.
pub fn format_timestamp(seconds: f64) -> String {
    let total = if seconds.is_finite() && seconds > 0.0 {
        seconds.trunc() as u64
    } else {
        0
    };

    let hours = total / 3600;
    let minutes = (total % 3600) / 60;
    let secs = total % 60;

    format!("{}:{:02}:{:02}.00", hours, minutes, secs)
}

/// Render the script header with the three color styles
pub fn render_header(options: &RenderOptions) -> String {
    let x = options.play_res_x;
    let y = options.play_res_y;
    let font_size = options.font_size;

    // Colour: &H33BBGGRR
    format!(
        "[Script Info]
ScriptType: v4.00+
PlayResX: {x}
PlayResY: {y}
Aspect Ratio: {x}:{y}
Collisions: Normal
WrapStyle: 2
ScaledBorderAndShadow: yes
YCbCr Matrix: TV.601

[V4+ Styles]
Format: Name, Fontname, Fontsize, PrimaryColour, SecondaryColour, OutlineColour, BackColour, Bold, Italic, Underline, StrikeOut, ScaleX, ScaleY, Spacing, Angle, BorderStyle, Outline, Shadow, Alignment, MarginL, MarginR, MarginV, Encoding
Style: Danmaku2ASS, sans-serif, {font_size}, &H33FFFFFF, &H33FFFFFF, &H33000000, &H33000000, 0, 0, 0, 0, 100, 100, 0.00, 0.00, 1, 1, 0, 7, 0, 0, 0, 0
Style: danmakuBlue, sans-serif, {font_size}, &H33FF0000, &H33FFFFFF, &H33000000, &H33000000, 0, 0, 0, 0, 100, 100, 0.00, 0.00, 1, 1, 0, 7, 0, 0, 0, 0
Style: danmakuRed, sans-serif, {font_size}, &H330000FF, &H33FFFFFF, &H33000000, &H33000000, 0, 0, 0, 0, 100, 100, 0.00, 0.00, 1, 1, 0, 7, 0, 0, 0, 0

[Events]
Format: Layer, Start, End, Style, Name, MarginL, MarginR, MarginV, Effect, Text
"
    )
}

/// Render one dialogue event (without the trailing newline).
///
/// The text scrolls from the right edge to `-(font_size * chars)`, so longer
/// comments travel further in the same visible time.
pub fn render_dialogue(comment: &RenderedComment, options: &RenderOptions) -> String {
    let start = format_timestamp(comment.display_time_seconds);
    let end = format_timestamp(comment.display_time_seconds + f64::from(options.visible_time_secs));

    let char_count = comment.text.chars().count() as i64;
    let end_x = -(i64::from(options.font_size) * char_count);
    let y = comment.row;

    format!(
        "Dialogue: {},{},{},{},,0000,0000,0000,,{{\\move({},{},{},{})}}{}",
        DIALOGUE_LAYER,
        start,
        end,
        options.style.style_name(),
        options.play_res_x,
        y,
        end_x,
        y,
        comment.text
    )
}

/// A complete subtitle document: header plus one line per comment
#[derive(Debug, Clone, PartialEq)]
pub struct SubtitleDocument {
    pub header: String,
    pub lines: Vec<String>,
}

impl SubtitleDocument {
    /// Serialize rendered comments, keeping their order
    pub fn from_comments(comments: &[RenderedComment], options: &RenderOptions) -> Self {
        SubtitleDocument {
            header: render_header(options),
            lines: comments.iter().map(|c| render_dialogue(c, options)).collect(),
        }
    }

    /// Write the document to an ASS file
    pub fn write_to_ass<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        FileManager::write_to_file(path, &self.to_string())
    }
}

impl fmt::Display for SubtitleDocument {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.header)?;
        for line in &self.lines {
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}
