use std::fmt;
use log::{debug, info};

use crate::app_config::{Settings, TimeRange};
use crate::ass_writer::{RenderOptions, RenderedComment, SubtitleDocument};
use crate::ban_rules::BanRuleSet;
use crate::chat_source::Comment;
use crate::filter::{self, FilterVerdict};
use crate::lanes::LaneAssigner;
use crate::normalizer;

// @module: Comment-to-subtitle pipeline driver

/// Counters for one run, returned alongside the rendered comments
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ProcessingStats {
    /// Comments in the input
    pub total: usize,
    /// Comments rendered
    pub kept: usize,
    /// Outside the time range
    pub out_of_range: usize,
    /// Dropped by a ban pattern or banned user
    pub banned: usize,
    /// Empty after normalization
    pub empty: usize,
}

impl ProcessingStats {
    /// Every comment that was not rendered, whatever the reason
    pub fn skipped(&self) -> usize {
        self.total - self.kept
    }

    /// Comments deleted by ban rules or left empty
    pub fn deleted(&self) -> usize {
        self.banned + self.empty
    }
}

impl fmt::Display for ProcessingStats {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{} comments, {} kept, {} skipped ({} out of range, {} banned, {} empty)",
            self.total,
            self.kept,
            self.skipped(),
            self.out_of_range,
            self.banned,
            self.empty
        )
    }
}

/// Output of the pipeline: positioned comments in input order plus counters
#[derive(Debug, Clone, Default)]
pub struct ProcessedComments {
    pub comments: Vec<RenderedComment>,
    pub stats: ProcessingStats,
}

impl ProcessedComments {
    /// Serialize into an ASS document
    pub fn to_document(&self, options: &RenderOptions) -> SubtitleDocument {
        SubtitleDocument::from_comments(&self.comments, options)
    }
}

/// Filter, normalize and place comments in one forward pass.
///
/// Input order is preserved; offsets are expected to be non-decreasing.
pub fn process_comments(
    comments: &[Comment],
    rules: &BanRuleSet,
    range: &TimeRange,
    playfield_height: u32,
    font_size: u32,
) -> ProcessedComments {
    let start_seconds = range.start_seconds as f64;
    let end_seconds = range.end_seconds as f64;

    let mut stats = ProcessingStats {
        total: comments.len(),
        ..Default::default()
    };
    let mut lanes = LaneAssigner::new(playfield_height, font_size);
    let mut rendered = Vec::new();

    for comment in comments {
        match filter::classify(comment, rules, start_seconds, end_seconds) {
            FilterVerdict::OutOfRange => {
                stats.out_of_range += 1;
                continue;
            }
            FilterVerdict::Banned => {
                debug!("Deleted banned comment from {}: {}", comment.commenter_name(), comment.body());
                stats.banned += 1;
                continue;
            }
            FilterVerdict::Keep => {}
        }

        let text = normalizer::normalize(comment.body(), rules);
        if text.is_empty() {
            stats.empty += 1;
            continue;
        }

        let display_time_seconds = comment.offset_seconds - start_seconds;
        let row = lanes.assign(display_time_seconds);

        rendered.push(RenderedComment {
            display_time_seconds,
            text,
            row,
        });
    }

    stats.kept = rendered.len();

    ProcessedComments {
        comments: rendered,
        stats,
    }
}

/// Run the pipeline with validated settings and build the document
pub fn convert(comments: &[Comment], rules: &BanRuleSet, settings: &Settings) -> (SubtitleDocument, ProcessingStats) {
    info!("Comments before: {}", comments.len());

    let processed = process_comments(
        comments,
        rules,
        &settings.range,
        settings.render.play_res_y,
        settings.render.font_size,
    );

    info!("Comments after:  {}", processed.stats.kept);
    info!("Comments skipped: {}", processed.stats.skipped());
    info!("Comments deleted: {}", processed.stats.deleted());
    debug!("{}", processed.stats);

    (processed.to_document(&settings.render), processed.stats)
}
