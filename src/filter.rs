use crate::ban_rules::BanRuleSet;
use crate::chat_source::Comment;

// @module: Per-comment range and ban filtering

/// Outcome of filtering a single comment
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterVerdict {
    /// Comment survives
    Keep,
    /// Offset outside `[start, end]`
    OutOfRange,
    /// Body matches a ban pattern or the author is banned
    Banned,
}

/// Check if the comment offset is outside `[start_seconds, end_seconds]`.
///
/// Both bounds are inclusive. `end_seconds == 0` means there is no upper bound.
pub fn is_out_of_range(comment: &Comment, start_seconds: f64, end_seconds: f64) -> bool {
    let offset = comment.offset_seconds;

    if offset < start_seconds {
        return true;
    }

    end_seconds != 0.0 && offset > end_seconds
}

/// Check if the comment body contains a whole-comment or critical ban pattern
pub fn is_banned_comment(comment: &Comment, rules: &BanRuleSet) -> bool {
    rules.bans_body(comment.body())
}

/// Check if the comment is from a banned user (by name or id)
pub fn is_banned_user(comment: &Comment, rules: &BanRuleSet) -> bool {
    rules.bans_user(comment.commenter_name(), comment.commenter_id())
}

/// Classify a comment; the range check runs before the ban checks
pub fn classify(comment: &Comment, rules: &BanRuleSet, start_seconds: f64, end_seconds: f64) -> FilterVerdict {
    if is_out_of_range(comment, start_seconds, end_seconds) {
        return FilterVerdict::OutOfRange;
    }

    if is_banned_comment(comment, rules) || is_banned_user(comment, rules) {
        return FilterVerdict::Banned;
    }

    FilterVerdict::Keep
}

/// True if the comment is in range and not banned
pub fn should_keep(comment: &Comment, rules: &BanRuleSet, start_seconds: f64, end_seconds: f64) -> bool {
    classify(comment, rules, start_seconds, end_seconds) == FilterVerdict::Keep
}
