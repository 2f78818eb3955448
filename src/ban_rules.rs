/*!
 * Ban rules for chat comments.
 *
 * A ban rule source is a JSON object with exactly four lists of strings:
 *
 * ```json
 * {
 *   "remove_words": ["word or regex deleted from the comment"],
 *   "ban_comments": ["word or regex that drops the whole comment"],
 *   "ban_users": ["user name or user id"],
 *   "ban_critical": ["word or regex that drops the whole comment"]
 * }
 * ```
 *
 * The source is validated in one step; a rule set is either complete or not
 * built at all.
 */

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use log::debug;
use regex::Regex;
use serde_json::Value;

use crate::errors::ConfigError;

pub const REMOVE_WORDS_FIELD: &str = "remove_words";
pub const BAN_COMMENTS_FIELD: &str = "ban_comments";
pub const BAN_USERS_FIELD: &str = "ban_users";
pub const BAN_CRITICAL_FIELD: &str = "ban_critical";

/// A ban pattern matched either as a literal substring or as a regex
#[derive(Debug, Clone)]
pub struct BanPattern {
    raw: String,
    regex: Option<Regex>,
}

impl BanPattern {
    /// Build a pattern. Strings that are not valid regex syntax are kept as
    /// literal-only patterns.
    pub fn new(raw: &str) -> Self {
        let regex = match Regex::new(raw) {
            Ok(re) => Some(re),
            Err(e) => {
                debug!("Pattern '{}' is not a valid regex, matching literally: {}", raw, e);
                None
            }
        };

        BanPattern {
            raw: raw.to_string(),
            regex,
        }
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// True if the text contains the pattern literally or matches it as a regex
    pub fn is_match(&self, text: &str) -> bool {
        text.contains(&self.raw) || self.regex.as_ref().is_some_and(|re| re.is_match(text))
    }

    /// Delete every occurrence of the pattern from the text
    pub fn remove_from(&self, text: &str) -> String {
        let without_literal = text.replace(&self.raw, "");
        match &self.regex {
            Some(re) => re.replace_all(&without_literal, "").into_owned(),
            None => without_literal,
        }
    }
}

impl PartialEq for BanPattern {
    fn eq(&self, other: &Self) -> bool {
        self.raw == other.raw
    }
}

/// The four ban rule lists for one run
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BanRuleSet {
    /// Matches are deleted from the comment body
    pub remove_word_patterns: Vec<BanPattern>,

    /// Any match bans the whole comment
    pub ban_comment_patterns: Vec<BanPattern>,

    /// User names or ids whose comments are all dropped
    pub ban_user_ids: HashSet<String>,

    /// Any match bans the whole comment.
    /// TODO: also ban the author of a matching comment for the rest of the run.
    pub ban_critical_patterns: Vec<BanPattern>,
}

impl BanRuleSet {
    /// Rule set that filters nothing
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.remove_word_patterns.is_empty()
            && self.ban_comment_patterns.is_empty()
            && self.ban_user_ids.is_empty()
            && self.ban_critical_patterns.is_empty()
    }

    /// Build a rule set from plain string lists
    pub fn from_lists(
        remove_words: &[&str],
        ban_comments: &[&str],
        ban_users: &[&str],
        ban_critical: &[&str],
    ) -> Self {
        BanRuleSet {
            remove_word_patterns: compile_patterns(remove_words.iter().copied()),
            ban_comment_patterns: compile_patterns(ban_comments.iter().copied()),
            ban_user_ids: ban_users.iter().map(|s| s.to_string()).collect(),
            ban_critical_patterns: compile_patterns(ban_critical.iter().copied()),
        }
    }

    /// Validate an external ban rule structure.
    ///
    /// `None` yields an empty rule set. A present value must be an object
    /// carrying all four list fields, otherwise nothing is built.
    pub fn from_value(source: Option<&Value>) -> Result<Self, ConfigError> {
        let Some(source) = source else {
            return Ok(Self::empty());
        };

        let remove_words = required_string_list(source, REMOVE_WORDS_FIELD)?;
        let ban_comments = required_string_list(source, BAN_COMMENTS_FIELD)?;
        let ban_users = required_string_list(source, BAN_USERS_FIELD)?;
        let ban_critical = required_string_list(source, BAN_CRITICAL_FIELD)?;

        let rules = BanRuleSet {
            remove_word_patterns: compile_patterns(remove_words.iter().map(String::as_str)),
            ban_comment_patterns: compile_patterns(ban_comments.iter().map(String::as_str)),
            ban_user_ids: ban_users.into_iter().filter(|u| !u.is_empty()).collect(),
            ban_critical_patterns: compile_patterns(ban_critical.iter().map(String::as_str)),
        };

        debug!(
            "Ban rules: {} remove, {} comment, {} user, {} critical",
            rules.remove_word_patterns.len(),
            rules.ban_comment_patterns.len(),
            rules.ban_user_ids.len(),
            rules.ban_critical_patterns.len()
        );

        Ok(rules)
    }

    /// Load ban rules from an optional JSON file
    pub fn load<P: AsRef<Path>>(path: Option<P>) -> Result<Self, ConfigError> {
        let Some(path) = path else {
            return Ok(Self::empty());
        };
        let path = path.as_ref();

        let source_error = |message: String| ConfigError::BanRuleSource {
            path: path.display().to_string(),
            message,
        };

        let content = fs::read_to_string(path).map_err(|e| source_error(e.to_string()))?;
        let value: Value = serde_json::from_str(&content).map_err(|e| source_error(e.to_string()))?;

        Self::from_value(Some(&value))
    }

    /// True if the body matches a whole-comment or critical pattern
    pub fn bans_body(&self, body: &str) -> bool {
        self.ban_comment_patterns
            .iter()
            .chain(self.ban_critical_patterns.iter())
            .any(|pattern| pattern.is_match(body))
    }

    /// True if either identifier of the author is banned
    pub fn bans_user(&self, commenter_name: &str, commenter_id: &str) -> bool {
        self.ban_user_ids.contains(commenter_name) || self.ban_user_ids.contains(commenter_id)
    }
}

// Empty patterns would match every comment
fn compile_patterns<'a>(raw: impl Iterator<Item = &'a str>) -> Vec<BanPattern> {
    raw.filter(|p| !p.is_empty()).map(BanPattern::new).collect()
}

fn required_string_list(source: &Value, field: &str) -> Result<Vec<String>, ConfigError> {
    let value = source
        .get(field)
        .ok_or_else(|| ConfigError::BanRuleMissingField(field.to_string()))?;

    let items = value
        .as_array()
        .ok_or_else(|| ConfigError::BanRuleFieldNotList(field.to_string()))?;

    items
        .iter()
        .map(|item| {
            item.as_str()
                .map(str::to_string)
                .ok_or_else(|| ConfigError::BanRuleFieldNotList(field.to_string()))
        })
        .collect()
}
