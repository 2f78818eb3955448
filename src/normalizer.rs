/*!
 * Comment text normalization.
 *
 * Steps, in order:
 * - `.` and line breaks become spaces (ASS treats them as event terminators)
 * - runs of four or more laughter glyphs collapse to a canonical token
 * - word-removal ban patterns are deleted
 * - surrounding whitespace is trimmed
 *
 * The last three steps repeat until the text stops changing, since deleting a
 * word can join two short laughter runs into a long one.
 */

use once_cell::sync::Lazy;
use regex::Regex;

use crate::ban_rules::BanRuleSet;

/// A class of visually similar laughter glyphs and its canonical token
struct LaughterClass {
    run: Regex,
    canonical: &'static str,
}

static LAUGHTER_CLASSES: Lazy<Vec<LaughterClass>> = Lazy::new(|| {
    vec![
        LaughterClass {
            run: Regex::new(r"[wWｗＷ]{4,}").unwrap(),
            canonical: "www",
        },
        LaughterClass {
            run: Regex::new(r"[ㅋㅎ]{4,}").unwrap(),
            canonical: "ㅋㅋㅋ",
        },
    ]
});

/// Replace characters that would break an ASS event line with spaces
pub fn neutralize_terminators(text: &str) -> String {
    text.chars()
        .map(|c| match c {
            '.' | '\r' | '\n' => ' ',
            other => other,
        })
        .collect()
}

/// Collapse long laughter runs (`wwwwww` → `www`)
pub fn collapse_laughter(text: &str) -> String {
    let mut result = text.to_string();
    for class in LAUGHTER_CLASSES.iter() {
        if class.run.is_match(&result) {
            result = class.run.replace_all(&result, class.canonical).into_owned();
        }
    }
    result
}

/// Normalize a comment body for rendering.
///
/// The result may be empty, in which case the caller drops the comment.
pub fn normalize(body: &str, rules: &BanRuleSet) -> String {
    let mut text = neutralize_terminators(body);

    // Every pass only shortens the text, so this terminates
    loop {
        let mut next = collapse_laughter(&text);
        for pattern in &rules.remove_word_patterns {
            next = pattern.remove_from(&next);
        }
        let next = next.trim().to_string();

        if next == text {
            return next;
        }
        text = next;
    }
}
