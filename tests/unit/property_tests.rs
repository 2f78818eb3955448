/*!
 * Property-based tests for filtering and normalization
 */

use proptest::prelude::*;
use chat2ass::ban_rules::BanRuleSet;
use chat2ass::filter::should_keep;
use chat2ass::lanes::LaneAssigner;
use chat2ass::normalizer::{collapse_laughter, normalize};
use crate::common;

/// Comment bodies mixing words, dots, line breaks and laughter glyphs
fn body_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        "[a-z .]{0,20}",
        "[wWｗＷ ]{0,12}",
        "[a-z]{1,5}[.\n]{0,3}[wｗ]{0,8}[ㅋㅎ]{0,6}",
        "[ -~]{0,30}",
    ]
}

proptest! {
    #[test]
    fn test_shouldKeep_widerRange_neverRejectsKeptComment(
        offset in 0u32..10_000,
        start in 0u32..10_000,
        span in 1u32..10_000,
        widen_start in 0u32..1_000,
        widen_end in 0u32..1_000,
    ) {
        let rules = BanRuleSet::empty();
        let comment = common::comment(f64::from(offset), "hello");
        let end = start + span;
        let wider_start = start.saturating_sub(widen_start);
        let wider_end = end + widen_end;

        if should_keep(&comment, &rules, f64::from(start), f64::from(end)) {
            prop_assert!(should_keep(&comment, &rules, f64::from(wider_start), f64::from(wider_end)));
            prop_assert!(should_keep(&comment, &rules, f64::from(wider_start), 0.0));
        }
    }

    #[test]
    fn test_shouldKeep_zeroEnd_keepsEveryOffsetFromStart(offset in 0.0f64..1.0e9) {
        let comment = common::comment(offset, "hello");
        prop_assert!(should_keep(&comment, &BanRuleSet::empty(), 0.0, 0.0));
    }

    #[test]
    fn test_normalize_isIdempotent(body in body_strategy()) {
        let rules = BanRuleSet::empty();
        let once = normalize(&body, &rules);
        prop_assert_eq!(normalize(&once, &rules), once);
    }

    #[test]
    fn test_normalize_withRemovalRules_isIdempotent(
        body in body_strategy(),
        words in proptest::sample::subsequence(vec!["lol", "a", "gg", "xyz", "w w", "ㅎ"], 0..=4),
    ) {
        let rules = BanRuleSet::from_lists(&words, &[], &[], &[]);
        let once = normalize(&body, &rules);
        prop_assert_eq!(normalize(&once, &rules), once);
    }

    #[test]
    fn test_collapseLaughter_longRuns_becomeCanonical(
        glyphs in proptest::collection::vec(prop_oneof![Just('w'), Just('W'), Just('ｗ'), Just('Ｗ')], 4..30)
    ) {
        let run: String = glyphs.into_iter().collect();
        prop_assert_eq!(collapse_laughter(&run), "www");
    }

    #[test]
    fn test_collapseLaughter_shortRuns_areUnchanged(
        glyphs in proptest::collection::vec(prop_oneof![Just('w'), Just('ｗ'), Just('ㅋ')], 0..4)
    ) {
        let run: String = glyphs.into_iter().collect();
        prop_assert_eq!(collapse_laughter(&run), run.clone());
    }

    #[test]
    fn test_laneAssigner_afterLongGap_alwaysResets(
        gaps in proptest::collection::vec(0.0f64..3.0, 1..40)
    ) {
        let mut lanes = LaneAssigner::new(480, 36);
        let mut time = 0.0;
        prop_assert_eq!(lanes.assign(time), 0);

        for gap in gaps {
            let next = time + gap;
            let elapsed = next - time;
            time = next;
            let row = lanes.assign(time);
            if elapsed > 1.0 {
                prop_assert_eq!(row, 0);
            }
            prop_assert!(row <= 480 - 36);
        }
    }
}
