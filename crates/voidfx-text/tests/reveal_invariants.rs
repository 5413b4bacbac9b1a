//! Property-based invariant tests for the text reveal engine.
//!
//! For any line list and tick count:
//!
//! 1. Every revealed entry is a prefix of its source line.
//! 2. Total revealed characters are monotonically non-decreasing.
//! 3. Once complete, further ticks change nothing.
//! 4. Completion arrives within a computable tick bound.
//! 5. The flattened variant agrees with its own contract.

use proptest::prelude::*;
use voidfx_text::{LineReveal, StringReveal};

// ── Helpers ─────────────────────────────────────────────────────────────

fn lines_strategy() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec("[ -~]{0,12}", 0..6)
}

/// Ticks needed to fully reveal `lines`: the first line costs
/// `len + 2` (empty prefix + chars + transition), every later line
/// `len + 1` (its empty state rides on the previous transition).
fn ticks_to_complete(lines: &[String]) -> usize {
    lines
        .iter()
        .enumerate()
        .map(|(i, l)| l.chars().count() + if i == 0 { 2 } else { 1 })
        .sum()
}

proptest! {
    #[test]
    fn revealed_is_always_a_prefix(lines in lines_strategy(), ticks in 0usize..64) {
        let mut reveal = LineReveal::new(lines.clone());
        for _ in 0..ticks {
            reveal.advance();
        }
        for (i, visible) in reveal.revealed().iter().enumerate() {
            prop_assert!(
                lines[i].starts_with(visible.as_str()),
                "revealed[{}] = {:?} is not a prefix of {:?}",
                i, visible, lines[i]
            );
        }
    }

    #[test]
    fn visible_chars_is_monotone(lines in lines_strategy(), ticks in 0usize..64) {
        let mut reveal = LineReveal::new(lines);
        let mut prev = reveal.visible_chars();
        for _ in 0..ticks {
            reveal.advance();
            prop_assert!(reveal.visible_chars() >= prev);
            prev = reveal.visible_chars();
        }
    }

    #[test]
    fn complete_state_is_fixed(lines in lines_strategy(), extra in 1usize..16) {
        let mut reveal = LineReveal::new(lines.clone());
        for _ in 0..ticks_to_complete(&lines) {
            reveal.advance();
        }
        prop_assert!(reveal.is_complete());
        prop_assert_eq!(reveal.revealed(), reveal.lines());

        let snapshot = reveal.revealed().to_vec();
        for _ in 0..extra {
            reveal.advance();
        }
        prop_assert_eq!(reveal.revealed(), snapshot.as_slice());
    }

    #[test]
    fn completion_never_arrives_early(lines in lines_strategy()) {
        prop_assume!(!lines.is_empty());
        let total = ticks_to_complete(&lines);
        let mut reveal = LineReveal::new(lines);
        for _ in 0..total - 1 {
            reveal.advance();
            // One tick short of the bound the engine must still be running.
        }
        prop_assert!(!reveal.is_complete());
        reveal.advance();
        prop_assert!(reveal.is_complete());
    }

    #[test]
    fn string_reveal_prefix_and_bound(text in "[ -~]{0,32}", ticks in 0usize..48) {
        let mut reveal = StringReveal::new(text.clone());
        for _ in 0..ticks {
            reveal.advance();
        }
        prop_assert!(text.starts_with(reveal.visible()));
        prop_assert_eq!(reveal.visible_chars(), ticks.min(text.chars().count()));
        if ticks >= text.chars().count() {
            prop_assert!(reveal.is_complete());
            prop_assert_eq!(reveal.visible(), text.as_str());
        }
    }
}
