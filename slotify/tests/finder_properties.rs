//! Property tests for the free-slot search.

mod support;

use proptest::prelude::*;
use slotify::{by_start, find, find_with_mapper, Block, FindOptions, Instant, Period, Slot, Span};
use std::convert::Infallible;
use support::at;

/// Blocks within a few hours either side of a 0..24h search span.
fn arb_blocks() -> impl Strategy<Value = Vec<Block>> {
    prop::collection::vec((-6i64..30, 0i64..10), 0..24).prop_map(|raw| {
        raw.into_iter()
            .map(|(start, len)| Block::new_unchecked(at(start), at(start + len)))
            .collect()
    })
}

fn arb_span() -> impl Strategy<Value = Span> {
    (0i64..12, 0i64..24).prop_map(|(start, len)| {
        Span::new(at(start), at(start + len)).expect("generated span is ordered")
    })
}

/// Whether `instant` falls inside some block.
fn is_busy(blocks: &[Block], instant: Instant) -> bool {
    blocks
        .iter()
        .any(|b| b.start() <= instant && instant < b.end())
}

fn is_free(slots: &[Slot], instant: Instant) -> bool {
    slots
        .iter()
        .any(|s| s.start() <= instant && instant < s.end())
}

proptest! {
    #[test]
    fn prop_slots_and_blocks_tile_the_span(blocks in arb_blocks(), span in arb_span()) {
        let slots = find(&blocks, Some(&span));

        // every whole hour of the span is either free or busy, never both
        let hours = (span.end() - span.start()).num_hours();
        for offset in 0..hours {
            let instant = span.start() + chrono::Duration::hours(offset);
            prop_assert_ne!(is_free(&slots, instant), is_busy(&blocks, instant));
        }
    }

    #[test]
    fn prop_slots_are_ordered_disjoint_and_inside_span(
        blocks in arb_blocks(),
        span in arb_span(),
    ) {
        let slots = find(&blocks, Some(&span));

        for s in &slots {
            prop_assert!(span.start() <= s.start());
            prop_assert!(s.end() <= span.end());
            prop_assert!(s.start() <= s.end());
            if s.is_empty() {
                // a zero-length block sitting on the cursor
                let edge = s.start();
                prop_assert!(blocks.iter().any(|b| b.start() == edge && b.end() == edge));
            }
        }
        for pair in slots.windows(2) {
            // slots only touch across a zero-length block
            prop_assert!(pair[0].end() <= pair[1].start());
            if pair[0].end() == pair[1].start() {
                let edge = pair[0].end();
                prop_assert!(blocks.iter().any(|b| b.start() == edge && b.end() == edge));
            }
        }
    }

    #[test]
    fn prop_slot_edges_are_block_or_span_edges(blocks in arb_blocks(), span in arb_span()) {
        let slots = find(&blocks, Some(&span));

        for s in &slots {
            prop_assert!(s.start() == span.start() || blocks.iter().any(|b| b.end() == s.start()));
            prop_assert!(s.end() == span.end() || blocks.iter().any(|b| b.start() == s.end()));
        }
    }

    #[test]
    fn prop_find_is_idempotent_and_pure(blocks in arb_blocks(), span in arb_span()) {
        let blocks_before = blocks.clone();
        let span_before = span.clone();

        let first = find(&blocks, Some(&span));
        let second = find(&blocks, Some(&span));

        prop_assert_eq!(first, second);
        prop_assert_eq!(blocks, blocks_before);
        prop_assert_eq!(span, span_before);
    }

    #[test]
    fn prop_input_order_does_not_matter(blocks in arb_blocks(), span in arb_span()) {
        let mut reversed = blocks.clone();
        reversed.reverse();

        // empty slots depend on how blocks with equal starts are ordered
        let non_empty = |slots: Vec<Slot>| -> Vec<Slot> {
            slots.into_iter().filter(|s| !s.is_empty()).collect()
        };
        prop_assert_eq!(
            non_empty(find(&blocks, Some(&span))),
            non_empty(find(&reversed, Some(&span)))
        );
    }

    #[test]
    fn prop_identity_mapper_matches_find(blocks in arb_blocks(), span in arb_span()) {
        let mapped: Result<Vec<Slot>, Infallible> = find_with_mapper(
            &blocks,
            Some(&span),
            by_start,
            |b| Ok(*b),
            Ok,
            &FindOptions::default(),
        );
        prop_assert_eq!(mapped.unwrap(), find(&blocks, Some(&span)));
    }

    #[test]
    fn prop_filter_only_drops_results(blocks in arb_blocks(), span in arb_span(), min in 0i64..4) {
        let options = FindOptions::with_filter(move |s: &Slot| s.duration().num_hours() >= min);
        let filtered: Result<Vec<Slot>, Infallible> = find_with_mapper(
            &blocks,
            Some(&span),
            by_start,
            |b| Ok(*b),
            Ok,
            &options,
        );
        let expected: Vec<Slot> = find(&blocks, Some(&span))
            .into_iter()
            .filter(|s| s.duration().num_hours() >= min)
            .collect();

        // with no blocks the whole span is reported unfiltered
        if !blocks.is_empty() {
            prop_assert_eq!(filtered.unwrap(), expected);
        }
    }
}
