//! Free-slot search.
//!
//! The finder sweeps once over the busy blocks in ascending start order,
//! shrinking a private copy of the search span from the left and emitting the
//! gaps it walks past.
//!
//! For every block, the relation to what is left of the span decides the
//! step, checked in this order:
//!
//! | Relation               | Emits                         | Cursor         | Sweep    |
//! |------------------------|-------------------------------|----------------|----------|
//! | block contains span    | nothing                       | exhausted      | stops    |
//! | overlaps span start    | nothing                       | to block end   | goes on  |
//! | inside span            | gap up to block start         | to block end   | goes on  |
//! | overlaps span end      | gap up to block start         | exhausted      | stops    |
//! | outside span           | nothing                       | unchanged      | goes on  |
//!
//! Whatever is left of the span once the sweep ends becomes the last slot.

use log::{debug, trace};
use std::cmp::Ordering;
use std::convert::Infallible;
use std::fmt;

use crate::error::Result;
use crate::models::{Block, Instant, Period, Slot, Span};

/// Optional behaviour of [`find_with_mapper`].
pub struct FindOptions<O> {
    /// Keeps an output when it returns `true`.
    ///
    /// This is the polarity of [`Iterator::filter`]. Predicates written for
    /// callbacks that exclude on `true` must be negated.
    ///
    /// Runs on the mapped output, after the cursor has already moved past
    /// the slot, so it only changes what is reported.
    pub filter: Option<Box<dyn Fn(&O) -> bool>>,
}

impl<O> FindOptions<O> {
    pub fn with_filter(filter: impl Fn(&O) -> bool + 'static) -> Self {
        Self {
            filter: Some(Box::new(filter)),
        }
    }

    fn keeps(&self, output: &O) -> bool {
        self.filter.as_ref().map_or(true, |filter| filter(output))
    }
}

impl<O> Default for FindOptions<O> {
    fn default() -> Self {
        Self { filter: None }
    }
}

impl<O> fmt::Debug for FindOptions<O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FindOptions")
            .field("filter", &self.filter.as_ref().map(|_| "Fn(&O) -> bool"))
            .finish()
    }
}

/// Ascending order by start instant.
///
/// The comparator [`find`] and [`find_periods`] use, and the order
/// [`find_with_mapper`] expects from its own comparator.
pub fn by_start<P: Period>(a: &P, b: &P) -> Ordering {
    a.start().cmp(&b.start())
}

/// Find the free slots of `span` around caller-defined items.
///
/// * `items` - busy entries in any order; they are never reordered or modified
/// * `span` - the search window; `None` or an empty window yields no slots
/// * `sort_by` - orders items by ascending start
/// * `map_in` - turns an item into a [`Block`]
/// * `map_out` - turns a found [`Slot`] into the caller's output type
/// * `options` - see [`FindOptions`]
///
/// With no items at all, the whole span is mapped and returned as the single
/// output.
///
/// # Errors
///
/// The first error returned by `map_in` or `map_out` ends the search and is
/// returned as is. Outputs produced before it are discarded.
///
/// # Panics
///
/// `sort_by` must order items ascending by start. Any other order gives
/// wrong results, which debug builds catch with an assertion.
///
/// # Example
///
/// ```
/// use chrono::{DateTime, Duration, TimeZone, Utc};
/// use slotify::{find_with_mapper, Block, FindOptions, Period, Span};
///
/// struct Reservation {
///     table: u32,
///     from: DateTime<Utc>,
///     to: DateTime<Utc>,
/// }
///
/// struct TableSlot {
///     table: u32,
///     from: DateTime<Utc>,
///     to: DateTime<Utc>,
/// }
///
/// let open = Utc.with_ymd_and_hms(2024, 1, 15, 12, 0, 0).unwrap();
/// let reservations = vec![
///     Reservation { table: 1, from: open + Duration::hours(3), to: open + Duration::hours(4) },
///     Reservation { table: 1, from: open, to: open + Duration::hours(1) },
/// ];
/// let span = Span::new(open, open + Duration::hours(8)).unwrap();
///
/// let slots = find_with_mapper(
///     &reservations,
///     Some(&span),
///     |a, b| a.from.cmp(&b.from),
///     |r| Block::new(r.from, r.to),
///     |s| Ok(TableSlot { table: 1, from: s.start(), to: s.end() }),
///     &FindOptions::with_filter(|s: &TableSlot| s.to - s.from >= Duration::hours(2)),
/// )?;
///
/// assert_eq!(slots.len(), 2);
/// assert_eq!(slots[0].from, open + Duration::hours(1));
/// assert_eq!(slots[1].to, open + Duration::hours(8));
/// # Ok::<(), slotify::Error>(())
/// ```
pub fn find_with_mapper<I, O, E, S, MI, MO>(
    items: &[I],
    span: Option<&Span>,
    mut sort_by: S,
    mut map_in: MI,
    mut map_out: MO,
    options: &FindOptions<O>,
) -> std::result::Result<Vec<O>, E>
where
    S: FnMut(&I, &I) -> Ordering,
    MI: FnMut(&I) -> std::result::Result<Block, E>,
    MO: FnMut(Slot) -> std::result::Result<O, E>,
{
    let Some(span) = span.filter(|s| s.remains()) else {
        debug!("No time left in search span, skipping");
        return Ok(Vec::new());
    };

    let mut target = span.clone();
    if items.is_empty() {
        debug!("No busy items, whole span {} is free", target);
        return Ok(vec![map_out(target.to_slot())?]);
    }

    debug!("Searching {} around {} busy items", target, items.len());

    let mut sorted: Vec<&I> = items.iter().collect();
    sorted.sort_by(|a, b| sort_by(*a, *b));

    let mut found = Vec::with_capacity(items.len() + 1);
    let mut emit = |slot: Slot| -> std::result::Result<(), E> {
        let output = map_out(slot)?;
        if options.keeps(&output) {
            found.push(output);
        } else {
            trace!("Filtered out slot {}", slot);
        }
        Ok(())
    };

    let mut previous_start: Option<Instant> = None;
    for item in sorted {
        let block = map_in(item)?;
        debug_assert!(
            previous_start.map_or(true, |prev| prev <= block.start()),
            "items must be sorted by ascending start"
        );
        previous_start = Some(block.start());

        if block.contains(&target) {
            trace!("{} covers the rest of the span", block);
            target.exhaust();
            break;
        }

        if block.overlap_at_start(&target) {
            trace!("{} overlaps span start", block);
            target.shorten(&block);
            continue;
        }

        if block.is_contained_in(&target) {
            trace!("{} lies inside the span", block);
            let gap = target.gap_before(&block);
            target.shorten(&block);
            emit(gap)?;
            continue;
        }

        if block.overlap_at_end(&target) {
            trace!("{} overlaps span end", block);
            let gap = target.gap_before(&block);
            target.exhaust();
            emit(gap)?;
            break;
        }

        trace!("{} is outside the span", block);
    }

    if target.remains() {
        emit(target.to_slot())?;
    }

    debug!("Found {} free slots", found.len());
    Ok(found)
}

/// Find the free slots of `span` around `blocks`.
///
/// `blocks` may be in any order.
///
/// # Example
///
/// ```
/// use chrono::{Duration, TimeZone, Utc};
/// use slotify::{find, Block, Slot, Span};
///
/// let now = Utc.with_ymd_and_hms(2024, 1, 15, 0, 0, 0).unwrap();
/// let h = |n: i64| now + Duration::hours(n);
///
/// let blocks = vec![Block::new(h(1), h(5))?];
/// let span = Span::new(h(0), h(8))?;
///
/// assert_eq!(
///     find(&blocks, Some(&span)),
///     vec![Slot::new(h(0), h(1))?, Slot::new(h(5), h(8))?],
/// );
/// # Ok::<(), slotify::Error>(())
/// ```
pub fn find(blocks: &[Block], span: Option<&Span>) -> Vec<Slot> {
    let result: std::result::Result<Vec<Slot>, Infallible> = find_with_mapper(
        blocks,
        span,
        by_start,
        |block| Ok(*block),
        Ok,
        &FindOptions::default(),
    );
    match result {
        Ok(slots) => slots,
        Err(never) => match never {},
    }
}

/// Find the free slots of `span` around any caller type implementing
/// [`Period`].
///
/// # Errors
///
/// [`Error::InvalidRange`](crate::Error::InvalidRange) for the first item
/// whose start is after its end.
pub fn find_periods<P: Period>(items: &[P], span: Option<&Span>) -> Result<Vec<Slot>> {
    find_with_mapper(
        items,
        span,
        by_start,
        |item| Block::from_period(item),
        Ok,
        &FindOptions::default(),
    )
}
