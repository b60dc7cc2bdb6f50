//! Free tables with caller-defined input and output types
//!
//! Reservations are mapped to blocks on the fly, every free slot is mapped to
//! a `TableSlot`, and slots shorter than two hours are dropped.
//!
//! ```bash
//! cargo run --example restaurant
//! ```

use chrono::{DateTime, Duration, Utc};
use slotify::{find_with_mapper, format_instant, Block, FindOptions, Period, Span};

#[derive(Debug)]
struct Reservation {
    table_id: u32,
    start: DateTime<Utc>,
    end: DateTime<Utc>,
}

#[derive(Debug)]
struct TableSlot {
    table_id: u32,
    start: DateTime<Utc>,
    end: DateTime<Utc>,
}

fn main() -> anyhow::Result<()> {
    let now = Utc::now();
    let table_id = 1;

    let span = Span::new(now, now + Duration::hours(8))?;
    println!("Search span:\n{}\n", span);

    let reservations = vec![
        Reservation {
            table_id,
            start: now + Duration::hours(6),
            end: now + Duration::hours(7),
        },
        Reservation {
            table_id,
            start: now,
            end: now + Duration::hours(1),
        },
        Reservation {
            table_id,
            start: now + Duration::hours(2),
            end: now + Duration::hours(3),
        },
    ];
    println!("Reservations:");
    for r in &reservations {
        println!(
            "table {}: {}, {}",
            r.table_id,
            format_instant(&r.start),
            format_instant(&r.end)
        );
    }

    // Anything shorter than two hours is not worth offering
    let options = FindOptions::with_filter(|s: &TableSlot| s.end - s.start >= Duration::hours(2));

    let slots = find_with_mapper(
        &reservations,
        Some(&span),
        |a, b| a.start.cmp(&b.start),
        |r| Block::new(r.start, r.end),
        |s| {
            Ok(TableSlot {
                table_id,
                start: s.start(),
                end: s.end(),
            })
        },
        &options,
    )?;

    println!("\nAvailable slots:");
    for s in &slots {
        println!(
            "table {}: {}, {}",
            s.table_id,
            format_instant(&s.start),
            format_instant(&s.end)
        );
    }

    Ok(())
}
