//! Free slots from the library's own types
//!
//! Caller events are turned into `Block`s up front with `Block::from_items`,
//! then searched with `find`.
//!
//! ```bash
//! cargo run --example prepared
//! ```

use chrono::{DateTime, Duration, Utc};
use slotify::{find, format_periods, Block, Span};

struct ScheduledEvent {
    start: DateTime<Utc>,
    end: DateTime<Utc>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let now = Utc::now();

    // Normally taken from the request
    let span = Span::new(now, now + Duration::hours(8))?;
    println!("Search span:\n{}\n", span);

    // Normally loaded from the database
    let events = vec![
        ScheduledEvent {
            start: now - Duration::hours(1),
            end: now + Duration::hours(1),
        },
        ScheduledEvent {
            start: now + Duration::hours(2),
            end: now + Duration::hours(4),
        },
        ScheduledEvent {
            start: now + Duration::hours(3),
            end: now + Duration::hours(5),
        },
    ];

    let blocks = Block::from_items(&events, |e| Block::new(e.start, e.end))?;
    println!("Scheduled events:\n{}", format_periods(&blocks));

    let slots = find(&blocks, Some(&span));
    println!("Available slots:\n{}", format_periods(&slots));

    Ok(())
}
