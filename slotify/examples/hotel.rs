//! Free room nights from a caller type implementing `Period`
//!
//! `Booking` implements the `Period` contract itself, so it can be searched
//! with `find_periods` without any mapping code.
//!
//! ```bash
//! cargo run --example hotel
//! ```

use chrono::{DateTime, Duration, Utc};
use slotify::{find_periods, format_periods, Instant, Period, Span};

struct Booking {
    #[allow(dead_code)]
    room_id: u32,
    check_in: DateTime<Utc>,
    check_out: DateTime<Utc>,
}

impl Period for Booking {
    fn start(&self) -> Instant {
        self.check_in
    }

    fn end(&self) -> Instant {
        self.check_out
    }
}

fn main() -> anyhow::Result<()> {
    let now = Utc::now();
    let day = Duration::days(1);

    let span = Span::new(now, now + day * 8)?;
    println!("Search span:\n{}\n", span);

    let bookings = vec![
        Booking {
            room_id: 1,
            check_in: now,
            check_out: now + day,
        },
        Booking {
            room_id: 1,
            check_in: now + day * 2,
            check_out: now + day * 3,
        },
        Booking {
            room_id: 1,
            check_in: now + Duration::hours(6),
            check_out: now + Duration::hours(7),
        },
    ];
    println!("Bookings:\n{}", format_periods(&bookings));

    let slots = find_periods(&bookings, Some(&span))?;
    println!("Available:\n{}", format_periods(&slots));

    Ok(())
}
