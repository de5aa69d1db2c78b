//! Limited-time offer countdown shown on the course catalog.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::Serialize;

/// Time left on an offer. Ticks down one second at a time, borrowing from
/// the next larger unit; inactive once every unit is zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct Countdown {
    pub days: u32,
    pub hours: u32,
    pub minutes: u32,
    pub seconds: u32,
}

impl Countdown {
    /// Time remaining from `now` until `deadline`, zero if it has passed.
    #[must_use]
    pub fn until(deadline: DateTime<Utc>, now: DateTime<Utc>) -> Self {
        let remaining = u64::try_from((deadline - now).num_seconds()).unwrap_or(0);
        Self::from_seconds(remaining)
    }

    #[must_use]
    pub fn from_seconds(total: u64) -> Self {
        let unit = |value: u64| u32::try_from(value).unwrap_or(u32::MAX);
        Self {
            days: unit(total / 86_400),
            hours: unit((total % 86_400) / 3_600),
            minutes: unit((total % 3_600) / 60),
            seconds: unit(total % 60),
        }
    }

    #[must_use]
    pub const fn is_active(&self) -> bool {
        self.days > 0 || self.hours > 0 || self.minutes > 0 || self.seconds > 0
    }

    /// Advance by one second. Returns whether the offer is still active.
    pub fn tick(&mut self) -> bool {
        if self.seconds > 0 {
            self.seconds -= 1;
        } else if self.minutes > 0 {
            self.minutes -= 1;
            self.seconds = 59;
        } else if self.hours > 0 {
            self.hours -= 1;
            self.minutes = 59;
            self.seconds = 59;
        } else if self.days > 0 {
            self.days -= 1;
            self.hours = 23;
            self.minutes = 59;
            self.seconds = 59;
        }
        self.is_active()
    }
}

impl fmt::Display for Countdown {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}d {:02}h {:02}m {:02}s",
            self.days, self.hours, self.minutes, self.seconds
        )
    }
}
