//! Civil-time schedule handling.
//!
//! Every timestamp this tool writes — the `scheduled_at` column, row ids,
//! text-artifact filenames — is civil time in one fixed UTC offset (stock
//! +09:00, configurable). The machine's local timezone is never consulted,
//! so a queue produced on a laptop abroad schedules identically to one
//! produced on the server.
//!
//! The schedule argument is either the literal `now` or an explicit
//! `YYYY-MM-DD HH:MM` string. An explicit string that does not parse fails
//! the whole invocation before anything is written; silently defaulting to
//! "now" would queue a post at the wrong time.

use chrono::{DateTime, FixedOffset, NaiveDateTime, Utc};
use thiserror::Error;

/// Format for the `scheduled_at` column and the schedule argument.
pub const SCHEDULE_FMT: &str = "%Y-%m-%d %H:%M";

#[derive(Error, Debug)]
#[error("invalid schedule {0:?}: expected 'now' or 'YYYY-MM-DD HH:MM' (e.g. 2025-10-13 08:10)")]
pub struct ScheduleError(pub String);

/// A validated schedule request.
#[derive(Debug, Clone, PartialEq)]
pub enum Schedule {
    /// Post at the current civil time.
    Now,
    /// Post at an explicit civil date-time.
    At(NaiveDateTime),
}

impl Schedule {
    /// Parse the schedule argument. `now` is matched case-insensitively and
    /// surrounding whitespace is ignored; anything else must be an exact
    /// [`SCHEDULE_FMT`] string.
    pub fn parse(raw: &str) -> Result<Schedule, ScheduleError> {
        let trimmed = raw.trim();
        if trimmed.eq_ignore_ascii_case("now") {
            return Ok(Schedule::Now);
        }
        NaiveDateTime::parse_from_str(trimmed, SCHEDULE_FMT)
            .map(Schedule::At)
            .map_err(|_| ScheduleError(raw.to_string()))
    }

    /// The `scheduled_at` column value, minute resolution.
    pub fn column_value(&self, now_civil: NaiveDateTime) -> String {
        let at = match self {
            Schedule::Now => now_civil,
            Schedule::At(dt) => *dt,
        };
        at.format(SCHEDULE_FMT).to_string()
    }
}

/// Current civil time in the queue's fixed offset.
pub fn now_civil(offset: FixedOffset) -> NaiveDateTime {
    civil(Utc::now(), offset)
}

/// Convert an instant to civil time in the queue's fixed offset.
pub fn civil(instant: DateTime<Utc>, offset: FixedOffset) -> NaiveDateTime {
    instant.with_timezone(&offset).naive_local()
}
