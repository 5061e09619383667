//! Deterministic day-indexed rotation over the card list.
//!
//! The landing page and the queue feeder must agree on "today's card" with
//! no shared state, so the choice is a pure function of the UTC calendar
//! day: the number of days since a fixed epoch, modulo the card count.
//! Every invocation on the same UTC day picks the same index, from any
//! machine in any timezone, and over `count` consecutive days each card is
//! picked exactly once before the cycle repeats.
//!
//! The epoch is an explicit parameter (it lives in [`crate::config`]), not a
//! module constant, so tests and alternate deployments can move it.

use chrono::NaiveDate;

/// Index of the card to feature on `today` (a UTC calendar date).
///
/// `count` must be positive; the extractor guarantees a non-empty card list.
/// Dates before the epoch still rotate: `rem_euclid` keeps the index in
/// `0..count` for negative day deltas.
pub fn pick_index(count: usize, today: NaiveDate, epoch: NaiveDate) -> usize {
    let days = (today - epoch).num_days();
    days.rem_euclid(count as i64) as usize
}
