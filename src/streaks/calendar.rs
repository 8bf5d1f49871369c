//! Timezone-aware calendar day comparisons
//!
//! A streak counts calendar days in the user's own timezone, so two instants
//! are compared by localizing them first and discarding the time of day.

use chrono::{DateTime, NaiveDate, Utc};
use chrono_tz::Tz;

/// Resolve an IANA timezone name, falling back to UTC for unrecognized input.
///
/// User-supplied zone names can be stale or mistyped; a bad name degrades to
/// UTC instead of failing the whole streak update.
pub fn resolve_tz(name: &str) -> Tz {
    name.parse().unwrap_or(Tz::UTC)
}

/// The calendar date of an instant in the given timezone.
pub fn local_date(instant: DateTime<Utc>, tz: Tz) -> NaiveDate {
    instant.with_timezone(&tz).date_naive()
}

/// True if both instants fall on the same calendar date in `tz`.
pub fn same_day(a: DateTime<Utc>, b: DateTime<Utc>, tz: Tz) -> bool {
    local_date(a, tz) == local_date(b, tz)
}

/// True if `b` falls exactly one calendar day after `a` in `tz`.
pub fn next_day(a: DateTime<Utc>, b: DateTime<Utc>, tz: Tz) -> bool {
    local_date(a, tz).succ_opt() == Some(local_date(b, tz))
}
