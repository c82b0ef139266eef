use crate::services::date_normalizer::NormalizedTimestamp;
use chrono::{DateTime, NaiveDate, Utc};
use chrono_tz::Tz;
use std::cmp::Reverse;

/// Chronological order of a result set
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    /// Oldest first; unparsable dates lead
    Ascending,
    /// Newest first; unparsable dates trail
    Descending,
}

/// Source of "now", injectable so the today filter is testable
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

/// Wall clock
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Clock frozen at one instant
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

/// Stable sort by timestamp. Records with equal keys keep their input order.
///
/// `key_fn` is evaluated once per record.
pub fn sort_by_timestamp<T, F>(mut records: Vec<T>, key_fn: F, direction: SortDirection) -> Vec<T>
where
    F: Fn(&T) -> NormalizedTimestamp,
{
    match direction {
        SortDirection::Ascending => records.sort_by_cached_key(|r| key_fn(r)),
        SortDirection::Descending => records.sort_by_cached_key(|r| Reverse(key_fn(r))),
    }
    records
}

/// Current calendar date in `tz`
pub fn current_date_in(tz: Tz, clock: &dyn Clock) -> NaiveDate {
    clock.now().with_timezone(&tz).date_naive()
}

/// Keep records dated on `today`, ignoring time of day.
///
/// `date_fn` returns `None` for unparsable dates; those records never match,
/// even though they carry the sentinel when sorted.
pub fn filter_same_day<T, F>(records: &[T], date_fn: F, today: NaiveDate) -> Vec<T>
where
    T: Clone,
    F: Fn(&T) -> Option<NormalizedTimestamp>,
{
    records
        .iter()
        .filter(|r| date_fn(r).map_or(false, |ts| ts.date() == today))
        .cloned()
        .collect()
}

/// First `n` records of an already sorted sequence
pub fn recent<T: Clone>(records: &[T], n: usize) -> Vec<T> {
    records.iter().take(n).cloned().collect()
}
