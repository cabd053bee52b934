//! Normalization of timestamps read from and written to storage.
//!
//! Every timestamp column is stored without a zone and holds UTC. Values read
//! back are tagged as UTC without shifting.

use chrono::{DateTime, NaiveDateTime, TimeZone, Utc};

/// Tag a stored timestamp as UTC.
pub fn as_utc(stored: NaiveDateTime) -> DateTime<Utc> {
    Utc.from_utc_datetime(&stored)
}

/// Tag an optional stored timestamp as UTC. `None` stays `None`.
pub fn as_utc_opt(stored: Option<NaiveDateTime>) -> Option<DateTime<Utc>> {
    stored.map(as_utc)
}

/// Convert a zoned timestamp into the stored representation.
pub fn to_db<Tz: TimeZone>(value: &DateTime<Tz>) -> NaiveDateTime {
    value.with_timezone(&Utc).naive_utc()
}
