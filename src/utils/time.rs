use chrono::{DateTime, Datelike, Months, NaiveDate, TimeZone, Utc};
use std::collections::BTreeMap;

use crate::error::{Error, Result};

pub fn now() -> DateTime<Utc> {
    Utc::now()
}

pub fn month_key(dt: DateTime<Utc>) -> String {
    dt.format("%Y-%m").to_string()
}

/// Converts a unix timestamp in seconds into a UTC instant.
pub fn from_unix(seconds: i64) -> Result<DateTime<Utc>> {
    Utc.timestamp_opt(seconds, 0)
        .single()
        .ok_or_else(|| Error::BadRequest(format!("invalid unix timestamp: {}", seconds)))
}

/// One zeroed bucket per calendar month touched by `[start, end]`, keyed `YYYY-MM`.
pub fn empty_month_buckets(start: DateTime<Utc>, end: DateTime<Utc>) -> BTreeMap<String, i64> {
    let mut buckets = BTreeMap::new();
    if start > end {
        return buckets;
    }

    let Some(mut cursor) = NaiveDate::from_ymd_opt(start.year(), start.month(), 1) else {
        return buckets;
    };
    let last = end.date_naive();
    while cursor <= last {
        buckets.insert(cursor.format("%Y-%m").to_string(), 0);
        match cursor.checked_add_months(Months::new(1)) {
            Some(next) => cursor = next,
            None => break,
        }
    }
    buckets
}
