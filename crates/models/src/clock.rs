//! Process-wide UTC clock that never goes backwards.

use std::sync::atomic::{AtomicI64, Ordering};

use chrono::{DateTime, SecondsFormat, Utc};

static LAST_ISSUED_MICROS: AtomicI64 = AtomicI64::new(i64::MIN);

/// Current UTC instant at microsecond precision, clamped so that it is never earlier
/// than any instant previously returned in this process.
pub fn now() -> DateTime<Utc> {
    let wall = Utc::now().timestamp_micros();
    let prev = LAST_ISSUED_MICROS.fetch_max(wall, Ordering::SeqCst);
    let micros = wall.max(prev);
    DateTime::from_timestamp_micros(micros).unwrap_or_else(Utc::now)
}

/// ISO-8601 rendering used for every stored timestamp, e.g. `2024-05-01T10:00:00.123456+00:00`.
pub fn to_iso(instant: &DateTime<Utc>) -> String {
    instant.to_rfc3339_opts(SecondsFormat::Micros, false)
}

/// `now()` rendered with [`to_iso`].
pub fn now_iso() -> String {
    to_iso(&now())
}
