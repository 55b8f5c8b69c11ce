//! Conversions for `Event.timeStamp`
//!
//! The host reports time stamps as a `DOMHighResTimeStamp`: a floating point count of
//! milliseconds since an origin the host chooses. [`millis_from_host`] turns that reading into
//! the whole milliseconds exposed by [`Event::time_stamp`](crate::Event::time_stamp), and the
//! remaining functions turn whole milliseconds into `std::time` values.
pub use core::time::Duration;
pub use std::time::{SystemTime, UNIX_EPOCH};

const MILLIS_PER_SEC: u64 = 1_000;
const NANOS_PER_MILLI: u32 = 1_000_000;

/// Truncates a host time stamp to whole milliseconds
///
/// Negative and NaN readings saturate to zero, readings too large for a `u64` saturate to
/// `u64::MAX`.
#[inline]
pub fn millis_from_host(value: f64) -> u64 {
    value as u64
}

/// Splits `millis` into whole seconds and the nanoseconds left over
#[inline]
pub fn duration_from_millis(millis: u64) -> Duration {
    let secs = millis / MILLIS_PER_SEC;
    let nanos = (millis % MILLIS_PER_SEC) as u32 * NANOS_PER_MILLI;
    Duration::new(secs, nanos)
}

/// Treats `millis` as an offset from the Unix epoch
///
/// Never panics. If the offset is too large for the platform's `SystemTime`, it is halved
/// until it fits, so the result is some representable time at or after the epoch, not
/// necessarily the latest one.
pub fn from_millis(millis: u64) -> SystemTime {
    let offset = duration_from_millis(millis);
    UNIX_EPOCH
        .checked_add(offset)
        .unwrap_or_else(|| halved_until_representable(offset))
}

fn halved_until_representable(mut offset: Duration) -> SystemTime {
    loop {
        offset /= 2;
        if let Some(time) = UNIX_EPOCH.checked_add(offset) {
            return time;
        }
    }
}
