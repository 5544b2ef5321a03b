use crate::crypto;
use std::time::{SystemTime, UNIX_EPOCH};

/// Format a time value, in seconds, as a fixed-point decimal with exactly two fractional
/// digits, e.g., `1700000000.00`.
///
/// Values are rounded to the nearest hundredth, with halves rounded away from zero.  The output
/// never contains grouping separators and always uses `.` as the decimal point.
pub fn decistamp(secs: f64) -> String {
    let h = hundredths(secs);
    let sign = if h < 0 { "-" } else { "" };
    let h = h.abs();
    format!("{}{}.{:02}", sign, h / 100, h % 100)
}

/// Convert a `SystemTime` to fractional seconds since the epoch.  Times before the epoch are
/// treated as the epoch itself.
pub fn epoch_secs(time: SystemTime) -> f64 {
    time.duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs_f64()
}

/// The current time, as fractional seconds since the epoch.
pub fn now_secs() -> f64 {
    epoch_secs(SystemTime::now())
}

/// The given number of seconds, in hundredths, which is the resolution of Hawk timestamps
/// produced by `decistamp`.
pub(crate) fn hundredths(secs: f64) -> i64 {
    (secs * 100.0).round() as i64
}

/// Compare two values without leaking the position of the first difference.  Values of
/// differing length compare unequal.
pub fn timing_safe_eq<A, B>(a: A, b: B) -> bool
where
    A: AsRef<[u8]>,
    B: AsRef<[u8]>,
{
    let (a, b) = (a.as_ref(), b.as_ref());
    if a.len() != b.len() {
        return false;
    }
    crypto::get_cryptographer().constant_time_compare(a, b)
}
