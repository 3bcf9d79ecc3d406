//! DateTime display utilities.

use std::fmt;

use jiff::{tz::TimeZone, Timestamp};

/// A wrapper around `Timestamp` that provides system timezone formatting via
/// the `Display` trait.
///
/// The display format follows the pattern: `YYYY-MM-DD HH:MM:SS TZ`
pub struct LocalDateTime<'a>(pub &'a Timestamp);

impl fmt::Display for LocalDateTime<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            self.0
                .to_zoned(TimeZone::system())
                .strftime("%Y-%m-%d %H:%M:%S %Z")
        )
    }
}

/// Calendar date of an optional timestamp in UTC, `unknown` when absent.
///
/// ```rust
/// use jiff::Timestamp;
/// use pv_core::display::Date;
///
/// let ts: Timestamp = "2025-03-04T23:59:00Z".parse().unwrap();
/// assert_eq!(Date(Some(&ts)).to_string(), "2025-03-04");
/// assert_eq!(Date(None).to_string(), "unknown");
/// ```
pub struct Date<'a>(pub Option<&'a Timestamp>);

impl fmt::Display for Date<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(ts) => write!(f, "{}", ts.strftime("%Y-%m-%d")),
            None => f.write_str("unknown"),
        }
    }
}
