//! Current time lookup by timezone name.

use chrono::Utc;
use chrono_tz::Tz;

/// Common abbreviations mapped to IANA zone names.
const TIMEZONE_MAP: &[(&str, &str)] = &[
    ("UTC", "UTC"),
    ("EST", "US/Eastern"),
    ("PST", "US/Pacific"),
    ("CST", "US/Central"),
    ("MST", "US/Mountain"),
    ("GMT", "GMT"),
    ("CET", "Europe/Paris"),
    ("JST", "Asia/Tokyo"),
];

/// The current time in the given timezone.
///
/// Accepts the common abbreviations above or any IANA zone name; an
/// unknown zone is reported in the result text with the available
/// abbreviations.
pub fn time_in(timezone: &str) -> String {
    let upper = timezone.to_ascii_uppercase();
    let name = TIMEZONE_MAP
        .iter()
        .find(|(abbr, _)| *abbr == upper)
        .map(|(_, name)| *name)
        .unwrap_or(timezone);

    match name.parse::<Tz>() {
        Ok(tz) => {
            let now = Utc::now().with_timezone(&tz);
            format!(
                "Current time in {timezone}: {}",
                now.format("%Y-%m-%d %H:%M:%S %Z")
            )
        }
        Err(_) => {
            let available: Vec<_> = TIMEZONE_MAP.iter().map(|(abbr, _)| *abbr).collect();
            format!(
                "Unknown timezone: {timezone}. Available: {}",
                available.join(", ")
            )
        }
    }
}
