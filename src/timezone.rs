use time::{OffsetDateTime, UtcOffset};
use time_tz::{Offset, TimeZone};

/// Get the current UTC offset of a canonical timezone, e.g. "Pacific/Auckland".
///
/// Returns `None` if `canonical_timezone` is not a known timezone.
pub fn get_local_offset(canonical_timezone: &str) -> Option<UtcOffset> {
    time_tz::timezones::get_by_name(canonical_timezone)
        .map(|tz| tz.get_offset_utc(&OffsetDateTime::now_utc()).to_utc())
}

/// Format the month of `date_time` as `YYYY-MM`, the prefix shared by every
/// date in that month.
pub(crate) fn format_year_month(date_time: OffsetDateTime) -> String {
    format!("{:04}-{:02}", date_time.year(), u8::from(date_time.month()))
}

/// The current month in `canonical_timezone` formatted as `YYYY-MM`.
///
/// Returns `None` if `canonical_timezone` is not a known timezone.
pub(crate) fn current_year_month(canonical_timezone: &str) -> Option<String> {
    let offset = get_local_offset(canonical_timezone)?;

    Some(format_year_month(OffsetDateTime::now_utc().to_offset(offset)))
}
