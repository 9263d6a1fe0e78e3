use chrono::{NaiveDate, Utc};

const DATE_FORMAT: &str = "%Y-%m-%d";

pub fn parse_date(value: &str) -> Option<NaiveDate> {
    // Accept both plain dates and datetime strings by keeping the date part.
    let date_part = value.split('T').next().unwrap_or(value);
    NaiveDate::parse_from_str(date_part, DATE_FORMAT).ok()
}

pub fn today() -> NaiveDate {
    Utc::now().date_naive()
}

pub fn today_string() -> String {
    today().format(DATE_FORMAT).to_string()
}

/// Number of days a trip spans, counting both endpoints. The range is taken
/// as an absolute distance, matching the promotion behavior when start and
/// end arrive swapped.
pub fn inclusive_day_count(start: &str, end: &str) -> Option<usize> {
    let start = parse_date(start)?;
    let end = parse_date(end)?;
    Some((end - start).num_days().unsigned_abs() as usize + 1)
}

/// A trip is expired once its end date lies strictly before today. An
/// unparseable end date never counts as expired.
pub fn is_expired(end_date: &str) -> bool {
    match parse_date(end_date) {
        Some(end) => end < today(),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_plain_and_datetime_strings() {
        assert_eq!(
            parse_date("2025-03-14"),
            NaiveDate::from_ymd_opt(2025, 3, 14)
        );
        assert_eq!(
            parse_date("2025-03-14T08:00:00Z"),
            NaiveDate::from_ymd_opt(2025, 3, 14)
        );
        assert_eq!(parse_date("not-a-date"), None);
    }

    #[test]
    fn day_count_is_inclusive() {
        assert_eq!(inclusive_day_count("2025-05-01", "2025-05-01"), Some(1));
        assert_eq!(inclusive_day_count("2025-05-01", "2025-05-03"), Some(3));
    }

    #[test]
    fn day_count_ignores_direction() {
        assert_eq!(inclusive_day_count("2025-05-03", "2025-05-01"), Some(3));
    }

    #[test]
    fn day_count_rejects_garbage() {
        assert_eq!(inclusive_day_count("soon", "2025-05-03"), None);
    }

    #[test]
    fn past_end_date_is_expired() {
        assert!(is_expired("2000-01-01"));
        assert!(!is_expired("2999-12-31"));
        assert!(!is_expired(""));
    }
}
