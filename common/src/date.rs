use std::fmt;

use chrono::{DateTime, TimeZone, Utc};

/// Render an order timestamp in `tz`, e.g. `January 5, 2025 at 02:30 PM`.
pub fn format_order_date<Tz>(at: &DateTime<Utc>, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: fmt::Display,
{
    at.with_timezone(tz)
        .format("%B %-d, %Y at %I:%M %p")
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::FixedOffset;

    #[test]
    fn test_format_utc() {
        let at = Utc.with_ymd_and_hms(2025, 1, 5, 14, 30, 0).unwrap();
        assert_eq!(format_order_date(&at, &Utc), "January 5, 2025 at 02:30 PM");
    }

    #[test]
    fn test_format_shifts_into_zone() {
        let at = Utc.with_ymd_and_hms(2025, 1, 5, 2, 5, 0).unwrap();
        let new_york = FixedOffset::west_opt(5 * 3600).unwrap();
        assert_eq!(
            format_order_date(&at, &new_york),
            "January 4, 2025 at 09:05 PM"
        );
    }

    #[test]
    fn test_format_morning() {
        let at = Utc.with_ymd_and_hms(2024, 12, 31, 9, 0, 0).unwrap();
        assert_eq!(format_order_date(&at, &Utc), "December 31, 2024 at 09:00 AM");
    }
}
