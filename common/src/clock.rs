use chrono::NaiveDateTime;

/// 24-hour, zero padded: `14:05:09`.
pub const TIME_FORMAT: &str = "%H:%M:%S";
/// Full weekday, zero padded day, full month, 4-digit year: `Thursday, 07 March 2024`.
pub const DATE_FORMAT: &str = "%A, %d %B %Y";

pub fn format_time(now: &NaiveDateTime) -> String {
    now.format(TIME_FORMAT).to_string()
}

pub fn format_date(now: &NaiveDateTime) -> String {
    now.format(DATE_FORMAT).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, mo, d)
            .unwrap()
            .and_hms_opt(h, mi, s)
            .unwrap()
    }

    #[test]
    fn time_string() {
        assert_eq!(format_time(&at(2024, 3, 7, 14, 5, 9)), "14:05:09");
        assert_eq!(format_time(&at(2024, 3, 7, 0, 0, 0)), "00:00:00");
        assert_eq!(format_time(&at(2024, 3, 7, 23, 59, 59)), "23:59:59");
    }

    #[test]
    fn date_string() {
        assert_eq!(
            format_date(&at(2024, 3, 7, 14, 5, 9)),
            "Thursday, 07 March 2024"
        );
        assert_eq!(
            format_date(&at(1999, 12, 31, 23, 59, 59)),
            "Friday, 31 December 1999"
        );
    }
}
