use chrono::{DateTime, Utc};

/// `yyyy-MM-dd HH:mm:ss`, used by the run history table.
pub fn format_timestamp(ts: DateTime<Utc>) -> String {
    ts.format("%Y-%m-%d %H:%M:%S").to_string()
}

/// `yyyy-MM-dd HH:mm`, used by the data object checks table.
pub fn format_minute(ts: DateTime<Utc>) -> String {
    ts.format("%Y-%m-%d %H:%M").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_formats() {
        let ts = Utc.with_ymd_and_hms(2024, 6, 1, 9, 5, 7).unwrap();
        assert_eq!(format_timestamp(ts), "2024-06-01 09:05:07");
        assert_eq!(format_minute(ts), "2024-06-01 09:05");
    }
}
