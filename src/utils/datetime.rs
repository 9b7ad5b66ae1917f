use chrono::{DateTime, Utc};

/// Format a timestamp the way spreadsheet rows expect it.
pub fn format_row_timestamp(dt: &DateTime<Utc>) -> String {
    dt.format("%Y-%m-%d %H:%M:%S").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn row_timestamp_format() {
        let dt = Utc.with_ymd_and_hms(2024, 3, 9, 18, 5, 7).unwrap();
        assert_eq!(format_row_timestamp(&dt), "2024-03-09 18:05:07");
    }
}
