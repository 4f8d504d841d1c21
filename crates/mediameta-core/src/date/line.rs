use super::take_digits;
use crate::record::CaptureDate;

/// Marker that identifies a date line in the report.
pub const DATE_LABEL: &str = "Date and Time";

/// Extract `YYYY:MM:DD` from a `Date and Time   |YYYY:MM:DD[ HH:MM:SS]` line.
///
/// The label must be followed by whitespace and a `|`. A trailing time is
/// accepted and ignored. Components are taken as-is; `2024:13:32` is a
/// valid result.
pub fn parse_date_line(line: &str) -> Option<CaptureDate> {
    line.match_indices(DATE_LABEL)
        .find_map(|(pos, _)| parse_value(&line[pos + DATE_LABEL.len()..]))
}

fn parse_value(rest: &str) -> Option<CaptureDate> {
    let value = rest.trim_start();
    if value.len() == rest.len() {
        return None;
    }
    let value = value.strip_prefix('|')?;
    let (year, value) = take_digits(value, 4)?;
    let (month, value) = take_digits(value.strip_prefix(':')?, 2)?;
    let (day, _) = take_digits(value.strip_prefix(':')?, 2)?;
    Some(CaptureDate { year, month, day })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(year: u32, month: u32, day: u32) -> Option<CaptureDate> {
        Some(CaptureDate { year, month, day })
    }

    #[test]
    fn test_date_lines() {
        assert_eq!(parse_date_line("Date and Time          |2023:06:20 14:30:00"), ymd(2023, 6, 20));
        assert_eq!(parse_date_line("Date and Time |2024:12:08"), ymd(2024, 12, 8));
        assert_eq!(parse_date_line("Date and Time\t|1999:01:02\n"), ymd(1999, 1, 2));
        assert_eq!(parse_date_line("Date and Time |2024:13:32"), ymd(2024, 13, 32));
    }

    #[test]
    fn test_rejected_date_lines() {
        assert_eq!(parse_date_line("Date and Time|2023:06:20"), None);
        assert_eq!(parse_date_line("Date and Time (Original) |2023:06:20"), None);
        assert_eq!(parse_date_line("Date and Time          |2023-06-20"), None);
        assert_eq!(parse_date_line("Date and Time          |23:06:20"), None);
        assert_eq!(parse_date_line("Date and Time          |"), None);
        assert_eq!(parse_date_line("Exposure Time          |1/60"), None);
    }

    #[test]
    fn test_second_label_occurrence() {
        assert_eq!(
            parse_date_line("Date and Time (Original) Date and Time |2020:02:29"),
            ymd(2020, 2, 29)
        );
    }
}
