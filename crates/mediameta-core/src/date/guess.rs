use super::take_digits;
use crate::record::CaptureDate;

/// Guess a capture date from a `YYYYMMDD_...` filename prefix.
pub fn guess_date_from_filename(filename: &str) -> Option<CaptureDate> {
    let (year, rest) = take_digits(filename, 4)?;
    let (month, rest) = take_digits(rest, 2)?;
    let (day, rest) = take_digits(rest, 2)?;
    rest.starts_with('_').then_some(CaptureDate { year, month, day })
}
