use crate::date::guess::guess_date_from_filename;
use crate::date::line::{parse_date_line, DATE_LABEL};
use crate::record::{MediaType, Record};

const MARKER: &str = "===";
const DELIMITER_LABEL: &str = "Metadata for";
const DELIMITER_PREFIX: &str = "=== Metadata for";
const TYPE_LABEL: &str = "Type:";

/// Which optional fields of the report format are recognised.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseOptions {
    /// Honour `Type:` lines; records default to `image`
    pub track_types: bool,
    /// Seed the date from a `YYYYMMDD_` filename prefix
    pub guess_from_filename: bool,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            track_types: true,
            guess_from_filename: true,
        }
    }
}

enum Line<'a> {
    Delimiter(&'a str),
    Type(Option<MediaType>),
    Date,
    Other,
}

fn classify<'a>(line: &'a str, options: &ParseOptions) -> Line<'a> {
    if line.starts_with(DELIMITER_PREFIX) {
        return Line::Delimiter(delimiter_filename(line));
    }
    if options.track_types {
        if let Some(value) = line.strip_prefix(TYPE_LABEL) {
            return Line::Type(value.split_whitespace().next().and_then(MediaType::from_token));
        }
    }
    if line.contains(DATE_LABEL) {
        return Line::Date;
    }
    Line::Other
}

/// `=== Metadata for name.jpg ===` -> `name.jpg`
fn delimiter_filename(line: &str) -> &str {
    let inner = line.split(MARKER).nth(1).unwrap_or("").trim();
    inner
        .strip_prefix(DELIMITER_LABEL)
        .unwrap_or(inner)
        .trim()
}

/// Parse a report into records, one per delimiter line, in report order.
///
/// Unrecognised or malformed lines are skipped. Within a block the last
/// `Type:` or `Date and Time` value wins, and an explicit date line
/// replaces a date guessed from the filename.
pub fn parse(text: &str, options: &ParseOptions) -> Vec<Record> {
    let mut records = Vec::new();
    let mut current: Option<Record> = None;

    for line in text.lines() {
        match classify(line, options) {
            Line::Delimiter(filename) => {
                if let Some(done) = current.take() {
                    records.push(done);
                }
                let mut record = Record::new(filename.to_string());
                if options.track_types {
                    record.media_type = Some(MediaType::Image);
                }
                if options.guess_from_filename {
                    record.date = guess_date_from_filename(filename);
                }
                current = Some(record);
            }
            Line::Type(Some(media_type)) => {
                if let Some(record) = current.as_mut() {
                    record.media_type = Some(media_type);
                }
            }
            Line::Date => {
                if let (Some(record), Some(date)) = (current.as_mut(), parse_date_line(line)) {
                    record.date = Some(date);
                }
            }
            Line::Type(None) | Line::Other => {}
        }
    }

    if let Some(done) = current {
        records.push(done);
    }

    tracing::debug!(records = records.len(), "parsed report");
    records
}
