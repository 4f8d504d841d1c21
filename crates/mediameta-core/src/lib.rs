pub mod date;
pub mod error;
pub mod record;
pub mod report;
pub mod source;
pub mod writer;

use std::fmt;
use std::path::PathBuf;

pub use error::{Error, Result};
pub use record::{CaptureDate, MediaType, Record};
pub use report::ParseOptions;
pub use source::{InputMode, ReportSource};
pub use writer::OutputFormat;

#[derive(Debug, Clone)]
pub struct ProcessOptions {
    pub source: ReportSource,
    pub output: PathBuf,
    /// Recognise `Type:` lines and write the typed format
    pub track_types: bool,
    /// Disable date guessing from filenames
    pub no_guess: bool,
}

impl ProcessOptions {
    pub fn parse_options(&self) -> ParseOptions {
        ParseOptions {
            track_types: self.track_types,
            guess_from_filename: !self.no_guess,
        }
    }

    pub fn format(&self) -> OutputFormat {
        OutputFormat::new(self.track_types)
    }
}

#[derive(Debug, Clone)]
pub struct ProcessResult {
    pub total_media: u64,
    pub images: Option<u64>,
    pub videos: Option<u64>,
    pub output: PathBuf,
    pub legacy_output: Option<PathBuf>,
    pub warnings: Vec<String>,
}

impl fmt::Display for ProcessResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.images, self.videos) {
            (Some(images), Some(videos)) => write!(
                f,
                "Successfully processed {} media files ({} images, {} videos)",
                self.total_media, images, videos
            ),
            _ => write!(f, "Successfully processed {} images", self.total_media),
        }
    }
}

/// Read the report, parse it and write the data file(s).
///
/// An empty report is not an error: the empty-array file is still written
/// and a warning is returned in `ProcessResult::warnings`.
pub fn process(options: &ProcessOptions) -> Result<ProcessResult> {
    let text = source::read_report(&options.source)?;
    let records = report::parse(&text, &options.parse_options());

    let mut warnings = Vec::new();
    if records.is_empty() {
        warnings.push(format!("No media records found in {}", options.source));
    }

    let summary = writer::emit(&records, &options.output, options.format())?;

    Ok(ProcessResult {
        total_media: summary.total as u64,
        images: summary.images.map(|n| n as u64),
        videos: summary.videos.map(|n| n as u64),
        output: summary.primary,
        legacy_output: summary.legacy,
        warnings,
    })
}
