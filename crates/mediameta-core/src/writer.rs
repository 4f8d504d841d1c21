use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::record::{MediaType, Record};

/// Binding for the untyped format.
pub const UNTYPED_IDENT: &str = "const imageMetadata";
/// Binding for the typed format's primary file.
pub const MEDIA_IDENT: &str = "window.mediaMetadata";
/// Binding for the image-only file written next to the typed output.
pub const LEGACY_IDENT: &str = "window.imageMetadata";

const MEDIA_FRAGMENT: &str = "mediaMetadata";
const IMAGE_FRAGMENT: &str = "imageMetadata";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// `const imageMetadata = [...]`, no `type` keys
    Untyped,
    /// `window.mediaMetadata = [...]` plus the image-only legacy file
    Typed,
}

impl OutputFormat {
    pub fn new(track_types: bool) -> Self {
        if track_types {
            Self::Typed
        } else {
            Self::Untyped
        }
    }

    pub fn identifier(self) -> &'static str {
        match self {
            Self::Untyped => UNTYPED_IDENT,
            Self::Typed => MEDIA_IDENT,
        }
    }

    pub fn default_output(self) -> PathBuf {
        match self {
            Self::Untyped => PathBuf::from("js/imageMetadata.js"),
            Self::Typed => PathBuf::from("js/mediaMetadata.js"),
        }
    }
}

/// What `emit` wrote.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmitSummary {
    pub total: usize,
    /// Per-type counts, only for the typed format
    pub images: Option<usize>,
    pub videos: Option<usize>,
    pub primary: PathBuf,
    /// Image-only file, if one was written
    pub legacy: Option<PathBuf>,
}

/// Write `records` to `output`, plus the image-only sibling for the typed format.
///
/// The sibling is skipped when there are no image records.
pub fn emit(records: &[Record], output: &Path, format: OutputFormat) -> Result<EmitSummary> {
    write_data_file(output, format.identifier(), records)?;

    let mut summary = EmitSummary {
        total: records.len(),
        images: None,
        videos: None,
        primary: output.to_path_buf(),
        legacy: None,
    };

    if format == OutputFormat::Typed {
        let images: Vec<Record> = records
            .iter()
            .filter(|r| r.is_image())
            .map(|r| Record {
                media_type: None,
                ..r.clone()
            })
            .collect();
        let videos = records
            .iter()
            .filter(|r| r.media_type == Some(MediaType::Video))
            .count();

        let path = legacy_path(output);
        if !images.is_empty() {
            write_data_file(&path, LEGACY_IDENT, &images)?;
            summary.legacy = Some(path);
        } else if path != output {
            remove_stale(&path)?;
        }

        summary.images = Some(images.len());
        summary.videos = Some(videos);
    }

    Ok(summary)
}

/// Path of the image-only file for a typed primary output.
///
/// `js/mediaMetadata.js` -> `js/imageMetadata.js`; names without the
/// `mediaMetadata` fragment get an `-images` suffix on the stem.
pub fn legacy_path(primary: &Path) -> PathBuf {
    let name = primary
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();

    let legacy_name = if name.contains(MEDIA_FRAGMENT) {
        name.replace(MEDIA_FRAGMENT, IMAGE_FRAGMENT)
    } else {
        let p = Path::new(&name);
        let stem = p.file_stem().and_then(|s| s.to_str()).unwrap_or("metadata");
        match p.extension().and_then(|s| s.to_str()) {
            Some(ext) => format!("{}-images.{}", stem, ext),
            None => format!("{}-images", stem),
        }
    };

    primary.with_file_name(legacy_name)
}

/// Delete an image-only file left by an earlier run.
fn remove_stale(path: &Path) -> Result<()> {
    match fs::remove_file(path) {
        Ok(()) => {
            tracing::debug!(path = %path.display(), "removed stale image-only file");
            Ok(())
        }
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
        Err(e) => Err(Error::Io(e)),
    }
}

fn write_data_file(path: &Path, identifier: &str, records: &[Record]) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    let json = serde_json::to_string_pretty(records)?;
    fs::write(path, format!("{} = {};\n", identifier, json))?;
    tracing::debug!(path = %path.display(), records = records.len(), "wrote data file");
    Ok(())
}

/// Parse an emitted data file back into its binding and records.
pub fn read_data_file(text: &str) -> Result<(String, Vec<Record>)> {
    let (identifier, value) = text
        .split_once(" = ")
        .ok_or_else(|| Error::MalformedDataFile("missing assignment".to_string()))?;
    let json = value
        .trim_end()
        .strip_suffix(';')
        .ok_or_else(|| Error::MalformedDataFile("missing trailing ';'".to_string()))?;
    let records = serde_json::from_str(json)?;
    Ok((identifier.trim().to_string(), records))
}
