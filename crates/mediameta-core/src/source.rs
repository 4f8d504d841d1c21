use std::fmt;
use std::fs;
use std::io::{self, IsTerminal, Read};
use std::path::{Path, PathBuf};

use clap::ValueEnum;
use encoding_rs::WINDOWS_1252;

use crate::error::{Error, Result};

/// How the report source is chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum InputMode {
    /// Standard input when piped, otherwise the metadata file
    Auto,
    Stdin,
    File,
}

/// Where the report text comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReportSource {
    Stdin,
    File(PathBuf),
}

impl ReportSource {
    /// Read from stdin when it is piped, otherwise from `path`.
    pub fn detect(path: &Path) -> Self {
        if io::stdin().is_terminal() {
            Self::File(path.to_path_buf())
        } else {
            Self::Stdin
        }
    }

    /// Resolve `mode` against the configured report path.
    pub fn from_mode(mode: InputMode, path: &Path) -> Self {
        match mode {
            InputMode::Auto => Self::detect(path),
            InputMode::Stdin => Self::Stdin,
            InputMode::File => Self::File(path.to_path_buf()),
        }
    }
}

impl fmt::Display for ReportSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Stdin => f.write_str("standard input"),
            Self::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Load the whole report into memory.
pub fn read_report(source: &ReportSource) -> Result<String> {
    let bytes = match source {
        ReportSource::Stdin => {
            let mut buf = Vec::new();
            io::stdin().lock().read_to_end(&mut buf)?;
            buf
        }
        ReportSource::File(path) => fs::read(path).map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => Error::MissingInput(path.clone()),
            _ => Error::Io(e),
        })?,
    };
    Ok(decode_report(&bytes))
}

/// Decode report bytes, trying UTF-8 first, then Windows-1252
pub fn decode_report(raw: &[u8]) -> String {
    let raw = raw.strip_prefix(b"\xEF\xBB\xBF").unwrap_or(raw);

    if let Ok(s) = std::str::from_utf8(raw) {
        return s.to_string();
    }

    tracing::debug!("report is not valid UTF-8, decoding as Windows-1252");
    let (decoded, _) = WINDOWS_1252.decode_without_bom_handling(raw);
    decoded.into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_decode_report() {
        assert_eq!(decode_report(b"\xEF\xBB\xBF=== Metadata for a.jpg ==="), "=== Metadata for a.jpg ===");
        assert_eq!(decode_report("café.jpg".as_bytes()), "café.jpg");
        assert_eq!(decode_report(b"caf\xE9.jpg"), "café.jpg");
    }

    #[test]
    fn test_forced_modes() {
        let path = Path::new("metadata.txt");
        assert_eq!(ReportSource::from_mode(InputMode::Stdin, path), ReportSource::Stdin);
        assert_eq!(
            ReportSource::from_mode(InputMode::File, path),
            ReportSource::File(PathBuf::from("metadata.txt"))
        );
    }

    #[test]
    fn test_missing_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("metadata.txt");
        let err = read_report(&ReportSource::File(path.clone())).unwrap_err();
        assert!(matches!(err, Error::MissingInput(p) if p == path));
    }

    #[test]
    fn test_read_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("metadata.txt");
        fs::write(&path, "=== Metadata for a.jpg ===\n").unwrap();
        let text = read_report(&ReportSource::File(path)).unwrap();
        assert_eq!(text, "=== Metadata for a.jpg ===\n");
    }
}
