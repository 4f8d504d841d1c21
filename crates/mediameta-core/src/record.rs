use serde::{Deserialize, Serialize};

/// Media kind reported by the `Type:` field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaType {
    Image,
    Video,
}

impl MediaType {
    /// Match the literal tokens `image` / `video` (case-sensitive).
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "image" => Some(Self::Image),
            "video" => Some(Self::Video),
            _ => None,
        }
    }
}

/// Calendar components as they appeared in the report. Not validated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaptureDate {
    pub year: u32,
    pub month: u32,
    pub day: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    /// Name from the delimiter line, verbatim
    pub filename: String,
    /// Media kind (only when the report format carries `Type:` lines)
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub media_type: Option<MediaType>,
    /// Capture date
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<CaptureDate>,
}

impl Record {
    pub fn new(filename: String) -> Self {
        Self {
            filename,
            media_type: None,
            date: None,
        }
    }

    pub fn is_image(&self) -> bool {
        self.media_type == Some(MediaType::Image)
    }
}
