//! Fixed extension-to-media-type lookup.

use std::fmt;

/// Media classification derived from a file extension.
///
/// Unknown extensions have no default; they are a validation error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum MediaType {
    Image,
    Audio,
    Video,
}

impl MediaType {
    /// Look up the media type for an extension, case-insensitively.
    /// A leading dot is tolerated.
    pub fn from_extension(extension: &str) -> Option<Self> {
        let normalized = extension.trim_start_matches('.').to_ascii_lowercase();
        match normalized.as_str() {
            "jpg" | "jpeg" | "png" => Some(MediaType::Image),
            "mp3" => Some(MediaType::Audio),
            "mp4" => Some(MediaType::Video),
            _ => None,
        }
    }

    /// Directory segment label for this media type.
    pub fn label(&self) -> &'static str {
        match self {
            MediaType::Image => "image",
            MediaType::Audio => "audio",
            MediaType::Video => "video",
        }
    }
}

impl fmt::Display for MediaType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
