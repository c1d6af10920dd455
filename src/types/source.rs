//! Image source descriptors and scale factors.

use std::path::PathBuf;

/// Where an image definition's bytes come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AssetSource {
    /// A local file path.
    File(PathBuf),
    /// A remote URL, fetched at resolve time.
    Url(String),
    /// In-memory bytes with an explicit file name.
    Data { name: String, bytes: Vec<u8> },
}

impl AssetSource {
    /// A stable key identifying the source, for logs and error messages.
    pub fn key(&self) -> String {
        match self {
            AssetSource::File(path) => path.display().to_string(),
            AssetSource::Url(url) => url.clone(),
            AssetSource::Data { name, .. } => name.clone(),
        }
    }

    /// The file name the manifest entry should reference.
    pub fn file_name(&self) -> Option<String> {
        match self {
            AssetSource::File(path) => path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned()),
            AssetSource::Url(url) => {
                let base = url.rsplit('/').next().unwrap_or("");
                let base = base.split(['?', '#']).next().unwrap_or("");
                if base.is_empty() {
                    None
                } else {
                    Some(base.to_string())
                }
            }
            AssetSource::Data { name, .. } => {
                if name.is_empty() {
                    None
                } else {
                    Some(name.clone())
                }
            }
        }
    }
}

/// Rendering scale factor of an image variant.
///
/// An unset scale on a definition matches any scale for overlap purposes
/// and emits an entry without a `scale` field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scale {
    X1,
    X2,
    X3,
}

impl Scale {
    /// The manifest string for this scale.
    pub fn as_str(self) -> &'static str {
        match self {
            Scale::X1 => "1x",
            Scale::X2 => "2x",
            Scale::X3 => "3x",
        }
    }

    /// The numeric multiplier.
    pub fn factor(self) -> u32 {
        match self {
            Scale::X1 => 1,
            Scale::X2 => 2,
            Scale::X3 => 3,
        }
    }
}

/// Decoded image metadata (dimensions only, no pixel buffer).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImageMetadata {
    pub width: u32,
    pub height: u32,
}
