//! Asset source resolution and metadata decode.
//!
//! The builders never touch I/O; this module is the collaborator that
//! turns an [`AssetSource`] into bytes or decoded metadata. Every
//! failure — file read, HTTP fetch, malformed image bytes — comes back
//! as a recoverable [`XcError::SourceResolution`]; nothing here aborts
//! the process, and nothing leaves temporary files behind (remote
//! bytes are decoded in memory).

use std::fs;
use std::io::Cursor;

use crate::builder::ImageDefinition;
use crate::error::{Result, XcError};
use crate::types::{AssetSource, ImageMetadata};

/// Fetch the raw bytes of a source.
pub fn resolve(source: &AssetSource) -> Result<Vec<u8>> {
    match source {
        AssetSource::File(path) => {
            log::debug!("reading image from {}", path.display());
            fs::read(path).map_err(|e| XcError::SourceResolution {
                source_key: source.key(),
                message: format!("failed to read file: {}", e),
            })
        }
        AssetSource::Url(url) => {
            log::debug!("fetching image from {}", url);
            fetch(url).map_err(|message| XcError::SourceResolution {
                source_key: source.key(),
                message,
            })
        }
        AssetSource::Data { bytes, .. } => Ok(bytes.clone()),
    }
}

/// Resolve a source and decode its dimensions without a full pixel
/// buffer.
pub fn validate(source: &AssetSource) -> Result<ImageMetadata> {
    let bytes = resolve(source)?;
    decode_metadata(&bytes).map_err(|message| XcError::SourceResolution {
        source_key: source.key(),
        message,
    })
}

/// Resolve an image definition's source and cross-check the decoded
/// dimensions against the declared ones, when declared.
///
/// Declared dimensions are in points; a definition with a scale factor
/// expects pixel dimensions multiplied by that factor.
pub fn check_definition(def: &ImageDefinition) -> Result<ImageMetadata> {
    let source = def.source().ok_or_else(|| XcError::SourceResolution {
        source_key: String::new(),
        message: "no image source set".to_string(),
    })?;

    let metadata = validate(source)?;

    if let Some((width, height)) = def.declared_dimensions() {
        let factor = def.scale_value().map_or(1, |s| s.factor());
        let expected_width = width * factor;
        let expected_height = height * factor;
        if metadata.width != expected_width || metadata.height != expected_height {
            return Err(XcError::SourceResolution {
                source_key: source.key(),
                message: format!(
                    "image is {}x{}, definition declares {}x{}",
                    metadata.width, metadata.height, expected_width, expected_height
                ),
            });
        }
    }

    Ok(metadata)
}

fn fetch(url: &str) -> std::result::Result<Vec<u8>, String> {
    let response = reqwest::blocking::get(url)
        .map_err(|e| format!("request failed: {}", e))?
        .error_for_status()
        .map_err(|e| format!("request failed: {}", e))?;

    let bytes = response
        .bytes()
        .map_err(|e| format!("failed to read response body: {}", e))?;

    Ok(bytes.to_vec())
}

fn decode_metadata(bytes: &[u8]) -> std::result::Result<ImageMetadata, String> {
    let reader = image::ImageReader::new(Cursor::new(bytes))
        .with_guessed_format()
        .map_err(|e| format!("failed to sniff image format: {}", e))?;

    let (width, height) = reader
        .into_dimensions()
        .map_err(|e| format!("failed to decode image: {}", e))?;

    Ok(ImageMetadata { width, height })
}
