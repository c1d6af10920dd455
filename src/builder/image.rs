//! Named image sets.
//!
//! Image sets follow the same lifecycle as color sets: definitions are
//! created with platform defaults, configured in a closure, and frozen
//! afterwards. The payload is an [`AssetSource`] plus an optional scale
//! factor and expected pixel dimensions; byte resolution and decoding
//! live in [`crate::loader`].

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::error::{Result, XcError};
use crate::manifest::{self, ManifestOptions};
use crate::types::{AppearanceSelection, AssetSource, DeviceSelection, GamutSelection, Scale};
use crate::validation;

/// One dimension-scoped variant of a named image.
#[derive(Debug, Clone)]
pub struct ImageDefinition {
    /// Device idiom axis.
    pub devices: DeviceSelection,
    /// Gamut axis.
    pub gamut: GamutSelection,
    /// Appearance axis.
    pub appearance: AppearanceSelection,
    scale: Option<Scale>,
    source: Option<AssetSource>,
    width: Option<u32>,
    height: Option<u32>,
}

impl ImageDefinition {
    pub(crate) fn new() -> Self {
        Self {
            devices: DeviceSelection::default(),
            gamut: GamutSelection::default(),
            appearance: AppearanceSelection::default(),
            scale: None,
            source: None,
            width: None,
            height: None,
        }
    }

    /// Source the image from a local file.
    pub fn file(&mut self, path: impl Into<PathBuf>) -> &mut Self {
        self.source = Some(AssetSource::File(path.into()));
        self
    }

    /// Source the image from a URL, fetched at resolve time.
    pub fn url(&mut self, url: impl Into<String>) -> &mut Self {
        self.source = Some(AssetSource::Url(url.into()));
        self
    }

    /// Source the image from in-memory bytes under an explicit name.
    pub fn data(&mut self, name: impl Into<String>, bytes: Vec<u8>) -> &mut Self {
        self.source = Some(AssetSource::Data {
            name: name.into(),
            bytes,
        });
        self
    }

    /// Set the rendering scale factor. Unset matches any scale.
    pub fn scale(&mut self, scale: Scale) -> &mut Self {
        self.scale = Some(scale);
        self
    }

    /// Declare the expected dimensions in points; checked against the
    /// decoded image by [`crate::loader::check_definition`], which
    /// multiplies by the scale factor when one is set.
    pub fn dimensions(&mut self, width: u32, height: u32) -> &mut Self {
        self.width = Some(width);
        self.height = Some(height);
        self
    }

    /// The configured source, if any.
    pub fn source(&self) -> Option<&AssetSource> {
        self.source.as_ref()
    }

    /// The configured scale, if any.
    pub fn scale_value(&self) -> Option<Scale> {
        self.scale
    }

    /// The declared pixel dimensions, if any.
    pub fn declared_dimensions(&self) -> Option<(u32, u32)> {
        match (self.width, self.height) {
            (Some(w), Some(h)) => Some((w, h)),
            _ => None,
        }
    }

    /// Whether two definitions claim an overlapping coordinate.
    ///
    /// Conjunction over devices, gamut, scale, and appearance; an unset
    /// scale matches every scale.
    pub fn overlaps(&self, other: &Self) -> bool {
        let scales_overlap = match (self.scale, other.scale) {
            (Some(a), Some(b)) => a == b,
            _ => true,
        };

        self.devices.overlaps(&other.devices)
            && self.gamut.overlaps(&other.gamut)
            && scales_overlap
            && self.appearance.overlaps(&other.appearance)
    }
}

/// Builder for a named image set.
pub struct ImageBuilder {
    name: String,
    /// Asset-level gamut announcement.
    pub gamut: GamutSelection,
    defs: Vec<ImageDefinition>,
}

impl ImageBuilder {
    /// Create an empty image set. The name is checked at validation
    /// time, not here.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            gamut: GamutSelection::default(),
            defs: Vec::new(),
        }
    }

    /// Append a definition and configure it. The closure is the only
    /// mutation window; definition order is preserved into the
    /// manifest.
    pub fn image(&mut self, f: impl FnOnce(&mut ImageDefinition)) -> &mut Self {
        let mut def = ImageDefinition::new();
        f(&mut def);
        self.defs.push(def);
        self
    }

    /// The asset name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The definitions, in insertion order.
    pub fn definitions(&self) -> &[ImageDefinition] {
        &self.defs
    }

    /// Validate the image set.
    pub fn validate(&self) -> Result<()> {
        validation::validate_image_set(self)
    }

    /// Validate and serialize the `Contents.json` descriptor with the
    /// default manifest options.
    pub fn build(&self) -> Result<String> {
        self.build_with(&ManifestOptions::default())
    }

    /// Validate and serialize with explicit manifest options.
    pub fn build_with(&self, options: &ManifestOptions) -> Result<String> {
        self.validate()?;
        manifest::emit_images(self, options)
    }

    /// Validate, serialize, and write the descriptor to `w`.
    pub fn write(&self, mut w: impl io::Write) -> Result<()> {
        let contents = self.build()?;
        w.write_all(contents.as_bytes()).map_err(|e| XcError::Build {
            message: format!("Failed to write manifest: {}", e),
            help: None,
        })
    }

    /// Validate, serialize, and save `<name>.imageset/Contents.json`
    /// under `dir`. Returns the path of the written descriptor.
    pub fn save_to(&self, dir: impl AsRef<Path>) -> Result<PathBuf> {
        let contents = self.build()?;

        let set_dir = dir.as_ref().join(format!("{}.imageset", self.name));
        fs::create_dir_all(&set_dir).map_err(|e| XcError::Io {
            path: set_dir.clone(),
            message: format!("Failed to create asset directory: {}", e),
        })?;

        let path = set_dir.join("Contents.json");
        fs::write(&path, contents).map_err(|e| XcError::Io {
            path: path.clone(),
            message: format!("Failed to write manifest: {}", e),
        })?;

        Ok(path)
    }
}

/// Create a named image set and configure it.
pub fn image(name: impl Into<String>, f: impl FnOnce(&mut ImageBuilder)) -> ImageBuilder {
    let mut builder = ImageBuilder::new(name);
    f(&mut builder);
    builder
}
