//! Named color sets.
//!
//! A color set is a name plus an ordered list of definitions, each
//! scoped to a coordinate in the idiom/gamut/color-space/appearance
//! dimension space. Definitions are created with platform defaults and
//! configured inside the closure passed to [`ColorBuilder::color`];
//! once that call returns they are immutable.
//!
//! # Example
//!
//! ```
//! let brand = xcassets::color("Brand", |b| {
//!     b.color(|d| {
//!         d.appearance.light();
//!         d.hex("#FFFFFF");
//!     });
//!     b.color(|d| {
//!         d.appearance.dark();
//!         d.hex("#000000");
//!     });
//! });
//! let contents = brand.build().unwrap();
//! assert!(contents.contains("\"colors\""));
//! ```

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::error::{Result, XcError};
use crate::manifest::{self, ManifestOptions};
use crate::types::{
    AppearanceSelection, ColorSpaceSelection, ColorValue, DeviceSelection, GamutSelection,
};
use crate::validation;

/// One dimension-scoped variant of a named color.
///
/// Created only through [`ColorBuilder::color`], pre-populated with the
/// platform defaults: universal idiom, any gamut, sRGB color space, any
/// appearance, alpha 1.0.
#[derive(Debug, Clone)]
pub struct ColorDefinition {
    /// Device idiom axis.
    pub devices: DeviceSelection,
    /// Gamut axis.
    pub gamut: GamutSelection,
    /// Color space axis.
    pub color_space: ColorSpaceSelection,
    /// Appearance axis.
    pub appearance: AppearanceSelection,
    value: Option<ColorValue>,
    alpha: f64,
}

impl ColorDefinition {
    pub(crate) fn new() -> Self {
        Self {
            devices: DeviceSelection::default(),
            gamut: GamutSelection::default(),
            color_space: ColorSpaceSelection::default(),
            appearance: AppearanceSelection::default(),
            value: None,
            alpha: 1.0,
        }
    }

    /// Set the color from a hex string (`#RGB` or `#RRGGBB`).
    ///
    /// The string is kept as written; malformed input surfaces from
    /// validation, not from this call.
    pub fn hex(&mut self, value: impl Into<String>) -> &mut Self {
        self.value = Some(ColorValue::Hex(value.into()));
        self
    }

    /// Set the color from 8-bit RGB channels.
    pub fn rgb(&mut self, red: u8, green: u8, blue: u8) -> &mut Self {
        self.value = Some(ColorValue::Rgb { red, green, blue });
        self
    }

    /// Set the color from floating-point RGB channels in `[0, 1]`.
    pub fn rgb_float(&mut self, red: f64, green: f64, blue: f64) -> &mut Self {
        self.value = Some(ColorValue::RgbFloat { red, green, blue });
        self
    }

    /// Set a grayscale white level in `[0, 1]`.
    pub fn white(&mut self, white: f64) -> &mut Self {
        self.value = Some(ColorValue::White(white));
        self
    }

    /// Set the alpha channel in `[0, 1]`. Orthogonal to the channel
    /// representation; defaults to 1.0.
    pub fn alpha(&mut self, alpha: f64) -> &mut Self {
        self.alpha = alpha;
        self
    }

    /// The configured channel representation, if any.
    pub fn value(&self) -> Option<&ColorValue> {
        self.value.as_ref()
    }

    /// The configured alpha.
    pub fn alpha_value(&self) -> f64 {
        self.alpha
    }

    /// Whether two definitions claim an overlapping coordinate in the
    /// full dimension space.
    ///
    /// This is a conjunction over all four axes: a pair that differs on
    /// even one axis is unambiguous.
    pub fn overlaps(&self, other: &Self) -> bool {
        self.devices.overlaps(&other.devices)
            && self.gamut.overlaps(&other.gamut)
            && self.color_space.overlaps(&other.color_space)
            && self.appearance.overlaps(&other.appearance)
    }
}

/// Builder for a named color set.
pub struct ColorBuilder {
    name: String,
    /// Asset-level gamut announcement, independent of any definition's
    /// own gamut claim.
    pub gamut: GamutSelection,
    defs: Vec<ColorDefinition>,
}

impl ColorBuilder {
    /// Create an empty color set. The name is checked at validation
    /// time, not here.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            gamut: GamutSelection::default(),
            defs: Vec::new(),
        }
    }

    /// Append a definition and configure it.
    ///
    /// The definition starts from the platform defaults (universal
    /// idiom, any gamut, sRGB color space, any appearance) and the
    /// closure is its only mutation window. Definition order is
    /// preserved into the manifest.
    pub fn color(&mut self, f: impl FnOnce(&mut ColorDefinition)) -> &mut Self {
        let mut def = ColorDefinition::new();
        f(&mut def);
        self.defs.push(def);
        self
    }

    /// The asset name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The definitions, in insertion order.
    pub fn definitions(&self) -> &[ColorDefinition] {
        &self.defs
    }

    /// Validate the color set: structural checks per definition, then
    /// exhaustive pairwise conflict detection.
    pub fn validate(&self) -> Result<()> {
        validation::validate_color_set(self)
    }

    /// Validate and serialize the `Contents.json` descriptor with the
    /// default manifest options.
    pub fn build(&self) -> Result<String> {
        self.build_with(&ManifestOptions::default())
    }

    /// Validate and serialize with explicit manifest options.
    pub fn build_with(&self, options: &ManifestOptions) -> Result<String> {
        self.validate()?;
        manifest::emit_colors(self, options)
    }

    /// Validate, serialize, and write the descriptor to `w`.
    pub fn write(&self, mut w: impl io::Write) -> Result<()> {
        let contents = self.build()?;
        w.write_all(contents.as_bytes()).map_err(|e| XcError::Build {
            message: format!("Failed to write manifest: {}", e),
            help: None,
        })
    }

    /// Validate, serialize, and save `<name>.colorset/Contents.json`
    /// under `dir`. Returns the path of the written descriptor.
    pub fn save_to(&self, dir: impl AsRef<Path>) -> Result<PathBuf> {
        let contents = self.build()?;

        let set_dir = dir.as_ref().join(format!("{}.colorset", self.name));
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

/// Create a named color set and configure it.
///
/// Mirrors the fluent entry point: defaults first, client overrides
/// inside the closure, then the builder is handed back for validation
/// and emission.
pub fn color(name: impl Into<String>, f: impl FnOnce(&mut ColorBuilder)) -> ColorBuilder {
    let mut builder = ColorBuilder::new(name);
    f(&mut builder);
    builder
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{ColorSpace, Idiom};

    #[test]
    fn test_definition_defaults() {
        let mut builder = ColorBuilder::new("Brand");
        builder.color(|_| {});

        let def = &builder.definitions()[0];
        assert_eq!(def.devices.idioms(), vec![Idiom::Universal]);
        assert!(def.gamut.is_any());
        assert_eq!(def.color_space.space(), ColorSpace::Srgb);
        assert!(def.appearance.is_any());
        assert_eq!(def.value(), None);
        assert_eq!(def.alpha_value(), 1.0);
    }

    #[test]
    fn test_definitions_keep_insertion_order() {
        let builder = color("Brand", |b| {
            b.color(|d| {
                d.hex("#111111");
            });
            b.color(|d| {
                d.hex("#222222");
            });
            b.color(|d| {
                d.hex("#333333");
            });
        });

        let hexes: Vec<_> = builder
            .definitions()
            .iter()
            .map(|d| d.value().cloned())
            .collect();
        assert_eq!(
            hexes,
            vec![
                Some(ColorValue::Hex("#111111".to_string())),
                Some(ColorValue::Hex("#222222".to_string())),
                Some(ColorValue::Hex("#333333".to_string())),
            ]
        );
    }

    #[test]
    fn test_last_channel_representation_wins() {
        let mut builder = ColorBuilder::new("Brand");
        builder.color(|d| {
            d.hex("#262D44");
            d.white(1.0);
            d.rgb(146, 144, 0);
            d.rgb_float(0.682, 0.682, 0.682);
            d.alpha(0.4);
        });

        let def = &builder.definitions()[0];
        assert_eq!(
            def.value(),
            Some(&ColorValue::RgbFloat {
                red: 0.682,
                green: 0.682,
                blue: 0.682
            })
        );
        assert_eq!(def.alpha_value(), 0.4);
    }

    #[test]
    fn test_overlap_differs_on_one_axis() {
        let builder = color("Brand", |b| {
            b.color(|d| {
                d.appearance.light();
                d.hex("#FFFFFF");
            });
            b.color(|d| {
                d.appearance.dark();
                d.hex("#000000");
            });
        });

        let defs = builder.definitions();
        assert!(!defs[0].overlaps(&defs[1]));
    }

    #[test]
    fn test_overlap_requires_all_axes() {
        // Same appearance but different color spaces: no conflict.
        let builder = color("Brand", |b| {
            b.color(|d| {
                d.hex("#FFFFFF");
            });
            b.color(|d| {
                d.color_space.grayscale();
                d.white(1.0);
            });
        });

        let defs = builder.definitions();
        assert!(!defs[0].overlaps(&defs[1]));
    }

    #[test]
    fn test_save_to_writes_descriptor() {
        let builder = color("Brand", |b| {
            b.color(|d| {
                d.hex("#FFFFFF");
            });
        });

        let dir = tempfile::tempdir().unwrap();
        let path = builder.save_to(dir.path()).unwrap();

        assert!(path.ends_with("Brand.colorset/Contents.json"));
        let written = std::fs::read_to_string(&path).unwrap();
        assert_eq!(written, builder.build().unwrap());
    }

    #[test]
    fn test_save_to_io_failure_is_io_error() {
        let builder = color("Brand", |b| {
            b.color(|d| {
                d.hex("#FFFFFF");
            });
        });

        // A plain file where the catalog directory should go.
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("catalog");
        std::fs::write(&blocker, b"").unwrap();

        let err = builder.save_to(&blocker).unwrap_err();
        assert!(matches!(err, XcError::Io { .. }));
    }

    #[test]
    fn test_fully_wildcarded_pair_overlaps() {
        let builder = color("Brand", |b| {
            b.color(|d| {
                d.hex("#FFFFFF");
            });
            b.color(|d| {
                d.hex("#000000");
            });
        });

        let defs = builder.definitions();
        assert!(defs[0].overlaps(&defs[1]));
    }
}
