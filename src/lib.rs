//! xcassets - Asset catalog manifest generator
//!
//! A library for generating Xcode asset catalog `Contents.json`
//! descriptors (named colors and image sets) from fluent definitions,
//! with conflict detection across the idiom, gamut, color-space, and
//! appearance dimensions.
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
//!
//! let contents = brand.build().unwrap();
//! ```

pub mod builder;
pub mod error;
pub mod loader;
pub mod manifest;
pub mod types;
pub mod validation;

pub use builder::{color, image, ColorBuilder, ColorDefinition, ImageBuilder, ImageDefinition};
pub use error::{Result, XcError};
pub use manifest::{emit_colors, emit_images, ManifestOptions};
pub use types::{
    AppearanceSelection, AssetSource, ColorSpace, ColorValue, DeviceSelection, Gamut,
    GamutSelection, Idiom, ImageMetadata, Scale, Subtype,
};
pub use validation::{detect_conflicts, validate_color_set, validate_image_set, Conflict};
