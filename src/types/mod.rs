//! Dimension vocabulary and payload types.

pub mod appearance;
pub mod axis;
pub mod color;
pub mod color_space;
pub mod devices;
pub mod gamut;
pub mod source;

pub use appearance::{AppearancePair, AppearanceSelection, Contrast, Luminosity};
pub use axis::AxisSelection;
pub use color::{parse_hex, ColorValue, Components};
pub use color_space::{ColorSpace, ColorSpaceSelection};
pub use devices::{DeviceSelection, Idiom, Subtype};
pub use gamut::{Gamut, GamutSelection};
pub use source::{AssetSource, ImageMetadata, Scale};
