//! Fluent builders for named color and image sets.

pub mod color;
pub mod image;

pub use color::{color, ColorBuilder, ColorDefinition};
pub use image::{image, ImageBuilder, ImageDefinition};
