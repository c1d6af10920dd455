//! Color space axis.
//!
//! The color space decides which payload components are legal: RGB
//! channels for sRGB, a single white level for grayscale. Unlike the
//! other axes it has no wildcard; two definitions overlap on this axis
//! only when their spaces are identical.

/// Color space of a color payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorSpace {
    Srgb,
    Grayscale,
}

impl ColorSpace {
    /// The manifest string for this color space.
    pub fn as_str(self) -> &'static str {
        match self {
            ColorSpace::Srgb => "srgb",
            ColorSpace::Grayscale => "gray-gamma-22",
        }
    }
}

/// The color-space axis of a color definition. Defaults to sRGB.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorSpaceSelection {
    space: ColorSpace,
}

impl Default for ColorSpaceSelection {
    fn default() -> Self {
        Self {
            space: ColorSpace::Srgb,
        }
    }
}

impl ColorSpaceSelection {
    /// Use the sRGB color space (red/green/blue components).
    pub fn srgb(&mut self) -> &mut Self {
        self.space = ColorSpace::Srgb;
        self
    }

    /// Use the grayscale color space (a single white component).
    pub fn grayscale(&mut self) -> &mut Self {
        self.space = ColorSpace::Grayscale;
        self
    }

    /// The selected space.
    pub fn space(&self) -> ColorSpace {
        self.space
    }

    /// Color spaces only overlap when identical.
    pub fn overlaps(&self, other: &Self) -> bool {
        self.space == other.space
    }
}
