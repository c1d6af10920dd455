//! Color gamut axis.

use super::axis::AxisSelection;

/// A display color gamut.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gamut {
    Srgb,
    DisplayP3,
}

impl Gamut {
    /// The manifest string for this gamut (`display-gamut` values).
    pub fn as_str(self) -> &'static str {
        match self {
            Gamut::Srgb => "sRGB",
            Gamut::DisplayP3 => "display-P3",
        }
    }
}

/// The gamut axis of a definition (or an asset-level announcement).
///
/// A definition may claim both gamuts at once; the default matches any
/// gamut.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GamutSelection {
    selection: AxisSelection<Gamut>,
}

impl GamutSelection {
    /// Match any gamut.
    pub fn any(&mut self) -> &mut Self {
        self.selection.clear();
        self
    }

    /// Claim the sRGB gamut.
    pub fn srgb(&mut self) -> &mut Self {
        self.selection.select(Gamut::Srgb);
        self
    }

    /// Claim the Display P3 gamut.
    pub fn display_p3(&mut self) -> &mut Self {
        self.selection.select(Gamut::DisplayP3);
        self
    }

    /// Claim both gamuts at once.
    pub fn srgb_and_display_p3(&mut self) -> &mut Self {
        self.srgb().display_p3()
    }

    /// Whether this selection is the wildcard.
    pub fn is_any(&self) -> bool {
        self.selection.is_any()
    }

    /// Claimed gamuts in selection order; `None` for the wildcard.
    pub fn gamuts(&self) -> Option<&[Gamut]> {
        self.selection.values()
    }

    /// Whether two gamut selections claim a common gamut.
    pub fn overlaps(&self, other: &Self) -> bool {
        self.selection.intersects(&other.selection)
    }
}
