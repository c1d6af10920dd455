//! Appearance axis: rendering-mode traits and values.
//!
//! An appearance selection constrains the rendering modes a definition
//! applies to, per trait: luminosity (light/dark) and contrast (high).
//! An unconstrained trait matches all of its values, so the default
//! selection is the universal "any appearance".

use super::axis::AxisSelection;

/// Luminosity trait values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Luminosity {
    Light,
    Dark,
}

impl Luminosity {
    pub fn as_str(self) -> &'static str {
        match self {
            Luminosity::Light => "light",
            Luminosity::Dark => "dark",
        }
    }
}

/// Contrast trait values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Contrast {
    High,
}

impl Contrast {
    pub fn as_str(self) -> &'static str {
        match self {
            Contrast::High => "high",
        }
    }
}

/// One trait/value pair as it appears in the manifest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppearancePair {
    /// Trait name (`luminosity` or `contrast`).
    pub appearance: &'static str,
    /// Trait value (`light`, `dark`, `high`).
    pub value: &'static str,
}

/// The appearance axis of a definition.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AppearanceSelection {
    luminosity: AxisSelection<Luminosity>,
    contrast: AxisSelection<Contrast>,
}

impl AppearanceSelection {
    /// Match any appearance (clear all trait constraints).
    pub fn any(&mut self) -> &mut Self {
        self.luminosity.clear();
        self.contrast.clear();
        self
    }

    /// Constrain to the light luminosity mode.
    pub fn light(&mut self) -> &mut Self {
        self.luminosity.select(Luminosity::Light);
        self
    }

    /// Constrain to the dark luminosity mode.
    pub fn dark(&mut self) -> &mut Self {
        self.luminosity.select(Luminosity::Dark);
        self
    }

    /// Constrain to the high-contrast mode.
    pub fn high_contrast(&mut self) -> &mut Self {
        self.contrast.select(Contrast::High);
        self
    }

    /// Whether no trait is constrained.
    pub fn is_any(&self) -> bool {
        self.luminosity.is_any() && self.contrast.is_any()
    }

    /// Whether two appearance selections can match the same rendering
    /// mode.
    ///
    /// Per trait, an unconstrained side matches every value; constrained
    /// sides must share a value. The traits combine conjunctively.
    pub fn overlaps(&self, other: &Self) -> bool {
        self.luminosity.intersects(&other.luminosity)
            && self.contrast.intersects(&other.contrast)
    }

    /// Expand the selection into concrete trait/value combinations for
    /// emission, in selection order.
    ///
    /// Each combination is the ordered pair list for one manifest entry;
    /// a fully unconstrained selection yields a single empty combination.
    pub fn combinations(&self) -> Vec<Vec<AppearancePair>> {
        let luminosities: Vec<Option<Luminosity>> = match self.luminosity.values() {
            Some(values) => values.iter().copied().map(Some).collect(),
            None => vec![None],
        };
        let contrasts: Vec<Option<Contrast>> = match self.contrast.values() {
            Some(values) => values.iter().copied().map(Some).collect(),
            None => vec![None],
        };

        let mut combos = Vec::with_capacity(luminosities.len() * contrasts.len());
        for lum in &luminosities {
            for con in &contrasts {
                let mut pairs = Vec::new();
                if let Some(l) = lum {
                    pairs.push(AppearancePair {
                        appearance: "luminosity",
                        value: l.as_str(),
                    });
                }
                if let Some(c) = con {
                    pairs.push(AppearancePair {
                        appearance: "contrast",
                        value: c.as_str(),
                    });
                }
                combos.push(pairs);
            }
        }
        combos
    }
}
