//! Device idiom axis.
//!
//! An idiom names the device family a definition targets. Subtypes
//! qualify an idiom further; selecting Catalyst sets both the iPad idiom
//! and the `mac-catalyst` subtype in one step.

use super::axis::AxisSelection;

/// Target device family.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Idiom {
    Universal,
    IPhone,
    IPad,
    Mac,
    Car,
    Watch,
    Tv,
}

impl Idiom {
    /// The manifest string for this idiom.
    pub fn as_str(self) -> &'static str {
        match self {
            Idiom::Universal => "universal",
            Idiom::IPhone => "iphone",
            Idiom::IPad => "ipad",
            Idiom::Mac => "mac",
            Idiom::Car => "car",
            Idiom::Watch => "watch",
            Idiom::Tv => "tv",
        }
    }
}

/// Secondary qualifier on an idiom.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Subtype {
    MacCatalyst,
}

impl Subtype {
    /// The manifest string for this subtype.
    pub fn as_str(self) -> &'static str {
        match self {
            Subtype::MacCatalyst => "mac-catalyst",
        }
    }
}

/// The idiom axis of a definition: a set of device families plus
/// subtype qualifiers.
///
/// The default matches every device (and emits as `universal`).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeviceSelection {
    idioms: AxisSelection<Idiom>,
    subtypes: Vec<Subtype>,
}

impl DeviceSelection {
    /// Reset to the match-everything state.
    pub fn any(&mut self) -> &mut Self {
        self.idioms.clear();
        self.subtypes.clear();
        self
    }

    /// Target all devices with a single entry.
    pub fn universal(&mut self) -> &mut Self {
        self.idioms.select(Idiom::Universal);
        self
    }

    /// Target iPhone.
    pub fn iphone(&mut self) -> &mut Self {
        self.idioms.select(Idiom::IPhone);
        self
    }

    /// Target iPad.
    pub fn ipad(&mut self) -> &mut Self {
        self.idioms.select(Idiom::IPad);
        self
    }

    /// Target Mac.
    pub fn mac(&mut self) -> &mut Self {
        self.idioms.select(Idiom::Mac);
        self
    }

    /// Target Mac Catalyst.
    ///
    /// Sets both the iPad idiom and the `mac-catalyst` subtype in one
    /// step; calling it twice is a no-op.
    pub fn catalyst(&mut self) -> &mut Self {
        self.idioms.select(Idiom::IPad);
        if !self.subtypes.contains(&Subtype::MacCatalyst) {
            self.subtypes.push(Subtype::MacCatalyst);
        }
        self
    }

    /// Target CarPlay.
    pub fn car_play(&mut self) -> &mut Self {
        self.idioms.select(Idiom::Car);
        self
    }

    /// Target Apple Watch.
    pub fn apple_watch(&mut self) -> &mut Self {
        self.idioms.select(Idiom::Watch);
        self
    }

    /// Target Apple TV.
    pub fn apple_tv(&mut self) -> &mut Self {
        self.idioms.select(Idiom::Tv);
        self
    }

    /// Selected idioms, in selection order. Unconstrained selections
    /// resolve to a single `universal` entry.
    pub fn idioms(&self) -> Vec<Idiom> {
        match self.idioms.values() {
            Some(values) => values.to_vec(),
            None => vec![Idiom::Universal],
        }
    }

    /// Selected subtype qualifiers, in selection order.
    pub fn subtypes(&self) -> &[Subtype] {
        &self.subtypes
    }

    /// Whether the idiom set matches every device family.
    fn matches_all_idioms(&self) -> bool {
        self.idioms.is_any() || self.idioms.contains(Idiom::Universal)
    }

    /// Whether two device selections can match the same device at
    /// render time.
    ///
    /// The idiom sets must intersect (`universal` and the default state
    /// count as the full set), and the subtype sets must intersect,
    /// where an empty subtype set matches any subtype.
    pub fn overlaps(&self, other: &Self) -> bool {
        let idioms_overlap = self.matches_all_idioms()
            || other.matches_all_idioms()
            || self.idioms.intersects(&other.idioms);

        let subtypes_overlap = self.subtypes.is_empty()
            || other.subtypes.is_empty()
            || self.subtypes.iter().any(|s| other.subtypes.contains(s));

        idioms_overlap && subtypes_overlap
    }
}
