//! Map style selection.

use std::fmt;

use crate::context::Brightness;

/// The visual variant applied by the map renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MapStyle {
    Clear,
    Dark,
    OutdoorsClear,
    OutdoorsDark,
    VehicleClear,
    VehicleDark,
}

impl MapStyle {
    /// Selects the style for a resolved brightness, navigation state, and
    /// outdoors flag.
    ///
    /// Precedence is fixed: vehicle navigation beats the outdoors layer,
    /// which beats the plain style. Navigation styling is a safety
    /// feature; it must win even when the outdoors layer is on.
    pub fn select(brightness: Brightness, vehicle: bool, outdoors: bool) -> Self {
        match (brightness, vehicle, outdoors) {
            (Brightness::Dark, true, _) => Self::VehicleDark,
            (Brightness::Dark, false, true) => Self::OutdoorsDark,
            (Brightness::Dark, false, false) => Self::Dark,
            (Brightness::Light, true, _) => Self::VehicleClear,
            (Brightness::Light, false, true) => Self::OutdoorsClear,
            (Brightness::Light, false, false) => Self::Clear,
        }
    }

    /// Whether this style uses the dark palette.
    pub fn is_dark(&self) -> bool {
        matches!(self, Self::Dark | Self::OutdoorsDark | Self::VehicleDark)
    }
}

impl fmt::Display for MapStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Clear => "clear",
            Self::Dark => "dark",
            Self::OutdoorsClear => "outdoors-clear",
            Self::OutdoorsDark => "outdoors-dark",
            Self::VehicleClear => "vehicle-clear",
            Self::VehicleDark => "vehicle-dark",
        };
        write!(f, "{}", name)
    }
}
