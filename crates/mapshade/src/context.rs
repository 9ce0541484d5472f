//! Per-call resolution inputs.
//!
//! Everything the resolver looks at arrives in a [`ResolveContext`] built
//! by the caller for each resolution. The original design kept the
//! renderer-active flag and friends in ambient singleton state; passing
//! them explicitly keeps resolution pure and makes every precondition
//! testable.

use crate::setting::ConcreteTheme;

/// Whether turn-by-turn navigation is running, and in which profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NavigationMode {
    /// No active navigation.
    #[default]
    None,
    Pedestrian,
    Vehicle,
    /// Any other routing profile (bicycle, transit, ...). Treated like
    /// pedestrian for theming purposes.
    Other,
}

impl NavigationMode {
    /// Vehicle navigation is the only mode that changes map styling.
    pub fn is_vehicle(&self) -> bool {
        matches!(self, Self::Vehicle)
    }
}

/// A light-or-dark value: either the OS day/night preference or the
/// brightness a concrete theme resolves to.
///
/// Deliberately two-variant — map style selection cannot receive anything
/// outside this domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Brightness {
    Light,
    Dark,
}

/// A geographic position, degrees north and east.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Position {
    pub lat: f64,
    pub lon: f64,
}

impl Position {
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }
}

/// Inputs for a single resolution call.
///
/// Construct with [`ResolveContext::new`] and adjust with the builder
/// methods, or fill the fields directly.
///
/// # Example
///
/// ```rust
/// use mapshade::{Brightness, NavigationMode, Position, ResolveContext};
///
/// let ctx = ResolveContext::new(NavigationMode::Vehicle, Brightness::Dark)
///     .with_outdoors_layer(true)
///     .with_position(Position::new(52.52, 13.40))
///     .at(1_718_971_200);
/// assert!(ctx.nav.is_vehicle());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ResolveContext {
    /// Current navigation mode.
    pub nav: NavigationMode,
    /// The OS day/night preference, substituted when the concrete theme is
    /// follow-system.
    pub system_brightness: Brightness,
    /// Whether the outdoors layer is enabled.
    pub outdoors_layer: bool,
    /// Wall-clock time as Unix seconds; consumed by the day/night policy.
    pub now: i64,
    /// Last known position, if any; consumed by the day/night policy.
    pub position: Option<Position>,
    /// The previously applied concrete theme — the fallback when the
    /// day/night policy cannot decide.
    pub stored_theme: ConcreteTheme,
}

impl ResolveContext {
    /// Creates a context with no outdoors layer, no position, time zero,
    /// and a light stored theme.
    pub fn new(nav: NavigationMode, system_brightness: Brightness) -> Self {
        Self {
            nav,
            system_brightness,
            outdoors_layer: false,
            now: 0,
            position: None,
            stored_theme: ConcreteTheme::Light,
        }
    }

    /// Sets the outdoors-layer flag.
    pub fn with_outdoors_layer(mut self, enabled: bool) -> Self {
        self.outdoors_layer = enabled;
        self
    }

    /// Sets the last known position.
    pub fn with_position(mut self, position: Position) -> Self {
        self.position = Some(position);
        self
    }

    /// Sets the wall-clock time (Unix seconds).
    pub fn at(mut self, unix_ts: i64) -> Self {
        self.now = unix_ts;
        self
    }

    /// Sets the previously applied concrete theme.
    pub fn with_stored_theme(mut self, theme: ConcreteTheme) -> Self {
        self.stored_theme = theme;
        self
    }
}
