//! Theme and map-style resolution.
//!
//! Resolution runs in three steps, each pure:
//!
//! 1. Normalize the stored setting to a [`ConcreteTheme`], eliminating the
//!    dynamic `auto` / `nav-auto` variants through the day/night policy.
//! 2. Reduce the concrete theme to a [`Brightness`], substituting the OS
//!    preference for follow-system.
//! 3. Select the [`MapStyle`] from brightness, navigation state, and the
//!    outdoors flag.
//!
//! The concrete theme from step 1 goes to the UI theme controller; the
//! style from step 3 goes to the map renderer. Keeping the steps separate
//! (the original interleaved them) means the map style can never be
//! derived from a not-yet-normalized theme.

use crate::context::{Brightness, Position, ResolveContext};
use crate::setting::{ConcreteTheme, ThemeSetting};
use crate::style::MapStyle;

/// Day/night classification for the automatic theme.
///
/// Implementations must be deterministic for a fixed `(now, position)`
/// pair and return `None` when they cannot decide — the resolver then
/// falls back to the previously applied theme.
pub trait DayNightPolicy {
    fn classify(&self, now: i64, position: Option<Position>) -> Option<Brightness>;
}

/// The default day/night policy: the sun's elevation at the last known
/// position, using the conventional sunrise/sunset horizon.
///
/// With no position — or a stored position with out-of-range coordinates —
/// the policy reports "unknown" and the resolver keeps the previously
/// applied theme.
#[derive(Debug, Clone, Copy, Default)]
pub struct SolarDayNight;

impl DayNightPolicy for SolarDayNight {
    fn classify(&self, now: i64, position: Option<Position>) -> Option<Brightness> {
        let position = position?;
        match mapshade_daylight::is_daytime(now, position.lat, position.lon) {
            Ok(true) => Some(Brightness::Light),
            Ok(false) => Some(Brightness::Dark),
            // A corrupt stored position behaves like no position at all.
            Err(_) => None,
        }
    }
}

/// The outcome of one resolution: what the UI gets and what the map gets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resolution {
    /// Hand this to the UI theme controller.
    pub concrete: ConcreteTheme,
    /// Hand this to the map renderer.
    pub style: MapStyle,
}

/// Resolves a stored theme setting to a concrete theme and a map style.
///
/// Pure and total: every combination of valid inputs produces a defined
/// output, and identical inputs produce identical outputs. Safe to call
/// from any thread.
///
/// # Example
///
/// ```rust
/// use mapshade::{
///     resolve, Brightness, ConcreteTheme, MapStyle, NavigationMode, ResolveContext,
///     SolarDayNight, ThemeSetting,
/// };
///
/// let ctx = ResolveContext::new(NavigationMode::None, Brightness::Dark);
/// let resolution = resolve(ThemeSetting::FollowSystem, &ctx, &SolarDayNight);
/// assert_eq!(resolution.concrete, ConcreteTheme::FollowSystem);
/// assert_eq!(resolution.style, MapStyle::Dark);
/// ```
pub fn resolve(
    raw: ThemeSetting,
    ctx: &ResolveContext,
    policy: &dyn DayNightPolicy,
) -> Resolution {
    let concrete = normalize(raw, ctx, policy);
    let brightness = resolved_brightness(concrete, ctx.system_brightness);
    let style = MapStyle::select(brightness, ctx.nav.is_vehicle(), ctx.outdoors_layer);
    Resolution { concrete, style }
}

/// Step 1: eliminate the dynamic variants.
pub fn normalize(
    raw: ThemeSetting,
    ctx: &ResolveContext,
    policy: &dyn DayNightPolicy,
) -> ConcreteTheme {
    match raw {
        ThemeSetting::Light => ConcreteTheme::Light,
        ThemeSetting::Dark => ConcreteTheme::Dark,
        ThemeSetting::FollowSystem => ConcreteTheme::FollowSystem,
        ThemeSetting::Auto => auto_theme(ctx, policy),
        ThemeSetting::NavAuto => {
            if ctx.nav.is_vehicle() {
                auto_theme(ctx, policy)
            } else {
                // Outside vehicle navigation, nav-auto means the default
                // light theme.
                ConcreteTheme::Light
            }
        }
    }
}

/// Step 2: the brightness a concrete theme renders with.
pub fn resolved_brightness(concrete: ConcreteTheme, system: Brightness) -> Brightness {
    match concrete {
        ConcreteTheme::Light => Brightness::Light,
        ConcreteTheme::Dark => Brightness::Dark,
        ConcreteTheme::FollowSystem => system,
    }
}

fn auto_theme(ctx: &ResolveContext, policy: &dyn DayNightPolicy) -> ConcreteTheme {
    match policy.classify(ctx.now, ctx.position) {
        Some(Brightness::Light) => ConcreteTheme::Light,
        Some(Brightness::Dark) => ConcreteTheme::Dark,
        None => ctx.stored_theme,
    }
}
