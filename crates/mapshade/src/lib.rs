//! # Mapshade - Theme and Map Style Resolution
//!
//! `mapshade` resolves a user-facing display theme and a renderer map
//! style from a handful of raw inputs — the stored theme preference, the
//! current navigation mode, the OS day/night preference, and the outdoors
//! layer flag — and applies the result to a UI theme controller and a map
//! renderer.
//!
//! ## Core Concepts
//!
//! - [`ThemeSetting`]: the stored preference, including the dynamic
//!   `auto` and `nav-auto` settings
//! - [`ConcreteTheme`]: what normalization produces; never dynamic
//! - [`MapStyle`]: the renderer's visual variant, with vehicle and
//!   outdoors flavors
//! - [`resolve`]: the pure decision engine
//! - [`apply`]: the side-effecting application contract, honoring the
//!   renderer-active flag
//! - [`ThemeSwitcher`]: glue tying a [`ConfigStore`] and the appliers
//!   together
//!
//! ## Quick Start
//!
//! ```rust
//! use mapshade::{
//!     resolve, Brightness, ConcreteTheme, MapStyle, NavigationMode, ResolveContext,
//!     SolarDayNight, ThemeSetting,
//! };
//!
//! // The user follows the OS preference; the OS says night; no
//! // navigation, no outdoors layer.
//! let ctx = ResolveContext::new(NavigationMode::None, Brightness::Dark);
//! let resolution = resolve(ThemeSetting::FollowSystem, &ctx, &SolarDayNight);
//!
//! assert_eq!(resolution.concrete, ConcreteTheme::FollowSystem);
//! assert_eq!(resolution.style, MapStyle::Dark);
//! ```
//!
//! ## Style Precedence
//!
//! Map style selection is a fixed table over (brightness, vehicle,
//! outdoors): vehicle navigation always wins over the outdoors layer,
//! which wins over the plain style. See [`MapStyle::select`].
//!
//! ## Threading
//!
//! [`resolve`] is pure and callable from any thread. [`apply`] and
//! [`ThemeSwitcher`] must run on the thread that owns the UI and renderer
//! handles. The renderer-active flag crosses that boundary: whoever calls
//! [`apply`] is responsible for it being accurate at call time, or the
//! immediate/deferred branch picks the wrong path (a frozen UI or a stale
//! style).

pub mod apply;
pub mod config;
pub mod context;
mod error;
pub mod resolver;
pub mod setting;
pub mod style;
pub mod system;
mod switcher;

pub use apply::{apply, DisplayModeGuard, MapRenderer, UiThemeController};
pub use config::{ConfigStore, FileConfigStore, StoredPosition};
pub use context::{Brightness, NavigationMode, Position, ResolveContext};
pub use error::ConfigError;
pub use resolver::{normalize, resolve, resolved_brightness, DayNightPolicy, Resolution, SolarDayNight};
pub use setting::{ConcreteTheme, ThemeSetting};
pub use style::MapStyle;
pub use switcher::ThemeSwitcher;
pub use system::{detect_brightness, set_brightness_detector};
