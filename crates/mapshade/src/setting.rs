//! Theme setting types.
//!
//! Two enums model the normalization invariant in the type system:
//!
//! - [`ThemeSetting`] is what the user stores: concrete values plus the
//!   dynamic `auto` / `nav-auto` settings that depend on time, position,
//!   or navigation state.
//! - [`ConcreteTheme`] is what normalization produces and what the UI
//!   theme controller accepts. The dynamic variants do not exist here, so
//!   "normalization is total" is checked by the compiler rather than by a
//!   runtime assertion.
//!
//! String forms match the stored configuration keys (`light`, `dark`,
//! `follow-system`, `auto`, `nav-auto`) and round-trip through both serde
//! and `FromStr`/`Display`.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// The user's stored theme preference, possibly dynamic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ThemeSetting {
    /// Always light.
    Light,
    /// Always dark.
    Dark,
    /// Track the OS light/dark preference.
    #[default]
    FollowSystem,
    /// Light or dark depending on local day/night at the last known
    /// position.
    Auto,
    /// Like [`Auto`](Self::Auto), but only while vehicle navigation is
    /// active; light otherwise.
    NavAuto,
}

impl ThemeSetting {
    /// Whether this setting needs per-call resolution (time, position, or
    /// navigation state) before it can be applied.
    pub fn is_dynamic(&self) -> bool {
        matches!(self, Self::Auto | Self::NavAuto)
    }

    /// The concrete equivalent, when this setting is already concrete.
    pub fn as_concrete(&self) -> Option<ConcreteTheme> {
        match self {
            Self::Light => Some(ConcreteTheme::Light),
            Self::Dark => Some(ConcreteTheme::Dark),
            Self::FollowSystem => Some(ConcreteTheme::FollowSystem),
            Self::Auto | Self::NavAuto => None,
        }
    }
}

impl fmt::Display for ThemeSetting {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Light => "light",
            Self::Dark => "dark",
            Self::FollowSystem => "follow-system",
            Self::Auto => "auto",
            Self::NavAuto => "nav-auto",
        };
        write!(f, "{}", name)
    }
}

impl FromStr for ThemeSetting {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            "follow-system" => Ok(Self::FollowSystem),
            "auto" => Ok(Self::Auto),
            "nav-auto" => Ok(Self::NavAuto),
            other => Err(ConfigError::UnknownSetting(other.to_string())),
        }
    }
}

/// A final, non-dynamic theme value, ready for the OS theming API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ConcreteTheme {
    #[default]
    Light,
    Dark,
    /// Defer to the OS preference. Concrete from the resolver's point of
    /// view: the OS theming API accepts it directly.
    FollowSystem,
}

impl fmt::Display for ConcreteTheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ThemeSetting::from(*self).fmt(f)
    }
}

impl From<ConcreteTheme> for ThemeSetting {
    fn from(theme: ConcreteTheme) -> Self {
        match theme {
            ConcreteTheme::Light => ThemeSetting::Light,
            ConcreteTheme::Dark => ThemeSetting::Dark,
            ConcreteTheme::FollowSystem => ThemeSetting::FollowSystem,
        }
    }
}
