//! The theme switcher: glue around the pure resolver.
//!
//! [`ThemeSwitcher`] owns the collaborators and wires one `restart` call
//! together: read the stored preference and position, detect the OS
//! brightness, resolve, apply. All decision logic lives in
//! [`resolve`](crate::resolve) and [`apply`](crate::apply); this type only
//! gathers inputs.

use std::time::{SystemTime, UNIX_EPOCH};

use crate::apply::{apply, DisplayModeGuard, MapRenderer, UiThemeController};
use crate::config::ConfigStore;
use crate::context::{NavigationMode, ResolveContext};
use crate::resolver::{resolve, DayNightPolicy, Resolution, SolarDayNight};
use crate::system::detect_brightness;

/// Orchestrates theme switching against a set of collaborators.
///
/// Must live on the thread that owns the UI and renderer handles; see the
/// crate docs for the threading contract.
pub struct ThemeSwitcher<C, U, R, G> {
    config: C,
    ui: U,
    renderer: R,
    guard: G,
    policy: Box<dyn DayNightPolicy>,
}

impl<C, U, R, G> ThemeSwitcher<C, U, R, G>
where
    C: ConfigStore,
    U: UiThemeController,
    R: MapRenderer,
    G: DisplayModeGuard,
{
    /// Creates a switcher with the default solar day/night policy.
    pub fn new(config: C, ui: U, renderer: R, guard: G) -> Self {
        Self {
            config,
            ui,
            renderer,
            guard,
            policy: Box::new(SolarDayNight),
        }
    }

    /// Replaces the day/night policy, returning `self` for chaining.
    pub fn with_policy(mut self, policy: impl DayNightPolicy + 'static) -> Self {
        self.policy = Box::new(policy);
        self
    }

    /// Re-resolves the theme and applies the result.
    ///
    /// `renderer_active` must be `true` only if the map is rendered and
    /// visible at this moment; passing `true` while the renderer is
    /// inactive freezes the caller in the synchronous style path.
    pub fn restart(
        &mut self,
        renderer_active: bool,
        nav: NavigationMode,
        outdoors_layer: bool,
    ) -> Resolution {
        self.restart_at(renderer_active, nav, outdoors_layer, unix_now())
    }

    /// Like [`restart`](Self::restart), but checks the renderer itself for
    /// whether it is active.
    pub fn refresh(&mut self, nav: NavigationMode, outdoors_layer: bool) -> Resolution {
        let renderer_active = self.renderer.is_active();
        self.restart(renderer_active, nav, outdoors_layer)
    }

    /// [`restart`](Self::restart) with an explicit wall-clock time, so the
    /// automatic theme is testable.
    pub fn restart_at(
        &mut self,
        renderer_active: bool,
        nav: NavigationMode,
        outdoors_layer: bool,
        now: i64,
    ) -> Resolution {
        let raw = self.config.theme_setting();

        let mut ctx = ResolveContext::new(nav, detect_brightness())
            .with_outdoors_layer(outdoors_layer)
            .with_stored_theme(self.config.current_ui_theme())
            .at(now);
        if let Some(stored) = self.config.last_known_position() {
            ctx = ctx.with_position(stored.position());
        }

        let resolution = resolve(raw, &ctx, self.policy.as_ref());
        apply(
            &resolution,
            renderer_active,
            &mut self.ui,
            &mut self.renderer,
            &self.guard,
        );
        resolution
    }

    /// The configuration store this switcher reads from.
    pub fn config(&self) -> &C {
        &self.config
    }

    /// The UI theme controller.
    pub fn ui(&self) -> &U {
        &self.ui
    }

    /// The map renderer.
    pub fn renderer(&self) -> &R {
        &self.renderer
    }
}

fn unix_now() -> i64 {
    // A pre-1970 clock collapses to the epoch.
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs() as i64)
        .unwrap_or(0)
}
