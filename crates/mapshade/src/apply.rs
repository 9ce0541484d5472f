//! Applying a resolution to the UI and the map renderer.
//!
//! The only decision here is the immediate-versus-pending branch. Setting
//! a map style synchronously while the renderer is inactive blocks the
//! calling thread until the renderer comes back — the renderer's contract,
//! not ours, but one this module must honor. When the renderer is
//! inactive, the style is only marked; the renderer picks it up when it
//! recreates its graphics on activation.
//!
//! [`apply`] must run on the thread that owns the UI and renderer handles.

use crate::resolver::Resolution;
use crate::setting::ConcreteTheme;
use crate::style::MapStyle;

/// Applies a concrete theme to the OS-level UI theming.
///
/// Implementations are expected to be cheap and idempotent.
pub trait UiThemeController {
    fn set_mode(&mut self, mode: ConcreteTheme);
}

/// The map rendering engine, as seen from theme switching.
pub trait MapRenderer {
    /// Applies a style synchronously. Valid only while the renderer is
    /// active; calling it while inactive blocks the caller.
    fn set_style_immediate(&mut self, style: MapStyle);

    /// Records a style to be applied on the renderer's next activation.
    fn mark_style_pending(&mut self, style: MapStyle);

    /// Whether the map surface is currently rendered and visible.
    fn is_active(&self) -> bool;

    /// The style the renderer currently shows.
    fn current_style(&self) -> MapStyle;
}

/// Detects whether an alternate display with its own theming mechanism is
/// in use (for example a projected in-car screen). While it is, map style
/// changes belong to that mechanism, not to us.
pub trait DisplayModeGuard {
    fn is_alternate_display_in_use(&self) -> bool;
}

/// Applies a resolution: UI theme always, map style when appropriate.
///
/// `renderer_active` must accurately reflect whether the map surface is
/// rendered and visible at this moment; it decides between the immediate
/// and the deferred style path. The map step is skipped entirely when the
/// alternate display is in use, and when the renderer already shows the
/// target style (so a style set through a debug channel stays untouched
/// until the theme actually changes).
pub fn apply(
    resolution: &Resolution,
    renderer_active: bool,
    ui: &mut dyn UiThemeController,
    renderer: &mut dyn MapRenderer,
    guard: &dyn DisplayModeGuard,
) {
    ui.set_mode(resolution.concrete);

    if guard.is_alternate_display_in_use() {
        return;
    }
    if renderer.current_style() == resolution.style {
        return;
    }

    if renderer_active {
        renderer.set_style_immediate(resolution.style);
    } else {
        renderer.mark_style_pending(resolution.style);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct RecordingUi {
        modes: Vec<ConcreteTheme>,
    }

    impl UiThemeController for RecordingUi {
        fn set_mode(&mut self, mode: ConcreteTheme) {
            self.modes.push(mode);
        }
    }

    /// Records which style path was taken.
    struct RecordingRenderer {
        active: bool,
        current: MapStyle,
        immediate: Vec<MapStyle>,
        pending: Vec<MapStyle>,
    }

    impl RecordingRenderer {
        fn new(active: bool, current: MapStyle) -> Self {
            Self {
                active,
                current,
                immediate: Vec::new(),
                pending: Vec::new(),
            }
        }
    }

    impl MapRenderer for RecordingRenderer {
        fn set_style_immediate(&mut self, style: MapStyle) {
            self.immediate.push(style);
            self.current = style;
        }

        fn mark_style_pending(&mut self, style: MapStyle) {
            self.pending.push(style);
        }

        fn is_active(&self) -> bool {
            self.active
        }

        fn current_style(&self) -> MapStyle {
            self.current
        }
    }

    struct Guard(bool);

    impl DisplayModeGuard for Guard {
        fn is_alternate_display_in_use(&self) -> bool {
            self.0
        }
    }

    fn resolution(style: MapStyle) -> Resolution {
        Resolution {
            concrete: ConcreteTheme::Dark,
            style,
        }
    }

    #[test]
    fn active_renderer_gets_the_immediate_path_only() {
        let mut ui = RecordingUi::default();
        let mut renderer = RecordingRenderer::new(true, MapStyle::Clear);

        apply(
            &resolution(MapStyle::Dark),
            true,
            &mut ui,
            &mut renderer,
            &Guard(false),
        );

        assert_eq!(renderer.immediate, vec![MapStyle::Dark]);
        assert!(renderer.pending.is_empty());
    }

    #[test]
    fn inactive_renderer_gets_the_pending_path_only() {
        let mut ui = RecordingUi::default();
        let mut renderer = RecordingRenderer::new(false, MapStyle::Clear);

        apply(
            &resolution(MapStyle::Dark),
            false,
            &mut ui,
            &mut renderer,
            &Guard(false),
        );

        assert!(renderer.immediate.is_empty());
        assert_eq!(renderer.pending, vec![MapStyle::Dark]);
    }

    #[test]
    fn ui_theme_is_always_applied() {
        let mut ui = RecordingUi::default();
        let mut renderer = RecordingRenderer::new(true, MapStyle::Clear);

        apply(
            &resolution(MapStyle::Dark),
            true,
            &mut ui,
            &mut renderer,
            &Guard(true),
        );

        assert_eq!(ui.modes, vec![ConcreteTheme::Dark]);
    }

    #[test]
    fn alternate_display_suppresses_the_map_step() {
        let mut ui = RecordingUi::default();
        let mut renderer = RecordingRenderer::new(true, MapStyle::Clear);

        apply(
            &resolution(MapStyle::Dark),
            true,
            &mut ui,
            &mut renderer,
            &Guard(true),
        );

        assert!(renderer.immediate.is_empty());
        assert!(renderer.pending.is_empty());
    }

    #[test]
    fn matching_current_style_is_left_alone() {
        let mut ui = RecordingUi::default();
        let mut renderer = RecordingRenderer::new(true, MapStyle::VehicleDark);

        apply(
            &resolution(MapStyle::VehicleDark),
            true,
            &mut ui,
            &mut renderer,
            &Guard(false),
        );

        assert!(renderer.immediate.is_empty());
        assert!(renderer.pending.is_empty());
        // The UI step still ran.
        assert_eq!(ui.modes.len(), 1);
    }

    #[test]
    fn applying_twice_is_idempotent() {
        let mut ui = RecordingUi::default();
        let mut renderer = RecordingRenderer::new(true, MapStyle::Clear);
        let res = resolution(MapStyle::OutdoorsDark);

        apply(&res, true, &mut ui, &mut renderer, &Guard(false));
        apply(&res, true, &mut ui, &mut renderer, &Guard(false));

        // Second call sees the style already in place and does nothing.
        assert_eq!(renderer.immediate, vec![MapStyle::OutdoorsDark]);
    }
}
