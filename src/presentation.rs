//! Presentation synchronizer
//!
//! Reconciles the checkable menu elements with the settings store and the
//! session's debugger state. `element_state` is a pure function of the
//! inputs, so `refresh` is idempotent by construction; it can run on
//! demand right before a popup opens, or in response to a queued refresh
//! request when the engine changes a setting on its own.

use crate::dispatch::MenuId;
use crate::interfaces::{MenuSurface, RendererProbe};
use crate::settings::{
    BlackLevel, DiscNoise, DisplayMode, FullscreenScale, RendererKind, SettingsStore, SoundFilter,
    SOUND_GAIN_STEP_DB,
};

/// Desired presentation of one menu element
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ElementState {
    pub checked: bool,
    pub enabled: bool,
}

/// Compute the desired {checked, enabled} state for one element.
///
/// Renderer choices stay visible but are disabled when the backing
/// renderer is unavailable on this platform.
pub fn element_state(
    id: MenuId,
    settings: &SettingsStore,
    debugger_attached: bool,
    probe: &dyn RendererProbe,
) -> ElementState {
    let renderer_choice = |kind: RendererKind| ElementState {
        checked: settings.renderer() == kind,
        enabled: probe.available(kind),
    };
    let checked = |checked: bool| ElementState {
        checked,
        enabled: true,
    };

    match id {
        MenuId::SoundEnable => checked(settings.sound_enabled()),
        MenuId::SoundStereo => checked(settings.stereo()),
        MenuId::SoundGain(index) => {
            checked(settings.sound_gain_db() == i32::from(index) * SOUND_GAIN_STEP_DB)
        }
        MenuId::SoundFilterOriginal => checked(settings.sound_filter() == SoundFilter::Original),
        MenuId::SoundFilterReduced => checked(settings.sound_filter() == SoundFilter::Reduced),
        MenuId::SoundFilterMoreReduced => {
            checked(settings.sound_filter() == SoundFilter::MoreReduced)
        }
        MenuId::DiscNoise(index) => checked(settings.disc_noise() == DiscNoise::from_index(index)),
        MenuId::VideoNoBorders => checked(settings.display_mode() == DisplayMode::NoBorders),
        MenuId::VideoNativeBorders => {
            checked(settings.display_mode() == DisplayMode::NativeBorders)
        }
        MenuId::VideoTv => checked(settings.display_mode() == DisplayMode::Tv),
        MenuId::DriverAuto => renderer_choice(RendererKind::Auto),
        MenuId::DriverDirect3d => renderer_choice(RendererKind::Direct3d),
        MenuId::DriverOpenGl => renderer_choice(RendererKind::OpenGl),
        MenuId::DriverSoftware => renderer_choice(RendererKind::Software),
        MenuId::ScaleNearest => checked(!settings.linear_filtering()),
        MenuId::ScaleLinear => checked(settings.linear_filtering()),
        MenuId::VideoScale(index) => checked(settings.video_scale() == index),
        MenuId::FullscreenScaleFull => {
            checked(settings.fullscreen_scale() == FullscreenScale::Full)
        }
        MenuId::FullscreenScaleFourThree => {
            checked(settings.fullscreen_scale() == FullscreenScale::FourThree)
        }
        MenuId::FullscreenScaleSquare => {
            checked(settings.fullscreen_scale() == FullscreenScale::Square)
        }
        MenuId::FullscreenScaleInteger => {
            checked(settings.fullscreen_scale() == FullscreenScale::Integer)
        }
        MenuId::BlitScanlines => checked(!settings.scanline_doubling()),
        MenuId::BlitDoubled => checked(settings.scanline_doubling()),
        MenuId::BlackLevelAcorn => checked(settings.black_level() == BlackLevel::Acorn),
        MenuId::BlackLevelNormal => checked(settings.black_level() == BlackLevel::Normal),
        MenuId::DebuggerEnable => checked(debugger_attached),
        // One-shot action entries carry no check mark
        _ => checked(false),
    }
}

/// Apply the desired state of every checkable element to the surface.
///
/// Elements missing from the surface are the surface's problem to ignore;
/// a partially-present menu (popup vs. menu bar) is expected.
pub fn refresh(
    surface: &mut dyn MenuSurface,
    settings: &SettingsStore,
    debugger_attached: bool,
    probe: &dyn RendererProbe,
) {
    for id in MenuId::checkable() {
        let state = element_state(id, settings, debugger_attached, probe);
        surface.set_checked(id, state.checked);
        surface.set_enabled(id, state.enabled);
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    struct AllRenderers;
    impl RendererProbe for AllRenderers {
        fn available(&self, _kind: RendererKind) -> bool {
            true
        }
    }

    struct SoftwareOnly;
    impl RendererProbe for SoftwareOnly {
        fn available(&self, kind: RendererKind) -> bool {
            kind == RendererKind::Software
        }
    }

    /// Surface double that only backs a subset of elements, as a platform
    /// menu bar might
    #[derive(Default)]
    struct PartialSurface {
        known: Vec<MenuId>,
        states: HashMap<MenuId, (Option<bool>, Option<bool>)>,
        writes: usize,
    }

    impl PartialSurface {
        fn backing(ids: &[MenuId]) -> Self {
            Self {
                known: ids.to_vec(),
                ..Default::default()
            }
        }
    }

    impl MenuSurface for PartialSurface {
        fn set_checked(&mut self, id: MenuId, checked: bool) {
            self.writes += 1;
            if self.known.contains(&id) {
                self.states.entry(id).or_default().0 = Some(checked);
            }
        }
        fn set_enabled(&mut self, id: MenuId, enabled: bool) {
            self.writes += 1;
            if self.known.contains(&id) {
                self.states.entry(id).or_default().1 = Some(enabled);
            }
        }
    }

    #[test]
    fn test_exclusive_group_has_single_active_member() {
        let settings = SettingsStore::new();
        settings.set_display_mode(DisplayMode::Tv);

        let group = [
            MenuId::VideoNoBorders,
            MenuId::VideoNativeBorders,
            MenuId::VideoTv,
        ];
        let active: Vec<MenuId> = group
            .into_iter()
            .filter(|id| element_state(*id, &settings, false, &AllRenderers).checked)
            .collect();
        assert_eq!(active, vec![MenuId::VideoTv]);
    }

    #[test]
    fn test_unavailable_renderer_is_disabled_but_visible() {
        let settings = SettingsStore::new();
        settings.set_renderer(RendererKind::Software);

        let opengl = element_state(MenuId::DriverOpenGl, &settings, false, &SoftwareOnly);
        assert!(!opengl.enabled);
        assert!(!opengl.checked);

        let software = element_state(MenuId::DriverSoftware, &settings, false, &SoftwareOnly);
        assert!(software.enabled);
        assert!(software.checked);
    }

    #[test]
    fn test_refresh_is_idempotent() {
        let settings = SettingsStore::new();
        settings.set_sound_gain_db(8);
        settings.set_black_level(BlackLevel::Acorn);

        let mut surface = PartialSurface::backing(&MenuId::checkable());
        refresh(&mut surface, &settings, true, &AllRenderers);
        let first = surface.states.clone();

        refresh(&mut surface, &settings, true, &AllRenderers);
        assert_eq!(surface.states, first);
    }

    #[test]
    fn test_missing_elements_are_silently_skipped() {
        let settings = SettingsStore::new();
        let mut surface = PartialSurface::backing(&[MenuId::SoundEnable]);

        refresh(&mut surface, &settings, false, &AllRenderers);

        // Every element was addressed, only the backed one kept state
        assert!(surface.writes >= MenuId::checkable().len());
        assert_eq!(surface.states.len(), 1);
        assert_eq!(
            surface.states.get(&MenuId::SoundEnable),
            Some(&(Some(true), Some(true)))
        );
    }

    #[test]
    fn test_debugger_check_follows_session_state() {
        let settings = SettingsStore::new();
        assert!(element_state(MenuId::DebuggerEnable, &settings, true, &AllRenderers).checked);
        assert!(!element_state(MenuId::DebuggerEnable, &settings, false, &AllRenderers).checked);
    }
}
