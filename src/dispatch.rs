//! Identifier-keyed command dispatch table
//!
//! Every discrete UI command maps to exactly one [`Binding`]: a settings
//! mutation, an immediate action, or a toggle, plus an optional engine
//! notification. The table is data, so each entry can be unit tested on
//! its own and the dispatcher stays a single small loop.

use std::collections::HashMap;

use once_cell::sync::Lazy;

use crate::settings::{
    BlackLevel, DiscNoise, DisplayMode, FullscreenScale, RendererKind, SettingsStore, SoundFilter,
    DRIVE_COUNT, SOUND_GAIN_LEVELS, SOUND_GAIN_STEP_DB, VIDEO_SCALE_LEVELS,
};

/// Stable identifier for an addressable menu command.
///
/// Indexed variants carry the menu position within their group (e.g.
/// `SoundGain(3)` is the fourth gain entry, 6 dB).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MenuId {
    FileExit,
    FileReset,
    DiscChange(u8),
    DiscEject(u8),
    DiscNoise(u8),
    SoundEnable,
    SoundStereo,
    SoundGain(u8),
    SoundFilterOriginal,
    SoundFilterReduced,
    SoundFilterMoreReduced,
    SettingsConfigure,
    VideoFullscreen,
    VideoNoBorders,
    VideoNativeBorders,
    VideoTv,
    DriverAuto,
    DriverDirect3d,
    DriverOpenGl,
    DriverSoftware,
    ScaleNearest,
    ScaleLinear,
    VideoScale(u8),
    FullscreenScaleFull,
    FullscreenScaleFourThree,
    FullscreenScaleSquare,
    FullscreenScaleInteger,
    BlitScanlines,
    BlitDoubled,
    BlackLevelAcorn,
    BlackLevelNormal,
    DebuggerEnable,
    DebuggerBreak,
}

impl MenuId {
    /// Every identifier the dispatch table knows about
    pub fn all() -> Vec<MenuId> {
        let mut ids = vec![MenuId::FileExit, MenuId::FileReset];
        for drive in 0..DRIVE_COUNT as u8 {
            ids.push(MenuId::DiscChange(drive));
        }
        for drive in 0..DRIVE_COUNT as u8 {
            ids.push(MenuId::DiscEject(drive));
        }
        for index in 0..5 {
            ids.push(MenuId::DiscNoise(index));
        }
        ids.push(MenuId::SoundEnable);
        ids.push(MenuId::SoundStereo);
        for index in 0..SOUND_GAIN_LEVELS {
            ids.push(MenuId::SoundGain(index));
        }
        ids.extend([
            MenuId::SoundFilterOriginal,
            MenuId::SoundFilterReduced,
            MenuId::SoundFilterMoreReduced,
            MenuId::SettingsConfigure,
            MenuId::VideoFullscreen,
            MenuId::VideoNoBorders,
            MenuId::VideoNativeBorders,
            MenuId::VideoTv,
            MenuId::DriverAuto,
            MenuId::DriverDirect3d,
            MenuId::DriverOpenGl,
            MenuId::DriverSoftware,
            MenuId::ScaleNearest,
            MenuId::ScaleLinear,
        ]);
        for index in 0..VIDEO_SCALE_LEVELS {
            ids.push(MenuId::VideoScale(index));
        }
        ids.extend([
            MenuId::FullscreenScaleFull,
            MenuId::FullscreenScaleFourThree,
            MenuId::FullscreenScaleSquare,
            MenuId::FullscreenScaleInteger,
            MenuId::BlitScanlines,
            MenuId::BlitDoubled,
            MenuId::BlackLevelAcorn,
            MenuId::BlackLevelNormal,
            MenuId::DebuggerEnable,
            MenuId::DebuggerBreak,
        ]);
        ids
    }

    /// Identifiers backed by a checkable element on the menu surface
    pub fn checkable() -> Vec<MenuId> {
        Self::all()
            .into_iter()
            .filter(|id| match binding(*id).op {
                Op::Toggle(_) | Op::Set(_) => true,
                Op::Action(ActionKind::ToggleDebugger) => true,
                Op::Action(_) => false,
            })
            .collect()
    }

    /// Stable symbolic name, used by menu surfaces to address elements
    pub fn symbol(self) -> String {
        match self {
            MenuId::FileExit => "file.exit".to_string(),
            MenuId::FileReset => "file.reset".to_string(),
            MenuId::DiscChange(drive) => format!("disc.change.{drive}"),
            MenuId::DiscEject(drive) => format!("disc.eject.{drive}"),
            MenuId::DiscNoise(index) => format!("disc.noise.{index}"),
            MenuId::SoundEnable => "sound.enable".to_string(),
            MenuId::SoundStereo => "sound.stereo".to_string(),
            MenuId::SoundGain(index) => format!("sound.gain.{index}"),
            MenuId::SoundFilterOriginal => "sound.filter.original".to_string(),
            MenuId::SoundFilterReduced => "sound.filter.reduced".to_string(),
            MenuId::SoundFilterMoreReduced => "sound.filter.more-reduced".to_string(),
            MenuId::SettingsConfigure => "settings.configure".to_string(),
            MenuId::VideoFullscreen => "video.fullscreen".to_string(),
            MenuId::VideoNoBorders => "video.borders.none".to_string(),
            MenuId::VideoNativeBorders => "video.borders.native".to_string(),
            MenuId::VideoTv => "video.borders.tv".to_string(),
            MenuId::DriverAuto => "video.driver.auto".to_string(),
            MenuId::DriverDirect3d => "video.driver.direct3d".to_string(),
            MenuId::DriverOpenGl => "video.driver.opengl".to_string(),
            MenuId::DriverSoftware => "video.driver.software".to_string(),
            MenuId::ScaleNearest => "video.filter.nearest".to_string(),
            MenuId::ScaleLinear => "video.filter.linear".to_string(),
            MenuId::VideoScale(index) => format!("video.scale.{index}"),
            MenuId::FullscreenScaleFull => "video.fullscreen-scale.full".to_string(),
            MenuId::FullscreenScaleFourThree => "video.fullscreen-scale.4-3".to_string(),
            MenuId::FullscreenScaleSquare => "video.fullscreen-scale.square".to_string(),
            MenuId::FullscreenScaleInteger => "video.fullscreen-scale.integer".to_string(),
            MenuId::BlitScanlines => "video.blit.scanlines".to_string(),
            MenuId::BlitDoubled => "video.blit.doubled".to_string(),
            MenuId::BlackLevelAcorn => "video.black-level.acorn".to_string(),
            MenuId::BlackLevelNormal => "video.black-level.normal".to_string(),
            MenuId::DebuggerEnable => "debugger.enable".to_string(),
            MenuId::DebuggerBreak => "debugger.break".to_string(),
        }
    }

    /// Resolve a symbolic name. Unknown symbols yield `None`, which the
    /// dispatcher treats as "ignore", not as an error.
    pub fn from_symbol(symbol: &str) -> Option<MenuId> {
        static SYMBOLS: Lazy<HashMap<String, MenuId>> = Lazy::new(|| {
            MenuId::all()
                .into_iter()
                .map(|id| (id.symbol(), id))
                .collect()
        });
        SYMBOLS.get(symbol).copied()
    }
}

/// Boolean settings field flipped by a toggle command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleTarget {
    SoundEnable,
    Stereo,
}

/// Exclusive-choice mutation: record one value drawn from a small
/// enumerated set. Sibling elements are unchecked by the presentation
/// synchronizer, not here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingChange {
    SoundGain(i32),
    SoundFilter(SoundFilter),
    DiscNoise(DiscNoise),
    DisplayMode(DisplayMode),
    FullscreenScale(FullscreenScale),
    Renderer(RendererKind),
    LinearFiltering(bool),
    VideoScale(u8),
    BlackLevel(BlackLevel),
    ScanlineDoubling(bool),
}

/// One-shot effect with no stored settings field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionKind {
    Exit,
    Reset,
    ChangeDisc(u8),
    EjectDisc(u8),
    Configure,
    EnterFullscreen,
    ToggleDebugger,
    RequestBreak,
}

/// Engine follow-up required after a settings mutation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notify {
    RendererReset,
    SoundFilterChanged,
    PaletteChanged,
    DisplayModeChanged,
    ScanlineModeChanged,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Op {
    Toggle(ToggleTarget),
    Set(SettingChange),
    Action(ActionKind),
}

/// What dispatching an identifier does
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Binding {
    pub op: Op,
    pub notify: Option<Notify>,
}

impl Binding {
    const fn set(change: SettingChange) -> Self {
        Self {
            op: Op::Set(change),
            notify: None,
        }
    }

    const fn set_and_notify(change: SettingChange, notify: Notify) -> Self {
        Self {
            op: Op::Set(change),
            notify: Some(notify),
        }
    }

    const fn toggle(target: ToggleTarget) -> Self {
        Self {
            op: Op::Toggle(target),
            notify: None,
        }
    }

    const fn action(kind: ActionKind) -> Self {
        Self {
            op: Op::Action(kind),
            notify: None,
        }
    }
}

/// The dispatch table: what each identifier means
pub fn binding(id: MenuId) -> Binding {
    match id {
        MenuId::FileExit => Binding::action(ActionKind::Exit),
        MenuId::FileReset => Binding::action(ActionKind::Reset),
        MenuId::DiscChange(drive) => Binding::action(ActionKind::ChangeDisc(drive)),
        MenuId::DiscEject(drive) => Binding::action(ActionKind::EjectDisc(drive)),
        MenuId::DiscNoise(index) => {
            Binding::set(SettingChange::DiscNoise(DiscNoise::from_index(index)))
        }
        MenuId::SoundEnable => Binding::toggle(ToggleTarget::SoundEnable),
        MenuId::SoundStereo => Binding::toggle(ToggleTarget::Stereo),
        MenuId::SoundGain(index) => Binding::set(SettingChange::SoundGain(
            i32::from(index) * SOUND_GAIN_STEP_DB,
        )),
        MenuId::SoundFilterOriginal => Binding::set_and_notify(
            SettingChange::SoundFilter(SoundFilter::Original),
            Notify::SoundFilterChanged,
        ),
        MenuId::SoundFilterReduced => Binding::set_and_notify(
            SettingChange::SoundFilter(SoundFilter::Reduced),
            Notify::SoundFilterChanged,
        ),
        MenuId::SoundFilterMoreReduced => Binding::set_and_notify(
            SettingChange::SoundFilter(SoundFilter::MoreReduced),
            Notify::SoundFilterChanged,
        ),
        MenuId::SettingsConfigure => Binding::action(ActionKind::Configure),
        MenuId::VideoFullscreen => Binding::action(ActionKind::EnterFullscreen),
        MenuId::VideoNoBorders => Binding::set_and_notify(
            SettingChange::DisplayMode(DisplayMode::NoBorders),
            Notify::DisplayModeChanged,
        ),
        MenuId::VideoNativeBorders => Binding::set_and_notify(
            SettingChange::DisplayMode(DisplayMode::NativeBorders),
            Notify::DisplayModeChanged,
        ),
        MenuId::VideoTv => Binding::set_and_notify(
            SettingChange::DisplayMode(DisplayMode::Tv),
            Notify::DisplayModeChanged,
        ),
        MenuId::DriverAuto => Binding::set_and_notify(
            SettingChange::Renderer(RendererKind::Auto),
            Notify::RendererReset,
        ),
        MenuId::DriverDirect3d => Binding::set_and_notify(
            SettingChange::Renderer(RendererKind::Direct3d),
            Notify::RendererReset,
        ),
        MenuId::DriverOpenGl => Binding::set_and_notify(
            SettingChange::Renderer(RendererKind::OpenGl),
            Notify::RendererReset,
        ),
        MenuId::DriverSoftware => Binding::set_and_notify(
            SettingChange::Renderer(RendererKind::Software),
            Notify::RendererReset,
        ),
        MenuId::ScaleNearest => Binding::set_and_notify(
            SettingChange::LinearFiltering(false),
            Notify::RendererReset,
        ),
        MenuId::ScaleLinear => Binding::set_and_notify(
            SettingChange::LinearFiltering(true),
            Notify::RendererReset,
        ),
        MenuId::VideoScale(index) => Binding::set(SettingChange::VideoScale(index)),
        MenuId::FullscreenScaleFull => {
            Binding::set(SettingChange::FullscreenScale(FullscreenScale::Full))
        }
        MenuId::FullscreenScaleFourThree => {
            Binding::set(SettingChange::FullscreenScale(FullscreenScale::FourThree))
        }
        MenuId::FullscreenScaleSquare => {
            Binding::set(SettingChange::FullscreenScale(FullscreenScale::Square))
        }
        MenuId::FullscreenScaleInteger => {
            Binding::set(SettingChange::FullscreenScale(FullscreenScale::Integer))
        }
        MenuId::BlitScanlines => Binding::set_and_notify(
            SettingChange::ScanlineDoubling(false),
            Notify::ScanlineModeChanged,
        ),
        MenuId::BlitDoubled => Binding::set_and_notify(
            SettingChange::ScanlineDoubling(true),
            Notify::ScanlineModeChanged,
        ),
        MenuId::BlackLevelAcorn => Binding::set_and_notify(
            SettingChange::BlackLevel(BlackLevel::Acorn),
            Notify::PaletteChanged,
        ),
        MenuId::BlackLevelNormal => Binding::set_and_notify(
            SettingChange::BlackLevel(BlackLevel::Normal),
            Notify::PaletteChanged,
        ),
        MenuId::DebuggerEnable => Binding::action(ActionKind::ToggleDebugger),
        MenuId::DebuggerBreak => Binding::action(ActionKind::RequestBreak),
    }
}

/// Record an exclusive-choice value in the settings store
pub fn apply_change(settings: &SettingsStore, change: SettingChange) {
    match change {
        SettingChange::SoundGain(gain) => settings.set_sound_gain_db(gain),
        SettingChange::SoundFilter(filter) => settings.set_sound_filter(filter),
        SettingChange::DiscNoise(noise) => settings.set_disc_noise(noise),
        SettingChange::DisplayMode(mode) => settings.set_display_mode(mode),
        SettingChange::FullscreenScale(scale) => settings.set_fullscreen_scale(scale),
        SettingChange::Renderer(renderer) => settings.set_renderer(renderer),
        SettingChange::LinearFiltering(linear) => settings.set_linear_filtering(linear),
        SettingChange::VideoScale(scale) => settings.set_video_scale(scale),
        SettingChange::BlackLevel(level) => settings.set_black_level(level),
        SettingChange::ScanlineDoubling(doubled) => settings.set_scanline_doubling(doubled),
    }
}
