//! Emulator configuration state
//!
//! The settings store is shared between the control thread and the engine
//! thread. The control thread is the only writer (every mutation goes
//! through the command dispatcher); the engine thread samples fields
//! mid-slice, so each independent field is an atomic and no lock is held
//! on either side.

use std::sync::atomic::{AtomicBool, AtomicI32, AtomicU8, Ordering};

/// Step between selectable sound gain levels, in dB
pub const SOUND_GAIN_STEP_DB: i32 = 2;

/// Attenuation step between disc noise levels, in dB
pub const DISC_NOISE_STEP_DB: i32 = 2;

/// Number of floppy drives addressable from the disc menu
pub const DRIVE_COUNT: usize = 4;

/// Highest selectable sound gain index (gain = index * step)
pub const SOUND_GAIN_LEVELS: u8 = 10;

/// Number of windowed video scale choices
pub const VIDEO_SCALE_LEVELS: u8 = 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum DisplayMode {
    NoBorders = 0,
    NativeBorders = 1,
    Tv = 2,
}

impl DisplayMode {
    fn from_raw(raw: u8) -> Self {
        match raw {
            0 => DisplayMode::NoBorders,
            1 => DisplayMode::NativeBorders,
            _ => DisplayMode::Tv,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum FullscreenScale {
    Full = 0,
    FourThree = 1,
    Square = 2,
    Integer = 3,
}

impl FullscreenScale {
    fn from_raw(raw: u8) -> Self {
        match raw {
            0 => FullscreenScale::Full,
            1 => FullscreenScale::FourThree,
            2 => FullscreenScale::Square,
            _ => FullscreenScale::Integer,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum RendererKind {
    Auto = 0,
    Direct3d = 1,
    OpenGl = 2,
    Software = 3,
}

impl RendererKind {
    pub const ALL: [RendererKind; 4] = [
        RendererKind::Auto,
        RendererKind::Direct3d,
        RendererKind::OpenGl,
        RendererKind::Software,
    ];

    fn from_raw(raw: u8) -> Self {
        match raw {
            0 => RendererKind::Auto,
            1 => RendererKind::Direct3d,
            2 => RendererKind::OpenGl,
            _ => RendererKind::Software,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum SoundFilter {
    Original = 0,
    Reduced = 1,
    MoreReduced = 2,
}

impl SoundFilter {
    fn from_raw(raw: u8) -> Self {
        match raw {
            0 => SoundFilter::Original,
            1 => SoundFilter::Reduced,
            _ => SoundFilter::MoreReduced,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum BlackLevel {
    Acorn = 0,
    Normal = 1,
}

impl BlackLevel {
    fn from_raw(raw: u8) -> Self {
        match raw {
            0 => BlackLevel::Acorn,
            _ => BlackLevel::Normal,
        }
    }
}

/// Mechanical disc noise volume. Level 0 is full volume, each further
/// level attenuates by [`DISC_NOISE_STEP_DB`] dB.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum DiscNoise {
    Disabled = 0,
    Level0 = 1,
    Level1 = 2,
    Level2 = 3,
    Level3 = 4,
}

impl DiscNoise {
    /// Map a disc noise menu index (0 = disabled, 1..=4 = volume levels)
    pub fn from_index(index: u8) -> Self {
        match index {
            0 => DiscNoise::Disabled,
            1 => DiscNoise::Level0,
            2 => DiscNoise::Level1,
            3 => DiscNoise::Level2,
            _ => DiscNoise::Level3,
        }
    }

    /// Attenuation in dB, or `None` when disc noise is disabled
    pub fn attenuation_db(self) -> Option<i32> {
        match self {
            DiscNoise::Disabled => None,
            DiscNoise::Level0 => Some(0),
            DiscNoise::Level1 => Some(-DISC_NOISE_STEP_DB),
            DiscNoise::Level2 => Some(-2 * DISC_NOISE_STEP_DB),
            DiscNoise::Level3 => Some(-3 * DISC_NOISE_STEP_DB),
        }
    }

    fn from_raw(raw: u8) -> Self {
        Self::from_index(raw)
    }
}

/// Process-wide emulator settings
///
/// Constructed once at startup, populated from the persisted configuration
/// and then mutated exclusively by the command dispatcher on the control
/// thread.
pub struct SettingsStore {
    sound_enabled: AtomicBool,
    stereo: AtomicBool,
    sound_gain_db: AtomicI32,
    sound_filter: AtomicU8,
    disc_noise: AtomicU8,
    display_mode: AtomicU8,
    fullscreen_scale: AtomicU8,
    renderer: AtomicU8,
    linear_filtering: AtomicBool,
    video_scale: AtomicU8,
    black_level: AtomicU8,
    scanline_doubling: AtomicBool,
}

impl Default for SettingsStore {
    fn default() -> Self {
        Self {
            sound_enabled: AtomicBool::new(true),
            stereo: AtomicBool::new(true),
            sound_gain_db: AtomicI32::new(0),
            sound_filter: AtomicU8::new(SoundFilter::Original as u8),
            disc_noise: AtomicU8::new(DiscNoise::Level0 as u8),
            display_mode: AtomicU8::new(DisplayMode::NativeBorders as u8),
            fullscreen_scale: AtomicU8::new(FullscreenScale::Full as u8),
            renderer: AtomicU8::new(RendererKind::Auto as u8),
            linear_filtering: AtomicBool::new(false),
            video_scale: AtomicU8::new(1),
            black_level: AtomicU8::new(BlackLevel::Normal as u8),
            scanline_doubling: AtomicBool::new(false),
        }
    }
}

impl SettingsStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn sound_enabled(&self) -> bool {
        self.sound_enabled.load(Ordering::Relaxed)
    }

    pub fn set_sound_enabled(&self, enabled: bool) {
        self.sound_enabled.store(enabled, Ordering::Relaxed);
    }

    /// Flip the sound enable flag, returning the new value
    pub fn toggle_sound_enabled(&self) -> bool {
        !self.sound_enabled.fetch_xor(true, Ordering::Relaxed)
    }

    pub fn stereo(&self) -> bool {
        self.stereo.load(Ordering::Relaxed)
    }

    pub fn set_stereo(&self, stereo: bool) {
        self.stereo.store(stereo, Ordering::Relaxed);
    }

    /// Flip the stereo flag, returning the new value
    pub fn toggle_stereo(&self) -> bool {
        !self.stereo.fetch_xor(true, Ordering::Relaxed)
    }

    pub fn sound_gain_db(&self) -> i32 {
        self.sound_gain_db.load(Ordering::Relaxed)
    }

    pub fn set_sound_gain_db(&self, gain: i32) {
        let max = i32::from(SOUND_GAIN_LEVELS - 1) * SOUND_GAIN_STEP_DB;
        self.sound_gain_db.store(gain.clamp(0, max), Ordering::Relaxed);
    }

    pub fn sound_filter(&self) -> SoundFilter {
        SoundFilter::from_raw(self.sound_filter.load(Ordering::Relaxed))
    }

    pub fn set_sound_filter(&self, filter: SoundFilter) {
        self.sound_filter.store(filter as u8, Ordering::Relaxed);
    }

    pub fn disc_noise(&self) -> DiscNoise {
        DiscNoise::from_raw(self.disc_noise.load(Ordering::Relaxed))
    }

    pub fn set_disc_noise(&self, noise: DiscNoise) {
        self.disc_noise.store(noise as u8, Ordering::Relaxed);
    }

    pub fn display_mode(&self) -> DisplayMode {
        DisplayMode::from_raw(self.display_mode.load(Ordering::Relaxed))
    }

    pub fn set_display_mode(&self, mode: DisplayMode) {
        self.display_mode.store(mode as u8, Ordering::Relaxed);
    }

    pub fn fullscreen_scale(&self) -> FullscreenScale {
        FullscreenScale::from_raw(self.fullscreen_scale.load(Ordering::Relaxed))
    }

    pub fn set_fullscreen_scale(&self, scale: FullscreenScale) {
        self.fullscreen_scale.store(scale as u8, Ordering::Relaxed);
    }

    pub fn renderer(&self) -> RendererKind {
        RendererKind::from_raw(self.renderer.load(Ordering::Relaxed))
    }

    pub fn set_renderer(&self, renderer: RendererKind) {
        self.renderer.store(renderer as u8, Ordering::Relaxed);
    }

    pub fn linear_filtering(&self) -> bool {
        self.linear_filtering.load(Ordering::Relaxed)
    }

    pub fn set_linear_filtering(&self, linear: bool) {
        self.linear_filtering.store(linear, Ordering::Relaxed);
    }

    pub fn video_scale(&self) -> u8 {
        self.video_scale.load(Ordering::Relaxed)
    }

    pub fn set_video_scale(&self, scale: u8) {
        self.video_scale
            .store(scale.min(VIDEO_SCALE_LEVELS - 1), Ordering::Relaxed);
    }

    pub fn black_level(&self) -> BlackLevel {
        BlackLevel::from_raw(self.black_level.load(Ordering::Relaxed))
    }

    pub fn set_black_level(&self, level: BlackLevel) {
        self.black_level.store(level as u8, Ordering::Relaxed);
    }

    pub fn scanline_doubling(&self) -> bool {
        self.scanline_doubling.load(Ordering::Relaxed)
    }

    pub fn set_scanline_doubling(&self, doubled: bool) {
        self.scanline_doubling.store(doubled, Ordering::Relaxed);
    }
}
