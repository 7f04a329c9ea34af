use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use emu_control::command::CommandSender;
use emu_control::dispatch::MenuId;
use emu_control::interfaces::{
    ConfigSelector, ConfigStore, ConsoleSurface, Debugger, Dialogs, DiscPicker, EngineFactory,
    MenuSurface, PlatformSink, RendererProbe, SettingsDialog,
};
use emu_control::settings::{DisplayMode, RendererKind};
use emu_control::{Collaborators, Engine, Frontend, MachineConfig, SettingsStore};

/// Engine stand-in that sleeps one frame per slice and samples the shared
/// settings, standing where a real emulation core would
struct DemoEngine {
    settings: Arc<SettingsStore>,
}

impl Engine for DemoEngine {
    fn run_slice(&mut self) {
        let _ = self.settings.sound_gain_db();
        std::thread::sleep(Duration::from_millis(20));
    }
    fn reset(&mut self) {
        log::info!("machine reset");
    }
    fn renderer_reset(&mut self) {
        log::info!("renderer reset, now {:?}", self.settings.renderer());
    }
    fn update_sound_filter(&mut self) {
        log::info!("sound filter now {:?}", self.settings.sound_filter());
    }
    fn recompute_palette(&mut self) {
        log::info!("palette recomputed for {:?}", self.settings.black_level());
    }
    fn set_display_mode(&mut self, mode: DisplayMode) {
        log::info!("display mode now {mode:?}");
    }
    fn set_scanline_doubling(&mut self, doubled: bool) {
        log::info!("scanline doubling now {doubled}");
    }
    fn enter_fullscreen(&mut self) {
        log::info!("entering fullscreen");
    }
    fn change_disc(&mut self, drive: usize, image: PathBuf) {
        log::info!("drive {drive} loaded {}", image.display());
    }
    fn eject_disc(&mut self, drive: usize) {
        log::info!("drive {drive} ejected");
    }
}

struct DemoEngineFactory;
impl EngineFactory for DemoEngineFactory {
    fn create(
        &mut self,
        _config: &MachineConfig,
        settings: Arc<SettingsStore>,
        _commands: CommandSender,
    ) -> Box<dyn Engine> {
        Box::new(DemoEngine { settings })
    }
}

struct Headless;

impl ConfigStore for Headless {
    fn load(&self, _settings: &SettingsStore) {}
    fn save(&self, _settings: &SettingsStore) {}
}
impl ConfigSelector for Headless {
    fn select(&mut self, _current: Option<&MachineConfig>) -> Option<MachineConfig> {
        None
    }
}
impl SettingsDialog for Headless {
    fn edit(&mut self, _settings: &SettingsStore) {}
}
impl DiscPicker for Headless {
    fn pick(&mut self, _drive: usize, _current: Option<&Path>) -> Option<PathBuf> {
        None
    }
}
impl Debugger for Headless {
    fn start(&mut self) {}
    fn end(&mut self) {}
}
impl ConsoleSurface for Headless {
    fn show(&mut self) {}
    fn hide(&mut self) {}
}
impl RendererProbe for Headless {
    fn available(&self, kind: RendererKind) -> bool {
        kind != RendererKind::Direct3d
    }
}
impl Dialogs for Headless {
    fn error(&mut self, message: &str) {
        eprintln!("error: {message}");
    }
    fn notice(&mut self, message: &str) {
        println!("notice: {message}");
    }
}
impl PlatformSink for Headless {
    fn forward(&mut self, _target: usize, _code: u32, _param_a: isize, _param_b: isize) {}
}
impl MenuSurface for Headless {
    fn set_checked(&mut self, id: MenuId, checked: bool) {
        log::debug!("menu {} checked={checked}", id.symbol());
    }
    fn set_enabled(&mut self, id: MenuId, enabled: bool) {
        log::debug!("menu {} enabled={enabled}", id.symbol());
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let collab = Collaborators {
        config_store: Box::new(Headless),
        config_selector: Box::new(Headless),
        settings_dialog: Box::new(Headless),
        disc_picker: Box::new(Headless),
        debugger: Box::new(Headless),
        console: Box::new(Headless),
        renderer_probe: Box::new(Headless),
        dialogs: Box::new(Headless),
        platform: Box::new(Headless),
        surface: Box::new(Headless),
        engines: Box::new(DemoEngineFactory),
    };

    let mut frontend = Frontend::new(collab, Some(MachineConfig::new("A3000")));
    frontend.start()?;

    for symbol in ["sound.gain.6", "video.borders.tv", "video.driver.opengl"] {
        frontend.dispatch_symbol(symbol)?;
    }
    std::thread::sleep(Duration::from_millis(100));
    while frontend.poll()? {}

    frontend.stop_emulation()?;
    Ok(())
}
