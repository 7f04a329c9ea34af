//! Collaborator seams consumed by the control core
//!
//! Everything the frontend needs from the surrounding application is a
//! trait here: configuration persistence and selection, file selection,
//! debugger and console surfaces, renderer availability, modal dialogs,
//! native message forwarding and the menu surface itself. The control
//! core never constructs windows, menus or dialogs.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::command::CommandSender;
use crate::dispatch::MenuId;
use crate::session::Engine;
use crate::settings::{RendererKind, SettingsStore};

/// A named machine configuration, chosen before an engine session starts
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MachineConfig {
    pub name: String,
}

impl MachineConfig {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// Persisted configuration storage
pub trait ConfigStore {
    /// Populate the settings store from persisted configuration
    fn load(&self, settings: &SettingsStore);

    /// Persist the current settings
    fn save(&self, settings: &SettingsStore);
}

/// Modal machine-configuration chooser shown at startup and after a stop
pub trait ConfigSelector {
    /// `None` means the user cancelled the selection
    fn select(&mut self, current: Option<&MachineConfig>) -> Option<MachineConfig>;
}

/// Modal per-machine settings editor (the "Configure" dialog)
pub trait SettingsDialog {
    fn edit(&mut self, settings: &SettingsStore);
}

/// Modal disc image chooser
pub trait DiscPicker {
    /// `None` means the user cancelled, which callers treat as a no-op
    fn pick(&mut self, drive: usize, current: Option<&Path>) -> Option<PathBuf>;
}

/// Debugger session start/end
pub trait Debugger {
    fn start(&mut self);
    fn end(&mut self);
}

/// Debugger console window
pub trait ConsoleSurface {
    fn show(&mut self);
    fn hide(&mut self);
}

/// Per-renderer availability query
pub trait RendererProbe {
    fn available(&self, kind: RendererKind) -> bool;
}

/// Modal message boxes, always shown on the control thread
pub trait Dialogs {
    fn error(&mut self, message: &str);
    fn notice(&mut self, message: &str);
}

/// Native cross-thread message forwarding (Windows `SendMessage` contract)
pub trait PlatformSink {
    fn forward(&mut self, target: usize, code: u32, param_a: isize, param_b: isize);
}

/// The addressable menu surface.
///
/// Implementations resolve elements by identifier; an element absent from
/// the current platform's surface (popup menu vs. persistent menu bar) is
/// a silent no-op, never an error.
pub trait MenuSurface {
    fn set_checked(&mut self, id: MenuId, checked: bool);
    fn set_enabled(&mut self, id: MenuId, enabled: bool);

    /// Open the surface as a context menu, where the platform supports it
    fn popup(&mut self) {}
}

/// Builds an engine for a chosen machine configuration.
///
/// The engine receives a shared settings handle (to sample gain, stereo
/// and similar fields in real time) and a command sender (to post errors
/// and refresh requests back to the control thread).
pub trait EngineFactory {
    fn create(
        &mut self,
        config: &MachineConfig,
        settings: Arc<SettingsStore>,
        commands: CommandSender,
    ) -> Box<dyn Engine>;
}
