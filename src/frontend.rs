//! Control-thread hub
//!
//! `Frontend` ties the command queue, the lifecycle controller, the
//! dispatch table and the presentation synchronizer together. It lives on
//! the control thread: the surrounding event loop calls `poll` once per
//! cycle to service engine-originated commands, and routes user menu
//! activations straight into `dispatch`.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use log::{debug, info, warn};

use crate::command::{Command, CommandQueue, CommandSender};
use crate::dispatch::{apply_change, binding, ActionKind, Binding, MenuId, Notify, Op, ToggleTarget};
use crate::errors::ControlError;
use crate::interfaces::{
    ConfigSelector, ConfigStore, ConsoleSurface, Debugger, Dialogs, DiscPicker, EngineFactory,
    MachineConfig, MenuSurface, PlatformSink, RendererProbe, SettingsDialog,
};
use crate::presentation;
use crate::session::{DebugFlags, EngineCall, Lifecycle, LifecycleState};
use crate::settings::{SettingsStore, DRIVE_COUNT};

/// Shown the first time the user enters fullscreen
const FULLSCREEN_NOTICE: &str = "Use Ctrl+End to return to windowed mode";

/// Everything the frontend consumes from the surrounding application
pub struct Collaborators {
    pub config_store: Box<dyn ConfigStore>,
    pub config_selector: Box<dyn ConfigSelector>,
    pub settings_dialog: Box<dyn SettingsDialog>,
    pub disc_picker: Box<dyn DiscPicker>,
    pub debugger: Box<dyn Debugger>,
    pub console: Box<dyn ConsoleSurface>,
    pub renderer_probe: Box<dyn RendererProbe>,
    pub dialogs: Box<dyn Dialogs>,
    pub platform: Box<dyn PlatformSink>,
    pub surface: Box<dyn MenuSurface>,
    pub engines: Box<dyn EngineFactory>,
}

pub struct Frontend {
    settings: Arc<SettingsStore>,
    queue: CommandQueue,
    lifecycle: Lifecycle,
    collab: Collaborators,
    machine: Option<MachineConfig>,
    disc_paths: [Option<PathBuf>; DRIVE_COUNT],
    fullscreen_notice_shown: bool,
}

impl Frontend {
    pub fn new(collab: Collaborators, machine: Option<MachineConfig>) -> Self {
        Self {
            settings: Arc::new(SettingsStore::new()),
            queue: CommandQueue::new(),
            lifecycle: Lifecycle::new(),
            collab,
            machine,
            disc_paths: Default::default(),
            fullscreen_notice_shown: false,
        }
    }

    /// Posting handle for the engine thread and OS callbacks
    pub fn command_sender(&self) -> CommandSender {
        self.queue.sender()
    }

    pub fn settings(&self) -> &SettingsStore {
        &self.settings
    }

    pub fn state(&self) -> LifecycleState {
        self.lifecycle.state()
    }

    pub fn is_terminated(&self) -> bool {
        self.lifecycle.state() == LifecycleState::Terminated
    }

    pub fn disc_path(&self, drive: usize) -> Option<&Path> {
        self.disc_paths.get(drive)?.as_deref()
    }

    /// Load persisted settings and start the engine session.
    ///
    /// With no machine configuration known yet, the configuration selector
    /// runs first; cancelling it terminates the session, which at startup
    /// means the process should exit.
    pub fn start(&mut self) -> Result<(), ControlError> {
        self.collab.config_store.load(&self.settings);

        if self.machine.is_none() {
            self.lifecycle.begin_selection();
            match self.collab.config_selector.select(None) {
                Some(config) => self.machine = Some(config),
                None => {
                    self.lifecycle.terminate();
                    return Err(ControlError::SelectionCancelled);
                }
            }
        }
        self.launch_engine()
    }

    fn launch_engine(&mut self) -> Result<(), ControlError> {
        let config = self.machine.as_ref().ok_or(ControlError::NotRunning)?;
        info!("Starting engine session for machine {:?}", config.name);
        let engine = self.collab.engines.create(
            config,
            Arc::clone(&self.settings),
            self.queue.sender(),
        );
        self.lifecycle.launch(engine)
    }

    /// Service one queued command, if any. Returns whether a command was
    /// handled, so the caller can interleave with its own event loop.
    pub fn poll(&mut self) -> Result<bool, ControlError> {
        let Some(command) = self.queue.drain() else {
            return Ok(false);
        };

        match command {
            Command::StopEmulation => self.stop_emulation()?,
            Command::PopupMenu => {
                // Refresh right before showing, so the popup is never stale
                self.refresh_presentation();
                self.collab.surface.popup();
            }
            Command::RefreshMenuState => self.refresh_presentation(),
            Command::ReportError(message) => self.collab.dialogs.error(&message),
            Command::ForwardPlatformMessage {
                target,
                code,
                param_a,
                param_b,
            } => self.collab.platform.forward(target, code, param_a, param_b),
        }
        Ok(true)
    }

    /// Halt the running session, tear down the debugger, then either start
    /// a freshly selected configuration or terminate if the user cancels.
    pub fn stop_emulation(&mut self) -> Result<(), ControlError> {
        self.detach_debugger();
        if self.lifecycle.has_session() {
            self.lifecycle.stop()?;
        }
        self.lifecycle.begin_selection();

        match self.collab.config_selector.select(self.machine.as_ref()) {
            Some(config) => {
                self.machine = Some(config);
                self.launch_engine()
            }
            None => {
                self.collab.config_store.save(&self.settings);
                self.lifecycle.terminate();
                Ok(())
            }
        }
    }

    pub fn pause(&mut self) -> Result<(), ControlError> {
        self.lifecycle.pause()
    }

    pub fn resume(&mut self) -> Result<(), ControlError> {
        self.lifecycle.resume()
    }

    /// Dispatch a command by its stable symbolic name. Unknown symbols are
    /// ignored, not errors: the active UI surface may carry identifiers
    /// this core does not know.
    pub fn dispatch_symbol(&mut self, symbol: &str) -> Result<(), ControlError> {
        match MenuId::from_symbol(symbol) {
            Some(id) => self.dispatch(id),
            None => {
                debug!("Ignoring unknown command identifier {symbol:?}");
                Ok(())
            }
        }
    }

    /// Dispatch one discrete UI command
    pub fn dispatch(&mut self, id: MenuId) -> Result<(), ControlError> {
        let Binding { op, notify } = binding(id);
        match op {
            Op::Toggle(target) => {
                let on = match target {
                    ToggleTarget::SoundEnable => self.settings.toggle_sound_enabled(),
                    ToggleTarget::Stereo => self.settings.toggle_stereo(),
                };
                self.collab.surface.set_checked(id, on);
            }
            Op::Set(change) => {
                apply_change(&self.settings, change);
                // Siblings in the exclusive group are unchecked on the
                // next presentation refresh
                self.collab.surface.set_checked(id, true);
                if let Some(notify) = notify {
                    let call = self.engine_call(notify);
                    self.send_engine(call);
                }
            }
            Op::Action(kind) => self.run_action(kind)?,
        }
        Ok(())
    }

    /// Re-synchronize every checkable element with the current state
    pub fn refresh_presentation(&mut self) {
        let attached = self.lifecycle.debug_flags().contains(DebugFlags::ATTACHED);
        presentation::refresh(
            self.collab.surface.as_mut(),
            &self.settings,
            attached,
            self.collab.renderer_probe.as_ref(),
        );
    }

    fn engine_call(&self, notify: Notify) -> EngineCall {
        match notify {
            Notify::RendererReset => EngineCall::RendererReset,
            Notify::SoundFilterChanged => EngineCall::UpdateSoundFilter,
            Notify::PaletteChanged => EngineCall::RecomputePalette,
            Notify::DisplayModeChanged => EngineCall::SetDisplayMode(self.settings.display_mode()),
            Notify::ScanlineModeChanged => {
                EngineCall::SetScanlineDoubling(self.settings.scanline_doubling())
            }
        }
    }

    fn send_engine(&mut self, call: EngineCall) {
        if let Err(err) = self.lifecycle.notify(call) {
            warn!("Dropping engine notification, no live session: {err}");
        }
    }

    fn run_action(&mut self, kind: ActionKind) -> Result<(), ControlError> {
        match kind {
            ActionKind::Exit => self.stop_emulation()?,
            ActionKind::Reset => self.send_engine(EngineCall::Reset),
            ActionKind::ChangeDisc(drive) => {
                let Some(drive) = self.existing_drive(drive) else {
                    return Ok(());
                };
                self.change_disc(drive);
            }
            ActionKind::EjectDisc(drive) => {
                let Some(drive) = self.existing_drive(drive) else {
                    return Ok(());
                };
                self.disc_paths[drive] = None;
                self.send_engine(EngineCall::EjectDisc { drive });
            }
            ActionKind::Configure => self.configure()?,
            ActionKind::EnterFullscreen => self.enter_fullscreen()?,
            ActionKind::ToggleDebugger => self.toggle_debugger()?,
            ActionKind::RequestBreak => self.lifecycle.set_break_requested(true),
        }
        Ok(())
    }

    fn change_disc(&mut self, drive: usize) {
        let current = self.disc_paths[drive].as_deref();
        match self.collab.disc_picker.pick(drive, current) {
            Some(image) => {
                self.disc_paths[drive] = Some(image.clone());
                self.send_engine(EngineCall::ChangeDisc { drive, image });
            }
            None => debug!("Disc change for drive {drive} cancelled"),
        }
    }

    fn configure(&mut self) -> Result<(), ControlError> {
        // Conditionally disabled while the debugger holds the machine
        if self.lifecycle.debug_flags().contains(DebugFlags::BREAK) {
            return Ok(());
        }
        self.lifecycle.pause()?;
        self.collab.settings_dialog.edit(&self.settings);
        self.collab.config_store.save(&self.settings);
        self.lifecycle.resume()
    }

    fn enter_fullscreen(&mut self) -> Result<(), ControlError> {
        if self.lifecycle.debug_flags().contains(DebugFlags::BREAK) {
            return Ok(());
        }
        if !self.fullscreen_notice_shown {
            self.fullscreen_notice_shown = true;
            self.lifecycle.pause()?;
            self.collab.dialogs.notice(FULLSCREEN_NOTICE);
            self.lifecycle.resume()?;
        }
        self.send_engine(EngineCall::EnterFullscreen);
        Ok(())
    }

    fn toggle_debugger(&mut self) -> Result<(), ControlError> {
        if !self.lifecycle.debug_flags().contains(DebugFlags::ATTACHED) {
            self.lifecycle.pause()?;
            self.lifecycle.set_debugger_attached(true);
            self.lifecycle.set_break_requested(true);
            self.collab.debugger.start();
            self.collab.console.show();
            self.lifecycle.resume()?;
        } else {
            self.lifecycle.set_break_requested(false);
            self.collab.console.hide();
            self.collab.debugger.end();
            self.lifecycle.set_debugger_attached(false);
        }

        let attached = self.lifecycle.debug_flags().contains(DebugFlags::ATTACHED);
        self.collab.surface.set_checked(MenuId::DebuggerEnable, attached);
        Ok(())
    }

    /// Identifiers naming a drive this machine does not have are ignored,
    /// like any other identifier with no matching case
    fn existing_drive(&self, drive: u8) -> Option<usize> {
        let drive = usize::from(drive);
        if drive >= DRIVE_COUNT {
            debug!("Ignoring disc command for nonexistent drive {drive}");
            return None;
        }
        Some(drive)
    }

    fn detach_debugger(&mut self) {
        self.collab.console.hide();
        if self.lifecycle.debug_flags().contains(DebugFlags::ATTACHED) {
            self.collab.debugger.end();
        }
        self.lifecycle.set_break_requested(false);
        self.lifecycle.set_debugger_attached(false);
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::{Arc, Mutex};

    use mockall::mock;

    use super::*;
    use crate::session::Engine;
    use crate::settings::{DisplayMode, RendererKind, SoundFilter, SOUND_GAIN_STEP_DB};

    mock! {
        TestDialogs {}

        impl Dialogs for TestDialogs {
            fn error(&mut self, message: &str);
            fn notice(&mut self, message: &str);
        }
    }

    struct NullConfigStore;
    impl ConfigStore for NullConfigStore {
        fn load(&self, _settings: &SettingsStore) {}
        fn save(&self, _settings: &SettingsStore) {}
    }

    /// Selector scripted with one answer per invocation
    struct ScriptedSelector {
        answers: Mutex<Vec<Option<MachineConfig>>>,
    }
    impl ScriptedSelector {
        fn new(mut answers: Vec<Option<MachineConfig>>) -> Self {
            answers.reverse();
            Self {
                answers: Mutex::new(answers),
            }
        }
    }
    impl ConfigSelector for ScriptedSelector {
        fn select(&mut self, _current: Option<&MachineConfig>) -> Option<MachineConfig> {
            self.answers
                .lock()
                .unwrap()
                .pop()
                .expect("selector invoked more often than scripted")
        }
    }

    struct NullSettingsDialog;
    impl SettingsDialog for NullSettingsDialog {
        fn edit(&mut self, _settings: &SettingsStore) {}
    }

    struct ScriptedPicker {
        answer: Option<PathBuf>,
        seen_current: Arc<Mutex<Vec<Option<PathBuf>>>>,
    }
    impl DiscPicker for ScriptedPicker {
        fn pick(&mut self, _drive: usize, current: Option<&Path>) -> Option<PathBuf> {
            self.seen_current
                .lock()
                .unwrap()
                .push(current.map(Path::to_path_buf));
            self.answer.clone()
        }
    }

    #[derive(Default)]
    struct CountingDebugger {
        starts: Arc<AtomicUsize>,
        ends: Arc<AtomicUsize>,
    }
    impl Debugger for CountingDebugger {
        fn start(&mut self) {
            self.starts.fetch_add(1, Ordering::SeqCst);
        }
        fn end(&mut self) {
            self.ends.fetch_add(1, Ordering::SeqCst);
        }
    }

    struct NullConsole;
    impl ConsoleSurface for NullConsole {
        fn show(&mut self) {}
        fn hide(&mut self) {}
    }

    struct AllRenderers;
    impl RendererProbe for AllRenderers {
        fn available(&self, _kind: RendererKind) -> bool {
            true
        }
    }

    struct NullPlatform;
    impl PlatformSink for NullPlatform {
        fn forward(&mut self, _target: usize, _code: u32, _param_a: isize, _param_b: isize) {}
    }

    struct NullSurface;
    impl MenuSurface for NullSurface {
        fn set_checked(&mut self, _id: MenuId, _checked: bool) {}
        fn set_enabled(&mut self, _id: MenuId, _enabled: bool) {}
    }

    struct IdleEngine;
    impl Engine for IdleEngine {
        fn run_slice(&mut self) {
            std::thread::sleep(std::time::Duration::from_millis(1));
        }
        fn reset(&mut self) {}
        fn renderer_reset(&mut self) {}
        fn update_sound_filter(&mut self) {}
        fn recompute_palette(&mut self) {}
        fn set_display_mode(&mut self, _mode: DisplayMode) {}
        fn set_scanline_doubling(&mut self, _doubled: bool) {}
        fn enter_fullscreen(&mut self) {}
        fn change_disc(&mut self, _drive: usize, _image: PathBuf) {}
        fn eject_disc(&mut self, _drive: usize) {}
    }

    struct IdleEngineFactory;
    impl EngineFactory for IdleEngineFactory {
        fn create(
            &mut self,
            _config: &MachineConfig,
            _settings: Arc<SettingsStore>,
            _commands: CommandSender,
        ) -> Box<dyn Engine> {
            Box::new(IdleEngine)
        }
    }

    fn collaborators() -> Collaborators {
        Collaborators {
            config_store: Box::new(NullConfigStore),
            config_selector: Box::new(ScriptedSelector::new(vec![])),
            settings_dialog: Box::new(NullSettingsDialog),
            disc_picker: Box::new(ScriptedPicker {
                answer: None,
                seen_current: Arc::default(),
            }),
            debugger: Box::new(CountingDebugger::default()),
            console: Box::new(NullConsole),
            renderer_probe: Box::new(AllRenderers),
            dialogs: Box::new(MockTestDialogs::new()),
            platform: Box::new(NullPlatform),
            surface: Box::new(NullSurface),
            engines: Box::new(IdleEngineFactory),
        }
    }

    #[test]
    fn test_toggle_dispatch_is_involutive() {
        let mut frontend = Frontend::new(collaborators(), None);
        let before = frontend.settings().sound_enabled();

        frontend.dispatch(MenuId::SoundEnable).unwrap();
        assert_eq!(frontend.settings().sound_enabled(), !before);

        frontend.dispatch(MenuId::SoundEnable).unwrap();
        assert_eq!(frontend.settings().sound_enabled(), before);
    }

    #[test]
    fn test_exclusive_choice_records_single_value() {
        let mut frontend = Frontend::new(collaborators(), None);

        frontend.dispatch(MenuId::VideoTv).unwrap();
        assert_eq!(frontend.settings().display_mode(), DisplayMode::Tv);

        frontend.dispatch(MenuId::VideoNoBorders).unwrap();
        assert_eq!(frontend.settings().display_mode(), DisplayMode::NoBorders);
    }

    #[test]
    fn test_sound_gain_dispatch_touches_only_gain() {
        let mut frontend = Frontend::new(collaborators(), None);

        frontend.dispatch(MenuId::SoundGain(6)).unwrap();

        let settings = frontend.settings();
        assert_eq!(settings.sound_gain_db(), 6 * SOUND_GAIN_STEP_DB);
        assert!(settings.sound_enabled());
        assert!(settings.stereo());
        assert_eq!(settings.sound_filter(), SoundFilter::Original);
    }

    #[test]
    fn test_unknown_symbol_is_ignored() {
        let mut frontend = Frontend::new(collaborators(), None);
        frontend.dispatch_symbol("menu.that.does.not.exist").unwrap();
        frontend.dispatch_symbol("sound.gain.3").unwrap();
        assert_eq!(frontend.settings().sound_gain_db(), 3 * SOUND_GAIN_STEP_DB);
    }

    #[test]
    fn test_cancelled_disc_pick_is_a_no_op() {
        let seen = Arc::new(Mutex::new(vec![]));
        let mut collab = collaborators();
        collab.disc_picker = Box::new(ScriptedPicker {
            answer: None,
            seen_current: Arc::clone(&seen),
        });

        let mut frontend = Frontend::new(collab, None);
        frontend.dispatch(MenuId::DiscChange(2)).unwrap();

        assert_eq!(frontend.disc_path(2), None);
        assert_eq!(seen.lock().unwrap().as_slice(), &[None]);
    }

    #[test]
    fn test_disc_pick_remembers_path_for_next_dialog() {
        let seen = Arc::new(Mutex::new(vec![]));
        let image = PathBuf::from("games/zarch.adf");
        let mut collab = collaborators();
        collab.disc_picker = Box::new(ScriptedPicker {
            answer: Some(image.clone()),
            seen_current: Arc::clone(&seen),
        });

        let mut frontend = Frontend::new(collab, None);
        frontend.dispatch(MenuId::DiscChange(0)).unwrap();
        assert_eq!(frontend.disc_path(0), Some(image.as_path()));

        frontend.dispatch(MenuId::DiscChange(0)).unwrap();
        let seen = seen.lock().unwrap();
        assert_eq!(seen.as_slice(), &[None, Some(image)]);
    }

    #[test]
    fn test_disc_eject_clears_remembered_path() {
        let mut collab = collaborators();
        collab.disc_picker = Box::new(ScriptedPicker {
            answer: Some(PathBuf::from("games/lander.adf")),
            seen_current: Arc::default(),
        });

        let mut frontend = Frontend::new(collab, None);
        frontend.dispatch(MenuId::DiscChange(1)).unwrap();
        assert!(frontend.disc_path(1).is_some());

        frontend.dispatch(MenuId::DiscEject(1)).unwrap();
        assert_eq!(frontend.disc_path(1), None);
    }

    #[test]
    fn test_queued_error_displays_exactly_once() {
        let mut dialogs = MockTestDialogs::new();
        dialogs
            .expect_error()
            .withf(|message| message == "disk failure")
            .times(1)
            .return_const(());

        let mut collab = collaborators();
        collab.dialogs = Box::new(dialogs);
        let mut frontend = Frontend::new(collab, None);

        let sender = frontend.command_sender();
        let handle = std::thread::spawn(move || sender.report_error("disk failure"));
        handle.join().unwrap();

        assert!(frontend.poll().unwrap());
        assert!(!frontend.poll().unwrap());
    }

    #[test]
    fn test_nonexistent_drive_is_ignored() {
        let seen = Arc::new(Mutex::new(vec![]));
        let mut collab = collaborators();
        collab.disc_picker = Box::new(ScriptedPicker {
            answer: Some(PathBuf::from("games/elite.adf")),
            seen_current: Arc::clone(&seen),
        });

        let mut frontend = Frontend::new(collab, None);
        frontend.dispatch(MenuId::DiscChange(200)).unwrap();
        frontend.dispatch(MenuId::DiscEject(200)).unwrap();

        // No picker dialog opened, no path remembered
        assert!(seen.lock().unwrap().is_empty());
        assert_eq!(frontend.disc_path(200), None);
    }

    #[test]
    fn test_fullscreen_notice_shows_exactly_once() {
        let mut dialogs = MockTestDialogs::new();
        dialogs.expect_notice().times(1).return_const(());

        let mut collab = collaborators();
        collab.dialogs = Box::new(dialogs);
        collab.config_selector = Box::new(ScriptedSelector::new(vec![None]));

        let mut frontend = Frontend::new(collab, Some(MachineConfig::new("A310")));
        frontend.start().unwrap();

        frontend.dispatch(MenuId::VideoFullscreen).unwrap();
        frontend.dispatch(MenuId::VideoFullscreen).unwrap();

        frontend.stop_emulation().unwrap();
    }

    #[test]
    fn test_configure_is_ignored_while_in_break() {
        // RequestBreak needs no session, so an unstarted frontend works:
        // if Configure were not ignored, the pause below would fail with
        // InvalidState instead of returning Ok.
        let mut frontend = Frontend::new(collaborators(), None);
        frontend.dispatch(MenuId::DebuggerBreak).unwrap();
        frontend.dispatch(MenuId::SettingsConfigure).unwrap();
    }

    #[test]
    fn test_fullscreen_is_ignored_while_in_break() {
        // Same guard as Configure: with the break flag set the dispatch
        // returns Ok without pausing (which would fail with InvalidState
        // here) and without showing the first-time notice. The default
        // dialogs mock panics on any unexpected notice call.
        let mut frontend = Frontend::new(collaborators(), None);
        frontend.dispatch(MenuId::DebuggerBreak).unwrap();
        frontend.dispatch(MenuId::VideoFullscreen).unwrap();
    }

    #[test]
    fn test_startup_selection_cancel_terminates() {
        let mut collab = collaborators();
        collab.config_selector = Box::new(ScriptedSelector::new(vec![None]));
        let mut frontend = Frontend::new(collab, None);

        match frontend.start() {
            Err(ControlError::SelectionCancelled) => {}
            other => panic!("expected SelectionCancelled, got {other:?}"),
        }
        assert!(frontend.is_terminated());
    }

    #[test]
    fn test_stop_emulation_restarts_with_new_selection() {
        let mut collab = collaborators();
        collab.config_selector = Box::new(ScriptedSelector::new(vec![
            Some(MachineConfig::new("A3010")),
            None,
        ]));
        let mut frontend = Frontend::new(collab, Some(MachineConfig::new("A310")));

        frontend.start().unwrap();
        assert_eq!(frontend.state(), LifecycleState::Running);

        // First stop: a new machine is selected, session restarts
        frontend.stop_emulation().unwrap();
        assert_eq!(frontend.state(), LifecycleState::Running);

        // Second stop: selection cancelled, session terminates
        frontend.stop_emulation().unwrap();
        assert!(frontend.is_terminated());
    }

    #[test]
    fn test_debugger_toggle_attaches_and_detaches() {
        let starts = Arc::new(AtomicUsize::new(0));
        let ends = Arc::new(AtomicUsize::new(0));
        let mut collab = collaborators();
        collab.debugger = Box::new(CountingDebugger {
            starts: Arc::clone(&starts),
            ends: Arc::clone(&ends),
        });
        collab.config_selector = Box::new(ScriptedSelector::new(vec![None]));

        let mut frontend = Frontend::new(collab, Some(MachineConfig::new("A310")));
        frontend.start().unwrap();

        frontend.dispatch(MenuId::DebuggerEnable).unwrap();
        assert_eq!(starts.load(Ordering::SeqCst), 1);
        assert_eq!(frontend.state(), LifecycleState::Running);

        frontend.dispatch(MenuId::DebuggerEnable).unwrap();
        assert_eq!(ends.load(Ordering::SeqCst), 1);

        frontend.stop_emulation().unwrap();
    }
}
