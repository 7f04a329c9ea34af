//! Engine session lifecycle
//!
//! The engine runs on its own thread, producing audio and video in real
//! time. The control thread never touches the engine directly: it sends
//! control messages over a channel, and the engine thread applies them
//! between emulation slices. Pausing is a synchronous handshake, so that
//! once `pause` returns the control thread may show modal dialogs or
//! mutate shared state without racing the engine.

use std::path::PathBuf;
use std::thread::{self, JoinHandle};
use std::time::Duration;

use bitflags::bitflags;
use crossbeam_channel::{bounded, unbounded, Receiver, RecvTimeoutError, Sender, TryRecvError};
use log::{debug, error, info};

use crate::errors::ControlError;
use crate::settings::DisplayMode;

/// How long the control thread waits for the engine to reach its pause
/// point before declaring it hung
pub const DEFAULT_PAUSE_TIMEOUT: Duration = Duration::from_secs(5);

/// The real-time emulation engine, owned by the engine thread.
///
/// All methods besides `run_slice` are invoked on the engine thread in
/// response to queued [`EngineCall`]s, between slices, so implementations
/// never have to defend against concurrent control-thread access.
pub trait Engine: Send {
    /// Run one slice of emulation (typically up to the next frame), then
    /// return so pending control messages can be serviced
    fn run_slice(&mut self);

    /// Hard-reset the emulated machine
    fn reset(&mut self);

    /// Tear down and re-create the video renderer after a renderer or
    /// filtering change
    fn renderer_reset(&mut self);

    /// Recompute the audio output filter from the current settings
    fn update_sound_filter(&mut self);

    /// Recompute the display palette from the current settings
    fn recompute_palette(&mut self);

    fn set_display_mode(&mut self, mode: DisplayMode);

    fn set_scanline_doubling(&mut self, doubled: bool);

    fn enter_fullscreen(&mut self);

    fn change_disc(&mut self, drive: usize, image: PathBuf);

    fn eject_disc(&mut self, drive: usize);
}

/// A notification applied by the engine thread between slices
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineCall {
    Reset,
    RendererReset,
    UpdateSoundFilter,
    RecomputePalette,
    SetDisplayMode(DisplayMode),
    SetScanlineDoubling(bool),
    EnterFullscreen,
    ChangeDisc { drive: usize, image: PathBuf },
    EjectDisc { drive: usize },
}

enum EngineControl {
    /// Synchronous pause handshake: the engine acknowledges on the
    /// supplied channel once it has reached its suspension point
    Pause(Sender<()>),
    Resume,
    Call(EngineCall),
    Shutdown,
}

bitflags! {
    /// Debugger sub-state of a running session
    pub struct DebugFlags: u8 {
        /// A debugger session and its console surface are attached
        const ATTACHED = 0b0000_0001;
        /// Execution break requested by the user
        const BREAK = 0b0000_0010;
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LifecycleState {
    Uninitialized,
    SelectingConfiguration,
    Running,
    Paused,
    Stopping,
    Terminated,
}

/// Owns the engine thread and its start/stop/pause/resume transitions
pub struct Lifecycle {
    state: LifecycleState,
    session: Option<EngineSession>,
    pause_timeout: Duration,
    debug_flags: DebugFlags,
}

struct EngineSession {
    control_tx: Sender<EngineControl>,
    handle: Option<JoinHandle<()>>,
}

impl Lifecycle {
    pub fn new() -> Self {
        Self::with_pause_timeout(DEFAULT_PAUSE_TIMEOUT)
    }

    pub fn with_pause_timeout(pause_timeout: Duration) -> Self {
        Self {
            state: LifecycleState::Uninitialized,
            session: None,
            pause_timeout,
            debug_flags: DebugFlags::empty(),
        }
    }

    pub fn state(&self) -> LifecycleState {
        self.state
    }

    pub fn debug_flags(&self) -> DebugFlags {
        self.debug_flags
    }

    pub fn set_debugger_attached(&mut self, attached: bool) {
        self.debug_flags.set(DebugFlags::ATTACHED, attached);
    }

    pub fn set_break_requested(&mut self, requested: bool) {
        self.debug_flags.set(DebugFlags::BREAK, requested);
    }

    /// Enter configuration selection (no engine thread exists here)
    pub fn begin_selection(&mut self) {
        debug_assert!(self.session.is_none());
        self.state = LifecycleState::SelectingConfiguration;
    }

    pub fn terminate(&mut self) {
        debug_assert!(self.session.is_none());
        self.state = LifecycleState::Terminated;
    }

    /// Spawn the engine thread and transition to `Running`
    pub fn launch(&mut self, engine: Box<dyn Engine>) -> Result<(), ControlError> {
        match self.state {
            LifecycleState::Uninitialized
            | LifecycleState::SelectingConfiguration
            | LifecycleState::Stopping => {}
            actual => {
                return Err(ControlError::InvalidState {
                    expected: LifecycleState::SelectingConfiguration,
                    actual,
                })
            }
        }

        let (control_tx, control_rx) = unbounded();
        let handle = thread::Builder::new()
            .name("engine".to_string())
            .spawn(move || engine_thread(engine, control_rx))
            .map_err(|_| ControlError::EngineGone)?;

        info!("Engine thread started");
        self.session = Some(EngineSession {
            control_tx,
            handle: Some(handle),
        });
        self.state = LifecycleState::Running;
        Ok(())
    }

    /// Pause the engine thread and wait until it has reached its
    /// suspension point.
    ///
    /// A timeout means the engine thread is presumed hung. That is a
    /// fatal condition: mutating shared state while the engine still runs
    /// is undefined by design, so the caller must abort whatever modal
    /// flow prompted the pause.
    pub fn pause(&mut self) -> Result<(), ControlError> {
        if self.state != LifecycleState::Running {
            return Err(ControlError::InvalidState {
                expected: LifecycleState::Running,
                actual: self.state,
            });
        }
        let session = self.session.as_ref().ok_or(ControlError::NotRunning)?;

        let (ack_tx, ack_rx) = bounded(1);
        session
            .control_tx
            .send(EngineControl::Pause(ack_tx))
            .map_err(|_| ControlError::EngineGone)?;

        match ack_rx.recv_timeout(self.pause_timeout) {
            Ok(()) => {
                debug!("Engine thread paused");
                self.state = LifecycleState::Paused;
                Ok(())
            }
            Err(RecvTimeoutError::Timeout) => {
                error!(
                    "Engine thread did not reach its pause point within {:?}; \
                     presumed hung",
                    self.pause_timeout
                );
                Err(ControlError::PauseTimeout(self.pause_timeout))
            }
            Err(RecvTimeoutError::Disconnected) => Err(ControlError::EngineGone),
        }
    }

    pub fn resume(&mut self) -> Result<(), ControlError> {
        if self.state != LifecycleState::Paused {
            return Err(ControlError::InvalidState {
                expected: LifecycleState::Paused,
                actual: self.state,
            });
        }
        let session = self.session.as_ref().ok_or(ControlError::NotRunning)?;
        session
            .control_tx
            .send(EngineControl::Resume)
            .map_err(|_| ControlError::EngineGone)?;
        debug!("Engine thread resumed");
        self.state = LifecycleState::Running;
        Ok(())
    }

    /// Queue an engine notification. Safe while the engine is running or
    /// paused; the engine thread applies it between slices.
    pub fn notify(&self, call: EngineCall) -> Result<(), ControlError> {
        let session = self.session.as_ref().ok_or(ControlError::NotRunning)?;
        session
            .control_tx
            .send(EngineControl::Call(call))
            .map_err(|_| ControlError::EngineGone)
    }

    /// Halt the engine thread and join it. The caller decides whether the
    /// next state is configuration selection or termination.
    pub fn stop(&mut self) -> Result<(), ControlError> {
        let mut session = self.session.take().ok_or(ControlError::NotRunning)?;
        self.state = LifecycleState::Stopping;

        // A disconnect here means the thread already exited; joining below
        // still collects it.
        let _ = session.control_tx.send(EngineControl::Shutdown);
        if let Some(handle) = session.handle.take() {
            handle.join().map_err(|_| ControlError::EngineGone)?;
        }
        info!("Engine thread stopped");
        Ok(())
    }

    pub fn is_running(&self) -> bool {
        self.state == LifecycleState::Running
    }

    pub fn has_session(&self) -> bool {
        self.session.is_some()
    }
}

impl Default for Lifecycle {
    fn default() -> Self {
        Self::new()
    }
}

fn engine_thread(mut engine: Box<dyn Engine>, control: Receiver<EngineControl>) {
    let mut paused = false;
    loop {
        loop {
            // While paused, block on the channel instead of spinning; the
            // pause acknowledgement has already been sent, so the control
            // thread is free to run modal dialogs meanwhile.
            let message = if paused {
                match control.recv() {
                    Ok(message) => Some(message),
                    Err(_) => return,
                }
            } else {
                match control.try_recv() {
                    Ok(message) => Some(message),
                    Err(TryRecvError::Empty) => None,
                    Err(TryRecvError::Disconnected) => return,
                }
            };

            match message {
                Some(EngineControl::Pause(ack)) => {
                    paused = true;
                    let _ = ack.send(());
                }
                Some(EngineControl::Resume) => paused = false,
                Some(EngineControl::Call(call)) => apply_call(engine.as_mut(), call),
                Some(EngineControl::Shutdown) => return,
                None => break,
            }
        }

        engine.run_slice();
    }
}

fn apply_call(engine: &mut dyn Engine, call: EngineCall) {
    match call {
        EngineCall::Reset => engine.reset(),
        EngineCall::RendererReset => engine.renderer_reset(),
        EngineCall::UpdateSoundFilter => engine.update_sound_filter(),
        EngineCall::RecomputePalette => engine.recompute_palette(),
        EngineCall::SetDisplayMode(mode) => engine.set_display_mode(mode),
        EngineCall::SetScanlineDoubling(doubled) => engine.set_scanline_doubling(doubled),
        EngineCall::EnterFullscreen => engine.enter_fullscreen(),
        EngineCall::ChangeDisc { drive, image } => engine.change_disc(drive, image),
        EngineCall::EjectDisc { drive } => engine.eject_disc(drive),
    }
}
