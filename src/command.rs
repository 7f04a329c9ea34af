//! Cross-thread command bridge
//!
//! The engine thread (and OS callbacks) request control-thread work by
//! posting commands here. The control thread drains one command per event
//! loop cycle and never blocks on the queue; posting never blocks either.

use crossbeam_channel::{unbounded, Receiver, Sender, TryRecvError};

/// A discrete request for the control thread
///
/// Owned by the queue from `post` until `drain` hands it to exactly one
/// handler.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Halt the running session and return to configuration selection
    StopEmulation,

    /// Open the context menu on the control thread
    PopupMenu,

    /// Re-synchronize menu element state with the settings store
    RefreshMenuState,

    /// Display a fully-formatted engine error on the control thread.
    /// The message is owned by the command, so the posting side may reuse
    /// its formatting buffer immediately.
    ReportError(String),

    /// Forward a native window message on the control thread
    ForwardPlatformMessage {
        target: usize,
        code: u32,
        param_a: isize,
        param_b: isize,
    },
}

/// Posting half of the command queue. Cheap to clone, safe to use from
/// any thread.
#[derive(Clone)]
pub struct CommandSender {
    tx: Sender<Command>,
}

impl CommandSender {
    /// Post a command for the control thread.
    ///
    /// Never blocks. Once the control side has shut down the command is
    /// silently dropped.
    pub fn post(&self, command: Command) {
        let _ = self.tx.send(command);
    }

    /// Convenience for engine error reporting
    pub fn report_error(&self, message: impl Into<String>) {
        self.post(Command::ReportError(message.into()));
    }
}

/// Consuming half of the command queue, owned by the control thread
pub struct CommandQueue {
    tx: Sender<Command>,
    rx: Receiver<Command>,
}

impl CommandQueue {
    pub fn new() -> Self {
        let (tx, rx) = unbounded();
        Self { tx, rx }
    }

    /// A new posting handle for the engine thread or OS callbacks
    pub fn sender(&self) -> CommandSender {
        CommandSender {
            tx: self.tx.clone(),
        }
    }

    /// Take the next pending command, without blocking
    pub fn drain(&self) -> Option<Command> {
        match self.rx.try_recv() {
            Ok(command) => Some(command),
            Err(TryRecvError::Empty) => None,
            // The queue holds its own sender, so this arm is unreachable in
            // practice; treat it as "nothing pending" rather than a fault.
            Err(TryRecvError::Disconnected) => None,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.rx.is_empty()
    }
}

impl Default for CommandQueue {
    fn default() -> Self {
        Self::new()
    }
}
