/// Emulator frontend control core

pub mod command;
pub mod dispatch;
pub mod errors;
pub mod frontend;
pub mod interfaces;
pub mod presentation;
pub mod session;
pub mod settings;

pub use command::{Command, CommandQueue, CommandSender};
pub use errors::ControlError;
pub use frontend::{Collaborators, Frontend};
pub use interfaces::MachineConfig;
pub use session::{DebugFlags, Engine, LifecycleState};
pub use settings::SettingsStore;
