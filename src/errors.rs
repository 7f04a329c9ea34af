//! Frontend control errors
//!
//! All errors the control core can produce

use std::time::Duration;

use thiserror::Error;

use crate::session::LifecycleState;

/// Control core error type
#[derive(Debug, Error)]
pub enum ControlError {
    #[error("engine thread did not acknowledge pause within {0:?}, engine presumed hung")]
    PauseTimeout(Duration),

    #[error("operation requires the session to be {expected:?}, but it is {actual:?}")]
    InvalidState {
        expected: LifecycleState,
        actual: LifecycleState,
    },

    #[error("no engine session is running")]
    NotRunning,

    #[error("machine configuration selection was cancelled")]
    SelectionCancelled,

    #[error("engine thread terminated unexpectedly")]
    EngineGone,
}
