use std::error::Error;
use std::fmt;
use std::io;

#[derive(Debug)]
pub enum ControllerError {
    /// The agent pool could not be built.
    Transport(Box<dyn Error + Send + Sync>),
    /// The scheduler thread could not be started.
    SpawnScheduler(io::Error),
    /// The scheduler thread is no longer running.
    Disconnected,
}

impl fmt::Display for ControllerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Transport(err) => write!(f, "failed to build agent pool: {}", err),
            Self::SpawnScheduler(err) => write!(f, "failed to start scheduler thread: {}", err),
            Self::Disconnected => write!(f, "scheduler thread has stopped"),
        }
    }
}

impl Error for ControllerError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Transport(err) => Some(err.as_ref()),
            Self::SpawnScheduler(err) => Some(err),
            Self::Disconnected => None,
        }
    }
}
