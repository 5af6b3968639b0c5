use core::fmt;
use std::error;
use std::io;

#[derive(Debug)]
pub enum ProcessingError {
    EmptyWindow,
}

impl fmt::Display for ProcessingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyWindow => write!(f, "Averaging window holds no samples for calculation"),
        }
    }
}

impl error::Error for ProcessingError {}

#[derive(Debug)]
pub enum SchedulerError {
    Spawn(io::Error),
}

impl fmt::Display for SchedulerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Spawn(e) => write!(f, "Failed to spawn warm-up timer thread: {e}"),
        }
    }
}

impl error::Error for SchedulerError {}

impl From<io::Error> for SchedulerError {
    fn from(e: io::Error) -> Self {
        Self::Spawn(e)
    }
}
