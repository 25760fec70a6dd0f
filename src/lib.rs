pub mod algorithms;
pub mod command;
pub mod orders;

pub use collections;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// A data structure or expression algorithm refused the input
    #[error(transparent)]
    Collections(#[from] collections::Error),

    /// The line did not start with a known command
    #[error("Unknown command: {0}")]
    UnknownCommand(String),

    /// A command that needs an argument got none
    #[error("Missing argument for {0}")]
    MissingArgument(&'static str),

    /// A worker thread of the order queue panicked
    #[error("Worker thread panicked: {0}")]
    WorkerPanicked(&'static str),
}
