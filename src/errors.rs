// src/errors.rs

use thiserror::Error;

use crate::models::BoostMode;

/// Everything that can go wrong while applying or reading processor power
/// settings. Rendered to the user as `Error: <message>` at the outermost
/// boundary; the wording below is that message.
#[derive(Error, Debug)]
pub enum PowerError {
    #[error(
        "This function requires administrator privileges!\n\
         Please run the application as administrator."
    )]
    NotElevated,

    #[error(
        "Processor state cannot be set below 20%\n\
         This could cause system instability"
    )]
    ProcessorStateBelowFloor(i32),

    #[error("power type must be 'ac', 'dc', or 'both'")]
    InvalidRail(String),

    #[error("Invalid boost mode. Valid values are: {}", BoostMode::catalog())]
    InvalidBoostMode(i32),

    #[error("Maximum processor state must be between 0 and 100")]
    ProcessorStateOutOfRange(i32),

    #[error("Invalid input values\n{0}")]
    InvalidNumber(String),

    #[error("Failed to execute power settings command\n{0}")]
    CommandFailed(String),

    #[error("An unexpected error occurred while setting power settings\n{0}")]
    Unexpected(String),
}
