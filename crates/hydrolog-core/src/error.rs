//! Core error types for hydrolog-core.
//!
//! Tracker errors are recoverable by design: they leave all tracker state
//! unchanged and carry the user-facing message to display. Config errors
//! belong to the preferences layer and never surface from tracker commands.

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for hydrolog-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Tracker command errors (recoverable, user-correctable)
    #[error("Tracker error: {0}")]
    Tracker(#[from] TrackerError),

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

/// Errors returned by tracker commands.
///
/// Both variants are expected outcomes of validated user input: the command
/// mutates nothing and the caller displays the message.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TrackerError {
    /// Intake amount was non-positive or not a number.
    #[error("Enter a number like 0.5 or 1.0")]
    InvalidInput,

    /// Proposed goal is below what is already logged today.
    #[error("You can't lower the goal below what you've already logged today.")]
    GoalTooLow {
        proposed_units: u32,
        logged_units: f64,
    },
}

/// Configuration-specific errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to load configuration
    #[error("Failed to load configuration from {path}: {message}")]
    LoadFailed { path: PathBuf, message: String },

    /// Failed to save configuration
    #[error("Failed to save configuration to {path}: {message}")]
    SaveFailed { path: PathBuf, message: String },

    /// Invalid configuration value
    #[error("Invalid configuration value for '{key}': {message}")]
    InvalidValue { key: String, message: String },

    /// Failed to parse configuration
    #[error("Failed to parse configuration: {0}")]
    ParseFailed(String),
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;
