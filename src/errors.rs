/*!
 * Error types for the cuetrack library.
 *
 * This module contains custom error types for different parts of the
 * library, using the thiserror crate for ergonomic error definitions.
 */

use thiserror::Error;

/// Errors that can occur when decoding timestamps
#[derive(Error, Debug)]
pub enum TimestampError {
    /// Input did not match `HH:MM:SS` followed by `.` or `,` and a
    /// fractional-seconds field
    #[error("Malformed timestamp: {0}")]
    Malformed(String),
}

/// Errors that can occur when parsing caption text
#[derive(Error, Debug)]
pub enum ParseError {
    /// The caller supplied no caption data at all; this is the only
    /// hard failure the parser knows
    #[error("Required caption data not supplied")]
    EmptyInput,
}

/// Errors raised by track state handling
#[derive(Error, Debug)]
pub enum TrackError {
    /// Numeric mode value outside off/hidden/showing
    #[error("Illegal mode value for track: {0}")]
    InvalidMode(u8),

    /// Track kind string not in the allowed set
    #[error("You must use a valid kind when creating a track, got: {0}")]
    UnknownKind(String),

    /// Track index not present in the list
    #[error("No track at index {0}")]
    UnknownTrack(usize),
}

/// Main library error type that wraps all other errors
#[derive(Error, Debug)]
pub enum CaptionError {
    /// Error from the timestamp codec
    #[error("Timestamp error: {0}")]
    Timestamp(#[from] TimestampError),

    /// Error from caption parsing
    #[error("Parse error: {0}")]
    Parse(#[from] ParseError),

    /// Error from track state handling
    #[error("Track error: {0}")]
    Track(#[from] TrackError),

    /// Any other error
    #[error("Unknown error: {0}")]
    Unknown(String),
}

// Utility functions for error conversion
impl From<anyhow::Error> for CaptionError {
    fn from(error: anyhow::Error) -> Self {
        Self::Unknown(error.to_string())
    }
}
