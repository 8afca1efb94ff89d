//! Environment construction errors.
//!
//! These are the only errors a caller of the core ever sees. They happen
//! before an episode starts; nothing inside a tick can produce one.

use crate::core::GridCoord;

/// Result type alias for environment construction.
pub type Result<T> = std::result::Result<T, EnvironmentError>;

/// Malformed map description.
#[derive(Debug, thiserror::Error)]
pub enum EnvironmentError {
    /// The map text has no rows.
    #[error("map description is empty")]
    Empty,

    /// A row differs in length from the first row.
    #[error("row {row} has {found} cells, expected {expected}")]
    InconsistentRowLength {
        /// Zero-based row index
        row: usize,
        /// Length of the first row
        expected: usize,
        /// Length of this row
        found: usize,
    },

    /// A character outside `#`, `.`, `S`, `E`.
    #[error("invalid map character {found:?} at row {row}, column {column}")]
    InvalidCharacter {
        /// Zero-based row index
        row: usize,
        /// Zero-based column index
        column: usize,
        /// Offending character
        found: char,
    },

    /// No `S` marker.
    #[error("map has no start cell ('S')")]
    MissingStart,

    /// No `E` marker.
    #[error("map has no goal cell ('E')")]
    MissingGoal,

    /// A marker appears more than once.
    #[error("map marker {marker:?} appears twice: at {first} and {second}")]
    DuplicateMarker {
        /// `S` or `E`
        marker: char,
        /// First occurrence
        first: GridCoord,
        /// Second occurrence
        second: GridCoord,
    },

    /// Procedural generator parameters cannot produce a map.
    #[error("invalid generator config: {0}")]
    InvalidGeneratorConfig(String),

    /// Map file could not be read.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl EnvironmentError {
    /// Short error code for logging.
    pub fn code(&self) -> &'static str {
        match self {
            Self::Empty => "EMPTY",
            Self::InconsistentRowLength { .. } => "ROW_LENGTH",
            Self::InvalidCharacter { .. } => "INVALID_CHARACTER",
            Self::MissingStart => "MISSING_START",
            Self::MissingGoal => "MISSING_GOAL",
            Self::DuplicateMarker { .. } => "DUPLICATE_MARKER",
            Self::InvalidGeneratorConfig(_) => "INVALID_GENERATOR_CONFIG",
            Self::Io(_) => "IO",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = EnvironmentError::InconsistentRowLength {
            row: 3,
            expected: 20,
            found: 19,
        };
        assert_eq!(err.to_string(), "row 3 has 19 cells, expected 20");

        let err = EnvironmentError::DuplicateMarker {
            marker: 'S',
            first: GridCoord::new(1, 1),
            second: GridCoord::new(4, 2),
        };
        assert_eq!(
            err.to_string(),
            "map marker 'S' appears twice: at (1, 1) and (4, 2)"
        );
    }

    #[test]
    fn test_error_code() {
        assert_eq!(EnvironmentError::MissingGoal.code(), "MISSING_GOAL");
        assert_eq!(EnvironmentError::Empty.code(), "EMPTY");
    }
}
