use std::fmt;

/// The numeral layout handed to the renderer is corrupt.
///
/// Layout always produces twelve positions, so seeing this means a defect in
/// the layout code (or hand-built measurements). The frame is abandoned before
/// anything is recorded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayoutError {
    pub found: usize,
}

impl fmt::Display for LayoutError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "incorrect number of numeral positions on the clock face: expected {}, found {}",
            super::layout::NUMERAL_COUNT,
            self.found
        )
    }
}

impl std::error::Error for LayoutError {}

/// A saved-state record could not be decoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SnapshotError {
    /// The record is shorter than the fixed layout.
    Truncated { len: usize },
    /// Bytes follow the last field.
    TrailingBytes { len: usize },
    /// The paused flag is neither 0 nor 1.
    InvalidPausedFlag(u8),
}

impl fmt::Display for SnapshotError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let expected = super::snapshot::ClockSnapshot::ENCODED_LEN;
        match self {
            SnapshotError::Truncated { len } => {
                write!(f, "clock snapshot truncated: {len} bytes, expected {expected}")
            }
            SnapshotError::TrailingBytes { len } => {
                write!(f, "clock snapshot has trailing bytes: {len} bytes, expected {expected}")
            }
            SnapshotError::InvalidPausedFlag(b) => {
                write!(f, "clock snapshot paused flag must be 0 or 1, got {b}")
            }
        }
    }
}

impl std::error::Error for SnapshotError {}

/// A configuration attribute was rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigError {
    pub attribute: String,
    pub message: String,
}

impl ConfigError {
    pub(crate) fn new(attribute: impl Into<String>, message: impl Into<String>) -> Self {
        Self { attribute: attribute.into(), message: message.into() }
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "clock attribute `{}`: {}", self.attribute, self.message)
    }
}

impl std::error::Error for ConfigError {}
