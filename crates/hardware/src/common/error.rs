//! Error definitions.
//!
//! The codec never fails: unrecognized encodings decode to `UNKNOWN`. The only
//! validated boundaries are direct register indexing and configuration loading.

use thiserror::Error;

/// Errors raised by direct (non-port) register accessors.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum RegisterError {
    /// The requested register index is outside `[0, num_regs - 1]`.
    #[error("register index {index} out of range [0, {}]", num_regs - 1)]
    IndexOutOfRange {
        /// The rejected index.
        index: usize,
        /// Number of registers in the file.
        num_regs: usize,
    },
}

/// Errors raised while loading or validating a [`Config`](crate::config::Config).
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration file could not be read.
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),

    /// The configuration text is not valid JSON for the config schema.
    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),

    /// The register width is outside `1..=32`.
    #[error("register width {0} is outside 1..=32")]
    InvalidWidth(u32),
}
