//! Core architectural components.

/// Architectural register storage.
pub mod arch;
