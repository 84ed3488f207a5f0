//! Shared helpers for the hardware tests.
