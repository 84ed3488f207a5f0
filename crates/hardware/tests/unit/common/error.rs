//! # Error Type Tests

use rv32i_core::Config;
use rv32i_core::common::{ConfigError, RegisterError};

#[test]
fn index_out_of_range_message() {
    let err = RegisterError::IndexOutOfRange {
        index: 32,
        num_regs: 32,
    };
    assert_eq!(err.to_string(), "register index 32 out of range [0, 31]");
}

#[test]
fn register_error_is_std_error() {
    fn assert_error<E: std::error::Error + Send + Sync + 'static>(_: &E) {}
    assert_error(&RegisterError::IndexOutOfRange {
        index: 40,
        num_regs: 32,
    });
}

#[test]
fn invalid_width_message() {
    assert_eq!(
        ConfigError::InvalidWidth(33).to_string(),
        "register width 33 is outside 1..=32"
    );
}

#[test]
fn parse_error_converts_from_serde_json() {
    let err = Config::from_json("{ not json").err();
    assert!(matches!(err, Some(ConfigError::Parse(_))));
    assert!(
        err.map(|e| e.to_string())
            .is_some_and(|msg| msg.starts_with("failed to parse config"))
    );
}

#[test]
fn io_error_converts_from_std() {
    let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
    let err: ConfigError = io.into();
    assert!(matches!(err, ConfigError::Io(_)));
    assert_eq!(err.to_string(), "failed to read config: missing");
}
