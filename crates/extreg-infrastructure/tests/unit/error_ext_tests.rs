//! Tests for error context extension

use extreg_domain::error::Error;
use extreg_infrastructure::error_ext::ErrorContext;
use std::io;

#[test]
fn test_io_context() {
    let result: Result<(), io::Error> =
        Err(io::Error::new(io::ErrorKind::NotFound, "descriptor missing"));
    let with_context = result.io_context("Failed to read descriptor");

    match with_context.unwrap_err() {
        Error::Io { source, message } => {
            assert!(source.is_some());
            assert!(message.contains("Failed to read descriptor"));
            assert!(message.contains("descriptor missing"));
        }
        other => panic!("Expected Io error, got {other:?}"),
    }
}

#[test]
fn test_with_io_context_is_lazy() {
    let ok: Result<u32, io::Error> = Ok(3);
    let value = ok
        .with_io_context(|| -> String { panic!("context must not be built on success") })
        .unwrap();
    assert_eq!(value, 3);

    let failed: Result<u32, io::Error> =
        Err(io::Error::new(io::ErrorKind::PermissionDenied, "denied"));
    let err = failed
        .with_io_context(|| format!("Failed to read {}", "extreg.toml"))
        .unwrap_err();
    assert!(err.to_string().contains("Failed to read extreg.toml"));
}

#[test]
fn test_config_context() {
    let result: Result<(), io::Error> =
        Err(io::Error::new(io::ErrorKind::InvalidData, "bad key"));

    match result.config_context("Failed to extract configuration").unwrap_err() {
        Error::Configuration { source, message } => {
            assert!(source.is_some());
            assert!(message.starts_with("Failed to extract configuration"));
        }
        other => panic!("Expected Configuration error, got {other:?}"),
    }
}
