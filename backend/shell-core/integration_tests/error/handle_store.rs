use shell_core::error::ShellError;
use shell_core::error::handle_store::HandleStoreError;
use shell_core::handle::ProcessId;

use common::ErrorLocation;

use std::error::Error;
use std::io::{Error as IoError, ErrorKind};
use std::panic::Location;
use std::path::PathBuf;

/// **VALUE**: Verifies parse errors name the offending content and carry a location.
///
/// **WHY THIS MATTERS**: When the server is not stopped at exit, the debug log line is the
/// only clue to a corrupted handle file.
///
/// **BUG THIS CATCHES**: Would catch a Display that drops the message or the location.
#[test]
fn given_parse_error_when_formatted_then_includes_content_and_location() {
    // GIVEN
    let err = ProcessId::parse("not-a-pid").unwrap_err();

    // WHEN
    let error_string = err.to_string();

    // THEN
    assert!(error_string.contains("Handle Parse Error"));
    assert!(error_string.contains("not-a-pid"));
    assert!(error_string.contains(".rs:"), "Should include location: {error_string}");
}

/// **VALUE**: Verifies read errors expose the path and the I/O source.
///
/// **WHY THIS MATTERS**: "Permission denied" versus "not found" is the first thing to check
/// when the server survives shutdown.
///
/// **BUG THIS CATCHES**: Would catch removal of `#[source]` or the path from the message.
#[test]
fn given_read_error_when_inspected_then_exposes_path_and_source() {
    // GIVEN
    let err = HandleStoreError::Read {
        path: PathBuf::from("/tmp/MouseHero/server.pid"),
        location: ErrorLocation::from(Location::caller()),
        source: IoError::new(ErrorKind::PermissionDenied, "permission denied"),
    };

    // THEN
    assert!(err.to_string().contains("/tmp/MouseHero/server.pid"));
    assert!(err.source().is_some(), "Should expose the io::Error as source");
}

/// **VALUE**: Verifies handle store errors convert into the aggregate error transparently.
///
/// **WHY THIS MATTERS**: Callers that bubble errors with `?` must keep the original message.
///
/// **BUG THIS CATCHES**: Would catch a missing `#[from]` or a non-transparent wrapper.
#[test]
fn given_handle_store_error_when_converted_then_message_preserved() {
    let err = HandleStoreError::Unavailable {
        message: String::from("no data dir"),
        location: ErrorLocation::from(Location::caller()),
    };
    let expected = err.to_string();

    let shell: ShellError = err.into();

    assert_eq!(shell.to_string(), expected);
}
