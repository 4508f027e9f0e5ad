use crate::helpers::write_handle;

use shell_core::error::handle_store::HandleStoreError;
use shell_core::handle::{FileServerHandleStore, ServerHandleRepository, server_handle_path};

use std::fs;
use std::path::Path;

use tempfile::tempdir;

// ============================================================================
// FileServerHandleStore - reading the real handle file
// ============================================================================

/// **VALUE**: Verifies the deterministic `<base>/MouseHero/server.pid` layout.
///
/// **WHY THIS MATTERS**: The server launcher writes to this exact path. Any drift means the
/// shell never finds the server and leaks it at exit.
///
/// **BUG THIS CATCHES**: Would catch a renamed namespace or file name.
#[test]
fn given_base_dir_when_composing_path_then_uses_namespace_and_file_name() {
    // GIVEN
    let base = Path::new("/tmp/app-support");

    // WHEN
    let path = server_handle_path(base);

    // THEN
    assert_eq!(path, Path::new("/tmp/app-support/MouseHero/server.pid"));
    assert_eq!(
        FileServerHandleStore::with_base_dir(base).path().unwrap(),
        path
    );
}

/// **VALUE**: Verifies a missing handle file is a read error and `read()` gives `None`.
///
/// **WHY THIS MATTERS**: Most runs where the server was never started have no handle file.
///
/// **BUG THIS CATCHES**: Would catch a panic or a default pid on a missing file.
#[test]
fn given_missing_file_when_read_then_returns_none() {
    // GIVEN: Empty application-support directory
    let dir = tempdir().unwrap();
    let store = FileServerHandleStore::with_base_dir(dir.path());

    // WHEN
    let detailed = store.read_handle();
    let folded = store.read();

    // THEN
    assert!(matches!(detailed, Err(HandleStoreError::Read { .. })));
    assert!(folded.is_none());
}

/// **VALUE**: Verifies a handle written with a trailing newline is read correctly.
///
/// **WHY THIS MATTERS**: This is the common on-disk form.
///
/// **BUG THIS CATCHES**: Would catch reading only part of the file or skipping the trim.
#[test]
fn given_padded_handle_file_when_read_then_returns_pid() {
    // GIVEN
    let dir = tempdir().unwrap();
    write_handle(dir.path(), "  4242\n");
    let store = FileServerHandleStore::with_base_dir(dir.path());

    // WHEN
    let pid = store.read();

    // THEN
    assert_eq!(pid.map(|p| p.as_u32()), Some(4242));
}

/// **VALUE**: Verifies every read goes back to disk.
///
/// **WHY THIS MATTERS**: The launcher rewrites the handle whenever the server restarts. A
/// cached value would signal the old, possibly reused, pid.
///
/// **BUG THIS CATCHES**: Would catch memoization of the first read.
#[test]
fn given_handle_rewritten_when_read_again_then_returns_new_pid() {
    // GIVEN: A first handle
    let dir = tempdir().unwrap();
    write_handle(dir.path(), "1111");
    let store = FileServerHandleStore::with_base_dir(dir.path());
    assert_eq!(store.read().map(|p| p.as_u32()), Some(1111));

    // WHEN: The launcher rewrites it
    write_handle(dir.path(), "2222\n");

    // THEN: The new value is read
    assert_eq!(store.read().map(|p| p.as_u32()), Some(2222));
}

/// **VALUE**: Verifies a directory in place of the handle file is treated as unreadable.
///
/// **WHY THIS MATTERS**: Odd filesystem states must not crash shutdown.
///
/// **BUG THIS CATCHES**: Would catch an unwrap on `read_to_string`.
#[test]
fn given_directory_at_handle_path_when_read_then_returns_read_error() {
    // GIVEN
    let dir = tempdir().unwrap();
    fs::create_dir_all(server_handle_path(dir.path())).unwrap();
    let store = FileServerHandleStore::with_base_dir(dir.path());

    // WHEN
    let result = store.read_handle();

    // THEN
    assert!(matches!(result, Err(HandleStoreError::Read { .. })));
}

/// **VALUE**: Verifies malformed file contents surface as parse errors.
///
/// **WHY THIS MATTERS**: Distinguishing read and parse failures in logs shortens debugging,
/// even though both mean "nothing to terminate".
///
/// **BUG THIS CATCHES**: Would catch parse failures being reported as I/O failures.
#[test]
fn given_malformed_handle_file_when_read_then_returns_parse_error() {
    // GIVEN
    let dir = tempdir().unwrap();
    write_handle(dir.path(), "not-a-pid");
    let store = FileServerHandleStore::with_base_dir(dir.path());

    // WHEN
    let result = store.read_handle();

    // THEN
    assert!(matches!(result, Err(HandleStoreError::Parse { .. })));
}

/// **VALUE**: Verifies non-UTF-8 bytes are an unreadable handle, not a panic.
///
/// **WHY THIS MATTERS**: A partially written or corrupted file can contain arbitrary bytes.
///
/// **BUG THIS CATCHES**: Would catch lossy decoding that turns garbage into a pid.
#[test]
fn given_binary_handle_file_when_read_then_returns_none() {
    // GIVEN
    let dir = tempdir().unwrap();
    let path = write_handle(dir.path(), "");
    fs::write(&path, [0xff, 0xfe, 0x34, 0x32]).unwrap();
    let store = FileServerHandleStore::with_base_dir(dir.path());

    // WHEN / THEN
    assert!(store.read().is_none());
}
