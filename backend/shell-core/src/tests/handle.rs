// Unit tests for the handle file location

use crate::handle::file_store::{server_handle_path, user_library_dir};

use std::path::Path;

/// **VALUE**: Verifies the macOS handle path sits directly under `~/Library`.
///
/// **WHY THIS MATTERS**: The server launcher writes `~/Library/MouseHero/server.pid`. Looking
/// under `~/Library/Application Support` finds nothing, and the server outlives every quit.
///
/// **BUG THIS CATCHES**: Would catch the base directory drifting back to the platform data
/// directory on macOS.
#[test]
fn given_home_dir_when_composing_library_handle_path_then_skips_application_support() {
    // GIVEN
    let home = Path::new("/Users/hero");

    // WHEN
    let path = server_handle_path(&user_library_dir(home));

    // THEN
    assert_eq!(path, Path::new("/Users/hero/Library/MouseHero/server.pid"));
    assert!(
        !path.to_string_lossy().contains("Application Support"),
        "Unexpected path {path:?}"
    );
}
