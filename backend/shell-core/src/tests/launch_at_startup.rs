// Unit tests for the platform login-item helpers

use crate::launch_at_startup::platform::login_item_app_path;

use std::path::{Path, PathBuf};

/// **VALUE**: Verifies the bundle directory is registered for macOS app bundles.
///
/// **WHY THIS MATTERS**: Registering the inner binary instead of the `.app` starts the app
/// without its bundle context at login.
///
/// **BUG THIS CATCHES**: Would catch the ancestor search returning the executable itself.
#[test]
fn given_executable_inside_app_bundle_when_resolving_path_then_returns_bundle() {
    // GIVEN: An executable inside a bundle
    let exe = Path::new("/Applications/MouseHero.app/Contents/MacOS/mousehero");

    // WHEN: Resolving the login item path
    let path = login_item_app_path(exe);

    // THEN: The bundle directory
    assert_eq!(path, PathBuf::from("/Applications/MouseHero.app"));
}

/// **VALUE**: Verifies plain executables are registered as-is.
///
/// **WHY THIS MATTERS**: Linux and Windows builds have no bundle; truncating the path would
/// register a directory.
///
/// **BUG THIS CATCHES**: Would catch an ancestor search that matches unrelated components.
#[test]
fn given_plain_executable_when_resolving_path_then_returns_executable() {
    // GIVEN: A plain executable
    let exe = Path::new("/usr/local/bin/mousehero");

    // WHEN: Resolving the login item path
    let path = login_item_app_path(exe);

    // THEN: Unchanged
    assert_eq!(path, exe.to_path_buf());
}
