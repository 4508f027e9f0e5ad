// Unit tests for error module
// Tests error serialization (critical for Tauri IPC)

use crate::error::MouseHeroError;

use common::ErrorLocation;

use shell_core::error::login_item::LoginItemError;

use std::io::Error as IoError;
use std::panic::Location;

/// **VALUE**: Tests that errors can be serialized (required for Tauri IPC).
///
/// **WHY THIS MATTERS**: Tauri commands must return serializable errors to send them
/// to the frontend. If serialization breaks, the frontend receives opaque errors.
///
/// **BUG THIS CATCHES**: Would catch if someone removes the `#[derive(Serialize)]`
/// or adds a non-serializable field.
#[test]
fn given_mousehero_error_when_serialized_then_succeeds() {
    // GIVEN: A MouseHeroError
    let err = MouseHeroError::Unsupported {
        message: String::from("Test"),
        location: ErrorLocation::from(Location::caller()),
    };

    // WHEN: Serializing to JSON
    let json = serde_json::to_value(&err).unwrap();

    // THEN: Tagged with the variant name and carrying the message
    assert_eq!(json["type"], "Unsupported");
    assert_eq!(json["data"]["message"], "Test");
}

/// **VALUE**: Verifies a missing login item service becomes `Unsupported`.
///
/// **WHY THIS MATTERS**: The frontend disables the toggle on `Unsupported` and shows an
/// error on anything else.
///
/// **BUG THIS CATCHES**: Would catch both login item failures collapsing into one variant.
#[test]
fn given_login_item_errors_when_converted_then_variants_are_distinct() {
    // GIVEN
    let unavailable = LoginItemError::Unavailable {
        message: String::from("No login item service in this build"),
        location: ErrorLocation::from(Location::caller()),
    };
    let failed = LoginItemError::Service {
        message: String::from("registry locked"),
        location: ErrorLocation::from(Location::caller()),
        source: Box::new(IoError::other("locked")),
    };

    // WHEN
    let unsupported = MouseHeroError::from_login_item(unavailable);
    let login_item = MouseHeroError::from_login_item(failed);

    // THEN
    assert!(matches!(unsupported, MouseHeroError::Unsupported { .. }));
    assert!(matches!(login_item, MouseHeroError::LoginItem { .. }));
}
