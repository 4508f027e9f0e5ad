use shell_core::error::login_item::LoginItemError;

use common::ErrorLocation;

use std::error::Error;
use std::io::Error as IoError;
use std::panic::Location;

/// **VALUE**: Verifies the unavailable and service failures stay distinguishable.
///
/// **WHY THIS MATTERS**: The bridge maps "unavailable" to `NotImplemented` and every other
/// failure to an error reply. Mixing them up would hide real failures or show bogus ones.
///
/// **BUG THIS CATCHES**: Would catch `is_unavailable()` matching the wrong variant.
#[test]
fn given_login_item_errors_when_classified_then_unavailable_is_distinct() {
    // GIVEN
    let unavailable = LoginItemError::Unavailable {
        message: String::from("No login item service in this build"),
        location: ErrorLocation::from(Location::caller()),
    };
    let service = LoginItemError::Service {
        message: String::from("registry locked"),
        location: ErrorLocation::from(Location::caller()),
        source: Box::new(IoError::other("locked")),
    };

    // THEN
    assert!(unavailable.is_unavailable());
    assert!(!service.is_unavailable());
    assert!(service.source().is_some());
    assert!(
        unavailable
            .to_string()
            .contains("Login Item Service Unavailable Error")
    );
}
