use shell_core::error::login_item::LoginItemError;
use shell_core::launch_at_startup::{
    IS_ENABLED_METHOD, InMemoryLoginItemService, LOGIN_ITEM_ERROR_CODE, LaunchAtStartupBridge,
    MethodCall, MethodResponse, SET_ENABLED_METHOD,
};

use serde_json::{Value, json};

fn bridge_with_service() -> LaunchAtStartupBridge {
    LaunchAtStartupBridge::new(Some(Box::new(InMemoryLoginItemService::new())))
}

// ============================================================================
// Typed API
// ============================================================================

/// **VALUE**: Verifies enabling launch at login is visible on the next query.
///
/// **WHY THIS MATTERS**: The settings toggle reads back the state right after writing it.
///
/// **BUG THIS CATCHES**: Would catch the bridge writing to one service and reading another.
#[test]
fn given_service_when_enabled_then_reports_enabled() {
    // GIVEN
    let bridge = bridge_with_service();
    assert!(!bridge.is_launch_at_login_enabled().unwrap());

    // WHEN
    bridge.set_launch_at_login_enabled(true).unwrap();

    // THEN
    assert!(bridge.is_launch_at_login_enabled().unwrap());

    // AND: Disabling round-trips too
    bridge.set_launch_at_login_enabled(false).unwrap();
    assert!(!bridge.is_launch_at_login_enabled().unwrap());
}

/// **VALUE**: Verifies both operations report "unsupported" without a service.
///
/// **WHY THIS MATTERS**: Builds without the login-item backend must let the GUI hide the
/// toggle rather than crash.
///
/// **BUG THIS CATCHES**: Would catch a panic or a silent `false` on a missing service.
#[test]
fn given_no_service_when_called_then_returns_unavailable() {
    // GIVEN
    let bridge = LaunchAtStartupBridge::unsupported();

    // WHEN
    let query = bridge.is_launch_at_login_enabled();
    let update = bridge.set_launch_at_login_enabled(true);

    // THEN
    assert!(!bridge.is_supported());
    assert!(matches!(query, Err(LoginItemError::Unavailable { .. })));
    assert!(matches!(update, Err(LoginItemError::Unavailable { .. })));
}

// ============================================================================
// Channel dispatch
// ============================================================================

/// **VALUE**: Verifies the channel round trip with the wire method and argument names.
///
/// **WHY THIS MATTERS**: The GUI sends these exact strings; a typo breaks the toggle.
///
/// **BUG THIS CATCHES**: Would catch renamed methods or a renamed `setEnabledValue`.
#[test]
fn given_service_when_set_via_channel_then_query_returns_true() {
    // GIVEN
    let bridge = bridge_with_service();

    // WHEN
    let set = bridge.handle(&MethodCall::new(
        "launchAtStartupSetEnabled",
        json!({ "setEnabledValue": true }),
    ));
    let query = bridge.handle(&MethodCall::new("launchAtStartupIsEnabled", Value::Null));

    // THEN
    assert_eq!(set, MethodResponse::Success(Value::Null));
    assert_eq!(query, MethodResponse::Success(Value::Bool(true)));
}

/// **VALUE**: Verifies every channel call answers `NotImplemented` without a service.
///
/// **WHY THIS MATTERS**: This is the signal the GUI uses to disable the feature.
///
/// **BUG THIS CATCHES**: Would catch an error or success reply leaking from the missing path.
#[test]
fn given_no_service_when_called_via_channel_then_not_implemented() {
    let bridge = LaunchAtStartupBridge::unsupported();

    assert_eq!(
        bridge.handle(&MethodCall::new(IS_ENABLED_METHOD, Value::Null)),
        MethodResponse::NotImplemented
    );
    assert_eq!(
        bridge.handle(&MethodCall::new(
            SET_ENABLED_METHOD,
            json!({ "setEnabledValue": true })
        )),
        MethodResponse::NotImplemented
    );
}

/// **VALUE**: Verifies unknown methods are answered, not crashed on.
///
/// **WHY THIS MATTERS**: Newer GUI builds may call methods this shell does not know yet.
///
/// **BUG THIS CATCHES**: Would catch a panic or an error reply for unknown methods.
#[test]
fn given_unknown_method_when_called_then_not_implemented() {
    let bridge = bridge_with_service();

    let reply = bridge.handle(&MethodCall::new("launchAtStartupToggle", Value::Null));

    assert_eq!(reply, MethodResponse::NotImplemented);
}

/// **VALUE**: Verifies a set call without a boolean argument is ignored.
///
/// **WHY THIS MATTERS**: Malformed calls must not flip the registration.
///
/// **BUG THIS CATCHES**: Would catch treating a missing argument as `false` or `true`.
#[test]
fn given_set_without_boolean_argument_when_called_then_ignored() {
    // GIVEN: Launch at login enabled
    let bridge = bridge_with_service();
    bridge.set_launch_at_login_enabled(true).unwrap();

    // WHEN: Malformed set calls
    for arguments in [Value::Null, json!({}), json!({ "setEnabledValue": "false" })] {
        let reply = bridge.handle(&MethodCall::new(SET_ENABLED_METHOD, arguments));
        assert_eq!(reply, MethodResponse::Success(Value::Null));
    }

    // THEN: Still enabled
    assert!(bridge.is_launch_at_login_enabled().unwrap());
}

/// **VALUE**: Verifies a failing service becomes an error reply with a stable code.
///
/// **WHY THIS MATTERS**: The GUI shows a message for real failures, distinct from
/// "unsupported".
///
/// **BUG THIS CATCHES**: Would catch service errors being mapped to `NotImplemented`.
#[test]
fn given_failing_service_when_called_then_error_reply() {
    // GIVEN
    let bridge = LaunchAtStartupBridge::new(Some(Box::new(InMemoryLoginItemService::failing())));

    // WHEN
    let reply = bridge.handle(&MethodCall::new(IS_ENABLED_METHOD, Value::Null));

    // THEN
    match reply {
        MethodResponse::Error { code, message } => {
            assert_eq!(code, LOGIN_ITEM_ERROR_CODE);
            assert!(message.contains("Login Item Service Error"));
        }
        other => panic!("Expected error reply, got {other:?}"),
    }
}

/// **VALUE**: Verifies the JSON shape of replies and calls.
///
/// **WHY THIS MATTERS**: Replies cross the Tauri IPC boundary as JSON; the frontend
/// switches on `status`.
///
/// **BUG THIS CATCHES**: Would catch a changed serde tagging scheme.
#[test]
fn given_replies_when_serialized_then_use_status_tag() {
    assert_eq!(
        serde_json::to_value(MethodResponse::Success(Value::Bool(true))).unwrap(),
        json!({ "status": "success", "value": true })
    );
    assert_eq!(
        serde_json::to_value(MethodResponse::NotImplemented).unwrap(),
        json!({ "status": "not_implemented" })
    );

    let call: MethodCall =
        serde_json::from_value(json!({ "method": IS_ENABLED_METHOD })).unwrap();
    assert_eq!(call.arguments, Value::Null);
}
