use shell_core::error::handle_store::HandleStoreError;
use shell_core::handle::{InMemoryServerHandleRepository, ServerHandleRepository};

// ============================================================================
// InMemoryServerHandleRepository - the test double for the handle file
// ============================================================================

/// **VALUE**: Verifies an empty fake behaves like a missing file.
///
/// **WHY THIS MATTERS**: Supervisor tests rely on the fake matching the real store's
/// "nothing recorded" behaviour.
///
/// **BUG THIS CATCHES**: Would catch the fake inventing a default pid.
#[test]
fn given_empty_repository_when_read_then_returns_unavailable() {
    // GIVEN
    let repository = InMemoryServerHandleRepository::new();

    // WHEN
    let result = repository.read_handle();

    // THEN
    assert!(matches!(result, Err(HandleStoreError::Unavailable { .. })));
    assert_eq!(repository.read_count(), 1);
}

/// **VALUE**: Verifies the fake applies the same parsing rules as the file store.
///
/// **WHY THIS MATTERS**: Tests written against the fake must hold for the real store.
///
/// **BUG THIS CATCHES**: Would catch the fake skipping the trim or the positivity check.
#[test]
fn given_raw_contents_when_read_then_parses_like_file_store() {
    // GIVEN
    let repository = InMemoryServerHandleRepository::with_contents("  4242\n");

    // WHEN / THEN
    assert_eq!(repository.read().map(|p| p.as_u32()), Some(4242));

    repository.set_contents("-1");
    assert!(repository.read().is_none());

    repository.set_contents("7");
    assert_eq!(repository.read().map(|p| p.as_u32()), Some(7));

    repository.clear();
    assert!(repository.read().is_none());

    assert_eq!(repository.read_count(), 4);
}
