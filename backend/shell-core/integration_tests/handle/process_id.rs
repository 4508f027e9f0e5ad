use shell_core::error::handle_store::HandleStoreError;
use shell_core::handle::ProcessId;

// ============================================================================
// ProcessId parsing - the rules every handle store shares
// ============================================================================

/// **VALUE**: Verifies a plain decimal handle parses to the same process id.
///
/// **WHY THIS MATTERS**: This is the normal content written by the server launcher.
///
/// **BUG THIS CATCHES**: Would catch a parser that drops digits or misreads the base.
#[test]
fn given_plain_decimal_when_parsed_then_returns_pid() {
    // GIVEN / WHEN
    let pid = ProcessId::parse("4242").unwrap();

    // THEN
    assert_eq!(pid.as_u32(), 4242);
    assert_eq!(pid.to_string(), "4242");
}

/// **VALUE**: Verifies surrounding whitespace is ignored.
///
/// **WHY THIS MATTERS**: Launchers typically write a trailing newline; shells add spaces.
///
/// **BUG THIS CATCHES**: Would catch removal of the trim before parsing.
#[test]
fn given_padded_content_when_parsed_then_matches_unpadded() {
    // GIVEN: Padded and unpadded contents
    let padded = ProcessId::parse("  4242\n").unwrap();
    let plain = ProcessId::parse("4242").unwrap();

    // THEN: Identical
    assert_eq!(padded, plain);
    assert_eq!(ProcessId::parse("\t4242\r\n").unwrap(), plain);
}

/// **VALUE**: Verifies malformed contents are reported as parse errors.
///
/// **WHY THIS MATTERS**: A garbage handle must turn into "nothing to terminate", never into
/// a signal to some accidental number.
///
/// **BUG THIS CATCHES**: Would catch a lenient parser that extracts digits from text.
#[test]
fn given_malformed_content_when_parsed_then_returns_parse_error() {
    for contents in ["not-a-pid", "", "   \n", "42abc", "4 2", "12.5"] {
        // WHEN
        let result = ProcessId::parse(contents);

        // THEN
        assert!(
            matches!(result, Err(HandleStoreError::Parse { .. })),
            "{contents:?} should be a parse error, got {result:?}"
        );
    }
}

/// **VALUE**: Verifies zero and negative ids are rejected.
///
/// **WHY THIS MATTERS**: The OS treats 0 as "my process group" and -1 as "every process I
/// may signal". Passing either through would terminate unrelated processes, including the
/// shell itself.
///
/// **BUG THIS CATCHES**: Would catch a parser that accepts any `i32`.
#[test]
fn given_non_positive_value_when_parsed_then_returns_parse_error() {
    for contents in ["0", "-1", "-4242"] {
        let result = ProcessId::parse(contents);

        assert!(
            matches!(result, Err(HandleStoreError::Parse { .. })),
            "{contents:?} must be rejected"
        );
    }
}

/// **VALUE**: Verifies values outside the signed 32-bit range are rejected.
///
/// **WHY THIS MATTERS**: Process ids fit in an `i32` on every supported platform; a larger
/// value can only come from a corrupted file.
///
/// **BUG THIS CATCHES**: Would catch a silent wrap-around to a small pid.
#[test]
fn given_out_of_range_value_when_parsed_then_returns_parse_error() {
    let result = ProcessId::parse("4294967297");

    assert!(matches!(result, Err(HandleStoreError::Parse { .. })));
}
