use shell_core::error::ShellError;
use shell_core::error::signal::SignalError;

use common::ErrorLocation;

use std::panic::Location;

/// **VALUE**: Verifies every signal error names the pid and the location.
///
/// **WHY THIS MATTERS**: The warn line at shutdown is the record of which process was
/// targeted and why it was not stopped.
///
/// **BUG THIS CATCHES**: Would catch a variant whose Display omits the pid.
#[test]
fn given_signal_errors_when_formatted_then_include_pid_and_location() {
    let location = ErrorLocation::from(Location::caller());
    let errors = [
        SignalError::TargetAbsent { pid: 4242, location },
        SignalError::Rejected { pid: 4242, location },
        SignalError::Unsupported { pid: 4242, location },
        SignalError::Refused {
            pid: 4242,
            message: String::from("Refusing to signal PID 4242"),
            location,
        },
    ];

    for err in errors {
        let error_string = err.to_string();
        assert_eq!(err.pid(), 4242);
        assert!(error_string.contains("4242"), "{error_string}");
        assert!(error_string.contains("signal.rs"), "{error_string}");

        let shell: ShellError = err.into();
        assert_eq!(shell.to_string(), error_string);
    }
}
