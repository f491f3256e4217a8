#![allow(clippy::unwrap_used)]

use crate::{CoreError, LimiterCommand, LimiterInvoker, ProcessLimiter, RateLimit, Target};

/// WHAT: Global scope uses the limit:set instruction
/// WHY: The limiter applies it to every application
#[test]
fn given_global_target_when_building_set_then_limit_set() {
    let command = LimiterCommand::set(&Target::Global, RateLimit::new(20));

    assert_eq!(command.args(), ["limit:set", "20"]);
    assert_eq!(command.to_string(), "limit:set 20");
}

/// WHAT: Application scope uses the FramerateLimit property
/// WHY: Only the named application should be capped
#[test]
fn given_application_target_when_building_clear_then_property_zero() {
    let target = Target::Application("NarakaBladepoint.exe".to_string());

    let command = LimiterCommand::clear(&target);

    assert_eq!(
        command.args(),
        ["property:set", "NarakaBladepoint.exe", "FramerateLimit", "0"]
    );
}

/// WHAT: A missing executable is a spawn error
/// WHY: Spawn failures are logged distinctly from IO failures
#[tokio::test]
async fn given_missing_executable_when_running_then_process_spawn_error() {
    // Given: A path that does not exist
    let limiter = ProcessLimiter::new("/nonexistent/rtss-cli");

    // When: Running a command
    let result = limiter.run(&["limit:set".to_string(), "0".to_string()]).await;

    // Then: ProcessSpawn
    assert!(matches!(result, Err(CoreError::ProcessSpawn { .. })));
}

/// WHAT: Stdout is captured and trimmed
/// WHY: The output is logged verbatim as one line
#[cfg(unix)]
#[tokio::test]
async fn given_echo_when_running_then_trimmed_stdout() {
    let limiter = ProcessLimiter::new("echo");

    let output = limiter
        .run(&["  limit:set".to_string(), "20  ".to_string()])
        .await
        .unwrap();

    assert_eq!(output.stdout, "limit:set 20");
    assert_eq!(output.exit_code, Some(0));
}

/// WHAT: A non-zero exit code is still a successful invocation
/// WHY: The limiter's exit status is logged, never treated as failure
#[cfg(unix)]
#[tokio::test]
async fn given_failing_process_when_running_then_output_returned() {
    let limiter = ProcessLimiter::new("false");

    let output = limiter.run(&[]).await.unwrap();

    assert_eq!(output.stdout, "");
    assert_eq!(output.exit_code, Some(1));
}
