//! Common test utilities for outcome integration tests.

use outcome::{failure, success, Outcome};
use std::sync::Once;
use std::time::Duration;

static TRACING: Once = Once::new();

/// Installs a test-writer tracing subscriber once per test binary.
pub fn init_tracing() {
    TRACING.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::TRACE)
            .with_test_writer()
            .try_init();
    });
}

/// Parses a non-empty username, collecting one message per problem.
pub fn parse_username(raw: &str) -> Outcome<String> {
    let trimmed = raw.trim();
    let mut problems = Vec::new();
    if trimmed.is_empty() {
        problems.push("username must not be empty");
    }
    if trimmed.chars().any(char::is_whitespace) {
        problems.push("username must not contain spaces");
    }
    if problems.is_empty() {
        success(trimmed.to_string())
    } else {
        failure(problems)
    }
}

/// Looks up an account id after a simulated delay.
pub async fn lookup_account(username: String, delay: Duration) -> Outcome<u64> {
    tokio::time::sleep(delay).await;
    match username.as_str() {
        "alice" => success(1),
        "bob" => success(2),
        _ => failure([format!("no account for {username}")]),
    }
}
