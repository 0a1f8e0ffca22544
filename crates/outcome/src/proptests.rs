//! Property-based tests for outcome combinators.
