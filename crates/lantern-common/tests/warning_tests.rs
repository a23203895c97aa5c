//! Integration tests for the deduplicating warning system.

use lantern_common::warning::warn_once;

#[test]
fn test_warn_once_deduplicates() {
    assert!(warn_once("test", "duplicate warning from warning_tests"));
    assert!(!warn_once("test", "duplicate warning from warning_tests"));
}

#[test]
fn test_component_is_part_of_the_key() {
    assert!(warn_once("test-a", "shared message from warning_tests"));
    assert!(warn_once("test-b", "shared message from warning_tests"));
}
