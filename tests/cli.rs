//! Behaviour of the binary's argument handling.

#[path = "cli/smoke_tests.rs"]
mod smoke_tests;
