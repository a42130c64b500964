//! Integration test suite for end-to-end scenarios.

mod common;

#[path = "integration/command_file.rs"]
mod command_file;
#[path = "integration/end_to_end.rs"]
mod end_to_end;
