// Library root: re-exports all modules so integration tests and the binary
// share the same public API.

pub mod commands;
pub mod config;
pub mod feed;
pub mod pitching;
pub mod report;
pub mod rosters;
