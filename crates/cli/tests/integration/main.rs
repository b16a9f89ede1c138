//! Integration tests running mandrel-build against fake mx and mvn tools.

#![cfg(unix)]


mod build_tests;
mod restore_tests;
