//! Scenario harness for the move generator.
//!
//! Builds small boards, runs [`chess_engine::generate`] on them and checks the
//! resulting destination sets against written expectations.
//!
//! # Modules
//!
//! - [`config`] - TOML scenario files and the built-in scenario set
//! - [`scenario`] - Scenario resolution and execution
//! - [`report`] - Board rendering and JSON reports

pub mod config;
pub mod report;
pub mod scenario;
