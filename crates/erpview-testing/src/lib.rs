//! Testing infrastructure for erpview tests.
//!
//! This crate provides utilities shared by the workspace's test suites:
//! - `fixtures`: Sample views, data sources and stores seeded with them
//! - `faults`: A record backend that fails on demand
//! - `clock`: A clock tests move by hand
//! - `world`: Isolated data directories for CLI integration tests

pub mod clock;
pub mod faults;
pub mod fixtures;
pub mod world;

pub use clock::ManualClock;
pub use faults::{FaultyStore, Operation};
pub use world::{CliResult, TestWorld};
