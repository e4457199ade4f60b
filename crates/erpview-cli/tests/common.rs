//! Common test utilities shared across integration tests.
//!
//! Clippy cannot track usage across integration test files, hence the
//! `allow(dead_code)` annotation.
#![cfg(test)]
#![allow(dead_code)]

use assert_cmd::Command;
use assert_cmd::cargo::cargo_bin_cmd;
use erpview_testing::{CliResult, TestWorld};

pub fn erpview() -> Command {
    cargo_bin_cmd!("erpview")
}

/// Run `erpview` in `world` with `args`.
pub fn run(world: &TestWorld, args: &[&str]) -> CliResult {
    world
        .run(&mut erpview(), args)
        .expect("Failed to run erpview")
}

/// Run `erpview` in `world` with `args`, asking for JSON output.
pub fn run_json(world: &TestWorld, args: &[&str]) -> CliResult {
    world
        .run_as(&mut erpview(), "json", args)
        .expect("Failed to run erpview")
}

/// Import the demo01 fixture and return the new development view id.
pub fn import_demo(world: &TestWorld) -> String {
    let file = world
        .copy_fixture("demo01.json")
        .expect("Failed to copy fixture");
    let file = file.to_str().expect("non UTF-8 temp path");
    let result = run_json(world, &["view", "import", file]);
    assert!(result.success(), "import failed: {}", result.stderr());

    let json = result.json().expect("import output is not JSON");
    json["content"]["id"]
        .as_str()
        .expect("import output has no id")
        .to_string()
}
