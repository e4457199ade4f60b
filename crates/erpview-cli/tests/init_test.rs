mod common;

use common::run;
use erpview_testing::TestWorld;
use predicates::prelude::*;

#[test]
fn test_init_creates_config_and_database() {
    let world = TestWorld::new();

    let result = run(&world, &["init"]);
    assert!(result.success(), "stderr: {}", result.stderr());
    assert!(result.stdout().contains("Initialized erpview"));

    assert!(world.data_dir().join("config.toml").exists());
    assert!(world.data_dir().join("erpview.db").exists());
}

#[test]
fn test_init_twice_keeps_existing_config() {
    let world = TestWorld::new();
    assert!(run(&world, &["init"]).success());

    let config_path = world.data_dir().join("config.toml");
    let edited = std::fs::read_to_string(&config_path)
        .unwrap()
        .replace("home_alias = \"home\"", "home_alias = \"inicio\"");
    std::fs::write(&config_path, &edited).unwrap();

    let result = run(&world, &["init"]);
    assert!(result.success());
    assert!(result.stdout().contains("Already initialized"));
    assert_eq!(std::fs::read_to_string(&config_path).unwrap(), edited);

    let result = run(&world, &["init", "--force"]);
    assert!(result.success());
    assert!(result.stdout().contains("Configuration reset to defaults"));
    assert!(
        predicate::str::contains("home_alias = \"home\"")
            .eval(&std::fs::read_to_string(&config_path).unwrap())
    );
}

#[test]
fn test_init_json_reports_counts() {
    let world = TestWorld::new().json();

    let result = run(&world, &["init"]);
    assert!(result.success());

    let json = result.json().unwrap();
    assert_eq!(json["content"]["config_status"], "created");
    assert_eq!(json["content"]["environment"], "development");
    assert_eq!(json["content"]["development_views"], 0);
    assert_eq!(json["content"]["published_views"], 0);
}

#[test]
fn test_bare_command_shows_guidance_without_database() {
    let world = TestWorld::new();

    let result = run(&world, &[]);
    assert!(result.success());
    assert!(result.stdout().contains("erpview init"));
    assert!(!world.data_dir().join("erpview.db").exists());
}

#[test]
fn test_invalid_config_is_an_error() {
    let world = TestWorld::new();
    world
        .write_file(".erpview/config.toml", "environment = 42\n")
        .unwrap();

    let result = run(&world, &["resolve", "usr001", "--role", "admin"]);
    assert!(!result.success());
    assert!(result.stderr().contains("invalid configuration"));
}
