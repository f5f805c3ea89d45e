use assert_cmd::cargo::cargo_bin_cmd;
use egmlog_testing::TestWorld;
use predicates::prelude::*;

#[test]
fn test_config_show_without_file_prints_defaults() {
    let world = TestWorld::new();

    let mut cmd = cargo_bin_cmd!("egmlog");
    world.configure_command(&mut cmd).arg("config").arg("show");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("not found, showing defaults"))
        .stdout(predicate::str::contains("timezone = \"EST\""))
        .stdout(predicate::str::contains("raw_suffix = \"_Raw Extraction\""))
        .stdout(predicate::str::contains("output_dir").not());
}

#[test]
fn test_config_init_writes_defaults_once() {
    let world = TestWorld::new();

    let mut cmd = cargo_bin_cmd!("egmlog");
    world.configure_command(&mut cmd).arg("config").arg("init");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Wrote default config"));

    let written = std::fs::read_to_string(world.config_path()).unwrap();
    assert!(written.contains("extension = \"txt\""));

    let mut cmd = cargo_bin_cmd!("egmlog");
    world.configure_command(&mut cmd).arg("config").arg("init");
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("use --force to overwrite"));
}

#[test]
fn test_config_init_force_overwrites() {
    let world = TestWorld::new().with_config("timezone = \"CST\"\n");

    let mut cmd = cargo_bin_cmd!("egmlog");
    world
        .configure_command(&mut cmd)
        .arg("config")
        .arg("init")
        .arg("--force");
    cmd.assert().success();

    let written = std::fs::read_to_string(world.config_path()).unwrap();
    assert!(written.contains("timezone = \"EST\""));
}

#[test]
fn test_config_show_reads_file() {
    let world = TestWorld::new().with_config("timezone = \"MST\"\n");

    let mut cmd = cargo_bin_cmd!("egmlog");
    world.configure_command(&mut cmd).arg("config").arg("show");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("timezone = \"MST\""))
        .stdout(predicate::str::contains("extension = \"txt\""))
        .stdout(predicate::str::contains("not found").not());
}
