use assert_cmd::prelude::*;
use std::path::PathBuf;
use std::process::Command;
use tempfile::tempdir;

fn cargo_bin() -> Command { Command::cargo_bin("locator").unwrap() }

fn set_home(cmd: &mut Command, home: &PathBuf) { cmd.env("HOME", home); }

fn history() -> Command {
    let mut cmd = cargo_bin();
    cmd.arg("history");
    cmd
}

#[test]
fn push_previous_list_clear() {
    let td = tempdir().unwrap();
    let state = td.path().join("state").join("history.json");
    for p in ["/folders/1", "/chat/4", "/folders/2"] {
        history().arg("push").arg(p).arg("--state").arg(&state).assert().success();
    }
    assert!(state.exists());

    let out = history().arg("previous").arg("folders").arg("--state").arg(&state).assert().success().get_output().stdout.clone();
    assert_eq!(String::from_utf8(out).unwrap(), "/folders/1\n");

    history().arg("previous").arg("admin").arg("--state").arg(&state).assert().failure().code(1);

    let out = history().arg("list").arg("--state").arg(&state).assert().success().get_output().stdout.clone();
    assert_eq!(String::from_utf8(out).unwrap(), "folders\t/folders/1\nchat\t/chat/4\nfolders\t/folders/2\n");

    history().arg("clear").arg("--state").arg(&state).assert().success();
    let out = history().arg("list").arg("--state").arg(&state).assert().success().get_output().stdout.clone();
    assert!(out.is_empty());
}

#[test]
fn capacity_bounds_the_history_and_kind_can_be_forced() {
    let td = tempdir().unwrap();
    let state = td.path().join("history.json");
    for i in 0..4 {
        history().arg("push").arg(format!("/docs/{i}")).arg("--capacity").arg("2").arg("--state").arg(&state).assert().success();
    }
    history().arg("push").arg("/anything").arg("--kind").arg("docs").arg("--state").arg(&state).assert().success();
    let out = history().arg("list").arg("--state").arg(&state).assert().success().get_output().stdout.clone();
    assert_eq!(String::from_utf8(out).unwrap(), "docs\t/docs/3\ndocs\t/anything\n");
}

#[test]
fn default_state_lives_under_home() {
    let td = tempdir().unwrap();
    let home = td.path().join("home");
    std::fs::create_dir_all(&home).unwrap();
    let mut cmd = cargo_bin(); set_home(&mut cmd, &home);
    cmd.arg("history").arg("push").arg("/coach/clients");
    cmd.assert().success();
    assert!(home.join(".cache/folder-locator/history.json").exists());
}
