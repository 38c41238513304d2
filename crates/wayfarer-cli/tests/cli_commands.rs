#![allow(deprecated)] // Command::cargo_bin – macro replacement not yet stable

//! End-to-end tests driving the compiled binary.

use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn wayfarer() -> Command {
    Command::cargo_bin("wayfarer").unwrap()
}

// ---------------------------------------------------------------- demo

#[test]
fn demo_walks_the_whole_station() {
    wayfarer().arg("demo").assert().success().stdout(
        predicate::str::contains("> look")
            .and(predicate::str::contains("Platform"))
            .and(predicate::str::contains("ADMIT ONE. Carriage 7, seat 43."))
            .and(predicate::str::contains("You take the paper ticket."))
            .and(predicate::str::contains(
                "The luggage trunk is far too heavy to carry.",
            ))
            .and(predicate::str::contains(
                "You strain at the handles until a porter glares at you.",
            ))
            .and(predicate::str::contains("You unlock the oak door."))
            .and(predicate::str::contains("The lock gives a well-oiled click."))
            .and(predicate::str::contains(
                "The entries are too cramped to read at arm's length.",
            ))
            .and(predicate::str::contains(
                "Entry 44: the night train arrived empty again.",
            ))
            .and(predicate::str::contains(
                "You pour the tea flask into the dented thermos.",
            ))
            .and(predicate::str::contains("You can't go").not())
            .and(predicate::str::contains("You see no").not()),
    );
}

#[test]
fn demo_ends_with_stats_and_farewell() {
    wayfarer().arg("demo").assert().success().stdout(
        predicate::str::contains("Turns played: 23")
            .and(predicate::str::contains("Items carried: 4"))
            .and(predicate::str::contains("Load: 2.5 of 5"))
            .and(predicate::str::contains("Goodbye!")),
    );
}

// ---------------------------------------------------------------- play

#[test]
fn play_reads_commands_from_stdin() {
    wayfarer()
        .arg("play")
        .write_stdin("look\ntake ticket\ninventory\nquit\n")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("You take the paper ticket.")
                .and(predicate::str::contains("  - paper ticket (0.25)"))
                .and(predicate::str::contains("Load: 0.25 of 5"))
                .and(predicate::str::contains("Goodbye!")),
        );
}

#[test]
fn play_stops_cleanly_at_end_of_input() {
    wayfarer()
        .arg("play")
        .write_stdin("look\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Goodbye!").not());
}

#[test]
fn play_echoes_unknown_input() {
    wayfarer()
        .arg("play")
        .write_stdin("frobnicate the widget\nquit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "I don't know how to \"frobnicate the widget\".",
        ));
}

#[test]
fn play_runs_a_scripted_command_list() {
    wayfarer()
        .args(["play", "-c", "take ticket", "-c", "quit"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("> take ticket")
                .and(predicate::str::contains("You take the paper ticket."))
                .and(predicate::str::contains("Goodbye!")),
        );
}

// ---------------------------------------------------------------- export

#[test]
fn export_prints_valid_json() {
    let output = wayfarer()
        .arg("export")
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let json: serde_json::Value = serde_json::from_slice(&output).expect("valid JSON output");
    assert_eq!(json["current"], "platform");
    assert_eq!(json["turns"], 0);
    assert_eq!(json["locations"].as_object().unwrap().len(), 4);
    assert_eq!(
        json["locations"]["platform"]["items"]
            .as_array()
            .unwrap()
            .len(),
        2
    );
}

#[test]
fn export_writes_to_file() {
    let dir = TempDir::new().unwrap();
    let out_file = dir.path().join("station.json");

    wayfarer()
        .args(["export", "-o", out_file.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("Exported to"));

    let content = fs::read_to_string(&out_file).unwrap();
    let json: serde_json::Value = serde_json::from_str(&content).expect("valid JSON in file");
    assert_eq!(json["locations"]["office"]["items"][0]["id"], "ledger");
}
