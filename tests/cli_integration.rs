// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Integration tests for the pgnames CLI commands

use assert_cmd::Command;
use predicates::prelude::*;

/// Build a command for the pgnames binary
fn pgnames() -> Command {
    Command::cargo_bin("pgnames").expect("binary should build")
}

#[test]
fn test_system_resolves_known_name() {
    pgnames()
        .args(["system", "Wregoe HB-X d1-23"])
        .assert()
        .success()
        .stdout(predicate::str::contains("System: Wregoe HB-X d1-23"))
        .stdout(predicate::str::contains("375.00"))
        .stdout(predicate::str::contains("Sector: Wregoe"));
}

#[test]
fn test_system_json_output() {
    let output = pgnames()
        .args(["--json", "system", "Wregoe HB-X d1-23"])
        .output()
        .expect("command should run");
    assert!(output.status.success());

    let parsed: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("stdout should be valid JSON");
    assert_eq!(parsed["name"], "Wregoe HB-X d1-23");
    assert_eq!(parsed["position"]["x"], 375.0);
    assert_eq!(parsed["uncertainty"], 40.0);
}

#[test]
fn test_logs_stay_off_stdout() {
    let output = pgnames()
        .args(["-v", "--json", "system", "Wregoe HB-X d1-23"])
        .output()
        .expect("command should run");
    assert!(output.status.success());

    // Even at debug verbosity, stdout must parse as JSON on its own
    serde_json::from_slice::<serde_json::Value>(&output.stdout)
        .expect("stdout should be valid JSON");
    assert!(String::from_utf8_lossy(&output.stderr).contains("Resolving system"));
}

#[test]
fn test_system_rejects_invalid_name() {
    pgnames()
        .args(["system", "Sol"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not a valid procedural system name"));
}

#[test]
fn test_sector_by_name() {
    pgnames()
        .args(["sector", "Wregoe"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Sector: Wregoe (class c1)"))
        .stdout(predicate::str::contains("Index: [0, 0, 0]"));
}

#[test]
fn test_json_via_env_var() {
    let output = pgnames()
        .env("PGNAMES_JSON", "true")
        .args(["sector", "Wregoe"])
        .output()
        .expect("command should run");
    assert!(output.status.success());

    let parsed: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("stdout should be valid JSON");
    assert_eq!(parsed["kind"], "pg");
}

#[test]
fn test_sector_by_position() {
    pgnames()
        .args(["sector", "--at", "0,0,0", "--no-ha"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Sector: Wregoe"));
}

#[test]
fn test_sector_at_sol_prefers_hand_authored() {
    pgnames()
        .args(["sector", "--at", "0,0,0"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Region: Core Sys Sector"));
}

#[test]
fn test_sector_requires_name_or_position() {
    pgnames().arg("sector").assert().failure();
}

#[test]
fn test_id64_decode() {
    pgnames()
        .args(["id64", "10477373803"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Hex: 000000027080096B"))
        .stdout(predicate::str::contains("Mass code: d"));
}

#[test]
fn test_id64_accepts_hex() {
    pgnames()
        .args(["id64", "0x27080096B"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Id64: 10477373803"));
}

#[test]
fn test_encode_decode_agree() {
    let output = pgnames()
        .args(["--json", "encode", "Wregoe HB-X d1-23"])
        .output()
        .expect("command should run");
    assert!(output.status.success());
    let parsed: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("stdout should be valid JSON");
    let id64 = parsed["id64"].as_u64().expect("encoded id64");

    pgnames()
        .args(["--json", "id64", &id64.to_string()])
        .output()
        .map(|out| {
            let parsed: serde_json::Value =
                serde_json::from_slice(&out.stdout).expect("stdout should be valid JSON");
            assert_eq!(parsed["name"], "Wregoe HB-X d1-23");
        })
        .expect("command should run");
}

#[test]
fn test_encode_by_position_matches_encode_by_name() {
    let by_name = pgnames()
        .args(["encode", "Wregoe HB-X d1-23"])
        .output()
        .expect("command should run");
    assert!(by_name.status.success());

    let by_pos = pgnames()
        .args(["encode", "--at", "375,255,-865", "--mcode", "d", "--n2", "23"])
        .output()
        .expect("command should run");
    assert!(by_pos.status.success());

    assert_eq!(by_name.stdout, by_pos.stdout);
}

#[test]
fn test_locate_prototype() {
    pgnames()
        .args(["locate", "375,255,-865", "--mcode", "d", "--no-ha"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Boxel: Wregoe HB-X d1-"));
}

#[test]
fn test_locate_rejects_bad_mcode() {
    pgnames()
        .args(["locate", "0,0,0", "--mcode", "z"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid mass code"));
}

#[test]
fn test_fragments_split() {
    pgnames()
        .args(["fragments", "Dryau Aowsy"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Dry | au | Ao | wsy"))
        .stdout(predicate::str::contains("Class: c2"));
}

#[test]
fn test_regions_near_sol() {
    pgnames()
        .args(["regions", "--near", "0,0,0", "--max-distance", "100"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Core Sys Sector"));
}

#[test]
fn test_regions_max_distance_needs_reference() {
    pgnames()
        .args(["regions", "--max-distance", "100"])
        .assert()
        .failure();
}

#[test]
fn test_completions_generate() {
    pgnames()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("pgnames"));
}

#[test]
fn test_malformed_position_rejected() {
    pgnames()
        .args(["sector", "--at", "1,2"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("expected position"));
}
