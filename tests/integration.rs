use predicates::prelude::*;
use serde_json::Value;
use std::fs;
use std::path::Path;
use std::process::Command;
use tempfile::TempDir;

fn cmd() -> assert_cmd::Command {
    assert_cmd::Command::from(Command::new(env!("CARGO_BIN_EXE_apidoc")))
}

fn fixture_root() -> String {
    format!("{}/tests/fixtures/api", env!("CARGO_MANIFEST_DIR"))
}

fn run_sorted(output: &Path) {
    cmd()
        .args(["-r", fixture_root().as_str()])
        .args(["-o", output.to_str().unwrap()])
        .arg("--sorted")
        .assert()
        .success();
}

fn read_json(path: &Path) -> Value {
    serde_json::from_str(&fs::read_to_string(path).unwrap()).unwrap()
}

// -- artifact shape --

#[test]
fn writes_categories_in_walk_order() {
    let dir = TempDir::new().unwrap();
    let output = dir.path().join("api-docs.json");
    run_sorted(&output);

    let doc = read_json(&output);
    let categories = doc.as_array().unwrap();
    let names: Vec<_> = categories.iter().map(|c| c["name"].as_str().unwrap()).collect();
    // front/about.ts is empty and types.d.ts is a declaration file
    assert_eq!(names, vec!["admin/user", "front/home"]);
    for category in categories {
        assert_eq!(category["id"], category["name"]);
        assert!(!category["children"].as_array().unwrap().is_empty());
    }
}

#[test]
fn endpoint_descriptor_fields() {
    let dir = TempDir::new().unwrap();
    let output = dir.path().join("api-docs.json");
    run_sorted(&output);

    let doc = read_json(&output);
    let home = &doc[1]["children"];
    assert_eq!(home.as_array().unwrap().len(), 2);

    let videos = &home[0];
    assert_eq!(videos["id"], "front/home-fetchHomeVideos");
    assert_eq!(videos["name"], "Fetch home videos.");
    assert_eq!(videos["method"], "GET");
    assert_eq!(videos["path"], "/home/videos");
    assert_eq!(videos["status"], "enabled");
    assert_eq!(videos["owner"], "system");
    assert_eq!(videos["funcName"], "fetchHomeVideos");
    assert_eq!(videos["params"], "query: HomeQuery");
    assert_eq!(videos["returnType"], "HomeVideo[]");

    let banners = &home[1];
    assert_eq!(banners["name"], "Fetch the carousel banners.");
    assert_eq!(banners["returnType"], "any");
    assert_eq!(banners["path"], "/home/banners");
}

#[test]
fn types_attached_to_every_endpoint() {
    let dir = TempDir::new().unwrap();
    let output = dir.path().join("api-docs.json");
    run_sorted(&output);

    let doc = read_json(&output);
    for child in doc[1]["children"].as_array().unwrap() {
        let types = child["types"].as_object().unwrap();
        assert_eq!(types.len(), 2);
        assert_eq!(types["HomeQuery"], "\n  page: number;\n  size: number;\n");
        assert!(types.contains_key("HomeVideo"));
    }
}

#[test]
fn unmatched_functions_are_dropped() {
    let dir = TempDir::new().unwrap();
    let output = dir.path().join("api-docs.json");
    run_sorted(&output);

    let doc = read_json(&output);
    let user = doc[0]["children"].as_array().unwrap();
    let funcs: Vec<_> = user.iter().map(|c| c["funcName"].as_str().unwrap()).collect();
    // formatUser has no request call; guardedUpdate's body ends at the inner `}`
    assert_eq!(funcs, vec!["createUser", "deleteUser"]);
    assert_eq!(user[0]["method"], "POST");
    assert_eq!(user[0]["returnType"], "number");
    assert_eq!(user[0]["name"], "Create a user.");
    assert_eq!(user[1]["method"], "DELETE");
    assert_eq!(user[1]["name"], "deleteUser");
}

#[test]
fn pretty_printed_with_two_spaces() {
    let dir = TempDir::new().unwrap();
    let output = dir.path().join("api-docs.json");
    run_sorted(&output);

    let raw = fs::read_to_string(&output).unwrap();
    assert!(raw.starts_with("[\n  {\n    \"id\": \"admin/user\","));
    assert!(raw.ends_with(']'));
}

#[test]
fn repeated_runs_are_byte_identical() {
    let dir = TempDir::new().unwrap();
    let first = dir.path().join("first.json");
    let second = dir.path().join("second.json");
    run_sorted(&first);
    run_sorted(&second);
    assert_eq!(fs::read(first).unwrap(), fs::read(second).unwrap());
}

#[test]
fn listing_order_runs_are_byte_identical() {
    let dir = TempDir::new().unwrap();
    let first = dir.path().join("first.json");
    let second = dir.path().join("second.json");
    for output in [&first, &second] {
        cmd()
            .args(["-r", fixture_root().as_str()])
            .args(["-o", output.to_str().unwrap()])
            .assert()
            .success();
    }

    assert_eq!(fs::read(&first).unwrap(), fs::read(&second).unwrap());
    let doc = read_json(&first);
    let mut names: Vec<_> = doc
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["name"].as_str().unwrap().to_string())
        .collect();
    names.sort();
    assert_eq!(names, vec!["admin/user", "front/home"]);
}

#[test]
fn overwrites_existing_artifact() {
    let dir = TempDir::new().unwrap();
    let output = dir.path().join("data").join("api-docs.json");
    fs::create_dir_all(output.parent().unwrap()).unwrap();
    fs::write(&output, "{ \"stale\": true }").unwrap();
    run_sorted(&output);

    assert!(read_json(&output).is_array());
}

// -- options --

#[test]
fn defaults_scan_src_api() {
    let dir = TempDir::new().unwrap();
    let api = dir.path().join("src").join("api");
    fs::create_dir_all(&api).unwrap();
    fs::write(
        api.join("video.ts"),
        "export async function play() { return request.get('/video/play'); }\n",
    )
    .unwrap();

    cmd().current_dir(dir.path()).assert().success();

    let doc = read_json(&dir.path().join("src/data/api-docs.json"));
    assert_eq!(doc[0]["id"], "video");
    assert_eq!(doc[0]["children"][0]["id"], "video-play");
}

#[test]
fn stdout_mode_skips_artifact() {
    let dir = TempDir::new().unwrap();
    let output = dir.path().join("api-docs.json");

    cmd()
        .args(["-r", fixture_root().as_str()])
        .args(["-o", output.to_str().unwrap()])
        .arg("--stdout")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"funcName\": \"fetchHomeVideos\""));

    assert!(!output.exists());
}

#[test]
fn exclude_glob_skips_files() {
    let dir = TempDir::new().unwrap();
    let output = dir.path().join("api-docs.json");

    cmd()
        .args(["-r", fixture_root().as_str()])
        .args(["-o", output.to_str().unwrap()])
        .args(["--exclude", "admin/*"])
        .assert()
        .success();

    let doc = read_json(&output);
    assert_eq!(doc.as_array().unwrap().len(), 1);
    assert_eq!(doc[0]["name"], "front/home");
}

// -- failures --

#[test]
fn missing_root_fails() {
    let dir = TempDir::new().unwrap();
    let output = dir.path().join("api-docs.json");

    cmd()
        .args(["-r", dir.path().join("missing").to_str().unwrap()])
        .args(["-o", output.to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to scan"));

    assert!(!output.exists());
}

#[test]
fn invalid_exclude_pattern_fails() {
    cmd()
        .args(["-r", fixture_root().as_str()])
        .args(["--exclude", "a/***"])
        .arg("--stdout")
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid exclude pattern"));
}
