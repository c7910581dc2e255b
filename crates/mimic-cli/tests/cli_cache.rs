use assert_cmd::Command;
use predicates::prelude::*;
use std::path::Path;
use tempfile::TempDir;

const SIMULATION: &str = r#"{
  "templates": [
    {
      "requestTemplate": {
        "scheme": {"exactMatch": "http"},
        "method": {"exactMatch": "GET"},
        "destination": {"exactMatch": "api.test"},
        "path": {"exactMatch": "/users"},
        "query": {"exactMatch": ""},
        "body": {"exactMatch": ""}
      },
      "response": {"status": 200, "body": "[\"alice\"]"}
    },
    {
      "requestTemplate": {
        "scheme": {"exactMatch": "http"},
        "method": {"exactMatch": "GET"},
        "destination": {"exactMatch": "api.test"},
        "path": {"exactMatch": "/admin"},
        "query": {"exactMatch": ""},
        "body": {"exactMatch": ""},
        "headers": {"X-Role": ["admin"]}
      },
      "response": {"status": 200, "body": "admin-panel"}
    },
    {
      "requestTemplate": {
        "path": {"regexMatch": "^/orders/\\d+$"}
      },
      "response": {"status": 404, "body": ""}
    }
  ]
}"#;

fn mimic() -> Command {
    let mut cmd = Command::cargo_bin("mimic").unwrap();
    cmd.env_remove("MIMIC_CACHE_BACKEND")
        .env_remove("MIMIC_CACHE_PATH")
        .env_remove("MIMIC_CONFIG")
        .env("RUST_LOG", "warn");
    cmd
}

fn write_simulation(dir: &Path) -> std::path::PathBuf {
    let path = dir.join("simulation.json");
    std::fs::write(&path, SIMULATION).unwrap();
    path
}

fn lookup(db: &Path, path: &str) -> Command {
    let mut cmd = mimic();
    cmd.arg("--db")
        .arg(db)
        .args(["lookup", "--scheme", "http", "--method", "GET"])
        .args(["--destination", "api.test", "--path", path]);
    cmd
}

#[test]
fn test_fingerprint_of_empty_request() {
    mimic()
        .arg("fingerprint")
        .assert()
        .success()
        .stdout("d41d8cd98f00b204e9800998ecf8427e\n");
}

#[test]
fn test_preload_lookup_list_flush() {
    let tmp = TempDir::new().unwrap();
    let sim = write_simulation(tmp.path());
    let db = tmp.path().join("cache.db");

    mimic()
        .arg("--db")
        .arg(&db)
        .arg("preload")
        .arg(&sim)
        .assert()
        .success()
        .stderr(predicate::str::contains("preloaded 2 of 3 templates"));

    lookup(&db, "/users")
        .assert()
        .success()
        .stdout(predicate::str::contains("alice"));

    lookup(&db, "/orders/1").assert().code(1);

    mimic()
        .arg("--db")
        .arg(&db)
        .arg("list")
        .assert()
        .success()
        .stderr(predicate::str::contains("2 cached entries"));

    mimic().arg("--db").arg(&db).arg("flush").assert().success();

    lookup(&db, "/users").assert().code(1);
}

#[test]
fn test_lookup_honours_template_headers() {
    let tmp = TempDir::new().unwrap();
    let sim = write_simulation(tmp.path());
    let db = tmp.path().join("cache.db");

    mimic()
        .arg("--db")
        .arg(&db)
        .arg("preload")
        .arg(&sim)
        .assert()
        .success();

    lookup(&db, "/admin").assert().code(1);

    lookup(&db, "/admin")
        .args(["--header", "x-role=admin"])
        .assert()
        .success()
        .stdout(predicate::str::contains("admin-panel"));

    lookup(&db, "/admin")
        .arg("--ignore-headers")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"headerMatch\": true"));
}

#[test]
fn test_invalid_config_is_config_error() {
    let tmp = TempDir::new().unwrap();
    let config = tmp.path().join("mimic.yaml");
    std::fs::write(&config, "backend: sqlite\n").unwrap();

    mimic()
        .arg("--config")
        .arg(&config)
        .arg("list")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("database path"));
}

#[test]
fn test_missing_simulation_file_fails() {
    let tmp = TempDir::new().unwrap();
    mimic()
        .arg("--db")
        .arg(tmp.path().join("cache.db"))
        .args(["preload", "does-not-exist.json"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("does-not-exist.json"));
}
