//! Runs the `linkmap` binary against documents in a temp project.

use std::path::{Path, PathBuf};
use std::process::{Command, Output};

const DOC: &str = r#"[
    {"id": "a", "name": "A", "links": ["b"], "isIndex": true},
    {"id": "b", "name": "B"},
    {"name": "no id"}
]"#;

fn write_doc(dir: &Path, body: &str) -> PathBuf {
    let path = dir.join("doc.json");
    std::fs::write(&path, body).unwrap();
    path
}

fn linkmap(project: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_linkmap"))
        .arg("--project")
        .arg(project)
        .args(args)
        .env_remove("LINKMAP_RADIUS")
        .env_remove("LINKMAP_LAYER_SPACING")
        .env_remove("LINKMAP_MAX_PAGES")
        .env("RUST_LOG", "warn")
        .output()
        .unwrap()
}

fn stdout(out: &Output) -> String {
    String::from_utf8_lossy(&out.stdout).into_owned()
}

fn stderr(out: &Output) -> String {
    String::from_utf8_lossy(&out.stderr).into_owned()
}

#[test]
fn test_rank_with_and_without_root_flag() {
    let tmp = tempfile::tempdir().unwrap();
    let doc = write_doc(tmp.path(), DOC);
    let doc = doc.to_str().unwrap();

    let marked = linkmap(tmp.path(), &["rank", doc]);
    assert!(marked.status.success(), "{}", stderr(&marked));
    assert_eq!(stdout(&marked), "0: a (A)\n1: b (B)\n");

    let explicit = linkmap(tmp.path(), &["rank", doc, "--root", "a"]);
    assert!(explicit.status.success(), "{}", stderr(&explicit));
    assert_eq!(stdout(&explicit), stdout(&marked));
}

#[test]
fn test_validate_report_on_stdout_warnings_on_stderr() {
    let tmp = tempfile::tempdir().unwrap();
    let doc = write_doc(
        tmp.path(),
        r#"[
            {"id": "a", "name": "A", "links": ["b"]},
            {"id": "b", "name": "B"},
            {"id": "c"}
        ]"#,
    );

    let out = linkmap(tmp.path(), &["validate", doc.to_str().unwrap()]);
    assert!(out.status.success(), "{}", stderr(&out));
    let report = stdout(&out);
    assert!(report.contains("Graph is valid: 2 pages, 1 links, 1 dropped record(s)."));
    assert!(!report.contains("WARN"));
    let log = stderr(&out);
    assert!(log.contains("name"));
    assert!(log.contains("index page"));
}

#[test]
fn test_unknown_export_format_fails() {
    let tmp = tempfile::tempdir().unwrap();
    let doc = write_doc(tmp.path(), DOC);

    let out = linkmap(tmp.path(), &["export", doc.to_str().unwrap(), "--format", "svg"]);
    assert!(!out.status.success());
    assert!(stderr(&out).contains("Unknown export format: svg"));
    assert!(stdout(&out).is_empty());
}

#[test]
fn test_page_ceiling_from_environment() {
    let tmp = tempfile::tempdir().unwrap();
    let doc = write_doc(tmp.path(), DOC);

    let out = Command::new(env!("CARGO_BIN_EXE_linkmap"))
        .arg("--project")
        .arg(tmp.path())
        .args(["info", doc.to_str().unwrap()])
        .env("LINKMAP_MAX_PAGES", "2")
        .output()
        .unwrap();
    assert!(!out.status.success());
    assert!(stderr(&out).contains("above the configured limit of 2"));
}
