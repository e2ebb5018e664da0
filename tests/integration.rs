use std::path::Path;
use std::process::Command;

fn swocdoc_cmd(dir: &Path) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_swocdoc"));
    cmd.current_dir(dir);
    cmd
}

fn fixture(name: &str) -> std::path::PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures").join(name)
}

#[test]
fn links_lists_included_documents_only() {
    let out = swocdoc_cmd(&fixture("basic")).arg("links").output().unwrap();
    assert!(out.status.success(), "links failed: {}", String::from_utf8_lossy(&out.stderr));

    let stdout = String::from_utf8_lossy(&out.stdout).replace('\\', "/");
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(
        lines,
        vec![
            "doc/code/TextView.en.rst:4  code/include/swoc/TextView.h  \
             https://github.com/SolidWallOfCode/libswoc/blob/master/code/include/swoc/TextView.h",
            "doc/index.rst:4  README.md  https://github.com/SolidWallOfCode/libswoc/blob/master/README.md",
            "doc/index.rst:4  CMakeLists.txt  \
             https://github.com/SolidWallOfCode/libswoc/blob/master/CMakeLists.txt",
        ]
    );
    assert!(!stdout.contains("appear.h"));
}

#[test]
fn links_json_carries_display_text() {
    let out = swocdoc_cmd(&fixture("basic")).args(["links", "--json"]).output().unwrap();
    assert!(out.status.success());

    let report: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();
    let links = report["links"].as_array().unwrap();
    assert_eq!(links.len(), 3);
    assert_eq!(links[0]["text"], "TextView.h");
    assert_eq!(links[0]["line"], 4);
    assert!(report["messages"].as_array().unwrap().is_empty());
}

#[test]
fn render_produces_links_and_styles() {
    let out = swocdoc_cmd(&fixture("basic"))
        .args(["render", "doc/code/TextView.en.rst"])
        .output()
        .unwrap();
    assert!(out.status.success(), "render failed: {}", String::from_utf8_lossy(&out.stderr));

    let html = String::from_utf8_lossy(&out.stdout);
    assert!(html.contains(
        "<a class=\"reference external\" \
         href=\"https://github.com/SolidWallOfCode/libswoc/blob/master/code/include/swoc/TextView.h\">TextView.h</a>"
    ));
    assert!(html.contains("<em>delimiter</em>"));
    assert!(html.contains("<code class=\"docutils literal\">&#x27;,&#x27;</code>"));
    assert!(html.contains("<strong>libswoc</strong>"));
}

#[test]
fn render_reports_unknown_role_with_exit_two() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("bad.rst"), "ok\nsee :swoc:svn:`x.h`\n").unwrap();

    let out = swocdoc_cmd(dir.path()).args(["render", "bad.rst"]).output().unwrap();
    assert_eq!(out.status.code(), Some(2));

    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("bad.rst:2: ERROR: Unknown interpreted text role \"swoc:svn\"."), "{stderr}");
    let html = String::from_utf8_lossy(&out.stdout);
    assert!(html.contains("<span class=\"problematic\" data-message=\"0\">:swoc:svn:`x.h`</span>"));
}

#[test]
fn render_missing_file_fails_with_diagnostic() {
    let dir = tempfile::tempdir().unwrap();
    let out = swocdoc_cmd(dir.path()).args(["render", "nope.rst"]).output().unwrap();
    assert_eq!(out.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&out.stderr).contains("Error: File Not Found"));
}

#[test]
fn malformed_config_fails_links() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join(".swocdoc.toml"), "include = doc/\n").unwrap();

    let out = swocdoc_cmd(dir.path()).arg("links").output().unwrap();
    assert_eq!(out.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&out.stderr).contains("Error: Invalid Config"));
}

#[test]
fn roles_lists_extension_roles() {
    let dir = tempfile::tempdir().unwrap();
    let out = swocdoc_cmd(dir.path()).arg("roles").output().unwrap();
    assert!(out.status.success());

    let stdout = String::from_utf8_lossy(&out.stdout);
    let names: Vec<&str> = stdout
        .lines()
        .filter_map(|line| line.split_whitespace().next())
        .collect();
    assert_eq!(names, vec![":arg:", ":const:", ":pack:", ":swoc:git:"]);
    assert!(stdout.contains("SWOC role"));
}
