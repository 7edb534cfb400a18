//! CLI integration tests for hub commands.
//!
//! These tests focus on exit codes and basic behavioral verification,
//! not specific output formatting which may change.

// Integration tests are not compiled under cfg(test)
#![allow(clippy::tests_outside_test_module)]

use std::{fs, path::Path};

use assert_cmd::Command;
use predicates::prelude::*;

const CONFIG: &str = r#"
[site]
content_dir = "assets/data"

[aliases]
api = "api-testing"

[[topic]]
id = "getting-started"
title = "Getting Started with SDET"
group = "Foundations"

[[topic]]
id = "api-testing"
title = "API Testing Fundamentals"
group = "Foundations"

[[topic]]
id = "ci-cd-pipelines"
title = "CI/CD Pipelines for Testing"
group = "Automation"

[[topic]]
id = "mobile-testing"
title = "Mobile Testing"
group = "Automation"
"#;

const GETTING_STARTED: &str = "# Welcome\nWhat an SDET does.\n";

const API_TESTING: &str = "\
# API Token Handling
Attach the bearer token to every request.

## Retries
Back off exponentially.
";

const CI_CD: &str = "\
# Pipeline Stages
Build, test, deploy. Rotate the deploy token monthly.
";

/// Helper to create a temp directory for tests.
fn temp_dir() -> tempfile::TempDir {
    tempfile::tempdir().unwrap()
}

/// Writes a file, creating parent directories.
fn write(root: &Path, rel: &str, content: &str) {
    let path = root.join(rel);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, content).unwrap();
}

/// Creates a site where every topic but `mobile-testing` has content.
fn site() -> tempfile::TempDir {
    let dir = temp_dir();
    write(dir.path(), ".hub.toml", CONFIG);
    write(dir.path(), "assets/data/getting-started.md", GETTING_STARTED);
    write(dir.path(), "assets/data/api-testing.md", API_TESTING);
    write(dir.path(), "assets/data/ci-cd-pipelines.md", CI_CD);
    dir
}

/// Helper to run `hub` with HOME and the data directory isolated to `home`.
fn hub_with_home(home: &Path) -> Command {
    #[allow(deprecated)]
    let mut cmd = Command::cargo_bin("hub").unwrap();
    cmd.env("HOME", home)
        .env_remove("XDG_DATA_HOME")
        .env_remove("RUST_LOG");
    cmd
}

/// Runs `hub` inside `dir`, with `dir` as HOME.
fn hub_in(dir: &Path) -> Command {
    let mut cmd = hub_with_home(dir);
    cmd.current_dir(dir);
    cmd
}

/// Strips ANSI escape sequences from a string.
fn strip_ansi(input: &str) -> String {
    let mut output = String::with_capacity(input.len());
    let mut chars = input.chars().peekable();

    while let Some(ch) = chars.next() {
        if ch == '\u{1b}' {
            for c in chars.by_ref() {
                if c == 'm' {
                    break;
                }
            }
        } else {
            output.push(ch);
        }
    }

    output
}

/// Runs a command and returns its ANSI-stripped stdout.
fn stdout_of(cmd: &mut Command) -> String {
    let output = cmd.output().unwrap();
    strip_ansi(&String::from_utf8_lossy(&output.stdout))
}

mod init {
    use super::*;

    #[test]
    fn creates_config_file() {
        let dir = temp_dir();

        hub_in(dir.path()).arg("init").assert().success();

        let contents = fs::read_to_string(dir.path().join(".hub.toml")).unwrap();
        assert!(contents.contains("# [[topic]]"));
    }

    #[test]
    fn fails_if_config_exists() {
        let dir = temp_dir();
        write(dir.path(), ".hub.toml", "existing");

        hub_in(dir.path())
            .arg("init")
            .assert()
            .failure()
            .stderr(predicate::str::contains("already exists"));
    }

    #[test]
    fn force_overwrites() {
        let dir = temp_dir();
        write(dir.path(), ".hub.toml", "existing");

        hub_in(dir.path()).args(["init", "--force"]).assert().success();

        let contents = fs::read_to_string(dir.path().join(".hub.toml")).unwrap();
        assert_ne!(contents, "existing");
    }
}

mod topics {
    use super::*;

    #[test]
    fn lists_groups_in_order() {
        let dir = site();
        let out = stdout_of(hub_in(dir.path()).arg("topics"));

        let foundations = out.find("Foundations").unwrap();
        let automation = out.find("Automation").unwrap();
        assert!(foundations < automation);
        assert!(out.contains("Mobile Testing (mobile-testing) [coming soon]"));
        assert!(out.contains("API Testing Fundamentals (api-testing)\n"));
    }

    #[test]
    fn filter_is_case_insensitive() {
        let dir = site();
        let out = stdout_of(hub_in(dir.path()).args(["topics", "--filter", "TESTING"]));

        assert!(out.contains("API Testing Fundamentals"));
        assert!(out.contains("Mobile Testing"));
        assert!(!out.contains("Getting Started"));
    }

    #[test]
    fn json_reports_availability() {
        let dir = site();
        let out = hub_in(dir.path())
            .args(["topics", "--json"])
            .output()
            .unwrap();
        let json: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();

        assert_eq!(json.as_array().unwrap().len(), 4);
        assert_eq!(json[1]["id"], "api-testing");
        assert_eq!(json[1]["available"], true);
        assert_eq!(json[3]["available"], false);
    }
}

mod search {
    use super::*;

    #[test]
    fn title_match_ranks_first() {
        let dir = site();
        let out = stdout_of(hub_in(dir.path()).args(["search", "token"]));

        let api = out.find("API Token Handling").unwrap();
        let ci = out.find("Pipeline Stages").unwrap();
        assert!(api < ci);
        assert!(out.contains("api-testing-1 score 11"));
        assert!(out.contains("ci-cd-pipelines-1 score 1\n"));
    }

    #[test]
    fn no_results_message() {
        let dir = site();
        hub_in(dir.path())
            .args(["search", "kubernetes"])
            .assert()
            .success()
            .stdout(predicate::str::contains("No results found for 'kubernetes'"));
    }

    #[test]
    fn json_output_and_limit() {
        let dir = site();
        let out = hub_in(dir.path())
            .args(["search", "token", "--json", "-n", "1"])
            .output()
            .unwrap();
        let json: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();

        assert_eq!(json["query"], "token");
        assert_eq!(json["total_matches"], 1);
        assert_eq!(json["results"][0]["topic_id"], "api-testing");
        assert_eq!(json["results"][0]["relevance_score"], 11);
        assert_eq!(json["results"][0]["matched_snippets"][0]["type"], "title");
    }

    #[test]
    fn multiple_terms_add_up() {
        let dir = site();
        let out = hub_in(dir.path())
            .args(["search", "api", "token", "--json"])
            .output()
            .unwrap();
        let json: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();

        // "api": section title 10, topic title 8, content 1. "token": title 10, content 1.
        assert_eq!(json["results"][0]["relevance_score"], 30);
    }

    #[test]
    fn fails_without_topics() {
        let dir = temp_dir();
        hub_in(dir.path())
            .args(["search", "token"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("no topics defined"));
    }
}

mod show {
    use super::*;

    #[test]
    fn raw_prints_markdown() {
        let dir = site();
        hub_in(dir.path())
            .args(["show", "api-testing", "--raw"])
            .assert()
            .success()
            .stdout(predicate::str::diff(API_TESTING));
    }

    #[test]
    fn alias_and_section_reference() {
        let dir = site();
        hub_in(dir.path())
            .args(["show", "api#retries", "--raw"])
            .assert()
            .success()
            .stdout(predicate::str::diff("## Retries\nBack off exponentially.\n"));
    }

    #[test]
    fn highlighted_output_has_navigation() {
        let dir = site();
        let out = stdout_of(hub_in(dir.path()).args(["show", "api-testing"]));

        assert!(out.contains("API Token Handling"));
        assert!(out.contains("<- Getting Started wit... (getting-started)"));
        assert!(out.contains("CI/CD Pipelines for... (ci-cd-pipelines) ->"));
    }

    #[test]
    fn unavailable_topic_is_coming_soon() {
        let dir = site();
        hub_in(dir.path())
            .args(["show", "mobile-testing"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("Content coming soon"));
    }

    #[test]
    fn unknown_topic_fails() {
        let dir = site();
        hub_in(dir.path())
            .args(["show", "nope"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("unknown topic: nope"));
    }
}

mod render {
    use super::*;

    #[test]
    fn writes_page_with_anchors() {
        let dir = site();
        let page_path = dir.path().join("page.html");

        hub_in(dir.path())
            .args(["render", "api-testing", "-o"])
            .arg(&page_path)
            .assert()
            .success();

        let page = fs::read_to_string(&page_path).unwrap();
        assert!(page.contains(r#"<h1 id="api-token-handling">"#));
        assert!(page.contains(r#"<h2 id="retries">"#));
        assert!(page.contains(r#"<body class="font-size-normal">"#));
    }

    #[test]
    fn follows_saved_preferences() {
        let dir = site();
        hub_in(dir.path())
            .args(["prefs", "--toggle-theme", "--font-smaller"])
            .assert()
            .success();

        hub_in(dir.path())
            .args(["render", "ci-cd-pipelines"])
            .assert()
            .success()
            .stdout(predicate::str::contains(
                r#"<body class="font-size-small light-theme">"#,
            ));
    }
}

mod prefs {
    use super::*;

    #[test]
    fn defaults_without_saved_file() {
        let dir = temp_dir();
        let out = stdout_of(hub_in(dir.path()).arg("prefs"));

        assert!(out.contains("theme      dark"));
        assert!(out.contains("font size  0 (font-size-normal)"));
    }

    #[test]
    fn font_size_clamps() {
        let dir = temp_dir();
        for _ in 0..3 {
            hub_in(dir.path())
                .args(["prefs", "--font-bigger"])
                .assert()
                .success();
        }
        let out = stdout_of(hub_in(dir.path()).arg("prefs"));
        assert!(out.contains("font size  1 (font-size-large)"));
    }

    #[test]
    fn theme_toggle_persists() {
        let dir = temp_dir();
        hub_in(dir.path())
            .args(["prefs", "--toggle-theme"])
            .assert()
            .success()
            .stdout(predicate::str::contains("Preferences saved."));

        let out = stdout_of(hub_in(dir.path()).arg("prefs"));
        assert!(out.contains("theme      light"));
    }
}

mod browse {
    use super::*;

    #[test]
    fn prints_results_for_typed_query() {
        let dir = site();
        let out = stdout_of(hub_in(dir.path()).arg("browse").write_stdin("token\n"));

        assert!(out.contains("API Token Handling"));
        assert!(out.contains("api-testing-1 score 11"));
    }

    #[test]
    fn empty_input_exits_cleanly() {
        let dir = site();
        hub_in(dir.path())
            .arg("browse")
            .write_stdin("")
            .assert()
            .success()
            .stdout(predicate::str::contains("Getting Started with SDET"));
    }
}

mod status {
    use super::*;

    #[test]
    fn without_config_suggests_init() {
        let dir = temp_dir();
        hub_in(dir.path())
            .arg("status")
            .assert()
            .success()
            .stdout(predicate::str::contains("hub init"));
    }

    #[test]
    fn reports_missing_topic_file() {
        let dir = site();
        let output = hub_in(dir.path()).arg("status").output().unwrap();
        let out = strip_ansi(&String::from_utf8_lossy(&output.stdout));

        assert!(!output.status.success());
        assert!(out.contains("4 sections indexed from 3 topics"));
        assert!(out.contains("Effective settings:"));
        assert!(out.contains("debounce_ms = 300"));
        assert!(out.contains("topic 'mobile-testing' has no content file"));
    }

    #[test]
    fn clean_site_has_no_issues() {
        let dir = site();
        write(dir.path(), "assets/data/mobile-testing.md", "# Devices\nReal phones.\n");

        hub_in(dir.path())
            .arg("status")
            .assert()
            .success()
            .stdout(predicate::str::contains("No issues found."));
    }
}

#[test]
fn quiet_and_verbose_conflict() {
    let dir = temp_dir();
    hub_in(dir.path())
        .args(["-q", "-v", "status"])
        .assert()
        .failure();
}
