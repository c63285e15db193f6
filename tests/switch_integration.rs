//! End-to-end switch requests against a real workspace directory.

use std::fs;
use std::path::{Path, PathBuf};

use qswitch_app::{
    NothingReason, Settings, SettingsLoader, SwitchCommand, SwitchOutcome, Switcher,
};
use quick_switch::headless::runner::{handle_request, HeadlessWorkbench};
use quick_switch::headless::HeadlessEvent;
use tempfile::TempDir;

/// Workspace with `files` created (relative paths, empty content).
fn workspace(files: &[&str]) -> TempDir {
    let temp = tempfile::tempdir().unwrap();
    for file in files {
        let path = temp.path().join(file);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, "").unwrap();
    }
    temp
}

fn settings_from(toml_text: &str) -> Settings {
    toml::from_str(toml_text).unwrap()
}

fn switcher(temp: &TempDir) -> Switcher<HeadlessWorkbench> {
    Switcher::new(HeadlessWorkbench::new(temp.path()), temp.path())
}

fn opened(path: PathBuf) -> SwitchOutcome {
    SwitchOutcome::Opened { target: path }
}

#[tokio::test]
async fn test_source_to_test_and_memory_return() {
    let temp = workspace(&["src/foo.ts", "src/foo.test.ts"]);
    let settings = settings_from(
        r#"
[[rules]]
pattern = '(.*/[^.]+)\.ts$'
list = ["$1.ts", "$1.test.ts"]
"#,
    );
    let foo = temp.path().join("src/foo.ts");
    let foo_test = temp.path().join("src/foo.test.ts");
    let mut switcher = switcher(&temp);

    let outcome = switcher.run(&settings, &foo, SwitchCommand::Switch).await.unwrap();
    assert_eq!(outcome, opened(foo_test.clone()));

    // foo.test.ts has no rule of its own, so its way back is the remembered group
    assert_eq!(
        switcher.memory().lookup(&foo_test),
        Some([foo.clone(), foo_test.clone()].as_slice())
    );
    let outcome = switcher.run(&settings, &foo_test, SwitchCommand::Switch).await.unwrap();
    assert_eq!(outcome, opened(foo));
}

#[tokio::test]
async fn test_memory_without_source_cannot_return() {
    let temp = workspace(&["src/foo.ts", "src/foo.test.ts"]);
    let settings = settings_from(
        r#"
[[rules]]
pattern = '(.*/[^.]+)\.ts$'
list = ["$1.test.ts"]
"#,
    );
    let foo = temp.path().join("src/foo.ts");
    let foo_test = temp.path().join("src/foo.test.ts");
    let mut switcher = switcher(&temp);

    let outcome = switcher.run(&settings, &foo, SwitchCommand::Switch).await.unwrap();
    assert_eq!(outcome, opened(foo_test.clone()));
    assert_eq!(
        switcher.memory().lookup(&foo_test),
        Some([foo_test.clone()].as_slice())
    );

    // The remembered group only holds foo.test.ts itself
    let outcome = switcher.run(&settings, &foo_test, SwitchCommand::Switch).await.unwrap();
    assert_eq!(
        outcome,
        SwitchOutcome::QuickOpen {
            keyword: "foo.test.ts".to_string(),
            opened: None
        }
    );
}

#[tokio::test]
async fn test_rotation_skips_missing_files() {
    let temp = workspace(&["lib/net.h", "lib/net.cpp"]);
    let settings = settings_from(
        r#"
[[rules]]
pattern = '(.*)\.(h|c|cc|cpp)$'
list = ["$1.h", "$1.c", "$1.cc", "$1.cpp"]
"#,
    );
    let header = temp.path().join("lib/net.h");
    let source = temp.path().join("lib/net.cpp");
    let mut switcher = switcher(&temp);

    let outcome = switcher.run(&settings, &header, SwitchCommand::Next).await.unwrap();
    assert_eq!(outcome, opened(source.clone()));

    // Wraps around from the last entry
    let outcome = switcher.run(&settings, &source, SwitchCommand::Next).await.unwrap();
    assert_eq!(outcome, opened(header.clone()));

    let outcome = switcher.run(&settings, &header, SwitchCommand::Previous).await.unwrap();
    assert_eq!(outcome, opened(source));
}

#[tokio::test]
async fn test_fixed_index_out_of_range() {
    let temp = workspace(&["a.ts", "a.test.ts", "a.spec.ts"]);
    let settings = settings_from(
        r#"
[[rules]]
pattern = '(.*/[^.]+)\.ts$'
list = ["$1.ts", "$1.test.ts", "$1.spec.ts"]
"#,
    );
    let mut switcher = switcher(&temp);

    let outcome = switcher
        .run(&settings, &temp.path().join("a.ts"), SwitchCommand::AtIndex(9))
        .await
        .unwrap();
    assert_eq!(
        outcome,
        SwitchOutcome::Nothing {
            reason: NothingReason::NoSelection
        }
    );

    let outcome = switcher
        .run(&settings, &temp.path().join("a.ts"), SwitchCommand::AtIndex(2))
        .await
        .unwrap();
    assert_eq!(outcome, opened(temp.path().join("a.test.ts")));
}

#[tokio::test]
async fn test_first_matching_rule_wins() {
    let temp = workspace(&["a.ts", "a.test.ts", "a.spec.ts"]);
    let settings = settings_from(
        r#"
[[rules]]
pattern = '(.*/[^.]+)\.ts$'
list = ["$1.spec.ts"]

[[rules]]
pattern = '(.*/[^.]+)\.ts$'
list = ["$1.test.ts"]
"#,
    );
    let mut switcher = switcher(&temp);

    let outcome = switcher
        .run(&settings, &temp.path().join("a.ts"), SwitchCommand::Switch)
        .await
        .unwrap();
    assert_eq!(outcome, opened(temp.path().join("a.spec.ts")));
}

#[tokio::test]
async fn test_configured_keyword_for_fallback() {
    let temp = workspace(&["docs/guide.md"]);
    let settings = settings_from(
        r#"
[quick_open_keyword]
pattern = '^.*/([^/.]+)[^/]*$'
result = "$1"
"#,
    );
    let mut switcher = switcher(&temp);

    let outcome = switcher
        .run(&settings, &temp.path().join("docs/guide.md"), SwitchCommand::Switch)
        .await
        .unwrap();
    assert_eq!(
        outcome,
        SwitchOutcome::QuickOpen {
            keyword: "guide".to_string(),
            opened: None
        }
    );
}

#[tokio::test]
async fn test_compare_reports_both_sides() {
    let temp = workspace(&["a.ts", "a.test.ts"]);
    let settings = settings_from(
        r#"
[[rules]]
pattern = '(.*/[^.]+)\.ts$'
list = ["$1.test.ts"]
"#,
    );
    let mut switcher = switcher(&temp);

    let outcome = switcher
        .run(&settings, &temp.path().join("a.ts"), SwitchCommand::CompareAsRight)
        .await
        .unwrap();
    assert_eq!(
        outcome,
        SwitchOutcome::Compared {
            left: temp.path().join("a.test.ts"),
            right: temp.path().join("a.ts"),
            title: "a.test.ts ↔ a.ts".to_string(),
        }
    );
}

#[tokio::test]
async fn test_headless_request_reloads_config() {
    let temp = workspace(&["a.ts", "a.test.ts", "a.spec.ts"]);
    let config = temp.path().join("qswitch.toml");
    let loader = SettingsLoader::new(temp.path(), Some(config.clone()));
    let mut switcher = switcher(&temp);
    let file = temp.path().join("a.ts");

    fs::write(
        &config,
        "[[rules]]\npattern = '(.*/[^.]+)\\.ts$'\nlist = [\"$1.test.ts\"]\n",
    )
    .unwrap();
    let event = handle_request(&mut switcher, &loader, SwitchCommand::Switch, &file, None).await;
    assert!(matches!(event, HeadlessEvent::Opened { ref target, .. } if target.ends_with("a.test.ts")));

    fs::write(
        &config,
        "[[rules]]\npattern = '(.*/[^.]+)\\.ts$'\nlist = [\"$1.spec.ts\"]\n",
    )
    .unwrap();
    let event = handle_request(&mut switcher, &loader, SwitchCommand::Switch, &file, None).await;
    assert!(matches!(event, HeadlessEvent::Opened { ref target, .. } if target.ends_with("a.spec.ts")));
}

#[tokio::test]
async fn test_headless_request_missing_config_is_error() {
    let temp = workspace(&["a.ts"]);
    let loader = SettingsLoader::new(temp.path(), Some(temp.path().join("missing.toml")));
    let mut switcher = switcher(&temp);

    let event = handle_request(
        &mut switcher,
        &loader,
        SwitchCommand::Switch,
        Path::new("a.ts"),
        None,
    )
    .await;
    assert!(matches!(event, HeadlessEvent::Error { fatal: true, .. }));
}
