use crate::common::command::{init_repository_dir, kit_stdout, run_kit_command};
use crate::common::file::{FileSpec, write_file};
use assert_fs::TempDir;
use predicates::prelude::predicate;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn adding_an_ignored_file_is_skipped(init_repository_dir: TempDir) {
    let root = init_repository_dir.path();
    write_file(FileSpec::new(root.join(".kitignore"), "*.log\n".to_string()));
    write_file(FileSpec::new(root.join("debug.log"), "noise".to_string()));

    run_kit_command(root, &["add", "debug.log"])
        .assert()
        .success()
        .stdout("ignored 'debug.log'\n");

    assert_eq!(kit_stdout(root, &["ls-files"]), "");
}

#[rstest]
fn adding_everything_leaves_out_ignored_files(init_repository_dir: TempDir) {
    let root = init_repository_dir.path();
    write_file(FileSpec::new(
        root.join(".kitignore"),
        "# build output\ntarget/\n*.log\n".to_string(),
    ));
    write_file(FileSpec::new(root.join("main.rs"), "fn main() {}".to_string()));
    write_file(FileSpec::new(root.join("logs").join("run.log"), "x".to_string()));
    write_file(FileSpec::new(
        root.join("target").join("debug").join("kit"),
        "binary".to_string(),
    ));

    run_kit_command(root, &["add", "."]).assert().success();

    assert_eq!(kit_stdout(root, &["ls-files"]), ".kitignore\nmain.rs\n");
}

#[rstest]
fn invalid_ignore_pattern_fails_add(init_repository_dir: TempDir) {
    let root = init_repository_dir.path();
    write_file(FileSpec::new(root.join(".kitignore"), "[oops\n".to_string()));
    write_file(FileSpec::new(root.join("a.txt"), "a".to_string()));

    run_kit_command(root, &["add", "a.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid ignore pattern '[oops'"));
}
