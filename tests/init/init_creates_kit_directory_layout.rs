use crate::common::command::{repository_dir, run_kit_command};
use assert_fs::TempDir;
use assert_fs::prelude::*;
use predicates::prelude::predicate;
use rstest::rstest;

#[rstest]
fn init_creates_kit_directory_layout(
    repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let absolute_path = repository_dir.path().canonicalize()?.display().to_string();

    run_kit_command(repository_dir.path(), &["init"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            "Initialized empty kit repository in",
        ))
        .stdout(predicate::str::contains(absolute_path));

    repository_dir
        .child(".kit/HEAD")
        .assert("ref: refs/heads/master\n");
    repository_dir.child(".kit/index").assert("");
    repository_dir
        .child(".kit/objects")
        .assert(predicate::path::is_dir());
    repository_dir
        .child(".kit/refs/heads/master")
        .assert(predicate::path::is_file());
    repository_dir
        .child(".kit/description")
        .assert(predicate::path::is_file());
    repository_dir
        .child(".kit/config")
        .assert(predicate::str::contains("fail_fast = true"));

    Ok(())
}

#[rstest]
fn init_creates_missing_target_directory(
    repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    run_kit_command(repository_dir.path(), &["init", "nested/repo"])
        .assert()
        .success();

    repository_dir
        .child("nested/repo/.kit/HEAD")
        .assert("ref: refs/heads/master\n");

    Ok(())
}
