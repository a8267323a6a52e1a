use crate::common::command::{init_repository_dir, kit_stdout, run_kit_command};
use crate::common::file::{FileSpec, write_file};
use assert_fs::TempDir;
use predicates::prelude::predicate;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn adding_a_non_existent_file_fails(init_repository_dir: TempDir) {
    run_kit_command(init_repository_dir.path(), &["add", "missing.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "pathspec 'missing.txt' did not match any files",
        ));
}

#[rstest]
fn failing_target_aborts_the_remaining_targets(init_repository_dir: TempDir) {
    let root = init_repository_dir.path();
    write_file(FileSpec::new(root.join("good.txt"), "good".to_string()));

    run_kit_command(root, &["add", "missing.txt", "good.txt"])
        .assert()
        .failure();

    assert_eq!(kit_stdout(root, &["ls-files"]), "");
}
