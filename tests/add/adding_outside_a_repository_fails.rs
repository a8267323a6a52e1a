use crate::common::command::{repository_dir, run_kit_command};
use crate::common::file::{FileSpec, write_file};
use assert_fs::TempDir;
use predicates::prelude::predicate;
use rstest::rstest;

#[rstest]
fn adding_outside_a_repository_fails(repository_dir: TempDir) {
    let root = repository_dir.path();
    write_file(FileSpec::new(root.join("a.txt"), "a".to_string()));

    run_kit_command(root, &["add", "a.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not a kit repository"));
}
