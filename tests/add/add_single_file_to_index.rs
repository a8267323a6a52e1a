use crate::common::command::{init_repository_dir, run_kit_command};
use crate::common::file::{FileSpec, write_file};
use assert_fs::TempDir;
use assert_fs::prelude::*;
use predicates::prelude::predicate;
use pretty_assertions::assert_eq;
use rstest::rstest;

const HELLO_OID: &str = "8aec4e4876f854f688d0ebfc8f37598f38e5fd6903cccc850ca36591175aeb60";

#[rstest]
fn add_single_file_to_index(
    init_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let root = init_repository_dir.path();
    write_file(FileSpec::new(root.join("hello.txt"), "hello".to_string()));

    run_kit_command(root, &["add", "hello.txt"])
        .assert()
        .success()
        .stdout("add 'hello.txt'\n");

    let index = std::fs::read_to_string(root.join(".kit").join("index"))?;
    assert_eq!(index, format!("{HELLO_OID} hello.txt\n"));

    init_repository_dir
        .child(".kit/objects/8a")
        .child(&HELLO_OID[2..])
        .assert("hello");

    Ok(())
}

#[rstest]
fn add_single_file_from_subdirectory_path(
    init_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let root = init_repository_dir.path();
    write_file(FileSpec::new(
        root.join("src").join("lib.rs"),
        "pub fn f() {}".to_string(),
    ));

    run_kit_command(root, &["add", "./src/../src/lib.rs"])
        .assert()
        .success()
        .stdout(predicate::str::contains("add 'src/lib.rs'"));

    let index = std::fs::read_to_string(root.join(".kit").join("index"))?;
    assert!(index.ends_with(" src/lib.rs\n"));

    Ok(())
}
