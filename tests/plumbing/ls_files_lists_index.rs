use crate::common::command::{init_repository_dir, kit_stdout, run_kit_command, staged_repository_dir};
use crate::common::file::{FileSpec, delete_path, write_file};
use assert_fs::TempDir;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn ls_files_on_empty_index_prints_nothing(init_repository_dir: TempDir) {
    assert_eq!(kit_stdout(init_repository_dir.path(), &["ls-files"]), "");
}

#[rstest]
fn ls_files_stage_shows_object_ids(init_repository_dir: TempDir) {
    let root = init_repository_dir.path();
    write_file(FileSpec::new(root.join("x.txt"), "x".to_string()));
    run_kit_command(root, &["add", "x.txt"]).assert().success();

    assert_eq!(
        kit_stdout(root, &["ls-files", "-s"]),
        "4b6cea43da6e13c24f191bcb97b51a58781d1ccdd8281d96291a2582f5177b78 x.txt\n"
    );
}

#[rstest]
fn ls_files_keeps_entries_of_deleted_files(staged_repository_dir: TempDir) {
    let root = staged_repository_dir.path();
    delete_path(&root.join("a"));

    assert_eq!(kit_stdout(root, &["ls-files"]), "1.txt\na/2.txt\na/b/3.txt\n");
}
