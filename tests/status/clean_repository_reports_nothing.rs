use crate::common::command::{init_repository_dir, kit_stdout, porcelain_status};
use assert_fs::TempDir;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn clean_repository_reports_nothing(init_repository_dir: TempDir) {
    let root = init_repository_dir.path();

    assert_eq!(porcelain_status(root), "");
    assert_eq!(
        kit_stdout(root, &["status"]),
        "On branch master\nnothing to report, working tree clean\n"
    );
}
