use crate::common::command::{init_repository_dir, kit_stdout, run_kit_command};
use crate::common::file::{FileSpec, write_file};
use assert_fs::TempDir;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn readding_a_file_supersedes_its_entry(
    init_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let root = init_repository_dir.path();
    let file = root.join("p.txt");

    write_file(FileSpec::new(file.clone(), "first".to_string()));
    run_kit_command(root, &["add", "p.txt"]).assert().success();
    write_file(FileSpec::new(file.clone(), "second".to_string()));
    run_kit_command(root, &["add", "p.txt"]).assert().success();

    let second_oid = kit_stdout(root, &["hash-object", "p.txt"]);
    let index = std::fs::read_to_string(root.join(".kit").join("index"))?;

    assert_eq!(index.lines().count(), 2);
    assert_eq!(
        kit_stdout(root, &["ls-files", "--stage"]),
        format!("{} p.txt\n", second_oid.trim())
    );

    Ok(())
}

#[rstest]
fn readding_unchanged_content_stores_one_object(
    init_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let root = init_repository_dir.path();
    write_file(FileSpec::new(root.join("a.txt"), "same".to_string()));
    write_file(FileSpec::new(root.join("b.txt"), "same".to_string()));

    run_kit_command(root, &["add", "."]).assert().success();
    run_kit_command(root, &["add", "a.txt"]).assert().success();

    let objects = walkdir::WalkDir::new(root.join(".kit").join("objects"))
        .into_iter()
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_type().is_file())
        .count();
    assert_eq!(objects, 1);

    Ok(())
}
