use crate::common::command::{init_repository_dir, kit_stdout, run_kit_command};
use crate::common::file::{FileSpec, write_file};
use assert_fs::TempDir;
use futures::future::join_all;
use pretty_assertions::assert_eq;
use rstest::rstest;

const WRITERS: usize = 8;

#[rstest]
#[tokio::test]
async fn concurrent_adds_keep_every_entry(
    init_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let root = init_repository_dir.path().to_path_buf();
    for i in 0..WRITERS {
        write_file(FileSpec::new(
            root.join(format!("file_{i}.txt")),
            format!("content {i}"),
        ));
    }

    let tasks = (0..WRITERS).map(|i| {
        let root = root.clone();
        tokio::task::spawn_blocking(move || {
            run_kit_command(&root, &["add", &format!("file_{i}.txt")])
                .assert()
                .success();
        })
    });

    for result in join_all(tasks).await {
        result?;
    }

    let expected_output = (0..WRITERS)
        .map(|i| format!("file_{i}.txt\n"))
        .collect::<String>();
    assert_eq!(kit_stdout(&root, &["ls-files"]), expected_output);

    let index = std::fs::read_to_string(root.join(".kit").join("index"))?;
    assert_eq!(index.lines().count(), WRITERS);

    Ok(())
}
