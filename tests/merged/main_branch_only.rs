use crate::common::command::{init_repository_dir, run_git_merged_command};
use assert_fs::TempDir;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn main_branch_only_reports_single_merged_row(
    init_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let output = run_git_merged_command(init_repository_dir.path(), &[])
        .assert()
        .success();

    let stdout = String::from_utf8(output.get_output().stdout.clone())?;

    assert_eq!(
        stdout,
        "\
+--------+------------------+
| Branch | Merged to master |
+--------+------------------+
| master | true             |
+--------+------------------+
"
    );

    Ok(())
}
