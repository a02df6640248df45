use crate::common::command::{
    git_update_ref, init_repository_dir, run_git_command, run_git_merged_command,
};
use crate::common::report_rows;
use assert_fs::TempDir;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn symbolic_refs_and_tags_never_appear(
    init_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = init_repository_dir.path();

    git_update_ref(dir, "refs/remotes/origin/master", "master");
    run_git_command(
        dir,
        &[
            "symbolic-ref",
            "refs/remotes/origin/HEAD",
            "refs/remotes/origin/master",
        ],
    )
    .assert()
    .success();
    run_git_command(dir, &["tag", "v1.0", "master~1"])
        .assert()
        .success();
    run_git_command(dir, &["tag", "-a", "v2.0", "-m", "Release 2.0"])
        .assert()
        .success();

    let output = run_git_merged_command(dir, &[]).assert().success();
    let stdout = String::from_utf8(output.get_output().stdout.clone())?;

    let mut branches = report_rows(&stdout)
        .into_iter()
        .map(|(branch, _)| branch)
        .collect::<Vec<_>>();
    branches.sort();

    assert_eq!(branches, vec!["master".to_string(), "origin/master".to_string()]);

    Ok(())
}

#[rstest]
fn detached_head_is_not_reported(
    init_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = init_repository_dir.path();

    run_git_command(dir, &["checkout", "-q", "--detach", "master~1"])
        .assert()
        .success();

    let output = run_git_merged_command(dir, &[]).assert().success();
    let stdout = String::from_utf8(output.get_output().stdout.clone())?;
    let rows = report_rows(&stdout);

    assert_eq!(rows, vec![("master".to_string(), "true".to_string())]);

    Ok(())
}
