use crate::common::command::{
    git_init, init_repository_dir, repository_dir, run_git_merged_command,
};
use assert_fs::TempDir;
use predicates::prelude::predicate;
use rstest::rstest;

#[rstest]
fn nonexistent_main_branch_fails_before_printing(init_repository_dir: TempDir) {
    run_git_merged_command(init_repository_dir.path(), &["--main", "develop"])
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("failed to resolve revision 'develop'"));
}

#[rstest]
fn unborn_main_branch_fails(repository_dir: TempDir) {
    git_init(repository_dir.path());

    run_git_merged_command(repository_dir.path(), &[])
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("failed to resolve revision 'master'"));
}

#[rstest]
#[case("main..")]
#[case("feature.lock")]
#[case("HEAD~1")]
fn invalid_main_branch_name_fails(init_repository_dir: TempDir, #[case] name: &str) {
    run_git_merged_command(init_repository_dir.path(), &["--main", name])
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("invalid branch name"));
}

#[rstest]
fn outside_repository_fails(repository_dir: TempDir) {
    run_git_merged_command(repository_dir.path(), &[])
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("failed to open repository"));
}

#[rstest]
fn subdirectory_of_repository_is_not_searched_upwards(init_repository_dir: TempDir) {
    let nested = init_repository_dir.path().join("nested");
    std::fs::create_dir_all(&nested).expect("Failed to create nested directory");

    run_git_merged_command(&nested, &[])
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to open repository"));
}
