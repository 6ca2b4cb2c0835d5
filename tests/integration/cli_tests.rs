use crate::integration::test_helpers::{
    assert_cli_error_contains, assert_cli_success, create_test_git_repo, current_branch,
    read_stack_file, run_branchswap,
};
use std::fs;
use tempfile::TempDir;

#[test]
fn test_no_arguments_parks_current_branch() {
    let (_temp_dir, repo_path) = create_test_git_repo(&["feature-a"]);

    let output = run_branchswap(&repo_path, &[]);
    assert_cli_success(&output, "stash only");

    assert_eq!(current_branch(&repo_path), "main");
    assert_eq!(read_stack_file(&repo_path), vec!["main"]);
}

#[test]
fn test_swap_then_list_then_restore() {
    let (_temp_dir, repo_path) = create_test_git_repo(&["feature-a", "feature-b"]);

    assert_cli_success(&run_branchswap(&repo_path, &["feature-a"]), "swap to feature-a");
    assert_eq!(current_branch(&repo_path), "feature-a");

    assert_cli_success(&run_branchswap(&repo_path, &["feature-b"]), "swap to feature-b");
    assert_eq!(current_branch(&repo_path), "feature-b");

    let output = run_branchswap(&repo_path, &["--list"]);
    assert_cli_success(&output, "list");
    assert_eq!(
        String::from_utf8_lossy(&output.stdout),
        "0: main\n1: feature-a\n"
    );

    assert_cli_success(&run_branchswap(&repo_path, &["-i", "0"]), "restore index 0");
    assert_eq!(current_branch(&repo_path), "main");
    assert_eq!(read_stack_file(&repo_path), vec!["feature-a", "feature-b"]);
}

#[test]
fn test_list_prunes_stale_entries() {
    let (_temp_dir, repo_path) = create_test_git_repo(&["feature-a"]);
    fs::write(
        repo_path.join(".branchswap"),
        "feature-a\ngone\nmain\nfeature-a\n",
    )
    .unwrap();

    let output = run_branchswap(&repo_path, &["--ls"]);
    assert_cli_success(&output, "list");

    assert_eq!(
        String::from_utf8_lossy(&output.stdout),
        "0: feature-a\n1: main\n"
    );
    assert_eq!(
        fs::read_to_string(repo_path.join(".branchswap")).unwrap(),
        "feature-a\nmain\n"
    );
}

#[test]
fn test_index_out_of_range_fails() {
    let (_temp_dir, repo_path) = create_test_git_repo(&["feature-a"]);
    fs::write(repo_path.join(".branchswap"), "feature-a\n").unwrap();

    let output = run_branchswap(&repo_path, &["--index", "5"]);
    assert_cli_error_contains(&output, "restore index 5", "out of range");

    assert_eq!(current_branch(&repo_path), "main");
    assert_eq!(read_stack_file(&repo_path), vec!["feature-a"]);
}

#[test]
fn test_unknown_branch_fails_but_keeps_park() {
    let (_temp_dir, repo_path) = create_test_git_repo(&[]);

    let output = run_branchswap(&repo_path, &["does-not-exist"]);
    assert_cli_error_contains(&output, "swap to unknown branch", "does-not-exist");

    assert_eq!(current_branch(&repo_path), "main");
    assert_eq!(read_stack_file(&repo_path), vec!["main"]);
}

#[test]
fn test_subdirectory_uses_repository_root_file() {
    let (_temp_dir, repo_path) = create_test_git_repo(&["feature-a"]);
    let nested = repo_path.join("src").join("nested");
    fs::create_dir_all(&nested).unwrap();

    assert_cli_success(&run_branchswap(&nested, &["feature-a"]), "swap from subdirectory");

    assert!(!nested.join(".branchswap").exists());
    assert_eq!(read_stack_file(&repo_path), vec!["main"]);
}

#[test]
fn test_explicit_file_option() {
    let (_temp_dir, repo_path) = create_test_git_repo(&["feature-a"]);

    assert_cli_success(
        &run_branchswap(&repo_path, &["--file", "parked.txt", "feature-a"]),
        "swap with --file",
    );

    assert_eq!(
        fs::read_to_string(repo_path.join("parked.txt")).unwrap(),
        "main\n"
    );
    assert!(!repo_path.join(".branchswap").exists());
}

#[test]
fn test_libgit2_backend() {
    let (_temp_dir, repo_path) = create_test_git_repo(&["feature-a"]);

    assert_cli_success(
        &run_branchswap(&repo_path, &["--backend", "libgit2", "feature-a"]),
        "swap with libgit2",
    );

    assert_eq!(current_branch(&repo_path), "feature-a");
    assert_eq!(read_stack_file(&repo_path), vec!["main"]);
}

#[test]
fn test_outside_repository_fails() {
    let temp_dir = TempDir::new().unwrap();

    let output = run_branchswap(temp_dir.path(), &["--list"]);
    assert_cli_error_contains(&output, "list outside repository", "Version control query failed");
}

#[test]
fn test_completions_do_not_touch_repository() {
    let temp_dir = TempDir::new().unwrap();

    let output = run_branchswap(temp_dir.path(), &["--completions", "bash"]);
    assert_cli_success(&output, "completions");

    assert!(String::from_utf8_lossy(&output.stdout).contains("branchswap"));
    assert!(!temp_dir.path().join(".branchswap").exists());
}
