use std::path::Path;

use assert_cmd::Command;
use tempfile::TempDir;

/// Run `git` in `dir` and assert success, returning stdout.
pub fn git(dir: &Path, args: &[&str]) -> Vec<u8> {
    let out = Command::new("git")
        .args(args)
        .current_dir(dir)
        .assert()
        .success();
    out.get_output().stdout.clone()
}

/// Fresh repository with a local identity and no commits.
pub fn init_repo() -> TempDir {
    let td = TempDir::new().unwrap();
    git(td.path(), &["init", "-q"]);
    git(td.path(), &["config", "user.name", "Test User"]);
    git(td.path(), &["config", "user.email", "test@example.com"]);
    git(td.path(), &["config", "commit.gpgsign", "false"]);
    td
}

/// Write `content` to `name` and commit it.
pub fn commit_file(dir: &Path, name: &str, content: &str, message: &str) {
    std::fs::write(dir.join(name), content).unwrap();
    git(dir, &["add", name]);
    git(dir, &["commit", "-q", "-m", message]);
}

/// Binary under test, running in `dir`.
pub fn lastdiff(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("git-lastdiff").unwrap();
    cmd.current_dir(dir).env_remove("RUST_LOG");
    cmd
}
