use assert_cmd::Command;
use std::path::Path;

pub fn diary_cmd() -> Command {
    let mut cmd = Command::cargo_bin("diary").unwrap();
    cmd.env_remove("DIARY_ROOT");
    cmd.env_remove("DIARY_DATE_FORMAT");
    cmd.env_remove("RUST_LOG");
    cmd
}

/// Run `diary new` in `root` and return the printed entry id
#[allow(dead_code)]
pub fn new_entry(root: &Path, title: &str, date: &str) -> String {
    let output = diary_cmd()
        .current_dir(root)
        .args(["new", title, "body text", "--date", date])
        .output()
        .unwrap();
    assert!(output.status.success(), "diary new failed: {:?}", output);
    String::from_utf8(output.stdout).unwrap().trim().to_string()
}
