use assert_cmd::Command;

pub fn temple_cmd() -> Command {
    let mut cmd = Command::cargo_bin("temple").unwrap();
    cmd.env_remove("RUST_LOG");
    cmd
}
