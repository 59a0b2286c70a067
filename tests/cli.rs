use std::io::Write;
use std::path::Path;
use std::process::{Command, Output};

use tempfile::NamedTempFile;

const NETRC: &str = "machine foo login u1 password p1\nmachine bar login u2 password p2\n";

fn netrc_file(data: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("Could not create netrc file");
    file.write_all(data.as_bytes())
        .expect("Could not write netrc file");
    file
}

fn netrc(path: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_netrc"))
        .arg("--netrc-path")
        .arg(path)
        .args(args)
        .env_remove("NETRC_LOG")
        .output()
        .expect("Could not run netrc")
}

fn stdout(output: &Output) -> &str {
    std::str::from_utf8(&output.stdout).expect("Output is not UTF-8")
}

#[test]
fn list_all_machines() {
    let file = netrc_file(NETRC);
    let output = netrc(file.path(), &[]);

    assert_eq!(Some(0), output.status.code());
    assert_eq!("foo\nbar", stdout(&output));
}

#[test]
fn list_one_machine() {
    let file = netrc_file(NETRC);
    let output = netrc(file.path(), &["bar"]);

    assert_eq!(Some(0), output.status.code());
    assert_eq!("bar", stdout(&output));
}

#[test]
fn list_credentials_only() {
    let file = netrc_file(NETRC);
    let output = netrc(file.path(), &["bar", "--login", "--password", "--no-machine"]);

    assert_eq!(Some(0), output.status.code());
    assert_eq!("u2 p2", stdout(&output));
}

#[test]
fn unknown_machine_is_not_an_error() {
    let file = netrc_file(NETRC);
    let output = netrc(file.path(), &["baz"]);

    assert_eq!(Some(0), output.status.code());
    assert_eq!("", stdout(&output));
}

#[test]
fn explicit_list_command() {
    let file = netrc_file(NETRC);
    let output = netrc(file.path(), &["list", "foo", "-lp"]);

    assert_eq!(Some(0), output.status.code());
    assert_eq!("foo u1 p1", stdout(&output));
}

#[test]
fn completion_lists_machine_names() {
    let file = netrc_file(NETRC);
    let output = netrc(file.path(), &["complete", "--login", "--no-machine"]);

    assert_eq!(Some(0), output.status.code());
    assert_eq!("foo\nbar", stdout(&output));
}

#[test]
fn default_entry_has_empty_name() {
    let file = netrc_file(
        "machine foo login u1 password p1\n\
         macdef init\ncd /pub\n\n\
         default login anonymous password guest\n",
    );
    let output = netrc(file.path(), &["-l"]);

    assert_eq!(Some(0), output.status.code());
    assert_eq!("foo u1\n anonymous", stdout(&output));
}

#[test]
fn missing_netrc_file() {
    let dir = tempfile::tempdir().expect("Could not create temp dir");
    let output = netrc(&dir.path().join("missing"), &[]);

    assert_eq!(Some(2), output.status.code());
    assert!(output.stdout.is_empty());
    assert!(!output.stderr.is_empty());
}

#[test]
fn empty_netrc_path() {
    let output = netrc(Path::new(""), &["foo"]);

    assert_eq!(Some(2), output.status.code());
    assert!(output.stdout.is_empty());
}

#[test]
fn malformed_netrc_file() {
    let file = netrc_file("machine foo login u1\nport 22\n");
    let output = netrc(file.path(), &[]);

    assert_eq!(Some(2), output.status.code());
    assert!(output.stdout.is_empty());
}

#[test]
fn unknown_subcommand() {
    let file = netrc_file(NETRC);
    let output = netrc(file.path(), &["help", "bogus"]);

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert_eq!(Some(1), output.status.code());
    assert!(output.stdout.is_empty());
    assert!(stderr.contains("Usage:"));
}

#[test]
fn unknown_flag() {
    let file = netrc_file(NETRC);
    let output = netrc(file.path(), &["--bogus"]);

    assert_eq!(Some(1), output.status.code());
    assert!(output.stdout.is_empty());
}
