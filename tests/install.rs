use std::fs;
use std::path::Path;

use awp::install::{InstallOutcome, install};

#[test]
fn appends_function_to_rc_file() {
    let dir = tempfile::tempdir().expect("tempdir");
    let rc_file = dir.path().join(".zshrc");
    fs::write(&rc_file, "export EDITOR=vim").expect("seed rc file");

    let outcome = install(&rc_file, Path::new("/usr/local/bin/awp")).expect("install should work");
    assert_eq!(outcome, InstallOutcome::Installed(rc_file.clone()));

    let contents = fs::read_to_string(&rc_file).expect("read rc file");
    assert!(contents.starts_with("export EDITOR=vim\n\nfunction awp {\n"));
    assert!(contents.contains("eval \"$('/usr/local/bin/awp' \"$@\")\""));
}

#[test]
fn second_install_is_a_no_op() {
    let dir = tempfile::tempdir().expect("tempdir");
    let rc_file = dir.path().join(".zshrc");
    let binary = Path::new("/usr/local/bin/awp");

    install(&rc_file, binary).expect("first install");
    let before = fs::read_to_string(&rc_file).expect("read rc file");

    let outcome = install(&rc_file, binary).expect("second install");
    assert_eq!(outcome, InstallOutcome::AlreadyInstalled(rc_file.clone()));
    assert_eq!(fs::read_to_string(&rc_file).expect("read rc file"), before);
}

#[test]
fn creates_missing_rc_file() {
    let dir = tempfile::tempdir().expect("tempdir");
    let rc_file = dir.path().join("nested").join(".zshrc");

    install(&rc_file, Path::new("/usr/local/bin/awp")).expect("install should work");
    let contents = fs::read_to_string(&rc_file).expect("read rc file");
    assert!(contents.starts_with("\nfunction awp {\n"));
}
