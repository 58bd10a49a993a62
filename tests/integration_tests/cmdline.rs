use assert_cmd::{crate_name, Command};
use assertables::assert_contains;
use std::io::Write;
use svgpoly::cli::{run, Config};
use tempfile::NamedTempFile;

#[test]
fn test_cmdline_help() {
    let mut cmd = Command::cargo_bin(crate_name!()).unwrap();
    let output = String::from_utf8(cmd.arg("-h").assert().success().get_output().stdout.clone())
        .expect("non-UTF8");
    assert_contains!(output, "Usage");
}

#[test]
fn test_cmdline_bad_arg() {
    let mut cmd = Command::cargo_bin(crate_name!()).unwrap();
    cmd.arg("--no-such-flag").assert().failure().code(2);
}

#[test]
fn test_cmdline_points() {
    let mut cmd = Command::cargo_bin(crate_name!()).unwrap();
    cmd.args(["--points", "0,0 10,0 10,10"])
        .assert()
        .success()
        .stdout("M 0 0 L 10 0 L 10 10\n");
}

#[test]
fn test_cmdline_points_invalid() {
    let mut cmd = Command::cargo_bin(crate_name!()).unwrap();
    let stderr = cmd
        .args(["--points", "0,0 10"])
        .assert()
        .failure()
        .code(1)
        .get_output()
        .stderr
        .clone();
    let stderr = String::from_utf8(stderr).expect("non-UTF8");
    assert_contains!(stderr, "does not contain a valid set of points");
}

#[test]
fn test_cmdline_stdin() {
    let mut cmd = Command::cargo_bin(crate_name!()).unwrap();
    cmd.write_stdin(r#"<svg><polyline points="1 1 2 2"/></svg>"#)
        .assert()
        .success()
        .stdout(r#"<svg><path d="M 1 1 L 2 2"/></svg>"#);
}

#[test]
fn test_cmdline_config() {
    let mut tmpfile = NamedTempFile::new().expect("could not create tmpfile");
    write!(tmpfile, r#"<svg><polyline points="0 0 4 3"/></svg>"#).expect("tmpfile write failed");
    let outfile = NamedTempFile::new().expect("could not create outfile");
    let config = Config::from_cmdline(&format!(
        "{} {} -o {}",
        crate_name!(),
        tmpfile.path().to_str().unwrap(),
        outfile.path().to_str().unwrap()
    ))
    .expect("cmdline should be valid");
    run(config).expect("run failed");

    let output = std::fs::read_to_string(outfile.path()).expect("could not read outfile");
    assert_eq!(output, r#"<svg><path d="M 0 0 L 4 3"/></svg>"#);
}

#[test]
fn test_cmdline_same_in_out() {
    let tmpfile = NamedTempFile::new().expect("could not create tmpfile");
    let path = tmpfile.path().to_str().unwrap();
    let config = Config::from_cmdline(&format!("{} {path} -o {path}", crate_name!()));
    assert!(config.is_err());
}

#[cfg(feature = "json")]
#[test]
fn test_cmdline_points_json() {
    let mut cmd = Command::cargo_bin(crate_name!()).unwrap();
    cmd.args(["--points", "0 0 1.5 2", "--json"])
        .assert()
        .success()
        .stdout("[{\"cmd\":\"M\",\"x\":0.0,\"y\":0.0},{\"cmd\":\"L\",\"x\":1.5,\"y\":2.0}]\n");
}
