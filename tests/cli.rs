use std::process::Command;

fn core_lang(args: &[&str]) -> std::process::Output {
    Command::new(env!("CARGO_BIN_EXE_core-lang")).args(args)
                                                 .output()
                                                 .expect("binary runs")
}

#[test]
fn runtime_error_is_reported_once() {
    let output = core_lang(&["tests/cli/uninitialized.core"]);
    let stderr = String::from_utf8(output.stderr).expect("stderr is UTF-8");

    assert_eq!(output.status.code(), Some(20));
    assert_eq!(stderr, "Runtime error on line 4: Variable X is uninitialized.\n");
}

#[test]
fn missing_file_exits_with_one() {
    let output = core_lang(&["tests/cli/does_not_exist.core"]);
    let stderr = String::from_utf8(output.stderr).expect("stderr is UTF-8");

    assert_eq!(output.status.code(), Some(1));
    assert_eq!(stderr.lines().count(), 1, "{stderr}");
    assert!(stderr.starts_with("Failed to read the input file"));
}
