use std::{
    fs,
    io::Cursor,
    path::Path,
    sync::mpsc,
    thread,
    time::Duration,
};

use core_lang::{
    error::CoreError,
    interpreter::{evaluator::core::Context, symbol_table::SymbolTable},
    parse_source, print_source, run_source,
};
use walkdir::WalkDir;

#[test]
fn program_corpus_runs() {
    let mut count = 0;

    for entry in
        WalkDir::new("tests/programs").into_iter()
                                      .filter_map(Result::ok)
                                      .filter(|e| e.path().extension().is_some_and(|ext| ext == "core"))
    {
        let path = entry.path();
        let source =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));
        let input = read_sibling(path, "input").unwrap_or_default();
        let expected = read_sibling(path, "expected").unwrap_or_default();

        count += 1;
        match run(&source, &input) {
            Ok(output) => assert_eq!(output, expected, "Output of {path:?} differs"),
            Err(e) => panic!("Program {path:?} failed:\n{source}\nError: {e}"),
        }
    }

    assert!(count > 0, "No programs found in tests/programs");
}

#[test]
fn program_corpus_survives_printing() {
    for entry in
        WalkDir::new("tests/programs").into_iter()
                                      .filter_map(Result::ok)
                                      .filter(|e| e.path().extension().is_some_and(|ext| ext == "core"))
    {
        let path = entry.path();
        let source =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));

        let printed = print_source(&source).unwrap_or_else(|e| panic!("{path:?}: {e}"));
        let reprinted = print_source(&printed).unwrap_or_else(|e| panic!("{path:?}: {e}"));
        assert_eq!(printed, reprinted, "Printing {path:?} is not stable");

        let input = read_sibling(path, "input").unwrap_or_default();
        assert_eq!(run(&source, &input).ok(), run(&printed, &input).ok());
    }
}

fn read_sibling(path: &Path, extension: &str) -> Option<String> {
    fs::read_to_string(path.with_extension(extension)).ok()
}

fn run(source: &str, input: &str) -> Result<String, CoreError> {
    let mut output = Vec::new();
    run_source(source, Cursor::new(input.to_string()), &mut output)?;
    Ok(String::from_utf8(output).expect("output is UTF-8"))
}

fn assert_success(src: &str) {
    if let Err(e) = run(src, "") {
        panic!("Program failed: {e}");
    }
}

fn assert_failure(src: &str, code: i32) {
    match run(src, "") {
        Ok(_) => panic!("Program succeeded but was expected to fail"),
        Err(e) => assert_eq!(e.exit_code(), code, "Unexpected error: {e}"),
    }
}

#[test]
fn assignment_and_basic_arithmetic() {
    assert_eq!(run("program int X; begin X = 1 + 2; write X; end", "").unwrap(), "X = 3\n");
    assert_eq!(run("program int X; begin X = 7 * 9; write X; end", "").unwrap(), "X = 63\n");
    assert_eq!(run("program int X; begin X = 8 - 5; write X; end", "").unwrap(), "X = 3\n");
    assert_eq!(run("program int X; begin X = 8 - 5 - 1; write X; end", "").unwrap(), "X = 2\n");
}

#[test]
fn uninitialized_write_fails_until_assigned() {
    assert_failure("program int X; begin write X; end", 20);
    assert_eq!(run("program int X; begin X = 3; write X; end", "").unwrap(), "X = 3\n");
}

#[test]
fn write_checks_every_name_before_printing() {
    let mut output = Vec::new();
    let err = run_source("program int X, Y; begin X = 1; write X, Y; end",
                         Cursor::new(""),
                         &mut output).unwrap_err();

    assert_eq!(err.exit_code(), 20);
    assert_eq!(err.line(), 1);
    assert!(output.is_empty());
}

#[test]
fn parse_errors_stop_before_running() {
    let mut output = Vec::new();
    let err = run_source("program int X; begin X = 1; write X; Y = 2; end",
                         Cursor::new(""),
                         &mut output).unwrap_err();

    assert!(matches!(err, CoreError::Parse(_)));
    assert!(output.is_empty());
}

#[test]
fn nested_control_flow() {
    assert_success("program int I, J, N;
                    begin
                      I = 0; N = 0;
                      while ( I < 3 ) loop
                        J = 0;
                        while ( J < 4 ) loop
                          if [ ( I == J ) or ( J == 0 ) ] then N = N + 1; end;
                          J = J + 1;
                        end;
                        I = I + 1;
                      end;
                      write N;
                    end");
    assert_eq!(run("program int I, N; begin I = 0; N = 0; while ( I < 3 ) loop J = 1; end; end",
                   "").map_err(|e| e.exit_code()),
               Err(14));
}

#[test]
fn read_takes_values_in_order() {
    let output = run("program int A, B; begin read A, B; write B, A; end", "1\n-2\n").unwrap();
    assert_eq!(output, "A =? B =? B = -2\nA = 1\n");
}

#[test]
fn read_retries_out_of_range_input() {
    let output = run("program int X; begin read X; write X; end",
                     "2147483648\n-2147483649\n-2147483648\n").unwrap();
    assert_eq!(output,
               "X =? Runtime error on line 1: '2147483648' is not a 32-bit integer, try again.\n\
                X =? Runtime error on line 1: '-2147483649' is not a 32-bit integer, try again.\n\
                X =? X = -2147483648\n");
}

#[test]
fn read_fails_when_input_ends() {
    assert_failure("program int A; begin read A; end", 23);
    assert_eq!(run("program int A; begin read A; end", "x\n").unwrap_err().exit_code(), 23);
}

#[test]
fn arithmetic_range_is_enforced() {
    assert_failure("program int X; begin X = 2147483647 + 1; end", 21);
    assert_failure("program int X; begin X = 0 - 2147483647 - 1 - 1; end", 22);
    assert_failure("program int X; begin X = 65536 * 65536; end", 21);
    assert_failure("program int X; begin X = 65536 * ( 0 - 65536 ); end", 22);
    assert_success("program int X; begin X = 2147483647 + 0; end");
}

#[test]
fn overflow_names_expression_and_line() {
    let err = run("program int X;\nbegin\nX = 2147483647;\nX = X + 1;\nend", "").unwrap_err();
    assert_eq!(err.to_string(),
               "Runtime error on line 4: Integer overflow while computing 'X + 1'.");
}

#[test]
fn always_true_loop_does_not_terminate() {
    let (sender, receiver) = mpsc::channel();

    thread::spawn(move || {
        let result = run("program int X; begin X = 0; while ( X == 0 ) loop X = 0; end; end", "");
        let _ = sender.send(result.is_ok());
    });

    assert_eq!(receiver.recv_timeout(Duration::from_millis(300)),
               Err(mpsc::RecvTimeoutError::Timeout));
}

#[test]
fn symbols_are_filled_while_parsing() {
    let mut symbols = SymbolTable::new();
    parse_source("program int X, Y; int Z; begin X = 1; end", &mut symbols).unwrap();

    assert_eq!(symbols.len(), 3);
    assert_eq!(symbols.get("X"), None);
}

#[test]
fn context_exposes_values_after_running() {
    let mut symbols = SymbolTable::new();
    let program = parse_source("program int X, Y; begin read X; X = X * 3; end", &mut symbols).unwrap();

    let mut context = Context::new(&mut symbols, Cursor::new("14\n"), Vec::new());
    context.exec_program(&program).unwrap();

    assert_eq!(context.symbols().get("X"), Some(42));
    assert_eq!(context.symbols().get("Y"), None);
    assert_eq!(String::from_utf8(context.into_output()).unwrap(), "X =? ");
}
