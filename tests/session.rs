use std::io::{self, BufReader, Read};

use pretty_assertions::assert_eq;
use tally::{Error, Session, SessionOptions};

struct Transcript {
    output: String,
    errors: String,
    result: Result<(), Error>,
}

fn run_with(input: &[u8], options: SessionOptions) -> Transcript {
    let mut output = Vec::new();
    let mut errors = Vec::new();
    let result = Session::new(input, &mut output, &mut errors, options).run();

    Transcript { output: String::from_utf8(output).expect("output is utf-8"),
                 errors: String::from_utf8(errors).expect("errors are utf-8"),
                 result }
}

fn run(input: &str) -> Transcript {
    run_with(input.as_bytes(),
             SessionOptions { prompt: false,
                              ..SessionOptions::default() })
}

#[test]
fn declaration_then_use() {
    let t = run("let x = 2 = x * 3 =");
    assert_eq!(t.output, "= 2\n= 6\n");
    assert_eq!(t.errors, "");
    assert!(t.result.is_ok());
}

#[test]
fn prompt_precedes_every_statement() {
    let t = run_with(b"let x = 2 = x * 3 =\n", SessionOptions::default());
    assert_eq!(t.output, "> = 2\n> = 6\n> ");
}

#[test]
fn predefined_constant() {
    assert_eq!(run("pi =").output, "= 3.1415926535\n");
}

#[test]
fn constants_can_be_disabled() {
    let t = run_with(b"pi =\n1 =",
                     SessionOptions { prompt:    false,
                                      constants: false, });
    assert_eq!(t.output, "= 1\n");
    assert_eq!(t.errors, "undefined variable pi\n");
}

#[test]
fn divide_by_zero_does_not_end_the_session() {
    let t = run("1 / 0 =\n2 + 2 =");
    assert_eq!(t.output, "= 4\n");
    assert_eq!(t.errors, "divide by zero\n");
    assert!(t.result.is_ok());
}

#[test]
fn unbalanced_group_recovers_at_its_own_terminator() {
    let t = run("(2 + 3 = 4 =");
    assert_eq!(t.output, "= 4\n");
    assert_eq!(t.errors, "')' expected\n");
}

#[test]
fn recovery_discards_the_rest_of_the_statement() {
    let t = run("y + 1 * 2 = 3 =");
    assert_eq!(t.output, "= 3\n");
    assert_eq!(t.errors, "undefined variable y\n");
}

#[test]
fn bad_token_is_recoverable() {
    let t = run("2 # 3 =\n5 =");
    assert_eq!(t.output, "= 5\n");
    assert_eq!(t.errors, "bad token #\n");
    assert!(t.result.is_ok());
}

#[test]
fn duplicate_declaration_keeps_the_first_value() {
    let t = run("let x = 1 = let x = 2 = x =");
    assert_eq!(t.output, "= 1\n= 1\n");
    assert_eq!(t.errors, "duplicate declaration x\n");
}

#[test]
fn several_errors_in_one_session() {
    let t = run("1 % 0 =\n(0 - 1)! =\n2.5! =\nlet = 1 =\n7 =");
    assert_eq!(t.output, "= 7\n");
    assert_eq!(t.errors,
               "modulo by zero\nfactorial of negative number -1\nfactorial of non-integer \
                2.5\nname expected in declaration\n");
}

#[test]
fn failed_declaration_discards_its_initializer() {
    let t = run("let = 1 =\n7 =");
    assert_eq!(t.output, "= 7\n");
    assert_eq!(t.errors, "name expected in declaration\n");
}

#[test]
fn invalid_utf8_is_a_bad_token() {
    let t = run_with(b"1 =\n\xff =\n2 =\n",
                     SessionOptions { prompt: false,
                                      ..SessionOptions::default() });
    assert_eq!(t.output, "= 1\n= 2\n");
    assert!(t.errors.starts_with("bad token"), "unexpected errors: {:?}", t.errors);
    assert_eq!(t.errors.lines().count(), 1);
    assert!(t.result.is_ok());
}

#[test]
fn deep_nesting_is_reported_and_skipped() {
    let input = format!("{}1{} =\n2 =", "(".repeat(10_000), ")".repeat(10_000));
    let t = run(&input);
    assert_eq!(t.output, "= 2\n");
    assert_eq!(t.errors, "expression nested deeper than 256 levels\n");
    assert!(t.result.is_ok());
}

#[test]
fn exponent_without_digits_splits_into_number_and_name() {
    assert_eq!(run("2e =").output, "= 2\n= 2.7182818284\n");
}

#[test]
fn repeated_terminators_are_ignored() {
    let t = run("= = 3 = = = 4 =");
    assert_eq!(t.output, "= 3\n= 4\n");
}

#[test]
fn quit_stops_reading() {
    let t = run("1 =\nq\n2 =");
    assert_eq!(t.output, "= 1\n");
    assert!(t.result.is_ok());
}

#[test]
fn last_statement_needs_no_terminator() {
    assert_eq!(run("2 + 3").output, "= 5\n");
}

#[test]
fn input_ending_mid_statement() {
    let t = run("4 =\n2 +");
    assert_eq!(t.output, "= 4\n");
    assert_eq!(t.errors, "unexpected end of input\n");
    assert!(t.result.is_ok());
}

#[test]
fn statement_spanning_lines() {
    assert_eq!(run("1 +\n2\n*\n3 =").output, "= 7\n");
}

#[test]
fn declarations_persist_in_the_session() {
    let mut output = Vec::new();
    let mut errors = Vec::new();
    let mut session = Session::new("let a = 1 = let b = a + 1 =".as_bytes(),
                                   &mut output,
                                   &mut errors,
                                   SessionOptions::default());
    session.run().expect("session runs");

    let names: Vec<&str> = session.variables()
                                  .iter()
                                  .map(|variable| variable.name.as_str())
                                  .collect();
    assert_eq!(names, ["pi", "e", "a", "b"]);
    assert_eq!(session.variables().get_value("b"), Ok(2.0));
}

struct FailingReader;

impl Read for FailingReader {
    fn read(&mut self, _: &mut [u8]) -> io::Result<usize> {
        Err(io::Error::other("device unplugged"))
    }
}

#[test]
fn read_failure_is_fatal() {
    let mut output = Vec::new();
    let mut errors = Vec::new();
    let result = Session::new(BufReader::new(FailingReader),
                              &mut output,
                              &mut errors,
                              SessionOptions::default()).run();

    let err = result.expect_err("read failure ends the session");
    assert!(matches!(err, Error::Io(_)));
    assert!(err.is_fatal());
}
