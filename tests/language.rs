use num_rational::Ratio;
use numline::{
    ErrorKind, Number,
    Number::{Float, Integer, Rational},
    SymbolTable, evaluate_line, graph_at, run_tests,
};
use pretty_assertions::assert_eq;

/// Runs each line in order against one session table and returns the value
/// of the last one.
fn run_session(lines: &[&str]) -> (Option<Number>, SymbolTable) {
    let mut table = SymbolTable::new();
    let mut last = None;

    for line in lines {
        let output = evaluate_line(line, &table).unwrap_or_else(|e| panic!("Line '{line}' failed: {e}"));
        last = output.value;
        table = output.bindings;
    }

    (last, table)
}

fn assert_value(src: &str, expected: Number) {
    match evaluate_line(src, &SymbolTable::new()) {
        Ok(output) => assert_eq!(output.value, Some(expected), "evaluating '{src}'"),
        Err(e) => panic!("Line '{src}' failed: {e}"),
    }
}

fn assert_rendered(src: &str, expected: &str) {
    match evaluate_line(src, &SymbolTable::new()) {
        Ok(output) => assert_eq!(output.rendered.as_deref(), Some(expected), "evaluating '{src}'"),
        Err(e) => panic!("Line '{src}' failed: {e}"),
    }
}

fn assert_failure(src: &str, kind: ErrorKind) {
    match evaluate_line(src, &SymbolTable::new()) {
        Ok(output) => panic!("Line '{src}' succeeded with {:?} but was expected to fail", output.value),
        Err(e) => assert_eq!(e.kind(), kind, "evaluating '{src}'"),
    }
}

#[test]
fn integer_division_is_exact() {
    assert_value("8 / 4", Integer(2));
    assert_value("6 / 4", Rational(Ratio::new(3, 2)));
    assert_value("-6 / 4", Rational(Ratio::new(-3, 2)));
    assert_value("6 / -4", Rational(Ratio::new(-3, 2)));
    assert_value("0 / 7", Integer(0));

    for a in -12..=12 {
        for b in (-5..=5).filter(|b| *b != 0) {
            let expected = if a % b == 0 { Integer(a / b) } else { Rational(Ratio::new(a, b)) };
            assert_value(&format!("{a} / {b}"), expected);
        }
    }
}

#[test]
fn rationals_reduce_and_collapse() {
    assert_value("2\\3 + 1\\3", Integer(1));
    assert_value("1\\3 + 1\\3", Rational(Ratio::new(2, 3)));
    assert_value("1\\2 * 4", Integer(2));
    assert_value("3\\4 - 1\\4", Rational(Ratio::new(1, 2)));
    assert_rendered("6\\4", "3\\2");
    assert_rendered("1\\3 / 2", "1\\6");
}

#[test]
fn mixed_operands_promote() {
    assert_value("1\\2 + 0.5", Float(1.0));
    assert_value("1 + 1\\2", Rational(Ratio::new(3, 2)));
    assert_value("1.5 * 2", Float(3.0));
    assert_rendered("0.1 + 1", "1.1");
}

#[test]
fn precedence_and_associativity() {
    assert_value("2 + 3 * 4", Integer(14));
    assert_value("(2 + 3) * 4", Integer(20));
    assert_value("10 - 4 - 3", Integer(3));
    assert_value("2 ^ 3 ^ 2", Integer(512));
    assert_value("-2 ^ 2", Integer(4));
    assert_value("2 * -3", Integer(-6));
    assert_value("((7))", Integer(7));
}

#[test]
fn powers() {
    assert_value("2 ^ 10", Integer(1024));
    assert_value("2 ^ -2", Rational(Ratio::new(1, 4)));
    assert_value("(2\\3) ^ 2", Rational(Ratio::new(4, 9)));
    assert_value("9 ^ 0.5", Float(3.0));
    assert_value("4 ^ 1\\2", Float(2.0));
    assert_failure("0 ^ -1", ErrorKind::DivisionByZero);
    assert_failure("2 ^ 64", ErrorKind::Overflow);
}

#[test]
fn assignment_and_reference() {
    let (value, table) = run_session(&["x = 5", "x * 2"]);

    assert_eq!(value, Some(Integer(10)));
    assert_eq!(table.get("x"), Some(&Integer(5)));
    assert_eq!(table.len(), 1);
}

#[test]
fn reassignment_keeps_slot() {
    let (_, table) = run_session(&["x = 3", "y = 4", "x = 7"]);
    let names: Vec<_> = table.iter().map(|(name, value)| (name.to_string(), *value)).collect();

    assert_eq!(names, vec![("x".to_string(), Integer(7)), ("y".to_string(), Integer(4))]);
}

#[test]
fn assignment_reads_the_old_value() {
    let (value, table) = run_session(&["x = 3", "x = x + 1", "x = x * x"]);

    assert_eq!(value, Some(Integer(16)));
    assert_eq!(table.get("x"), Some(&Integer(16)));
}

#[test]
fn failed_line_leaves_table_unchanged() {
    let (_, table) = run_session(&["a = 1"]);

    assert!(evaluate_line("b = a / 0", &table).is_err());
    assert_eq!(table.get("b"), None);
    assert_eq!(table.len(), 1);
}

#[test]
fn blank_line_has_no_value() {
    let (_, table) = run_session(&["q = 2\\5"]);
    let output = evaluate_line("   ", &table).unwrap();

    assert_eq!(output.value, None);
    assert_eq!(output.rendered, None);
    assert_eq!(output.bindings, table);
}

#[test]
fn error_kinds() {
    assert_failure("2 $ 3", ErrorKind::Lex);
    assert_failure("2 + ", ErrorKind::Parse);
    assert_failure("x + 1", ErrorKind::UnboundVariable);
    assert_failure("1 / 0", ErrorKind::DivisionByZero);
    assert_failure("1 / 0.0", ErrorKind::DivisionByZero);
    assert_failure("1\\0", ErrorKind::DivisionByZero);
    assert_failure("1 2", ErrorKind::Parse);
    assert_failure("(1 + 2", ErrorKind::Parse);
    assert_failure("x = ", ErrorKind::Parse);
    assert_failure("2 = 3", ErrorKind::Parse);
    assert_failure("1.2.3", ErrorKind::Parse);
    assert_failure("9223372036854775807 * 2", ErrorKind::Overflow);
    assert_failure("99999999999999999999", ErrorKind::Overflow);
    assert_failure("1\\99999999999999999999 + 1", ErrorKind::Overflow);
}

#[test]
fn identifiers_are_case_sensitive() {
    let (_, table) = run_session(&["x = 1"]);

    assert_eq!(evaluate_line("X", &table).unwrap_err().kind(), ErrorKind::UnboundVariable);
}

#[test]
fn graphing() {
    assert_eq!(graph_at("2", "3", "4", &SymbolTable::new()).unwrap(), 11.0);
    assert_eq!(graph_at("1\\2", "0", "3", &SymbolTable::new()).unwrap(), 1.5);

    let (_, table) = run_session(&["m = 3"]);
    assert_eq!(graph_at("m", "-1", "2", &table).unwrap(), 5.0);

    let big = run_session(&["big = 9223372036854775807"]).1;
    assert_eq!(graph_at("big", "big", "1", &big).unwrap(), 1.844_674_407_370_955_2e19);
}

#[test]
fn merging_empty_delta_is_identity() {
    let (_, table) = run_session(&["x = 1", "y = 2\\3", "z = 0.5"]);

    assert_eq!(table.merge(&SymbolTable::new()), table);
}

#[test]
fn built_in_battery_passes() {
    let outcomes = run_tests();
    let failures: Vec<_> = outcomes.iter().filter(|o| !o.passed).map(|o| o.label.as_str()).collect();

    assert_eq!(failures, Vec::<&str>::new());
}
