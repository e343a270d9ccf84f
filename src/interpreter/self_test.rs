use tracing::{debug, warn};

use crate::{
    error::ErrorKind,
    evaluate_line,
    interpreter::value::symbol_table::SymbolTable,
};

/// What a self-test case should produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Expected {
    /// The line succeeds and renders as this text.
    Rendered(&'static str),
    /// The line fails with this kind of error.
    Failure(ErrorKind),
}

impl std::fmt::Display for Expected {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Rendered(text) => write!(f, "{text}"),
            Self::Failure(kind) => write!(f, "{kind}"),
        }
    }
}

/// One line of the built-in battery.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TestCase {
    /// Lines evaluated first, in order, to build the symbol table the case
    /// runs against.
    pub setup:    &'static [&'static str],
    /// The line under test.
    pub input:    &'static str,
    /// The expected outcome.
    pub expected: Expected,
}

/// The result of running one case.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestOutcome {
    /// Describes the case, and on failure what actually happened.
    pub label:  String,
    /// Whether the actual outcome matched the expected one.
    pub passed: bool,
}

/// Every outcome of a battery run, with counting helpers.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TestReport {
    outcomes: Vec<TestOutcome>,
}

impl TestReport {
    /// All outcomes in battery order.
    #[must_use]
    pub fn outcomes(&self) -> &[TestOutcome] {
        &self.outcomes
    }

    /// Consumes the report, returning the outcomes.
    #[must_use]
    pub fn into_outcomes(self) -> Vec<TestOutcome> {
        self.outcomes
    }

    /// The number of passing cases.
    #[must_use]
    pub fn passed(&self) -> usize {
        self.outcomes.iter().filter(|o| o.passed).count()
    }

    /// The number of cases run.
    #[must_use]
    pub fn total(&self) -> usize {
        self.outcomes.len()
    }

    /// The failing cases.
    pub fn failures(&self) -> impl Iterator<Item = &TestOutcome> {
        self.outcomes.iter().filter(|o| !o.passed)
    }

    /// Returns `true` when every case passed.
    #[must_use]
    pub fn all_passed(&self) -> bool {
        self.outcomes.iter().all(|o| o.passed)
    }
}

const fn case(input: &'static str, expected: Expected) -> TestCase {
    TestCase { setup: &[],
               input,
               expected }
}

const fn case_with(setup: &'static [&'static str],
                   input: &'static str,
                   expected: Expected)
                   -> TestCase {
    TestCase { setup,
               input,
               expected }
}

/// The built-in battery run by [`run_tests`].
pub const BATTERY: &[TestCase] = &[
    case("2 + 3", Expected::Rendered("5")),
    case("7 - 10", Expected::Rendered("-3")),
    case("6 * 7", Expected::Rendered("42")),
    case("8 / 4", Expected::Rendered("2")),
    case("6 / 4", Expected::Rendered("3\\2")),
    case("2 + 3 * 4", Expected::Rendered("14")),
    case("(2 + 3) * 4", Expected::Rendered("20")),
    case("8 - 3 - 2", Expected::Rendered("3")),
    case("16 / 4 / 2", Expected::Rendered("2")),
    case("2 ^ 3 ^ 2", Expected::Rendered("512")),
    case("-2 ^ 2", Expected::Rendered("4")),
    case("-(2 + 3)", Expected::Rendered("-5")),
    case("2 ^ -2", Expected::Rendered("1\\4")),
    case("6\\4", Expected::Rendered("3\\2")),
    case("2\\3 + 1\\3", Expected::Rendered("1")),
    case("1\\3 + 1\\3", Expected::Rendered("2\\3")),
    case("1\\2 * 4", Expected::Rendered("2")),
    case("1\\2 + 0.5", Expected::Rendered("1")),
    case("1.5 + 1", Expected::Rendered("2.5")),
    case("4 ^ 0.5", Expected::Rendered("2")),
    case("x = 5", Expected::Rendered("5")),
    case_with(&["x = 5"], "x * 2", Expected::Rendered("10")),
    case_with(&["x = 3", "y = 4"], "x = x + y", Expected::Rendered("7")),
    case("2 $ 3", Expected::Failure(ErrorKind::Lex)),
    case("2 + ", Expected::Failure(ErrorKind::Parse)),
    case("- - 2", Expected::Failure(ErrorKind::Parse)),
    case("(1 + 2", Expected::Failure(ErrorKind::Parse)),
    case("x + 1", Expected::Failure(ErrorKind::UnboundVariable)),
    case("1 / 0", Expected::Failure(ErrorKind::DivisionByZero)),
    case("1 / 0.0", Expected::Failure(ErrorKind::DivisionByZero)),
    case("1\\0", Expected::Failure(ErrorKind::DivisionByZero)),
    case("1.2.3", Expected::Failure(ErrorKind::Parse)),
    case("9223372036854775807 + 1", Expected::Failure(ErrorKind::Overflow)),
    case("99999999999999999999", Expected::Failure(ErrorKind::Overflow)),
];

/// Runs the built-in battery through the full pipeline.
///
/// Every case runs, whatever happened to the previous ones, and yields one
/// outcome.
///
/// # Example
/// ```
/// let outcomes = numline::run_tests();
///
/// assert!(!outcomes.is_empty());
/// assert!(outcomes.iter().all(|outcome| outcome.passed));
/// ```
#[must_use]
pub fn run_tests() -> Vec<TestOutcome> {
    run_cases(BATTERY).into_outcomes()
}

/// Runs the given cases, each against a fresh symbol table.
#[must_use]
pub fn run_cases(cases: &[TestCase]) -> TestReport {
    let outcomes: Vec<_> = cases.iter().map(run_case).collect();
    let report = TestReport { outcomes };

    debug!(passed = report.passed(), total = report.total(), "self-test finished");
    report
}

fn run_case(case: &TestCase) -> TestOutcome {
    let label = format!("{} => {}", case.input, case.expected);

    let mut table = SymbolTable::new();
    for line in case.setup {
        match evaluate_line(line, &table) {
            Ok(output) => table = output.bindings,
            Err(e) => {
                warn!(line, error = %e, "self-test setup failed");
                return TestOutcome { label:  format!("{label} (setup '{line}' failed: {e})"),
                                     passed: false, };
            },
        }
    }

    let actual = match evaluate_line(case.input, &table) {
        Ok(output) => Actual::Rendered(output.rendered),
        Err(e) => Actual::Failure(e.kind()),
    };

    let passed = match (&actual, case.expected) {
        (Actual::Rendered(Some(text)), Expected::Rendered(expected)) => text == expected,
        (Actual::Failure(kind), Expected::Failure(expected)) => *kind == expected,
        _ => false,
    };

    if passed {
        TestOutcome { label, passed }
    } else {
        TestOutcome { label: format!("{label} (got {actual})"),
                      passed }
    }
}

/// What a case actually produced.
enum Actual {
    Rendered(Option<String>),
    Failure(ErrorKind),
}

impl std::fmt::Display for Actual {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Rendered(Some(text)) => write!(f, "{text}"),
            Self::Rendered(None) => write!(f, "no value"),
            Self::Failure(kind) => write!(f, "{kind}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn battery_passes() {
        let report = run_cases(BATTERY);
        let failures: Vec<_> = report.failures().map(|o| o.label.clone()).collect();

        assert_eq!(failures, Vec::<String>::new());
        assert_eq!(report.passed(), BATTERY.len());
    }

    #[test]
    fn failing_cases_are_reported_without_stopping_the_run() {
        let cases = [case("1 + 1", Expected::Rendered("3")),
                     case("1 +", Expected::Rendered("2")),
                     case("2 * 2", Expected::Rendered("4")),
                     case_with(&["y = 1 / 0"], "y", Expected::Rendered("0"))];

        let report = run_cases(&cases);

        assert_eq!(report.total(), 4);
        assert_eq!(report.passed(), 1);
        assert!(!report.all_passed());
        assert_eq!(report.outcomes()[0].label, "1 + 1 => 3 (got 2)");
        assert_eq!(report.outcomes()[1].label, "1 + => 2 (got ParseError)");
        assert_eq!(report.outcomes()[2].label, "2 * 2 => 4");
        assert!(report.outcomes()[3].label.contains("setup 'y = 1 / 0' failed"));
    }

    #[test]
    fn blank_line_renders_nothing() {
        let report = run_cases(&[case("   ", Expected::Rendered(""))]);

        assert!(!report.all_passed());
        assert!(report.outcomes()[0].label.ends_with("(got no value)"));
    }
}
