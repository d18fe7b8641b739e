//! # Replay Driver Unit Tests / 回放驱动单元测试
//!
//! Tests that the replay driver re-issues recorded events in order and
//! tallies them correctly.
//!
//! 测试回放驱动按顺序重新发出已记录的事件并正确统计。

mod common;

use common::{captured, capturing_printer};
use result_printer::core::config::{ReplayEvent, ReplayScript};
use result_printer::core::models::{error_with_causes, TestCase};
use result_printer::core::replay::{replay, ReplayOutcome};
use result_printer::{AssertionFailure, ErrorReport, Test, TestListener};

/// Records every notification it receives as a line of text.
#[derive(Default)]
struct RecordingListener {
    calls: Vec<String>,
}

impl TestListener for RecordingListener {
    fn add_error(&mut self, test: &dyn Test, error: &anyhow::Error) {
        self.calls.push(format!("error {test}: {error:#}"));
    }

    fn add_failure(&mut self, test: &dyn Test, failure: &AssertionFailure) {
        self.calls.push(format!("failure {test}: {failure}"));
    }

    fn end_test(&mut self, test: &dyn Test) {
        self.calls.push(format!("end {test}"));
    }

    fn start_test(&mut self, test: &dyn Test) {
        self.calls.push(format!("start {test}"));
    }
}

impl ErrorReport for RecordingListener {
    fn report_errors(&mut self) {
        self.calls.push("report".to_string());
    }
}

fn mixed_events() -> Vec<ReplayEvent> {
    vec![
        ReplayEvent::Start { test: TestCase::new("A") },
        ReplayEvent::Error {
            test: TestCase::new("A"),
            message: "boom".to_string(),
            causes: vec!["disk full".to_string()],
        },
        ReplayEvent::End { test: TestCase::new("A") },
        ReplayEvent::Start { test: TestCase::new("B") },
        ReplayEvent::Failure {
            test: TestCase::new("B"),
            message: Some("expected 1 but was 2".to_string()),
        },
        ReplayEvent::End { test: TestCase::new("B") },
        ReplayEvent::Report,
    ]
}

#[cfg(test)]
mod dispatch_tests {
    use super::*;

    #[test]
    fn test_events_are_dispatched_in_order() {
        let mut listener = RecordingListener::default();
        replay(&mixed_events(), &mut listener);

        assert_eq!(
            listener.calls,
            vec![
                "start A",
                "error A: boom: disk full",
                "end A",
                "start B",
                "failure B: expected 1 but was 2",
                "end B",
                "report",
            ]
        );
    }

    #[test]
    fn test_outcome_tallies_each_kind() {
        let mut listener = RecordingListener::default();
        let outcome = replay(&mixed_events(), &mut listener);

        assert_eq!(
            outcome,
            ReplayOutcome {
                started: 2,
                ended: 2,
                errors: 1,
                failures: 1,
                reports: 1,
            }
        );
        assert!(!outcome.is_successful());
    }

    #[test]
    fn test_clean_run_is_successful() {
        let events = vec![
            ReplayEvent::Start { test: TestCase::new("A") },
            ReplayEvent::End { test: TestCase::new("A") },
        ];
        let outcome = replay(&events, &mut RecordingListener::default());
        assert!(outcome.is_successful());
        assert_eq!(outcome.started, 1);
    }

    #[test]
    fn test_empty_script_issues_nothing() {
        let mut listener = RecordingListener::default();
        let outcome = replay(&[], &mut listener);
        assert!(listener.calls.is_empty());
        assert_eq!(outcome, ReplayOutcome::default());
    }
}

#[cfg(test)]
mod printer_replay_tests {
    use super::*;

    #[test]
    fn test_replay_drives_printer() {
        let mut printer = capturing_printer();
        replay(&mixed_events(), &mut printer);

        let expected_error = error_with_causes("boom", &["disk full"]);
        let output = captured(&printer);

        assert_eq!(printer.test_number(), 2);
        assert_eq!(printer.messages().lines().next(), Some("1: A FAILED:"));
        assert!(printer.messages().contains(&expected_error.to_string()));
        assert!(printer.messages().contains("disk full"));
        assert!(printer.messages().ends_with("2: B FAILED:\nexpected 1 but was 2\n"));
        assert!(output.starts_with(
            "1: A running...ERROR...\n2: B running...FAILURE...\nThere were test failures:\n\n1: A FAILED:\nboom"
        ));
        assert!(output.ends_with("2: B FAILED:\nexpected 1 but was 2\n\n"));
    }

    #[test]
    fn test_replay_of_loaded_failure_script() {
        let script = ReplayScript::from_toml_str(
            r#"
[[events]]
kind = "start"
test = "T1"

[[events]]
kind = "start"
test = "T2"

[[events]]
kind = "failure"
test = "T2"
message = "expected 1 but was 2"
"#,
        )
        .unwrap();

        let mut printer = capturing_printer();
        replay(&script.events, &mut printer);

        assert_eq!(printer.messages(), "2: T2 FAILED:\nexpected 1 but was 2\n");
        assert_eq!(
            captured(&printer),
            "1: T1 running...2: T2 running...FAILURE..."
        );
    }
}
