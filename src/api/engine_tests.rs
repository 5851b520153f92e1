//! Unit tests for the evaluation engine.

use super::*;
use crate::core::filters::FilterRule;
use crate::core::gates::{GateOutcome, QualityGate, QualityGateStatus, QualityGateType};
use crate::core::health::HealthDescriptor;
use crate::core::issues::Issue;

fn report_with_issues(count: usize, severity: Severity) -> Report {
    let mut report = Report::new();
    for i in 0..count {
        report.add(Issue::new(
            format!("src/file_{i}.rs"),
            "unused",
            format!("unused variable x{i}"),
            severity,
        ));
    }
    report
}

fn gated_config() -> EvaluationConfig {
    EvaluationConfig::default()
        .with_gate(QualityGate::new(5, QualityGateType::Total, GateOutcome::Unstable))
        .with_gate(QualityGate::new(10, QualityGateType::Total, GateOutcome::Failure))
}

#[test]
fn test_empty_report_passes_gates() {
    let engine = HeimdallEngine::new(gated_config()).unwrap();
    let result = engine.evaluate(&Report::new());

    assert_eq!(result.total_issue_count, 0);
    assert_eq!(result.quality_gate_status, QualityGateStatus::Passed);
    assert!(result.info_messages.contains(
        &"PASSED - Total number of issues (any severity): 0 - Quality QualityGate: 5".to_string()
    ));
    assert!(result.info_messages.contains(
        &"PASSED - Total number of issues (any severity): 0 - Quality QualityGate: 10".to_string()
    ));
}

#[test]
fn test_five_issues_hit_unstable_gate() {
    let engine = HeimdallEngine::new(gated_config()).unwrap();
    let result = engine.evaluate(&report_with_issues(5, Severity::WarningNormal));

    assert_eq!(result.total_issue_count, 5);
    assert_eq!(result.quality_gate_status, QualityGateStatus::Warning);
    assert!(result.info_messages.contains(
        &"WARNING - Total number of issues (any severity): 5 - Quality QualityGate: 5".to_string()
    ));
    assert!(result.info_messages.contains(
        &"PASSED - Total number of issues (any severity): 5 - Quality QualityGate: 10".to_string()
    ));
}

#[test]
fn test_ten_issues_hit_both_gates() {
    let engine = HeimdallEngine::new(gated_config()).unwrap();
    let result = engine.evaluate(&report_with_issues(10, Severity::WarningNormal));

    assert_eq!(result.quality_gate_status, QualityGateStatus::Failed);
    assert!(!result.is_successful());
    assert!(result.info_messages.contains(
        &"WARNING - Total number of issues (any severity): 10 - Quality QualityGate: 5".to_string()
    ));
    assert!(result.info_messages.contains(
        &"FAILED - Total number of issues (any severity): 10 - Quality QualityGate: 10".to_string()
    ));
}

#[test]
fn test_filters_run_before_gates() {
    let config = gated_config().with_filter(FilterRule::ExcludeFile(".*".into()));
    let engine = HeimdallEngine::new(config).unwrap();
    let result = engine.evaluate(&report_with_issues(40, Severity::WarningNormal));

    assert_eq!(result.total_issue_count, 0);
    assert_eq!(result.quality_gate_status, QualityGateStatus::Passed);
    assert!(result.info_messages.contains(
        &"Applying 1 filters on the set of 40 issues (40 issues have been removed)".to_string()
    ));
}

#[test]
fn test_removal_counts_attributed_to_their_stage() {
    let config = gated_config()
        .with_filter(FilterRule::ExcludeFile("vendor/.*".into()))
        .with_minimum_severity(Severity::WarningHigh);
    let engine = HeimdallEngine::new(config).unwrap();

    // 2 issues fall to the filter, 3 more to the severity cutoff
    let mut report = report_with_issues(3, Severity::WarningLow);
    report.add(Issue::new("vendor/gen_a.rs", "style", "noise a", Severity::Error));
    report.add(Issue::new("vendor/gen_b.rs", "style", "noise b", Severity::Error));
    report.extend(report_with_issues(4, Severity::Error).issues().to_vec());

    let result = engine.evaluate(&report);
    assert_eq!(result.total_issue_count, 4);
    assert!(result.info_messages.contains(
        &"Applying 1 filters on the set of 9 issues (2 issues have been removed)".to_string()
    ));
    assert!(result.info_messages.contains(
        &"Applying minimum severity 'high' on the set of 7 issues (3 issues have been removed)"
            .to_string()
    ));
}

#[test]
fn test_minimum_severity_cutoff() {
    let config = gated_config().with_minimum_severity(Severity::WarningHigh);
    let engine = HeimdallEngine::new(config).unwrap();

    let mut report = report_with_issues(8, Severity::WarningLow);
    report.extend(report_with_issues(3, Severity::Error).issues().to_vec());

    let result = engine.evaluate(&report);
    assert_eq!(result.total_issue_count, 3);
    assert_eq!(result.quality_gate_status, QualityGateStatus::Passed);
}

#[test]
fn test_health_score_in_result() {
    let config = EvaluationConfig::default().with_health(HealthDescriptor::new(1, 9).unwrap());
    let engine = HeimdallEngine::new(config).unwrap();

    assert_eq!(engine.evaluate(&Report::new()).health_score, Some(100));
    assert_eq!(
        engine
            .evaluate(&report_with_issues(1, Severity::WarningNormal))
            .health_score,
        Some(90)
    );
    assert_eq!(
        engine
            .evaluate(&report_with_issues(9, Severity::WarningNormal))
            .health_score,
        Some(0)
    );
}

#[test]
fn test_health_disabled_by_default() {
    let engine = HeimdallEngine::new(EvaluationConfig::default()).unwrap();
    let result = engine.evaluate(&report_with_issues(3, Severity::Error));
    assert_eq!(result.health_score, None);
}

#[test]
fn test_invalid_config_rejected_at_construction() {
    let config = EvaluationConfig {
        health: Some(HealthDescriptor {
            healthy: 9,
            unhealthy: 9,
        }),
        ..EvaluationConfig::default()
    };
    assert!(HeimdallEngine::new(config).is_err());

    let config = EvaluationConfig::default().with_filter(FilterRule::ExcludeMessage("[bad".into()));
    assert!(HeimdallEngine::new(config).is_err());
}

#[test]
fn test_new_issue_gate_with_reference() {
    let config = EvaluationConfig::default().with_gate(QualityGate::new(
        2,
        QualityGateType::New,
        GateOutcome::Failure,
    ));
    let engine = HeimdallEngine::new(config).unwrap();

    let reference = report_with_issues(5, Severity::WarningNormal);
    let mut current = report_with_issues(5, Severity::WarningNormal);
    current.add(Issue::new("src/new_a.rs", "unused", "new issue a", Severity::Error));
    current.add(Issue::new("src/new_b.rs", "unused", "new issue b", Severity::Error));

    let result = engine.evaluate_with_reference(&current, &reference);
    assert_eq!(result.statistics.new_total, 2);
    assert_eq!(result.quality_gate_status, QualityGateStatus::Failed);

    // without a reference the same gate passes vacuously
    let result = engine.evaluate(&current);
    assert_eq!(result.statistics.new_total, 0);
    assert_eq!(result.quality_gate_status, QualityGateStatus::Passed);
}

#[test]
fn test_reference_goes_through_same_filters() {
    let config = EvaluationConfig::default()
        .with_filter(FilterRule::ExcludeFile("vendor/.*".into()))
        .with_gate(QualityGate::new(1, QualityGateType::New, GateOutcome::Unstable));
    let engine = HeimdallEngine::new(config).unwrap();

    // the only difference between the runs is a vendored file, which the
    // filter removes from both sides of the diff
    let mut reference = report_with_issues(2, Severity::WarningNormal);
    let mut current = report_with_issues(2, Severity::WarningNormal);
    current.add(Issue::new("vendor/gen.rs", "style", "noise", Severity::Error));
    reference.add(Issue::new("vendor/old.rs", "style", "other noise", Severity::Error));

    let result = engine.evaluate_with_reference(&current, &reference);
    assert_eq!(result.statistics.new_total, 0);
    assert_eq!(result.quality_gate_status, QualityGateStatus::Passed);
}

#[test]
fn test_report_log_precedes_gate_messages() {
    let engine = HeimdallEngine::new(gated_config()).unwrap();
    let mut report = Report::new();
    report.log_info("parsed javac output: 0 issues");
    report.log_error("could not resolve 1 source file");

    let result = engine.evaluate(&report);
    assert_eq!(result.info_messages[0], "parsed javac output: 0 issues");
    assert!(result.info_messages[1].starts_with("PASSED"));
    assert_eq!(
        result.error_messages,
        vec!["could not resolve 1 source file".to_string()]
    );
}

#[test]
fn test_evaluation_is_idempotent() {
    let config = gated_config().with_health(HealthDescriptor::new(1, 9).unwrap());
    let engine = HeimdallEngine::new(config).unwrap();
    let report = report_with_issues(7, Severity::WarningNormal);

    let first = engine.evaluate(&report);
    let second = engine.evaluate(&report);
    assert_eq!(first.quality_gate_status, second.quality_gate_status);
    assert_eq!(first.info_messages, second.info_messages);
    assert_eq!(first.health_score, second.health_score);
    assert_eq!(first.statistics, second.statistics);
}
