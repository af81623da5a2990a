use super::common::*;
use crate::pipeline::domain::{BatchEntry, Decision, RiskCategory, ScoreSource};
use crate::pipeline::service::EvaluationError;
use crate::pipeline::validation::ValidationError;

#[test]
fn baseline_evaluation_reproduces_worked_example() {
    let service = rule_based_service();

    let record = service
        .evaluate(&baseline_application())
        .expect("evaluation succeeds");

    assert_eq!(record.default_probability, 0.15);
    assert_eq!(record.confidence, 0.6);
    assert_eq!(record.risk_category, RiskCategory::LowRisk);
    // Rule-based confidence of 0.6 sits under the gate: manual review wins
    // even though the probability alone would approve.
    assert_eq!(record.decision, Decision::ManualReview);
    assert_eq!(record.source, ScoreSource::RuleFallback);
}

#[test]
fn distressed_evaluation_caps_and_stays_gated() {
    let service = rule_based_service();

    let record = service
        .evaluate(&risky_application())
        .expect("evaluation succeeds");

    assert_eq!(record.default_probability, 0.95);
    assert_eq!(record.risk_category, RiskCategory::VeryHighRisk);
    // Confidence 0.6 < 0.7 forces manual review ahead of rejection.
    assert_eq!(record.decision, Decision::ManualReview);
}

#[test]
fn confident_model_scores_reach_the_probability_rules() {
    let service = model_service([0.25, 0.75]);

    let record = service
        .evaluate(&baseline_application())
        .expect("evaluation succeeds");

    assert_eq!(record.decision, Decision::Rejected);
    assert_eq!(record.risk_category, RiskCategory::VeryHighRisk);
}

#[test]
fn probabilities_round_to_four_decimals() {
    let service = model_service([1.0 / 3.0, 2.0 / 3.0]);

    let record = service
        .evaluate(&baseline_application())
        .expect("evaluation succeeds");

    assert_eq!(record.default_probability, 0.6667);
    assert_eq!(record.confidence, 0.6667);
}

#[test]
fn application_ids_are_fresh_and_opaque() {
    let service = rule_based_service();
    let application = baseline_application();

    let first = service.evaluate(&application).expect("first evaluation");
    let second = service.evaluate(&application).expect("second evaluation");

    assert!(first.application_id.0.starts_with("APP-"));
    assert_ne!(first.application_id, second.application_id);
}

#[test]
fn re_evaluation_is_bit_identical_apart_from_identity() {
    let service = rule_based_service();
    let application = baseline_application();

    let first = service.evaluate(&application).expect("first evaluation");
    let second = service.evaluate(&application).expect("second evaluation");

    assert_eq!(first.default_probability, second.default_probability);
    assert_eq!(first.confidence, second.confidence);
    assert_eq!(first.risk_category, second.risk_category);
    assert_eq!(first.decision, second.decision);
    assert_eq!(first.explanation, second.explanation);
}

#[test]
fn invalid_input_is_rejected_before_any_stage_runs() {
    let service = rule_based_service();

    let error = service
        .evaluate(&invalid_application())
        .expect_err("validation rejects");

    assert!(matches!(
        error,
        EvaluationError::Validation(ValidationError::NonPositiveIncome(_))
    ));
}

#[test]
fn batch_isolates_the_failing_element() {
    let service = rule_based_service();
    let applications = vec![baseline_application(), invalid_application()];

    let result = service.evaluate_batch(&applications);

    assert_eq!(result.total, 2);
    assert_eq!(result.successful, 1);
    assert_eq!(result.predictions.len(), 2);
    assert!(result.predictions[0].record().is_some());
    assert!(result.predictions[1].is_failure());
}

#[test]
fn batch_preserves_input_order() {
    let service = rule_based_service();
    let applications = vec![
        invalid_application(),
        baseline_application(),
        risky_application(),
    ];

    let result = service.evaluate_batch(&applications);

    assert!(result.predictions[0].is_failure());
    let second = result.predictions[1].record().expect("second succeeds");
    assert_eq!(second.default_probability, 0.15);
    let third = result.predictions[2].record().expect("third succeeds");
    assert_eq!(third.default_probability, 0.95);
}

#[test]
fn empty_batch_is_a_valid_batch() {
    let result = rule_based_service().evaluate_batch(&[]);

    assert_eq!(result.total, 0);
    assert_eq!(result.successful, 0);
    assert!(result.predictions.is_empty());
}

#[test]
fn batch_failures_serialize_as_error_markers() {
    let service = rule_based_service();
    let result = service.evaluate_batch(&[baseline_application(), invalid_application()]);

    let value = serde_json::to_value(&result).expect("serializes");

    assert!(value["predictions"][0].get("application_id").is_some());
    assert!(value["predictions"][1].get("error").is_some());
    assert_eq!(value["total"], 2);
    assert_eq!(value["successful"], 1);
}

#[test]
fn batch_entries_report_the_batch_counts() {
    let service = rule_based_service();
    let result = service.evaluate_batch(&[baseline_application(), invalid_application()]);

    let failures = result
        .predictions
        .iter()
        .filter(|entry| entry.is_failure())
        .count();

    assert_eq!(result.successful, result.total - failures);
}

#[test]
fn model_presence_is_observable() {
    assert!(!rule_based_service().model_loaded());
    assert!(model_service([0.5, 0.5]).model_loaded());
    assert_eq!(model_service([0.5, 0.5]).model_version(), Some("stub-v1"));
}

#[test]
fn record_serializes_with_wire_labels() {
    let service = rule_based_service();
    let record = service
        .evaluate(&risky_application())
        .expect("evaluation succeeds");

    let value = serde_json::to_value(&record).expect("serializes");

    assert_eq!(value["risk_category"], "VERY_HIGH_RISK");
    assert_eq!(value["decision"], "MANUAL_REVIEW");
    assert_eq!(value["source"], "rule_fallback");
    assert_eq!(value["explanation"]["credit_score_impact"], "high");
}
