/// Integration tests for the full evaluation pipeline
///
/// These tests verify:
/// 1. The WHO default limit table builds from the substance registry
/// 2. A realistic mixed dataset evaluates end to end
/// 3. Failures partition cleanly without disturbing sibling samples
/// 4. The report layer carries results through to JSON
/// 5. Full pipeline: limits → evaluate → summarize → report
///
/// Everything here is pure computation, with no network access and no
/// fixtures on disk.
///
/// Run with: cargo test --test engine_pipeline

use hpi_engine::analysis::evaluation::evaluate_dataset;
use hpi_engine::index::risk::RiskTier;
use hpi_engine::model::{EngineError, SampleRecord};
use hpi_engine::{report, substances};

use std::collections::BTreeMap;

// ---------------------------------------------------------------------------
// Test Helpers
// ---------------------------------------------------------------------------

fn sample(id: &str, entries: &[(&str, f64)]) -> SampleRecord {
    let concentrations: BTreeMap<String, f64> = entries
        .iter()
        .map(|(substance, c)| (substance.to_string(), *c))
        .collect();
    SampleRecord::new(id, concentrations)
}

/// A field campaign's worth of river samples, mg/L. Concentrations are
/// chosen as power-of-two multiples of the WHO limits where a test needs
/// an exact index.
fn campaign_dataset() -> Vec<SampleRecord> {
    vec![
        // Every metal at 2x its limit: Qi 200 across the board.
        sample(
            "Pra River at Twifo Praso",
            &[
                ("arsenic", 0.02),
                ("cadmium", 0.006),
                ("chromium", 0.1),
                ("lead", 0.02),
            ],
        ),
        // Every metal at half its limit: Qi 50 across the board.
        sample(
            "Densu River at Nsawam",
            &[
                ("arsenic", 0.005),
                ("cadmium", 0.0015),
                ("chromium", 0.025),
                ("lead", 0.005),
            ],
        ),
        // Lead was never measured at this site.
        sample(
            "Offin River at Dunkwa",
            &[("arsenic", 0.004), ("cadmium", 0.001), ("chromium", 0.02)],
        ),
        // Heavily dredged reach: 4x limits.
        sample(
            "Ankobra River at Prestea",
            &[
                ("arsenic", 0.04),
                ("cadmium", 0.012),
                ("chromium", 0.2),
                ("lead", 0.04),
            ],
        ),
    ]
}

// ---------------------------------------------------------------------------
// WHO Default Limit Table
// ---------------------------------------------------------------------------

#[test]
fn test_who_default_table_covers_the_four_monitored_metals() {
    let limits = substances::who_limit_table().expect("registry defaults should validate");
    assert_eq!(limits.len(), 4);
    assert_eq!(limits.limit_for("arsenic"), Some(0.01));
    assert_eq!(limits.limit_for("cadmium"), Some(0.003));
    assert_eq!(limits.limit_for("chromium"), Some(0.05));
    assert_eq!(limits.limit_for("lead"), Some(0.01));
}

// ---------------------------------------------------------------------------
// End-to-End Evaluation
// ---------------------------------------------------------------------------

#[test]
fn test_campaign_dataset_evaluates_with_expected_tiers() {
    let limits = substances::who_limit_table().expect("defaults should validate");
    let result = evaluate_dataset(&campaign_dataset(), &limits);

    assert_eq!(result.summary.total, 4);
    assert_eq!(result.summary.evaluated, 3);
    assert_eq!(result.summary.failed, 1);

    let pra = &result.evaluations[0];
    assert_eq!(pra.sample_id, "Pra River at Twifo Praso");
    assert_eq!(pra.hpi, 200.0);
    assert_eq!(pra.tier, RiskTier::High);
    assert_eq!(
        pra.exceedances,
        vec!["arsenic", "cadmium", "chromium", "lead"],
        "every metal at 2x its limit exceeds"
    );

    let densu = &result.evaluations[1];
    assert_eq!(densu.hpi, 50.0);
    assert_eq!(densu.tier, RiskTier::Low, "HPI of exactly 50 stays Low");
    assert!(densu.exceedances.is_empty());

    let ankobra = &result.evaluations[2];
    assert_eq!(ankobra.hpi, 400.0);
    assert_eq!(ankobra.tier, RiskTier::High);
}

#[test]
fn test_unmeasured_metal_fails_only_its_own_sample() {
    let limits = substances::who_limit_table().expect("defaults should validate");
    let result = evaluate_dataset(&campaign_dataset(), &limits);

    assert_eq!(result.failures.len(), 1);
    let failure = &result.failures[0];
    assert_eq!(failure.sample_id, "Offin River at Dunkwa");
    assert_eq!(failure.row, 2);
    assert_eq!(
        failure.error,
        EngineError::IncompleteSample {
            sample: "Offin River at Dunkwa".to_string(),
            substance: "lead".to_string(),
        }
    );

    // The other three rows evaluated normally.
    let evaluated_rows: Vec<_> = result.evaluations.iter().map(|e| e.row).collect();
    assert_eq!(evaluated_rows, vec![0, 1, 3]);
}

#[test]
fn test_pipeline_is_idempotent_end_to_end() {
    let limits = substances::who_limit_table().expect("defaults should validate");
    let dataset = campaign_dataset();
    let first = evaluate_dataset(&dataset, &limits);
    let second = evaluate_dataset(&dataset, &limits);
    assert_eq!(
        first, second,
        "re-running the same campaign must reproduce the result exactly"
    );
}

#[test]
fn test_quality_breakdown_is_auditably_complete() {
    let limits = substances::who_limit_table().expect("defaults should validate");
    let result = evaluate_dataset(&campaign_dataset(), &limits);

    for evaluation in &result.evaluations {
        assert_eq!(
            evaluation.quality_indices.len(),
            limits.len(),
            "sample '{}' should carry one Qi per monitored substance",
            evaluation.sample_id
        );
        let mean: f64 = evaluation.quality_indices.values().sum::<f64>()
            / evaluation.quality_indices.len() as f64;
        assert_eq!(
            mean, evaluation.hpi,
            "HPI of '{}' should be the mean of its own breakdown",
            evaluation.sample_id
        );
    }
}

// ---------------------------------------------------------------------------
// Report Layer
// ---------------------------------------------------------------------------

#[test]
fn test_report_round_trips_through_json() {
    let limits = substances::who_limit_table().expect("defaults should validate");
    let result = evaluate_dataset(&campaign_dataset(), &limits);
    let built = report::build_report(&result);
    let json = report::to_json(&built).expect("report should encode");

    let parsed: report::EvaluationReport =
        serde_json::from_str(&json).expect("report JSON should decode");
    assert_eq!(parsed.samples.len(), 3);
    assert_eq!(parsed.failures.len(), 1);
    assert_eq!(parsed.summary.high, 2);
    assert!(parsed.failures[0].error_message.contains("lead"));
}
