//! Evaluation Report Module
//!
//! Serializable view of a dataset evaluation for reporting and
//! visualization collaborators (dashboards, notebooks, archival JSON).
//! The engine's typed results are flattened here: errors become message
//! strings, and the report carries a generation timestamp.

use crate::analysis::evaluation::{DatasetEvaluation, EvaluationSummary};
use crate::model::SampleEvaluation;
use chrono::Utc;
use serde::{Deserialize, Serialize};

// ============================================================================
// Report structures
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EvaluationReport {
    pub timestamp: String,
    pub samples: Vec<SampleEvaluation>,
    pub failures: Vec<FailureEntry>,
    pub summary: EvaluationSummary,
}

/// A sample that could not be evaluated, rendered for consumers that only
/// need the reason as text.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FailureEntry {
    pub sample_id: String,
    pub row: usize,
    pub error_message: String,
}

// ============================================================================
// Report construction
// ============================================================================

/// Builds a report from an evaluation result, stamped with the current
/// UTC time.
pub fn build_report(result: &DatasetEvaluation) -> EvaluationReport {
    EvaluationReport {
        timestamp: Utc::now().to_rfc3339(),
        samples: result.evaluations.clone(),
        failures: result
            .failures
            .iter()
            .map(|failure| FailureEntry {
                sample_id: failure.sample_id.clone(),
                row: failure.row,
                error_message: failure.error.to_string(),
            })
            .collect(),
        summary: result.summary.clone(),
    }
}

/// Encodes a report as pretty-printed JSON.
pub fn to_json(report: &EvaluationReport) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(report)
}

// ============================================================================
// Console rendering
// ============================================================================

pub fn print_summary(report: &EvaluationReport) {
    println!("\n{}", "═".repeat(59));
    println!("📊 POLLUTION INDEX SUMMARY");
    println!("{}", "═".repeat(59));
    println!();
    println!(
        "Samples evaluated: {}/{}  ({} failed)",
        report.summary.evaluated, report.summary.total, report.summary.failed
    );
    println!(
        "Risk tiers:        {} low, {} medium, {} high",
        report.summary.low, report.summary.medium, report.summary.high
    );
    println!();

    for failure in &report.failures {
        println!(
            "  ✗ row {} ({}): {}",
            failure.row, failure.sample_id, failure.error_message
        );
    }

    let evaluated_rate = if report.summary.total > 0 {
        (report.summary.evaluated as f64 / report.summary.total as f64) * 100.0
    } else {
        0.0
    };
    println!(
        "Evaluated Rate: {:.1}% ({}/{})",
        evaluated_rate, report.summary.evaluated, report.summary.total
    );
    println!("{}", "═".repeat(59));
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::evaluation::evaluate_dataset;
    use crate::limits::LimitTable;
    use crate::model::SampleRecord;

    fn evaluated_fixture() -> DatasetEvaluation {
        let limits = LimitTable::new(
            [("arsenic".to_string(), 0.01), ("cadmium".to_string(), 0.003)]
                .into_iter()
                .collect(),
        )
        .expect("limits should validate");
        let dataset = vec![
            SampleRecord::new(
                "Pra River",
                [("arsenic".to_string(), 0.02), ("cadmium".to_string(), 0.006)]
                    .into_iter()
                    .collect(),
            ),
            SampleRecord::new(
                "Gap",
                [("arsenic".to_string(), 0.02)].into_iter().collect(),
            ),
        ];
        evaluate_dataset(&dataset, &limits)
    }

    #[test]
    fn test_build_report_carries_results_and_summary() {
        let report = build_report(&evaluated_fixture());
        assert_eq!(report.samples.len(), 1);
        assert_eq!(report.failures.len(), 1);
        assert_eq!(report.summary.total, 2);
        assert_eq!(report.samples[0].sample_id, "Pra River");
    }

    #[test]
    fn test_failures_are_rendered_as_messages() {
        let report = build_report(&evaluated_fixture());
        let failure = &report.failures[0];
        assert_eq!(failure.sample_id, "Gap");
        assert_eq!(failure.row, 1);
        assert!(
            failure.error_message.contains("cadmium"),
            "message should name the missing substance, got '{}'",
            failure.error_message
        );
    }

    #[test]
    fn test_timestamp_is_rfc3339() {
        let report = build_report(&evaluated_fixture());
        assert!(
            chrono::DateTime::parse_from_rfc3339(&report.timestamp).is_ok(),
            "timestamp should be RFC 3339, got '{}'",
            report.timestamp
        );
    }

    #[test]
    fn test_print_summary_renders_without_panicking() {
        // Console rendering only formats; nothing here should be able to
        // panic even with failures present.
        print_summary(&build_report(&evaluated_fixture()));
    }

    #[test]
    fn test_json_encodes_tiers_as_strings() {
        let report = build_report(&evaluated_fixture());
        let json = to_json(&report).expect("report should encode");
        assert!(
            json.contains("\"tier\": \"High\""),
            "JSON should carry the tier name, got:\n{}",
            json
        );
        assert!(json.contains("\"hpi\": 200.0"));
    }
}
