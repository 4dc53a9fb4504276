//! Verdict and report types returned by the analysis engine.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Three-way authenticity classification, ordered by rising suspicion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Verdict {
    /// Zero or one failed check.
    LikelyReal,
    /// Exactly two failed checks.
    Suspicious,
    /// Three or more failed checks.
    LikelyFake,
}

impl Verdict {
    /// Wire name of the verdict, identical to its JSON serialization.
    pub fn as_str(&self) -> &'static str {
        match self {
            Verdict::LikelyReal => "likely_real",
            Verdict::Suspicious => "suspicious",
            Verdict::LikelyFake => "likely_fake",
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Outcome of one named heuristic check.
///
/// `weight` records the check's documented relative importance but is never
/// consulted by the verdict or confidence arithmetic; the engine counts
/// failed checks unweighted. It is carried so the scoring table stays a
/// faithful description of each check.
#[derive(Debug, Clone, PartialEq)]
pub struct CheckOutcome {
    /// Human-readable check name from the scoring table.
    pub name: &'static str,
    /// Whether the check passed. A failed check contributes one finding.
    pub passed: bool,
    /// Documented relative importance in `[0, 1]`. Unused by scoring.
    pub weight: f64,
}

/// Completed analysis of one uploaded screenshot.
///
/// Serializes to the response payload verbatim; field order here is the
/// field order on the wire.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisReport {
    /// Overall classification.
    pub verdict: Verdict,
    /// Confidence in the verdict, clamped to `[0, 1]`.
    pub confidence: f64,
    /// One message per failed check, or a single all-clear sentinel.
    pub findings: Vec<String>,
    /// Narrative summary matched to the verdict.
    pub explanation: String,
    /// UTC instant at which the analysis completed.
    pub timestamp: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verdict_wire_names() {
        assert_eq!(
            serde_json::to_string(&Verdict::LikelyReal).unwrap(),
            "\"likely_real\""
        );
        assert_eq!(
            serde_json::to_string(&Verdict::Suspicious).unwrap(),
            "\"suspicious\""
        );
        assert_eq!(
            serde_json::to_string(&Verdict::LikelyFake).unwrap(),
            "\"likely_fake\""
        );
    }

    #[test]
    fn test_verdict_display_matches_serialization() {
        for verdict in [Verdict::LikelyReal, Verdict::Suspicious, Verdict::LikelyFake] {
            let json = serde_json::to_string(&verdict).unwrap();
            assert_eq!(json, format!("\"{verdict}\""));
        }
    }

    #[test]
    fn test_verdict_orders_by_suspicion() {
        assert!(Verdict::LikelyReal < Verdict::Suspicious);
        assert!(Verdict::Suspicious < Verdict::LikelyFake);
    }

    #[test]
    fn test_report_field_order_on_the_wire() {
        let report = AnalysisReport {
            verdict: Verdict::LikelyReal,
            confidence: 0.9,
            findings: vec!["No significant issues detected".to_string()],
            explanation: "ok".to_string(),
            timestamp: Utc::now(),
        };
        let json = serde_json::to_string(&report).unwrap();
        let verdict_at = json.find("\"verdict\"").unwrap();
        let confidence_at = json.find("\"confidence\"").unwrap();
        let findings_at = json.find("\"findings\"").unwrap();
        let explanation_at = json.find("\"explanation\"").unwrap();
        let timestamp_at = json.find("\"timestamp\"").unwrap();
        assert!(verdict_at < confidence_at);
        assert!(confidence_at < findings_at);
        assert!(findings_at < explanation_at);
        assert!(explanation_at < timestamp_at);
    }

    #[test]
    fn test_report_round_trips() {
        let report = AnalysisReport {
            verdict: Verdict::Suspicious,
            confidence: 0.72,
            findings: vec!["a".to_string(), "b".to_string()],
            explanation: "summary".to_string(),
            timestamp: Utc::now(),
        };
        let json = serde_json::to_string(&report).unwrap();
        let back: AnalysisReport = serde_json::from_str(&json).unwrap();
        assert_eq!(back.verdict, Verdict::Suspicious);
        assert_eq!(back.findings.len(), 2);
        assert!((back.confidence - 0.72).abs() < f64::EPSILON);
    }
}
