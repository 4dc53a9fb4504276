//! Check evaluation, verdict mapping, and narrative assembly.

use chrono::Utc;

use crate::analysis::checks::{ALL_CLEAR, CHECKS};
use crate::analysis::rng::SeededRng;
use crate::core::report::{AnalysisReport, CheckOutcome, Verdict};

/// Evaluate the scoring table against `rng`, consuming one draw per check.
///
/// Outcomes come back in table order. A check passes only when its draw
/// strictly exceeds its threshold; a draw exactly at the threshold fails.
pub fn run_checks(rng: &mut SeededRng) -> Vec<CheckOutcome> {
    CHECKS
        .iter()
        .map(|check| CheckOutcome {
            name: check.name,
            passed: rng.next_f64() > check.threshold,
            weight: check.weight,
        })
        .collect()
}

/// Analyze an uploaded screenshot by its effective filename and size.
///
/// The caller resolves missing filenames to the fixed default before this
/// point, so `file_name` is always the exact string that seeds the
/// generator. `size` is carried for the record only; everything except the
/// timestamp is a pure function of the name.
pub fn analyze(file_name: &str, size: usize) -> AnalysisReport {
    let mut rng = SeededRng::from_name(file_name);
    let outcomes = run_checks(&mut rng);

    let findings: Vec<String> = CHECKS
        .iter()
        .zip(&outcomes)
        .filter(|(_, outcome)| !outcome.passed)
        .map(|(check, _)| check.finding.to_string())
        .collect();
    let failed = findings.len();

    // The confidence draw always happens, and always after the five check
    // draws, regardless of which verdict arm it lands in.
    let draw = rng.next_f64();
    let (verdict, confidence) = match failed {
        0 => (Verdict::LikelyReal, 0.85 + draw * 0.15),
        1 => (Verdict::LikelyReal, 0.65 + draw * 0.15),
        2 => (Verdict::Suspicious, 0.60 + draw * 0.20),
        _ => (Verdict::LikelyFake, 0.75 + draw * 0.20),
    };

    // The narrative sees the raw findings; the all-clear sentinel is
    // substituted only afterwards, so a clean run still reads as "found
    // no significant inconsistencies" rather than quoting the sentinel.
    let explanation = explain(verdict, &findings);
    let findings = if findings.is_empty() {
        vec![ALL_CLEAR.to_string()]
    } else {
        findings
    };

    tracing::debug!(
        file_name,
        size,
        failed,
        verdict = %verdict,
        confidence,
        "analysis complete"
    );

    AnalysisReport {
        verdict,
        confidence: confidence.clamp(0.0, 1.0),
        findings,
        explanation,
        timestamp: Utc::now(),
    }
}

/// Build the verdict narrative from the raw (pre-sentinel) findings.
fn explain(verdict: Verdict, findings: &[String]) -> String {
    match verdict {
        Verdict::LikelyReal => {
            let assessment = if findings.is_empty() {
                "no significant inconsistencies"
            } else {
                "only minor variations that could be due to different device models or app versions"
            };
            format!(
                "This screenshot shows minimal signs of manipulation. The analysis found \
                 {assessment}. The text rendering, timestamps, and message ordering appear \
                 consistent with genuine chat data. However, remember that this is a \
                 probabilistic assessment and some sophisticated edits might not be detected."
            )
        }
        Verdict::Suspicious => {
            let issues = findings[..findings.len().min(2)].join(" and ");
            format!(
                "This screenshot contains several irregularities that suggest possible \
                 editing. The detected issues include {issues}. These findings alone don't \
                 confirm manipulation, as they could result from different devices, app \
                 versions, or screenshot cropping. We recommend investigating further or \
                 comparing with original source if possible."
            )
        }
        Verdict::LikelyFake => {
            let issues = findings[..findings.len().min(3)].join(", ");
            format!(
                "Multiple indicators suggest this screenshot has been edited or manipulated. \
                 The analysis detected {} significant issues including {issues}. These are \
                 common signs of screenshot editing. However, always verify with the message \
                 sender directly and never make critical decisions based solely on this \
                 analysis.",
                findings.len()
            )
        }
    }
}
