//! Golden-value tests pinning the scoring contract.
//!
//! Clients re-upload the same screenshot and expect the same answer back,
//! so verdicts and confidences for known names must never drift. If one of
//! these assertions starts failing, the generator, the check table, or the
//! confidence bands changed.

use detectfake::analysis::{analyze, seed_from_name};
use detectfake::core::report::Verdict;

const TOLERANCE: f64 = 1e-9;

struct Golden {
    name: &'static str,
    seed: u64,
    verdict: Verdict,
    confidence: f64,
    findings: usize,
}

const GOLDENS: &[Golden] = &[
    Golden {
        name: "a.png",
        seed: 468,
        verdict: Verdict::LikelyReal,
        confidence: 0.9514853395,
        findings: 0,
    },
    Golden {
        name: "b.png",
        seed: 469,
        verdict: Verdict::LikelyReal,
        confidence: 0.9609767233,
        findings: 0,
    },
    Golden {
        name: "c.png",
        seed: 470,
        verdict: Verdict::LikelyReal,
        confidence: 0.9704681070,
        findings: 0,
    },
    Golden {
        name: "d.png",
        seed: 471,
        verdict: Verdict::LikelyReal,
        confidence: 0.7799594907,
        findings: 1,
    },
    Golden {
        name: "e.png",
        seed: 472,
        verdict: Verdict::LikelyFake,
        confidence: 0.9359344993,
        findings: 3,
    },
    Golden {
        name: "f.png",
        seed: 473,
        verdict: Verdict::Suspicious,
        confidence: 0.7985896776,
        findings: 2,
    },
    Golden {
        name: "g.png",
        seed: 474,
        verdict: Verdict::LikelyReal,
        confidence: 0.6584336420,
        findings: 1,
    },
    Golden {
        name: "h.png",
        seed: 475,
        verdict: Verdict::Suspicious,
        confidence: 0.6239000343,
        findings: 2,
    },
    Golden {
        name: "x.jpg",
        seed: 487,
        verdict: Verdict::LikelyReal,
        confidence: 0.9818216307,
        findings: 0,
    },
    Golden {
        name: "chat.jpg",
        seed: 783,
        verdict: Verdict::Suspicious,
        confidence: 0.7216949588,
        findings: 2,
    },
    Golden {
        name: "fake.png",
        seed: 778,
        verdict: Verdict::LikelyFake,
        confidence: 0.8084190672,
        findings: 4,
    },
    Golden {
        name: "test.jpg",
        seed: 815,
        verdict: Verdict::LikelyReal,
        confidence: 0.7449954990,
        findings: 1,
    },
    Golden {
        name: "hello.png",
        seed: 903,
        verdict: Verdict::Suspicious,
        confidence: 0.6403163580,
        findings: 2,
    },
    Golden {
        name: "upload.jpg",
        seed: 1012,
        verdict: Verdict::LikelyReal,
        confidence: 0.6647980967,
        findings: 1,
    },
    Golden {
        name: "img_0001.jpg",
        seed: 972,
        verdict: Verdict::LikelyReal,
        confidence: 0.7351427469,
        findings: 1,
    },
    Golden {
        name: "screenshot_2024.png",
        seed: 1752,
        verdict: Verdict::Suspicious,
        confidence: 0.7845627572,
        findings: 2,
    },
];

#[test]
fn test_seeds_match_golden_values() {
    for golden in GOLDENS {
        assert_eq!(
            seed_from_name(golden.name),
            golden.seed,
            "seed drifted for {}",
            golden.name
        );
    }
}

#[test]
fn test_verdicts_and_confidences_match_golden_values() {
    for golden in GOLDENS {
        let report = analyze(golden.name, 4096);
        assert_eq!(
            report.verdict, golden.verdict,
            "verdict drifted for {}",
            golden.name
        );
        assert!(
            (report.confidence - golden.confidence).abs() < TOLERANCE,
            "confidence drifted for {}: got {}, expected {}",
            golden.name,
            report.confidence,
            golden.confidence
        );
    }
}

#[test]
fn test_finding_counts_match_golden_values() {
    for golden in GOLDENS {
        let report = analyze(golden.name, 4096);
        // A clean run reports the single all-clear sentinel.
        let expected = golden.findings.max(1);
        assert_eq!(
            report.findings.len(),
            expected,
            "finding count drifted for {}",
            golden.name
        );
        if golden.findings == 0 {
            assert_eq!(report.findings[0], "No significant issues detected");
        }
    }
}

#[test]
fn test_repeated_analysis_is_stable() {
    // The declared size differs between the two runs; only the name counts.
    for _ in 0..100 {
        let report = analyze("stability.png", 512);
        let again = analyze("stability.png", 1 << 20);
        assert_eq!(report.verdict, again.verdict);
        assert_eq!(report.confidence, again.confidence);
        assert_eq!(report.findings, again.findings);
        assert_eq!(report.explanation, again.explanation);
    }
}

#[test]
fn test_confidence_stays_within_verdict_band() {
    // Band floors follow from the confidence mapping; every name must land
    // inside its verdict's band.
    for i in 0..256u32 {
        let report = analyze(&format!("band_{i}.png"), 4096);
        let confidence = report.confidence;
        match report.verdict {
            Verdict::LikelyReal => {
                assert!(
                    (0.65..0.80).contains(&confidence) || (0.85..1.0).contains(&confidence),
                    "likely_real confidence {confidence} outside both bands"
                )
            }
            Verdict::Suspicious => {
                assert!((0.60..0.80).contains(&confidence))
            }
            Verdict::LikelyFake => {
                assert!((0.75..0.95).contains(&confidence))
            }
        }
    }
}
