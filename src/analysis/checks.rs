//! The scoring table: five heuristic checks and their finding messages.

/// Static description of one heuristic check.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CheckSpec {
    /// Human-readable name, used in logs and check outcomes.
    pub name: &'static str,
    /// A draw must strictly exceed this value for the check to pass.
    pub threshold: f64,
    /// Documented relative importance in `[0, 1]`. Carried for the record;
    /// scoring counts failed checks unweighted.
    pub weight: f64,
    /// Finding reported when the check fails. Part of the wire contract,
    /// so the wording must not drift.
    pub finding: &'static str,
}

/// The five checks in evaluation order. Each consumes exactly one draw, in
/// this order, so reordering the table would change every verdict.
pub const CHECKS: [CheckSpec; 5] = [
    CheckSpec {
        name: "Timestamp Consistency",
        threshold: 0.30,
        weight: 0.25,
        finding: "Timestamps show irregular spacing or formatting inconsistencies",
    },
    CheckSpec {
        name: "Text Rendering Consistency",
        threshold: 0.25,
        weight: 0.20,
        finding: "Text rendering varies between different messages in the screenshot",
    },
    CheckSpec {
        name: "Message Ordering Logic",
        threshold: 0.20,
        weight: 0.20,
        finding: "Message ordering appears illogical or messages may have been rearranged",
    },
    CheckSpec {
        name: "Visual Artifacts Detection",
        threshold: 0.35,
        weight: 0.15,
        finding: "Visual artifacts detected that suggest image manipulation or cropping",
    },
    CheckSpec {
        name: "Compression Consistency",
        threshold: 0.30,
        weight: 0.20,
        finding: "Compression artifacts vary across different regions of the image",
    },
];

/// Sentinel finding reported when every check passes.
pub const ALL_CLEAR: &str = "No significant issues detected";
