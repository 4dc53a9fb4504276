#![no_main]

use libfuzzer_sys::fuzz_target;

// The verdict engine must be total: any name and size yield a well-formed
// report with bounded confidence and a non-empty narrative.
fuzz_target!(|input: (&str, usize)| {
    let (name, size) = input;
    let report = detectfake::analysis::analyze(name, size);
    assert!((0.0..=1.0).contains(&report.confidence));
    assert!(!report.findings.is_empty());
    assert!(!report.explanation.is_empty());
});
