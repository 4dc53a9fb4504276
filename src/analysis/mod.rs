//! Deterministic verdict engine.
//!
//! Scoring is driven entirely by the uploaded filename: the name seeds a
//! small linear congruential generator, the generator feeds five named
//! heuristic checks, and the failed-check count maps onto a verdict and a
//! confidence value. Payload bytes never enter the computation, so the same
//! filename always produces the same verdict, confidence, and findings
//! across calls and across processes.

pub mod checks;
pub mod engine;
pub mod rng;

pub use checks::{CheckSpec, ALL_CLEAR, CHECKS};
pub use engine::{analyze, run_checks};
pub use rng::{seed_from_name, SeededRng};
