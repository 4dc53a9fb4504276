//! Core data types for DetectFake screenshot analysis.
//!
//! This module contains the fundamental types used throughout the system:
//! the uploaded attachment extracted at the request boundary and the
//! analysis report returned to the caller.

pub mod attachment;
pub mod report;
