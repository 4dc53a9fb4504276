//! DetectFake: deterministic authenticity analysis for chat screenshots.
//!
//! The service accepts a `multipart/form-data` upload on `POST /api/analyze`,
//! pulls out the `image` field with a purpose-built extractor, and scores the
//! upload with a filename-seeded verdict engine. The verdict, confidence,
//! findings, and narrative are a pure function of the filename, so the same
//! upload always gets the same answer.
//!
//! Module map:
//! - [`multipart`]: hand-rolled extraction of the `image` part from a raw body
//! - [`analysis`]: seeded generator, check table, and verdict engine
//! - [`core`]: attachment and report types shared across the crate
//! - [`sniff`]: log-only content and extension hints
//! - [`server`]: axum routes, middleware, and the serve loop
//! - [`error`]: rejection taxonomy and its fixed wire bodies
//! - [`config`]: CLI and environment configuration
//! - [`logging`]: tracing subscriber setup

pub mod analysis;
pub mod config;
pub mod core;
pub mod error;
pub mod logging;
pub mod multipart;
pub mod server;
pub mod sniff;

pub use config::ServerConfig;
pub use error::{AnalyzeError, Result};
