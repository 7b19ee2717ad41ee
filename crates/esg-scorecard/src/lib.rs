//! Scoring and recommendation engine for organizational sustainability
//! assessments.
//!
//! The crate turns self-reported assessment answers into normalized pillar
//! scores, a sector-weighted composite with risk and alignment
//! classifications, greenhouse-gas totals per emissions scope, and a ranked
//! list of improvement recommendations. Every entry point is a pure function
//! of its inputs: callers supply validated records and receive freshly
//! allocated results, so scoring requests can run concurrently without
//! coordination.

pub mod config;
pub mod error;
pub mod import;
pub mod scoring;
pub mod telemetry;
