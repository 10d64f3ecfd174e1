//! Feedback analytics and scoring engine for a multi-tenant survey platform.
//!
//! The surrounding application owns ingestion, persistence, and delivery;
//! this crate owns the algorithmic middle: NPS/CSAT classification and
//! scoring, per-criteria breakdowns, adaptive time-bucketed trends, attendant
//! rankings, demographic bands, and free-text word clouds. Callers hand the
//! [`analytics::DashboardComposer`] an already-filtered
//! [`analytics::ResponseSnapshot`] and get back plain serializable payloads.

pub mod analytics;
pub mod config;
mod error;
pub mod telemetry;

pub use error::EngineError;
