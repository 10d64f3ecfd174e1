//! Rating classification and score reduction.
//!
//! Every surface that reports an NPS or CSAT number (overall dashboard,
//! per-criteria breakdown, trend buckets, performer rankings) goes through
//! these two modules, so the formulas exist exactly once.

mod aggregate;
mod classify;

pub use aggregate::{
    csat_summary, nps_score, nps_summary, round1, satisfaction_rate, CsatSummary, NpsSummary,
    ScoreSummary,
};
pub use classify::{classify, classify_csat, classify_nps, CsatCategory, NpsCategory, RatingCategory};
