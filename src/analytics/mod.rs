//! The feedback analytics engine: pure transforms from response snapshots to
//! the aggregate structures the reporting surfaces display.
//!
//! Every entry point is a deterministic function of its input collection and
//! scalar parameters; nothing here mutates, persists, or performs I/O, so the
//! engine is safe to drive concurrently from independent report requests.

pub mod criteria;
pub mod demographics;
pub mod domain;
pub mod dashboard;
pub mod ranking;
pub mod scoring;
pub mod sessions;
pub mod text;
pub mod trends;

#[cfg(test)]
mod tests;

pub use dashboard::views::DashboardReport;
pub use dashboard::{DashboardComposer, ReportSelector};
pub use demographics::{demographics, AgeDistribution, Demographics, GenderTally};
pub use domain::{
    Attendant, AttendantGoals, AttendantId, Client, ClientId, Criterion, CriterionId, Question,
    QuestionId, QuestionType, RatingScale, Response, ResponseId, ResponseSnapshot, ScoreType,
    SessionId, SurveyId, TenantId,
};
pub use ranking::{
    bottom_performers, leaderboard, performance_table, top_performers, PerformerEntry,
    RankedAttendant, LEADERBOARD_SIZE,
};
pub use scoring::{
    classify, classify_csat, classify_nps, csat_summary, nps_summary, CsatCategory, CsatSummary,
    NpsCategory, NpsSummary, RatingCategory, ScoreSummary,
};
pub use sessions::{count_distinct_sessions, distinct_sessions};
pub use text::{word_frequencies, WordFrequency, TEXT_SAMPLE_CAP, WORD_CLOUD_LIMIT};
pub use trends::{Bucketer, CsatTrendPoint, Granularity, NpsTrendPoint, VolumePoint};
