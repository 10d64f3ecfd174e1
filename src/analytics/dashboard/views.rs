use crate::analytics::demographics::Demographics;
use crate::analytics::domain::{ScoreType, SurveyId, TenantId};
use crate::analytics::ranking::{PerformerEntry, RankedAttendant};
use crate::analytics::scoring::{round1, CsatSummary, NpsSummary, ScoreSummary};
use crate::analytics::text::WordFrequency;
use crate::analytics::trends::{CsatTrendPoint, Granularity, NpsTrendPoint, VolumePoint};
use serde::Serialize;

/// NPS summary as displayed: the score rounded to one decimal.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct NpsSummaryView {
    pub promoters: usize,
    pub neutrals: usize,
    pub detractors: usize,
    pub total: usize,
    pub nps_score: f64,
}

impl From<NpsSummary> for NpsSummaryView {
    fn from(summary: NpsSummary) -> Self {
        Self {
            promoters: summary.promoters,
            neutrals: summary.neutrals,
            detractors: summary.detractors,
            total: summary.total,
            nps_score: round1(summary.score),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CsatSummaryView {
    pub satisfied: usize,
    pub neutral: usize,
    pub unsatisfied: usize,
    pub total: usize,
    pub satisfaction_rate: f64,
    pub average_score: f64,
}

impl From<CsatSummary> for CsatSummaryView {
    fn from(summary: CsatSummary) -> Self {
        Self {
            satisfied: summary.satisfied,
            neutral: summary.neutral,
            unsatisfied: summary.unsatisfied,
            total: summary.total,
            satisfaction_rate: round1(summary.satisfaction_rate),
            average_score: round1(summary.average_score),
        }
    }
}

/// Score summary view tagged by formula, mirroring the internal union.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ScoreSummaryView {
    Nps(NpsSummaryView),
    Csat(CsatSummaryView),
}

impl From<ScoreSummary> for ScoreSummaryView {
    fn from(summary: ScoreSummary) -> Self {
        match summary {
            ScoreSummary::Nps(inner) => Self::Nps(inner.into()),
            ScoreSummary::Csat(inner) => Self::Csat(inner.into()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CriterionScoreView {
    pub criterion: String,
    pub score_type: ScoreType,
    #[serde(flatten)]
    pub summary: ScoreSummaryView,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct OverallView {
    pub nps: NpsSummaryView,
    pub csat: CsatSummaryView,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrendsView {
    pub granularity: Granularity,
    pub volume: Vec<VolumePoint>,
    pub nps: Vec<NpsTrendPoint>,
    pub csat: Vec<CsatTrendPoint>,
}

/// Selector echo and formatting context for one generated report. Dates use
/// the `dd/mm/yyyy` convention of the reporting surfaces.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportMetadata {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tenant_id: Option<TenantId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub survey_id: Option<SurveyId>,
    pub period_start: String,
    pub period_end: String,
    pub generated_at: String,
}

/// The composite payload a reporting surface consumes: plain data, every
/// field name part of the stable contract.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardReport {
    pub metadata: ReportMetadata,
    pub overall: OverallView,
    pub criteria: Vec<CriterionScoreView>,
    pub trends: TrendsView,
    pub leaderboard: Vec<RankedAttendant>,
    pub performance: Vec<RankedAttendant>,
    pub top_performers: Vec<PerformerEntry>,
    pub bottom_performers: Vec<PerformerEntry>,
    #[serde(skip_serializing_if = "Demographics::is_empty")]
    pub demographics: Demographics,
    pub word_cloud: Vec<WordFrequency>,
}
