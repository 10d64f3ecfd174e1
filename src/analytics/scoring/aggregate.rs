use super::classify::{classify_csat, classify_nps, CsatCategory, NpsCategory};
use crate::analytics::domain::RatingScale;
use serde::Serialize;

/// Reduction of one group of 0-10 ratings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct NpsSummary {
    pub promoters: usize,
    pub neutrals: usize,
    pub detractors: usize,
    pub total: usize,
    /// `(promoters - detractors) / total * 100`, in [-100, 100]. Zero for an
    /// empty group; no data is not an error at this layer.
    pub score: f64,
}

/// Reduction of one group of 1-5 ratings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct CsatSummary {
    pub satisfied: usize,
    pub neutral: usize,
    pub unsatisfied: usize,
    pub total: usize,
    /// Share of satisfied answers, in [0, 100].
    pub satisfaction_rate: f64,
    /// Mean over every rating in the group, satisfied or not. The asymmetry
    /// with `satisfaction_rate` is inherited product behavior.
    pub average_score: f64,
}

/// Score summary tagged by the formula that produced it, so downstream views
/// never probe optional fields to discover which shape they hold.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "score_type", rename_all = "snake_case")]
pub enum ScoreSummary {
    Nps(NpsSummary),
    Csat(CsatSummary),
}

impl ScoreSummary {
    pub fn from_ratings(ratings: &[i64], scale: RatingScale) -> Self {
        match scale {
            RatingScale::Nps0To10 => Self::Nps(nps_summary(ratings)),
            RatingScale::Csat1To5 => Self::Csat(csat_summary(ratings)),
        }
    }

    pub const fn total(&self) -> usize {
        match self {
            Self::Nps(summary) => summary.total,
            Self::Csat(summary) => summary.total,
        }
    }
}

/// Reduce a group of 0-10 ratings to counts and score.
pub fn nps_summary(ratings: &[i64]) -> NpsSummary {
    let mut summary = NpsSummary::default();
    for &rating in ratings {
        match classify_nps(rating) {
            NpsCategory::Promoter => summary.promoters += 1,
            NpsCategory::Neutral => summary.neutrals += 1,
            NpsCategory::Detractor => summary.detractors += 1,
        }
    }
    summary.total = ratings.len();
    summary.score = nps_score(summary.promoters, summary.detractors, summary.total);
    summary
}

/// The score formula on already-reduced counts; trend buckets reuse it for
/// their accumulated variants.
pub fn nps_score(promoters: usize, detractors: usize, total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }
    (promoters as f64 - detractors as f64) / total as f64 * 100.0
}

/// Reduce a group of 1-5 ratings to counts, satisfaction rate, and mean.
pub fn csat_summary(ratings: &[i64]) -> CsatSummary {
    let mut summary = CsatSummary::default();
    let mut sum: i64 = 0;
    for &rating in ratings {
        match classify_csat(rating) {
            CsatCategory::Satisfied => summary.satisfied += 1,
            CsatCategory::Neutral => summary.neutral += 1,
            CsatCategory::Unsatisfied => summary.unsatisfied += 1,
        }
        sum += rating;
    }
    summary.total = ratings.len();
    summary.satisfaction_rate = satisfaction_rate(summary.satisfied, summary.total);
    summary.average_score = if summary.total == 0 {
        0.0
    } else {
        sum as f64 / summary.total as f64
    };
    summary
}

pub fn satisfaction_rate(satisfied: usize, total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }
    satisfied as f64 / total as f64 * 100.0
}

/// Round to one decimal for display surfaces; internal math stays unrounded.
pub fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
