//! Orchestration of the sub-aggregators into one composite report payload.
//!
//! The composer receives an already-filtered snapshot and never filters it
//! further; tenant, survey, and date scoping belong to the data-access layer
//! that materialized the snapshot.

pub mod views;

use super::criteria;
use super::demographics;
use super::domain::{QuestionType, ResponseSnapshot, SurveyId, TenantId};
use super::ranking;
use super::scoring;
use super::text;
use super::trends::{self, Bucketer, Granularity};
use crate::config::EngineConfig;
use crate::EngineError;
use chrono::NaiveDate;
use tracing::debug;
use views::{DashboardReport, OverallView, ReportMetadata, TrendsView};

/// Scalar parameters one report is generated for. The ids are an echo of the
/// filter the data-access layer already applied.
#[derive(Debug, Clone)]
pub struct ReportSelector {
    pub tenant_id: Option<TenantId>,
    pub survey_id: Option<SurveyId>,
    pub range_start: NaiveDate,
    pub range_end: NaiveDate,
    /// Override of the adaptive day/week/month pick.
    pub granularity: Option<Granularity>,
    /// Adds running accumulated scores to the NPS/CSAT trends.
    pub accumulated: bool,
}

impl ReportSelector {
    pub fn new(range_start: NaiveDate, range_end: NaiveDate) -> Self {
        Self {
            tenant_id: None,
            survey_id: None,
            range_start,
            range_end,
            granularity: None,
            accumulated: false,
        }
    }
}

/// Stateless composer; holds only the bounded-size configuration.
#[derive(Debug, Clone, Default)]
pub struct DashboardComposer {
    config: EngineConfig,
}

impl DashboardComposer {
    pub fn new(config: EngineConfig) -> Self {
        Self { config }
    }

    /// Build the full dashboard payload for one snapshot. `today` anchors
    /// age computation and the generation stamp, keeping the call pure.
    ///
    /// Either the whole report builds, or the first broken join aborts it;
    /// there is no partially-populated result.
    pub fn compose(
        &self,
        snapshot: &ResponseSnapshot,
        selector: &ReportSelector,
        today: NaiveDate,
    ) -> Result<DashboardReport, EngineError> {
        let bucketer = match selector.granularity {
            Some(granularity) => {
                Bucketer::with_granularity(selector.range_start, selector.range_end, granularity)
            }
            None => Bucketer::new(selector.range_start, selector.range_end),
        };

        debug!(
            responses = snapshot.responses.len(),
            buckets = bucketer.len(),
            granularity = ?bucketer.granularity(),
            "composing dashboard report"
        );

        let events = criteria::rating_events(snapshot)?;
        let overall = OverallView {
            nps: scoring::nps_summary(&events.nps_ratings()).into(),
            csat: scoring::csat_summary(&events.csat_ratings()).into(),
        };

        let mut criteria_views: Vec<views::CriterionScoreView> = criteria::criteria_scores(snapshot)?
            .into_iter()
            .map(|score| views::CriterionScoreView {
                criterion: score.criterion,
                score_type: score.score_type,
                summary: score.summary.into(),
            })
            .collect();
        criteria_views.sort_by(|a, b| a.criterion.cmp(&b.criterion));

        let trends = TrendsView {
            granularity: bucketer.granularity(),
            volume: bucketer.session_volume(&snapshot.responses),
            nps: bucketer.nps_trend(&events.nps, selector.accumulated),
            csat: bucketer.csat_trend(&events.csat, selector.accumulated),
        };

        let leaderboard = ranking::leaderboard(snapshot, self.config.leaderboard_size)?;
        let performance = ranking::performance_table(snapshot)?;
        let top_performers = ranking::top_performers(snapshot, self.config.leaderboard_size)?;
        let bottom_performers = ranking::bottom_performers(snapshot, self.config.leaderboard_size)?;

        let demographics = demographics::demographics(snapshot, today)?;
        let word_cloud = self.word_cloud(snapshot)?;

        Ok(DashboardReport {
            metadata: ReportMetadata {
                tenant_id: selector.tenant_id,
                survey_id: selector.survey_id,
                period_start: trends::full_date(selector.range_start),
                period_end: trends::full_date(selector.range_end),
                generated_at: trends::full_date(today),
            },
            overall,
            criteria: criteria_views,
            trends,
            leaderboard,
            performance,
            top_performers,
            bottom_performers,
            demographics,
            word_cloud,
        })
    }

    /// Free-text answers, newest first, capped before the pipeline runs so a
    /// chatty tenant cannot make report generation unbounded.
    fn word_cloud(&self, snapshot: &ResponseSnapshot) -> Result<Vec<text::WordFrequency>, EngineError> {
        let mut texts: Vec<(&chrono::NaiveDateTime, &str)> = Vec::new();
        for response in &snapshot.responses {
            let question = snapshot.question_for(response)?;
            if question.question_type != QuestionType::FreeText {
                continue;
            }
            if let Some(text_value) = response.text_value.as_deref() {
                if !text_value.trim().is_empty() {
                    texts.push((&response.created_at, text_value));
                }
            }
        }

        texts.sort_by(|a, b| b.0.cmp(a.0));
        texts.truncate(self.config.text_sample_cap);

        Ok(text::word_frequencies(
            texts.into_iter().map(|(_, text_value)| text_value),
            self.config.word_cloud_limit,
        ))
    }
}
