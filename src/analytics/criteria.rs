use super::domain::{ResponseSnapshot, ScoreType};
use super::scoring::ScoreSummary;
use crate::EngineError;
use std::collections::HashMap;

/// One criterion's score over every rating answered under it.
#[derive(Debug, Clone, PartialEq)]
pub struct CriterionScore {
    pub criterion: String,
    pub score_type: ScoreType,
    pub summary: ScoreSummary,
}

/// Group rating responses by criterion and reduce each group.
///
/// The criterion's declared score type picks the formula for the whole group;
/// individual question type strings do not get a vote, so a criterion mixing
/// a "star" question with a 1-5 rating question still scores consistently.
/// Responses whose question carries no criterion are left out here (they
/// still count toward the overall, unpartitioned summaries). Order of the
/// returned entries is unspecified; callers sort for display.
pub fn criteria_scores(snapshot: &ResponseSnapshot) -> Result<Vec<CriterionScore>, EngineError> {
    let mut groups: HashMap<String, (ScoreType, Vec<i64>)> = HashMap::new();

    for response in &snapshot.responses {
        let question = snapshot.question_for(response)?;
        if !question.question_type.is_rating() {
            continue;
        }
        let Some(criterion) = snapshot.criterion_for(question)? else {
            continue;
        };
        let Some(rating) = response.rating_value else {
            continue;
        };

        groups
            .entry(criterion.name.clone())
            .or_insert_with(|| (criterion.score_type, Vec::new()))
            .1
            .push(rating);
    }

    Ok(groups
        .into_iter()
        .map(|(criterion, (score_type, ratings))| CriterionScore {
            criterion,
            score_type,
            summary: ScoreSummary::from_ratings(&ratings, score_type.scale()),
        })
        .collect())
}

/// Rating events across the unpartitioned snapshot, split by the scale each
/// question's own type implies, criterion or not. Timestamps ride along so
/// trend builders can bucket the same events the overall summaries reduce.
pub fn rating_events(snapshot: &ResponseSnapshot) -> Result<RatingEvents, EngineError> {
    let mut events = RatingEvents::default();

    for response in &snapshot.responses {
        let question = snapshot.question_for(response)?;
        let Some(scale) = question.question_type.scale() else {
            continue;
        };
        let Some(rating) = response.rating_value else {
            continue;
        };
        match scale {
            super::domain::RatingScale::Nps0To10 => {
                events.nps.push((response.created_at, rating))
            }
            super::domain::RatingScale::Csat1To5 => {
                events.csat.push((response.created_at, rating))
            }
        }
    }

    Ok(events)
}

/// NPS- and CSAT-scale rating events with their submission timestamps.
#[derive(Debug, Clone, Default)]
pub struct RatingEvents {
    pub nps: Vec<(chrono::NaiveDateTime, i64)>,
    pub csat: Vec<(chrono::NaiveDateTime, i64)>,
}

impl RatingEvents {
    pub fn nps_ratings(&self) -> Vec<i64> {
        self.nps.iter().map(|&(_, rating)| rating).collect()
    }

    pub fn csat_ratings(&self) -> Vec<i64> {
        self.csat.iter().map(|&(_, rating)| rating).collect()
    }
}
