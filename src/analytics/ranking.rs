use super::domain::{Attendant, AttendantGoals, AttendantId, RatingScale, ResponseSnapshot, SessionId};
use super::scoring;
use crate::EngineError;
use serde::Serialize;
use std::collections::{HashMap, HashSet};

/// Default leaderboard depth.
pub const LEADERBOARD_SIZE: usize = 5;

/// One attendant's row in the occurrence-count leaderboard. `sessions` is the
/// distinct-session count, never the raw row count, and the goal fields are
/// carried from configuration untouched.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedAttendant {
    pub rank: String,
    pub attendant_id: AttendantId,
    pub name: String,
    pub sessions: usize,
    pub nps_goal: f64,
    pub responses_goal: u64,
    pub registrations_goal: u64,
}

/// One attendant's row in the score-based performer views.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PerformerEntry {
    pub rank: String,
    pub attendant_id: AttendantId,
    pub name: String,
    pub nps_score: f64,
    pub csat_average: f64,
    pub sessions: usize,
}

fn rank_label(position: usize) -> String {
    format!("{}°", position + 1)
}

struct Standing {
    attendant_id: AttendantId,
    name: String,
    goals: AttendantGoals,
    sessions: usize,
}

/// Distinct sessions per attendant, sorted descending with the attendant name
/// as the ascending tie-break so equal counts order the same way every run.
fn standings(snapshot: &ResponseSnapshot) -> Result<Vec<Standing>, EngineError> {
    let mut sessions_by_attendant: HashMap<AttendantId, (&Attendant, HashSet<&SessionId>)> =
        HashMap::new();
    for response in &snapshot.responses {
        if let Some(attendant) = snapshot.attendant_for(response)? {
            sessions_by_attendant
                .entry(attendant.id)
                .or_insert_with(|| (attendant, HashSet::new()))
                .1
                .insert(&response.session_id);
        }
    }

    let mut standings: Vec<Standing> = sessions_by_attendant
        .into_values()
        .map(|(attendant, sessions)| Standing {
            attendant_id: attendant.id,
            name: attendant.name.clone(),
            goals: attendant.goals_or_default(),
            sessions: sessions.len(),
        })
        .collect();

    standings.sort_by(|a, b| {
        b.sessions
            .cmp(&a.sessions)
            .then_with(|| a.name.cmp(&b.name))
    });
    Ok(standings)
}

fn ranked(standings: Vec<Standing>) -> Vec<RankedAttendant> {
    standings
        .into_iter()
        .enumerate()
        .map(|(position, standing)| RankedAttendant {
            rank: rank_label(position),
            attendant_id: standing.attendant_id,
            name: standing.name,
            sessions: standing.sessions,
            nps_goal: standing.goals.nps_goal,
            responses_goal: standing.goals.responses_goal,
            registrations_goal: standing.goals.registrations_goal,
        })
        .collect()
}

/// The top-N leaderboard (default depth [`LEADERBOARD_SIZE`]).
pub fn leaderboard(
    snapshot: &ResponseSnapshot,
    limit: usize,
) -> Result<Vec<RankedAttendant>, EngineError> {
    let mut entries = ranked(standings(snapshot)?);
    entries.truncate(limit);
    Ok(entries)
}

/// Every attendant with at least one session, ranked: the performance table.
pub fn performance_table(snapshot: &ResponseSnapshot) -> Result<Vec<RankedAttendant>, EngineError> {
    Ok(ranked(standings(snapshot)?))
}

/// Per-attendant score standings sorted by `(nps_score desc, csat_average
/// desc, name asc)`, rank labels assigned over the full descending order.
fn performer_standings(snapshot: &ResponseSnapshot) -> Result<Vec<PerformerEntry>, EngineError> {
    struct Scores<'a> {
        name: &'a str,
        nps_ratings: Vec<i64>,
        csat_ratings: Vec<i64>,
        sessions: HashSet<&'a SessionId>,
    }

    let mut by_attendant: HashMap<AttendantId, Scores<'_>> = HashMap::new();
    for response in &snapshot.responses {
        let Some(attendant) = snapshot.attendant_for(response)? else {
            continue;
        };
        let question = snapshot.question_for(response)?;
        let scores = by_attendant.entry(attendant.id).or_insert_with(|| Scores {
            name: &attendant.name,
            nps_ratings: Vec::new(),
            csat_ratings: Vec::new(),
            sessions: HashSet::new(),
        });
        scores.sessions.insert(&response.session_id);

        if let (Some(scale), Some(rating)) = (question.question_type.scale(), response.rating_value)
        {
            match scale {
                RatingScale::Nps0To10 => scores.nps_ratings.push(rating),
                RatingScale::Csat1To5 => scores.csat_ratings.push(rating),
            }
        }
    }

    let mut entries: Vec<(AttendantId, String, f64, f64, usize)> = by_attendant
        .into_iter()
        .map(|(attendant_id, scores)| {
            let nps_score = scoring::nps_summary(&scores.nps_ratings).score;
            let csat_average = scoring::csat_summary(&scores.csat_ratings).average_score;
            (
                attendant_id,
                scores.name.to_string(),
                nps_score,
                csat_average,
                scores.sessions.len(),
            )
        })
        .collect();

    entries.sort_by(|a, b| {
        b.2.total_cmp(&a.2)
            .then_with(|| b.3.total_cmp(&a.3))
            .then_with(|| a.1.cmp(&b.1))
    });

    Ok(entries
        .into_iter()
        .enumerate()
        .map(
            |(position, (attendant_id, name, nps_score, csat_average, sessions))| PerformerEntry {
                rank: rank_label(position),
                attendant_id,
                name,
                nps_score: scoring::round1(nps_score),
                csat_average: scoring::round1(csat_average),
                sessions,
            },
        )
        .collect())
}

/// The N best-scoring attendants.
pub fn top_performers(
    snapshot: &ResponseSnapshot,
    limit: usize,
) -> Result<Vec<PerformerEntry>, EngineError> {
    let mut entries = performer_standings(snapshot)?;
    entries.truncate(limit);
    Ok(entries)
}

/// The N worst-scoring attendants, worst first. Taken by reversing the full
/// descending sort rather than inverting the comparator, so ties at the
/// boundary resolve identically from both ends.
pub fn bottom_performers(
    snapshot: &ResponseSnapshot,
    limit: usize,
) -> Result<Vec<PerformerEntry>, EngineError> {
    let mut entries = performer_standings(snapshot)?;
    entries.reverse();
    entries.truncate(limit);
    Ok(entries)
}
