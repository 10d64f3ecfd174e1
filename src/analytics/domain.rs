use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Identifier wrappers for the entities the engine reads. The ingestion layer
/// owns the records; the engine only ever sees snapshot copies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ResponseId(pub u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TenantId(pub u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SurveyId(pub u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct QuestionId(pub u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CriterionId(pub u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct AttendantId(pub u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ClientId(pub u64);

/// One respondent's pass through a survey. Every answer row produced during
/// that pass shares the same session id, which is why respondent-level counts
/// must count distinct sessions rather than rows.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SessionId(pub String);

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestionType {
    Rating0To10,
    Rating1To5,
    FreeText,
    MultipleChoice,
    Checkbox,
}

impl QuestionType {
    /// The rating scale implied by the question type, when it is a rating
    /// question at all.
    pub const fn scale(self) -> Option<RatingScale> {
        match self {
            Self::Rating0To10 => Some(RatingScale::Nps0To10),
            Self::Rating1To5 => Some(RatingScale::Csat1To5),
            Self::FreeText | Self::MultipleChoice | Self::Checkbox => None,
        }
    }

    pub const fn is_rating(self) -> bool {
        self.scale().is_some()
    }
}

/// Which classification rule set applies to a rating value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RatingScale {
    Nps0To10,
    Csat1To5,
}

/// Scoring formula declared on a criterion. Legacy surveys label five-star
/// criteria as "star"; those score exactly like CSAT.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreType {
    Nps,
    #[serde(alias = "star")]
    Csat,
}

impl ScoreType {
    pub const fn scale(self) -> RatingScale {
        match self {
            Self::Nps => RatingScale::Nps0To10,
            Self::Csat => RatingScale::Csat1To5,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Nps => "NPS",
            Self::Csat => "CSAT",
        }
    }
}

/// One answer row. A session produces one row per question answered.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Response {
    pub id: ResponseId,
    pub tenant_id: TenantId,
    pub survey_id: SurveyId,
    pub question_id: QuestionId,
    pub session_id: SessionId,
    pub rating_value: Option<i64>,
    pub text_value: Option<String>,
    pub selected_option: Option<String>,
    pub attendant_id: Option<AttendantId>,
    pub client_id: Option<ClientId>,
    pub created_at: NaiveDateTime,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Question {
    pub id: QuestionId,
    pub question_type: QuestionType,
    pub criterion_id: Option<CriterionId>,
    pub options: Vec<String>,
}

/// Named evaluation axis grouping rating questions under one formula.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Criterion {
    pub id: CriterionId,
    pub name: String,
    pub score_type: ScoreType,
}

/// Performance goals configured per attendant. Carried through to rankings
/// unchanged; an attendant without a goal record reports all zeroes.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct AttendantGoals {
    pub nps_goal: f64,
    pub responses_goal: u64,
    pub registrations_goal: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Attendant {
    pub id: AttendantId,
    pub name: String,
    pub goals: Option<AttendantGoals>,
}

impl Attendant {
    pub fn goals_or_default(&self) -> AttendantGoals {
        self.goals.unwrap_or_default()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Client {
    pub id: ClientId,
    pub birth_date: Option<NaiveDate>,
    pub gender: Option<String>,
}

/// The materialized, already-filtered input the data-access layer hands to the
/// engine: response rows plus the joined records they reference. The engine
/// never filters by tenant, survey, or date itself.
#[derive(Debug, Clone, Default)]
pub struct ResponseSnapshot {
    pub responses: Vec<Response>,
    pub questions: HashMap<QuestionId, Question>,
    pub criteria: HashMap<CriterionId, Criterion>,
    pub attendants: HashMap<AttendantId, Attendant>,
    pub clients: HashMap<ClientId, Client>,
}

impl ResponseSnapshot {
    pub fn is_empty(&self) -> bool {
        self.responses.is_empty()
    }

    /// Resolve the question a response answered, surfacing broken joins.
    pub fn question_for(&self, response: &Response) -> Result<&Question, crate::EngineError> {
        self.questions
            .get(&response.question_id)
            .ok_or(crate::EngineError::MissingQuestion {
                response_id: response.id,
                question_id: response.question_id,
            })
    }

    /// Resolve a question's criterion, surfacing broken joins. Questions with
    /// no criterion simply fall outside per-criteria aggregation.
    pub fn criterion_for(&self, question: &Question) -> Result<Option<&Criterion>, crate::EngineError> {
        match question.criterion_id {
            None => Ok(None),
            Some(criterion_id) => self
                .criteria
                .get(&criterion_id)
                .map(Some)
                .ok_or(crate::EngineError::MissingCriterion {
                    question_id: question.id,
                    criterion_id,
                }),
        }
    }

    pub fn attendant_for(&self, response: &Response) -> Result<Option<&Attendant>, crate::EngineError> {
        match response.attendant_id {
            None => Ok(None),
            Some(attendant_id) => self
                .attendants
                .get(&attendant_id)
                .map(Some)
                .ok_or(crate::EngineError::MissingAttendant {
                    response_id: response.id,
                    attendant_id,
                }),
        }
    }

    pub fn client_for(&self, response: &Response) -> Result<Option<&Client>, crate::EngineError> {
        match response.client_id {
            None => Ok(None),
            Some(client_id) => self
                .clients
                .get(&client_id)
                .map(Some)
                .ok_or(crate::EngineError::MissingClient {
                    response_id: response.id,
                    client_id,
                }),
        }
    }
}
