use chrono::{NaiveDate, NaiveDateTime};

use crate::analytics::domain::{
    Attendant, AttendantGoals, AttendantId, Client, ClientId, Criterion, CriterionId, Question,
    QuestionId, QuestionType, Response, ResponseId, ResponseSnapshot, ScoreType, SessionId,
    SurveyId, TenantId,
};

pub(super) fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid date")
}

pub(super) fn at(year: i32, month: u32, day: u32) -> NaiveDateTime {
    date(year, month, day)
        .and_hms_opt(12, 0, 0)
        .expect("valid time")
}

/// Fluent snapshot builder so tests read as scenarios instead of struct soup.
pub(super) struct SnapshotBuilder {
    snapshot: ResponseSnapshot,
    next_response_id: u64,
}

impl SnapshotBuilder {
    pub(super) fn new() -> Self {
        Self {
            snapshot: ResponseSnapshot::default(),
            next_response_id: 1,
        }
    }

    pub(super) fn question(mut self, id: u64, question_type: QuestionType) -> Self {
        self.snapshot.questions.insert(
            QuestionId(id),
            Question {
                id: QuestionId(id),
                question_type,
                criterion_id: None,
                options: Vec::new(),
            },
        );
        self
    }

    pub(super) fn question_for_criterion(
        mut self,
        id: u64,
        question_type: QuestionType,
        criterion_id: u64,
    ) -> Self {
        self.snapshot.questions.insert(
            QuestionId(id),
            Question {
                id: QuestionId(id),
                question_type,
                criterion_id: Some(CriterionId(criterion_id)),
                options: Vec::new(),
            },
        );
        self
    }

    pub(super) fn criterion(mut self, id: u64, name: &str, score_type: ScoreType) -> Self {
        self.snapshot.criteria.insert(
            CriterionId(id),
            Criterion {
                id: CriterionId(id),
                name: name.to_string(),
                score_type,
            },
        );
        self
    }

    pub(super) fn attendant(mut self, id: u64, name: &str, goals: Option<AttendantGoals>) -> Self {
        self.snapshot.attendants.insert(
            AttendantId(id),
            Attendant {
                id: AttendantId(id),
                name: name.to_string(),
                goals,
            },
        );
        self
    }

    pub(super) fn client(
        mut self,
        id: u64,
        birth_date: Option<NaiveDate>,
        gender: Option<&str>,
    ) -> Self {
        self.snapshot.clients.insert(
            ClientId(id),
            Client {
                id: ClientId(id),
                birth_date,
                gender: gender.map(str::to_string),
            },
        );
        self
    }

    pub(super) fn rating(self, question_id: u64, session: &str, rating: i64) -> Self {
        self.rating_at(question_id, session, rating, at(2026, 3, 10))
    }

    pub(super) fn rating_at(
        mut self,
        question_id: u64,
        session: &str,
        rating: i64,
        created_at: NaiveDateTime,
    ) -> Self {
        let response = self.response_row(question_id, session, created_at);
        self.snapshot.responses.push(Response {
            rating_value: Some(rating),
            ..response
        });
        self
    }

    pub(super) fn rating_by(
        mut self,
        question_id: u64,
        session: &str,
        rating: i64,
        attendant_id: u64,
    ) -> Self {
        let response = self.response_row(question_id, session, at(2026, 3, 10));
        self.snapshot.responses.push(Response {
            rating_value: Some(rating),
            attendant_id: Some(AttendantId(attendant_id)),
            ..response
        });
        self
    }

    pub(super) fn answer_from_client(
        mut self,
        question_id: u64,
        session: &str,
        client_id: u64,
    ) -> Self {
        let response = self.response_row(question_id, session, at(2026, 3, 10));
        self.snapshot.responses.push(Response {
            client_id: Some(ClientId(client_id)),
            ..response
        });
        self
    }

    fn response_row(
        &mut self,
        question_id: u64,
        session: &str,
        created_at: NaiveDateTime,
    ) -> Response {
        let id = self.next_response_id;
        self.next_response_id += 1;
        Response {
            id: ResponseId(id),
            tenant_id: TenantId(1),
            survey_id: SurveyId(1),
            question_id: QuestionId(question_id),
            session_id: SessionId(session.to_string()),
            rating_value: None,
            text_value: None,
            selected_option: None,
            attendant_id: None,
            client_id: None,
            created_at,
        }
    }

    pub(super) fn build(self) -> ResponseSnapshot {
        self.snapshot
    }
}

pub(super) fn goals(nps: f64, responses: u64, registrations: u64) -> AttendantGoals {
    AttendantGoals {
        nps_goal: nps,
        responses_goal: responses,
        registrations_goal: registrations,
    }
}
