use chrono::{NaiveDate, NaiveDateTime};
use feedback_analytics::analytics::{
    Attendant, AttendantGoals, AttendantId, Client, ClientId, Criterion, CriterionId,
    DashboardComposer, Question, QuestionId, QuestionType, ReportSelector, Response, ResponseId,
    ResponseSnapshot, ScoreType, SessionId, SurveyId, TenantId,
};
use feedback_analytics::EngineError;

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid date")
}

fn at(year: i32, month: u32, day: u32) -> NaiveDateTime {
    date(year, month, day).and_hms_opt(9, 30, 0).expect("valid time")
}

fn response(
    id: u64,
    question: u64,
    session: &str,
    created_at: NaiveDateTime,
) -> Response {
    Response {
        id: ResponseId(id),
        tenant_id: TenantId(7),
        survey_id: SurveyId(3),
        question_id: QuestionId(question),
        session_id: SessionId(session.to_string()),
        rating_value: None,
        text_value: None,
        selected_option: None,
        attendant_id: None,
        client_id: None,
        created_at,
    }
}

fn rating(id: u64, question: u64, session: &str, value: i64, created_at: NaiveDateTime) -> Response {
    Response {
        rating_value: Some(value),
        ..response(id, question, session, created_at)
    }
}

/// A tenant's March snapshot: one NPS criterion question, one CSAT criterion
/// question, one free-text question, two attendants, two known clients.
fn march_snapshot() -> ResponseSnapshot {
    let mut snapshot = ResponseSnapshot::default();

    snapshot.criteria.insert(
        CriterionId(1),
        Criterion {
            id: CriterionId(1),
            name: "Atendimento".to_string(),
            score_type: ScoreType::Nps,
        },
    );
    snapshot.criteria.insert(
        CriterionId(2),
        Criterion {
            id: CriterionId(2),
            name: "Ambiente".to_string(),
            score_type: ScoreType::Csat,
        },
    );

    snapshot.questions.insert(
        QuestionId(10),
        Question {
            id: QuestionId(10),
            question_type: QuestionType::Rating0To10,
            criterion_id: Some(CriterionId(1)),
            options: Vec::new(),
        },
    );
    snapshot.questions.insert(
        QuestionId(20),
        Question {
            id: QuestionId(20),
            question_type: QuestionType::Rating1To5,
            criterion_id: Some(CriterionId(2)),
            options: Vec::new(),
        },
    );
    snapshot.questions.insert(
        QuestionId(30),
        Question {
            id: QuestionId(30),
            question_type: QuestionType::FreeText,
            criterion_id: None,
            options: Vec::new(),
        },
    );

    snapshot.attendants.insert(
        AttendantId(1),
        Attendant {
            id: AttendantId(1),
            name: "Ana".to_string(),
            goals: Some(AttendantGoals {
                nps_goal: 80.0,
                responses_goal: 50,
                registrations_goal: 10,
            }),
        },
    );
    snapshot.attendants.insert(
        AttendantId(2),
        Attendant {
            id: AttendantId(2),
            name: "Bruno".to_string(),
            goals: None,
        },
    );

    snapshot.clients.insert(
        ClientId(1),
        Client {
            id: ClientId(1),
            birth_date: Some(date(1990, 5, 20)),
            gender: Some("feminino".to_string()),
        },
    );
    snapshot.clients.insert(
        ClientId(2),
        Client {
            id: ClientId(2),
            birth_date: Some(date(1968, 2, 2)),
            gender: Some("masculino".to_string()),
        },
    );

    // The reference 0-10 mix: [10,9,9,8,7,6,5,3,2,1] across ten sessions.
    let nps_values = [10, 9, 9, 8, 7, 6, 5, 3, 2, 1];
    for (index, &value) in nps_values.iter().enumerate() {
        let session = format!("s{index}");
        let mut row = rating(
            index as u64 + 1,
            10,
            &session,
            value,
            at(2026, 3, 2 + index as u32),
        );
        row.attendant_id = Some(if index < 6 { AttendantId(1) } else { AttendantId(2) });
        row.client_id = Some(if index % 2 == 0 { ClientId(1) } else { ClientId(2) });
        snapshot.responses.push(row);
    }

    // The reference 1-5 mix: [5,4,3,1].
    for (index, &value) in [5i64, 4, 3, 1].iter().enumerate() {
        let session = format!("s{index}");
        snapshot.responses.push(rating(
            100 + index as u64,
            20,
            &session,
            value,
            at(2026, 3, 3 + index as u32),
        ));
    }

    let mut comment = response(200, 30, "s0", at(2026, 3, 5));
    comment.text_value = Some("Atendimento excelente, ambiente agradável".to_string());
    snapshot.responses.push(comment);
    let mut comment = response(201, 30, "s1", at(2026, 3, 6));
    comment.text_value = Some("atendimentos demorados".to_string());
    snapshot.responses.push(comment);

    snapshot
}

fn march_selector() -> ReportSelector {
    let mut selector = ReportSelector::new(date(2026, 3, 1), date(2026, 3, 31));
    selector.tenant_id = Some(TenantId(7));
    selector.survey_id = Some(SurveyId(3));
    selector
}

#[test]
fn report_reduces_the_reference_scenarios() {
    let composer = DashboardComposer::default();
    let report = composer
        .compose(&march_snapshot(), &march_selector(), date(2026, 4, 1))
        .expect("consistent snapshot");

    assert_eq!(report.overall.nps.promoters, 3);
    assert_eq!(report.overall.nps.neutrals, 2);
    assert_eq!(report.overall.nps.detractors, 5);
    assert_eq!(report.overall.nps.total, 10);
    assert_eq!(report.overall.nps.nps_score, -20.0);

    assert_eq!(report.overall.csat.satisfied, 2);
    assert_eq!(report.overall.csat.neutral, 1);
    assert_eq!(report.overall.csat.unsatisfied, 1);
    assert_eq!(report.overall.csat.total, 4);
    assert_eq!(report.overall.csat.satisfaction_rate, 50.0);
    assert_eq!(report.overall.csat.average_score, 3.3);

    // Criteria come back sorted by name.
    assert_eq!(report.criteria.len(), 2);
    assert_eq!(report.criteria[0].criterion, "Ambiente");
    assert_eq!(report.criteria[1].criterion, "Atendimento");
}

#[test]
fn report_trends_cover_the_whole_range_by_day() {
    let composer = DashboardComposer::default();
    let report = composer
        .compose(&march_snapshot(), &march_selector(), date(2026, 4, 1))
        .expect("consistent snapshot");

    // A 30-day span buckets by day and gap-fills all 31 dates.
    assert_eq!(report.trends.volume.len(), 31);
    assert_eq!(report.trends.nps.len(), 31);
    assert_eq!(report.trends.volume[0].period, "01/03");
    assert_eq!(report.trends.volume[30].period, "31/03");

    let answered: usize = report.trends.volume.iter().map(|point| point.sessions).sum();
    assert!(answered > 0);
    // March 1st had no answers; the bucket is present and zeroed.
    assert_eq!(report.trends.volume[0].sessions, 0);
}

#[test]
fn report_ranks_attendants_and_carries_goals() {
    let composer = DashboardComposer::default();
    let report = composer
        .compose(&march_snapshot(), &march_selector(), date(2026, 4, 1))
        .expect("consistent snapshot");

    assert_eq!(report.leaderboard.len(), 2);
    assert_eq!(report.leaderboard[0].name, "Ana");
    assert_eq!(report.leaderboard[0].rank, "1°");
    assert_eq!(report.leaderboard[0].sessions, 6);
    assert_eq!(report.leaderboard[0].nps_goal, 80.0);
    assert_eq!(report.leaderboard[1].name, "Bruno");
    assert_eq!(report.leaderboard[1].sessions, 4);
    assert_eq!(report.leaderboard[1].nps_goal, 0.0);

    assert_eq!(report.performance.len(), 2);
    assert_eq!(report.top_performers[0].name, "Ana");
    assert_eq!(report.bottom_performers[0].name, "Bruno");
}

#[test]
fn report_includes_demographics_and_word_cloud() {
    let composer = DashboardComposer::default();
    let report = composer
        .compose(&march_snapshot(), &march_selector(), date(2026, 4, 1))
        .expect("consistent snapshot");

    let ages = report.demographics.age_distribution.expect("ages present");
    assert_eq!(ages.from_35_to_44, 1); // born 1990 → 36
    assert_eq!(ages.from_55, 1); // born 1968 → 58

    let genders = report.demographics.gender.expect("gender present");
    assert_eq!(genders.feminino, 1);
    assert_eq!(genders.masculino, 1);

    let atendimento = report
        .word_cloud
        .iter()
        .find(|entry| entry.text.starts_with("atend"))
        .expect("stem present");
    assert_eq!(atendimento.value, 2);
}

#[test]
fn accumulated_trends_are_opt_in() {
    let composer = DashboardComposer::default();
    let mut selector = march_selector();

    let plain = composer
        .compose(&march_snapshot(), &selector, date(2026, 4, 1))
        .expect("consistent snapshot");
    assert!(plain.trends.nps.iter().all(|point| point.accumulated_score.is_none()));

    selector.accumulated = true;
    let accumulated = composer
        .compose(&march_snapshot(), &selector, date(2026, 4, 1))
        .expect("consistent snapshot");
    let last = accumulated.trends.nps.last().expect("non-empty series");
    assert_eq!(last.accumulated_score, Some(-20.0));
}

#[test]
fn empty_snapshot_composes_a_zeroed_report() {
    let composer = DashboardComposer::default();
    let report = composer
        .compose(
            &ResponseSnapshot::default(),
            &march_selector(),
            date(2026, 4, 1),
        )
        .expect("empty snapshot is not an error");

    assert_eq!(report.overall.nps.total, 0);
    assert_eq!(report.overall.nps.nps_score, 0.0);
    assert_eq!(report.overall.csat.total, 0);
    assert!(report.criteria.is_empty());
    assert_eq!(report.trends.volume.len(), 31);
    assert!(report.leaderboard.is_empty());
    assert!(report.word_cloud.is_empty());
    assert!(report.demographics.is_empty());
}

#[test]
fn broken_question_join_fails_the_whole_report() {
    let mut snapshot = march_snapshot();
    snapshot
        .responses
        .push(rating(999, 404, "s9", 8, at(2026, 3, 20)));

    let composer = DashboardComposer::default();
    match composer.compose(&snapshot, &march_selector(), date(2026, 4, 1)) {
        Err(EngineError::MissingQuestion { question_id, .. }) => assert_eq!(question_id.0, 404),
        other => panic!("expected missing-question error, got {other:?}"),
    }
}

#[test]
fn report_serializes_with_the_contract_field_names() {
    let composer = DashboardComposer::default();
    let report = composer
        .compose(&march_snapshot(), &march_selector(), date(2026, 4, 1))
        .expect("consistent snapshot");

    let payload = serde_json::to_value(&report).expect("serializable report");

    assert_eq!(payload["overall"]["nps"]["nps_score"], -20.0);
    assert_eq!(payload["overall"]["csat"]["satisfaction_rate"], 50.0);
    assert_eq!(payload["metadata"]["period_start"], "01/03/2026");
    assert_eq!(payload["metadata"]["period_end"], "31/03/2026");
    assert_eq!(payload["trends"]["granularity"], "day");
    assert_eq!(payload["leaderboard"][0]["rank"], "1°");
    assert_eq!(payload["demographics"]["age_distribution"]["35-44"], 1);
    // Untouched flattened criterion summary keeps the per-formula field names.
    assert_eq!(payload["criteria"][1]["score_type"], "nps");
    assert!(payload["criteria"][1]["promoters"].is_number());
}

#[test]
fn demographics_are_omitted_from_the_payload_when_absent() {
    let mut snapshot = march_snapshot();
    for row in &mut snapshot.responses {
        row.client_id = None;
    }

    let composer = DashboardComposer::default();
    let report = composer
        .compose(&snapshot, &march_selector(), date(2026, 4, 1))
        .expect("consistent snapshot");
    let payload = serde_json::to_value(&report).expect("serializable report");

    assert!(payload.get("demographics").is_none());
}
