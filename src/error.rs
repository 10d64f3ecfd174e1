use crate::analytics::domain::{AttendantId, ClientId, CriterionId, QuestionId, ResponseId};

/// Contract violations between the data-access layer and the engine.
///
/// Degenerate inputs (empty snapshots, missing goals, absent demographics)
/// degrade silently into zeroed or omitted aggregates. Only a broken join,
/// a response row naming a record the snapshot does not carry, is worth
/// raising, since it means the upstream fetch is inconsistent and the whole
/// report would be built on a partial picture.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EngineError {
    #[error("response {response_id:?} references question {question_id:?} absent from the snapshot")]
    MissingQuestion {
        response_id: ResponseId,
        question_id: QuestionId,
    },
    #[error("question {question_id:?} references criterion {criterion_id:?} absent from the snapshot")]
    MissingCriterion {
        question_id: QuestionId,
        criterion_id: CriterionId,
    },
    #[error("response {response_id:?} references attendant {attendant_id:?} absent from the snapshot")]
    MissingAttendant {
        response_id: ResponseId,
        attendant_id: AttendantId,
    },
    #[error("response {response_id:?} references client {client_id:?} absent from the snapshot")]
    MissingClient {
        response_id: ResponseId,
        client_id: ClientId,
    },
}
