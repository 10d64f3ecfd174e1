use super::domain::{Response, SessionId};
use std::collections::HashSet;

/// Count the distinct respondent sessions behind a set of answer rows.
///
/// One session answers many questions, so one respondent fans out into many
/// rows; every aggregator that needs "number of respondents" must go through
/// this rather than counting rows.
pub fn count_distinct_sessions<'a, I>(responses: I) -> usize
where
    I: IntoIterator<Item = &'a Response>,
{
    distinct_sessions(responses).len()
}

/// The distinct session ids themselves, for callers that key further work on
/// them (per-bucket volume, per-attendant occurrence counts).
pub fn distinct_sessions<'a, I>(responses: I) -> HashSet<&'a SessionId>
where
    I: IntoIterator<Item = &'a Response>,
{
    responses
        .into_iter()
        .map(|response| &response.session_id)
        .collect()
}
