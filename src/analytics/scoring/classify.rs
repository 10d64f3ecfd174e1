use crate::analytics::domain::RatingScale;
use serde::{Deserialize, Serialize};

/// NPS classification of one 0-10 rating.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NpsCategory {
    Promoter,
    Neutral,
    Detractor,
}

impl NpsCategory {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Promoter => "Promotor",
            Self::Neutral => "Neutro",
            Self::Detractor => "Detrator",
        }
    }
}

/// CSAT classification of one 1-5 rating.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CsatCategory {
    Satisfied,
    Neutral,
    Unsatisfied,
}

impl CsatCategory {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Satisfied => "Satisfeito",
            Self::Neutral => "Neutro",
            Self::Unsatisfied => "Insatisfeito",
        }
    }
}

/// Classification under either scale, tagged by the scale that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RatingCategory {
    Nps(NpsCategory),
    Csat(CsatCategory),
}

/// Classify a 0-10 rating. The thresholds are boundary-exact: 9 and above
/// promote, 7 and 8 are neutral, 6 and below detract. Out-of-range values are
/// classified by the same inequalities rather than rejected; the submission
/// layer owns domain validation, and rejecting here would silently change
/// historical report numbers.
pub const fn classify_nps(rating: i64) -> NpsCategory {
    if rating >= 9 {
        NpsCategory::Promoter
    } else if rating >= 7 {
        NpsCategory::Neutral
    } else {
        NpsCategory::Detractor
    }
}

/// Classify a 1-5 rating: 4 and above satisfied, exactly 3 neutral, 2 and
/// below unsatisfied. Same permissive stance on out-of-range values.
pub const fn classify_csat(rating: i64) -> CsatCategory {
    if rating >= 4 {
        CsatCategory::Satisfied
    } else if rating == 3 {
        CsatCategory::Neutral
    } else {
        CsatCategory::Unsatisfied
    }
}

/// Classify under whichever scale the caller resolved for the group.
pub const fn classify(rating: i64, scale: RatingScale) -> RatingCategory {
    match scale {
        RatingScale::Nps0To10 => RatingCategory::Nps(classify_nps(rating)),
        RatingScale::Csat1To5 => RatingCategory::Csat(classify_csat(rating)),
    }
}
