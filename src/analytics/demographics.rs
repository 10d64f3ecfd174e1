use super::domain::{Client, ClientId, ResponseSnapshot};
use chrono::{Datelike, NaiveDate};
use serde::Serialize;
use std::collections::HashSet;

/// Fixed age bands. Respondents under 18 are excluded from the distribution
/// rather than given a band of their own.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct AgeDistribution {
    #[serde(rename = "18-24")]
    pub from_18_to_24: usize,
    #[serde(rename = "25-34")]
    pub from_25_to_34: usize,
    #[serde(rename = "35-44")]
    pub from_35_to_44: usize,
    #[serde(rename = "45-54")]
    pub from_45_to_54: usize,
    #[serde(rename = "55+")]
    pub from_55: usize,
}

impl AgeDistribution {
    fn tally(&mut self, age: i32) {
        match age {
            18..=24 => self.from_18_to_24 += 1,
            25..=34 => self.from_25_to_34 += 1,
            35..=44 => self.from_35_to_44 += 1,
            45..=54 => self.from_45_to_54 += 1,
            _ if age >= 55 => self.from_55 += 1,
            _ => {}
        }
    }

    fn total(&self) -> usize {
        self.from_18_to_24
            + self.from_25_to_34
            + self.from_35_to_44
            + self.from_45_to_54
            + self.from_55
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct GenderTally {
    pub masculino: usize,
    pub feminino: usize,
    pub outro: usize,
}

/// Demographic breakdown of the distinct respondents behind a snapshot.
/// Either field is omitted entirely when no qualifying respondent exists;
/// reporting surfaces treat the absence as "no demographic data", never as a
/// zero-filled chart.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Demographics {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub age_distribution: Option<AgeDistribution>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gender: Option<GenderTally>,
}

impl Demographics {
    pub fn is_empty(&self) -> bool {
        self.age_distribution.is_none() && self.gender.is_none()
    }
}

/// Calendar-year age: birth day and month are ignored on purpose, matching
/// how the reporting surfaces have always displayed the bands.
fn calendar_age(birth_date: NaiveDate, today: NaiveDate) -> i32 {
    today.year() - birth_date.year()
}

/// Aggregate age bands and gender over the distinct clients the snapshot's
/// responses point at. `today` anchors the age computation so the aggregator
/// stays a pure function.
pub fn demographics(
    snapshot: &ResponseSnapshot,
    today: NaiveDate,
) -> Result<Demographics, crate::EngineError> {
    let mut seen: HashSet<ClientId> = HashSet::new();
    let mut respondents: Vec<&Client> = Vec::new();
    for response in &snapshot.responses {
        if let Some(client) = snapshot.client_for(response)? {
            if seen.insert(client.id) {
                respondents.push(client);
            }
        }
    }

    let mut ages = AgeDistribution::default();
    for client in &respondents {
        if let Some(birth_date) = client.birth_date {
            ages.tally(calendar_age(birth_date, today));
        }
    }

    let mut genders = GenderTally::default();
    for client in &respondents {
        match client.gender.as_deref().map(str::to_lowercase).as_deref() {
            Some("masculino") => genders.masculino += 1,
            Some("feminino") => genders.feminino += 1,
            _ => genders.outro += 1,
        }
    }

    Ok(Demographics {
        age_distribution: (ages.total() > 0).then_some(ages),
        gender: (!respondents.is_empty()).then_some(genders),
    })
}
