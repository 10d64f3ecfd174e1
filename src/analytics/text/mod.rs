//! Free-text answer mining: tokenize, stem, drop stopwords, rank by stem
//! frequency. A best-effort signal, not linguistic analysis: distinct words
//! collapsing onto one stem is accepted and is the point of stemming.

mod stopwords;

pub(crate) use stopwords::is_stopword;

use rust_stemmers::{Algorithm, Stemmer};
use serde::Serialize;
use std::collections::HashMap;

/// Default cap on how many answers feed one word cloud.
pub const TEXT_SAMPLE_CAP: usize = 2_000;

/// Default number of stems a word cloud carries.
pub const WORD_CLOUD_LIMIT: usize = 100;

const PUNCTUATION: &[char] = &['.', ',', '!', '?', ';', ':', '"', '\'', '(', ')'];

/// One entry of the word cloud: a stem and how often it appeared.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WordFrequency {
    pub text: String,
    pub value: usize,
}

/// Build a word cloud from free-text answers.
///
/// Texts are lower-cased, stripped of punctuation, whitespace-split, and each
/// token is stemmed with the Portuguese Snowball stemmer. A token is dropped
/// when its stem is 2 characters or shorter, or when either the raw token or
/// its stem is a stopword. The `limit` highest-frequency stems come back in
/// descending order, ties holding their first-encountered position.
pub fn word_frequencies<'a, I>(texts: I, limit: usize) -> Vec<WordFrequency>
where
    I: IntoIterator<Item = &'a str>,
{
    let stemmer = Stemmer::create(Algorithm::Portuguese);

    // Tallies keep insertion order so the later sort breaks ties stably.
    let mut ranked: Vec<WordFrequency> = Vec::new();
    let mut positions: HashMap<String, usize> = HashMap::new();

    for text in texts {
        let lowered = text.to_lowercase();
        for raw in lowered.split_whitespace() {
            let token = raw.replace(PUNCTUATION, "");
            if token.is_empty() || stopwords::is_stopword(&token) {
                continue;
            }

            let stem = stemmer.stem(&token).to_string();
            if stem.chars().count() <= 2 || stopwords::is_stopword(&stem) {
                continue;
            }

            match positions.get(&stem) {
                Some(&position) => ranked[position].value += 1,
                None => {
                    positions.insert(stem.clone(), ranked.len());
                    ranked.push(WordFrequency {
                        text: stem,
                        value: 1,
                    });
                }
            }
        }
    }

    // Stable sort: equal counts keep first-encountered order.
    ranked.sort_by(|a, b| b.value.cmp(&a.value));
    ranked.truncate(limit);
    ranked
}
