use itertools::Itertools;

use crate::brands::{contains_brand, is_stop_word, resolve_brand};
use crate::record::Record;

/// Trimmed names at or below this many characters are rejected.
const MIN_NAME_CHARS: usize = 3;
const MIN_TOKENS: usize = 2;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rejection {
    TooFewTokens,
    StopWord(String),
    NoBrand,
    TooShort,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    Accepted(String),
    Rejected(Rejection),
}

/// Decide whether a candidate looks like a product name.
///
/// Checks run in a fixed order and the first failure wins.
pub fn screen(candidate: &str) -> Verdict {
    let name = candidate.trim();
    let tokens: Vec<&str> = name.split_whitespace().collect();

    if tokens.len() < MIN_TOKENS {
        return Verdict::Rejected(Rejection::TooFewTokens);
    }
    if let Some(word) = tokens.iter().find(|t| is_stop_word(t)) {
        return Verdict::Rejected(Rejection::StopWord(word.to_lowercase()));
    }
    if !contains_brand(name) {
        return Verdict::Rejected(Rejection::NoBrand);
    }
    if name.chars().count() <= MIN_NAME_CHARS {
        return Verdict::Rejected(Rejection::TooShort);
    }
    Verdict::Accepted(name.to_string())
}

/// Exact-string dedup, first occurrence wins.
pub fn unique_candidates<I>(candidates: I) -> Vec<String>
where
    I: IntoIterator<Item = String>,
{
    candidates.into_iter().unique().collect()
}

pub fn format_records<S: AsRef<str>>(candidates: &[S]) -> Vec<Record> {
    candidates
        .iter()
        .filter_map(|c| {
            let candidate: &str = c.as_ref();
            match screen(candidate) {
                Verdict::Accepted(name) => {
                    let brand = resolve_brand(&name);
                    Some(Record::new(&name, &brand))
                }
                Verdict::Rejected(reason) => {
                    tracing::trace!(candidate, ?reason, "candidate rejected");
                    None
                }
            }
        })
        .collect()
}
