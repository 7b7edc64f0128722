use std::fmt;

use serde::{
    de::{self, Unexpected, Visitor},
    Deserialize, Deserializer, Serialize,
};

/// A single file matched by the backend.
#[derive(Serialize, Deserialize, Clone, PartialEq, Eq, Debug)]
pub struct SearchResult {
    pub filename: String,
    /// The indexing service names this field `wordCounter`.
    #[serde(
        rename = "wordsEncountered",
        alias = "wordCounter",
        deserialize_with = "deserialize_count"
    )]
    pub words_encountered: u64,
}

/// Accepts any JSON number that holds a whole, non negative count, so `3.0` reads as `3`.
fn deserialize_count<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    deserializer.deserialize_any(CountVisitor)
}

struct CountVisitor;

impl<'de> Visitor<'de> for CountVisitor {
    type Value = u64;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        write!(formatter, "a non negative whole number")
    }

    fn visit_u64<E>(self, v: u64) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        Ok(v)
    }

    fn visit_i64<E>(self, v: i64) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        u64::try_from(v).map_err(|_| E::invalid_value(Unexpected::Signed(v), &self))
    }

    fn visit_f64<E>(self, v: f64) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        if v.is_finite() && v >= 0.0 && v.fract() == 0.0 && v <= u64::MAX as f64 {
            Ok(v as u64)
        } else {
            Err(E::invalid_value(Unexpected::Float(v), &self))
        }
    }
}

/// Body of a successful `/api?search=` response.
///
/// The backend answers with a plain JSON array, or `null` when nothing matched.
/// Only the first entry is ever displayed, so the list is split up front.
#[derive(Serialize, Deserialize, Clone, PartialEq, Eq, Debug)]
#[serde(
    from = "Option<Vec<SearchResult>>",
    into = "Vec<SearchResult>"
)]
pub enum SearchResults {
    None,
    Single(SearchResult),
    Multiple {
        first: SearchResult,
        rest: Vec<SearchResult>,
    },
}

impl SearchResults {
    pub fn first(&self) -> Option<&SearchResult> {
        match self {
            SearchResults::None => None,
            SearchResults::Single(first) | SearchResults::Multiple { first, .. } => Some(first),
        }
    }

    pub fn len(&self) -> usize {
        match self {
            SearchResults::None => 0,
            SearchResults::Single(_) => 1,
            SearchResults::Multiple { rest, .. } => rest.len() + 1,
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, SearchResults::None)
    }
}

impl From<Vec<SearchResult>> for SearchResults {
    fn from(mut results: Vec<SearchResult>) -> Self {
        match results.len() {
            0 => SearchResults::None,
            1 => SearchResults::Single(results.remove(0)),
            _ => {
                let first = results.remove(0);
                SearchResults::Multiple {
                    first,
                    rest: results,
                }
            }
        }
    }
}

impl From<Option<Vec<SearchResult>>> for SearchResults {
    fn from(results: Option<Vec<SearchResult>>) -> Self {
        results.map(SearchResults::from).unwrap_or(SearchResults::None)
    }
}

impl From<SearchResults> for Vec<SearchResult> {
    fn from(results: SearchResults) -> Self {
        match results {
            SearchResults::None => vec![],
            SearchResults::Single(first) => vec![first],
            SearchResults::Multiple { first, mut rest } => {
                rest.insert(0, first);
                rest
            }
        }
    }
}
