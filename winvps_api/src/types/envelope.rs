//! The response wrapper shared by every endpoint, and its pagination cursor.

use serde::{de::DeserializeOwned, Deserialize, Deserializer, Serialize};

/// Position of a list response within the full result set.
///
/// `page` is 1-indexed and stays within `1..=pages` whenever `total > 0`.
/// Endpoints that do not paginate send nothing or `null`, which decodes as
/// all zeros.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Pagination {
    #[serde(default, deserialize_with = "null_as_default")]
    pub total: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub limit: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub page: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub pages: i64,
}

impl Pagination {
    /// The page after this one, or `None` on the last page.
    pub fn next_page(&self) -> Option<i64> {
        if self.page < self.pages {
            Some(self.page + 1)
        } else {
            None
        }
    }

    /// The page before this one, or `None` on the first page.
    pub fn previous_page(&self) -> Option<i64> {
        if self.page > 1 {
            Some(self.page - 1)
        } else {
            None
        }
    }

    pub fn has_next(&self) -> bool {
        self.next_page().is_some()
    }

    pub fn has_previous(&self) -> bool {
        self.previous_page().is_some()
    }
}

/// Wire shape of every response body: `{ data, pagination, error }`.
///
/// Successful responses fill `data`, failed ones fill `error`.
#[derive(Deserialize, Debug)]
pub struct Envelope<T> {
    pub data: Option<T>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub pagination: Pagination,
    #[serde(default)]
    pub error: Option<String>,
}

/// Decodes a response body, reading `data` as `T`.
pub fn decode_envelope<T: DeserializeOwned>(bytes: &[u8]) -> Result<Envelope<T>, serde_json::Error> {
    serde_json::from_slice(bytes)
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// One page of a list endpoint.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Paginated<T> {
    pub data: Vec<T>,
    pub pagination: Pagination,
}
