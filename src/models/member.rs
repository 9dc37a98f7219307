//! Member model as embedded in the fronters response.

use chrono::{DateTime, NaiveDate, Utc};
use serde::Deserialize;

use super::nullable_string;
use crate::errors::AppError;

/// Raw birthday value PluralKit sends for members without a birthday.
const NULL_BIRTHDAY: &str = "null";

/// An individual member of a system.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct Member {
    pub id: String,
    pub name: String,
    #[serde(default, deserialize_with = "nullable_string")]
    pub color: String,
    #[serde(default, deserialize_with = "nullable_string")]
    pub avatar_url: String,
    /// ISO `YYYY-MM-DD`, unparsed.
    #[serde(default, deserialize_with = "nullable_string")]
    pub birthday: String,
    #[serde(default, deserialize_with = "nullable_string")]
    pub pronouns: String,
    /// Markdown source.
    #[serde(default, deserialize_with = "nullable_string")]
    pub description: String,
    #[serde(default)]
    pub created: Option<DateTime<Utc>>,
}

impl Member {
    /// Parse the raw birthday.
    ///
    /// Returns `Ok(None)` when the member has no birthday set.
    pub fn parsed_birthday(&self) -> Result<Option<NaiveDate>, AppError> {
        if self.birthday.is_empty() || self.birthday == NULL_BIRTHDAY {
            return Ok(None);
        }

        NaiveDate::parse_from_str(&self.birthday, "%Y-%m-%d")
            .map(Some)
            .map_err(|e| AppError::DateParseFailed(format!("{:?}: {}", self.birthday, e)))
    }
}
