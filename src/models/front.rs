//! Fronters model returned by `GET /s/{id}/fronters`.

use chrono::{DateTime, Utc};
use serde::Deserialize;

use super::Member;

/// The current fronting state of a system.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct Front {
    /// Primary fronter first, in API order. Empty when nobody is fronting.
    pub members: Vec<Member>,
    /// When this switch happened.
    #[serde(default)]
    pub timestamp: Option<DateTime<Utc>>,
}

impl Front {
    pub fn primary(&self) -> Option<&Member> {
        self.members.first()
    }

    /// Everyone fronting besides the primary fronter.
    pub fn co_fronters(&self) -> &[Member] {
        self.members.get(1..).unwrap_or(&[])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_preserves_order() {
        let front: Front = serde_json::from_str(
            r#"{
                "timestamp": "2021-06-01T12:00:00Z",
                "members": [
                    {"id": "aaaaa", "name": "C"},
                    {"id": "bbbbb", "name": "A"},
                    {"id": "ccccc", "name": "B"}
                ]
            }"#,
        )
        .unwrap();

        let names: Vec<_> = front.members.iter().map(|m| m.name.as_str()).collect();
        assert_eq!(names, vec!["C", "A", "B"]);
        assert_eq!(front.primary().map(|m| m.name.as_str()), Some("C"));
        assert_eq!(front.co_fronters().len(), 2);
    }

    #[test]
    fn test_empty_front_has_no_co_fronters() {
        let front: Front = serde_json::from_str(r#"{"members": [], "timestamp": null}"#).unwrap();
        assert!(front.primary().is_none());
        assert!(front.co_fronters().is_empty());
        assert!(front.timestamp.is_none());
    }

    #[test]
    fn test_missing_members_fails() {
        let result = serde_json::from_str::<Front>(r#"{"timestamp": "2021-06-01T12:00:00Z"}"#);
        assert!(result.is_err());
    }
}
