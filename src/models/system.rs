//! System model returned by `GET /s/{id}`.

use serde::Deserialize;

use super::nullable_string;

/// A registered system.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct System {
    /// Five-letter system code.
    pub id: String,
    #[serde(default, deserialize_with = "nullable_string")]
    pub name: String,
}

impl System {
    /// Name to show on pages, synthesized from the id when the system has no name.
    pub fn display_name(&self) -> String {
        if self.name.is_empty() {
            format!("[no name] (ID: {})", self.id)
        } else {
            self.name.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_name_falls_back_to_id() {
        let system = System {
            id: "qvzbz".to_string(),
            name: String::new(),
        };
        assert_eq!(system.display_name(), "[no name] (ID: qvzbz)");
    }

    #[test]
    fn test_display_name_uses_name() {
        let system = System {
            id: "qvzbz".to_string(),
            name: "Foo".to_string(),
        };
        assert_eq!(system.display_name(), "Foo");
    }

    #[test]
    fn test_deserialize_null_name() {
        let system: System =
            serde_json::from_str(r#"{"id": "abcde", "name": null, "tag": "x"}"#).unwrap();
        assert_eq!(system.id, "abcde");
        assert!(system.name.is_empty());
    }

    #[test]
    fn test_deserialize_missing_id_fails() {
        let result = serde_json::from_str::<System>(r#"{"name": "Foo"}"#);
        assert!(result.is_err());
    }
}
