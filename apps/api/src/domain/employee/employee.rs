use serde::{Deserialize, Serialize};

/// A stored employee row
///
/// `id` is assigned by the store on insert and never changes afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Employee {
    pub id: i64,
    pub name: String,
    pub team_name: String,
}

/// Input for creating an employee
///
/// Missing fields decode as empty strings. Any `id` in the payload is
/// ignored because the store generates it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct NewEmployee {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub team_name: String,
}

/// Partial update of an existing employee
///
/// Only non-empty fields are written. An empty string cannot be told apart
/// from an omitted field, so a field can never be cleared through an update.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct EmployeeChanges {
    pub id: i64,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub team_name: String,
}

impl EmployeeChanges {
    /// Column/value pairs that should be written, in column order
    pub fn assignments(&self) -> Vec<(&'static str, &str)> {
        [("name", self.name.as_str()), ("team_name", self.team_name.as_str())]
            .into_iter()
            .filter(|(_, value)| !value.is_empty())
            .collect()
    }

    /// True when the update carries nothing to write
    pub fn is_empty(&self) -> bool {
        self.assignments().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_employee_ignores_id_and_defaults_missing_fields() {
        let input: NewEmployee =
            serde_json::from_str(r#"{"id": 42, "name": "Nafisa"}"#).unwrap();

        assert_eq!(input.name, "Nafisa");
        assert_eq!(input.team_name, "");
    }

    #[test]
    fn changes_require_id() {
        let result = serde_json::from_str::<EmployeeChanges>(r#"{"name": "A"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn changes_skip_empty_fields() {
        let changes = EmployeeChanges {
            id: 1,
            name: "Renamed".to_string(),
            team_name: String::new(),
        };

        assert_eq!(changes.assignments(), vec![("name", "Renamed")]);
        assert!(!changes.is_empty());
    }

    #[test]
    fn changes_with_only_id_are_empty() {
        let changes: EmployeeChanges = serde_json::from_str(r#"{"id": 7}"#).unwrap();
        assert!(changes.is_empty());
    }

    #[test]
    fn employee_serializes_with_snake_case_fields() {
        let employee = Employee {
            id: 3,
            name: "A".to_string(),
            team_name: "B".to_string(),
        };

        let json = serde_json::to_value(&employee).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"id": 3, "name": "A", "team_name": "B"})
        );
    }
}
