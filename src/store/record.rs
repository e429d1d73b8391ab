//! Student records and input normalization
//!
//! A `RecordInput` is whatever arrived in a request body. `normalize` turns it
//! into `RecordFields`, the only shape the store accepts. Create and update
//! share this path, so both enforce the same rules.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::errors::{ValidationError, ValidationResult};

/// A stored student entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    pub id: u64,
    pub name: String,
    pub age: i64,
    pub grade: String,
    pub email: String,
}

impl Record {
    pub(crate) fn from_fields(id: u64, fields: RecordFields) -> Self {
        Self {
            id,
            name: fields.name,
            age: fields.age,
            grade: fields.grade,
            email: fields.email,
        }
    }

    /// Case-insensitive substring match against name, email and grade.
    ///
    /// `needle` must already be lowercased.
    pub(crate) fn matches(&self, needle: &str) -> bool {
        self.name.to_lowercase().contains(needle)
            || self.email.to_lowercase().contains(needle)
            || self.grade.to_lowercase().contains(needle)
    }
}

/// Normalized, validated non-id fields of a record.
///
/// Only obtainable through `RecordInput::normalize` or `RecordFields::new`,
/// so the store never sees un-normalized values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordFields {
    pub(crate) name: String,
    pub(crate) age: i64,
    pub(crate) grade: String,
    pub(crate) email: String,
}

impl RecordFields {
    /// Build fields from plain values, applying the same normalization
    /// and validation as request input.
    pub fn new(
        name: impl Into<String>,
        age: i64,
        grade: impl Into<String>,
        email: impl Into<String>,
    ) -> ValidationResult<Self> {
        RecordInput {
            name: Some(name.into()),
            age: Some(Value::from(age)),
            grade: Some(grade.into()),
            email: Some(email.into()),
            id: None,
        }
        .normalize()
    }
}

/// Raw record body as sent by clients.
///
/// Every field is optional so that absence is reported as a validation error
/// rather than a deserialization failure. A body `id` is accepted and ignored.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RecordInput {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub age: Option<Value>,
    #[serde(default)]
    pub grade: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default, skip_serializing)]
    pub id: Option<Value>,
}

impl RecordInput {
    /// Trim name and email, uppercase grade, coerce age to an integer.
    pub fn normalize(&self) -> ValidationResult<RecordFields> {
        let name = required_text(self.name.as_deref())?.trim().to_string();
        let email = required_text(self.email.as_deref())?.trim().to_string();
        let grade = required_text(self.grade.as_deref())?.to_uppercase();

        if name.is_empty() || email.is_empty() || grade.trim().is_empty() {
            return Err(ValidationError::MissingFields);
        }

        let age = parse_age(self.age.as_ref())?;

        Ok(RecordFields {
            name,
            age,
            grade,
            email,
        })
    }
}

fn required_text(value: Option<&str>) -> ValidationResult<&str> {
    match value {
        Some(s) if !s.is_empty() => Ok(s),
        _ => Err(ValidationError::MissingFields),
    }
}

fn parse_age(value: Option<&Value>) -> ValidationResult<i64> {
    match value {
        None | Some(Value::Null) => Err(ValidationError::MissingFields),
        Some(Value::Number(n)) => {
            if let Some(i) = n.as_i64() {
                return Ok(i);
            }
            match n.as_f64() {
                Some(f) if f.is_finite() && f.abs() < i64::MAX as f64 => Ok(f.trunc() as i64),
                _ => Err(ValidationError::InvalidAge),
            }
        }
        Some(Value::String(s)) => {
            let s = s.trim();
            if s.is_empty() {
                return Err(ValidationError::MissingFields);
            }
            s.parse::<i64>().map_err(|_| ValidationError::InvalidAge)
        }
        Some(_) => Err(ValidationError::InvalidAge),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn input(body: Value) -> RecordInput {
        serde_json::from_value(body).unwrap()
    }

    #[test]
    fn test_normalize_trims_and_uppercases() {
        let fields = input(json!({
            "name": "  Ann Lee ",
            "age": 20,
            "grade": "a",
            "email": " ann@x.com "
        }))
        .normalize()
        .unwrap();

        assert_eq!(fields.name, "Ann Lee");
        assert_eq!(fields.age, 20);
        assert_eq!(fields.grade, "A");
        assert_eq!(fields.email, "ann@x.com");
    }

    #[test]
    fn test_missing_field_rejected() {
        for missing in ["name", "age", "grade", "email"] {
            let mut body = json!({"name": "A", "age": 1, "grade": "b", "email": "e"});
            body.as_object_mut().unwrap().remove(missing);
            assert_eq!(
                input(body).normalize(),
                Err(ValidationError::MissingFields),
                "missing {}",
                missing
            );
        }
    }

    #[test]
    fn test_blank_text_counts_as_missing() {
        let result = input(json!({"name": "   ", "age": 1, "grade": "b", "email": "e"})).normalize();
        assert_eq!(result, Err(ValidationError::MissingFields));

        let result = input(json!({"name": "A", "age": 1, "grade": "", "email": "e"})).normalize();
        assert_eq!(result, Err(ValidationError::MissingFields));
    }

    #[test]
    fn test_blank_grade_rejected() {
        let result = input(json!({"name": "A", "age": 1, "grade": "   ", "email": "e"})).normalize();
        assert_eq!(result, Err(ValidationError::MissingFields));

        assert_eq!(RecordFields::new("A", 1, "\t", "e"), Err(ValidationError::MissingFields));

        let fields = input(json!({"name": "A", "age": 1, "grade": " b ", "email": "e"}))
            .normalize()
            .unwrap();
        assert_eq!(fields.grade, " B ");
    }

    #[test]
    fn test_null_age_is_missing() {
        let result = input(json!({"name": "A", "age": null, "grade": "b", "email": "e"})).normalize();
        assert_eq!(result, Err(ValidationError::MissingFields));
    }

    #[test]
    fn test_age_coercion() {
        let age = |v: Value| parse_age(Some(&v));

        assert_eq!(age(json!(19)), Ok(19));
        assert_eq!(age(json!("21")), Ok(21));
        assert_eq!(age(json!(" 22 ")), Ok(22));
        assert_eq!(age(json!(20.9)), Ok(20));
        assert_eq!(age(json!(0)), Ok(0));
        assert_eq!(age(json!("")), Err(ValidationError::MissingFields));
    }

    #[test]
    fn test_non_numeric_age_rejected() {
        let age = |v: Value| parse_age(Some(&v));

        assert_eq!(age(json!("abc")), Err(ValidationError::InvalidAge));
        assert_eq!(age(json!("20 years")), Err(ValidationError::InvalidAge));
        assert_eq!(age(json!(true)), Err(ValidationError::InvalidAge));
        assert_eq!(age(json!([20])), Err(ValidationError::InvalidAge));
    }

    #[test]
    fn test_body_id_is_ignored() {
        let fields = input(json!({"id": 99, "name": "A", "age": 1, "grade": "b", "email": "e"}))
            .normalize()
            .unwrap();
        assert_eq!(Record::from_fields(4, fields).id, 4);
    }

    #[test]
    fn test_matches_is_case_insensitive() {
        let record = Record::from_fields(1, RecordFields::new("John Doe", 20, "a", "john@school.com").unwrap());

        assert!(record.matches("jo"));
        assert!(record.matches("school"));
        assert!(record.matches("a"));
        assert!(record.matches(""));
        assert!(!record.matches("smith"));
    }

    #[test]
    fn test_record_serializes_flat() {
        let record = Record::from_fields(3, RecordFields::new("Mike", 19, "A", "m@s.com").unwrap());
        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(
            value,
            json!({"id": 3, "name": "Mike", "age": 19, "grade": "A", "email": "m@s.com"})
        );
    }
}
