use serde::Serialize;
use serde_json::{Map, Value};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    pub fn as_tag(self) -> &'static str {
        match self {
            Gender::Male => "MALE",
            Gender::Female => "FEMALE",
        }
    }

    /// Only the exact upper-case tags count; anything else is "unknown".
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "MALE" => Some(Gender::Male),
            "FEMALE" => Some(Gender::Female),
            _ => None,
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_tag())
    }
}

/// A trainer file as read from disk. Fields are kept as raw JSON (in file
/// order) so everything except `name` is written back untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct TrainerRecord {
    fields: Map<String, Value>,
}

impl TrainerRecord {
    pub fn from_value(value: Value) -> anyhow::Result<Self> {
        match value {
            Value::Object(fields) => Ok(Self { fields }),
            other => anyhow::bail!("Expected a JSON object, got {}", json_kind(&other)),
        }
    }

    /// Missing, non-string and empty names are all treated as "no name".
    pub fn name(&self) -> Option<&str> {
        self.fields
            .get("name")
            .and_then(Value::as_str)
            .filter(|name| !name.is_empty())
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.fields.insert("name".to_string(), Value::String(name.into()));
    }

    /// Gender of the first team member tagged `MALE` or `FEMALE`.
    pub fn team_gender(&self) -> Option<Gender> {
        self.fields
            .get("team")?
            .as_array()?
            .iter()
            .filter_map(|member| member.get("gender").and_then(Value::as_str))
            .find_map(Gender::from_tag)
    }

    pub fn fields(&self) -> &Map<String, Value> {
        &self.fields
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
