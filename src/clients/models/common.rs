use std::collections::BTreeSet;
use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FitnessLevel {
    Beginner,
    Intermediate,
    Advanced,
    Elite,
}

impl FitnessLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            FitnessLevel::Beginner => "beginner",
            FitnessLevel::Intermediate => "intermediate",
            FitnessLevel::Advanced => "advanced",
            FitnessLevel::Elite => "elite",
        }
    }
}

impl fmt::Display for FitnessLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An exercise picked from the exercise search widget.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExerciseRef {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body_part: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub equipment: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target: Option<String>,
}

/// Typed view over a single day of a generated plan.
///
/// Built leniently from whatever the model returned: missing fields become
/// empty strings and non-string scalars are rendered as text.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DayPlan {
    pub description: String,
    pub warmup: String,
    pub workout: String,
    pub strength: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl DayPlan {
    pub fn from_value(value: &Value) -> Self {
        Self {
            description: text_field(value, "description").unwrap_or_default(),
            warmup: text_field(value, "warmup").unwrap_or_default(),
            workout: text_field(value, "workout").unwrap_or_default(),
            strength: text_field(value, "strength").unwrap_or_default(),
            notes: text_field(value, "notes"),
        }
    }
}

fn text_field(value: &Value, field: &str) -> Option<String> {
    match value.get(field)? {
        Value::Null => None,
        Value::String(text) => Some(text.clone()),
        other => Some(other.to_string()),
    }
}

/// The parsed plan keyed by `day1`..`dayN`.
///
/// Day values are kept exactly as parsed from the model reply.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WeeklyPlan(Map<String, Value>);

impl WeeklyPlan {
    pub fn new(days: Map<String, Value>) -> Self {
        Self(days)
    }

    pub fn day_key(index: u32) -> String {
        format!("day{}", index)
    }

    /// A day counts as present unless it is absent or falsy
    /// (`null`, `false`, `0` or `""`).
    pub fn contains_day(&self, key: &str) -> bool {
        self.0.get(key).is_some_and(is_truthy)
    }

    pub fn keys(&self) -> BTreeSet<&str> {
        self.0.keys().map(String::as_str).collect()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Typed days, in day order (`day2` before `day10`).
    pub fn days(&self) -> Vec<(String, DayPlan)> {
        let mut days: Vec<_> = self
            .0
            .iter()
            .map(|(key, value)| (key.clone(), DayPlan::from_value(value)))
            .collect();
        days.sort_by_key(|(key, _)| day_sort_key(key));
        days
    }
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(flag) => *flag,
        Value::Number(number) => number.as_f64().is_some_and(|n| n != 0.0),
        Value::String(text) => !text.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

fn day_sort_key(key: &str) -> (u32, String) {
    let number = key
        .strip_prefix("day")
        .and_then(|n| n.parse().ok())
        .unwrap_or(u32::MAX);
    (number, key.to_string())
}

/// One persisted row per generated day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanRow {
    pub day: String,
    pub warmup: String,
    pub workout: String,
    pub notes: Option<String>,
    pub strength: String,
    pub description: String,
    pub user_id: Uuid,
}

impl PlanRow {
    pub fn from_day(day: String, plan: DayPlan, user_id: Uuid) -> Self {
        Self {
            day,
            warmup: plan.warmup,
            workout: plan.workout,
            notes: plan.notes,
            strength: plan.strength,
            description: plan.description,
            user_id,
        }
    }
}

/// Request-scoped record of a single generation, updated by `id` only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerationSession {
    pub id: Uuid,
    pub user_id: Uuid,
    pub number_of_days: u32,
    pub fitness_level: FitnessLevel,
    pub started_at: DateTime<Utc>,
    pub duration_ms: Option<i64>,
    pub success: bool,
}

impl GenerationSession {
    pub fn start(user_id: Uuid, number_of_days: u32, fitness_level: FitnessLevel) -> Self {
        Self {
            id: Uuid::new_v4(),
            user_id,
            number_of_days,
            fitness_level,
            started_at: Utc::now(),
            duration_ms: None,
            success: false,
        }
    }
}
