use serde_json::Value;

use crate::clients::models::common::WeeklyPlan;
use crate::error::GenerationError;
use crate::services::json_repair;

pub fn parse_weekly_plan(response: &str, number_of_days: u32) -> Result<WeeklyPlan, GenerationError> {
    let cleaned = json_repair::repair(response);
    let plan = parse_json_object(&cleaned)?;
    validate_days(&plan, number_of_days)?;
    Ok(plan)
}

fn parse_json_object(cleaned: &str) -> Result<WeeklyPlan, GenerationError> {
    let parsed: Value =
        serde_json::from_str(cleaned).map_err(|e| GenerationError::MalformedResponse {
            reason: e.to_string(),
            cleaned: cleaned.to_string(),
        })?;

    match parsed {
        Value::Object(days) => Ok(WeeklyPlan::new(days)),
        other => Err(GenerationError::MalformedResponse {
            reason: format!("expected a JSON object, found {}", json_type_name(&other)),
            cleaned: cleaned.to_string(),
        }),
    }
}

pub fn validate_days(plan: &WeeklyPlan, number_of_days: u32) -> Result<(), GenerationError> {
    for index in 1..=number_of_days {
        let key = WeeklyPlan::day_key(index);
        if !plan.contains_day(&key) {
            return Err(GenerationError::MissingDay { key });
        }
    }
    Ok(())
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
