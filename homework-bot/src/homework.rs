//! Response validation and verdict messages.
//!
//! The homework API answers with `{"homeworks": [...], "current_date": <ts>}`. Records carry a
//! `homework_name` and a `status`; only the three review verdicts below are known.

use hwbot_core::{HwbotError, Result};
use serde::Deserialize;
use serde_json::Value;

/// Review verdict of a homework submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HomeworkStatus {
    Approved,
    Reviewing,
    Rejected,
}

impl HomeworkStatus {
    /// Human-readable verdict sent to the chat.
    pub fn verdict(&self) -> &'static str {
        match self {
            HomeworkStatus::Approved => "Работа проверена: ревьюеру всё понравилось. Ура!",
            HomeworkStatus::Reviewing => "Работа взята на проверку ревьюером.",
            HomeworkStatus::Rejected => "Работа проверена: у ревьюера есть замечания.",
        }
    }
}

/// Checks the response shape and returns the `homeworks` array as-is (possibly empty).
pub fn check_response(response: &Value) -> Result<&[Value]> {
    let obj = response.as_object().ok_or_else(|| {
        HwbotError::MalformedResponse(format!("expected a JSON object, got {}", json_type(response)))
    })?;
    let homeworks = obj
        .get("homeworks")
        .ok_or_else(|| HwbotError::MissingField("homeworks".to_string()))?;
    if !obj.contains_key("current_date") {
        return Err(HwbotError::MissingField("current_date".to_string()));
    }
    let homeworks = homeworks.as_array().ok_or_else(|| {
        HwbotError::MalformedResponse(format!(
            "homeworks must be an array, got {}",
            json_type(homeworks)
        ))
    })?;
    Ok(homeworks.as_slice())
}

/// `current_date` of a checked response, when it is an integer timestamp.
pub fn current_date(response: &Value) -> Option<i64> {
    response.get("current_date").and_then(Value::as_i64)
}

/// Builds the chat message for one homework record. Same record, same message.
pub fn parse_status(homework: &Value) -> Result<String> {
    let obj = homework.as_object().ok_or_else(|| {
        HwbotError::MalformedResponse(format!(
            "homework record must be an object, got {}",
            json_type(homework)
        ))
    })?;
    let name = match obj.get("homework_name") {
        Some(Value::String(name)) => name,
        Some(other) => {
            return Err(HwbotError::MalformedResponse(format!(
                "homework_name must be a string, got {}",
                json_type(other)
            )))
        }
        None => return Err(HwbotError::MissingField("homework_name".to_string())),
    };
    let status = match obj.get("status") {
        Some(raw @ Value::String(s)) => HomeworkStatus::deserialize(raw)
            .map_err(|_| HwbotError::UnknownStatus(s.clone()))?,
        Some(other) => return Err(HwbotError::UnknownStatus(other.to_string())),
        None => return Err(HwbotError::UnknownStatus("<missing>".to_string())),
    };
    Ok(format!(
        "Изменился статус проверки работы \"{}\". {}",
        name,
        status.verdict()
    ))
}

fn json_type(v: &Value) -> &'static str {
    match v {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
