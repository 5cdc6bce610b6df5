// src/pipeline/status.rs

//! Homework record parsing and message formatting.

use serde_json::Value;

use crate::error::{AppError, Result};
use crate::models::HomeworkStatus;

/// Build the chat message announcing one homework's review status.
pub fn parse_status(record: &Value) -> Result<String> {
    let name = record
        .get("homework_name")
        .and_then(Value::as_str)
        .ok_or(AppError::MissingField("homework_name"))?;
    let code = record
        .get("status")
        .and_then(Value::as_str)
        .ok_or(AppError::MissingField("status"))?;
    let status = HomeworkStatus::from_code(code)
        .ok_or_else(|| AppError::UndocumentedStatus(code.to_string()))?;

    Ok(format!(
        "Изменился статус проверки работы \"{}\". {}",
        name,
        status.verdict()
    ))
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn formats_approved_homework() {
        let record = json!({"homework_name": "hw1", "status": "approved"});
        assert_eq!(
            parse_status(&record).unwrap(),
            "Изменился статус проверки работы \"hw1\". \
             Работа проверена: ревьюеру всё понравилось. Ура!"
        );
    }

    #[test]
    fn formats_reviewing_homework() {
        let record = json!({"homework_name": "hw2", "status": "reviewing"});
        assert_eq!(
            parse_status(&record).unwrap(),
            "Изменился статус проверки работы \"hw2\". \
             Работа взята на проверку ревьюером."
        );
    }

    #[test]
    fn formats_rejected_homework() {
        let record = json!({"homework_name": "hw3", "status": "rejected"});
        assert_eq!(
            parse_status(&record).unwrap(),
            "Изменился статус проверки работы \"hw3\". \
             Работа проверена: у ревьюера есть замечания."
        );
    }

    #[test]
    fn rejects_record_without_name() {
        let record = json!({"status": "approved"});
        assert!(matches!(
            parse_status(&record),
            Err(AppError::MissingField("homework_name"))
        ));
    }

    #[test]
    fn rejects_record_without_status() {
        let record = json!({"homework_name": "hw1"});
        assert!(matches!(
            parse_status(&record),
            Err(AppError::MissingField("status"))
        ));
    }

    #[test]
    fn rejects_undocumented_status() {
        let record = json!({"homework_name": "hw2", "status": "in_review"});
        match parse_status(&record) {
            Err(AppError::UndocumentedStatus(code)) => assert_eq!(code, "in_review"),
            other => panic!("expected UndocumentedStatus, got {other:?}"),
        }
    }
}
