//! Client-side validation for the create forms
//!
//! A form turns into a request body only when every field passes; the
//! first failing rule per field is reported.

use std::fmt;

use chrono::{DateTime, NaiveDate};

use crate::domain::task::{NewTask, TaskPriority};
use crate::domain::team::{NewTeam, MAX_MEMBER_COUNT};

/// Validation failure on one field
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: &'static str,
    pub message: &'static str,
}

/// Every failing field of a form, in field order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormErrors(Vec<FieldError>);

impl FormErrors {
    fn check(&mut self, field: &'static str, result: Result<(), &'static str>) {
        if let Err(message) = result {
            self.0.push(FieldError { field, message });
        }
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Message for `field`, if it failed
    pub fn get(&self, field: &str) -> Option<&'static str> {
        self.0.iter().find(|e| e.field == field).map(|e| e.message)
    }

    pub fn iter(&self) -> impl Iterator<Item = &FieldError> {
        self.0.iter()
    }
}

impl fmt::Display for FormErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let messages: Vec<&str> = self.0.iter().map(|e| e.message).collect();
        f.write_str(&messages.join("; "))
    }
}

impl std::error::Error for FormErrors {}

/// Raw input of the create-team form
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TeamForm {
    pub name: String,
    pub description: String,
    pub member_count: String,
}

impl TeamForm {
    pub fn validate_name(value: &str) -> Result<(), &'static str> {
        if value.trim().is_empty() {
            return Err("Team name is required");
        }
        if value.chars().count() < 2 {
            return Err("Team name must be at least 2 characters");
        }
        Ok(())
    }

    pub fn validate_description(value: &str) -> Result<(), &'static str> {
        if value.trim().is_empty() {
            return Err("Description is required");
        }
        if value.chars().count() < 5 {
            return Err("Description must be at least 5 characters");
        }
        Ok(())
    }

    pub fn parse_member_count(value: &str) -> Result<u32, &'static str> {
        let value = value.trim();
        if value.is_empty() {
            return Err("Member count is required");
        }
        let count = leading_integer(value).ok_or("Member count must be a number")?;
        if count < 1 {
            return Err("Member count must be at least 1");
        }
        if count > i64::from(MAX_MEMBER_COUNT) {
            return Err("Member count cannot exceed 1000");
        }
        Ok(count as u32)
    }

    /// Builds the request body, or every field error
    pub fn submit(&self) -> Result<NewTeam, FormErrors> {
        let mut errors = FormErrors::default();
        errors.check("name", Self::validate_name(&self.name));
        errors.check("description", Self::validate_description(&self.description));

        let member_count = Self::parse_member_count(&self.member_count);
        errors.check("memberCount", member_count.map(|_| ()));

        match member_count {
            Ok(member_count) if errors.is_empty() => Ok(NewTeam {
                name: self.name.clone(),
                description: self.description.clone(),
                member_count,
            }),
            _ => Err(errors),
        }
    }
}

/// Raw input of the create-task form
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskForm {
    pub title: String,
    pub description: String,
    pub assigned_agent: String,
    pub priority: TaskPriority,
    pub due_date: String,
}

fn required(value: &str, message: &'static str) -> Result<(), &'static str> {
    if value.is_empty() {
        Err(message)
    } else {
        Ok(())
    }
}

/// Accepts `YYYY-MM-DD` or a full RFC 3339 timestamp
pub fn parse_due_date(value: &str) -> Result<NaiveDate, &'static str> {
    if value.is_empty() {
        return Err("Due date is required");
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .or_else(|_| DateTime::parse_from_rfc3339(value).map(|dt| dt.date_naive()))
        .map_err(|_| "Invalid date")
}

impl TaskForm {
    pub fn submit(&self) -> Result<NewTask, FormErrors> {
        let mut errors = FormErrors::default();
        errors.check("title", required(&self.title, "Title is required"));
        errors.check(
            "description",
            required(&self.description, "Description is required"),
        );
        errors.check(
            "assignedAgent",
            required(&self.assigned_agent, "Agent is required"),
        );

        let due_date = parse_due_date(&self.due_date);
        errors.check("dueDate", due_date.map(|_| ()));

        match due_date {
            Ok(due_date) if errors.is_empty() => Ok(NewTask {
                title: self.title.clone(),
                description: self.description.clone(),
                assigned_agent_id: Some(self.assigned_agent.clone()),
                priority: Some(self.priority),
                due_date: Some(due_date),
                ..NewTask::default()
            }),
            _ => Err(errors),
        }
    }
}

/// Integer at the start of `value`, ignoring anything after the digits
///
/// `"3.5"` and `"3abc"` read as 3. Numerals too long for `i64` saturate.
fn leading_integer(value: &str) -> Option<i64> {
    let (negative, rest) = match value.as_bytes().first() {
        Some(b'-') => (true, &value[1..]),
        Some(b'+') => (false, &value[1..]),
        _ => (false, value),
    };

    let end = rest
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(rest.len());
    let digits = &rest[..end];
    if digits.is_empty() {
        return None;
    }

    let magnitude = digits.parse::<i64>().unwrap_or(i64::MAX);
    Some(if negative { -magnitude } else { magnitude })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn team_form(name: &str, description: &str, count: &str) -> TeamForm {
        TeamForm {
            name: name.to_string(),
            description: description.to_string(),
            member_count: count.to_string(),
        }
    }

    #[test]
    fn valid_team_form_submits() {
        let team = team_form("Core", "Core platform team", "3").submit().unwrap();
        assert_eq!(team.member_count, 3);
        assert_eq!(team.name, "Core");
    }

    #[test]
    fn team_name_rules() {
        assert_eq!(TeamForm::validate_name("   "), Err("Team name is required"));
        assert_eq!(
            TeamForm::validate_name("A"),
            Err("Team name must be at least 2 characters")
        );
        assert_eq!(TeamForm::validate_name("AI"), Ok(()));
    }

    #[test]
    fn description_rules() {
        assert_eq!(TeamForm::validate_description(""), Err("Description is required"));
        assert_eq!(
            TeamForm::validate_description("desc"),
            Err("Description must be at least 5 characters")
        );
    }

    #[test]
    fn member_count_rules() {
        assert_eq!(TeamForm::parse_member_count(""), Err("Member count is required"));
        assert_eq!(
            TeamForm::parse_member_count("many"),
            Err("Member count must be a number")
        );
        assert_eq!(
            TeamForm::parse_member_count("0"),
            Err("Member count must be at least 1")
        );
        assert_eq!(
            TeamForm::parse_member_count("1001"),
            Err("Member count cannot exceed 1000")
        );
        assert_eq!(TeamForm::parse_member_count(" 1000 "), Ok(1000));
    }

    #[test]
    fn member_count_reads_leading_digits() {
        assert_eq!(TeamForm::parse_member_count("3.5"), Ok(3));
        assert_eq!(TeamForm::parse_member_count("3abc"), Ok(3));
        assert_eq!(TeamForm::parse_member_count("+7"), Ok(7));
        assert_eq!(
            TeamForm::parse_member_count("-2"),
            Err("Member count must be at least 1")
        );
        assert_eq!(
            TeamForm::parse_member_count("99999999999999999999999"),
            Err("Member count cannot exceed 1000")
        );
        assert_eq!(
            TeamForm::parse_member_count("abc3"),
            Err("Member count must be a number")
        );
    }

    #[test]
    fn invalid_team_form_reports_every_field() {
        let errors = team_form("", "abc", "x").submit().unwrap_err();
        assert_eq!(errors.get("name"), Some("Team name is required"));
        assert_eq!(
            errors.get("description"),
            Some("Description must be at least 5 characters")
        );
        assert_eq!(errors.get("memberCount"), Some("Member count must be a number"));
        assert_eq!(errors.iter().count(), 3);
    }

    #[test]
    fn task_form_requires_every_field() {
        let errors = TaskForm::default().submit().unwrap_err();
        assert_eq!(errors.get("title"), Some("Title is required"));
        assert_eq!(errors.get("description"), Some("Description is required"));
        assert_eq!(errors.get("assignedAgent"), Some("Agent is required"));
        assert_eq!(errors.get("dueDate"), Some("Due date is required"));
    }

    #[test]
    fn task_form_rejects_bad_dates() {
        assert_eq!(parse_due_date("next tuesday"), Err("Invalid date"));
        assert_eq!(
            parse_due_date("2026-11-02"),
            Ok(NaiveDate::from_ymd_opt(2026, 11, 2).unwrap())
        );
        assert_eq!(
            parse_due_date("2026-11-02T09:00:00Z"),
            Ok(NaiveDate::from_ymd_opt(2026, 11, 2).unwrap())
        );
    }

    #[test]
    fn valid_task_form_builds_request() {
        let form = TaskForm {
            title: "Write docs".to_string(),
            description: "Document the API".to_string(),
            assigned_agent: "agent-2".to_string(),
            priority: TaskPriority::High,
            due_date: "2026-11-02".to_string(),
        };

        let task = form.submit().unwrap();
        assert_eq!(task.assigned_agent_id.as_deref(), Some("agent-2"));
        assert_eq!(task.priority, Some(TaskPriority::High));
        assert!(task.status.is_none());
    }
}
