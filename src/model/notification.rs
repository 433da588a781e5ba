use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationType {
    Deadline,
    Attendance,
    Exam,
    StudySuggestion,
    CourseUpdate,
    Achievement,
}

impl NotificationType {
    pub fn as_str(&self) -> &'static str {
        match self {
            NotificationType::Deadline => "deadline",
            NotificationType::Attendance => "attendance",
            NotificationType::Exam => "exam",
            NotificationType::StudySuggestion => "study_suggestion",
            NotificationType::CourseUpdate => "course_update",
            NotificationType::Achievement => "achievement",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "deadline" => Some(NotificationType::Deadline),
            "attendance" => Some(NotificationType::Attendance),
            "exam" => Some(NotificationType::Exam),
            "study_suggestion" => Some(NotificationType::StudySuggestion),
            "course_update" => Some(NotificationType::CourseUpdate),
            "achievement" => Some(NotificationType::Achievement),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    Low,
    Medium,
    High,
}

impl Priority {
    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::Low => "low",
            Priority::Medium => "medium",
            Priority::High => "high",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "low" => Some(Priority::Low),
            "medium" => Some(Priority::Medium),
            "high" => Some(Priority::High),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    pub id: String,
    pub student_id: String,
    #[serde(rename = "type")]
    pub kind: NotificationType,
    pub title: String,
    pub message: String,
    pub details: Option<serde_json::Value>,
    pub priority: Priority,
    pub read: bool,
    pub read_at: Option<String>,
    pub created_at: String,
    pub action_url: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewNotification {
    pub student_id: String,
    #[serde(rename = "type")]
    pub kind: NotificationType,
    pub title: String,
    pub message: String,
    #[serde(default)]
    pub details: Option<serde_json::Value>,
    #[serde(default = "default_priority")]
    pub priority: Priority,
    #[serde(default)]
    pub action_url: Option<String>,
}

fn default_priority() -> Priority {
    Priority::Medium
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReminderType {
    Assignment,
    Exam,
    Study,
    Attendance,
    Custom,
}

impl ReminderType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReminderType::Assignment => "assignment",
            ReminderType::Exam => "exam",
            ReminderType::Study => "study",
            ReminderType::Attendance => "attendance",
            ReminderType::Custom => "custom",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "assignment" => Some(ReminderType::Assignment),
            "exam" => Some(ReminderType::Exam),
            "study" => Some(ReminderType::Study),
            "attendance" => Some(ReminderType::Attendance),
            "custom" => Some(ReminderType::Custom),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reminder {
    pub id: String,
    pub student_id: String,
    pub course_id: String,
    pub course_name: String,
    pub title: String,
    pub description: String,
    pub due_date: String,
    pub reminder_date: String,
    #[serde(rename = "type")]
    pub kind: ReminderType,
    pub completed: bool,
    pub completed_at: Option<String>,
    pub created_at: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewReminder {
    pub student_id: String,
    pub course_id: String,
    pub course_name: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub due_date: String,
    pub reminder_date: String,
    #[serde(rename = "type")]
    pub kind: ReminderType,
}
