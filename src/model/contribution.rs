use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContributionType {
    Notes,
    Summary,
    StudyGuide,
    QuestionBank,
    Cheatsheet,
    Other,
}

impl ContributionType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ContributionType::Notes => "notes",
            ContributionType::Summary => "summary",
            ContributionType::StudyGuide => "study_guide",
            ContributionType::QuestionBank => "question_bank",
            ContributionType::Cheatsheet => "cheatsheet",
            ContributionType::Other => "other",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "notes" => Some(ContributionType::Notes),
            "summary" => Some(ContributionType::Summary),
            "study_guide" => Some(ContributionType::StudyGuide),
            "question_bank" => Some(ContributionType::QuestionBank),
            "cheatsheet" => Some(ContributionType::Cheatsheet),
            "other" => Some(ContributionType::Other),
            _ => None,
        }
    }
}

/// Moderation state. Every contribution is created `pending`; the transition
/// to approved/rejected happens through an external moderation step, so no
/// transition guard is enforced here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContributionStatus {
    Pending,
    Approved,
    Rejected,
}

impl ContributionStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ContributionStatus::Pending => "pending",
            ContributionStatus::Approved => "approved",
            ContributionStatus::Rejected => "rejected",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "pending" => Some(ContributionStatus::Pending),
            "approved" => Some(ContributionStatus::Approved),
            "rejected" => Some(ContributionStatus::Rejected),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Contribution {
    pub id: String,
    pub user_id: String,
    pub user_name: String,
    pub user_email: String,
    pub course_id: String,
    pub course_name: String,
    pub title: String,
    pub description: String,
    #[serde(rename = "type")]
    pub kind: ContributionType,
    pub resource_id: Option<String>,
    pub content: Option<String>,
    pub file_url: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    pub created_at: String,
    pub updated_at: String,
    pub status: ContributionStatus,
    pub credits: i64,
    pub views: i64,
    pub downloads: i64,
    pub upvotes: i64,
    pub downvotes: i64,
}

/// Submission payload; id and status are assigned server-side.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewContribution {
    pub user_id: String,
    pub user_name: String,
    pub user_email: String,
    pub course_id: String,
    pub course_name: String,
    pub title: String,
    pub description: String,
    #[serde(rename = "type")]
    pub kind: ContributionType,
    #[serde(default)]
    pub resource_id: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub file_url: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub credits: i64,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContributionPatch {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub tags: Option<Vec<String>>,
    #[serde(default)]
    pub status: Option<ContributionStatus>,
    #[serde(default)]
    pub credits: Option<i64>,
}

impl ContributionPatch {
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.description.is_none()
            && self.content.is_none()
            && self.tags.is_none()
            && self.status.is_none()
            && self.credits.is_none()
    }
}
