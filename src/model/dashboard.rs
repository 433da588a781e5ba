use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardMetrics {
    pub overall_gpa: f64,
    pub average_attendance: f64,
    pub courses_enrolled: i64,
    pub active_reminders: i64,
    pub upcoming_deadlines: i64,
    pub completion_rate: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssessmentSummary {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub score: f64,
    pub max_score: f64,
    pub percentage: f64,
    pub date: String,
    pub weight: f64,
    pub feedback: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseOverview {
    pub course_id: String,
    pub course_name: String,
    pub instructor: String,
    pub credits: i64,
    pub current_grade: Option<String>,
    pub current_gpa: Option<f64>,
    pub attendance_percentage: f64,
    pub average_score: f64,
    pub assessments: Vec<AssessmentSummary>,
    pub next_deadline: Option<NextDeadline>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NextDeadline {
    pub title: String,
    pub due_date: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Trend {
    Improving,
    Stable,
    Declining,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrendPoint {
    pub date: String,
    pub score: f64,
    pub assessment: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PerformanceTrend {
    pub course_id: String,
    pub course_name: String,
    pub data: Vec<TrendPoint>,
    pub trend: Trend,
    pub average_score: f64,
    pub projection: Option<f64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecommendationType {
    StudyFocus,
    ResourceUtilization,
    ExamPrep,
    ImprovementArea,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentRecommendation {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: RecommendationType,
    pub title: String,
    pub description: String,
    pub courses: Vec<String>,
    pub priority: super::notification::Priority,
    pub suggested_resources: Option<Vec<String>>,
    pub based_on: String,
    pub created_at: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DueItem {
    pub id: String,
    pub course_id: String,
    pub course_name: String,
    pub title: String,
    pub due_date: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub priority: String,
}

/// Read-only aggregate over the other entities. It has no identity beyond
/// `student_id` and is regenerated wholesale, never diffed.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentDashboard {
    pub student_id: String,
    pub last_updated: String,
    pub metrics: DashboardMetrics,
    pub course_overviews: Vec<CourseOverview>,
    pub performance_trends: Vec<PerformanceTrend>,
    pub recommendations: Vec<StudentRecommendation>,
    pub upcoming_deadlines: Vec<DueItem>,
    pub notification_count: i64,
    pub unread_notifications: i64,
}

impl StudentDashboard {
    /// The zeroed aggregate handed out before anything is known about a
    /// student.
    pub fn empty(student_id: &str, now: &str) -> Self {
        StudentDashboard {
            student_id: student_id.to_string(),
            last_updated: now.to_string(),
            metrics: DashboardMetrics::default(),
            course_overviews: Vec::new(),
            performance_trends: Vec::new(),
            recommendations: Vec::new(),
            upcoming_deadlines: Vec::new(),
            notification_count: 0,
            unread_notifications: 0,
        }
    }
}

/// Partial update for the dashboard store; absent fields are left alone.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardPatch {
    #[serde(default)]
    pub last_updated: Option<String>,
    #[serde(default)]
    pub metrics: Option<DashboardMetrics>,
    #[serde(default)]
    pub upcoming_deadlines: Option<Vec<DueItem>>,
    #[serde(default)]
    pub notification_count: Option<i64>,
    #[serde(default)]
    pub unread_notifications: Option<i64>,
}
