//! Performance-analytics surface. These shapes are part of the wire contract,
//! but nothing in this daemon computes predictions or insights; both backends
//! return empty collections for the analytics operations.

use serde::{Deserialize, Serialize};

use super::dashboard::Trend;
use super::notification::Priority;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PerformanceMetric {
    pub id: String,
    pub student_id: String,
    pub course_id: String,
    pub course_name: String,
    #[serde(rename = "assessmentType")]
    pub assessment_kind: String,
    pub score: f64,
    pub max_score: f64,
    pub percentage: f64,
    pub date: String,
    pub weight: Option<f64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PerformancePrediction {
    pub predicted_final_score: f64,
    pub confidence: f64,
    pub risk_level: RiskLevel,
    pub recommendations: Vec<String>,
    pub areas_of_concern: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CoursePerformance {
    pub course_id: String,
    pub course_name: String,
    pub current_gpa: Option<f64>,
    pub average_score: f64,
    pub trend: Trend,
    pub last_updated: String,
    pub metrics: Vec<PerformanceMetric>,
    pub predictions: Option<PerformancePrediction>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InsightType {
    Strength,
    Weakness,
    Trend,
    Prediction,
    Recommendation,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PerformanceInsight {
    pub id: String,
    pub student_id: String,
    pub title: String,
    pub description: String,
    #[serde(rename = "type")]
    pub kind: InsightType,
    pub courses: Option<Vec<String>>,
    pub priority: Priority,
    pub generated_at: String,
    pub actionable: bool,
    pub suggested_actions: Option<Vec<String>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudySuggestion {
    pub id: String,
    pub student_id: String,
    pub course_id: String,
    pub course_name: String,
    pub title: String,
    pub description: String,
    pub rationale: String,
    pub resources: Option<Vec<String>>,
    pub time_estimate: Option<i64>,
    pub created_at: String,
    pub dismissed: bool,
}
