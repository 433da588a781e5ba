use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResourceType {
    LectureMaterial,
    Notes,
    Summary,
    Pyq,
    StudyResource,
    Other,
}

impl ResourceType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ResourceType::LectureMaterial => "lecture_material",
            ResourceType::Notes => "notes",
            ResourceType::Summary => "summary",
            ResourceType::Pyq => "pyq",
            ResourceType::StudyResource => "study_resource",
            ResourceType::Other => "other",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "lecture_material" => Some(ResourceType::LectureMaterial),
            "notes" => Some(ResourceType::Notes),
            "summary" => Some(ResourceType::Summary),
            "pyq" => Some(ResourceType::Pyq),
            "study_resource" => Some(ResourceType::StudyResource),
            "other" => Some(ResourceType::Other),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Resource {
    pub id: String,
    pub title: String,
    pub description: String,
    pub course_id: String,
    pub course_name: String,
    #[serde(rename = "type")]
    pub kind: ResourceType,
    pub uploaded_by: String,
    pub uploaded_at: String,
    pub file_url: Option<String>,
    pub file_size: Option<i64>,
    #[serde(default)]
    pub tags: Vec<String>,
    pub downloads: i64,
    pub rating: Option<f64>,
    pub reviews: Option<Vec<ResourceReview>>,
    pub is_public: bool,
    pub credits: Option<i64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceReview {
    pub id: String,
    pub user_id: String,
    pub user_name: String,
    pub rating: f64,
    pub comment: String,
    pub created_at: String,
}

/// Upload payload: everything the caller supplies before an id exists.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewResource {
    pub title: String,
    pub description: String,
    pub course_id: String,
    pub course_name: String,
    #[serde(rename = "type")]
    pub kind: ResourceType,
    pub uploaded_by: String,
    #[serde(default)]
    pub uploaded_at: Option<String>,
    #[serde(default)]
    pub file_url: Option<String>,
    #[serde(default)]
    pub file_size: Option<i64>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default = "default_is_public")]
    pub is_public: bool,
    #[serde(default)]
    pub credits: Option<i64>,
}

fn default_is_public() -> bool {
    true
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceRating {
    pub rating: f64,
    #[serde(default)]
    pub comment: Option<String>,
    #[serde(default)]
    pub user_id: Option<String>,
    #[serde(default)]
    pub user_name: Option<String>,
}

/// Conjunction of optional predicates; an absent predicate passes everything.
/// The source also declared a `sortBy` field that nothing ever read; it is
/// dropped here rather than carried as dead surface.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceFilter {
    #[serde(default)]
    pub course_id: Option<String>,
    #[serde(default, rename = "type")]
    pub kind: Option<ResourceType>,
    #[serde(default)]
    pub search_query: Option<String>,
    #[serde(default)]
    pub tags: Option<Vec<String>>,
}
