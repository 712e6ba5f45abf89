use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A resolved, authenticated caller.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Identity {
    pub username: String,
    pub email: Option<String>,
    pub full_name: Option<String>,
    #[serde(default)]
    pub disabled: bool,
}

/// A single JSON scalar: the closed value domain for preference and context
/// maps. Nested objects and arrays are deliberately not representable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ScalarValue {
    Null,
    Bool(bool),
    Number(serde_json::Number),
    String(String),
}

impl From<&str> for ScalarValue {
    fn from(value: &str) -> Self {
        ScalarValue::String(value.to_string())
    }
}

impl From<String> for ScalarValue {
    fn from(value: String) -> Self {
        ScalarValue::String(value)
    }
}

impl From<bool> for ScalarValue {
    fn from(value: bool) -> Self {
        ScalarValue::Bool(value)
    }
}

/// String-keyed scalar mapping used for user preferences and agent context.
pub type ScalarMap = BTreeMap<String, ScalarValue>;

/// Per-user stored settings and metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Profile {
    pub username: String,
    pub email: Option<String>,
    pub full_name: Option<String>,
    pub bio: Option<String>,
    pub avatar_url: Option<String>,
    pub preferences: ScalarMap,
}

/// Partial profile update. Provided fields overwrite; `preferences` merges
/// key-by-key into the stored mapping instead of replacing it.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProfileUpdate {
    pub email: Option<String>,
    pub full_name: Option<String>,
    pub bio: Option<String>,
    pub avatar_url: Option<String>,
    pub preferences: Option<ScalarMap>,
}

/// A documentation category.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocCategory {
    pub id: String,
    pub name: String,
    pub description: String,
    pub icon: String,
}

/// A documentation item belonging to a category.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocItem {
    pub id: String,
    pub category_id: String,
    pub title: String,
    pub path: String,
    pub summary: Option<String>,
}

/// Full content of a documentation item.
///
/// The content table covers only a subset of the item table; items without a
/// content entry resolve to NotFound.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocContent {
    pub id: String,
    pub title: String,
    pub content: String,
    pub toc: Vec<TocEntry>,
    pub last_updated: NaiveDate,
}

/// One table-of-contents entry within a document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TocEntry {
    pub level: u8,
    pub title: String,
    pub id: String,
}

/// A free-text query for the agent system.
#[derive(Debug, Clone, Deserialize)]
pub struct AgentQuery {
    pub query: String,
    #[serde(default)]
    pub context: Option<ScalarMap>,
}

/// A synthesized agent response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AgentResponse {
    pub response: String,
    pub sources: Vec<Source>,
    pub context: ScalarMap,
}

/// A source reference attached to an agent response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Source {
    pub title: String,
    pub url: String,
}

/// An execution plan for a complex task.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AgentPlan {
    pub steps: Vec<PlanStep>,
    pub context: ScalarMap,
}

/// One step of an agent plan.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlanStep {
    pub step_id: String,
    pub description: String,
    pub status: PlanStepStatus,
}

/// Lifecycle state of a plan step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlanStepStatus {
    Pending,
    InProgress,
    Completed,
}

/// Status of a long-running agent task.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AgentTask {
    pub task_id: String,
    pub status: String,
    pub progress: f64,
    pub result: Option<ScalarMap>,
}
