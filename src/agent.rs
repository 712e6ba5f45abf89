//! Simulated agent system: canned responses selected by keyword rules.
//!
//! The rule table is an ordered list of (substring, builder) pairs matched
//! against the lowercased query; the first hit wins and unmatched queries
//! fall back to a generic acknowledgement. Plans and task statuses are fixed
//! literals. Swapping this module for a real agent backend leaves callers
//! untouched.

use crate::types::{
    AgentPlan, AgentResponse, AgentTask, PlanStep, PlanStepStatus, ScalarMap, ScalarValue, Source,
};

/// One synthesis rule: queries containing `keyword` get `build`'s response.
struct ResponseRule {
    keyword: &'static str,
    build: fn(&str) -> AgentResponse,
}

/// Ordered rule table; first match wins.
const RULES: &[ResponseRule] = &[
    ResponseRule {
        keyword: "study guide",
        build: study_guide_response,
    },
    ResponseRule {
        keyword: "assignment",
        build: assignment_response,
    },
];

/// Synthesize a canned response for a free-text query.
///
/// Deterministic and case-insensitive; the incoming context is accepted but
/// not consulted, matching the stand-in nature of the agent system.
pub fn synthesize(query: &str, _context: Option<&ScalarMap>) -> AgentResponse {
    let lowered = query.to_lowercase();
    for rule in RULES {
        if lowered.contains(rule.keyword) {
            return (rule.build)(query);
        }
    }
    generic_response(query)
}

fn context_of(pairs: &[(&str, &str)]) -> ScalarMap {
    pairs
        .iter()
        .map(|(key, value)| ((*key).to_string(), ScalarValue::from(*value)))
        .collect()
}

fn source(title: &str, url: &str) -> Source {
    Source {
        title: title.into(),
        url: url.into(),
    }
}

fn study_guide_response(_query: &str) -> AgentResponse {
    AgentResponse {
        response: "I've created a study guide for your topic. Here are the key points to focus on..."
            .into(),
        sources: vec![
            source("Textbook Chapter 5", "https://example.com/textbook/chapter5"),
            source("Lecture Notes Week 3", "https://example.com/lectures/week3"),
        ],
        context: context_of(&[
            ("topic", "Machine Learning Fundamentals"),
            ("created_at", "2023-06-15T10:30:00Z"),
        ]),
    }
}

fn assignment_response(_query: &str) -> AgentResponse {
    AgentResponse {
        response: "I'll help you with this assignment. Let's break it down step by step...".into(),
        sources: vec![
            source(
                "Assignment Guidelines",
                "https://example.com/assignments/guidelines",
            ),
            source("Related Examples", "https://example.com/examples"),
        ],
        context: context_of(&[
            ("assignment_type", "Problem Set"),
            ("due_date", "2023-06-20T23:59:00Z"),
        ]),
    }
}

fn generic_response(query: &str) -> AgentResponse {
    AgentResponse {
        response: format!(
            "I understand you're asking about: {query}. How can I help you with this topic?"
        ),
        sources: vec![],
        context: context_of(&[
            ("query_type", "general"),
            ("timestamp", "2023-06-15T10:30:00Z"),
        ]),
    }
}

/// Build the fixed execution plan for a query.
///
/// Always the same 4 steps and ids; no task ever actually runs.
pub fn create_plan(query: &str) -> AgentPlan {
    let step = |step_id: &str, description: &str, status: PlanStepStatus| PlanStep {
        step_id: step_id.into(),
        description: description.into(),
        status,
    };

    AgentPlan {
        steps: vec![
            step(
                "1",
                "Analyze the query and identify key topics",
                PlanStepStatus::Completed,
            ),
            step(
                "2",
                "Retrieve relevant information from knowledge base",
                PlanStepStatus::InProgress,
            ),
            step(
                "3",
                "Generate comprehensive response",
                PlanStepStatus::Pending,
            ),
            step(
                "4",
                "Review and refine response for accuracy",
                PlanStepStatus::Pending,
            ),
        ],
        context: ScalarMap::from([
            ("query".to_string(), ScalarValue::from(query)),
            ("plan_id".to_string(), ScalarValue::from("plan-123456")),
            (
                "created_at".to_string(),
                ScalarValue::from("2023-06-15T10:30:00Z"),
            ),
        ]),
    }
}

/// Report the fixed status for any task id.
pub fn task_status(task_id: &str) -> AgentTask {
    AgentTask {
        task_id: task_id.into(),
        status: "in_progress".into(),
        progress: 0.65,
        result: None,
    }
}
