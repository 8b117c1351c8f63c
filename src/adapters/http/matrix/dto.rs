//! HTTP DTOs (Data Transfer Objects) for decision matrix endpoints.
//!
//! These types define the JSON request/response structure for the matrix API.
//! Field names are camelCase to match the answer keys clients already send.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::domain::foundation::ErrorCode;
use crate::domain::matrix::{
    Answer, FaqEntry, Icon, Question, QuestionId, Recommendation, RecommendationType, Rule, Tone,
    Wizard, WizardState,
};

// ════════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════════

/// Request to evaluate a full answer map in one call.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EvaluateRequest {
    /// Question id to answer. Missing ids count as "no".
    #[serde(default)]
    pub answers: BTreeMap<String, bool>,
}

/// Request to answer the wizard's current question.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnswerRequest {
    pub value: bool,
    /// Optional guard: reject the answer unless this is the current question.
    #[serde(default)]
    pub question_id: Option<String>,
}

/// Query parameters for the printable report.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportParams {
    pub format: Option<String>,
    /// Append the answers behind the recommendation. Defaults to true.
    #[serde(default = "default_include_answers")]
    pub include_answers: bool,
}

fn default_include_answers() -> bool {
    true
}

// ════════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════════

/// Liveness probe body.
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

impl HealthResponse {
    pub fn ok() -> Self {
        Self { status: "ok" }
    }
}

/// A catalog question with its 1-based position.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionResponse {
    pub id: QuestionId,
    pub position: usize,
    pub text: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<&'static str>,
}

impl From<&Question> for QuestionResponse {
    fn from(question: &Question) -> Self {
        Self {
            id: question.id,
            position: question.id.index() + 1,
            text: question.text,
            description: question.description,
        }
    }
}

/// Ordered question catalog.
#[derive(Debug, Clone, Serialize)]
pub struct QuestionsResponse {
    pub questions: Vec<QuestionResponse>,
}

/// FAQ entries.
#[derive(Debug, Clone, Serialize)]
pub struct FaqResponse {
    pub entries: Vec<FaqEntry>,
}

/// A recommendation with its display hints.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendationResponse {
    #[serde(rename = "type")]
    pub kind: RecommendationType,
    /// 1-based position of the rule that fired.
    pub rule: u8,
    pub rule_name: Rule,
    pub title: &'static str,
    pub description: &'static str,
    pub next_steps: Vec<&'static str>,
    pub tone: Tone,
    pub color_class: &'static str,
    pub icon: Icon,
}

impl From<&Recommendation> for RecommendationResponse {
    fn from(rec: &Recommendation) -> Self {
        Self {
            kind: rec.kind,
            rule: rec.rule.number(),
            rule_name: rec.rule,
            title: rec.title,
            description: rec.description,
            next_steps: rec.next_steps.to_vec(),
            tone: rec.tone(),
            color_class: rec.color_class(),
            icon: rec.icon(),
        }
    }
}

/// One recorded answer.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnswerResponse {
    pub question_id: QuestionId,
    pub text: &'static str,
    pub value: bool,
}

impl From<&Answer> for AnswerResponse {
    fn from(answer: &Answer) -> Self {
        Self {
            question_id: answer.question_id,
            text: answer.question_id.question().text,
            value: answer.value,
        }
    }
}

/// Full view of a wizard.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WizardResponse {
    pub id: String,
    /// `"question"` or `"results"`.
    pub state: &'static str,
    pub step_number: usize,
    pub total_questions: usize,
    pub progress_percent: u8,
    pub can_go_back: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_question: Option<QuestionResponse>,
    pub answers: Vec<AnswerResponse>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recommendation: Option<RecommendationResponse>,
    pub created_at: String,
    pub updated_at: String,
}

impl From<&Wizard> for WizardResponse {
    fn from(wizard: &Wizard) -> Self {
        Self {
            id: wizard.id().to_string(),
            state: match wizard.state() {
                WizardState::Question(_) => "question",
                WizardState::Results => "results",
            },
            step_number: wizard.step_number(),
            total_questions: wizard.total_questions(),
            progress_percent: wizard.progress().value(),
            can_go_back: wizard.can_go_back(),
            current_question: wizard.current_question().map(QuestionResponse::from),
            answers: wizard.answers().iter().map(AnswerResponse::from).collect(),
            recommendation: wizard.recommendation().map(RecommendationResponse::from),
            created_at: wizard.created_at().to_rfc3339(),
            updated_at: wizard.updated_at().to_rfc3339(),
        }
    }
}

/// Standard error response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Error code.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Additional error details.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl ErrorResponse {
    pub fn new(code: impl ToString, message: impl Into<String>) -> Self {
        Self {
            code: code.to_string(),
            message: message.into(),
            details: None,
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new("BAD_REQUEST", message)
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InternalError, message)
    }

    pub fn with_details(mut self, details: serde_json::Value) -> Self {
        self.details = Some(details);
        self
    }
}
