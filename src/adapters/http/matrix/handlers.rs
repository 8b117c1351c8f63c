//! HTTP handlers for decision matrix endpoints.
//!
//! These handlers connect Axum routes to application layer command/query handlers.

use std::sync::Arc;

use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{Json, Path, Query, State};
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use tracing::{error, warn};

use crate::application::handlers::matrix::{
    AnswerQuestionCommand, AnswerQuestionHandler, DiscardWizardCommand, DiscardWizardHandler,
    EvaluateAnswersCommand, EvaluateAnswersHandler, GetWizardHandler, GetWizardQuery,
    GoBackCommand, GoBackHandler, PrintReportHandler, PrintReportQuery, RestartWizardCommand,
    RestartWizardHandler, StartWizardHandler,
};
use crate::domain::foundation::{ErrorCode, ValidationError, WizardId};
use crate::domain::matrix::{faq, questions, AnswerSet, QuestionId, ReportFormat, WizardError};
use crate::ports::WizardRepository;

use super::dto::{
    AnswerRequest, ErrorResponse, EvaluateRequest, FaqResponse, HealthResponse, QuestionResponse,
    QuestionsResponse, RecommendationResponse, ReportParams, WizardResponse,
};

// ════════════════════════════════════════════════════════════════════════════════
// Application State
// ════════════════════════════════════════════════════════════════════════════════

/// Shared application state containing all dependencies.
#[derive(Clone)]
pub struct MatrixAppState {
    pub wizard_repository: Arc<dyn WizardRepository>,
}

impl MatrixAppState {
    pub fn new(wizard_repository: Arc<dyn WizardRepository>) -> Self {
        Self { wizard_repository }
    }

    pub fn start_wizard_handler(&self) -> StartWizardHandler {
        StartWizardHandler::new(self.wizard_repository.clone())
    }

    pub fn get_wizard_handler(&self) -> GetWizardHandler {
        GetWizardHandler::new(self.wizard_repository.clone())
    }

    pub fn answer_question_handler(&self) -> AnswerQuestionHandler {
        AnswerQuestionHandler::new(self.wizard_repository.clone())
    }

    pub fn go_back_handler(&self) -> GoBackHandler {
        GoBackHandler::new(self.wizard_repository.clone())
    }

    pub fn restart_wizard_handler(&self) -> RestartWizardHandler {
        RestartWizardHandler::new(self.wizard_repository.clone())
    }

    pub fn print_report_handler(&self) -> PrintReportHandler {
        PrintReportHandler::new(self.wizard_repository.clone())
    }

    pub fn discard_wizard_handler(&self) -> DiscardWizardHandler {
        DiscardWizardHandler::new(self.wizard_repository.clone())
    }
}

fn parse_wizard_id(raw: &str) -> Result<WizardId, MatrixApiError> {
    WizardId::parse(raw)
        .map_err(|_| MatrixApiError::BadRequest(format!("Invalid wizard ID format: {}", raw)))
}

// ════════════════════════════════════════════════════════════════════════════════
// Static content (GET endpoints)
// ════════════════════════════════════════════════════════════════════════════════

/// GET /health - Liveness probe
pub async fn health() -> impl IntoResponse {
    Json(HealthResponse::ok())
}

/// GET /api/fba-decision-matrix/questions - Ordered question catalog
pub async fn list_questions() -> impl IntoResponse {
    Json(QuestionsResponse {
        questions: questions().iter().map(QuestionResponse::from).collect(),
    })
}

/// GET /api/fba-decision-matrix/faq - FAQ entries
pub async fn list_faq() -> impl IntoResponse {
    Json(FaqResponse {
        entries: faq::entries().to_vec(),
    })
}

// ════════════════════════════════════════════════════════════════════════════════
// Stateless evaluation
// ════════════════════════════════════════════════════════════════════════════════

/// POST /api/fba-decision-matrix/evaluate - Evaluate an answer map
pub async fn evaluate(
    request: Result<Json<EvaluateRequest>, JsonRejection>,
) -> Result<impl IntoResponse, MatrixApiError> {
    let Json(request) = request?;
    let answers = AnswerSet::from_keyed(request.answers)?;
    let recommendation = EvaluateAnswersHandler::new().handle(EvaluateAnswersCommand { answers });
    Ok(Json(RecommendationResponse::from(&recommendation)))
}

// ════════════════════════════════════════════════════════════════════════════════
// Wizard sessions
// ════════════════════════════════════════════════════════════════════════════════

/// POST /api/fba-decision-matrix/wizards - Start a wizard
pub async fn start_wizard(
    State(state): State<MatrixAppState>,
) -> Result<impl IntoResponse, MatrixApiError> {
    let wizard = state.start_wizard_handler().handle().await?;
    Ok((StatusCode::CREATED, Json(WizardResponse::from(&wizard))))
}

/// GET /api/fba-decision-matrix/wizards/:id - Current wizard view
pub async fn get_wizard(
    State(state): State<MatrixAppState>,
    Path(wizard_id): Path<String>,
) -> Result<impl IntoResponse, MatrixApiError> {
    let wizard_id = parse_wizard_id(&wizard_id)?;
    let wizard = state
        .get_wizard_handler()
        .handle(GetWizardQuery { wizard_id })
        .await?;
    Ok(Json(WizardResponse::from(&wizard)))
}

/// POST /api/fba-decision-matrix/wizards/:id/answers - Answer current question
pub async fn answer_question(
    State(state): State<MatrixAppState>,
    Path(wizard_id): Path<String>,
    request: Result<Json<AnswerRequest>, JsonRejection>,
) -> Result<impl IntoResponse, MatrixApiError> {
    let wizard_id = parse_wizard_id(&wizard_id)?;
    let Json(request) = request?;
    let expected_question = request
        .question_id
        .as_deref()
        .map(str::parse::<QuestionId>)
        .transpose()?;

    let wizard = state
        .answer_question_handler()
        .handle(AnswerQuestionCommand {
            wizard_id,
            value: request.value,
            expected_question,
        })
        .await?;
    Ok(Json(WizardResponse::from(&wizard)))
}

/// POST /api/fba-decision-matrix/wizards/:id/back - Previous question
pub async fn go_back(
    State(state): State<MatrixAppState>,
    Path(wizard_id): Path<String>,
) -> Result<impl IntoResponse, MatrixApiError> {
    let wizard_id = parse_wizard_id(&wizard_id)?;
    let wizard = state
        .go_back_handler()
        .handle(GoBackCommand { wizard_id })
        .await?;
    Ok(Json(WizardResponse::from(&wizard)))
}

/// POST /api/fba-decision-matrix/wizards/:id/restart - Start over
pub async fn restart_wizard(
    State(state): State<MatrixAppState>,
    Path(wizard_id): Path<String>,
) -> Result<impl IntoResponse, MatrixApiError> {
    let wizard_id = parse_wizard_id(&wizard_id)?;
    let wizard = state
        .restart_wizard_handler()
        .handle(RestartWizardCommand { wizard_id })
        .await?;
    Ok(Json(WizardResponse::from(&wizard)))
}

/// GET /api/fba-decision-matrix/wizards/:id/report - Printable report
pub async fn print_report(
    State(state): State<MatrixAppState>,
    Path(wizard_id): Path<String>,
    params: Result<Query<ReportParams>, QueryRejection>,
) -> Result<impl IntoResponse, MatrixApiError> {
    let wizard_id = parse_wizard_id(&wizard_id)?;
    let Query(params) = params?;
    let format = match params.format.as_deref() {
        Some(raw) => raw.parse::<ReportFormat>()?,
        None => ReportFormat::default(),
    };

    let report = state
        .print_report_handler()
        .handle(PrintReportQuery {
            wizard_id,
            format,
            include_answers: params.include_answers,
        })
        .await?;

    Ok((
        StatusCode::OK,
        [(header::CONTENT_TYPE, report.format.content_type())],
        report.body,
    ))
}

/// DELETE /api/fba-decision-matrix/wizards/:id - Discard a wizard
pub async fn discard_wizard(
    State(state): State<MatrixAppState>,
    Path(wizard_id): Path<String>,
) -> Result<impl IntoResponse, MatrixApiError> {
    let wizard_id = parse_wizard_id(&wizard_id)?;
    state
        .discard_wizard_handler()
        .handle(DiscardWizardCommand { wizard_id })
        .await?;
    Ok(StatusCode::NO_CONTENT)
}

// ════════════════════════════════════════════════════════════════════════════════
// Error Handling
// ════════════════════════════════════════════════════════════════════════════════

/// API error type that converts domain errors to HTTP responses.
#[derive(Debug)]
pub enum MatrixApiError {
    BadRequest(String),
    /// Body or query string was well-formed but had the wrong shape.
    InvalidPayload(String),
    Validation(ValidationError),
    Wizard(WizardError),
}

impl From<JsonRejection> for MatrixApiError {
    fn from(rejection: JsonRejection) -> Self {
        match rejection {
            JsonRejection::JsonDataError(err) => MatrixApiError::InvalidPayload(err.body_text()),
            other => MatrixApiError::BadRequest(other.body_text()),
        }
    }
}

impl From<QueryRejection> for MatrixApiError {
    fn from(rejection: QueryRejection) -> Self {
        MatrixApiError::InvalidPayload(rejection.body_text())
    }
}

impl From<ValidationError> for MatrixApiError {
    fn from(err: ValidationError) -> Self {
        MatrixApiError::Validation(err)
    }
}

impl From<WizardError> for MatrixApiError {
    fn from(err: WizardError) -> Self {
        MatrixApiError::Wizard(err)
    }
}

fn wizard_status(err: &WizardError) -> StatusCode {
    match err {
        WizardError::NotFound(_) => StatusCode::NOT_FOUND,
        WizardError::InvalidTransition(_) | WizardError::NotComplete | WizardError::Conflict(_) => {
            StatusCode::CONFLICT
        }
        WizardError::UnknownQuestion(_) => StatusCode::BAD_REQUEST,
        WizardError::CapacityExceeded { .. } => StatusCode::SERVICE_UNAVAILABLE,
        WizardError::Infrastructure(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

impl IntoResponse for MatrixApiError {
    fn into_response(self) -> axum::response::Response {
        let (status, error) = match self {
            MatrixApiError::BadRequest(msg) => {
                (StatusCode::BAD_REQUEST, ErrorResponse::bad_request(msg))
            }
            MatrixApiError::InvalidPayload(msg) => (
                StatusCode::BAD_REQUEST,
                ErrorResponse::new(ErrorCode::ValidationFailed, msg),
            ),
            MatrixApiError::Validation(err) => {
                let code = match err.field() {
                    "question_id" => ErrorCode::UnknownQuestion,
                    _ => ErrorCode::ValidationFailed,
                };
                let field = err.field().to_string();
                (
                    StatusCode::BAD_REQUEST,
                    ErrorResponse::new(code, err.to_string())
                        .with_details(serde_json::json!({ "field": field })),
                )
            }
            MatrixApiError::Wizard(err) => {
                let status = wizard_status(&err);
                if status.is_server_error() {
                    if status == StatusCode::SERVICE_UNAVAILABLE {
                        warn!(error = %err, "wizard request rejected");
                    } else {
                        error!(error = %err, "wizard request failed");
                    }
                }
                let mut body = ErrorResponse::new(err.code(), err.message());
                if let WizardError::CapacityExceeded { limit } = err {
                    body = body.with_details(serde_json::json!({ "limit": limit }));
                }
                if status == StatusCode::INTERNAL_SERVER_ERROR {
                    body = ErrorResponse::internal("An internal error occurred");
                }
                (status, body)
            }
        };

        (status, Json(error)).into_response()
    }
}
