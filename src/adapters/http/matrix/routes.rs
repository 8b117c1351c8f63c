//! Route configuration for decision matrix endpoints.

use axum::routing::{get, post};
use axum::Router;

use super::handlers::{
    answer_question, discard_wizard, evaluate, get_wizard, go_back, health, list_faq,
    list_questions, print_report, restart_wizard, start_wizard, MatrixAppState,
};

/// Path prefix for every matrix endpoint.
pub const API_BASE: &str = "/api/fba-decision-matrix";

/// Creates the matrix router with all endpoints.
///
/// Routes:
/// - `GET /health` - Liveness probe
/// - `GET /api/fba-decision-matrix/questions` - Question catalog
/// - `GET /api/fba-decision-matrix/faq` - FAQ entries
/// - `POST /api/fba-decision-matrix/evaluate` - One-shot evaluation
/// - `POST /api/fba-decision-matrix/wizards` - Start a wizard
/// - `GET /api/fba-decision-matrix/wizards/:id` - Wizard view
/// - `DELETE /api/fba-decision-matrix/wizards/:id` - Discard a wizard
/// - `POST /api/fba-decision-matrix/wizards/:id/answers` - Answer current question
/// - `POST /api/fba-decision-matrix/wizards/:id/back` - Previous question
/// - `POST /api/fba-decision-matrix/wizards/:id/restart` - Start over
/// - `GET /api/fba-decision-matrix/wizards/:id/report` - Printable report
pub fn matrix_router() -> Router<MatrixAppState> {
    let api = Router::new()
        .route("/questions", get(list_questions))
        .route("/faq", get(list_faq))
        .route("/evaluate", post(evaluate))
        .route("/wizards", post(start_wizard))
        .route("/wizards/:id", get(get_wizard).delete(discard_wizard))
        .route("/wizards/:id/answers", post(answer_question))
        .route("/wizards/:id/back", post(go_back))
        .route("/wizards/:id/restart", post(restart_wizard))
        .route("/wizards/:id/report", get(print_report));

    Router::new()
        .route("/health", get(health))
        .nest(API_BASE, api)
}
