//! Application layer - Commands, Queries, and Handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports.
//! Following CQRS, it separates command handlers (write) from query handlers (read).

pub mod handlers;

pub use handlers::matrix::{
    AnswerQuestionCommand, AnswerQuestionHandler, DiscardWizardCommand, DiscardWizardHandler,
    EvaluateAnswersCommand, EvaluateAnswersHandler, GetWizardHandler, GetWizardQuery,
    GoBackCommand, GoBackHandler, PrintReportHandler, PrintReportQuery, PrintedReport,
    PurgeIdleWizardsHandler, RestartWizardCommand, RestartWizardHandler, StartWizardHandler,
};
