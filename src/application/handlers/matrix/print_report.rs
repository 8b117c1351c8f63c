//! PrintReportHandler - Renders a completed wizard's recommendation.

use std::sync::Arc;

use crate::domain::foundation::WizardId;
use crate::domain::matrix::{PrintableReport, ReportFormat, WizardError};
use crate::ports::WizardRepository;

use super::load_wizard;

/// Query for a printable report.
#[derive(Debug, Clone)]
pub struct PrintReportQuery {
    pub wizard_id: WizardId,
    pub format: ReportFormat,
    pub include_answers: bool,
}

/// Rendered report body with its format.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrintedReport {
    pub format: ReportFormat,
    pub body: String,
}

/// Handler for printing reports.
pub struct PrintReportHandler {
    repository: Arc<dyn WizardRepository>,
}

impl PrintReportHandler {
    pub fn new(repository: Arc<dyn WizardRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, query: PrintReportQuery) -> Result<PrintedReport, WizardError> {
        let wizard = load_wizard(self.repository.as_ref(), query.wizard_id).await?;
        let recommendation = wizard.recommendation().ok_or(WizardError::NotComplete)?;

        let mut report = PrintableReport::new(recommendation);
        if query.include_answers {
            report = report.with_answers(wizard.answers());
        }

        Ok(PrintedReport {
            format: query.format,
            body: report.render(query.format),
        })
    }
}
