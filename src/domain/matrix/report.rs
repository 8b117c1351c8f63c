//! Printable rendering of a recommendation.
//!
//! Output carries only the recommendation content and, optionally, the
//! answers that produced it. No interactive or decorative elements.

use serde::{Deserialize, Serialize};
use std::fmt::{self, Write};
use std::str::FromStr;

use super::answers::Answer;
use super::recommendation::Recommendation;
use crate::domain::foundation::ValidationError;

/// Output format for a printable report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    #[default]
    Text,
    Markdown,
}

impl ReportFormat {
    /// MIME type for HTTP responses.
    pub fn content_type(&self) -> &'static str {
        match self {
            ReportFormat::Text => "text/plain; charset=utf-8",
            ReportFormat::Markdown => "text/markdown; charset=utf-8",
        }
    }
}

impl FromStr for ReportFormat {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "text" | "txt" | "plain" => Ok(ReportFormat::Text),
            "markdown" | "md" => Ok(ReportFormat::Markdown),
            other => Err(ValidationError::invalid_format(
                "format",
                format!("expected 'text' or 'markdown', got '{}'", other),
            )),
        }
    }
}

impl fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReportFormat::Text => f.write_str("text"),
            ReportFormat::Markdown => f.write_str("markdown"),
        }
    }
}

/// A recommendation ready to print.
#[derive(Debug, Clone)]
pub struct PrintableReport<'a> {
    recommendation: &'a Recommendation,
    answers: Option<&'a [Answer]>,
}

impl<'a> PrintableReport<'a> {
    pub fn new(recommendation: &'a Recommendation) -> Self {
        Self {
            recommendation,
            answers: None,
        }
    }

    /// Appends the answered questions to the report.
    pub fn with_answers(mut self, answers: &'a [Answer]) -> Self {
        self.answers = Some(answers).filter(|a| !a.is_empty());
        self
    }

    pub fn render(&self, format: ReportFormat) -> String {
        let mut out = String::new();
        // Writing into a String cannot fail.
        let _ = match format {
            ReportFormat::Text => self.write_text(&mut out),
            ReportFormat::Markdown => self.write_markdown(&mut out),
        };
        out
    }

    fn write_text(&self, out: &mut String) -> fmt::Result {
        let rec = self.recommendation;
        writeln!(out, "{}", rec.title)?;
        writeln!(out, "{}", "=".repeat(rec.title.chars().count()))?;
        writeln!(out)?;
        writeln!(out, "{}", rec.description)?;
        writeln!(out)?;
        writeln!(out, "Next Steps:")?;
        for (i, step) in rec.next_steps.iter().enumerate() {
            writeln!(out, "{}. {}", i + 1, step)?;
        }
        if let Some(answers) = self.answers {
            writeln!(out)?;
            writeln!(out, "Your answers:")?;
            for answer in answers {
                writeln!(
                    out,
                    "- {} {}",
                    answer.question_id.question().text,
                    yes_no(answer.value)
                )?;
            }
        }
        Ok(())
    }

    fn write_markdown(&self, out: &mut String) -> fmt::Result {
        let rec = self.recommendation;
        writeln!(out, "# {}", rec.title)?;
        writeln!(out)?;
        writeln!(out, "{}", rec.description)?;
        writeln!(out)?;
        writeln!(out, "## Next Steps")?;
        writeln!(out)?;
        for (i, step) in rec.next_steps.iter().enumerate() {
            writeln!(out, "{}. {}", i + 1, step)?;
        }
        if let Some(answers) = self.answers {
            writeln!(out)?;
            writeln!(out, "## Your Answers")?;
            writeln!(out)?;
            writeln!(out, "| Question | Answer |")?;
            writeln!(out, "|---|---|")?;
            for answer in answers {
                writeln!(
                    out,
                    "| {} | {} |",
                    answer.question_id.question().text,
                    yes_no(answer.value)
                )?;
            }
        }
        Ok(())
    }
}

fn yes_no(value: bool) -> &'static str {
    if value {
        "Yes"
    } else {
        "No"
    }
}
