//! Command-line interface.
//!
//! `serve` runs the HTTP API. The other subcommands work offline against the
//! same domain types.

use std::io::{BufRead, Write};

use anyhow::Result;
use clap::{Args, Parser, Subcommand, ValueEnum};

use crate::adapters::http::matrix::dto::RecommendationResponse;
use crate::application::handlers::matrix::{EvaluateAnswersCommand, EvaluateAnswersHandler};
use crate::domain::foundation::WizardId;
use crate::domain::matrix::{
    questions, Answer, AnswerSet, PrintableReport, QuestionId, Recommendation, ReportFormat,
    Wizard,
};

#[derive(Debug, Parser)]
#[command(name = "fba-matrix")]
#[command(version, about = "FBA Decision Matrix screening tool", long_about = None)]
pub struct Cli {
    /// Log engine decisions to stderr
    #[arg(long, short, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Run the HTTP API
    Serve,
    /// Evaluate a set of answers given as flags (absent flags mean "no")
    Evaluate(EvaluateArgs),
    /// Answer the questions interactively
    Ask(AskArgs),
    /// List the screening questions
    Questions,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Markdown,
    Json,
}

#[derive(Debug, Default, Args)]
pub struct EvaluateArgs {
    /// Behavior has been documented for at least 2 weeks
    #[arg(long)]
    pub documented: bool,
    /// Tier 1 and Tier 2 interventions have been tried
    #[arg(long)]
    pub tier1_tier2: bool,
    /// Behavior significantly impedes learning
    #[arg(long)]
    pub impeding_learning: bool,
    /// The IEP team requested a behavior assessment
    #[arg(long)]
    pub iep_requested: bool,
    /// Behavior is a safety concern
    #[arg(long)]
    pub safety_concern: bool,
    /// Environmental modifications have been attempted
    #[arg(long)]
    pub environmental_mods: bool,
    /// Behavior occurs across multiple settings
    #[arg(long)]
    pub multiple_settings: bool,

    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

impl EvaluateArgs {
    pub fn answer_set(&self) -> AnswerSet {
        AnswerSet::new()
            .with(QuestionId::Documented, self.documented)
            .with(QuestionId::Tier1Tier2, self.tier1_tier2)
            .with(QuestionId::ImpedingLearning, self.impeding_learning)
            .with(QuestionId::IepRequested, self.iep_requested)
            .with(QuestionId::SafetyConcern, self.safety_concern)
            .with(QuestionId::EnvironmentalMods, self.environmental_mods)
            .with(QuestionId::MultipleSettings, self.multiple_settings)
    }
}

#[derive(Debug, Default, Args)]
pub struct AskArgs {
    /// Report format once all questions are answered
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

/// Renders a recommendation, optionally with the answers behind it.
pub fn render(
    recommendation: &Recommendation,
    answers: Option<&[Answer]>,
    format: OutputFormat,
) -> Result<String> {
    let report = PrintableReport::new(recommendation);
    let report = match answers {
        Some(answers) => report.with_answers(answers),
        None => report,
    };
    Ok(match format {
        OutputFormat::Text => report.render(ReportFormat::Text),
        OutputFormat::Markdown => report.render(ReportFormat::Markdown),
        OutputFormat::Json => {
            serde_json::to_string_pretty(&RecommendationResponse::from(recommendation))?
        }
    })
}

/// Runs the `evaluate` subcommand.
pub fn evaluate(args: &EvaluateArgs) -> Result<String> {
    let recommendation = EvaluateAnswersHandler::new().handle(EvaluateAnswersCommand {
        answers: args.answer_set(),
    });
    render(&recommendation, None, args.format)
}

/// Runs the `questions` subcommand.
pub fn render_questions() -> String {
    let mut out = String::new();
    for (i, question) in questions().iter().enumerate() {
        out.push_str(&format!("{}. [{}] {}\n", i + 1, question.id, question.text));
        if let Some(description) = question.description {
            out.push_str(&format!("   {}\n", description));
        }
    }
    out
}

enum Input {
    Yes,
    No,
    Back,
    Restart,
    Quit,
    Unknown,
}

fn parse_input(line: &str) -> Input {
    match line.trim().to_ascii_lowercase().as_str() {
        "y" | "yes" => Input::Yes,
        "n" | "no" => Input::No,
        "b" | "back" => Input::Back,
        "r" | "restart" => Input::Restart,
        "q" | "quit" | "exit" => Input::Quit,
        _ => Input::Unknown,
    }
}

/// Reads one line; `None` on end of input.
fn read_line<R: BufRead>(input: &mut R) -> Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line))
}

/// Runs the interactive wizard over `input`/`output`.
///
/// Returns the last recommendation shown, or `None` if the user quit (or
/// input ended) before finishing.
pub fn run_interactive<R: BufRead, W: Write>(
    mut input: R,
    mut output: W,
    format: OutputFormat,
) -> Result<Option<Recommendation>> {
    let mut wizard = Wizard::new(WizardId::new());
    let mut last = None;

    loop {
        if let Some(recommendation) = wizard.recommendation().copied() {
            writeln!(output)?;
            writeln!(
                output,
                "{}",
                render(&recommendation, Some(wizard.answers()), format)?
            )?;
            last = Some(recommendation);

            write!(output, "[r]estart or [q]uit > ")?;
            output.flush()?;
            match read_line(&mut input)?.as_deref().map(parse_input) {
                Some(Input::Restart) => {
                    wizard.restart();
                    continue;
                }
                _ => return Ok(last),
            }
        }

        let Some(question) = wizard.current_question() else {
            return Ok(last);
        };
        writeln!(output)?;
        writeln!(
            output,
            "Question {} of {} ({}% complete)",
            wizard.step_number(),
            wizard.total_questions(),
            wizard.progress().value()
        )?;
        writeln!(output, "{}", question.text)?;
        if let Some(description) = question.description {
            writeln!(output, "  {}", description)?;
        }
        write!(output, "[y]es / [n]o / [b]ack / [r]estart / [q]uit > ")?;
        output.flush()?;

        let Some(line) = read_line(&mut input)? else {
            return Ok(last);
        };
        match parse_input(&line) {
            Input::Yes => {
                wizard.answer(true)?;
            }
            Input::No => {
                wizard.answer(false)?;
            }
            Input::Back => {
                if !wizard.can_go_back() {
                    writeln!(output, "Already at the first question.")?;
                }
                wizard.back()?;
            }
            Input::Restart => {
                wizard.restart();
            }
            Input::Quit => return Ok(last),
            Input::Unknown => {
                writeln!(output, "Please answer y or n.")?;
            }
        }
    }
}
