//! FBA Decision Matrix domain.
//!
//! Seven yes/no questions, a nine-row decision table, and the wizard that
//! walks a user through them.
//!
//! # Module Organization
//!
//! - `question` - The fixed question catalog
//! - `answers` - Collected answers with default-false lookup
//! - `recommendation` - Outcome categories and the next-step catalog
//! - `engine` - Ordered rule evaluation
//! - `wizard` - Linear question flow state machine
//! - `report` - Printable rendering
//! - `faq` - Static FAQ content

mod answers;
mod engine;
mod errors;
pub mod faq;
mod question;
mod recommendation;
mod report;
mod wizard;

pub use answers::{Answer, AnswerSet};
pub use engine::{DecisionEngine, Facts};
pub use errors::WizardError;
pub use faq::FaqEntry;
pub use question::{questions, Question, QuestionId, QUESTIONS, QUESTION_COUNT};
pub use recommendation::{Icon, Recommendation, RecommendationType, Rule, Tone};
pub use report::{PrintableReport, ReportFormat};
pub use wizard::{Wizard, WizardState};
