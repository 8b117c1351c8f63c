//! The seven screening questions and their stable identifiers.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::foundation::ValidationError;

/// Total number of questions in the matrix.
pub const QUESTION_COUNT: usize = 7;

/// Stable key for each screening question.
///
/// Serialized as the kebab-case ids used on the wire (`tier1-tier2`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum QuestionId {
    Documented,
    #[serde(rename = "tier1-tier2")]
    Tier1Tier2,
    ImpedingLearning,
    IepRequested,
    SafetyConcern,
    EnvironmentalMods,
    MultipleSettings,
}

impl QuestionId {
    /// Returns all question ids in presentation order.
    pub fn all() -> &'static [QuestionId; QUESTION_COUNT] {
        &[
            QuestionId::Documented,
            QuestionId::Tier1Tier2,
            QuestionId::ImpedingLearning,
            QuestionId::IepRequested,
            QuestionId::SafetyConcern,
            QuestionId::EnvironmentalMods,
            QuestionId::MultipleSettings,
        ]
    }

    /// Returns the 0-based presentation index.
    pub fn index(&self) -> usize {
        match self {
            QuestionId::Documented => 0,
            QuestionId::Tier1Tier2 => 1,
            QuestionId::ImpedingLearning => 2,
            QuestionId::IepRequested => 3,
            QuestionId::SafetyConcern => 4,
            QuestionId::EnvironmentalMods => 5,
            QuestionId::MultipleSettings => 6,
        }
    }

    /// Returns the wire key.
    pub fn as_str(&self) -> &'static str {
        match self {
            QuestionId::Documented => "documented",
            QuestionId::Tier1Tier2 => "tier1-tier2",
            QuestionId::ImpedingLearning => "impeding-learning",
            QuestionId::IepRequested => "iep-requested",
            QuestionId::SafetyConcern => "safety-concern",
            QuestionId::EnvironmentalMods => "environmental-mods",
            QuestionId::MultipleSettings => "multiple-settings",
        }
    }

    /// Returns the full question for this id.
    pub fn question(&self) -> &'static Question {
        &QUESTIONS[self.index()]
    }
}

impl fmt::Display for QuestionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for QuestionId {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        QuestionId::all()
            .iter()
            .find(|id| id.as_str() == s)
            .copied()
            .ok_or_else(|| {
                ValidationError::invalid_format("question_id", format!("unknown question '{}'", s))
            })
    }
}

/// A yes/no screening prompt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Question {
    pub id: QuestionId,
    pub text: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<&'static str>,
}

/// The fixed question catalog, in presentation order.
pub static QUESTIONS: [Question; QUESTION_COUNT] = [
    Question {
        id: QuestionId::Documented,
        text: "Has the student's behavior been documented for at least 2 weeks?",
        description: Some("Systematic data collection with clear operational definitions"),
    },
    Question {
        id: QuestionId::Tier1Tier2,
        text: "Have Tier 1 and Tier 2 interventions been tried?",
        description: Some(
            "Universal supports and targeted interventions like check-in/check-out, social skills groups, or behavior contracts",
        ),
    },
    Question {
        id: QuestionId::ImpedingLearning,
        text: "Is the behavior significantly impeding the student's learning or others' learning?",
        description: Some(
            "The behavior substantially interferes with educational progress or the learning environment",
        ),
    },
    Question {
        id: QuestionId::IepRequested,
        text: "Has the IEP team requested a behavior assessment?",
        description: Some("Formal request from the IEP team for functional behavior assessment"),
    },
    Question {
        id: QuestionId::SafetyConcern,
        text: "Is the behavior a safety concern?",
        description: Some("Behavior poses risk of harm to self or others"),
    },
    Question {
        id: QuestionId::EnvironmentalMods,
        text: "Have environmental modifications been attempted?",
        description: Some("Changes to setting, schedule, task demands, or antecedent conditions"),
    },
    Question {
        id: QuestionId::MultipleSettings,
        text: "Is the behavior occurring across multiple settings?",
        description: Some("Behavior happens in classroom, hallway, cafeteria, playground, etc."),
    },
];

/// Returns the question catalog in presentation order.
pub fn questions() -> &'static [Question] {
    &QUESTIONS
}
