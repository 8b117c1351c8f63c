//! Recommendation types and the static next-step catalog.
//!
//! Every rule in the decision table owns exactly one catalog entry. The text
//! is fixed content; nothing here is computed from the answers.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The four recommendation categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RecommendationType {
    FbaRecommended,
    ConsultTeam,
    TryTier2,
    DocumentMore,
}

impl RecommendationType {
    /// Returns all types, most urgent first.
    pub fn all() -> &'static [RecommendationType] {
        &[
            RecommendationType::FbaRecommended,
            RecommendationType::ConsultTeam,
            RecommendationType::TryTier2,
            RecommendationType::DocumentMore,
        ]
    }

    /// Returns the wire key.
    pub fn as_str(&self) -> &'static str {
        match self {
            RecommendationType::FbaRecommended => "fba-recommended",
            RecommendationType::ConsultTeam => "consult-team",
            RecommendationType::TryTier2 => "try-tier2",
            RecommendationType::DocumentMore => "document-more",
        }
    }

    /// Returns the display tone for this category.
    pub fn tone(&self) -> Tone {
        match self {
            RecommendationType::FbaRecommended => Tone::Red,
            RecommendationType::ConsultTeam => Tone::Orange,
            RecommendationType::TryTier2 => Tone::Yellow,
            RecommendationType::DocumentMore => Tone::Green,
        }
    }
}

impl fmt::Display for RecommendationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Presentation colour family. Not part of the logical contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tone {
    Red,
    Orange,
    Yellow,
    Green,
}

impl Tone {
    /// CSS classes for the result panel.
    pub fn color_class(&self) -> &'static str {
        match self {
            Tone::Red => "bg-red-50 border-red-200",
            Tone::Orange => "bg-orange-50 border-orange-200",
            Tone::Yellow => "bg-yellow-50 border-yellow-200",
            Tone::Green => "bg-green-50 border-green-200",
        }
    }

    /// Icon shown next to the title.
    pub fn icon(&self) -> Icon {
        match self {
            Tone::Red => Icon::XCircle,
            Tone::Orange | Tone::Yellow => Icon::AlertCircle,
            Tone::Green => Icon::CheckCircle,
        }
    }
}

/// Icon selector for the result panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Icon {
    XCircle,
    AlertCircle,
    CheckCircle,
}

/// The nine rules of the decision table, in evaluation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Rule {
    SafetyWithHistory,
    IepRequestWithImpact,
    InterventionsExhausted,
    InterventionsNotTried,
    ConcernsWithoutData,
    TargetedSupportsFirst,
    EnvironmentalChangesFirst,
    InsufficientData,
    TeamConsultationFallback,
}

impl Rule {
    /// Returns all rules in evaluation order.
    pub fn all() -> &'static [Rule; 9] {
        &[
            Rule::SafetyWithHistory,
            Rule::IepRequestWithImpact,
            Rule::InterventionsExhausted,
            Rule::InterventionsNotTried,
            Rule::ConcernsWithoutData,
            Rule::TargetedSupportsFirst,
            Rule::EnvironmentalChangesFirst,
            Rule::InsufficientData,
            Rule::TeamConsultationFallback,
        ]
    }

    /// Returns the 1-based position in the evaluation order.
    pub fn number(&self) -> u8 {
        match self {
            Rule::SafetyWithHistory => 1,
            Rule::IepRequestWithImpact => 2,
            Rule::InterventionsExhausted => 3,
            Rule::InterventionsNotTried => 4,
            Rule::ConcernsWithoutData => 5,
            Rule::TargetedSupportsFirst => 6,
            Rule::EnvironmentalChangesFirst => 7,
            Rule::InsufficientData => 8,
            Rule::TeamConsultationFallback => 9,
        }
    }

    /// Returns the catalog entry this rule produces.
    pub fn recommendation(&self) -> Recommendation {
        Recommendation::for_rule(*self)
    }
}

/// The outcome of one evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Recommendation {
    #[serde(rename = "type")]
    pub kind: RecommendationType,
    pub rule: Rule,
    pub title: &'static str,
    pub description: &'static str,
    pub next_steps: &'static [&'static str],
}

const FBA_RECOMMENDED: &str = "FBA Recommended";
const CONSULT_WITH_TEAM: &str = "Consult with Team";

const SAFETY_WITH_HISTORY_STEPS: &[&str] = &[
    "Obtain parental consent for FBA",
    "Assemble your FBA team (BCBA, teacher, parent, student if appropriate)",
    "Review existing behavior data and identify patterns",
    "Conduct indirect assessments (interviews with key stakeholders)",
    "Plan and conduct direct observations across settings",
    "Use our AI-powered FBA Generator at /pro to streamline the process",
];

const IEP_REQUEST_WITH_IMPACT_STEPS: &[&str] = &[
    "Obtain parental consent for FBA",
    "Schedule FBA team meeting to plan assessment",
    "Review previous interventions and their outcomes",
    "Identify assessment tools (ABC data, scatterplots, functional analysis if needed)",
    "Conduct systematic observations and data collection",
    "Use our AI-powered FBA Generator at /pro to write professional reports faster",
];

const INTERVENTIONS_EXHAUSTED_STEPS: &[&str] = &[
    "Present data to IEP team showing lack of response to interventions",
    "Obtain parental consent for FBA",
    "Plan comprehensive assessment across all relevant settings",
    "Include ecological assessment (curriculum, instruction, environment)",
    "Develop hypothesis statements based on assessment data",
    "Use our FBA Generator to create compliant, professional FBA reports",
];

const INTERVENTIONS_NOT_TRIED_STEPS: &[&str] = &[
    "Schedule meeting with IEP team or behavior support team",
    "Present current behavior data and concerns",
    "Develop intervention plan with Tier 2 supports",
    "Establish timeline for intervention implementation (4-6 weeks)",
    "Create data collection system to monitor progress",
    "Schedule follow-up meeting to review outcomes and determine next steps",
];

const CONCERNS_WITHOUT_DATA_STEPS: &[&str] = &[
    "Convene team meeting to discuss concerns",
    "Develop clear operational definition of target behavior",
    "Create data collection plan across all relevant settings",
    "Assign data collectors and establish consistency (IOA checks)",
    "Set 2-4 week timeline for baseline data collection",
    "Schedule follow-up meeting to review data and determine if FBA is needed",
];

const TARGETED_SUPPORTS_FIRST_STEPS: &[&str] = &[
    "Review behavior data to identify patterns (times, settings, triggers)",
    "Select evidence-based Tier 2 intervention matched to behavior pattern",
    "Options: Check-In/Check-Out (CICO), social skills group, behavior contract, self-monitoring",
    "Implement intervention with fidelity for 4-6 weeks",
    "Continue data collection to monitor response to intervention",
    "If behavior doesn't improve after 6 weeks, reconvene team to discuss FBA",
];

const ENVIRONMENTAL_CHANGES_FIRST_STEPS: &[&str] = &[
    "Review ABC data to identify common antecedents",
    "Modify environmental triggers: seating, schedule, task difficulty, choice opportunities",
    "Implement antecedent modifications for 2-4 weeks",
    "Continue data collection to assess impact",
    "If modifications don't reduce behavior, consider Tier 2 interventions",
    "Document all modifications and outcomes for future reference",
];

const INSUFFICIENT_DATA_STEPS: &[&str] = &[
    "Create clear operational definition of the target behavior (observable, measurable)",
    "Select appropriate measurement method: frequency, duration, latency, or intensity",
    "Set up data collection system across all relevant settings and times",
    "Train staff on consistent data collection procedures",
    "Collect baseline data for minimum 2 weeks (preferably 3-4 weeks)",
    "Review data weekly to identify patterns and determine if intervention or FBA is needed",
];

const TEAM_CONSULTATION_FALLBACK_STEPS: &[&str] = &[
    "Schedule meeting with IEP team or behavior support team",
    "Present all available behavior data and documentation",
    "Discuss interventions already attempted and their outcomes",
    "Collaboratively determine whether to: collect more data, implement interventions, or proceed with FBA",
    "Create action plan with clear timeline and responsible parties",
    "Schedule follow-up meeting to review progress",
];

impl Recommendation {
    /// Looks up the catalog entry for `rule`.
    pub fn for_rule(rule: Rule) -> Self {
        let (kind, title, description, next_steps) = match rule {
            Rule::SafetyWithHistory => (
                RecommendationType::FbaRecommended,
                FBA_RECOMMENDED,
                "Safety concerns with documented behavior history warrant a comprehensive functional behavior assessment.",
                SAFETY_WITH_HISTORY_STEPS,
            ),
            Rule::IepRequestWithImpact => (
                RecommendationType::FbaRecommended,
                FBA_RECOMMENDED,
                "IEP team has requested assessment, behavior is documented and impeding learning. An FBA is appropriate.",
                IEP_REQUEST_WITH_IMPACT_STEPS,
            ),
            Rule::InterventionsExhausted => (
                RecommendationType::FbaRecommended,
                FBA_RECOMMENDED,
                "Previous interventions have been tried, behavior is well-documented, and occurs across settings. Time for a comprehensive FBA.",
                INTERVENTIONS_EXHAUSTED_STEPS,
            ),
            Rule::InterventionsNotTried => (
                RecommendationType::ConsultTeam,
                CONSULT_WITH_TEAM,
                "Behavior is impeding learning but interventions haven't been systematically tried. Convene your team before proceeding.",
                INTERVENTIONS_NOT_TRIED_STEPS,
            ),
            Rule::ConcernsWithoutData => (
                RecommendationType::ConsultTeam,
                CONSULT_WITH_TEAM,
                "Team has concerns but data is insufficient. Meet with team to establish data collection plan.",
                CONCERNS_WITHOUT_DATA_STEPS,
            ),
            Rule::TargetedSupportsFirst => (
                RecommendationType::TryTier2,
                "Try Tier 2 Interventions First",
                "You have good baseline data. Try targeted interventions before conducting a full FBA.",
                TARGETED_SUPPORTS_FIRST_STEPS,
            ),
            Rule::EnvironmentalChangesFirst => (
                RecommendationType::TryTier2,
                "Try Environmental Modifications First",
                "Environmental changes haven't been systematically tried. These simple modifications may reduce the behavior.",
                ENVIRONMENTAL_CHANGES_FIRST_STEPS,
            ),
            Rule::InsufficientData => (
                RecommendationType::DocumentMore,
                "Document More Data First",
                "You need more systematic data collection before determining next steps.",
                INSUFFICIENT_DATA_STEPS,
            ),
            Rule::TeamConsultationFallback => (
                RecommendationType::ConsultTeam,
                CONSULT_WITH_TEAM,
                "Based on your responses, team consultation is recommended to determine the best next steps.",
                TEAM_CONSULTATION_FALLBACK_STEPS,
            ),
        };

        Self {
            kind,
            rule,
            title,
            description,
            next_steps,
        }
    }

    pub fn tone(&self) -> Tone {
        self.kind.tone()
    }

    pub fn color_class(&self) -> &'static str {
        self.tone().color_class()
    }

    pub fn icon(&self) -> Icon {
        self.tone().icon()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_rule_has_five_or_six_steps() {
        for rule in Rule::all() {
            let rec = rule.recommendation();
            assert!(
                (5..=6).contains(&rec.next_steps.len()),
                "{:?} has {} steps",
                rule,
                rec.next_steps.len()
            );
            assert!(rec.next_steps.iter().all(|s| !s.is_empty()));
        }
    }

    #[test]
    fn rule_numbers_follow_evaluation_order() {
        let numbers: Vec<u8> = Rule::all().iter().map(Rule::number).collect();
        assert_eq!(numbers, (1..=9).collect::<Vec<u8>>());
    }

    #[test]
    fn rule_categories_match_table() {
        use RecommendationType::*;
        let kinds: Vec<RecommendationType> =
            Rule::all().iter().map(|r| r.recommendation().kind).collect();
        assert_eq!(
            kinds,
            vec![
                FbaRecommended,
                FbaRecommended,
                FbaRecommended,
                ConsultTeam,
                ConsultTeam,
                TryTier2,
                TryTier2,
                DocumentMore,
                ConsultTeam
            ]
        );
    }

    #[test]
    fn fallback_has_generic_description() {
        let rec = Rule::TeamConsultationFallback.recommendation();
        assert!(rec
            .description
            .starts_with("Based on your responses, team consultation is recommended"));
    }

    #[test]
    fn presentation_metadata_follows_category() {
        let fba = Rule::SafetyWithHistory.recommendation();
        assert_eq!(fba.color_class(), "bg-red-50 border-red-200");
        assert_eq!(fba.icon(), Icon::XCircle);

        let more = Rule::InsufficientData.recommendation();
        assert_eq!(more.tone(), Tone::Green);
        assert_eq!(more.icon(), Icon::CheckCircle);
    }

    #[test]
    fn serializes_with_wire_names() {
        let json = serde_json::to_value(Rule::TargetedSupportsFirst.recommendation()).unwrap();
        assert_eq!(json["type"], "try-tier2");
        assert_eq!(json["title"], "Try Tier 2 Interventions First");
        assert_eq!(json["rule"], "targeted_supports_first");
        assert_eq!(json["nextSteps"].as_array().unwrap().len(), 6);
    }
}
