//! DecisionEngine - maps the seven answers to exactly one recommendation.
//!
//! Rules are an ordered predicate table evaluated top to bottom; the first
//! predicate that holds selects the catalog entry. The last row always
//! matches, so evaluation is total.

use tracing::debug;

use super::answers::AnswerSet;
use super::question::QuestionId;
use super::recommendation::{Recommendation, Rule};

/// The seven answers as named flags. Missing answers are `false`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Facts {
    pub documented: bool,
    pub tier1_tier2: bool,
    pub impeding_learning: bool,
    pub iep_requested: bool,
    pub safety_concern: bool,
    pub environmental_mods: bool,
    pub multiple_settings: bool,
}

impl From<&AnswerSet> for Facts {
    fn from(answers: &AnswerSet) -> Self {
        Self {
            documented: answers.get(QuestionId::Documented),
            tier1_tier2: answers.get(QuestionId::Tier1Tier2),
            impeding_learning: answers.get(QuestionId::ImpedingLearning),
            iep_requested: answers.get(QuestionId::IepRequested),
            safety_concern: answers.get(QuestionId::SafetyConcern),
            environmental_mods: answers.get(QuestionId::EnvironmentalMods),
            multiple_settings: answers.get(QuestionId::MultipleSettings),
        }
    }
}

/// One row of the decision table.
struct RuleRow {
    rule: Rule,
    applies: fn(&Facts) -> bool,
}

/// The decision table, in priority order.
///
/// Row 3 is unreachable whenever `safety_concern` is set because row 1 fires
/// first; that shadowing is intended.
const RULES: [RuleRow; 9] = [
    RuleRow {
        rule: Rule::SafetyWithHistory,
        applies: |f| f.safety_concern && f.documented,
    },
    RuleRow {
        rule: Rule::IepRequestWithImpact,
        applies: |f| f.iep_requested && f.documented && f.impeding_learning,
    },
    RuleRow {
        rule: Rule::InterventionsExhausted,
        applies: |f| f.documented && f.tier1_tier2 && f.impeding_learning && f.multiple_settings,
    },
    RuleRow {
        rule: Rule::InterventionsNotTried,
        applies: |f| f.impeding_learning && !f.tier1_tier2,
    },
    RuleRow {
        rule: Rule::ConcernsWithoutData,
        applies: |f| (f.iep_requested || f.multiple_settings) && !f.documented,
    },
    RuleRow {
        rule: Rule::TargetedSupportsFirst,
        applies: |f| f.documented && !f.tier1_tier2 && !f.safety_concern,
    },
    RuleRow {
        rule: Rule::EnvironmentalChangesFirst,
        applies: |f| !f.environmental_mods && f.documented,
    },
    RuleRow {
        rule: Rule::InsufficientData,
        applies: |f| !f.documented,
    },
    RuleRow {
        rule: Rule::TeamConsultationFallback,
        applies: |_| true,
    },
];

/// Stateless evaluator for the decision table.
pub struct DecisionEngine;

impl DecisionEngine {
    /// Returns the first rule whose predicate holds for `facts`.
    pub fn matching_rule(facts: &Facts) -> Rule {
        RULES
            .iter()
            .find(|row| (row.applies)(facts))
            .map(|row| row.rule)
            .unwrap_or(Rule::TeamConsultationFallback)
    }

    /// Returns every rule whose predicate holds, in priority order.
    ///
    /// The first element is the rule [`DecisionEngine::evaluate`] selects.
    pub fn all_matching_rules(facts: &Facts) -> Vec<Rule> {
        RULES
            .iter()
            .filter(|row| (row.applies)(facts))
            .map(|row| row.rule)
            .collect()
    }

    /// Evaluates a set of answers. Missing answers count as `false`.
    pub fn evaluate(answers: &AnswerSet) -> Recommendation {
        let facts = Facts::from(answers);
        let rule = Self::matching_rule(&facts);
        debug!(rule = ?rule, rule_number = rule.number(), "decision rule matched");
        rule.recommendation()
    }
}
