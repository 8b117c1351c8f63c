//! Frequently asked questions shown alongside the matrix.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FaqEntry {
    pub question: &'static str,
    pub answer: &'static str,
}

static FAQ: [FaqEntry; 5] = [
    FaqEntry {
        question: "When is a Functional Behavior Assessment (FBA) required?",
        answer: "An FBA is typically required when: (1) behavior significantly impedes the student's or others' learning, (2) the behavior is a safety concern, (3) Tier 1 and Tier 2 interventions have been attempted without success, (4) the IEP team requests a behavior assessment, or (5) a manifestation determination review indicates the behavior is related to the disability.",
    },
    FaqEntry {
        question: "What should I try before conducting an FBA?",
        answer: "Before conducting a full FBA, schools should typically: (1) document the behavior for at least 2 weeks, (2) implement Tier 1 universal supports, (3) try Tier 2 targeted interventions, (4) attempt environmental modifications, (5) consult with the IEP team or behavior support team, and (6) ensure adequate baseline data collection.",
    },
    FaqEntry {
        question: "How do I know if I have enough data to conduct an FBA?",
        answer: "You should have: (1) at least 2 weeks of documented behavior data, (2) clear operational definitions of the target behavior, (3) information about when and where the behavior occurs, (4) data on what happens before and after the behavior, and (5) documentation of interventions already attempted.",
    },
    FaqEntry {
        question: "What is the difference between an FBA and Tier 2 interventions?",
        answer: "Tier 2 interventions are targeted, group-based supports (like check-in/check-out, social skills groups, or behavior contracts) that don't require a full functional assessment. An FBA is a comprehensive, individualized assessment process that identifies the function of behavior through systematic data collection and analysis.",
    },
    FaqEntry {
        question: "Can this decision matrix replace professional judgment?",
        answer: "No. This FBA Decision Matrix is a screening tool to guide your thinking and help organize your decision-making process. It should not replace professional judgment, team collaboration, or legal requirements. Always consult with your IEP team, behavior specialists, and school administrators.",
    },
];

pub fn entries() -> &'static [FaqEntry] {
    &FAQ
}
