//! Property tests for the decision table and the wizard flow.

use fba_decision_matrix::domain::foundation::WizardId;
use fba_decision_matrix::domain::matrix::{
    AnswerSet, DecisionEngine, Facts, QuestionId, RecommendationType, Rule, Wizard, WizardState,
};
use proptest::prelude::*;

#[derive(Debug, Clone, Copy)]
enum Step {
    Answer(bool),
    Back,
    Restart,
}

fn step() -> impl Strategy<Value = Step> {
    prop_oneof![
        4 => any::<bool>().prop_map(Step::Answer),
        1 => Just(Step::Back),
        1 => Just(Step::Restart),
    ]
}

fn apply(wizard: &mut Wizard, step: Step) {
    // rejected transitions leave the wizard unchanged
    let _ = match step {
        Step::Answer(value) => wizard.answer(value).map(|_| ()),
        Step::Back => wizard.back().map(|_| ()),
        Step::Restart => {
            wizard.restart();
            Ok(())
        }
    };
}

#[test]
fn every_input_yields_exactly_one_recommendation() {
    for bits in 0u8..128 {
        let answers = AnswerSet::from_bits(bits);
        let facts = Facts::from(&answers);
        let matching = DecisionEngine::all_matching_rules(&facts);

        assert!(!matching.is_empty());
        assert_eq!(matching.last(), Some(&Rule::TeamConsultationFallback));

        let rec = DecisionEngine::evaluate(&answers);
        assert_eq!(rec.rule, matching[0], "bits {:07b}", bits);
        assert!((5..=6).contains(&rec.next_steps.len()));
    }
}

#[test]
fn every_rule_fires_for_some_input() {
    let fired: Vec<Rule> = (0u8..128)
        .map(|bits| DecisionEngine::evaluate(&AnswerSet::from_bits(bits)).rule)
        .collect();
    for rule in Rule::all() {
        assert!(fired.contains(rule), "{:?} never fires", rule);
    }
}

#[test]
fn safety_shadows_rule_three() {
    let all_true = AnswerSet::from_bits(0b111_1111);
    assert_eq!(DecisionEngine::evaluate(&all_true).rule, Rule::SafetyWithHistory);

    let no_safety = all_true.clone().with(QuestionId::SafetyConcern, false);
    assert_eq!(
        DecisionEngine::evaluate(&no_safety).rule,
        Rule::IepRequestWithImpact
    );

    let rule_three_only = no_safety.with(QuestionId::IepRequested, false);
    assert_eq!(
        DecisionEngine::evaluate(&rule_three_only).rule,
        Rule::InterventionsExhausted
    );
}

proptest! {
    #[test]
    fn missing_answers_read_as_no(
        given in proptest::collection::btree_map(0usize..7, any::<bool>(), 0..7)
    ) {
        let mut partial = AnswerSet::new();
        let mut full = AnswerSet::new();
        for id in QuestionId::all() {
            let value = given.get(&id.index()).copied();
            if let Some(v) = value {
                partial.insert(*id, v);
            }
            full.insert(*id, value.unwrap_or(false));
        }
        prop_assert_eq!(DecisionEngine::evaluate(&partial), DecisionEngine::evaluate(&full));
    }

    #[test]
    fn undocumented_behavior_never_recommends_fba(bits in 0u8..128) {
        let answers = AnswerSet::from_bits(bits).with(QuestionId::Documented, false);
        let rec = DecisionEngine::evaluate(&answers);
        prop_assert_ne!(rec.kind, RecommendationType::FbaRecommended);
    }

    #[test]
    fn restart_then_same_answers_is_deterministic(
        history in proptest::collection::vec(step(), 0..30),
        values in proptest::array::uniform7(any::<bool>()),
    ) {
        let mut wizard = Wizard::new(WizardId::new());
        for s in history {
            apply(&mut wizard, s);
        }
        wizard.restart();
        prop_assert_eq!(wizard.state(), WizardState::Question(0));

        wizard.answer_all(values).unwrap();
        let expected = DecisionEngine::evaluate(&wizard.answers().iter().collect());
        prop_assert_eq!(wizard.recommendation(), Some(&expected));

        let mut fresh = Wizard::new(WizardId::new());
        fresh.answer_all(values).unwrap();
        prop_assert_eq!(fresh.recommendation(), wizard.recommendation());
    }

    #[test]
    fn wizard_answers_track_question_index(
        history in proptest::collection::vec(step(), 0..40)
    ) {
        let mut wizard = Wizard::new(WizardId::new());
        for s in history {
            apply(&mut wizard, s);
            match wizard.state() {
                WizardState::Question(i) => {
                    prop_assert_eq!(wizard.answers().len(), i);
                    prop_assert!(wizard.recommendation().is_none());
                }
                WizardState::Results => {
                    prop_assert_eq!(wizard.answers().len(), 7);
                    prop_assert!(wizard.recommendation().is_some());
                }
            }
        }
    }

    #[test]
    fn back_discards_only_the_last_answer(
        values in proptest::collection::vec(any::<bool>(), 2..7)
    ) {
        let mut wizard = Wizard::new(WizardId::new());
        wizard.answer_all(values.iter().copied()).unwrap();
        let before: Vec<_> = wizard.answers().to_vec();

        wizard.back().unwrap();
        prop_assert_eq!(wizard.answers(), &before[..before.len() - 1]);
        prop_assert_eq!(wizard.state(), WizardState::Question(values.len() - 1));
    }
}
