//! Answers collected by the wizard and the lookup the engine reads them through.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::question::QuestionId;
use crate::domain::foundation::ValidationError;

/// A single yes/no response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Answer {
    pub question_id: QuestionId,
    pub value: bool,
}

impl Answer {
    pub fn new(question_id: QuestionId, value: bool) -> Self {
        Self { question_id, value }
    }
}

/// Answers keyed by question id.
///
/// A question with no recorded answer reads as `false`. A later answer for
/// the same id replaces an earlier one.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AnswerSet(BTreeMap<QuestionId, bool>);

impl AnswerSet {
    /// Creates an empty set; every question reads as `false`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records an answer, returning the set for chaining.
    pub fn with(mut self, id: QuestionId, value: bool) -> Self {
        self.insert(id, value);
        self
    }

    pub fn insert(&mut self, id: QuestionId, value: bool) {
        self.0.insert(id, value);
    }

    /// Returns the answer for `id`, defaulting to `false` when missing.
    pub fn get(&self, id: QuestionId) -> bool {
        self.0.get(&id).copied().unwrap_or(false)
    }

    /// Returns true if `id` has an explicit answer.
    pub fn contains(&self, id: QuestionId) -> bool {
        self.0.contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Builds a set from wire keys.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidFormat` naming the first unknown key.
    pub fn from_keyed<K: AsRef<str>>(
        entries: impl IntoIterator<Item = (K, bool)>,
    ) -> Result<Self, ValidationError> {
        let mut set = AnswerSet::new();
        for (key, value) in entries {
            set.insert(key.as_ref().parse()?, value);
        }
        Ok(set)
    }

    /// Builds a set from a 7-bit mask, bit `i` answering question `i`.
    pub fn from_bits(bits: u8) -> Self {
        QuestionId::all()
            .iter()
            .fold(AnswerSet::new(), |set, id| {
                set.with(*id, bits & (1 << id.index()) != 0)
            })
    }
}

impl FromIterator<Answer> for AnswerSet {
    fn from_iter<I: IntoIterator<Item = Answer>>(iter: I) -> Self {
        let mut set = AnswerSet::new();
        for answer in iter {
            set.insert(answer.question_id, answer.value);
        }
        set
    }
}

impl<'a> FromIterator<&'a Answer> for AnswerSet {
    fn from_iter<I: IntoIterator<Item = &'a Answer>>(iter: I) -> Self {
        iter.into_iter().copied().collect()
    }
}
