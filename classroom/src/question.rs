use std::fmt;

use itertools::Itertools;

use crate::error::{ClassroomError, Result};
use crate::types::{ChoiceIndex, QuestionTitle};

/// A multiple-choice question with exactly one correct choice.
///
/// The correct choice is not checked against the list of choices when the question is created,
/// since more choices may be added afterwards. Use [`Question::validate`] once the choices are
/// final.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    title: QuestionTitle,
    choices: Vec<String>,
    correct_choice: ChoiceIndex,
}

impl Question {
    pub fn new<C>(title: impl Into<String>, correct_choice: usize, choices: C) -> Self
    where
        C: IntoIterator,
        C::Item: Into<String>,
    {
        Self {
            title: QuestionTitle::new(title),
            choices: choices.into_iter().map(Into::into).collect(),
            correct_choice: ChoiceIndex::new(correct_choice),
        }
    }

    pub fn builder() -> QuestionBuilder {
        QuestionBuilder::default()
    }

    pub fn title(&self) -> &QuestionTitle {
        &self.title
    }

    pub fn choices(&self) -> &[String] {
        &self.choices
    }

    pub fn correct_choice(&self) -> ChoiceIndex {
        self.correct_choice
    }

    /// Number of choices.
    pub fn len(&self) -> usize {
        self.choices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.choices.is_empty()
    }

    pub fn add_choices<C>(&mut self, choices: C)
    where
        C: IntoIterator,
        C::Item: Into<String>,
    {
        self.choices.extend(choices.into_iter().map(Into::into));
    }

    pub fn is_correct_choice(&self, choice: ChoiceIndex) -> bool {
        choice == self.correct_choice
    }

    pub fn validate(&self) -> Result<()> {
        if self.correct_choice.get() < self.choices.len() {
            Ok(())
        } else {
            Err(ClassroomError::ChoiceOutOfRange {
                index: self.correct_choice,
                len: self.choices.len(),
            })
        }
    }
}

impl fmt::Display for Question {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} [{}]", self.title, self.choices.iter().format(", "))
    }
}

/// Builds a [`Question`] one field at a time. Every field is required; `build` reports the first
/// one that was never set.
#[derive(Debug, Clone, Default)]
pub struct QuestionBuilder {
    title: Option<String>,
    correct_choice: Option<usize>,
    choices: Option<Vec<String>>,
}

impl QuestionBuilder {
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn correct_choice(mut self, correct_choice: usize) -> Self {
        self.correct_choice = Some(correct_choice);
        self
    }

    pub fn choices<C>(mut self, choices: C) -> Self
    where
        C: IntoIterator,
        C::Item: Into<String>,
    {
        self.choices = Some(choices.into_iter().map(Into::into).collect());
        self
    }

    pub fn build(self) -> Result<Question> {
        let title = self.title.ok_or(ClassroomError::MissingField("title"))?;
        let correct_choice = self
            .correct_choice
            .ok_or(ClassroomError::MissingField("correct_choice"))?;
        let choices = self.choices.ok_or(ClassroomError::MissingField("choices"))?;

        Ok(Question::new(title, correct_choice, choices))
    }
}
