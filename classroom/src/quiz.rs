use std::ptr;
use std::rc::Rc;

use crate::question::Question;

/// An ordered list of questions. Questions are shared with the answers that refer to them, so a
/// quiz holds them behind [`Rc`].
#[derive(Debug, Clone, Default)]
pub struct Quiz {
    questions: Vec<Rc<Question>>,
}

impl Quiz {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of questions.
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn questions(&self) -> &[Rc<Question>] {
        &self.questions
    }

    pub fn add_questions<Q>(&mut self, questions: Q)
    where
        Q: IntoIterator,
        Q::Item: Into<Rc<Question>>,
    {
        self.questions.extend(questions.into_iter().map(Into::into));
    }

    /// Whether this exact question (not just an equal one) is part of the quiz.
    pub fn contains(&self, question: &Question) -> bool {
        self.questions
            .iter()
            .any(|own| ptr::eq(Rc::as_ptr(own), question))
    }
}
