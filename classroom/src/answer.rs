use std::rc::Rc;

use rust_decimal::Decimal;

use crate::question::Question;
use crate::types::ChoiceIndex;

#[derive(Debug, Clone)]
pub struct Answer {
    question: Rc<Question>,
    choice: ChoiceIndex,
}

impl Answer {
    pub fn new(question: Rc<Question>, choice: usize) -> Self {
        Self {
            question,
            choice: ChoiceIndex::new(choice),
        }
    }

    pub fn question(&self) -> &Rc<Question> {
        &self.question
    }

    pub fn choice(&self) -> ChoiceIndex {
        self.choice
    }

    /// Exactly one point for the correct choice, zero otherwise.
    pub fn grade(&self) -> Decimal {
        if self.question.is_correct_choice(self.choice) {
            Decimal::ONE
        } else {
            Decimal::ZERO
        }
    }
}
