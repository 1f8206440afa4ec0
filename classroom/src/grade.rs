//! Grades are kept as exact decimals. A [`Tally`] keeps the two operands of a grade apart so that
//! tallies from several classrooms can be pooled before dividing.

use std::collections::HashMap;
use std::iter::Sum;

use rust_decimal::Decimal;

use crate::types::StudentName;

/// A grade keyed by the name of the student it belongs to. Always holds exactly one entry.
pub type StudentGrade = HashMap<StudentName, Decimal>;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Tally {
    earned: Decimal,
    assigned: usize,
}

impl Tally {
    pub fn new(earned: Decimal, assigned: usize) -> Self {
        Self { earned, assigned }
    }

    /// Sum of the grades of every submitted answer.
    pub fn earned(&self) -> Decimal {
        self.earned
    }

    /// Number of questions across every assigned quiz.
    pub fn assigned(&self) -> usize {
        self.assigned
    }

    pub fn merge(self, other: Self) -> Self {
        Self {
            earned: self.earned + other.earned,
            assigned: self.assigned + other.assigned,
        }
    }

    /// Earned over assigned, or zero when nothing is assigned. Not clamped: extra correct
    /// submissions can push this above one.
    pub fn grade(&self) -> Decimal {
        if self.assigned == 0 {
            Decimal::ZERO
        } else {
            self.earned / Decimal::from(self.assigned)
        }
    }

    pub fn keyed_by(&self, name: StudentName) -> StudentGrade {
        HashMap::from([(name, self.grade())])
    }
}

impl Sum for Tally {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::default(), Self::merge)
    }
}
