use thiserror::Error;

use crate::types::{ChoiceIndex, StudentName};

pub type Result<T, E = ClassroomError> = std::result::Result<T, E>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClassroomError {
    #[error("missing required field `{0}`")]
    MissingField(&'static str),

    #[error("student \"{0}\" is not enrolled")]
    UnknownStudent(StudentName),

    #[error("student \"{0}\" is already enrolled")]
    DuplicateStudent(StudentName),

    #[error("correct choice {index} is out of range for a question with {len} choices")]
    ChoiceOutOfRange { index: ChoiceIndex, len: usize },
}
