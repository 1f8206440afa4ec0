//! Construction helpers with defaults, for tests and quick setups.
//!
//! Parameters are plain structs implementing [`Default`], so callers override only what they care
//! about:
//!
//! ```
//! use classroom::factory::{create_question, QuestionParams};
//!
//! let question = create_question(QuestionParams {
//!     title: "2+2?".to_owned(),
//!     ..Default::default()
//! });
//! assert_eq!(question.len(), 3);
//! ```

use crate::classroom::ClassRoom;
use crate::question::Question;
use crate::quiz::Quiz;
use crate::student::Student;
use crate::teacher::Teacher;

pub const DEFAULT_QUESTION_TITLE: &str = "1+1";
pub const DEFAULT_CORRECT_CHOICE: usize = 1;
pub const DEFAULT_CHOICES: [&str; 3] = ["0", "2", "5"];
pub const DEFAULT_STUDENT_NAME: &str = "Default Student";
pub const DEFAULT_TEACHER_NAME: &str = "Default Teacher";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionParams {
    pub title: String,
    pub correct_choice: usize,
    pub choices: Vec<String>,
}

impl Default for QuestionParams {
    fn default() -> Self {
        Self {
            title: DEFAULT_QUESTION_TITLE.to_owned(),
            correct_choice: DEFAULT_CORRECT_CHOICE,
            choices: DEFAULT_CHOICES.map(str::to_owned).to_vec(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StudentParams {
    pub name: String,
}

impl Default for StudentParams {
    fn default() -> Self {
        Self {
            name: DEFAULT_STUDENT_NAME.to_owned(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TeacherParams {
    pub name: String,
}

impl Default for TeacherParams {
    fn default() -> Self {
        Self {
            name: DEFAULT_TEACHER_NAME.to_owned(),
        }
    }
}

pub fn create_question(params: QuestionParams) -> Question {
    Question::new(params.title, params.correct_choice, params.choices)
}

pub fn create_classroom() -> ClassRoom {
    ClassRoom::new()
}

pub fn create_quiz() -> Quiz {
    Quiz::new()
}

pub fn create_student(params: StudentParams) -> Student {
    Student::new(params.name)
}

pub fn create_teacher(params: TeacherParams) -> Teacher {
    Teacher::new(params.name)
}
