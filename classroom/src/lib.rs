//! In-memory model of classrooms, quizzes and grades.
//!
//! A [`Teacher`](teacher::Teacher) owns [`ClassRoom`](classroom::ClassRoom)s. A classroom enrolls
//! students, assigns them quizzes and records the answers they submit. A student's grade is the
//! number of correct answers submitted divided by the number of questions assigned, computed with
//! exact decimals.

pub mod answer;
pub mod classroom;
pub mod error;
pub mod factory;
pub mod grade;
pub mod question;
pub mod quiz;
pub mod student;
pub mod teacher;
pub mod types;

pub use error::{ClassroomError, Result};
