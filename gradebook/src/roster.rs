//! A roster is a JSON description of one teacher's semester: the classrooms, who is enrolled in
//! each, the quizzes, who was assigned what, and every answer submitted. Loading a roster replays
//! it into the classroom model in that order.
//!
//! ```json
//! {
//!   "teacher": "Ms. Frizzle",
//!   "class_rooms": [{
//!     "name": "Math",
//!     "students": ["John"],
//!     "quizzes": [{
//!       "id": "addition",
//!       "questions": [{ "title": "1+1", "correct_choice": 1, "choices": ["1", "2", "4"] }]
//!     }],
//!     "assignments": [{ "student": "John", "quizzes": ["addition"] }],
//!     "submissions": [{ "student": "John", "quiz": "addition", "question": 0, "choice": 1 }]
//!   }]
//! }
//! ```

use std::collections::HashMap;
use std::fs;
use std::path::Path;
use std::rc::Rc;
use std::str::FromStr;

use anyhow::{bail, Context, Result};
use classroom::answer::Answer;
use classroom::classroom::ClassRoom;
use classroom::question::Question;
use classroom::quiz::Quiz;
use classroom::student::Student;
use classroom::teacher::Teacher;
use classroom::types::{ChoiceIndex, StudentName};
use serde::Deserialize;
use tracing::{debug, info, warn};

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Roster {
    teacher: String,
    #[serde(default)]
    class_rooms: Vec<ClassRoomEntry>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
struct ClassRoomEntry {
    name: String,
    #[serde(default)]
    students: Vec<StudentName>,
    #[serde(default)]
    quizzes: Vec<QuizEntry>,
    #[serde(default)]
    assignments: Vec<AssignmentEntry>,
    #[serde(default)]
    submissions: Vec<SubmissionEntry>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
struct QuizEntry {
    id: String,
    #[serde(default)]
    questions: Vec<QuestionEntry>,
}

// All three fields are required, like the arguments of `Question::new`.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
struct QuestionEntry {
    title: String,
    correct_choice: ChoiceIndex,
    choices: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
struct AssignmentEntry {
    student: StudentName,
    quizzes: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
struct SubmissionEntry {
    student: StudentName,
    quiz: String,
    /// Position of the question within the quiz.
    question: usize,
    choice: ChoiceIndex,
}

/// A teacher loaded from a roster, along with the names of their classrooms. Names are in the same
/// order as [`Teacher::class_rooms`].
#[derive(Debug, Clone)]
pub struct Gradebook {
    teacher: Teacher,
    class_room_names: Vec<String>,
}

impl Gradebook {
    pub fn teacher(&self) -> &Teacher {
        &self.teacher
    }

    pub fn class_room_names(&self) -> &[String] {
        &self.class_room_names
    }

    pub fn class_rooms(&self) -> impl Iterator<Item = (&str, &ClassRoom)> {
        self.class_room_names
            .iter()
            .map(String::as_str)
            .zip(self.teacher.class_rooms())
    }
}

impl Roster {
    pub fn from_path(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("could not read roster {}", path.display()))?;
        text.parse()
            .with_context(|| format!("could not parse roster {}", path.display()))
    }

    pub fn into_gradebook(self) -> Result<Gradebook> {
        let mut teacher = Teacher::new(self.teacher);
        let mut class_room_names = Vec::with_capacity(self.class_rooms.len());

        for entry in self.class_rooms {
            let name = entry.name.clone();
            let class_room = entry
                .into_class_room()
                .with_context(|| format!("invalid classroom \"{name}\""))?;
            debug!(%name, students = class_room.len(), "loaded classroom");

            teacher.add_class_rooms([class_room]);
            class_room_names.push(name);
        }

        info!(teacher = %teacher.name(), class_rooms = teacher.len(), "loaded roster");
        Ok(Gradebook {
            teacher,
            class_room_names,
        })
    }
}

impl FromStr for Roster {
    type Err = serde_json::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        serde_json::from_str(s)
    }
}

impl ClassRoomEntry {
    fn into_class_room(self) -> Result<ClassRoom> {
        let mut class_room = ClassRoom::new();
        class_room.add_students(self.students.into_iter().map(Student::from))?;

        let mut quizzes = HashMap::new();
        for entry in self.quizzes {
            let id = entry.id.clone();
            if quizzes.insert(id.clone(), entry.into_quiz()).is_some() {
                bail!("quiz id \"{id}\" is used more than once");
            }
        }

        for AssignmentEntry {
            student,
            quizzes: ids,
        } in self.assignments
        {
            let assigned: Vec<Quiz> = ids
                .iter()
                .map(|id| lookup_quiz(&quizzes, id).cloned())
                .collect::<Result<_>>()?;
            class_room.assign_quiz(assigned, &Student::from(student))?;
        }

        for SubmissionEntry {
            student,
            quiz,
            question,
            choice,
        } in self.submissions
        {
            let question = lookup_quiz(&quizzes, &quiz)?
                .questions()
                .get(question)
                .with_context(|| format!("quiz \"{quiz}\" has no question {question}"))?;
            let student = Student::from(student);
            if !class_room.is_assigned(question, &student)? {
                warn!(%student, %quiz, question = %question.title(), "answer to an unassigned question");
            }
            class_room.submit_answer(Answer::new(Rc::clone(question), choice.get()), &student)?;
        }

        Ok(class_room)
    }
}

impl QuizEntry {
    fn into_quiz(self) -> Quiz {
        let mut quiz = Quiz::new();
        for QuestionEntry {
            title,
            correct_choice,
            choices,
        } in self.questions
        {
            let question = Question::new(title, correct_choice.get(), choices);
            if let Err(err) = question.validate() {
                warn!(quiz = %self.id, %question, %err, "question cannot be answered correctly");
            }
            quiz.add_questions([question]);
        }
        quiz
    }
}

fn lookup_quiz<'a>(quizzes: &'a HashMap<String, Quiz>, id: &str) -> Result<&'a Quiz> {
    quizzes
        .get(id)
        .with_context(|| format!("unknown quiz \"{id}\""))
}
