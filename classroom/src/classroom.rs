//! Enrollment, quiz assignment and answer submission for a single classroom.
//!
//! Students are keyed by name. Every enrolled student has exactly one (possibly empty) list of
//! assigned quizzes and one list of submitted answers, both created at enrollment. Nothing is ever
//! removed.
//!
//! Submissions are taken at face value: an answer is not checked against the student's assigned
//! quizzes, and answering the same question twice counts twice. A student can therefore end up
//! with a grade above one.

use std::collections::{HashMap, HashSet};

use itertools::Itertools;
use rust_decimal::Decimal;
use tracing::{debug, trace};

use crate::answer::Answer;
use crate::error::{ClassroomError, Result};
use crate::grade::{StudentGrade, Tally};
use crate::question::Question;
use crate::quiz::Quiz;
use crate::student::Student;
use crate::types::StudentName;

#[derive(Debug, Clone, Default)]
pub struct ClassRoom {
    students: Vec<Student>,
    assignments: HashMap<StudentName, Vec<Quiz>>,
    submissions: HashMap<StudentName, Vec<Answer>>,
}

impl ClassRoom {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of enrolled students.
    pub fn len(&self) -> usize {
        self.students.len()
    }

    pub fn is_empty(&self) -> bool {
        self.students.is_empty()
    }

    /// Enrolled students, in enrollment order.
    pub fn students(&self) -> &[Student] {
        &self.students
    }

    pub fn is_enrolled(&self, student: &Student) -> bool {
        self.assignments.contains_key(student.name())
    }

    /// Enrolls every student, or none of them if any name is already taken (including twice
    /// within `students`).
    pub fn add_students(&mut self, students: impl IntoIterator<Item = Student>) -> Result<()> {
        let students = students.into_iter().collect_vec();

        let mut seen = HashSet::new();
        if let Some(duplicate) = students
            .iter()
            .find(|student| self.is_enrolled(student) || !seen.insert(student.name()))
        {
            return Err(ClassroomError::DuplicateStudent(duplicate.name().clone()));
        }

        for student in students {
            debug!(name = %student.name(), "enrolling student");
            self.assignments.insert(student.name().clone(), Vec::new());
            self.submissions.insert(student.name().clone(), Vec::new());
            self.students.push(student);
        }

        Ok(())
    }

    /// Appends `quizzes` to the student's assigned list. The classroom keeps its own copies, so
    /// later edits to the caller's `Quiz` are not seen here; change assigned quizzes through
    /// [`ClassRoom::get_quizzes_for_mut`].
    pub fn assign_quiz(
        &mut self,
        quizzes: impl IntoIterator<Item = Quiz>,
        student: &Student,
    ) -> Result<()> {
        let assigned = lookup_mut(&mut self.assignments, student)?;
        let before = assigned.len();
        assigned.extend(quizzes);
        debug!(
            name = %student.name(),
            new = assigned.len() - before,
            total = assigned.len(),
            "assigned quizzes"
        );
        Ok(())
    }

    /// Quizzes assigned to `student`, in assignment order.
    pub fn get_quizzes_for(&self, student: &Student) -> Result<&[Quiz]> {
        lookup(&self.assignments, student).map(Vec::as_slice)
    }

    /// Mutable access to the quizzes assigned to `student`. Anything done through the returned
    /// list (adding questions to an assigned quiz, assigning more quizzes) is classroom state and
    /// is reflected in later grades.
    pub fn get_quizzes_for_mut(&mut self, student: &Student) -> Result<&mut Vec<Quiz>> {
        lookup_mut(&mut self.assignments, student)
    }

    /// Whether `question` belongs to one of the quizzes assigned to `student`. Submissions are
    /// not required to pass this check.
    pub fn is_assigned(&self, question: &Question, student: &Student) -> Result<bool> {
        Ok(self
            .get_quizzes_for(student)?
            .iter()
            .any(|quiz| quiz.contains(question)))
    }

    pub fn submit_answer(&mut self, answer: Answer, student: &Student) -> Result<()> {
        let answers = lookup_mut(&mut self.submissions, student)?;
        trace!(
            name = %student.name(),
            question = %answer.question().title(),
            choice = %answer.choice(),
            "submitting answer"
        );
        answers.push(answer);
        Ok(())
    }

    /// Answers submitted by `student`, in submission order.
    pub fn get_submissions_for(&self, student: &Student) -> Result<&[Answer]> {
        lookup(&self.submissions, student).map(Vec::as_slice)
    }

    pub fn tally_for(&self, student: &Student) -> Result<Tally> {
        let assigned: usize = self.get_quizzes_for(student)?.iter().map(Quiz::len).sum();
        let earned: Decimal = self
            .get_submissions_for(student)?
            .iter()
            .map(Answer::grade)
            .sum();
        Ok(Tally::new(earned, assigned))
    }

    /// The student's grade, keyed by their name.
    pub fn get_grade_for(&self, student: &Student) -> Result<StudentGrade> {
        let tally = self.tally_for(student)?;
        debug!(name = %student.name(), ?tally, "computed grade");
        Ok(tally.keyed_by(student.name().clone()))
    }
}

fn lookup<'a, T>(map: &'a HashMap<StudentName, Vec<T>>, student: &Student) -> Result<&'a Vec<T>> {
    map.get(student.name())
        .ok_or_else(|| ClassroomError::UnknownStudent(student.name().clone()))
}

fn lookup_mut<'a, T>(
    map: &'a mut HashMap<StudentName, Vec<T>>,
    student: &Student,
) -> Result<&'a mut Vec<T>> {
    map.get_mut(student.name())
        .ok_or_else(|| ClassroomError::UnknownStudent(student.name().clone()))
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use super::*;

    fn two_question_quiz() -> (Quiz, Rc<Question>, Rc<Question>) {
        let one_plus_one = Rc::new(Question::new("1+1", 1, ["1", "2", "4"]));
        let two_plus_two = Rc::new(Question::new("2+2", 0, ["4", "5"]));
        let mut quiz = Quiz::new();
        quiz.add_questions([Rc::clone(&one_plus_one), Rc::clone(&two_plus_two)]);
        (quiz, one_plus_one, two_plus_two)
    }

    #[test]
    fn len_counts_students_across_calls() {
        let mut class_room = ClassRoom::new();
        assert!(class_room.is_empty());

        class_room.add_students([Student::new("Ann")]).unwrap();
        class_room
            .add_students((0..10).map(|i| Student::new(format!("Student {i}"))))
            .unwrap();

        assert_eq!(class_room.len(), 11);
        assert_eq!(class_room.students()[0].name().as_str(), "Ann");
    }

    #[test]
    fn duplicate_enrollment_is_rejected_atomically() {
        let mut class_room = ClassRoom::new();
        class_room.add_students([Student::new("Ann")]).unwrap();

        let err = class_room
            .add_students([Student::new("Bob"), Student::new("Ann")])
            .unwrap_err();
        assert_eq!(err, ClassroomError::DuplicateStudent("Ann".into()));
        assert_eq!(class_room.len(), 1);
        assert!(!class_room.is_enrolled(&Student::new("Bob")));

        let err = class_room
            .add_students([Student::new("Cy"), Student::new("Cy")])
            .unwrap_err();
        assert_eq!(err, ClassroomError::DuplicateStudent("Cy".into()));
        assert_eq!(class_room.len(), 1);
    }

    #[test]
    fn unknown_student_is_a_lookup_error() {
        let mut class_room = ClassRoom::new();
        let stranger = Student::new("Stranger");
        let unknown = ClassroomError::UnknownStudent("Stranger".into());

        assert_eq!(
            class_room.assign_quiz([Quiz::new()], &stranger),
            Err(unknown.clone())
        );
        assert_eq!(class_room.get_quizzes_for(&stranger).unwrap_err(), unknown);
        assert_eq!(class_room.get_grade_for(&stranger), Err(unknown.clone()));

        let (_, question, _) = two_question_quiz();
        assert_eq!(
            class_room.submit_answer(Answer::new(question, 1), &stranger),
            Err(unknown)
        );
    }

    #[test]
    fn assigned_quizzes_come_back_in_order() {
        let mut class_room = ClassRoom::new();
        let student = Student::new("Ann");
        class_room.add_students([student.clone()]).unwrap();
        assert!(class_room.get_quizzes_for(&student).unwrap().is_empty());

        let (first, _, _) = two_question_quiz();
        let mut second = Quiz::new();
        second.add_questions([Question::new("3x3", 0, ["9"])]);

        class_room.assign_quiz([first], &student).unwrap();
        class_room.assign_quiz([second], &student).unwrap();

        let quizzes = class_room.get_quizzes_for(&student).unwrap();
        assert_eq!(quizzes.len(), 2);
        assert_eq!(quizzes[0].len(), 2);
        assert_eq!(quizzes[1].questions()[0].title().as_str(), "3x3");
    }

    #[test]
    fn grade_without_assignments_is_zero() {
        let mut class_room = ClassRoom::new();
        let student = Student::new("Ann");
        class_room.add_students([student.clone()]).unwrap();

        let (_, question, _) = two_question_quiz();
        class_room
            .submit_answer(Answer::new(question, 1), &student)
            .unwrap();

        let grade = class_room.get_grade_for(&student).unwrap();
        assert_eq!(grade, HashMap::from([("Ann".into(), Decimal::ZERO)]));
    }

    #[test]
    fn mutating_assigned_quizzes_changes_the_grade() {
        let mut class_room = ClassRoom::new();
        let student = Student::new("Ann");
        class_room.add_students([student.clone()]).unwrap();

        let question = Rc::new(Question::new("1+1", 1, ["0", "2", "5"]));
        let mut quiz = Quiz::new();
        quiz.add_questions([Rc::clone(&question)]);
        class_room.assign_quiz([quiz], &student).unwrap();
        class_room
            .submit_answer(Answer::new(question, 1), &student)
            .unwrap();
        assert_eq!(
            class_room.get_grade_for(&student).unwrap()[student.name()],
            Decimal::ONE
        );

        class_room.get_quizzes_for_mut(&student).unwrap()[0]
            .add_questions([Question::new("3x3", 0, ["9", "6"])]);

        assert_eq!(
            class_room.get_grade_for(&student).unwrap()[student.name()],
            Decimal::new(5, 1)
        );
    }

    #[test]
    fn tally_reports_both_operands() {
        let mut class_room = ClassRoom::new();
        let student = Student::new("Ann");
        class_room.add_students([student.clone()]).unwrap();

        let (quiz, one_plus_one, two_plus_two) = two_question_quiz();
        class_room.assign_quiz([quiz.clone(), quiz], &student).unwrap();
        class_room
            .submit_answer(Answer::new(one_plus_one, 1), &student)
            .unwrap();
        class_room
            .submit_answer(Answer::new(two_plus_two, 1), &student)
            .unwrap();

        let tally = class_room.tally_for(&student).unwrap();
        assert_eq!(tally, Tally::new(Decimal::ONE, 4));
        assert_eq!(class_room.get_submissions_for(&student).unwrap().len(), 2);
    }

    #[test]
    fn is_assigned_only_knows_assigned_questions() {
        let mut class_room = ClassRoom::new();
        let student = Student::new("Ann");
        class_room.add_students([student.clone()]).unwrap();

        let (quiz, one_plus_one, _) = two_question_quiz();
        let lookalike = Question::new("1+1", 1, ["1", "2", "4"]);
        assert!(!class_room.is_assigned(&one_plus_one, &student).unwrap());

        class_room.assign_quiz([quiz], &student).unwrap();
        assert!(class_room.is_assigned(&one_plus_one, &student).unwrap());
        assert!(!class_room.is_assigned(&lookalike, &student).unwrap());
        assert_eq!(
            class_room.is_assigned(&lookalike, &Student::new("Bob")),
            Err(ClassroomError::UnknownStudent("Bob".into()))
        );
    }
}
