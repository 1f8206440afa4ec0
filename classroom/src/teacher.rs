use itertools::Itertools;
use rust_decimal::Decimal;
use tracing::debug;

use crate::classroom::ClassRoom;
use crate::error::{ClassroomError, Result};
use crate::grade::{StudentGrade, Tally};
use crate::student::Student;
use crate::types::{StudentName, TeacherName};

#[derive(Debug, Clone)]
pub struct Teacher {
    name: TeacherName,
    class_rooms: Vec<ClassRoom>,
}

impl Teacher {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: TeacherName::new(name),
            class_rooms: Vec::new(),
        }
    }

    pub fn name(&self) -> &TeacherName {
        &self.name
    }

    /// Number of classrooms taught.
    pub fn len(&self) -> usize {
        self.class_rooms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.class_rooms.is_empty()
    }

    pub fn class_rooms(&self) -> &[ClassRoom] {
        &self.class_rooms
    }

    pub fn add_class_rooms(&mut self, class_rooms: impl IntoIterator<Item = ClassRoom>) {
        self.class_rooms.extend(class_rooms);
        debug!(teacher = %self.name, total = self.class_rooms.len(), "added classrooms");
    }

    /// Pools the student's tallies over every classroom they are enrolled in.
    pub fn semester_tally_for(&self, student: &Student) -> Result<Tally> {
        let tallies: Vec<Tally> = self
            .class_rooms
            .iter()
            .filter(|class_room| class_room.is_enrolled(student))
            .map(|class_room| class_room.tally_for(student))
            .collect::<Result<_>>()?;

        if tallies.is_empty() {
            return Err(ClassroomError::UnknownStudent(student.name().clone()));
        }

        Ok(tallies.into_iter().sum())
    }

    /// The student's grade accumulated over all of this teacher's classrooms, keyed by their
    /// name. This is not the mean of the per-classroom grades: every assigned question weighs the
    /// same.
    pub fn semester_grade_for(&self, student: &Student) -> Result<StudentGrade> {
        let tally = self.semester_tally_for(student)?;
        Ok(tally.keyed_by(student.name().clone()))
    }

    /// Semester grade of every student taught, ordered by name.
    pub fn semester_report(&self) -> Result<Vec<(StudentName, Decimal)>> {
        self.class_rooms
            .iter()
            .flat_map(ClassRoom::students)
            .unique()
            .sorted_by(|a, b| a.name().cmp(b.name()))
            .map(|student| {
                let tally = self.semester_tally_for(student)?;
                Ok((student.name().clone(), tally.grade()))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use super::*;
    use crate::answer::Answer;
    use crate::question::Question;
    use crate::quiz::Quiz;

    #[test]
    fn len_counts_class_rooms_across_calls() {
        let mut teacher = Teacher::new("Ms. Frizzle");
        assert!(teacher.is_empty());

        teacher.add_class_rooms([ClassRoom::new()]);
        teacher.add_class_rooms((0..10).map(|_| ClassRoom::new()));

        assert_eq!(teacher.len(), 11);
    }

    #[test]
    fn semester_grade_pools_every_class_room() {
        let student = Student::new("Ann");
        let question = Rc::new(Question::new("1+1", 1, ["0", "2"]));

        let mut one_question = Quiz::new();
        one_question.add_questions([Rc::clone(&question)]);
        let mut three_questions = Quiz::new();
        three_questions.add_questions((0..3).map(|i| Question::new(format!("q{i}"), 0, ["a"])));

        let mut math = ClassRoom::new();
        math.add_students([student.clone()]).unwrap();
        math.assign_quiz([one_question], &student).unwrap();
        math.submit_answer(Answer::new(question, 1), &student).unwrap();

        let mut history = ClassRoom::new();
        history.add_students([student.clone()]).unwrap();
        history.assign_quiz([three_questions], &student).unwrap();

        let mut teacher = Teacher::new("Ms. Frizzle");
        teacher.add_class_rooms([math, history, ClassRoom::new()]);

        let grade = teacher.semester_grade_for(&student).unwrap();
        assert_eq!(grade[student.name()], Decimal::new(25, 2));
    }

    #[test]
    fn semester_grade_for_stranger_fails() {
        let mut teacher = Teacher::new("Ms. Frizzle");
        teacher.add_class_rooms([ClassRoom::new()]);

        assert_eq!(
            teacher.semester_grade_for(&Student::new("Stranger")),
            Err(ClassroomError::UnknownStudent("Stranger".into()))
        );
    }

    #[test]
    fn semester_report_lists_each_student_once() {
        let (ann, bob) = (Student::new("Ann"), Student::new("Bob"));
        let mut first = ClassRoom::new();
        first.add_students([bob.clone(), ann.clone()]).unwrap();
        let mut second = ClassRoom::new();
        second.add_students([ann.clone()]).unwrap();

        let mut teacher = Teacher::new("Ms. Frizzle");
        teacher.add_class_rooms([first, second]);

        let report = teacher.semester_report().unwrap();
        assert_eq!(
            report,
            vec![
                (ann.name().clone(), Decimal::ZERO),
                (bob.name().clone(), Decimal::ZERO),
            ]
        );
    }
}
